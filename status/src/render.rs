use itertools::Itertools;

use crate::resolver::Resolution;

/// Prints `unknown` when no mechanism reported anything.
pub fn text(resolution: Option<&Resolution>) -> String {
    let Some(Resolution { source, status }) = resolution else {
        return "unknown".to_owned();
    };

    let checks = status
        .checks()
        .iter()
        .map(|check| {
            format!(
                "{:<8} {:<12} {}  {}",
                check.state, check.status, check.name, check.url
            )
        })
        .join("\n");

    format!("{} (from {source})\n{checks}", status.status())
}

pub fn json(resolution: Option<&Resolution>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&resolution.map(|resolution| &resolution.status))
}
