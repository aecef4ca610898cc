use domain::{AggregateStatus, CheckEntry, CheckState, Reference};
use source_control::SourceControl;
use tracing::debug;

/// Reads the combined commit status.
pub struct LegacyStatusProbe<'a, S> {
    source_control: &'a S,
}

impl<'a, S: SourceControl> LegacyStatusProbe<'a, S> {
    pub fn new(source_control: &'a S) -> Self {
        Self { source_control }
    }

    pub async fn probe(&self, reference: &Reference) -> Result<Option<AggregateStatus>, S::Error> {
        let combined = self.source_control.get_combined_status(reference).await?;

        // A pending status without contexts is what the forge reports when
        // nothing ever posted a status for the ref.
        if combined.state == CheckState::Pending && combined.statuses.is_empty() {
            debug!("no commit statuses for {reference}");
            return Ok(None);
        }

        let checks = combined
            .statuses
            .into_iter()
            .map(|context| CheckEntry {
                name: context.context,
                state: context.state,
                status: context.status,
                url: context.target_url.unwrap_or_default(),
            })
            .collect();

        Ok(AggregateStatus::new(combined.state, checks))
    }
}
