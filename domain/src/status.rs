use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Success,
    #[serde(alias = "error")]
    Failure,
    Pending,
}

impl CheckState {
    /// Folds entry states into one: any `Pending` wins, then any `Failure`.
    /// Returns `None` when there is nothing to fold.
    pub fn cumulative(states: impl IntoIterator<Item = CheckState>) -> Option<CheckState> {
        states.into_iter().fold(None, |cumulative, state| {
            Some(match (cumulative, state) {
                (Some(CheckState::Pending), _) | (_, CheckState::Pending) => CheckState::Pending,
                (Some(CheckState::Failure), _) | (_, CheckState::Failure) => CheckState::Failure,
                _ => CheckState::Success,
            })
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckState::Success => "success",
            CheckState::Failure => "failure",
            CheckState::Pending => "pending",
        }
    }
}

impl Display for CheckState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

/// One named sub-check. `status` is the label exactly as the forge reported it
/// (e.g. `in_progress` for a check suite), `state` its normalized form.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct CheckEntry {
    pub name: String,
    pub state: CheckState,
    pub status: String,
    pub url: String,
}

#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct AggregateStatus {
    status: CheckState,
    checks: Vec<CheckEntry>,
}

impl AggregateStatus {
    /// Takes `status` as reported by the source. No status exists without at
    /// least one check.
    pub fn new(status: CheckState, checks: Vec<CheckEntry>) -> Option<Self> {
        if checks.is_empty() {
            return None;
        }

        Some(Self { status, checks })
    }

    pub fn from_checks(checks: Vec<CheckEntry>) -> Option<Self> {
        let status = CheckState::cumulative(checks.iter().map(|check| check.state))?;

        Some(Self { status, checks })
    }

    pub fn status(&self) -> CheckState {
        self.status
    }

    pub fn checks(&self) -> &[CheckEntry] {
        &self.checks
    }
}
