use std::future::Future;

use domain::{CheckState, Reference};
use serde::Deserialize;

/// Read access to the two CI status mechanisms of a code forge.
pub trait SourceControl {
    type Error: std::error::Error;

    fn get_combined_status(
        &self,
        reference: &Reference,
    ) -> impl Future<Output = Result<CombinedStatus, Self::Error>> + Send;

    /// First page of the check suites attached to `reference`.
    fn list_check_suites(
        &self,
        reference: &Reference,
    ) -> impl Future<Output = Result<Vec<CheckSuite>, Self::Error>> + Send;

    /// First page of the check runs of one suite.
    fn list_check_runs(
        &self,
        reference: &Reference,
        check_suite_id: u64,
    ) -> impl Future<Output = Result<Vec<CheckRun>, Self::Error>> + Send;
}

#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CombinedStatus {
    pub state: CheckState,
    pub statuses: Vec<StatusContext>,
}

#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(try_from = "RawStatusContext")]
pub struct StatusContext {
    pub state: CheckState,
    /// The state as reported, so `error` is kept apart from `failure`.
    pub status: String,
    pub context: String,
    pub target_url: Option<String>,
}

#[derive(Deserialize)]
struct RawStatusContext {
    state: String,
    #[serde(default)]
    context: String,
    target_url: Option<String>,
}

impl TryFrom<RawStatusContext> for StatusContext {
    type Error = serde_json::Error;

    fn try_from(raw: RawStatusContext) -> Result<Self, Self::Error> {
        let state = serde_json::from_value(serde_json::Value::String(raw.state.clone()))?;

        Ok(StatusContext {
            state,
            status: raw.state,
            context: raw.context,
            target_url: raw.target_url,
        })
    }
}

#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CheckSuiteList {
    pub check_suites: Vec<CheckSuite>,
}

#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CheckSuite {
    pub id: u64,
    pub status: Option<String>,
    pub conclusion: Option<String>,
    pub url: String,
    /// `None` for suites of apps that are no longer installed.
    pub app: Option<CheckSuiteApp>,
}

#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CheckSuiteApp {
    pub name: String,
}

impl CheckSuite {
    pub fn is_running(&self) -> bool {
        matches!(self.status.as_deref(), Some("queued" | "in_progress"))
    }

    pub fn is_successful(&self) -> bool {
        self.conclusion.as_deref() == Some("success")
    }
}

#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CheckRunList {
    pub check_runs: Vec<CheckRun>,
}

#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CheckRun {
    pub details_url: Option<String>,
}

pub mod github;
