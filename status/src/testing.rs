//! In-memory `SourceControl` that records every call, for probe and resolver tests.

use std::{collections::HashMap, sync::Mutex};

use domain::{CheckState, Reference};
use source_control::{
    CheckRun, CheckSuite, CheckSuiteApp, CombinedStatus, SourceControl, StatusContext,
};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FakeError {
    #[error("transport failure")]
    Transport,
    #[error("malformed response")]
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailOn {
    CombinedStatus(FakeError),
    CheckSuites(FakeError),
    CheckRuns(u64, FakeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    GetCombinedStatus,
    ListCheckSuites,
    ListCheckRuns(u64),
}

pub struct FakeSourceControl {
    combined_status: CombinedStatus,
    check_suites: Vec<CheckSuite>,
    check_runs: HashMap<u64, Vec<CheckRun>>,
    fail_on: Option<FailOn>,
    operations: Mutex<Vec<Operation>>,
}

/// A forge on which neither mechanism was ever used.
impl Default for FakeSourceControl {
    fn default() -> Self {
        Self {
            combined_status: CombinedStatus {
                state: CheckState::Pending,
                statuses: vec![],
            },
            check_suites: vec![],
            check_runs: HashMap::new(),
            fail_on: None,
            operations: Mutex::new(vec![]),
        }
    }
}

impl FakeSourceControl {
    pub fn with_combined_status(
        mut self,
        state: CheckState,
        statuses: Vec<StatusContext>,
    ) -> Self {
        self.combined_status = CombinedStatus { state, statuses };
        self
    }

    pub fn with_check_suite(mut self, suite: CheckSuite, runs: Vec<CheckRun>) -> Self {
        self.check_runs.insert(suite.id, runs);
        self.check_suites.push(suite);
        self
    }

    pub fn failing_on(mut self, fail_on: FailOn) -> Self {
        self.fail_on = Some(fail_on);
        self
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.operations.lock().unwrap().clone()
    }

    pub fn count(&self, operation: &Operation) -> usize {
        self.operations
            .lock()
            .unwrap()
            .iter()
            .filter(|recorded| *recorded == operation)
            .count()
    }

    fn record(&self, operation: Operation) {
        self.operations.lock().unwrap().push(operation);
    }
}

impl SourceControl for FakeSourceControl {
    type Error = FakeError;

    async fn get_combined_status(&self, _: &Reference) -> Result<CombinedStatus, Self::Error> {
        self.record(Operation::GetCombinedStatus);

        match &self.fail_on {
            Some(FailOn::CombinedStatus(error)) => Err(error.clone()),
            _ => Ok(self.combined_status.clone()),
        }
    }

    async fn list_check_suites(&self, _: &Reference) -> Result<Vec<CheckSuite>, Self::Error> {
        self.record(Operation::ListCheckSuites);

        match &self.fail_on {
            Some(FailOn::CheckSuites(error)) => Err(error.clone()),
            _ => Ok(self.check_suites.clone()),
        }
    }

    async fn list_check_runs(
        &self,
        _: &Reference,
        check_suite_id: u64,
    ) -> Result<Vec<CheckRun>, Self::Error> {
        self.record(Operation::ListCheckRuns(check_suite_id));

        match &self.fail_on {
            Some(FailOn::CheckRuns(id, error)) if *id == check_suite_id => Err(error.clone()),
            _ => Ok(self
                .check_runs
                .get(&check_suite_id)
                .cloned()
                .unwrap_or_default()),
        }
    }
}

pub fn reference() -> Reference {
    Reference::new("AlCalzone", "ioBroker.zwave2", "master").unwrap()
}

pub fn context(state: CheckState, url: &str) -> StatusContext {
    StatusContext {
        state,
        status: state.to_string(),
        context: "continuous-integration/travis-ci".to_owned(),
        target_url: Some(url.to_owned()),
    }
}

pub fn suite(id: u64, app: &str, status: &str, conclusion: Option<&str>) -> CheckSuite {
    CheckSuite {
        id,
        status: Some(status.to_owned()),
        conclusion: conclusion.map(str::to_owned),
        url: format!("https://api.github.com/repos/AlCalzone/ioBroker.zwave2/check-suites/{id}"),
        app: Some(CheckSuiteApp {
            name: app.to_owned(),
        }),
    }
}

pub fn run(details_url: &str) -> CheckRun {
    CheckRun {
        details_url: Some(details_url.to_owned()),
    }
}
