use domain::{AggregateStatus, CheckEntry, CheckState, CiProviders, Reference};
use futures::{stream, StreamExt, TryStreamExt};
use source_control::{CheckRun, CheckSuite, SourceControl};
use tracing::debug;

pub const DEFAULT_CONCURRENCY: usize = 4;

/// Reads the check suites reported by recognized CI providers.
pub struct CheckSuiteProbe<'a, S> {
    source_control: &'a S,
    providers: &'a CiProviders,
    concurrency: usize,
}

impl<'a, S: SourceControl> CheckSuiteProbe<'a, S> {
    pub fn new(source_control: &'a S, providers: &'a CiProviders) -> Self {
        Self {
            source_control,
            providers,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Upper bound of check run requests in flight at once.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub async fn probe(&self, reference: &Reference) -> Result<Option<AggregateStatus>, S::Error> {
        let suites: Vec<_> = self
            .source_control
            .list_check_suites(reference)
            .await?
            .into_iter()
            .filter(|suite| match &suite.app {
                Some(app) if self.providers.contains(&app.name) => true,
                Some(app) => {
                    debug!(suite = suite.id, "ignoring check suite of {}", app.name);
                    false
                }
                None => {
                    debug!(suite = suite.id, "ignoring check suite without app");
                    false
                }
            })
            .collect();

        if suites.is_empty() {
            debug!("no check suites from CI providers for {reference}");
            return Ok(None);
        }

        let source_control = self.source_control;

        // `buffered` yields in input order, so entries follow the suite order.
        let checks: Vec<_> = stream::iter(suites)
            .map(|suite| async move {
                let runs = source_control.list_check_runs(reference, suite.id).await?;
                Ok::<_, S::Error>(check_entry(suite, runs))
            })
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        Ok(AggregateStatus::from_checks(checks))
    }
}

fn check_entry(suite: CheckSuite, runs: Vec<CheckRun>) -> CheckEntry {
    let state = if suite.is_running() {
        CheckState::Pending
    } else if suite.is_successful() {
        CheckState::Success
    } else {
        CheckState::Failure
    };

    let url = runs
        .into_iter()
        .next()
        .and_then(|run| run.details_url)
        .unwrap_or(suite.url);

    CheckEntry {
        name: suite.app.map(|app| app.name).unwrap_or_default(),
        state,
        status: suite.status.unwrap_or_default(),
        url,
    }
}
