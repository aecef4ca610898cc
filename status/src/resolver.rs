use std::fmt::Display;

use domain::{AggregateStatus, CiProviders, Reference};
use source_control::SourceControl;
use tracing::info;

use crate::probe::{CheckSuiteProbe, LegacyStatusProbe, DEFAULT_CONCURRENCY};

/// The mechanism a status was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusSource {
    CombinedStatus,
    CheckSuites,
}

impl Display for StatusSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusSource::CombinedStatus => "combined status".fmt(f),
            StatusSource::CheckSuites => "check suites".fmt(f),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub source: StatusSource,
    pub status: AggregateStatus,
}

/// Tries the combined status first and falls back to check suites only when
/// the combined status has nothing for the reference.
pub struct StatusResolver<S> {
    source_control: S,
    providers: CiProviders,
    concurrency: usize,
}

impl<S: SourceControl> StatusResolver<S> {
    pub fn new(source_control: S, providers: CiProviders) -> Self {
        Self {
            source_control,
            providers,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// `Ok(None)` means neither mechanism knows about `reference`.
    pub async fn resolve(&self, reference: &Reference) -> Result<Option<Resolution>, S::Error> {
        if let Some(status) = LegacyStatusProbe::new(&self.source_control)
            .probe(reference)
            .await?
        {
            return Ok(Some(self.resolved(reference, StatusSource::CombinedStatus, status)));
        }

        let status = CheckSuiteProbe::new(&self.source_control, &self.providers)
            .with_concurrency(self.concurrency)
            .probe(reference)
            .await?;

        Ok(status.map(|status| self.resolved(reference, StatusSource::CheckSuites, status)))
    }

    fn resolved(
        &self,
        reference: &Reference,
        source: StatusSource,
        status: AggregateStatus,
    ) -> Resolution {
        info!(
            checks = status.checks().len(),
            "{reference} is {} according to {source}",
            status.status()
        );

        Resolution { source, status }
    }
}
