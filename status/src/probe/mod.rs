mod check_suite;
mod legacy;

pub use check_suite::{CheckSuiteProbe, DEFAULT_CONCURRENCY};
pub use legacy::LegacyStatusProbe;
