use std::{collections::BTreeSet, str::FromStr};

use thiserror::Error;

pub const DEFAULT_CI_PROVIDERS: [&str; 4] = ["GitHub Actions", "Travis CI", "AppVeyor", "CircleCI"];

/// Names of the check-suite applications that count as CI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CiProviders {
    names: BTreeSet<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("at least one CI provider is required")]
    Empty,
    #[error("CI provider names must not be blank")]
    BlankName,
}

impl CiProviders {
    pub fn new<I, S>(names: I) -> Result<Self, ProviderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| match name.as_ref().trim() {
                "" => Err(ProviderError::BlankName),
                name => Ok(name.to_owned()),
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        if names.is_empty() {
            return Err(ProviderError::Empty);
        }

        Ok(Self { names })
    }

    pub fn contains(&self, app_name: &str) -> bool {
        self.names.contains(app_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for CiProviders {
    fn default() -> Self {
        Self {
            names: DEFAULT_CI_PROVIDERS.iter().map(|name| (*name).to_owned()).collect(),
        }
    }
}

impl FromStr for CiProviders {
    type Err = ProviderError;

    /// Parses a comma separated list, e.g. `GitHub Actions,CircleCI`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CiProviders::new(s.split(','))
    }
}
