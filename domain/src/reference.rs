use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// A branch, tag or commit within a repository on the forge.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    owner: String,
    repo: String,
    r#ref: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("expected owner/repo@ref, got {0}")]
    Malformed(String),
}

impl Reference {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        r#ref: impl Into<String>,
    ) -> Result<Self, ReferenceError> {
        let owner = non_empty("owner", owner.into())?;
        let repo = non_empty("repo", repo.into())?;
        let r#ref = non_empty("ref", r#ref.into())?;

        Ok(Self { owner, repo, r#ref })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn r#ref(&self) -> &str {
        &self.r#ref
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, ReferenceError> {
    if value.trim().is_empty() {
        Err(ReferenceError::Empty(field))
    } else {
        Ok(value)
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.repo, self.r#ref)
    }
}

impl FromStr for Reference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (repository, r#ref) = s
            .split_once('@')
            .ok_or_else(|| ReferenceError::Malformed(s.to_owned()))?;
        let (owner, repo) = repository
            .split_once('/')
            .ok_or_else(|| ReferenceError::Malformed(s.to_owned()))?;

        Reference::new(owner, repo, r#ref)
    }
}
