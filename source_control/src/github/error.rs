use jsonwebtoken::errors::Error as JwtError;
use octocrab::Error as OctocrabError;
use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error(transparent)]
    Octocrab(#[from] OctocrabError),
    #[error(transparent)]
    JWT(#[from] JwtError),
    #[error(transparent)]
    UrlParse(#[from] ParseError),
    #[error("unexpected response from {route}: {source}")]
    MalformedResponse {
        route: String,
        #[source]
        source: serde_json::Error,
    },
}
