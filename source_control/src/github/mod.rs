pub mod error;

use crate::{CheckRun, CheckRunList, CheckSuite, CheckSuiteList, CombinedStatus, SourceControl};
use domain::Reference;
use jsonwebtoken::EncodingKey;
use octocrab::{models::AppId, service::middleware::retry::RetryConfig, Octocrab};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use self::error::GitHubError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub enum Credentials {
    Anonymous,
    Token(SecretString),
    App {
        app_id: u64,
        private_key: SecretString,
    },
}

pub struct GitHub {
    octocrab: Octocrab,
    is_app: bool,
}

impl GitHub {
    pub fn build(credentials: &Credentials, api_url: Option<&str>) -> Result<Self, GitHubError> {
        let mut builder = Octocrab::builder();
        builder.add_retry_config(RetryConfig::None);

        if let Some(api_url) = api_url {
            let api_url = Url::parse(api_url)?;
            builder = builder.base_uri(api_url.as_str())?;
        }

        let builder = match credentials {
            Credentials::Anonymous => builder,
            Credentials::Token(token) => builder.personal_token(token.expose_secret().to_owned()),
            Credentials::App {
                app_id,
                private_key,
            } => builder.app(
                AppId(*app_id),
                EncodingKey::from_rsa_pem(private_key.expose_secret().as_bytes())?,
            ),
        };

        Ok(Self {
            octocrab: builder.build()?,
            is_app: matches!(credentials, Credentials::App { .. }),
        })
    }

    /// GitHub Apps have to act through the installation on the repository.
    /// Other credentials are returned unchanged.
    pub async fn for_repository(self, owner: &str, repo: &str) -> Result<Self, GitHubError> {
        if !self.is_app {
            return Ok(self);
        }

        let installation = self
            .octocrab
            .apps()
            .get_repository_installation(owner, repo)
            .await?;

        debug!(
            installation = installation.id.0,
            "using app installation for {owner}/{repo}"
        );

        let (octocrab, _) = self
            .octocrab
            .installation_and_token(installation.id)
            .await?;

        Ok(Self {
            octocrab,
            is_app: false,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, route: String) -> Result<T, GitHubError> {
        debug!("GET {route}");

        let body: serde_json::Value = self.octocrab.get(&route, None::<&()>).await?;

        serde_json::from_value(body)
            .map_err(|source| GitHubError::MalformedResponse { route, source })
    }
}

/// Joins `segments` into an absolute route, percent-encoding each of them so
/// that refs like `fix#1` stay a single path segment.
fn route<'a>(segments: impl IntoIterator<Item = &'a str>) -> Result<String, GitHubError> {
    let mut api_url = Url::parse(DEFAULT_API_URL)?;
    api_url
        .path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .clear()
        .extend(segments);

    Ok(api_url.path().to_owned())
}

/// Branch names keep their `/` as separate segments.
fn commit_route(reference: &Reference, endpoint: &str) -> Result<String, GitHubError> {
    route(
        ["repos", reference.owner(), reference.repo(), "commits"]
            .into_iter()
            .chain(reference.r#ref().split('/'))
            .chain([endpoint]),
    )
}

impl SourceControl for GitHub {
    type Error = GitHubError;

    async fn get_combined_status(
        &self,
        reference: &Reference,
    ) -> Result<CombinedStatus, Self::Error> {
        self.fetch(commit_route(reference, "status")?).await
    }

    async fn list_check_suites(
        &self,
        reference: &Reference,
    ) -> Result<Vec<CheckSuite>, Self::Error> {
        let list: CheckSuiteList = self
            .fetch(commit_route(reference, "check-suites")?)
            .await?;

        Ok(list.check_suites)
    }

    async fn list_check_runs(
        &self,
        reference: &Reference,
        check_suite_id: u64,
    ) -> Result<Vec<CheckRun>, Self::Error> {
        let check_suite_id = check_suite_id.to_string();
        let list: CheckRunList = self
            .fetch(route([
                "repos",
                reference.owner(),
                reference.repo(),
                "check-suites",
                check_suite_id.as_str(),
                "check-runs",
            ])?)
            .await?;

        Ok(list.check_runs)
    }
}
