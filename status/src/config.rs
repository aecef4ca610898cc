use domain::CiProviders;
use secrecy::SecretString;
use source_control::github::{Credentials, DEFAULT_API_URL};

use crate::probe::DEFAULT_CONCURRENCY;

pub struct AppConfig {
    pub github: GitHubConfig,
    pub providers: CiProviders,
    pub concurrency: usize,
}

pub struct GitHubConfig {
    pub credentials: Credentials,
    pub api_url: String,
}

impl AppConfig {
    pub fn from_environment() -> Result<AppConfig, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<AppConfig, String> {
        let providers = match lookup("CI_STATUS_PROVIDERS") {
            Some(providers) => providers
                .parse::<CiProviders>()
                .map_err(|e| format!("CI_STATUS_PROVIDERS is invalid: {e}"))?,
            None => CiProviders::default(),
        };

        let concurrency = match lookup("CI_STATUS_CONCURRENCY") {
            Some(concurrency) => concurrency
                .parse::<usize>()
                .ok()
                .filter(|concurrency| *concurrency > 0)
                .ok_or("CI_STATUS_CONCURRENCY needs to be a positive integer")?,
            None => DEFAULT_CONCURRENCY,
        };

        Ok(AppConfig {
            github: GitHubConfig::from_lookup(&lookup)?,
            providers,
            concurrency,
        })
    }
}

impl GitHubConfig {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<GitHubConfig, String> {
        let api_url = lookup("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned());

        let credentials = match (
            lookup("GITHUB_TOKEN"),
            lookup("GITHUB_APP_ID"),
            lookup("GITHUB_PRIVATE_KEY"),
        ) {
            (Some(token), _, _) => Credentials::Token(SecretString::new(token)),
            (None, Some(app_id), Some(private_key)) => Credentials::App {
                app_id: app_id
                    .parse()
                    .map_err(|_| "GITHUB_APP_ID needs to be an integer")?,
                private_key: SecretString::new(private_key),
            },
            (None, Some(_), None) => {
                return Err("Please provide the GITHUB_PRIVATE_KEY environment variable".to_owned());
            }
            (None, None, Some(_)) => {
                return Err("Please provide the GITHUB_APP_ID environment variable".to_owned());
            }
            (None, None, None) => Credentials::Anonymous,
        };

        Ok(GitHubConfig {
            credentials,
            api_url,
        })
    }
}
