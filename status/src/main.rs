use ci_status::{config::AppConfig, render, StatusResolver};
use clap::Parser;
use domain::Reference;
use source_control::github::GitHub;
use tracing_subscriber::EnvFilter;

/// Unified CI status of a branch, tag or commit on GitHub
#[derive(Parser, Debug)]
#[command(name = "ci-status", version)]
struct Cli {
    /// Account or organization owning the repository
    owner: String,

    /// Repository name
    repo: String,

    /// Branch, tag or commit SHA
    #[arg(value_name = "REF")]
    git_ref: String,

    /// Print the status as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    let config = AppConfig::from_environment()?;
    let reference = Reference::new(cli.owner, cli.repo, cli.git_ref).map_err(|e| e.to_string())?;

    let github = GitHub::build(&config.github.credentials, Some(config.github.api_url.as_str()))
        .map_err(|e| format!("Failed to create GitHub client: {e}"))?
        .for_repository(reference.owner(), reference.repo())
        .await
        .map_err(|e| format!("Failed to access {}/{}: {e}", reference.owner(), reference.repo()))?;

    let resolver =
        StatusResolver::new(github, config.providers).with_concurrency(config.concurrency);

    let resolution = resolver
        .resolve(&reference)
        .await
        .map_err(|e| format!("Failed to resolve the status of {reference}: {e}"))?;

    let output = if cli.json {
        render::json(resolution.as_ref()).map_err(|e| format!("Failed to print status: {e}"))?
    } else {
        render::text(resolution.as_ref())
    };

    println!("{output}");

    Ok(())
}

/// Logs go to stderr so stdout only carries the status.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
