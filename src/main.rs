mod avatar;
mod cli;
mod config;
mod console;
mod fetch;
mod github;
mod headers;
mod layout;
mod profile;
mod stats;
mod synthetic;
#[cfg(test)]
mod test_support;

use anyhow::Context;
use avatar::AvatarRenderer;
use clap::Parser;
use cli::Cli;
use config::Config;
use github::GithubClient;
use layout::Screen;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

/// Rate-limit headroom below which a warning is shown.
const LOW_RATE_LIMIT: u64 = 10;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Every data failure degrades to placeholder content; only terminal
    // I/O can end up here.
    if let Err(e) = run(&cli, Config::from_env()).await {
        tracing::error!("{e:#}");
    }
}

async fn run(cli: &Cli, config: Config) -> anyhow::Result<()> {
    let mut screen = Screen::stdout();
    screen.clear().context("Failed to clear screen")?;

    match cli.username() {
        Some(user) => console::plain(format!("Fetching data for user: {user}")),
        None => console::plain("Fetching random GitHub user..."),
    }

    let headers = headers::github_headers(config.token.as_deref());
    let client = GithubClient::new(&config, headers)?;

    report_rate_limit(&client).await;

    let mut rng = StdRng::from_entropy();
    let profile = fetch::fetch_profile(&client, cli.username(), &mut rng).await;
    tracing::info!(login = %profile.username, live = profile.is_live(), "profile resolved");

    console::plain("Loading avatar...");
    let avatar = AvatarRenderer::new(&config)?.render(&profile).await;

    screen.clear().context("Failed to clear screen")?;
    layout::render(&mut screen, &profile, &avatar).context("Failed to draw profile card")?;
    Ok(())
}

/// Best effort; errors are only traced.
async fn report_rate_limit(client: &GithubClient) {
    match client.rate_limit().await {
        Ok(rate) => {
            console::dim(format!(
                "API Rate Limit: {}/{} remaining",
                rate.remaining, rate.limit
            ));
            if rate.remaining < LOW_RATE_LIMIT {
                console::error("Warning: Low API rate limit remaining!");
            }
        }
        Err(e) => tracing::debug!(error = %e, "rate limit check failed"),
    }
}
