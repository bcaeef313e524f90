//! Resolves the target user and builds their [`Profile`], falling back to
//! synthetic data on any failure.

use rand::Rng;
use rand::seq::SliceRandom;
use reqwest::StatusCode;

use crate::console;
use crate::github::{FetchError, GithubClient};
use crate::profile::Profile;
use crate::stats::RepoStats;
use crate::synthetic;

/// Only the head of the events feed is sampled.
pub const EVENT_SAMPLE: usize = 50;

/// Always yields a displayable profile.
pub async fn fetch_profile<R: Rng>(
    client: &GithubClient,
    username: Option<&str>,
    rng: &mut R,
) -> Profile {
    let login = match username.map(str::trim).filter(|u| !u.is_empty()) {
        Some(u) => {
            console::dim(format!("Fetching user: {u}"));
            u.to_string()
        }
        None => match random_actor(client, rng).await {
            Ok(login) => login,
            Err(e) => return fall_back(&e, None, rng),
        },
    };

    match fetch_live(client, &login, rng).await {
        Ok(profile) => profile,
        Err(e) => fall_back(&e, Some(&login), rng),
    }
}

/// Picks a login uniformly from the first [`EVENT_SAMPLE`] public events.
async fn random_actor<R: Rng>(
    client: &GithubClient,
    rng: &mut R,
) -> Result<String, FetchError> {
    console::dim("Fetching random user from recent events...");
    let events = client.recent_events().await?;
    let sample = &events[..events.len().min(EVENT_SAMPLE)];
    let event = sample.choose(rng).ok_or(FetchError::NoEvents)?;

    console::dim(format!("Selected random user: {}", event.actor.login));
    Ok(event.actor.login.clone())
}

async fn fetch_live<R: Rng>(
    client: &GithubClient,
    login: &str,
    rng: &mut R,
) -> Result<Profile, FetchError> {
    console::dim("Fetching user profile...");
    let user = client.user(login).await?;
    console::success(format!("✓ Successfully fetched profile for {}", user.login));

    console::dim("Analyzing repositories...");
    let repos = client.repos(&user.login).await?;
    console::dim(format!("Found {} repositories", repos.len()));

    let stats = RepoStats::from_repos(&repos);
    tracing::debug!(
        languages = stats.languages.len(),
        stars = stats.stars,
        "repositories aggregated"
    );
    console::dim(format!("Primary language: {}", stats.primary_language));

    let profile = Profile::from_live(user, &stats, rng.gen_range(100..=5_000));
    console::success("✓ Data processing complete");
    Ok(profile)
}

fn fall_back<R: Rng>(err: &FetchError, login: Option<&str>, rng: &mut R) -> Profile {
    tracing::debug!(error = %err, "live profile fetch failed");

    match err.status() {
        Some(status) => {
            console::error(format!("API Error: {err}"));
            console::error(format!("HTTP Status: {}", status.as_u16()));
            if status == StatusCode::FORBIDDEN {
                console::warn("Rate limit exceeded or token invalid!");
            } else if status == StatusCode::NOT_FOUND {
                console::warn(format!("User '{}' not found!", login.unwrap_or_default()));
            }
        }
        None => console::error(format!("Error: {err}")),
    }

    console::warn("Falling back to dummy data...");
    synthetic::generate(rng)
}
