//! Stand-in profile used whenever live data cannot be fetched.

use chrono::{Datelike, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::profile::{Origin, Profile};

const USERS: [&str; 10] = [
    "octocat",
    "torvalds",
    "gaearon",
    "tj",
    "sindresorhus",
    "addyosmani",
    "getify",
    "kentcdodds",
    "wesbos",
    "bradtraversy",
];

const LANGUAGES: [&str; 10] = [
    "JavaScript",
    "Python",
    "Go",
    "Rust",
    "TypeScript",
    "Java",
    "C++",
    "PHP",
    "Ruby",
    "Swift",
];

const COMPANIES: [&str; 10] = [
    "GitHub",
    "Google",
    "Microsoft",
    "Meta",
    "Netflix",
    "Spotify",
    "Stripe",
    "Vercel",
    "OpenAI",
    "Freelancer",
];

const LOCATIONS: [&str; 10] = [
    "San Francisco",
    "Berlin",
    "London",
    "Tokyo",
    "New York",
    "Amsterdam",
    "Toronto",
    "Sydney",
    "Stockholm",
    "Zürich",
];

const FIRST_JOIN_YEAR: i32 = 2014;

fn pick<R: Rng>(rng: &mut R, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

/// A fully populated profile with randomized values.
pub fn generate<R: Rng>(rng: &mut R) -> Profile {
    let username = pick(rng, &USERS);
    let last_join_year = Utc::now().year().max(FIRST_JOIN_YEAR);

    Profile {
        id: rng.gen_range(1..=5_000_000),
        name: username.clone(),
        company: pick(rng, &COMPANIES),
        location: pick(rng, &LOCATIONS),
        language: pick(rng, &LANGUAGES),
        repos: rng.gen_range(1..=500),
        followers: rng.gen_range(100..=10_000),
        following: rng.gen_range(50..=1_000),
        stars: rng.gen_range(100..=50_000),
        contributions: rng.gen_range(100..=5_000),
        joined: rng.gen_range(FIRST_JOIN_YEAR..=last_join_year).to_string(),
        bio: String::new(),
        blog: String::new(),
        avatar_url: String::new(),
        username,
        origin: Origin::Synthetic,
    }
}
