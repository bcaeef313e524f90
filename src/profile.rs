use chrono::{DateTime, Datelike};

use crate::github::User;
use crate::stats::RepoStats;

pub const NOT_SPECIFIED: &str = "Not specified";

/// Where a [`Profile`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Live,
    Synthetic,
}

/// Everything the card displays about one user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub id: u64,
    pub username: String,
    pub name: String,
    pub company: String,
    pub location: String,
    pub language: String,
    pub repos: u64,
    pub followers: u64,
    pub following: u64,
    pub stars: u64,
    pub contributions: u64,
    pub joined: String,
    pub bio: String,
    pub blog: String,
    pub avatar_url: String,
    pub origin: Origin,
}

impl Profile {
    /// Combines the user payload with repository aggregates.
    ///
    /// `contributions` is supplied by the caller since the API has no
    /// such field.
    pub fn from_live(user: User, stats: &RepoStats, contributions: u64) -> Self {
        let joined = user
            .created_at
            .as_deref()
            .map(joined_year)
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            id: user.id,
            name: non_empty(user.name).unwrap_or_else(|| user.login.clone()),
            username: user.login,
            company: non_empty(user.company).unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            location: non_empty(user.location).unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            language: stats.primary_language.clone(),
            repos: user.public_repos,
            followers: user.followers,
            following: user.following,
            stars: stats.stars,
            contributions,
            joined,
            bio: user.bio.unwrap_or_default(),
            blog: user.blog.unwrap_or_default(),
            avatar_url: user.avatar_url.unwrap_or_default(),
            origin: Origin::Live,
        }
    }

    pub fn is_live(&self) -> bool {
        self.origin == Origin::Live
    }

    /// `"Display (login)"` when a distinct display name exists, else the login.
    pub fn header_name(&self) -> String {
        if !self.name.is_empty() && self.name != self.username {
            format!("{} ({})", self.name, self.username)
        } else {
            self.username.clone()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Year of an ISO-8601 timestamp, or its first four characters if it
/// does not parse.
fn joined_year(created_at: &str) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(ts) => ts.year().to_string(),
        Err(_) => created_at.chars().take(4).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Repo;
    use pretty_assertions::assert_eq;

    fn user_json(extra: &str) -> User {
        serde_json::from_str(&format!(
            r#"{{"id": 583231, "login": "octocat", "public_repos": 8,
                "followers": 4000, "following": 9 {extra}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn nulls_fall_back_to_placeholders() {
        let user = user_json(
            r#", "name": null, "company": null, "location": "", "bio": null,
               "blog": "", "created_at": "2011-01-25T18:44:36Z""#,
        );
        let profile = Profile::from_live(user, &RepoStats::from_repos(&[]), 321);

        assert_eq!(
            profile,
            Profile {
                id: 583231,
                username: "octocat".into(),
                name: "octocat".into(),
                company: NOT_SPECIFIED.into(),
                location: NOT_SPECIFIED.into(),
                language: "Unknown".into(),
                repos: 8,
                followers: 4000,
                following: 9,
                stars: 0,
                contributions: 321,
                joined: "2011".into(),
                bio: String::new(),
                blog: String::new(),
                avatar_url: String::new(),
                origin: Origin::Live,
            }
        );
        assert!(profile.is_live());
    }

    #[test]
    fn live_fields_carry_through() {
        let user = user_json(
            r#", "name": "The Octocat", "company": "@github", "location": "San Francisco",
               "bio": "hi", "blog": "https://github.blog",
               "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4""#,
        );
        let repos = vec![
            Repo {
                stargazers_count: Some(5),
                language: Some("Ruby".into()),
            },
            Repo {
                stargazers_count: Some(7),
                language: None,
            },
        ];
        let profile = Profile::from_live(user, &RepoStats::from_repos(&repos), 100);

        assert_eq!(profile.name, "The Octocat");
        assert_eq!(profile.company, "@github");
        assert_eq!(profile.language, "Ruby");
        assert_eq!(profile.stars, 12);
        assert_eq!(profile.joined, "Unknown");
        assert_eq!(profile.header_name(), "The Octocat (octocat)");
    }

    #[test]
    fn header_is_bare_login_without_distinct_name() {
        let profile = Profile::from_live(
            user_json(r#", "name": "octocat""#),
            &RepoStats::default(),
            0,
        );
        assert_eq!(profile.header_name(), "octocat");
    }

    #[test]
    fn joined_year_handles_odd_timestamps() {
        assert_eq!(joined_year("2008-04-10T02:27:26+02:00"), "2008");
        assert_eq!(joined_year("2019/03/01"), "2019");
        assert_eq!(joined_year("20"), "20");
    }
}
