use std::collections::HashMap;

use crate::github::Repo;

pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Aggregates derived from a user's repository list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RepoStats {
    pub stars: u64,
    pub languages: HashMap<String, u32>,
    pub primary_language: String,
}

impl RepoStats {
    pub fn from_repos(repos: &[Repo]) -> Self {
        let stars = repos
            .iter()
            .map(|r| r.stargazers_count.unwrap_or(0))
            .fold(0u64, u64::saturating_add);

        // (count, first position) per language
        let mut seen: HashMap<&str, (u32, usize)> = HashMap::new();
        for (pos, lang) in repos
            .iter()
            .filter_map(|r| r.language.as_deref())
            .filter(|l| !l.is_empty())
            .enumerate()
        {
            seen.entry(lang).or_insert((0, pos)).0 += 1;
        }

        // Highest count wins; ties go to the language seen first, i.e. the
        // one on the most recently updated repository.
        let primary_language = seen
            .iter()
            .max_by(|(_, (ca, pa)), (_, (cb, pb))| ca.cmp(cb).then(pb.cmp(pa)))
            .map(|(lang, _)| lang.to_string())
            .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string());

        let languages = seen
            .into_iter()
            .map(|(lang, (count, _))| (lang.to_string(), count))
            .collect();

        Self {
            stars,
            languages,
            primary_language,
        }
    }
}

/// Compact count: `999` stays as is, `2456` becomes `2.4k`.
pub fn format_number(n: u64) -> String {
    if n > 999 {
        format!("{}.{}k", n / 1000, (n % 1000) / 100)
    } else {
        n.to_string()
    }
}
