use clap::Parser;

/// Show a GitHub user's profile as a fastfetch-style card.
///
/// Set GITHUB_TOKEN for higher API rate limits.
#[derive(Debug, Parser)]
#[command(name = "gitch", version, about)]
pub struct Cli {
    /// GitHub login to show; a random recently active user when omitted
    #[arg(allow_hyphen_values = true)]
    pub username: Option<String>,

    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    /// The username, with blank input treated as none.
    pub fn username(&self) -> Option<&str> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }
}
