//! Avatar download and conversion to terminal art.
//!
//! The image is written to a scoped temporary file and handed to an external
//! converter (`chafa` by default). Any failure yields a placeholder of the
//! same height so the layout never has to special-case a missing avatar.

use std::io::Write;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use thiserror::Error;
use tokio::process::Command;

use crate::config::{AVATAR_COLS, AVATAR_ROWS, Config};
use crate::console;
use crate::headers::CLIENT_ID;
use crate::profile::Profile;

pub const PLACEHOLDER_HEIGHT: usize = AVATAR_ROWS as usize;

const CONVERTER_FAILED: [&str; 3] = ["🎨 Avatar", "   Loading", "   Failed"];
const NOT_AVAILABLE: [&str; 3] = ["🎨 Avatar", "   Not", "   Available"];

#[derive(Debug, Error)]
enum AvatarError {
    #[error("download failed: {0}")]
    Download(#[from] reqwest::Error),
    #[error("temporary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not run converter `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("converter exited with {0}")]
    Converter(ExitStatus),
    #[error("converter timed out after {0:?}")]
    Timeout(Duration),
}

pub struct AvatarRenderer {
    http: Client,
    avatar_base: String,
    converter: String,
    download_timeout: Duration,
    converter_timeout: Duration,
}

impl AvatarRenderer {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_ID));
        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build avatar HTTP client")?;

        Ok(Self {
            http,
            avatar_base: config.avatar_base.clone(),
            converter: config.converter.clone(),
            download_timeout: config.avatar_timeout,
            converter_timeout: config.converter_timeout,
        })
    }

    /// The profile's own avatar URL, or the conventional per-id one.
    pub fn image_url(&self, profile: &Profile) -> String {
        if profile.avatar_url.is_empty() {
            format!("{}/u/{}", self.avatar_base, profile.id)
        } else {
            profile.avatar_url.clone()
        }
    }

    /// Converter output split into lines, or a [`PLACEHOLDER_HEIGHT`]-line
    /// placeholder.
    pub async fn render(&self, profile: &Profile) -> Vec<String> {
        match self.convert(&self.image_url(profile)).await {
            Ok(lines) => lines,
            Err(AvatarError::Converter(status)) => {
                tracing::warn!(%status, "avatar converter failed");
                placeholder(&CONVERTER_FAILED)
            }
            Err(e) => {
                console::warn(format!("Avatar error: {e}"));
                placeholder(&NOT_AVAILABLE)
            }
        }
    }

    async fn convert(&self, url: &str) -> Result<Vec<String>, AvatarError> {
        let bytes = self
            .http
            .get(url)
            .timeout(self.download_timeout)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        // Removed when `image` drops, whichever way this function returns.
        let mut image = tempfile::Builder::new()
            .prefix("gitch-avatar-")
            .suffix(".png")
            .tempfile()?;
        image.write_all(&bytes)?;
        image.flush()?;

        let run = Command::new(&self.converter)
            .arg(format!("--size={AVATAR_COLS}x{AVATAR_ROWS}"))
            .arg(image.path())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.converter_timeout, run)
            .await
            .map_err(|_| AvatarError::Timeout(self.converter_timeout))?
            .map_err(|source| AvatarError::Spawn {
                command: self.converter.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(AvatarError::Converter(output.status));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .lines()
            .map(str::to_string)
            .collect())
    }
}

fn placeholder(text: &[&str]) -> Vec<String> {
    let mut lines: Vec<String> = text.iter().map(|s| s.to_string()).collect();
    lines.resize(PLACEHOLDER_HEIGHT, String::new());
    lines
}
