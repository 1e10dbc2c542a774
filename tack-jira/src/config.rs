//! # Jira Configuration
//!
//! Resolves the instance URL and static credentials the client is built
//! from. Values come from `JIRA_URL`, `JIRA_USER` and `JIRA_API_TOKEN`, with
//! `~/.netrc` as the fallback for credentials. Nothing is hard-coded.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use tracing::debug;
use url::Url;

use crate::auth::get_jira_credentials;
use crate::consts::{ENV_JIRA_API_TOKEN, ENV_JIRA_URL, ENV_JIRA_USER};

/// Connection settings for a Jira Cloud instance
#[derive(Clone, PartialEq, Eq)]
pub struct JiraConfig {
  /// Instance URL without a trailing slash, e.g. `https://company.atlassian.net`
  pub base_url: String,
  pub user: String,
  pub api_token: String,
}

impl fmt::Debug for JiraConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("JiraConfig")
      .field("base_url", &self.base_url)
      .field("user", &self.user)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

impl JiraConfig {
  /// Resolve the configuration from the process environment and the user's
  /// `.netrc`.
  pub fn from_env() -> Result<Self> {
    let home: Option<PathBuf> = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    Self::resolve(|key| std::env::var(key).ok(), home.as_deref())
  }

  /// Resolve the configuration from an arbitrary variable lookup.
  ///
  /// Credentials present in `lookup` win; missing ones are taken from the
  /// `.netrc` file under `home`.
  pub fn resolve(lookup: impl Fn(&str) -> Option<String>, home: Option<&Path>) -> Result<Self> {
    let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let raw_url = non_blank(ENV_JIRA_URL)
      .ok_or_else(|| anyhow::anyhow!("Jira URL environment variable '{ENV_JIRA_URL}' not set"))?;
    let base_url = ensure_url_scheme(&raw_url)?;

    let (user, api_token) = match (non_blank(ENV_JIRA_USER), non_blank(ENV_JIRA_API_TOKEN)) {
      (Some(user), Some(token)) => (user, token),
      (user, token) => {
        let home = home.ok_or_else(|| {
          anyhow::anyhow!(
            "'{ENV_JIRA_USER}' and '{ENV_JIRA_API_TOKEN}' must be set when no home directory is available"
          )
        })?;
        debug!("Reading Jira credentials for {base_url} from .netrc");
        let creds = get_jira_credentials(home, &base_url).with_context(|| {
          format!("'{ENV_JIRA_USER}' or '{ENV_JIRA_API_TOKEN}' not set and no .netrc fallback available")
        })?;
        (user.unwrap_or(creds.username), token.unwrap_or(creds.password))
      }
    };

    Ok(Self {
      base_url,
      user,
      api_token,
    })
  }
}

/// Ensure a URL has a scheme and no trailing slash.
///
/// Hosts without a scheme get `https://`. The result must parse as a URL
/// with a host.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let lowered = trimmed.to_ascii_lowercase();
  let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).with_context(|| format!("Failed to parse Jira URL: '{input}'"))?;
  if url.host_str().is_none() {
    return Err(anyhow::anyhow!("Jira URL '{input}' has no host"));
  }

  Ok(url.as_str().trim_end_matches('/').to_string())
}
