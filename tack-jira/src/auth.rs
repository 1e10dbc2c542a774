//! Credential lookup for the Jira client.
//!
//! Credentials are static: a user (account email) and an API token. When they
//! are not supplied through the environment they are read from `~/.netrc`,
//! first for the instance host and then for the shared `atlassian.net`
//! machine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::consts::FALLBACK_NETRC_MACHINE;

/// Basic-auth credentials for a Jira instance
#[derive(Clone)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

fn netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// Both the single-line (`machine host login user password pass`) and the
/// multi-line layouts are accepted. A missing file, a missing machine, or an
/// entry without both `login` and `password` yields `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  if !path.exists() {
    return Ok(None);
  }

  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  let mut tokens = content.split_whitespace();

  let mut current_machine: Option<&str> = None;
  let mut username: Option<&str> = None;
  let mut password: Option<&str> = None;

  while let Some(token) = tokens.next() {
    match token {
      "machine" => {
        if let Some(found) = complete_entry(current_machine, username, password, target_machine) {
          return Ok(Some(found));
        }
        current_machine = tokens.next();
        username = None;
        password = None;
      }
      "login" => username = tokens.next(),
      "password" => password = tokens.next(),
      _ => {}
    }
  }

  Ok(complete_entry(current_machine, username, password, target_machine))
}

fn complete_entry(
  machine: Option<&str>,
  username: Option<&str>,
  password: Option<&str>,
  target_machine: &str,
) -> Option<Credentials> {
  match (machine, username, password) {
    (Some(machine), Some(username), Some(password)) if machine == target_machine => Some(Credentials {
      username: username.to_string(),
      password: password.to_string(),
    }),
    _ => None,
  }
}

/// Normalizes a Jira host URL by removing protocol prefixes and trailing
/// slashes.
///
/// ```
/// use tack_jira::auth::normalize_host;
///
/// assert_eq!(normalize_host("https://company.atlassian.net/"), "company.atlassian.net");
/// assert_eq!(normalize_host("my-jira-instance.com"), "my-jira-instance.com");
/// ```
pub fn normalize_host(raw_host: &str) -> String {
  raw_host
    .trim_start_matches("https://")
    .trim_start_matches("http://")
    .trim_end_matches('/')
    .to_string()
}

/// Retrieve Jira credentials for `jira_host` from the `.netrc` file in `home`.
pub fn get_jira_credentials(home: &Path, jira_host: &str) -> Result<Credentials> {
  let netrc_path = netrc_path(home);

  let normalized_host = normalize_host(jira_host);
  if let Some(creds) = parse_netrc_file(&netrc_path, &normalized_host)? {
    return Ok(creds);
  }
  if let Some(creds) = parse_netrc_file(&netrc_path, FALLBACK_NETRC_MACHINE)? {
    return Ok(creds);
  }

  anyhow::bail!(
    "Jira credentials not found in .netrc file. \
     Please add credentials for machine '{normalized_host}' or '{FALLBACK_NETRC_MACHINE}'."
  )
}
