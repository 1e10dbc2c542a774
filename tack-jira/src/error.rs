//! # Jira Client Errors
//!
//! One error type for every endpoint. Transport failures, unexpected status
//! codes and ambiguous lookups are always returned to the caller; nothing is
//! retried.

use reqwest::StatusCode;
use reqwest::blocking::Response;
use thiserror::Error;

/// Result alias used by every endpoint
pub type Result<T> = std::result::Result<T, JiraError>;

/// Errors produced by [`crate::JiraClient`]
#[derive(Debug, Error)]
pub enum JiraError {
  /// The request never produced a usable response (DNS, TLS, timeout, or an
  /// unreadable body)
  #[error("Failed to {action}: {source}")]
  Transport {
    action: String,
    #[source]
    source: reqwest::Error,
  },

  /// The server answered with a status the operation does not accept
  #[error("Jira API call failed with status {status}: {reason}; body: {body}")]
  Api {
    status: StatusCode,
    reason: String,
    body: String,
  },

  /// A lookup expected at most one match and found several
  #[error("More than one field matching '{name}': [{}]", .matches.join(", "))]
  AmbiguousResult { name: String, matches: Vec<String> },

  /// A response did not have the expected shape
  #[error("Failed to decode {what}: {source}")]
  Decode {
    what: String,
    #[source]
    source: serde_json::Error,
  },
}

impl JiraError {
  pub(crate) fn transport(action: &str, source: reqwest::Error) -> Self {
    JiraError::Transport {
      action: action.to_string(),
      source,
    }
  }

  pub(crate) fn decode(what: &str, source: serde_json::Error) -> Self {
    JiraError::Decode {
      what: what.to_string(),
      source,
    }
  }

  /// Build an [`JiraError::Api`] from a response, consuming its body
  pub(crate) fn from_response(response: Response) -> Self {
    let status = response.status();
    let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
    let body = response.text().unwrap_or_default();
    JiraError::Api { status, reason, body }
  }

  /// HTTP status of an [`JiraError::Api`] error
  pub const fn status(&self) -> Option<StatusCode> {
    match self {
      JiraError::Api { status, .. } => Some(*status),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_api_error_message_carries_status_and_body() {
    let err = JiraError::Api {
      status: StatusCode::NOT_FOUND,
      reason: "Not Found".to_string(),
      body: r#"{"errorMessages":["No project could be found with key 'NOPE'."]}"#.to_string(),
    };

    let message = err.to_string();
    assert!(message.contains("404"));
    assert!(message.contains("Not Found"));
    assert!(message.contains("NOPE"));
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
  }

  #[test]
  fn test_ambiguous_result_lists_matches() {
    let err = JiraError::AmbiguousResult {
      name: "Team".to_string(),
      matches: vec!["Team".to_string(), "Team Lead".to_string()],
    };

    assert_eq!(err.to_string(), "More than one field matching 'Team': [Team, Team Lead]");
    assert_eq!(err.status(), None);
  }
}
