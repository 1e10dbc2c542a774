use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::JiraConfig;
use crate::consts::{AGILE_V1_PATH, API_V3_PATH, USER_AGENT};
use crate::error::{JiraError, Result};
use crate::models::JiraAuth;

/// Represents a Jira API client.
///
/// Holds one connection pool for its whole lifetime; every request carries
/// JSON `Accept`/`Content-Type` headers and basic auth.
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) api_url: String,
  pub(crate) agile_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str, auth: JiraAuth) -> Result<Self> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let client = Client::builder()
      .user_agent(USER_AGENT)
      .default_headers(headers)
      .build()
      .map_err(|e| JiraError::transport("build HTTP client", e))?;

    let base_url = base_url.trim_end_matches('/').to_string();
    debug!("Created Jira client for {base_url}");

    Ok(Self {
      client,
      api_url: format!("{base_url}{API_V3_PATH}"),
      agile_url: format!("{base_url}{AGILE_V1_PATH}"),
      base_url,
      auth,
    })
  }

  /// Create a client from resolved configuration
  pub fn from_config(config: &JiraConfig) -> Result<Self> {
    Self::new(
      &config.base_url,
      JiraAuth {
        username: config.user.clone(),
        api_token: config.api_token.clone(),
      },
    )
  }

  /// Instance URL without a trailing slash
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Root of the platform REST API (`/rest/api/3`)
  pub fn api_url(&self) -> &str {
    &self.api_url
  }

  /// Root of the Jira Software REST API (`/rest/agile/1.0`)
  pub fn agile_url(&self) -> &str {
    &self.agile_url
  }

  /// Test the Jira connection by fetching the current user
  pub fn test_connection(&self) -> Result<bool> {
    let url = self.api("/myself");
    let response = self.send(self.request(Method::GET, &url), "connect to Jira")?;

    let ok = response.status().is_success();
    info!("Connection test against {} returned {}", self.base_url, response.status());
    Ok(ok)
  }

  /// Absolute URL of a platform API path
  pub(crate) fn api(&self, path: &str) -> String {
    format!("{}{path}", self.api_url)
  }

  pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
    self
      .client
      .request(method, url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
  }

  pub(crate) fn send(&self, request: RequestBuilder, action: &str) -> Result<Response> {
    request.send().map_err(|e| JiraError::transport(action, e))
  }
}

/// Pass the response through when its status is 2xx
pub(crate) fn expect_success(response: Response) -> Result<Response> {
  if response.status().is_success() {
    Ok(response)
  } else {
    Err(JiraError::from_response(response))
  }
}

/// Pass the response through only when its status is exactly `expected`
pub(crate) fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
  if response.status() == expected {
    Ok(response)
  } else {
    Err(JiraError::from_response(response))
  }
}

/// Read the body and decode it as `T`
pub(crate) fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
  let body = response
    .text()
    .map_err(|e| JiraError::transport(&format!("read {what}"), e))?;
  serde_json::from_str(&body).map_err(|e| JiraError::decode(what, e))
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  let auth = JiraAuth {
    username: username.to_string(),
    api_token: api_token.to_string(),
  };

  JiraClient::new(base_url, auth)
}
