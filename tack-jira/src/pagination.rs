//! # Offset Pagination
//!
//! Jira list endpoints page with `startAt`/`maxResults` and report `total`.
//! [`Paginator`] walks those pages lazily, one request per page, yielding
//! records as they are decoded.

use std::marker::PhantomData;

use reqwest::Method;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};
use tracing::debug;

use crate::client::{JiraClient, expect_success, read_json};
use crate::consts::{DEFAULT_RESULTS_KEY, PAGE_SIZE};
use crate::error::{JiraError, Result};

/// How page parameters are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageMethod {
  /// Parameters go in the query string
  #[default]
  Get,
  /// Parameters go in a JSON body, for parameter sets too long for a URL
  Post,
}

/// A paginated call: endpoint, extra parameters and where the records live
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
  pub url: String,
  pub params: Map<String, Value>,
  pub results_key: String,
  pub method: PageMethod,
}

impl PageRequest {
  pub fn get(url: impl Into<String>) -> Self {
    Self {
      url: url.into(),
      params: Map::new(),
      results_key: DEFAULT_RESULTS_KEY.to_string(),
      method: PageMethod::Get,
    }
  }

  pub fn post(url: impl Into<String>) -> Self {
    Self {
      method: PageMethod::Post,
      ..Self::get(url)
    }
  }

  /// Add one parameter, replacing any previous value for `key`
  pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
    self.params.insert(key.to_string(), value.into());
    self
  }

  /// Merge a parameter map into the request
  pub fn params(mut self, params: Map<String, Value>) -> Self {
    self.params.extend(params);
    self
  }

  pub fn results_key(mut self, key: &str) -> Self {
    self.results_key = key.to_string();
    self
  }
}

/// Lazy iterator over every record of a paginated call.
///
/// The next page is requested only when the current one is exhausted. Any
/// failure is yielded once and ends the iteration.
pub struct Paginator<'a, T> {
  client: &'a JiraClient,
  request: PageRequest,
  start_at: u64,
  page_size: u64,
  page: std::vec::IntoIter<Value>,
  finished: bool,
  _record: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> Paginator<'a, T> {
  pub(crate) fn new(client: &'a JiraClient, request: PageRequest) -> Self {
    // Caller-supplied paging keys would fight the cursor
    let mut request = request;
    request.params.remove("startAt");
    request.params.remove("maxResults");

    Self {
      client,
      request,
      start_at: 0,
      page_size: PAGE_SIZE,
      page: Vec::new().into_iter(),
      finished: false,
      _record: PhantomData,
    }
  }

  fn fetch_page(&mut self) -> Result<()> {
    let mut params = self.request.params.clone();
    params.insert("startAt".to_string(), self.start_at.into());
    params.insert("maxResults".to_string(), self.page_size.into());

    debug!(
      "Fetching {} (startAt={}, maxResults={})",
      self.request.url, self.start_at, self.page_size
    );

    let request = match self.request.method {
      PageMethod::Get => self.client.request(Method::GET, &self.request.url).query(&params),
      PageMethod::Post => self.client.request(Method::POST, &self.request.url).json(&params),
    };
    let response = expect_success(self.client.send(request, "fetch page")?)?;
    let mut body: Map<String, Value> = read_json(response, "page")?;

    let records = match body.remove(&self.request.results_key) {
      Some(Value::Array(records)) => records,
      _ => {
        return Err(JiraError::decode(
          "page",
          serde_json::Error::custom(format!("missing `{}` array", self.request.results_key)),
        ));
      }
    };

    // The server may enforce a smaller page than requested
    if let Some(server_max) = body.get("maxResults").and_then(Value::as_u64)
      && server_max > 0
      && server_max < self.page_size
    {
      debug!("Server limits {} to {server_max} results per page", self.request.url);
      self.page_size = server_max;
    }

    let received = records.len() as u64;
    self.page = records.into_iter();
    self.start_at += self.page_size;
    self.finished = match body.get("total").and_then(Value::as_u64) {
      Some(total) => self.start_at >= total,
      None => body
        .get("isLast")
        .and_then(Value::as_bool)
        .unwrap_or(received < self.page_size),
    };

    Ok(())
  }
}

impl<T: DeserializeOwned> Iterator for Paginator<'_, T> {
  type Item = Result<T>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some(record) = self.page.next() {
        return Some(serde_json::from_value(record).map_err(|e| JiraError::decode(&self.request.results_key, e)));
      }
      if self.finished {
        return None;
      }
      if let Err(err) = self.fetch_page() {
        self.finished = true;
        return Some(Err(err));
      }
    }
  }
}

impl JiraClient {
  /// Iterate lazily over every record of a paginated call
  pub fn paginate<T: DeserializeOwned>(&self, request: PageRequest) -> Paginator<'_, T> {
    Paginator::new(self, request)
  }

  /// Collect every record of a paginated call, failing on the first error
  pub fn get_all_paginated<T: DeserializeOwned>(&self, request: PageRequest) -> Result<Vec<T>> {
    self.paginate(request).collect()
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use tack_test_utils::run_blocking;
  use wiremock::matchers::{body_json, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::client::create_jira_client;

  fn page(start: u64, count: u64, max_results: u64, total: u64) -> serde_json::Value {
    let values: Vec<_> = (start..start + count).map(|i| json!({"id": i})).collect();
    json!({"startAt": start, "maxResults": max_results, "total": total, "values": values})
  }

  #[derive(Debug, serde::Deserialize)]
  struct Record {
    id: u64,
  }

  #[tokio::test]
  async fn test_walks_every_page_in_order() {
    let mock_server = MockServer::start().await;

    for (start, count) in [(0, 1000), (1000, 1000), (2000, 500)] {
      Mock::given(method("GET"))
        .and(path("/rest/api/3/group/bulk"))
        .and(query_param("startAt", start.to_string()))
        .and(query_param("maxResults", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(start, count, 1000, 2500)))
        .expect(1)
        .mount(&mock_server)
        .await;
    }

    let uri = mock_server.uri();
    let ids = run_blocking(move || {
      let client = create_jira_client(&uri, "u", "t")?;
      let records: Vec<Record> = client.get_all_paginated(PageRequest::get(client.api("/group/bulk")))?;
      Ok::<_, JiraError>(records.into_iter().map(|r| r.id).collect::<Vec<_>>())
    })
    .await
    .unwrap();

    assert_eq!(ids.len(), 2500);
    assert_eq!(ids, (0..2500).collect::<Vec<_>>());
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
  }

  #[tokio::test]
  async fn test_adopts_smaller_server_page_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/items"))
      .and(query_param("startAt", "0"))
      .and(query_param("maxResults", "1000"))
      .respond_with(ResponseTemplate::new(200).set_body_json(page(0, 50, 50, 120)))
      .expect(1)
      .mount(&mock_server)
      .await;
    for start in [50, 100] {
      Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("startAt", start.to_string()))
        .and(query_param("maxResults", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(start, 50.min(120 - start), 50, 120)))
        .expect(1)
        .mount(&mock_server)
        .await;
    }

    let uri = mock_server.uri();
    let records: Vec<Record> = run_blocking(move || {
      let client = create_jira_client(&uri, "u", "t")?;
      client.get_all_paginated(PageRequest::get(format!("{uri}/items")))
    })
    .await
    .unwrap();

    assert_eq!(records.len(), 120);
    assert_eq!(records.last().map(|r| r.id), Some(119));
  }

  #[tokio::test]
  async fn test_post_sends_parameters_as_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/search"))
      .and(body_json(json!({"jql": "project = PROJ", "startAt": 0, "maxResults": 1000})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "maxResults": 1000,
          "total": 2,
          "issues": [{"id": 1}, {"id": 2}]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let uri = mock_server.uri();
    let records: Vec<Record> = run_blocking(move || {
      let client = create_jira_client(&uri, "u", "t")?;
      let request = PageRequest::post(format!("{uri}/search"))
        .param("jql", "project = PROJ")
        .results_key("issues");
      client.get_all_paginated(request)
    })
    .await
    .unwrap();

    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
  }

  #[tokio::test]
  async fn test_is_lazy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/items"))
      .and(query_param("startAt", "0"))
      .respond_with(ResponseTemplate::new(200).set_body_json(page(0, 1000, 1000, 5000)))
      .expect(1)
      .mount(&mock_server)
      .await;

    let uri = mock_server.uri();
    let first: Vec<Record> = run_blocking(move || {
      let client = create_jira_client(&uri, "u", "t")?;
      client
        .paginate(PageRequest::get(format!("{uri}/items")))
        .take(10)
        .collect::<Result<Vec<_>>>()
    })
    .await
    .unwrap();

    assert_eq!(first.len(), 10);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_error_status_aborts_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/items"))
      .and(query_param("startAt", "0"))
      .respond_with(ResponseTemplate::new(200).set_body_json(page(0, 1000, 1000, 3000)))
      .mount(&mock_server)
      .await;
    Mock::given(method("GET"))
      .and(path("/items"))
      .and(query_param("startAt", "1000"))
      .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
      .expect(2)
      .mount(&mock_server)
      .await;

    let uri = mock_server.uri();
    let (collected, lazy_tail) = run_blocking(move || {
      let client = create_jira_client(&uri, "u", "t").unwrap();
      let collected = client.get_all_paginated::<Record>(PageRequest::get(format!("{uri}/items")));

      let mut lazy = client.paginate::<Record>(PageRequest::get(format!("{uri}/items"))).skip(1000);
      let failure = lazy.next();
      (collected, (failure.map(|r| r.is_err()), lazy.next().is_none()))
    })
    .await;

    let err = collected.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
    assert!(err.to_string().contains("boom"));
    assert_eq!(lazy_tail, (Some(true), true));
  }

  #[tokio::test]
  async fn test_missing_results_key_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/items"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"maxResults": 50, "total": 1, "issues": []})))
      .mount(&mock_server)
      .await;

    let uri = mock_server.uri();
    let err = run_blocking(move || {
      let client = create_jira_client(&uri, "u", "t")?;
      client.get_all_paginated::<Record>(PageRequest::get(format!("{uri}/items")))
    })
    .await
    .unwrap_err();

    assert!(matches!(err, JiraError::Decode { .. }));
    assert!(err.to_string().contains("missing `values` array"));
  }

  #[test]
  fn test_caller_paging_keys_are_ignored() {
    let client = create_jira_client("https://x.atlassian.net", "u", "t").unwrap();
    let request = PageRequest::get("https://x.atlassian.net/a")
      .param("startAt", 40)
      .param("maxResults", 5)
      .param("groupname", "ops");

    let paginator: Paginator<'_, Record> = client.paginate(request);
    assert_eq!(paginator.request.params.len(), 1);
    assert_eq!(paginator.request.params["groupname"], json!("ops"));
  }
}
