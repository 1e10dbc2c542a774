//! # Jira Field Endpoints
//!
//! Issue field lookup plus custom field contexts and options.
//!
//! API Documentation:
//! - <https://developer.atlassian.com/cloud/jira/platform/rest/v3/api-group-issue-fields/>
//! - <https://developer.atlassian.com/cloud/jira/platform/rest/v3/api-group-issue-custom-field-contexts/>
//! - <https://developer.atlassian.com/cloud/jira/platform/rest/v3/api-group-issue-custom-field-options/>

use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::client::{JiraClient, expect_status, expect_success, read_json};
use crate::error::{JiraError, Result};
use crate::models::{Field, FieldContext, FieldMatch, FieldOption, FieldOptions};
use crate::pagination::PageRequest;

impl JiraClient {
  /// Get every system and custom field of the instance
  pub fn get_all_fields(&self) -> Result<Vec<Field>> {
    let response = self.send(self.request(Method::GET, &self.api("/field")), "fetch fields")?;
    let response = expect_status(response, StatusCode::OK)?;
    read_json(response, "fields")
  }

  /// Find the one field whose name matches `name`.
  ///
  /// Returns `None` when nothing matches and
  /// [`JiraError::AmbiguousResult`] when more than one field does.
  pub fn get_field_by_name(&self, name: &str, mode: FieldMatch) -> Result<Option<Field>> {
    let mut matching: Vec<Field> = self
      .get_all_fields()?
      .into_iter()
      .filter(|field| mode.matches(&field.name, name))
      .collect();

    match matching.len() {
      0 => {
        debug!("No field matching '{name}'");
        Ok(None)
      }
      1 => Ok(matching.pop()),
      _ => {
        let matches: Vec<String> = matching.into_iter().map(|field| field.name).collect();
        warn!("More than one field matching '{name}': {matches:?}");
        Err(JiraError::AmbiguousResult {
          name: name.to_string(),
          matches,
        })
      }
    }
  }

  /// Get every context of a custom field.
  ///
  /// `params` may carry `isAnyIssueType`, `isGlobalContext` or `contextId`.
  pub fn get_all_custom_field_contexts(&self, field_id: &str, params: Map<String, Value>) -> Result<Vec<FieldContext>> {
    let url = self.api(&format!("/field/{field_id}/context"));
    self.get_all_paginated(PageRequest::get(url).params(params))
  }

  /// Get every option of a custom field in one context.
  ///
  /// `params` may carry `optionId` or `onlyOptions`.
  pub fn get_all_custom_field_options(
    &self,
    field_id: &str,
    context_id: &str,
    params: Map<String, Value>,
  ) -> Result<Vec<FieldOption>> {
    let url = self.options_url(field_id, context_id);
    self.get_all_paginated(PageRequest::get(url).params(params))
  }

  /// Create options in a custom field context. Returns the created options.
  pub fn create_custom_field_options(
    &self,
    field_id: &str,
    context_id: &str,
    options: &[FieldOption],
  ) -> Result<Vec<FieldOption>> {
    self.write_options(Method::POST, field_id, context_id, options, "create custom field options")
  }

  /// Update existing options, matched by `id`. Returns the updated options.
  pub fn update_custom_field_options(
    &self,
    field_id: &str,
    context_id: &str,
    options: &[FieldOption],
  ) -> Result<Vec<FieldOption>> {
    self.write_options(Method::PUT, field_id, context_id, options, "update custom field options")
  }

  fn options_url(&self, field_id: &str, context_id: &str) -> String {
    self.api(&format!("/field/{field_id}/context/{context_id}/option"))
  }

  fn write_options(
    &self,
    method: Method,
    field_id: &str,
    context_id: &str,
    options: &[FieldOption],
    action: &str,
  ) -> Result<Vec<FieldOption>> {
    debug!("Sending {} options for {field_id} in context {context_id}", options.len());
    let body = FieldOptions {
      options: options.to_vec(),
    };
    let request = self.request(method, &self.options_url(field_id, context_id)).json(&body);

    let response = expect_success(self.send(request, action)?)?;
    let written: FieldOptions = read_json(response, "custom field options")?;
    Ok(written.options)
  }
}
