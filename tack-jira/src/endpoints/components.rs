//! # Jira Component Endpoints
//!
//! Project component listing, creation and update, plus a bulk sync that
//! creates or updates components by name.
//!
//! API Documentation: <https://developer.atlassian.com/cloud/jira/platform/rest/v3/api-group-project-components/>

use reqwest::{Method, StatusCode};
use tracing::{debug, error, info, warn};

use crate::client::{JiraClient, expect_status, read_json};
use crate::error::Result;
use crate::models::{Component, ComponentFailure, ComponentSpec, ComponentUpdate, NewComponent, SyncReport};

impl JiraClient {
  /// Get every component of a project
  pub fn get_project_components(&self, project_key: &str) -> Result<Vec<Component>> {
    let url = self.api(&format!("/project/{project_key}/components"));
    let response = self.send(self.request(Method::GET, &url), "fetch project components")?;
    let response = expect_status(response, StatusCode::OK)?;
    read_json(response, "project components")
  }

  /// Create a component. The server must answer `201 Created`.
  pub fn create_component(&self, component: &NewComponent) -> Result<Component> {
    let request = self.request(Method::POST, &self.api("/component")).json(component);
    let response = self.send(request, "create component")?;

    match expect_status(response, StatusCode::CREATED) {
      Ok(response) => read_json(response, "component"),
      Err(err) => {
        warn!(
          "Call to create new component `{}` in {} failed: {err}",
          component.name, component.project
        );
        Err(err)
      }
    }
  }

  /// Update a component. Only the fields set in `update` are sent; the
  /// server must answer `200 OK`.
  pub fn update_component(&self, component_id: &str, update: &ComponentUpdate) -> Result<Component> {
    let request = self
      .request(Method::PUT, &self.api(&format!("/component/{component_id}")))
      .json(update);
    let response = self.send(request, "update component")?;

    match expect_status(response, StatusCode::OK) {
      Ok(response) => read_json(response, "component"),
      Err(err) => {
        warn!(
          "Call to update the component {component_id} {} failed: {err}",
          update.name.as_deref().unwrap_or_default()
        );
        Err(err)
      }
    }
  }

  /// Bring a project's components in line with `specs`.
  ///
  /// A spec whose name matches an existing component updates it; any other
  /// spec creates a new component. A failing item is recorded in the report
  /// and the remaining specs are still processed. Failing to list the
  /// existing components aborts before anything is written.
  pub fn create_or_update_components(&self, project_key: &str, specs: &[ComponentSpec]) -> Result<SyncReport> {
    let existing = self.get_project_components(project_key)?;
    debug!(
      "Components already existing in project {project_key}: {:?}",
      existing.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
    );

    let mut report = SyncReport::default();
    for spec in specs {
      let outcome = match existing.iter().find(|c| c.name == spec.name) {
        Some(current) => self
          .update_component(&current.id, &spec.to_update())
          .inspect(|_| debug!("Component {} updated in {project_key}", spec.name)),
        None => self
          .create_component(&spec.to_new_component(project_key))
          .inspect(|_| debug!("Component {} created in {project_key}", spec.name)),
      };

      match outcome {
        Ok(component) => report.synced.push(component),
        Err(err) => {
          error!("Call to create/update component \"{}\" failed: {err}", spec.name);
          report.failed.push(ComponentFailure {
            name: spec.name.clone(),
            error: err.to_string(),
          });
        }
      }
    }

    if report.failed.is_empty() {
      info!("Synced {} components in {project_key}", report.synced.len());
    } else {
      error!(
        "There were {} failures: {:?}",
        report.failed.len(),
        report.failed.iter().map(|f| f.name.as_str()).collect::<Vec<_>>()
      );
    }

    Ok(report)
  }
}

impl SyncReport {
  /// Turn a report with failures into an error carrying the first failure
  pub fn into_result(self) -> std::result::Result<Vec<Component>, ComponentFailure> {
    match self.failed.into_iter().next() {
      Some(failure) => Err(failure),
      None => Ok(self.synced),
    }
  }
}
