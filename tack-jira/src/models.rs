//! Records exchanged with the Jira REST API.
//!
//! Only the keys the client reads or writes are modelled; everything else a
//! response carries is kept in `extra` so records pass through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// Represents a Jira group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub group_id: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// A group together with every user that belongs to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupWithMembers {
  #[serde(flatten)]
  pub group: Group,
  pub members: Vec<User>,
}

/// Represents a Jira user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub account_id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Represents a system or custom issue field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub custom: bool,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// How [`crate::JiraClient::get_field_by_name`] compares field names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMatch {
  /// The field name equals the query
  #[default]
  Exact,
  /// The field name contains the query
  Contains,
}

impl FieldMatch {
  pub fn matches(self, field_name: &str, query: &str) -> bool {
    match self {
      FieldMatch::Exact => field_name == query,
      FieldMatch::Contains => field_name.contains(query),
    }
  }
}

/// Represents a custom field context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldContext {
  pub id: String,
  pub name: String,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Represents an option of a select-style custom field.
///
/// `id` is absent when creating options and required when updating them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOption {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub value: String,
  #[serde(default)]
  pub disabled: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub option_id: Option<String>,
}

/// Request and response body of the custom field option endpoints
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct FieldOptions {
  pub options: Vec<FieldOption>,
}

/// Who issues created with a component are assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssigneeType {
  ProjectLead,
  ComponentLead,
  Unassigned,
  #[default]
  ProjectDefault,
}

/// Represents a project component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
  pub id: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lead_account_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub assignee_type: Option<AssigneeType>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Payload for creating a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComponent {
  /// Key of the owning project; cannot be changed later
  pub project: String,
  pub name: String,
  pub description: String,
  pub lead_account_id: String,
  pub assignee_type: AssigneeType,
}

impl NewComponent {
  pub fn new(project: &str, name: &str, lead_account_id: &str) -> Self {
    Self {
      project: project.to_string(),
      name: name.to_string(),
      description: String::new(),
      lead_account_id: lead_account_id.to_string(),
      assignee_type: AssigneeType::default(),
    }
  }
}

/// Payload for updating a component. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentUpdate {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lead_account_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee_type: Option<AssigneeType>,
}

/// Desired state of a component for
/// [`crate::JiraClient::create_or_update_components`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentSpec {
  pub name: String,
  #[serde(default)]
  pub description: String,
  pub lead_account_id: String,
  #[serde(default)]
  pub assignee_type: AssigneeType,
}

impl ComponentSpec {
  pub(crate) fn to_new_component(&self, project_key: &str) -> NewComponent {
    NewComponent {
      project: project_key.to_string(),
      name: self.name.clone(),
      description: self.description.clone(),
      lead_account_id: self.lead_account_id.clone(),
      assignee_type: self.assignee_type,
    }
  }

  pub(crate) fn to_update(&self) -> ComponentUpdate {
    ComponentUpdate {
      name: Some(self.name.clone()),
      description: Some(self.description.clone()),
      lead_account_id: Some(self.lead_account_id.clone()),
      assignee_type: Some(self.assignee_type),
    }
  }
}

/// A component that could not be created or updated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFailure {
  pub name: String,
  pub error: String,
}

/// Outcome of a bulk component sync
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
  /// Components as returned by the server after a successful create or update
  pub synced: Vec<Component>,
  pub failed: Vec<ComponentFailure>,
}
