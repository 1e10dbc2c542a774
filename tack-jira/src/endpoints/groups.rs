//! # Jira Group Endpoints
//!
//! Group and membership administration.
//!
//! API Documentation: <https://developer.atlassian.com/cloud/jira/platform/rest/v3/api-group-groups/>

use reqwest::Method;
use serde_json::json;
use tracing::{debug, info};

use crate::client::{JiraClient, expect_success, read_json};
use crate::consts::ADDON_GROUP_PREFIX;
use crate::error::Result;
use crate::models::{Group, GroupWithMembers, User};
use crate::pagination::PageRequest;

impl JiraClient {
  /// Create a group
  pub fn create_group(&self, name: &str) -> Result<Group> {
    debug!("Creating group {name}");
    let request = self
      .request(Method::POST, &self.api("/group"))
      .json(&json!({ "name": name }));

    let response = expect_success(self.send(request, "create group")?)?;
    let group = read_json(response, "group")?;
    info!("Created group {name}");
    Ok(group)
  }

  /// Delete a group by name
  pub fn delete_group(&self, name: &str) -> Result<()> {
    let request = self
      .request(Method::DELETE, &self.api("/group"))
      .query(&[("groupname", name)]);

    expect_success(self.send(request, "delete group")?)?;
    info!("Deleted group {name}");
    Ok(())
  }

  /// Get every group of the instance, except the ones owned by add-ons
  pub fn get_all_groups(&self) -> Result<Vec<Group>> {
    let groups: Vec<Group> = self.get_all_paginated(PageRequest::get(self.api("/group/bulk")))?;
    let total = groups.len();

    let groups: Vec<Group> = groups
      .into_iter()
      .filter(|group| !group.name.starts_with(ADDON_GROUP_PREFIX))
      .collect();

    debug!("Fetched {total} groups, {} after dropping add-on groups", groups.len());
    Ok(groups)
  }

  /// Get every user that belongs to a group
  pub fn get_group_members(&self, name: &str) -> Result<Vec<User>> {
    self.get_all_paginated(PageRequest::get(self.api("/group/member")).param("groupname", name))
  }

  /// Get every group together with its members, one member listing per group
  pub fn get_all_groups_with_members(&self) -> Result<Vec<GroupWithMembers>> {
    self
      .get_all_groups()?
      .into_iter()
      .map(|group| {
        let members = self.get_group_members(&group.name)?;
        Ok(GroupWithMembers { group, members })
      })
      .collect()
  }

  /// Add a user to a group. Returns the updated group.
  pub fn add_user_to_group(&self, group_name: &str, account_id: &str) -> Result<Group> {
    let request = self
      .request(Method::POST, &self.api("/group/user"))
      .query(&[("groupname", group_name)])
      .json(&json!({ "accountId": account_id }));

    let response = expect_success(self.send(request, "add user to group")?)?;
    info!("Added {account_id} to {group_name}");
    read_json(response, "group")
  }

  /// Remove a user from a group
  pub fn remove_user_from_group(&self, group_name: &str, account_id: &str) -> Result<()> {
    let request = self
      .request(Method::DELETE, &self.api("/group/user"))
      .query(&[("groupname", group_name), ("accountId", account_id)]);

    expect_success(self.send(request, "remove user from group")?)?;
    info!("Removed {account_id} from {group_name}");
    Ok(())
  }
}
