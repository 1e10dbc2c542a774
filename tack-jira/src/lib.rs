//! # Jira API Client
//!
//! Blocking client for the Jira Cloud REST API (v3): group and membership
//! administration, field lookup, custom field contexts and options, and
//! project components. List endpoints are walked through offset pagination,
//! either lazily with [`JiraClient::paginate`] or eagerly with
//! [`JiraClient::get_all_paginated`].

pub mod auth;
mod client;
pub mod config;
pub mod consts;
mod endpoints;
pub mod error;
pub mod models;
mod pagination;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
pub use config::JiraConfig;
pub use error::{JiraError, Result};
// Re-export models
pub use models::{
  AssigneeType, Component, ComponentFailure, ComponentSpec, ComponentUpdate, Field, FieldContext, FieldMatch,
  FieldOption, Group, GroupWithMembers, JiraAuth, NewComponent, SyncReport, User,
};
pub use pagination::{PageMethod, PageRequest, Paginator};
