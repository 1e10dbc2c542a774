//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by resource: groups and memberships,
//! issue fields with custom field contexts and options, and project
//! components.

mod components;
mod fields;
mod groups;
