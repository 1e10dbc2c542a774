//! Constants for the tack-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("tack/", env!("CARGO_PKG_VERSION"));

/// Path of the platform REST API, relative to the instance URL
pub const API_V3_PATH: &str = "/rest/api/3";

/// Path of the Jira Software (agile) REST API, relative to the instance URL
pub const AGILE_V1_PATH: &str = "/rest/agile/1.0";

/// Page size requested from paginated endpoints. Servers may answer with a
/// smaller `maxResults`, which then wins.
pub const PAGE_SIZE: u64 = 1000;

/// Default key holding the records of a paginated response
pub const DEFAULT_RESULTS_KEY: &str = "values";

/// Groups whose names start with this prefix belong to installed add-ons
pub const ADDON_GROUP_PREFIX: &str = "atlassian-addons";

/// Environment variable holding the Jira instance URL
pub const ENV_JIRA_URL: &str = "JIRA_URL";

/// Environment variable holding the Jira user (account email)
pub const ENV_JIRA_USER: &str = "JIRA_USER";

/// Environment variable holding the Jira API token
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";

/// `.netrc` machine consulted when the instance host has no entry
pub const FALLBACK_NETRC_MACHINE: &str = "atlassian.net";
