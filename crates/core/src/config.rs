//! Hub configuration and URL building
//!
//! Pure functions for describing which tracker repository backs the catalog
//! and for building every URL the shell needs from that description.
//! Loading the configuration (files, environment, flags) lives in the shell;
//! this module only parses and validates values it is handed.

use serde::{Deserialize, Serialize};

/// Default label that marks an issue as a catalog item
pub const DEFAULT_LABEL: &str = "type:item";

/// Default REST API root of the tracker
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default web root of the tracker
pub const DEFAULT_HTML_BASE: &str = "https://github.com";

/// Default bracketed tag stripped from item titles
pub const DEFAULT_TITLE_PREFIX: &str = "[Item]";

/// Largest page size the tracker accepts
pub const MAX_PER_PAGE: u32 = 100;

/// Issue template used when submitting a new item
pub const ITEM_TEMPLATE: &str = "item.yml";

/// Error type for configuration problems
///
/// Raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("tracker owner is not configured (set --owner or RATEHUB_OWNER)")]
    MissingOwner,

    #[error("tracker repository is not configured (set --repo or RATEHUB_REPO)")]
    MissingRepo,

    #[error("items label must not be empty")]
    MissingLabel,

    #[error("page size must be between 1 and 100, got {0}")]
    InvalidPageSize(u32),

    #[error("invalid configuration file: {0}")]
    Parse(String),
}

/// Configuration for one catalog hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub owner: String,
    pub repo: String,
    pub label: String,
    pub per_page: u32,
    pub api_base: String,
    pub html_base: String,
    pub title_prefix: String,
    pub site_title: Option<String>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repo: String::new(),
            label: DEFAULT_LABEL.to_string(),
            per_page: MAX_PER_PAGE,
            api_base: DEFAULT_API_BASE.to_string(),
            html_base: DEFAULT_HTML_BASE.to_string(),
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
            site_title: None,
        }
    }
}

impl HubConfig {
    /// Create a configuration for `owner/repo` with every other field defaulted
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text
    ///
    /// Missing keys fall back to their defaults. The result is not validated,
    /// so a file may omit values that are supplied later by flags.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check that every identifying parameter is present and in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.trim().is_empty() {
            return Err(ConfigError::MissingOwner);
        }
        if self.repo.trim().is_empty() {
            return Err(ConfigError::MissingRepo);
        }
        if self.label.trim().is_empty() {
            return Err(ConfigError::MissingLabel);
        }
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(ConfigError::InvalidPageSize(self.per_page));
        }
        Ok(())
    }

    /// `owner/repo`
    pub fn repo_path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Name shown above listings
    pub fn display_name(&self) -> String {
        self.site_title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| self.repo_path())
    }

    fn api_root(&self) -> String {
        format!(
            "{}/repos/{}",
            self.api_base.trim_end_matches('/'),
            self.repo_path()
        )
    }

    fn html_root(&self) -> String {
        format!(
            "{}/{}",
            self.html_base.trim_end_matches('/'),
            self.repo_path()
        )
    }

    /// First page of the open issues carrying the items label
    pub fn issues_url(&self) -> String {
        format!(
            "{}/issues?state=open&labels={}&per_page={}&page=1",
            self.api_root(),
            urlencoding::encode(&self.label),
            self.per_page
        )
    }

    /// A single issue record
    pub fn issue_url(&self, number: u64) -> String {
        format!("{}/issues/{}", self.api_root(), number)
    }

    /// First page of the comments of an issue, by number
    pub fn comments_url(&self, number: u64) -> String {
        self.first_page_url(&format!("{}/issues/{}/comments", self.api_root(), number))
    }

    /// First page of a collection whose base URL the tracker handed out
    ///
    /// Issue records carry a `comments_url` without query parameters.
    pub fn first_page_url(&self, collection_url: &str) -> String {
        let separator = if collection_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}per_page={}&page=1",
            collection_url, separator, self.per_page
        )
    }

    /// Web page of an issue
    pub fn issue_html_url(&self, number: u64) -> String {
        format!("{}/issues/{}", self.html_root(), number)
    }

    /// Web page for submitting a new item through the issue template
    pub fn new_item_url(&self) -> String {
        format!(
            "{}/issues/new?template={}",
            self.html_root(),
            ITEM_TEMPLATE
        )
    }
}

/// Anchor of the comment box below an issue page
pub fn new_comment_url(issue_html_url: &str) -> String {
    format!("{issue_html_url}#new_comment_field")
}

/// Clamp a requested page size into the range the tracker accepts
pub fn clamp_per_page(per_page: u32) -> u32 {
    per_page.clamp(1, MAX_PER_PAGE)
}
