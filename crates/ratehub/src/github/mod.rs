//! Issue tracker client
//!
//! Read-only access to the issues and comments that back the catalog.
//! Every collection is drained completely through [`pagination::fetch_all`].

pub mod pagination;
pub mod transport;

use crate::prelude::*;
use ratehub_core::config::HubConfig;
use ratehub_core::github::{GitHubComment, GitHubIssue};
use ratehub_core::pagination::page_count;

pub use pagination::fetch_all;
pub use transport::{HttpTransport, Transport};

/// Client for one hub repository
#[derive(Debug)]
pub struct GitHubClient<T = HttpTransport> {
    config: HubConfig,
    transport: T,
}

impl GitHubClient<HttpTransport> {
    /// Create a client over HTTP
    ///
    /// Fails with [`Error::Configuration`] before any request is made when
    /// the owner or repository is missing.
    pub fn new(config: HubConfig) -> Result<Self, Error> {
        GitHubClient::with_transport(config, HttpTransport::new()?)
    }
}

impl<T: Transport> GitHubClient<T> {
    pub fn with_transport(config: HubConfig, transport: T) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Every open issue carrying the items label, pull requests excluded
    pub async fn list_issues(&self) -> Result<Vec<GitHubIssue>, Error> {
        let issues: Vec<GitHubIssue> = fetch_all(&self.transport, &self.config.issues_url()).await?;
        log::debug!(
            "Listed {} records, {} pages expected at {} per page",
            issues.len(),
            page_count(issues.len(), self.config.per_page as usize).max(1),
            self.config.per_page
        );
        Ok(issues
            .into_iter()
            .filter(|issue| !issue.is_pull_request())
            .collect())
    }

    /// Every comment of an issue, by the `comments_url` of its record
    pub async fn list_comments(&self, comments_url: &str) -> Result<Vec<GitHubComment>, Error> {
        fetch_all(&self.transport, &self.config.first_page_url(comments_url)).await
    }

    /// Every comment of an issue, by number
    pub async fn list_comments_for(&self, number: u64) -> Result<Vec<GitHubComment>, Error> {
        fetch_all(&self.transport, &self.config.comments_url(number)).await
    }

    /// Comments of an issue record, skipping the request when it has none
    pub async fn comments_of(&self, issue: &GitHubIssue) -> Result<Vec<GitHubComment>, Error> {
        if issue.comments == 0 {
            return Ok(Vec::new());
        }
        if issue.comments_url.is_empty() {
            self.list_comments_for(issue.number).await
        } else {
            self.list_comments(&issue.comments_url).await
        }
    }

    /// A single issue
    pub async fn get_issue(&self, number: u64) -> Result<GitHubIssue, Error> {
        let url = self.config.issue_url(number);
        log::debug!("GET {url}");
        self.transport.get(&url).await?.error_for_status()?.json(&url)
    }
}
