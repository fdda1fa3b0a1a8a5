//! Issue tracker API response types
//!
//! Deserialization targets for the GitHub REST v3 issue and comment
//! endpoints. Only the fields the catalog reads are declared; serde ignores
//! the rest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Issue record from the issues endpoint
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitHubIssue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub html_url: String,
    pub user: GitHubUser,
    #[serde(default)]
    pub comments_url: String,
    /// Number of comments on the issue
    #[serde(default)]
    pub comments: u64,
    /// Present only when the record is a pull request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<serde_json::Value>,
}

impl GitHubIssue {
    /// The issues endpoint lists pull requests too; they carry this marker
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Comment record from the issue comments endpoint
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitHubComment {
    pub id: u64,
    pub user: GitHubUser,
    #[serde(default)]
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Account reference embedded in issues and comments
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GitHubUser {
    pub login: String,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_issue() {
        let json = r#"{
            "number": 42,
            "title": "[Item] Rust in Production",
            "body": "---\nurl: https://example.com\n---\n",
            "created_at": "2024-03-01T12:00:00Z",
            "html_url": "https://github.com/acme/ratings/issues/42",
            "user": {"login": "octocat", "html_url": "https://github.com/octocat", "id": 1},
            "comments_url": "https://api.github.com/repos/acme/ratings/issues/42/comments",
            "comments": 3,
            "labels": [{"name": "type:item"}],
            "state": "open"
        }"#;

        let issue: GitHubIssue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.number, 42);
        assert_eq!(issue.user.login, "octocat");
        assert_eq!(issue.comments, 3);
        assert!(!issue.is_pull_request());
        assert_eq!(issue.created_at.to_rfc3339(), "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_deserialize_pull_request_marker_and_null_body() {
        let json = r#"{
            "number": 7,
            "title": "Fix typo",
            "body": null,
            "created_at": "2024-03-01T12:00:00Z",
            "html_url": "https://github.com/acme/ratings/pull/7",
            "user": {"login": "octocat"},
            "pull_request": {"url": "https://api.github.com/repos/acme/ratings/pulls/7"}
        }"#;

        let issue: GitHubIssue = serde_json::from_str(json).unwrap();
        assert!(issue.is_pull_request());
        assert_eq!(issue.body, None);
        assert_eq!(issue.comments, 0);
        assert_eq!(issue.comments_url, "");
    }

    #[test]
    fn test_deserialize_comment() {
        let json = r#"{
            "id": 1001,
            "user": {"login": "alice"},
            "body": "rating: 4\n\nSolid.",
            "created_at": "2024-03-02T08:30:00Z",
            "updated_at": "2024-03-02T08:30:00Z"
        }"#;

        let comment: GitHubComment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.id, 1001);
        assert_eq!(comment.user.login, "alice");
        assert_eq!(comment.body.as_deref(), Some("rating: 4\n\nSolid."));
    }
}
