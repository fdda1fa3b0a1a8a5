//! Transformation of tracker issues into catalog items

use crate::front_matter::FrontMatter;
use crate::github::{GitHubComment, GitHubIssue, GitHubUser};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

// =============================================================================
// Output Domain Types
// =============================================================================

/// Author of an item or comment
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub login: String,
    pub html_url: Option<String>,
}

/// A catalog entry derived from one tracker issue
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Item {
    /// Issue number, unique and stable
    pub number: u64,
    pub title: String,
    /// External source link
    pub url: Option<String>,
    /// Image URL
    pub thumbnail: Option<String>,
    pub summary: String,
    pub created_at: DateTime<Utc>,
    /// Link to the originating discussion
    pub detail_url: String,
    pub author: UserRef,
}

/// A comment on an item
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Comment {
    pub id: u64,
    pub author: UserRef,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Pure Transformation Functions
// =============================================================================

/// Transform an issue record into a catalog item
///
/// `url`, `thumbnail` and `summary` are resolved in order from:
/// 1. the front matter block of the body
/// 2. a `key: value` line anywhere in the body (case-insensitive key)
/// 3. for `summary` only, the free text after the block
///
/// Empty values count as absent at every step. The title is kept verbatim;
/// see [`strip_title_prefix`] for the cosmetic cleanup.
pub fn extract_item(issue: &GitHubIssue) -> Item {
    let body = issue.body.as_deref().unwrap_or_default();
    let front_matter = FrontMatter::parse(body);

    let field = |key: &str| {
        front_matter
            .get(key)
            .map(str::to_string)
            .or_else(|| fallback_field(body, key))
    };

    let url = field("url");
    let thumbnail = field("thumbnail");
    let summary = field("summary").unwrap_or_else(|| front_matter.content.trim().to_string());

    Item {
        number: issue.number,
        title: issue.title.clone(),
        url,
        thumbnail,
        summary,
        created_at: issue.created_at,
        detail_url: issue.html_url.clone(),
        author: transform_user(&issue.user),
    }
}

/// Scan `body` for a line of the form `key: value`
///
/// The key match is case-insensitive and anchored to the start of a line.
/// Returns the trimmed value, or `None` if no line matches or the value is
/// empty.
pub fn fallback_field(body: &str, key: &str) -> Option<String> {
    let pattern = format!(r"(?im)^{}[ \t]*:[ \t]*(.*?)[ \t\r]*$", regex::escape(key));
    let re = Regex::new(&pattern).ok()?;

    let value = re
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|value| !value.is_empty())
        .map(str::to_string);
    value
}

/// Remove a bracketed tag such as `[Item]` from the start of a title
///
/// The tag match is case-insensitive; whitespace after the tag is dropped.
/// Titles without the tag are returned unchanged.
pub fn strip_title_prefix(title: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return title.to_string();
    }

    match title.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => {
            title[prefix.len()..].trim_start().to_string()
        }
        _ => title.to_string(),
    }
}

/// Transform a comment record, treating a missing body as empty
pub fn transform_comment(comment: &GitHubComment) -> Comment {
    Comment {
        id: comment.id,
        author: transform_user(&comment.user),
        body: comment.body.clone().unwrap_or_default(),
        created_at: comment.created_at,
    }
}

/// Transform comment records, preserving their order
pub fn transform_comments(comments: &[GitHubComment]) -> Vec<Comment> {
    comments.iter().map(transform_comment).collect()
}

fn transform_user(user: &GitHubUser) -> UserRef {
    UserRef {
        login: user.login.clone(),
        html_url: user.html_url.clone(),
    }
}

// =============================================================================
// Tests
// =============================================================================
