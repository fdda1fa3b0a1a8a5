//! Catalog assembly
//!
//! Glue between the tracker client and the pure transforms of
//! `ratehub_core`: fetch issues and comments, then derive items, ratings
//! and threads from them.

use crate::github::{GitHubClient, Transport};
use crate::prelude::*;
use futures::stream::{self, StreamExt, TryStreamExt};
use ratehub_core::config::new_comment_url;
use ratehub_core::github::{GitHubComment, GitHubIssue};
use ratehub_core::item::{extract_item, strip_title_prefix, transform_comments, Item};
use ratehub_core::ranking::RatedItem;
use ratehub_core::rating::{aggregate_ratings, comment_views, CommentView, RatingSummary};
use serde::Serialize;

/// Comment threads requested at the same time while building the catalog
pub const THREAD_FETCH_CONCURRENCY: usize = 4;

/// Everything shown on the page of a single item
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ItemDetail {
    pub item: Item,
    pub ratings: RatingSummary,
    pub thread: Vec<CommentView>,
    /// Where a rating comment is posted
    pub comment_url: String,
}

/// Item for an issue, with the configured title tag removed
pub fn to_item(issue: &GitHubIssue, title_prefix: &str) -> Item {
    let mut item = extract_item(issue);
    item.title = strip_title_prefix(&item.title, title_prefix);
    item
}

/// Every catalog item, in the order the tracker lists them
pub async fn load_items<T: Transport>(client: &GitHubClient<T>) -> Result<Vec<Item>, Error> {
    let prefix = &client.config().title_prefix;
    let issues = client.list_issues().await?;

    Ok(issues.iter().map(|issue| to_item(issue, prefix)).collect())
}

/// Every catalog item together with its rating statistics
///
/// Up to [`THREAD_FETCH_CONCURRENCY`] comment threads are in flight at once,
/// and results keep the order of the issues. The first failing thread
/// abandons the whole catalog.
pub async fn load_rated_catalog<T: Transport>(
    client: &GitHubClient<T>,
) -> Result<Vec<RatedItem>, Error> {
    let prefix = &client.config().title_prefix;
    let issues = client.list_issues().await?;
    let threads: Vec<Vec<GitHubComment>> = stream::iter(&issues)
        .map(|issue| client.comments_of(issue))
        .buffered(THREAD_FETCH_CONCURRENCY)
        .try_collect()
        .await?;

    Ok(issues
        .iter()
        .zip(threads)
        .map(|(issue, thread)| {
            let summary = aggregate_ratings(&transform_comments(&thread));
            RatedItem::new(to_item(issue, prefix), Some(summary.stat))
        })
        .collect())
}

/// One item with its ratings and full comment thread
pub async fn load_item_detail<T: Transport>(
    client: &GitHubClient<T>,
    number: u64,
) -> Result<ItemDetail, Error> {
    let issue = client.get_issue(number).await?;
    let comments = transform_comments(&client.comments_of(&issue).await?);

    Ok(ItemDetail {
        item: to_item(&issue, &client.config().title_prefix),
        ratings: aggregate_ratings(&comments),
        thread: comment_views(&comments),
        comment_url: new_comment_url(&issue.html_url),
    })
}
