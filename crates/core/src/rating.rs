//! Rating extraction and aggregation
//!
//! A comment rates its item when its first line, trimmed, reads
//! `rating: N` with N from 1 to 5 (case-insensitive). Each author counts
//! once: only their most recent marker is kept, so posting a new rating
//! comment revises an earlier one.

use crate::item::Comment;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

static MARKER_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn marker_regex() -> Option<&'static Regex> {
    MARKER_RE
        .get_or_init(|| Regex::new(r"(?i)^rating:\s*([1-5])$").ok())
        .as_ref()
}

/// A rating read from one comment
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RatingMark {
    pub author: String,
    pub value: u8,
    pub timestamp: DateTime<Utc>,
}

/// Count and mean of the ratings of one item
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Default)]
pub struct RatingStat {
    pub count: usize,
    /// Mean of the counted values, 0 when `count` is 0. Not rounded.
    pub average: f64,
}

/// Aggregated statistics together with the marks that were counted
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct RatingSummary {
    pub stat: RatingStat,
    /// One mark per author, in the order their comments appeared
    pub marks: Vec<RatingMark>,
}

/// A comment prepared for display in a thread
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CommentView {
    pub comment: Comment,
    /// Rating carried by the comment's first line, if any
    pub rating: Option<u8>,
    /// Body without the rating marker line
    pub commentary: String,
}

/// Value of the rating marker on the first line of `body`
pub fn parse_rating_marker(body: &str) -> Option<u8> {
    let first_line = body.lines().next()?.trim();
    let caps = marker_regex()?.captures(first_line)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Rating mark carried by a comment, if its first line is a marker
pub fn extract_rating_mark(comment: &Comment) -> Option<RatingMark> {
    parse_rating_marker(&comment.body).map(|value| RatingMark {
        author: comment.author.login.clone(),
        value,
        timestamp: comment.created_at,
    })
}

/// Fold a comment stream into per-item rating statistics
///
/// Keeps the latest mark per author. "Latest" compares timestamps first and
/// falls back to position in `comments`, so of two marks with the same
/// timestamp the later one wins.
pub fn aggregate_ratings(comments: &[Comment]) -> RatingSummary {
    let mut latest: HashMap<String, (usize, RatingMark)> = HashMap::new();

    for (position, mark) in comments
        .iter()
        .enumerate()
        .filter_map(|(i, c)| extract_rating_mark(c).map(|m| (i, m)))
    {
        let newer = match latest.get(&mark.author) {
            Some((seen_position, seen)) => {
                (mark.timestamp, position) > (seen.timestamp, *seen_position)
            }
            None => true,
        };
        if newer {
            latest.insert(mark.author.clone(), (position, mark));
        }
    }

    let mut retained: Vec<(usize, RatingMark)> = latest.into_values().collect();
    retained.sort_by_key(|(position, _)| *position);
    let marks: Vec<RatingMark> = retained.into_iter().map(|(_, mark)| mark).collect();

    RatingSummary {
        stat: rating_stat(&marks),
        marks,
    }
}

/// Count and mean of a set of marks, taken as-is
pub fn rating_stat(marks: &[RatingMark]) -> RatingStat {
    let count = marks.len();
    if count == 0 {
        return RatingStat::default();
    }
    let total: u32 = marks.iter().map(|m| u32::from(m.value)).sum();
    RatingStat {
        count,
        average: f64::from(total) / count as f64,
    }
}

/// Body of a comment with its rating marker removed
///
/// When the first line is a marker, it is dropped together with one blank
/// line right after it. Other bodies are only trimmed.
pub fn comment_commentary(body: &str) -> String {
    if parse_rating_marker(body).is_none() {
        return body.trim().to_string();
    }

    let mut lines = body.lines().skip(1).peekable();
    if lines.peek().is_some_and(|l| l.trim().is_empty()) {
        lines.next();
    }
    lines.collect::<Vec<_>>().join("\n").trim().to_string()
}

/// Prepare a comment thread for display, preserving order
pub fn comment_views(comments: &[Comment]) -> Vec<CommentView> {
    comments
        .iter()
        .map(|c| CommentView {
            comment: c.clone(),
            rating: parse_rating_marker(&c.body),
            commentary: comment_commentary(&c.body),
        })
        .collect()
}

/// Comment text a user posts to rate an item with `value` stars
pub fn rating_template(value: u8) -> Option<String> {
    (1..=5)
        .contains(&value)
        .then(|| format!("rating: {value}\n\nYour comment here..."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::UserRef;
    use chrono::{Duration, TimeZone};

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn sample_comment(id: u64, author: &str, body: &str, minutes: i64) -> Comment {
        Comment {
            id,
            author: UserRef {
                login: author.to_string(),
                html_url: None,
            },
            body: body.to_string(),
            created_at: at(minutes),
        }
    }

    // ============================================================================
    // parse_rating_marker tests
    // ============================================================================

    #[test]
    fn test_parse_rating_marker_accepts_any_case() {
        assert_eq!(parse_rating_marker("rating: 3"), Some(3));
        assert_eq!(parse_rating_marker("Rating: 3"), Some(3));
        assert_eq!(parse_rating_marker("RATING:5"), Some(5));
        assert_eq!(parse_rating_marker("  rating:   1  \n\nGreat"), Some(1));
        assert_eq!(parse_rating_marker("rating: 2\r\nok"), Some(2));
    }

    #[test]
    fn test_parse_rating_marker_rejects_out_of_range() {
        assert_eq!(parse_rating_marker("rating: 0"), None);
        assert_eq!(parse_rating_marker("rating: 6"), None);
        assert_eq!(parse_rating_marker("rating: 10"), None);
        assert_eq!(parse_rating_marker("rating: 4.5"), None);
        assert_eq!(parse_rating_marker("rating: -1"), None);
        assert_eq!(parse_rating_marker("rating: five"), None);
    }

    #[test]
    fn test_parse_rating_marker_first_line_only() {
        assert_eq!(parse_rating_marker("Nice!\nrating: 5"), None);
        assert_eq!(parse_rating_marker("my rating: 5"), None);
        assert_eq!(parse_rating_marker("rating: 5 stars"), None);
        assert_eq!(parse_rating_marker(""), None);
    }

    // ============================================================================
    // aggregate_ratings tests
    // ============================================================================

    #[test]
    fn test_aggregate_latest_rating_per_author_wins() {
        let comments = vec![
            sample_comment(1, "alice", "rating: 3", 0),
            sample_comment(2, "bob", "rating: 5", 1),
            sample_comment(3, "alice", "rating: 4", 2),
        ];

        let summary = aggregate_ratings(&comments);
        assert_eq!(summary.stat.count, 2);
        assert_eq!(summary.stat.average, 4.5);
        assert_eq!(summary.marks.len(), 2);
        assert_eq!(summary.marks[0].author, "bob");
        assert_eq!(summary.marks[1].author, "alice");
        assert_eq!(summary.marks[1].value, 4);
    }

    #[test]
    fn test_aggregate_uses_timestamp_not_position() {
        // Out-of-order input: the earlier-positioned comment is newer.
        let comments = vec![
            sample_comment(1, "alice", "rating: 2", 10),
            sample_comment(2, "alice", "rating: 5", 5),
        ];

        let summary = aggregate_ratings(&comments);
        assert_eq!(summary.stat.count, 1);
        assert_eq!(summary.marks[0].value, 2);
        assert_eq!(summary.stat.average, 2.0);
    }

    #[test]
    fn test_aggregate_equal_timestamps_later_position_wins() {
        let comments = vec![
            sample_comment(1, "alice", "rating: 1", 3),
            sample_comment(2, "alice", "rating: 4", 3),
        ];

        let summary = aggregate_ratings(&comments);
        assert_eq!(summary.marks.len(), 1);
        assert_eq!(summary.marks[0].value, 4);
    }

    #[test]
    fn test_aggregate_ignores_non_rating_comments() {
        let comments = vec![
            sample_comment(1, "alice", "I liked it", 0),
            sample_comment(2, "bob", "rating: 6", 1),
            sample_comment(3, "carol", "Rating: 3\n\nDecent read.", 2),
            sample_comment(4, "dave", "rating: 0", 3),
        ];

        let summary = aggregate_ratings(&comments);
        assert_eq!(summary.stat.count, 1);
        assert_eq!(summary.stat.average, 3.0);
        assert_eq!(summary.marks[0].author, "carol");
    }

    #[test]
    fn test_aggregate_no_comments() {
        let summary = aggregate_ratings(&[]);
        assert_eq!(summary.stat, RatingStat::default());
        assert_eq!(summary.stat.average, 0.0);
        assert!(summary.marks.is_empty());
    }

    #[test]
    fn test_aggregate_average_is_not_rounded() {
        let comments = vec![
            sample_comment(1, "a", "rating: 5", 0),
            sample_comment(2, "b", "rating: 4", 1),
            sample_comment(3, "c", "rating: 4", 2),
        ];

        let summary = aggregate_ratings(&comments);
        assert_eq!(summary.stat.average, 13.0 / 3.0);
    }

    #[test]
    fn test_aggregate_count_bounded_by_distinct_authors() {
        let comments: Vec<Comment> = (0..10)
            .map(|i| sample_comment(i, if i % 2 == 0 { "a" } else { "b" }, "rating: 4", i as i64))
            .collect();

        assert_eq!(aggregate_ratings(&comments).stat.count, 2);
    }

    // ============================================================================
    // Thread display tests
    // ============================================================================

    #[test]
    fn test_comment_commentary_strips_marker_and_blank_line() {
        assert_eq!(
            comment_commentary("rating: 4\n\nSolid book.\nWould reread."),
            "Solid book.\nWould reread."
        );
        assert_eq!(comment_commentary("rating: 4\nRight below."), "Right below.");
        assert_eq!(comment_commentary("Rating: 3"), "");
    }

    #[test]
    fn test_comment_commentary_keeps_plain_comments() {
        assert_eq!(comment_commentary("  Just a thought.\n"), "Just a thought.");
        assert_eq!(comment_commentary("rating: 9\n\nnot a marker"), "rating: 9\n\nnot a marker");
    }

    #[test]
    fn test_comment_views() {
        let comments = vec![
            sample_comment(1, "alice", "rating: 5\n\nLoved it", 0),
            sample_comment(2, "bob", "Any sequel?", 1),
        ];

        let views = comment_views(&comments);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].rating, Some(5));
        assert_eq!(views[0].commentary, "Loved it");
        assert_eq!(views[1].rating, None);
        assert_eq!(views[1].commentary, "Any sequel?");
        assert_eq!(views[1].comment.id, 2);
    }

    #[test]
    fn test_rating_template() {
        assert_eq!(
            rating_template(4).as_deref(),
            Some("rating: 4\n\nYour comment here...")
        );
        assert_eq!(parse_rating_marker(&rating_template(1).unwrap()), Some(1));
        assert_eq!(rating_template(0), None);
        assert_eq!(rating_template(6), None);
    }
}
