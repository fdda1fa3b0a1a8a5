//! Catalog ordering
//!
//! Both orderings are stable, leave their input untouched and return at
//! most `limit` entries.
//!
//! The quality ordering compares raw averages with no shrinkage toward a
//! prior, so a single 5-star rating outranks any number of 4-star ratings.

use crate::item::Item;
use crate::rating::RatingStat;
use serde::Serialize;
use std::cmp::Ordering;

/// An item paired with its rating statistics, when they are known
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RatedItem {
    pub item: Item,
    pub stats: Option<RatingStat>,
}

impl RatedItem {
    pub fn new(item: Item, stats: Option<RatingStat>) -> Self {
        Self { item, stats }
    }

    fn rated_stats(&self) -> Option<&RatingStat> {
        self.stats.as_ref().filter(|s| s.count > 0)
    }
}

/// Newest first
pub fn rank_by_recency(entries: &[RatedItem], limit: usize) -> Vec<RatedItem> {
    let mut ranked: Vec<&RatedItem> = entries.iter().collect();
    ranked.sort_by(|a, b| b.item.created_at.cmp(&a.item.created_at));
    ranked.into_iter().take(limit).cloned().collect()
}

/// Best rated first: average, then count, then recency, all descending
///
/// Entries without ratings are left out.
pub fn rank_by_quality(entries: &[RatedItem], limit: usize) -> Vec<RatedItem> {
    let mut ranked: Vec<(&RatedItem, &RatingStat)> = entries
        .iter()
        .filter_map(|e| e.rated_stats().map(|s| (e, s)))
        .collect();
    ranked.sort_by(|(a, a_stats), (b, b_stats)| compare_quality(a, a_stats, b, b_stats));
    ranked
        .into_iter()
        .take(limit)
        .map(|(e, _)| e.clone())
        .collect()
}

fn compare_quality(
    a: &RatedItem,
    a_stats: &RatingStat,
    b: &RatedItem,
    b_stats: &RatingStat,
) -> Ordering {
    b_stats
        .average
        .total_cmp(&a_stats.average)
        .then_with(|| b_stats.count.cmp(&a_stats.count))
        .then_with(|| b.item.created_at.cmp(&a.item.created_at))
}
