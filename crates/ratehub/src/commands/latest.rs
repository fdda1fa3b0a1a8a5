use super::{connect, format_header, format_item_entry, format_json};
use crate::catalog::load_items;
use crate::github::{GitHubClient, Transport};
use crate::prelude::{println, *};
use colored::Colorize;
use ratehub_core::ranking::{rank_by_recency, RatedItem};

#[derive(Debug, clap::Args, Clone)]
pub struct LatestOptions {
    /// Number of items to show
    #[arg(short, long, env = "RATEHUB_LIMIT", default_value = "5")]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: LatestOptions, global: crate::Global) -> Result<()> {
    let client = connect(&global)?;

    if global.verbose {
        println!("Fetching the {} most recent items...", options.limit);
    }

    let entries = latest_data(&client, options.limit).await?;

    if options.json {
        println!("{}", format_json(&entries)?);
    } else {
        println!("{}", format_latest_text(&entries, &client.config().display_name()));
    }

    Ok(())
}

/// Most recent items first; ratings are not fetched
pub async fn latest_data<T: Transport>(
    client: &GitHubClient<T>,
    limit: usize,
) -> Result<Vec<RatedItem>> {
    let entries: Vec<RatedItem> = load_items(client)
        .await?
        .into_iter()
        .map(|item| RatedItem::new(item, None))
        .collect();

    Ok(rank_by_recency(&entries, limit))
}

fn format_latest_text(entries: &[RatedItem], name: &str) -> String {
    let mut result = format_header(&format!("LATEST ITEMS | {name}"));

    if entries.is_empty() {
        result.push_str(&format!("\n{}\n", "No items yet.".yellow()));
        return result;
    }

    for (idx, entry) in entries.iter().enumerate() {
        result.push_str(&format_item_entry(idx + 1, &entry.item, None));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::sample_item;
    use crate::github::fixtures::issue_json;
    use crate::github::transport::stub::StubTransport;
    use ratehub_core::config::HubConfig;
    use serde_json::json;

    #[tokio::test]
    async fn test_latest_data_orders_newest_first() {
        let config = HubConfig::new("acme", "ratings");
        let stub = StubTransport::new().ok(
            &config.issues_url(),
            json!([
                issue_json(1, "2024-01-02T00:00:00Z", 4, ""),
                issue_json(2, "2024-01-05T00:00:00Z", 0, ""),
                issue_json(3, "2024-01-01T00:00:00Z", 1, ""),
            ]),
            None,
        );
        let client = GitHubClient::with_transport(config, stub).unwrap();

        let entries = latest_data(&client, 2).await.unwrap();

        let numbers: Vec<u64> = entries.iter().map(|e| e.item.number).collect();
        assert_eq!(numbers, vec![2, 1]);
        assert!(entries.iter().all(|e| e.stats.is_none()));
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[test]
    fn test_format_latest_text_lists_entries_in_order() {
        let entries = vec![
            RatedItem::new(sample_item(2, 3), None),
            RatedItem::new(sample_item(1, 2), None),
        ];

        let text = format_latest_text(&entries, "acme/ratings");

        let second = text.find("Entry 2").unwrap();
        let first = text.find("Entry 1").unwrap();
        assert!(second < first);
        assert!(text.contains("LATEST ITEMS"));
    }

    #[test]
    fn test_format_latest_text_empty() {
        assert!(format_latest_text(&[], "acme/ratings").contains("No items yet."));
    }
}
