use super::{connect, format_header, format_item_entry, format_json, spinner};
use crate::catalog::load_rated_catalog;
use crate::github::{GitHubClient, Transport};
use crate::prelude::{println, *};
use colored::Colorize;
use ratehub_core::ranking::{rank_by_quality, RatedItem};

#[derive(Debug, clap::Args, Clone)]
pub struct TopOptions {
    /// Number of items to show
    #[arg(short, long, env = "RATEHUB_LIMIT", default_value = "5")]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: TopOptions, global: crate::Global) -> Result<()> {
    let client = connect(&global)?;

    if global.verbose {
        println!("Fetching items and their ratings...");
    }

    let spinner = spinner(&global, "Fetching ratings...")?;
    let result = top_data(&client, options.limit).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let entries = result?;

    if options.json {
        println!("{}", format_json(&entries)?);
    } else {
        println!("{}", format_top_text(&entries, &client.config().display_name()));
    }

    Ok(())
}

/// Best rated items first; unrated items are left out
pub async fn top_data<T: Transport>(
    client: &GitHubClient<T>,
    limit: usize,
) -> Result<Vec<RatedItem>> {
    let catalog = load_rated_catalog(client).await?;
    log::debug!("Ranking {} catalog entries", catalog.len());
    Ok(rank_by_quality(&catalog, limit))
}

fn format_top_text(entries: &[RatedItem], name: &str) -> String {
    let mut result = format_header(&format!("TOP RATED ITEMS | {name}"));

    if entries.is_empty() {
        result.push_str(&format!("\n{}\n", "No rated items yet.".yellow()));
        return result;
    }

    for (idx, entry) in entries.iter().enumerate() {
        result.push_str(&format_item_entry(
            idx + 1,
            &entry.item,
            entry.stats.as_ref(),
        ));
    }

    result
}
