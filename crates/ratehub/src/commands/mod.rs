pub mod item;
pub mod latest;
pub mod rate;
pub mod submit;
pub mod top;

use crate::github::GitHubClient;
use crate::prelude::{eprintln, *};
use crate::Global;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use ratehub_core::item::Item;
use ratehub_core::rating::RatingStat;
use serde::Serialize;

/// Summaries longer than this are cut in listings
pub const SUMMARY_MAX_CHARS: usize = 240;

/// Resolve the hub configuration and open a client on it
pub fn connect(global: &Global) -> Result<GitHubClient> {
    let config = global.hub.resolve()?;
    if global.verbose {
        eprintln!(
            "Using {} (label {}, {} per page)",
            config.repo_path(),
            config.label,
            config.per_page
        );
    }
    Ok(GitHubClient::new(config)?)
}

/// Spinner on stderr, hidden when verbose output would interleave with it
pub fn spinner(global: &Global, message: &str) -> Result<Option<ProgressBar>> {
    if global.verbose {
        return Ok(None);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .map_err(|e| eyre!("Invalid spinner template: {}", e))?,
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(Some(spinner))
}

pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// `★★★★☆ 4.50 (2 ratings)`, or a placeholder for unrated items
pub fn format_stars(stats: Option<&RatingStat>) -> String {
    match stats {
        Some(stats) if stats.count > 0 => {
            let filled = stats.average.round().clamp(0.0, 5.0) as usize;
            let noun = if stats.count == 1 { "rating" } else { "ratings" };
            format!(
                "{}{} {:.2} ({} {})",
                "★".repeat(filled),
                "☆".repeat(5 - filled),
                stats.average,
                stats.count,
                noun
            )
        }
        _ => "not rated yet".to_string(),
    }
}

/// Banner line used at the top of each listing
pub fn format_header(title: &str) -> String {
    let rule = "=".repeat(80);
    format!(
        "\n{}\n{}\n{}\n",
        rule.bright_cyan(),
        title.bright_cyan().bold(),
        rule.bright_cyan()
    )
}

/// One listing entry: title line, links, truncated summary and a rating line
pub fn format_item_entry(position: usize, item: &Item, stats: Option<&RatingStat>) -> String {
    let mut result = format!(
        "\n{} {}\n",
        format!("[{position}]").yellow().bold(),
        item.title.white().bold()
    );

    if let Some(url) = &item.url {
        result.push_str(&format!("    {}: {}\n", "URL".green(), url.cyan().underline()));
    }
    if !item.summary.is_empty() {
        result.push_str(&format!(
            "    {}\n",
            truncate_text(&item.summary, SUMMARY_MAX_CHARS)
        ));
    }
    result.push_str(&format!(
        "    {}: {} | {}: {} | {}: {}\n",
        "By".green(),
        item.author.login.bright_white(),
        "Posted".green(),
        item.created_at.format("%Y-%m-%d").to_string().bright_black(),
        "Rating".green(),
        format_stars(stats).bright_yellow()
    ));
    result.push_str(&format!(
        "    {}: {}\n",
        "Details".green(),
        format!("ratehub item {}", item.number).cyan()
    ));

    result
}
