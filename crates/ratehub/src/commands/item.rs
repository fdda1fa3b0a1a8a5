use super::{connect, format_json, format_stars};
use crate::catalog::{load_item_detail, ItemDetail};
use crate::github::{GitHubClient, Transport};
use crate::prelude::{println, *};
use color_eyre::eyre::Report;
use colored::Colorize;
use ratehub_core::rating::CommentView;

#[derive(Debug, clap::Args, Clone)]
pub struct ItemOptions {
    /// Issue number of the item
    #[arg(value_name = "NUMBER")]
    pub number: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ItemOptions, global: crate::Global) -> Result<()> {
    let client = connect(&global)?;

    if global.verbose {
        println!("Fetching item #{}...", options.number);
    }

    let detail = item_data(&client, options.number).await?;

    if options.json {
        println!("{}", format_json(&detail)?);
    } else {
        println!("{}", format_item_text(&detail));
    }

    Ok(())
}

/// One item with its thread; a missing issue is reported by number
pub async fn item_data<T: Transport>(
    client: &GitHubClient<T>,
    number: u64,
) -> Result<ItemDetail> {
    match load_item_detail(client, number).await {
        Ok(detail) => Ok(detail),
        Err(err) if err.status() == Some(404) => Err(eyre!(
            "Item #{} not found in {}",
            number,
            client.config().repo_path()
        )),
        Err(err) => Err(Report::new(err).wrap_err(format!("Failed to load item #{number}"))),
    }
}

fn format_item_text(detail: &ItemDetail) -> String {
    let item = &detail.item;
    let mut result = format!(
        "\n{} {}\n\n",
        format!("#{}", item.number).yellow().bold(),
        item.title.white().bold()
    );

    let mut table = new_table();
    if let Some(url) = &item.url {
        table.add_row(prettytable::row!["URL", url]);
    }
    if let Some(thumbnail) = &item.thumbnail {
        table.add_row(prettytable::row!["Thumbnail", thumbnail]);
    }
    table.add_row(prettytable::row!["Submitted by", item.author.login]);
    table.add_row(prettytable::row![
        "Posted",
        item.created_at.format("%Y-%m-%d %H:%M UTC")
    ]);
    table.add_row(prettytable::row![
        "Rating",
        format_stars(Some(&detail.ratings.stat))
    ]);
    table.add_row(prettytable::row!["Issue", item.detail_url]);
    result.push_str(&table.to_string());

    if !item.summary.is_empty() {
        result.push_str(&format!("\n{}\n", item.summary));
    }

    result.push_str(&format!(
        "\n{} ({})\n",
        "Comments".bright_cyan().bold(),
        detail.thread.len()
    ));
    if detail.thread.is_empty() {
        result.push_str(&format!("{}\n", "No comments yet.".yellow()));
    }
    for view in &detail.thread {
        result.push_str(&format_comment(view));
    }

    result.push_str(&format!(
        "\n{}: {}\n",
        "Rate it".green(),
        format!("ratehub rate {} <STARS>", item.number).cyan()
    ));

    result
}

fn format_comment(view: &CommentView) -> String {
    let badge = match view.rating {
        Some(value) => format!(" {}", format!("[{value}/5]").bright_yellow().bold()),
        None => String::new(),
    };

    let mut result = format!(
        "\n{} {}{}\n",
        view.comment.author.login.bright_white().bold(),
        view.comment
            .created_at
            .format("%Y-%m-%d")
            .to_string()
            .bright_black(),
        badge
    );
    for line in view.commentary.lines() {
        result.push_str(&format!("    {line}\n"));
    }

    result
}
