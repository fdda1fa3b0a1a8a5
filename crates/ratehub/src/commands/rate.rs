use crate::prelude::{println, *};
use crate::Global;
use colored::Colorize;
use ratehub_core::config::{new_comment_url, HubConfig};
use ratehub_core::rating::rating_template;
use serde::Serialize;

#[derive(Debug, clap::Args, Clone)]
pub struct RateOptions {
    /// Issue number of the item
    #[arg(value_name = "NUMBER")]
    pub number: u64,

    /// Stars to give, from 1 to 5
    #[arg(value_name = "STARS", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub stars: u8,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// What to post, and where, to rate an item
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RateInstructions {
    pub number: u64,
    pub stars: u8,
    pub comment: String,
    pub comment_url: String,
}

/// Ratings are plain comments, so rating only needs links; nothing is fetched
pub fn run(options: RateOptions, global: Global) -> Result<()> {
    let config = global.hub.resolve()?;
    config.validate()?;

    let instructions = rate_data(&config, options.number, options.stars)?;

    if options.json {
        println!("{}", super::format_json(&instructions)?);
    } else {
        println!("{}", format_rate_text(&instructions));
    }

    Ok(())
}

pub fn rate_data(config: &HubConfig, number: u64, stars: u8) -> Result<RateInstructions> {
    let comment = rating_template(stars)
        .ok_or_else(|| eyre!("Stars must be between 1 and 5, got {}", stars))?;

    Ok(RateInstructions {
        number,
        stars,
        comment,
        comment_url: new_comment_url(&config.issue_html_url(number)),
    })
}

fn format_rate_text(instructions: &RateInstructions) -> String {
    format!(
        "\n{}\n\n{}\n\n{}: {}\n",
        format!(
            "Post this comment on item #{} to rate it {} stars:",
            instructions.number, instructions.stars
        )
        .bright_cyan()
        .bold(),
        instructions.comment,
        "Comment here".green(),
        instructions.comment_url.cyan().underline()
    )
}
