use crate::prelude::*;
use clap::Parser;

mod catalog;
mod commands;
mod config;
mod error;
mod github;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse and rate a catalog kept as labeled GitHub issues"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    #[clap(flatten)]
    hub: config::HubArgs,

    /// Whether to display additional information.
    #[clap(long, env = "RATEHUB_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Most recently submitted items
    Latest(commands::latest::LatestOptions),

    /// Best rated items
    Top(commands::top::TopOptions),

    /// An item with its ratings and comments
    Item(commands::item::ItemOptions),

    /// Show how to rate an item
    Rate(commands::rate::RateOptions),

    /// Show where to submit a new item
    Submit,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Latest(options) => commands::latest::run(options, app.global).await,
        SubCommands::Top(options) => commands::top::run(options, app.global).await,
        SubCommands::Item(options) => commands::item::run(options, app.global).await,
        SubCommands::Rate(options) => commands::rate::run(options, app.global),
        SubCommands::Submit => commands::submit::run(app.global),
    }
}
