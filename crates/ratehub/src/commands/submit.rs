use crate::prelude::{println, *};
use crate::Global;
use colored::Colorize;

/// Items are submitted through the tracker's issue form
pub fn run(global: Global) -> Result<()> {
    let config = global.hub.resolve()?;
    config.validate()?;

    println!(
        "{}: {}",
        "Submit a new item".bright_cyan().bold(),
        config.new_item_url().cyan().underline()
    );

    Ok(())
}
