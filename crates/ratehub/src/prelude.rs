pub use crate::error::Error;

pub use anstream::eprintln;
pub use anstream::println;
pub use color_eyre::eyre::{eyre, Context, Result};

/// Borderless table used by every human-readable listing
pub fn new_table() -> prettytable::Table {
    let mut table = prettytable::Table::new();
    table.set_format(
        prettytable::format::FormatBuilder::new()
            .padding(1, 1)
            .build(),
    );
    table
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `...`
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
