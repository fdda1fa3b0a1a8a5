//! Front matter parsing
//!
//! Issue bodies may open with a small metadata block:
//!
//! ```text
//! ---
//! url: https://example.com/talk
//! thumbnail: https://example.com/talk.png
//! summary: >
//!   A talk about parsing
//!   things leniently.
//! ---
//! Free text that follows the block.
//! ```
//!
//! The parser never fails. Text that does not open with a complete block is
//! returned untouched as `content` with an empty mapping, and lines inside a
//! block that cannot be classified are dropped.

use serde::Serialize;
use std::collections::BTreeMap;

const DELIMITER: &str = "---";

/// Parsed metadata block plus the text that follows it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    pub meta: BTreeMap<String, String>,
    pub content: String,
}

/// How continuation lines of a multiline value are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    /// `>`: lines joined with single spaces
    Folded,
    /// `|`: lines joined with newlines
    Literal,
}

/// Classification of one line inside the block
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Delimiter,
    Key { key: &'a str, value: &'a str },
    Continuation(&'a str),
    Blank,
    Malformed,
}

/// Key whose value is still accumulating
struct OpenKey {
    key: String,
    style: Style,
    parts: Vec<String>,
}

impl OpenKey {
    fn finish(self) -> (String, String) {
        let separator = match self.style {
            Style::Folded => " ",
            Style::Literal => "\n",
        };
        (self.key, self.parts.join(separator).trim().to_string())
    }
}

impl FrontMatter {
    /// Parse `text`, splitting off a leading metadata block if there is one
    pub fn parse(text: &str) -> Self {
        match split_block(text) {
            Some((block, content)) => Self {
                meta: parse_block(block),
                content: content.to_string(),
            },
            None => Self {
                meta: BTreeMap::new(),
                content: text.to_string(),
            },
        }
    }

    /// Non-empty value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.meta
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Serialize back into a block followed by `content`
    ///
    /// Values spanning several lines are written in literal (`|`) style so
    /// that parsing the output yields the same mapping.
    pub fn render(&self) -> String {
        let mut out = String::from(DELIMITER);
        out.push('\n');
        for (key, value) in &self.meta {
            if value.contains('\n') {
                out.push_str(&format!("{key}: |\n"));
                for line in value.lines() {
                    out.push_str(&format!("  {line}\n"));
                }
            } else {
                out.push_str(&format!("{key}: {value}\n"));
            }
        }
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(&self.content);
        out
    }
}

/// Locate the block: returns (lines between delimiters, text after closing delimiter)
fn split_block(text: &str) -> Option<(Vec<&str>, &str)> {
    let mut lines = text.split_inclusive('\n');

    let opening = lines.next()?;
    if !is_delimiter(opening) {
        return None;
    }

    let mut offset = opening.len();
    let mut block = Vec::new();
    for raw in lines {
        offset += raw.len();
        if is_delimiter(raw) {
            return Some((block, &text[offset..]));
        }
        block.push(strip_eol(raw));
    }

    None
}

fn strip_eol(line: &str) -> &str {
    line.trim_end_matches('\n').trim_end_matches('\r')
}

fn is_delimiter(line: &str) -> bool {
    strip_eol(line).trim_end() == DELIMITER
}

fn classify(line: &str, multiline_open: bool) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }
    if is_delimiter(line) {
        return Line::Delimiter;
    }

    let indented = line.starts_with(char::is_whitespace);
    if multiline_open && indented {
        return Line::Continuation(line.trim());
    }

    if !indented {
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if !key.is_empty() {
                return Line::Key {
                    key,
                    value: value.trim(),
                };
            }
        }
    }

    if multiline_open {
        Line::Continuation(line.trim())
    } else {
        Line::Malformed
    }
}

fn parse_block(lines: Vec<&str>) -> BTreeMap<String, String> {
    let mut meta = BTreeMap::new();
    let mut open: Option<OpenKey> = None;

    for line in lines {
        match classify(line, open.is_some()) {
            Line::Key { key, value } => {
                if let Some(done) = open.take() {
                    let (k, v) = done.finish();
                    meta.insert(k, v);
                }
                match value {
                    ">" | "|" => {
                        let style = if value == ">" {
                            Style::Folded
                        } else {
                            Style::Literal
                        };
                        open = Some(OpenKey {
                            key: key.to_string(),
                            style,
                            parts: Vec::new(),
                        });
                    }
                    _ => {
                        meta.insert(key.to_string(), value.to_string());
                    }
                }
            }
            Line::Continuation(text) => {
                if let Some(current) = open.as_mut() {
                    current.parts.push(text.to_string());
                }
            }
            // A stray delimiter inside the block cannot occur (the block ends
            // at the first one), but it is as meaningless as a malformed line.
            Line::Delimiter | Line::Blank | Line::Malformed => {}
        }
    }

    if let Some(done) = open.take() {
        let (k, v) = done.finish();
        meta.insert(k, v);
    }

    meta
}
