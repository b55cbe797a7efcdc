//! Listing table parser — header skipping, column splitting, row schema check.
//!
//! `dotnet tool list --global` prints a fixed three-column table:
//!
//! ```text
//! Package Id      Version      Commands
//! -------------------------------------
//! dotnetsay       2.1.4        dotnetsay
//! ```
//!
//! The first two lines are always a header and a separator. Every other
//! non-blank line is a data row.

use crate::error::RowParseError;
use crate::model::ToolEntry;
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading lines (column titles + separator) before data rows.
pub const HEADER_LINES: usize = 2;

// Column gap: two or more whitespace characters.
static RE_COLUMN_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

// Legacy splitter: runs starting with a letter, space or one of `.[]#,/`
// followed by at least one non-space character. Matches keep their leading
// space and are trimmed afterwards.
static RE_HEURISTIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[a-zA-Z \.\[\]#,/][^ ]+)+").unwrap());

/// How a data row is split into cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tokenizer {
    /// Cells separated by runs of two or more whitespace characters.
    #[default]
    Columns,
    /// Punctuation-based run matching, kept for odd listing layouts.
    Heuristic,
}

impl Tokenizer {
    /// Look up a tokenizer by its CLI name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "columns" => Some(Self::Columns),
            "heuristic" => Some(Self::Heuristic),
            _ => None,
        }
    }

    /// Split a row into trimmed, non-empty cells.
    pub fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let cells: Box<dyn Iterator<Item = &'a str> + 'a> = match self {
            Self::Columns => Box::new(RE_COLUMN_GAP.split(line.trim())),
            Self::Heuristic => Box::new(RE_HEURISTIC_RUN.find_iter(line).map(|m| m.as_str())),
        };
        cells.map(str::trim).filter(|cell| !cell.is_empty()).collect()
    }

    /// Split a row and check it against the three-column schema.
    /// Cells past the third are ignored.
    pub fn parse_row(&self, line: &str) -> Result<ToolEntry, RowParseError> {
        let cells = self.tokenize(line);
        match cells.as_slice() {
            [] => Err(RowParseError::Empty),
            [package_id, version, raw_name, ..] => Ok(ToolEntry {
                package_id: package_id.to_string(),
                version: version.to_string(),
                raw_name: raw_name.to_string(),
            }),
            partial => Err(RowParseError::MissingColumns {
                found: partial.len(),
            }),
        }
    }
}

/// Data rows of a captured listing with their 1-based line numbers.
///
/// The header lines are dropped unconditionally; output shorter than the
/// header yields nothing. Blank lines (such as the one left by a trailing
/// newline) are not rows.
pub fn data_rows(output: &str) -> impl Iterator<Item = (usize, &str)> {
    output
        .lines()
        .enumerate()
        .skip(HEADER_LINES)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line))
}
