//! Data model for generated completions — format-agnostic.

use serde::Serialize;

/// One data row of the listing command, split into its three columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolEntry {
    /// Package identifier column (informational)
    pub package_id: String,
    /// Version column (informational, not used for candidates)
    pub version: String,
    /// Commands column, possibly several aliases joined by commas
    pub raw_name: String,
}

impl ToolEntry {
    /// Individual aliases from the commands column, empty pieces dropped.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.raw_name
            .split(',')
            .map(str::trim)
            .filter(|alias| !alias.is_empty())
    }
}

/// Argument shape of a generated subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgsSpec {
    pub name: String,
    pub is_optional: bool,
}

impl ArgsSpec {
    /// A single optional freeform argument forwarded to the extension.
    pub fn trailing() -> Self {
        Self {
            name: "args".to_string(),
            is_optional: true,
        }
    }
}

/// A single completion suggestion for an installed extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Invocable name, host prefix stripped
    pub name: String,
    /// Alias as printed by the listing command
    pub description: String,
    pub args: ArgsSpec,
}

/// Result handed to the completion engine: the root command name plus the
/// dynamically discovered subcommands, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedSpec {
    pub name: String,
    pub subcommands: Vec<Candidate>,
}
