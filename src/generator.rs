//! Dynamic subcommand generator.
//!
//! Runs the host tool's listing command once, parses the table it prints and
//! turns every installed tool alias into a completion candidate.

use crate::error::{Error, Result};
use crate::exec::CommandExecutor;
use crate::model::{ArgsSpec, Candidate, GeneratedSpec, ToolEntry};
use crate::table::{self, Tokenizer};
use std::collections::HashSet;

/// What to do with a data row that fails the column check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Abort the whole generation on the first malformed row.
    #[default]
    FailFast,
    /// Log and drop malformed rows, keep the rest.
    Skip,
}

/// Handling of candidates that share a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Duplicates {
    /// Leave every candidate in place.
    #[default]
    Keep,
    /// Keep the first candidate per name.
    FirstWins,
}

/// Generator settings for one host tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Host tool invocation name, used as the result's root name
    pub tool: String,
    /// Prefix stripped from aliases, e.g. "dotnet-"
    pub prefix: String,
    /// Command listing the installed extensions
    pub listing_command: String,
    pub tokenizer: Tokenizer,
    pub row_policy: RowPolicy,
    pub duplicates: Duplicates,
}

impl GeneratorConfig {
    /// Settings following the `<tool> tool list --global` / `<tool>-` convention.
    pub fn for_tool(tool: &str) -> Self {
        Self {
            tool: tool.to_string(),
            prefix: format!("{}-", tool),
            listing_command: format!("{} tool list --global", tool),
            tokenizer: Tokenizer::default(),
            row_policy: RowPolicy::default(),
            duplicates: Duplicates::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_tool("dotnet")
    }
}

/// Completion generator bound to an executor.
pub struct Generator<E> {
    config: GeneratorConfig,
    executor: E,
}

impl<E: CommandExecutor> Generator<E> {
    pub fn new(config: GeneratorConfig, executor: E) -> Self {
        Self { config, executor }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the listing command and build the completion result.
    ///
    /// Executor failures are returned as [`Error::Execution`] without retry.
    pub async fn generate(&self) -> Result<GeneratedSpec> {
        let output = self.executor.execute(&self.config.listing_command).await?;
        self.parse_listing(&output)
    }

    /// Build the completion result from already captured listing output.
    pub fn parse_listing(&self, output: &str) -> Result<GeneratedSpec> {
        let mut subcommands = Vec::new();

        for (line, text) in table::data_rows(output) {
            let entry = match self.config.tokenizer.parse_row(text) {
                Ok(entry) => entry,
                Err(source) => match self.config.row_policy {
                    RowPolicy::FailFast => {
                        return Err(Error::MalformedRow {
                            line,
                            text: text.to_string(),
                            source,
                        });
                    }
                    RowPolicy::Skip => {
                        tracing::warn!(line, row = text, error = %source, "skipping malformed listing row");
                        continue;
                    }
                },
            };
            tracing::debug!(
                line,
                package = %entry.package_id,
                version = %entry.version,
                commands = %entry.raw_name,
                "parsed tool entry"
            );
            subcommands.extend(candidates_for(&entry, &self.config.prefix));
        }

        if self.config.duplicates == Duplicates::FirstWins {
            dedupe_first_wins(&mut subcommands);
        }

        Ok(GeneratedSpec {
            name: self.config.tool.clone(),
            subcommands,
        })
    }
}

/// One candidate per alias of an entry, in alias order.
pub fn candidates_for(entry: &ToolEntry, prefix: &str) -> Vec<Candidate> {
    entry
        .aliases()
        .map(|alias| Candidate {
            name: strip_prefix(alias, prefix).to_string(),
            description: alias.to_string(),
            args: ArgsSpec::trailing(),
        })
        .collect()
}

/// Remove `prefix` from the front of `alias`. An alias that is nothing but
/// the prefix stays whole so the name is never empty.
pub fn strip_prefix<'a>(alias: &'a str, prefix: &str) -> &'a str {
    match alias.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => rest,
        _ => alias,
    }
}

fn dedupe_first_wins(candidates: &mut Vec<Candidate>) {
    let mut seen = HashSet::new();
    candidates.retain(|c| {
        let first = seen.insert(c.name.clone());
        if !first {
            tracing::debug!(name = %c.name, description = %c.description, "dropping duplicate candidate");
        }
        first
    });
}
