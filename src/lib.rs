//! Dynamic subcommand completions for host tools with installable extensions.
//!
//! The static part of a completion spec (built-in subcommands, flags) is
//! authored by hand. What cannot be authored is the set of extensions a user
//! has installed, e.g. `dotnet` global tools. This crate runs the tool's
//! listing command, reads the table it prints and produces one completion
//! candidate per installed command alias:
//!
//! ```no_run
//! use dotnet_complete::{Generator, GeneratorConfig, ShellExecutor};
//!
//! # async fn run() -> dotnet_complete::Result<()> {
//! let generator = Generator::new(GeneratorConfig::default(), ShellExecutor);
//! let spec = generator.generate().await?;
//! for candidate in &spec.subcommands {
//!     println!("{}\t{}", candidate.name, candidate.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod exec;
pub mod generator;
pub mod model;
pub mod table;

pub use error::{Error, ExecError, Result, RowParseError};
pub use exec::{CannedExecutor, CommandExecutor, ShellExecutor};
pub use generator::{Duplicates, Generator, GeneratorConfig, RowPolicy};
pub use model::{ArgsSpec, Candidate, GeneratedSpec, ToolEntry};
pub use table::Tokenizer;
