//! dotnet-complete — print completion candidates for installed global tools.
//!
//! Two modes:
//!
//! - **live** (default): runs `dotnet tool list --global` and parses its output
//! - **input**: `dotnet-complete -i listing.txt` (or `-i -` for stdin) parses
//!   previously captured listing text without running anything

mod render;

use anyhow::{Context, Result};
use clap::Parser;
use dotnet_complete::{
    CannedExecutor, CommandExecutor, Duplicates, GeneratedSpec, Generator, GeneratorConfig,
    RowPolicy, ShellExecutor, Tokenizer,
};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "dotnet-complete",
    version,
    about = "Generate completion candidates for installed dotnet global tools"
)]
struct Cli {
    /// Host tool invocation name
    #[arg(long, default_value = "dotnet")]
    tool: String,

    /// Prefix stripped from command aliases (default: "<tool>-")
    #[arg(long)]
    prefix: Option<String>,

    /// Listing command to run (default: "<tool> tool list --global")
    #[arg(long)]
    command: Option<String>,

    /// Parse listing text from a file instead of running the command. Use - for stdin.
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output format: json (default), plain
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Row splitter: columns (default), heuristic
    #[arg(long, default_value = "columns")]
    tokenizer: String,

    /// Skip malformed listing rows instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Keep only the first candidate for each name
    #[arg(long)]
    dedupe: bool,
}

impl Cli {
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig::for_tool(&self.tool);
        if let Some(ref prefix) = self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(ref command) = self.command {
            config.listing_command = command.clone();
        }
        config.tokenizer = Tokenizer::from_name(&self.tokenizer).with_context(|| {
            format!("unknown tokenizer: {}. Use columns or heuristic", self.tokenizer)
        })?;
        if self.skip_malformed {
            config.row_policy = RowPolicy::Skip;
        }
        if self.dedupe {
            config.duplicates = Duplicates::FirstWins;
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = cli.generator_config()?;
    // Fail on a bad format before running anything.
    let renderer = render::create_renderer(&cli.format)?;

    let spec = match cli.input {
        Some(ref path) => {
            let text = read_input(path)?;
            generate(config, CannedExecutor::new(text)).await?
        }
        None => generate(config, ShellExecutor).await?,
    };

    let output = renderer.render(&spec)?;
    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("failed to write output")?;
    Ok(())
}

async fn generate<E: CommandExecutor>(config: GeneratorConfig, executor: E) -> Result<GeneratedSpec> {
    let command = config.listing_command.clone();
    let generator = Generator::new(config, executor);
    let spec = generator
        .generate()
        .await
        .with_context(|| format!("failed to generate completions from `{}`", command))?;
    tracing::debug!(count = spec.subcommands.len(), "generated candidates");
    Ok(spec)
}

/// Read canned listing text from a file, or stdin for `-`.
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Log to stderr; stdout carries only the rendered candidates.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
