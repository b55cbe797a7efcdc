//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod plain;

use anyhow::{anyhow, Result};
use dotnet_complete::GeneratedSpec;

/// Trait for rendering a generated completion spec into an output format.
pub trait Renderer {
    fn render(&self, spec: &GeneratedSpec) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer)),
        "plain" | "tsv" => Ok(Box::new(plain::PlainRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use json or plain", format)),
    }
}
