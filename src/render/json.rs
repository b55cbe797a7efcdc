//! JSON renderer — the completion-spec shape consumed by the host engine.
//!
//! ```json
//! {"name": "dotnet", "subcommands": [{"name": "foo", "description": "dotnet-foo",
//!   "args": {"name": "args", "isOptional": true}}]}
//! ```

use crate::render::Renderer;
use anyhow::{Context, Result};
use dotnet_complete::GeneratedSpec;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, spec: &GeneratedSpec) -> Result<String> {
        let mut out = serde_json::to_string_pretty(spec).context("failed to serialize completion spec")?;
        out.push('\n');
        Ok(out)
    }
}
