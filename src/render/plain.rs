//! Plain renderer — `name<TAB>description` per line, for shell glue.

use crate::render::Renderer;
use anyhow::Result;
use dotnet_complete::GeneratedSpec;

pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, spec: &GeneratedSpec) -> Result<String> {
        let mut out = String::new();
        for candidate in &spec.subcommands {
            out.push_str(&candidate.name);
            out.push('\t');
            out.push_str(&candidate.description);
            out.push('\n');
        }
        Ok(out)
    }
}
