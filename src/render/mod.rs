//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod summary;

use crate::model::ApiSnapshot;
use anyhow::{anyhow, Result};

/// Trait for rendering an API snapshot into a specific output format.
pub trait Renderer {
    fn render(&self, api: &ApiSnapshot) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "summary" | "text" => Ok(Box::new(summary::SummaryRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use summary or json", format)),
    }
}
