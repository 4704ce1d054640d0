//! Namespace page reader, also used for the global function listing.

use super::patterns::RE_NAMESPACE_NAME;
use crate::error::{Result, ScrapeError};
use crate::model::*;
use std::fs;
use std::path::Path;

/// Page listing the free functions of the global scope. It has no
/// "Namespace Reference" title.
pub const GLOBAL_FUNCTIONS_FILE: &str = "group__funcs.html";

impl Namespace {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ScrapeError::io(path, e))?;
        Self::parse(&content, &path.to_string_lossy())
    }

    pub fn parse(content: &str, source: &str) -> Result<Self> {
        let name = match RE_NAMESPACE_NAME.captures(content) {
            Some(caps) => caps[1].to_string(),
            None if is_global_functions_file(source) => GLOBAL_NAMESPACE.to_string(),
            None => {
                return Err(ScrapeError::updated_doc(format!(
                    "no namespace name in {}",
                    source
                )))
            }
        };

        let mut functions: Vec<Function> = Vec::new();
        for line in content.lines() {
            if let Some(function) = Function::try_parse(line) {
                functions.push(function);
            }
            if let Some(description) = Description::try_parse(line, None) {
                if let Some(function) = functions.last_mut() {
                    function.description = Some(description);
                }
            }
        }

        tracing::debug!(namespace = %name, functions = functions.len(), "parsed namespace");
        Ok(Namespace { name, functions })
    }
}

fn is_global_functions_file(source: &str) -> bool {
    Path::new(source)
        .file_name()
        .is_some_and(|name| name == GLOBAL_FUNCTIONS_FILE)
}
