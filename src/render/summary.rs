//! Plain-text overview of a snapshot, one line per record.

use crate::model::*;
use crate::render::Renderer;
use anyhow::Result;
use std::fmt::Write;

pub struct SummaryRenderer;

impl Renderer for SummaryRenderer {
    fn render(&self, api: &ApiSnapshot) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "classes: {}", api.classes.len())?;
        writeln!(out, "namespaces: {}", api.namespaces.len())?;
        writeln!(out, "enumerators: {}", api.enumerators.len())?;

        if !api.classes.is_empty() {
            out.push('\n');
        }
        for class in &api.classes {
            write!(
                out,
                "class {} ({} methods, {} attributes",
                class.name,
                class.methods.len(),
                class.attributes.len()
            )?;
            if class.constructor().is_some() {
                out.push_str(", constructor");
            }
            out.push(')');
            if !class.parent_names.is_empty() {
                write!(out, " : {}", class.parent_names.join(", "))?;
            }
            out.push('\n');
        }

        if !api.namespaces.is_empty() {
            out.push('\n');
        }
        for ns in &api.namespaces {
            writeln!(out, "namespace {} ({} functions)", ns.name, ns.functions.len())?;
        }

        if !api.enumerators.is_empty() {
            out.push('\n');
        }
        for en in &api.enumerators {
            writeln!(out, "enum {} ({} members)", en.name, en.members.len())?;
        }
        Ok(out)
    }
}
