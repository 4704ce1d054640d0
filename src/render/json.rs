//! JSON renderer: the snapshot as-is, for completion generators.

use crate::model::ApiSnapshot;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, api: &ApiSnapshot) -> Result<String> {
        let mut out = serde_json::to_string_pretty(api).context("failed to serialize API snapshot")?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;

    #[test]
    fn renders_type_field_names() {
        let api = ApiSnapshot {
            namespaces: vec![Namespace {
                name: "_G".to_string(),
                functions: vec![Function {
                    name: "Random".to_string(),
                    parameters: vec![Variable::new("Max", Type::new("int", false, false))],
                    return_type: Type::new("int", false, false),
                    description: None,
                }],
            }],
            ..Default::default()
        };
        let out = JsonRenderer.render(&api).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let param = &value["namespaces"][0]["functions"][0]["parameters"][0];
        assert_eq!(param["name"], "Max");
        assert_eq!(param["type"]["name"], "int");
    }

    #[test]
    fn constructor_index_is_serialized() {
        let method = |name: &str| Method {
            function: Function {
                name: name.to_string(),
                parameters: Vec::new(),
                return_type: Type::nil(),
                description: None,
            },
            class: "Color".to_string(),
        };
        let api = ApiSnapshot {
            classes: vec![Class {
                name: "Color".to_string(),
                parent_names: Vec::new(),
                description: Description::new("Color instance", None),
                methods: vec![method("Reset"), method("Color")],
                attributes: Vec::new(),
                constructor: Some(1),
            }],
            ..Default::default()
        };
        let out = JsonRenderer.render(&api).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["classes"][0]["constructor"], 1);
    }
}
