//! Class page reader.
//!
//! Two passes over one `class_*.html` page: the whole text for the title and
//! inheritance, then line by line for members. A description row belongs to
//! whichever member list was appended to last.

use super::patterns::{RE_CLASS_NAME, RE_INHERITS_FROM};
use crate::error::{Result, ScrapeError};
use crate::model::*;
use std::fs;
use std::path::Path;

/// Which member list received the most recent entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastField {
    None,
    Method,
    Attribute,
}

impl Class {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ScrapeError::io(path, e))?;
        Self::parse(&content, &path.to_string_lossy())
    }

    /// Parse a class page. `source` is the page's path, used for links.
    pub fn parse(content: &str, source: &str) -> Result<Self> {
        let name = RE_CLASS_NAME
            .captures(content)
            .map(|caps| caps[1].to_string())
            .ok_or_else(|| ScrapeError::updated_doc(format!("no class name in {}", source)))?;

        let mut class = Class {
            description: Description::new(format!("{} instance", name), Some(source)),
            name,
            parent_names: Vec::new(),
            methods: Vec::new(),
            attributes: Vec::new(),
            constructor: None,
        };

        if let Some(caps) = RE_INHERITS_FROM.captures(content) {
            class.parent_names.push(caps[1].to_string());
        }

        let mut last = LastField::None;
        for line in content.lines() {
            if let Some(method) = Method::try_parse(line, &class.name) {
                if method.is_constructor() {
                    class.constructor = Some(class.methods.len());
                }
                class.methods.push(method);
                last = LastField::Method;
            }

            if let Some(attribute) = Attribute::try_parse(line) {
                class.attributes.push(attribute);
                last = LastField::Attribute;
            }

            if let Some(description) = Description::try_parse(line, Some(source)) {
                match last {
                    LastField::Method => {
                        if let Some(method) = class.methods.last_mut() {
                            method.function.description = Some(description);
                        }
                    }
                    LastField::Attribute => {
                        if let Some(attribute) = class.attributes.last_mut() {
                            attribute.description = Some(description);
                        }
                    }
                    LastField::None => {}
                }
            }
        }

        tracing::debug!(
            class = %class.name,
            methods = class.methods.len(),
            attributes = class.attributes.len(),
            "parsed class"
        );
        Ok(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "docs/class_color.html";

    fn page(body: &[String]) -> String {
        let mut out = String::from("<html><body>\n<div class=\"title\">Color Class Reference</div>\n");
        for line in body {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("</body></html>\n");
        out
    }

    fn method(name: &str) -> String {
        format!(
            r#"<tr class="memitem:m"><td class="memItemLeft" align="right" valign="top">&#160;</td><td class="memItemRight" valign="bottom"><a class="el" href="class_color.html#m">{}</a> (float R)</td></tr>"#,
            name
        )
    }

    fn attribute(name: &str) -> String {
        format!(
            r#"<tr class="memitem:a"><td class="memItemLeft" align="right" valign="top">float&#160;</td><td class="memItemRight" valign="bottom"><a class="el" href="class_color.html#a">{}</a></td></tr>"#,
            name
        )
    }

    fn description(text: &str) -> String {
        format!(
            r#"<tr class="memdesc:d"><td class="mdescLeft">&#160;</td><td class="mdescRight">{}<br /></td></tr>"#,
            text
        )
    }

    #[test]
    fn missing_title_is_structural_error() {
        let err = Class::parse("<html></html>", SOURCE).unwrap_err();
        assert!(matches!(err, ScrapeError::UpdatedDoc { .. }));
    }

    #[test]
    fn descriptions_follow_last_field() {
        let content = page(&[
            description("orphan"),
            method("SetTint"),
            description("D1"),
            attribute("R"),
            description("D2"),
        ]);
        let class = Class::parse(&content, SOURCE).unwrap();
        assert_eq!(class.name, "Color");
        assert_eq!(class.methods.len(), 1);
        assert_eq!(class.attributes.len(), 1);

        let d1 = class.methods[0].function.description.as_ref().unwrap();
        assert_eq!(d1.text, "D1");
        assert_eq!(
            d1.link.as_deref(),
            Some("https://moddingofisaac.com/docs/class_color.html")
        );
        let d2 = class.attributes[0].description.as_ref().unwrap();
        assert_eq!(d2.text, "D2");
    }

    #[test]
    fn last_constructor_wins() {
        let content = page(&[method("Color"), method("Reset"), method("Color")]);
        let class = Class::parse(&content, SOURCE).unwrap();
        let names: Vec<_> = class.methods.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["Color", "Reset", "Color"]);
        assert_eq!(class.constructor, Some(2));
        assert!(class.constructor().unwrap().is_constructor());
    }

    #[test]
    fn inheritance_is_recorded() {
        let content = page(&[
            r#"<p>Inherits <a class="el" href="class_entity.html">Entity</a>.</p>"#.to_string(),
        ]);
        let class = Class::parse(&content, SOURCE).unwrap();
        assert_eq!(class.parent_names, ["Entity"]);
        assert_eq!(class.description.text, "Color instance");
    }

    #[test]
    fn empty_class_is_valid() {
        let class = Class::parse(&page(&[]), SOURCE).unwrap();
        assert!(class.methods.is_empty());
        assert!(class.attributes.is_empty());
        assert!(class.constructor().is_none());
    }
}
