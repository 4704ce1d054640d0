//! Data model for the extracted API, independent of any output format.
//!
//! Records are built once by the parsers in [`crate::parser`] and are not
//! mutated afterwards.

use serde::Serialize;
use std::path::Path;

/// Public location of the generated documentation pages.
pub const DOC_BASE_URL: &str = "https://moddingofisaac.com/docs/";

/// Name of the Lua global scope, used for the free-function page.
pub const GLOBAL_NAMESPACE: &str = "_G";

/// A Lua type hint. An absent hint is the `nil` type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Type {
    pub name: String,
    pub is_const: bool,
    pub is_static: bool,
}

impl Type {
    pub fn new(name: &str, is_const: bool, is_static: bool) -> Self {
        let name = if name.is_empty() { "nil" } else { name };
        Self {
            name: name.to_string(),
            is_const,
            is_static,
        }
    }

    pub fn nil() -> Self {
        Self::new("", false, false)
    }
}

impl Default for Type {
    fn default() -> Self {
        Self::nil()
    }
}

/// A named, typed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl Variable {
    /// The docs sometimes omit parameter names; the type name stands in.
    pub fn new(name: &str, ty: Type) -> Self {
        let name = if name.is_empty() {
            ty.name.clone()
        } else {
            name.to_string()
        };
        Self { name, ty }
    }
}

/// A function parameter. Order is significant and duplicates are allowed.
pub type Parameter = Variable;

/// A class attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    #[serde(flatten)]
    pub variable: Variable,
    pub description: Option<Description>,
}

/// Documentation text plus an optional link to the page it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    pub text: String,
    pub link: Option<String>,
}

impl Description {
    /// Free functions pass no source: their pages have no stable anchor.
    pub fn new(text: impl Into<String>, source: Option<&str>) -> Self {
        let link = source.map(|src| {
            let basename = Path::new(src)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| src.to_string());
            format!("{}{}", DOC_BASE_URL, basename)
        });
        Self {
            text: text.into(),
            link,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    pub description: Option<Description>,
}

/// A function bound to a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    #[serde(flatten)]
    pub function: Function,
    /// Name of the owning class.
    #[serde(skip)]
    pub class: String,
}

impl Method {
    pub fn name(&self) -> &str {
        &self.function.name
    }

    /// A method named after its class constructs instances of it.
    pub fn is_constructor(&self) -> bool {
        self.function.name == self.class
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class {
    pub name: String,
    /// Recorded from "Inherits" markers; not resolved against other classes.
    pub parent_names: Vec<String>,
    pub description: Description,
    pub methods: Vec<Method>,
    pub attributes: Vec<Attribute>,
    /// Index into `methods` of the last method named after the class.
    pub(crate) constructor: Option<usize>,
}

impl Class {
    pub fn constructor(&self) -> Option<&Method> {
        self.constructor.and_then(|i| self.methods.get(i))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Namespace {
    pub name: String,
    pub functions: Vec<Function>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    pub name: String,
    /// The docs carry no numeric values; always 0.
    pub value: i64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enumerator {
    pub name: String,
    pub members: Vec<EnumMember>,
    pub description: Description,
}

/// Everything extracted from one documentation tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiSnapshot {
    pub classes: Vec<Class>,
    pub namespaces: Vec<Namespace>,
    pub enumerators: Vec<Enumerator>,
}
