//! Value objects built from a single matched line.
//!
//! Each field kind has two entry points: `try_parse`/`from_line` apply the
//! field's pattern themselves, `from_captures` takes an existing match so a
//! caller holding partially parsed state does not re-match.

use super::patterns::*;
use crate::error::FieldError;
use crate::model::*;
use regex::Captures;

impl Type {
    /// Build from a match of a pattern with `type`, `const` and `static`
    /// groups. No match yields `nil`.
    pub fn from_captures(caps: Option<&Captures>) -> Self {
        match caps {
            Some(caps) => Self::new(
                group_or_empty(Some(caps), "type"),
                has_group(caps, "const"),
                has_group(caps, "static"),
            ),
            None => Self::nil(),
        }
    }

    /// Read a type from raw HTML type text (return values, attribute types).
    fn from_hint(html: &str) -> Self {
        let text = strip_html(html);
        Self::from_captures(RE_TYPE_HINT.captures(&text).as_ref())
    }
}

impl Variable {
    /// Read one entry of a cleaned parameter list, e.g. `const Vector Pos`.
    pub fn parse_parameter(text: &str) -> Parameter {
        Self::from_captures(RE_FUNCTION_PARAMETER.captures(text).as_ref())
    }

    /// Build a parameter from a parameter-pattern match. No match yields a
    /// `nil` parameter, named after its type.
    pub fn from_captures(caps: Option<&Captures>) -> Parameter {
        Variable::new(group_or_empty(caps, "name"), Type::from_captures(caps))
    }
}

impl Attribute {
    pub fn try_parse(line: &str) -> Option<Self> {
        RE_ATTRIBUTE.captures(line).map(|caps| Self::from_captures(&caps))
    }

    pub fn from_line(line: &str) -> Result<Self, FieldError> {
        Self::try_parse(line).ok_or(FieldError::InvalidAttribute)
    }

    pub fn from_captures(caps: &Captures) -> Self {
        Self {
            variable: Variable {
                name: caps["name"].to_string(),
                ty: Type::from_hint(&caps["type"]),
            },
            description: None,
        }
    }
}

impl Function {
    pub fn try_parse(line: &str) -> Option<Self> {
        RE_FUNCTION_SIGNATURE
            .captures(line)
            .map(|caps| Self::from_captures(&caps))
    }

    pub fn from_line(line: &str) -> Result<Self, FieldError> {
        Self::try_parse(line).ok_or(FieldError::InvalidFunction)
    }

    pub fn from_captures(caps: &Captures) -> Self {
        let returns = group_or_empty(Some(caps), "returns");
        let return_type = if returns.is_empty() {
            Type::nil()
        } else {
            Type::from_hint(returns)
        };
        Self {
            name: caps["name"].to_string(),
            parameters: parse_parameters(group_or_empty(Some(caps), "parameters")),
            return_type,
            description: None,
        }
    }
}

fn parse_parameters(html: &str) -> Vec<Parameter> {
    if html.is_empty() {
        return Vec::new();
    }
    strip_html(html)
        .split(", ")
        .filter(|param| !param.trim().is_empty())
        .map(Variable::parse_parameter)
        .collect()
}

impl Method {
    pub fn try_parse(line: &str, class: &str) -> Option<Self> {
        RE_FUNCTION_SIGNATURE
            .captures(line)
            .map(|caps| Self::from_captures(&caps, class))
    }

    pub fn from_line(line: &str, class: &str) -> Result<Self, FieldError> {
        Self::try_parse(line, class).ok_or(FieldError::InvalidFunction)
    }

    /// Constructors return an instance of their class.
    pub fn from_captures(caps: &Captures, class: &str) -> Self {
        let mut function = Function::from_captures(caps);
        if function.name == class {
            function.return_type = Type::new(class, false, true);
        }
        Self {
            function,
            class: class.to_string(),
        }
    }
}

impl Description {
    /// Read a description row. `source` is the page it links to, if any.
    pub fn try_parse(line: &str, source: Option<&str>) -> Option<Self> {
        RE_DESCRIPTION
            .captures(line)
            .map(|caps| Self::from_captures(&caps, source))
    }

    pub fn from_line(line: &str, source: Option<&str>) -> Result<Self, FieldError> {
        Self::try_parse(line, source).ok_or(FieldError::InvalidDescription)
    }

    pub fn from_captures(caps: &Captures, source: Option<&str>) -> Self {
        Self::new(clean_text(caps[1].trim()), source)
    }
}

impl EnumMember {
    pub fn try_parse(line: &str) -> Option<Self> {
        RE_ENUM_MEMBER
            .captures(line)
            .map(|caps| Self::from_captures(&caps))
    }

    pub fn from_line(line: &str) -> Result<Self, FieldError> {
        Self::try_parse(line).ok_or(FieldError::InvalidEnumMember)
    }

    pub fn from_captures(caps: &Captures) -> Self {
        Self {
            name: caps["name"].to_string(),
            value: 0,
            description: clean_text(group_or_empty(Some(caps), "desc")),
        }
    }
}
