//! Line patterns for the Doxygen pages of the Lua API docs.
//!
//! Every record the scraper understands starts on one physical line, so each
//! pattern is matched against a single line (or, for page titles, against the
//! whole file).

use regex::{Captures, Regex};
use std::sync::LazyLock;

// -- Member declarations ------------------------------------------------------

// <td class="memItemLeft" ...>Vector&#160;</td><td class="memItemRight" ...><a class="el" href="...">GetPosition</a> (int Index)
pub static RE_FUNCTION_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"<td class="memItemLeft"[^>]*>(?P<returns>.*?)</td>"#,
        r#"<td class="memItemRight"[^>]*><a class="el" href="[^"]*">(?P<name>\w+)</a>"#,
        r#"\s*\((?P<parameters>[^)]*)\)"#
    ))
    .unwrap()
});

// Applied to one comma-separated piece of a cleaned parameter list.
pub static RE_FUNCTION_PARAMETER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?:(?P<static>static\s+)|(?P<const>const\s+))*",
        r"(?P<type>[\w.:]+)(?:[\s*&]+(?P<name>\w+))?"
    ))
    .unwrap()
});

// Same shape as a function signature but without an argument list.
pub static RE_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"<td class="memItemLeft"[^>]*>(?P<type>.*?)</td>"#,
        r#"<td class="memItemRight"[^>]*><a class="el" href="[^"]*">(?P<name>\w+)</a>\s*</td>"#
    ))
    .unwrap()
});

// Return types and attribute types, after HTML cleanup.
pub static RE_TYPE_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(?P<static>static\s+)|(?P<const>const\s+))*(?P<type>[\w.:]+)").unwrap()
});

pub static RE_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"<td class="mdescRight">(.*?)(?:&#160;)?"#,
        r#"(?:<a href="[^"]*">More\.\.\.</a>)?(?:<br\s*/?>)?</td>"#
    ))
    .unwrap()
});

// -- Page titles --------------------------------------------------------------

pub static RE_CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<div class="title">(\w+) Class Reference</div>"#).unwrap());

pub static RE_INHERITS_FROM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Inherits <a class="el" href="[^"]*">(\w+)</a>"#).unwrap());

pub static RE_NAMESPACE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="title">(\w+) Namespace Reference</div>"#).unwrap()
});

// -- Enumerations -------------------------------------------------------------

pub static RE_ENUM_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r##"<h2 class="memtitle"><span class="permalink"><a href="#(?P<link>[^"]+)">.*?</a></span>"##,
        r#"\s*(?P<name>\w+)\s*</h2>"#
    ))
    .unwrap()
});

pub static RE_ENUM_MEMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"<td class="fieldname">(?:<a [^>]*></a>)?(?P<name>\w+)(?:&#160;)?</td>"#,
        r#"(?:<td class="fielddoc">(?P<desc>.*?)</td>)?"#
    ))
    .unwrap()
});

// -- File names ---------------------------------------------------------------

// Member index pages ("class_x-members.html") fall outside the character class.
pub static RE_CLASS_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^class_[0-9A-Za-z_]*\.html$").unwrap());

pub static RE_NAMESPACE_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^namespace_\w+\.html$").unwrap());

// -- HTML cleanup -------------------------------------------------------------

pub static RE_HTML_REPLACER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>|&[#\w]+;").unwrap());

static RE_HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static RE_HTML_ENTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&(#?\w+);").unwrap());

/// Remove every tag and entity. Used on type and parameter text, where
/// `&amp;` and friends are noise.
pub fn strip_html(text: &str) -> String {
    RE_HTML_REPLACER.replace_all(text, "").into_owned()
}

/// Remove tags and decode the entities that carry meaning in prose.
pub fn clean_text(text: &str) -> String {
    let untagged = RE_HTML_TAG.replace_all(text, "");
    let decoded = RE_HTML_ENTITY.replace_all(&untagged, |caps: &Captures| decode_entity(&caps[1]));
    decoded.trim().to_string()
}

fn decode_entity(entity: &str) -> &'static str {
    match entity {
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "quot" => "\"",
        "apos" | "#39" => "'",
        "nbsp" | "#160" => " ",
        _ => "",
    }
}

// -- Capture accessors --------------------------------------------------------

/// Whether `name` exists in the pattern and took part in the match.
pub fn has_group(caps: &Captures, name: &str) -> bool {
    caps.name(name).is_some()
}

/// Group text, or `None` when there is no match or the group is absent.
pub fn group_opt<'h>(caps: Option<&Captures<'h>>, name: &str) -> Option<&'h str> {
    caps?.name(name).map(|m| m.as_str())
}

/// Like [`group_opt`] but defaults to the empty string.
pub fn group_or_empty<'h>(caps: Option<&Captures<'h>>, name: &str) -> &'h str {
    group_opt(caps, name).unwrap_or("")
}
