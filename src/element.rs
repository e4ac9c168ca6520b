//! Dublin Core element records and the fixed 15-name vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DublinCoreError;

/// One of the 15 Dublin Core element names.
///
/// Declaration order is the vocabulary order used for iteration and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementName {
    Title,
    Creator,
    Subject,
    Description,
    Publisher,
    Contributor,
    Date,
    Type,
    Format,
    Identifier,
    Source,
    Language,
    Relation,
    Coverage,
    Rights,
}

impl ElementName {
    /// Every element name in vocabulary order, the order `DublinCore::all`
    /// and `DublinCore::to_html` follow.
    pub const ALL: [ElementName; 15] = [
        ElementName::Title,
        ElementName::Creator,
        ElementName::Subject,
        ElementName::Description,
        ElementName::Publisher,
        ElementName::Contributor,
        ElementName::Date,
        ElementName::Type,
        ElementName::Format,
        ElementName::Identifier,
        ElementName::Source,
        ElementName::Language,
        ElementName::Relation,
        ElementName::Coverage,
        ElementName::Rights,
    ];

    /// Lowercase name, as stored on extracted elements.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementName::Title => "title",
            ElementName::Creator => "creator",
            ElementName::Subject => "subject",
            ElementName::Description => "description",
            ElementName::Publisher => "publisher",
            ElementName::Contributor => "contributor",
            ElementName::Date => "date",
            ElementName::Type => "type",
            ElementName::Format => "format",
            ElementName::Identifier => "identifier",
            ElementName::Source => "source",
            ElementName::Language => "language",
            ElementName::Relation => "relation",
            ElementName::Coverage => "coverage",
            ElementName::Rights => "rights",
        }
    }

    /// Position in the vocabulary, used to index per-name storage.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Exact, case-insensitive lookup.
    pub fn from_name(name: &str) -> Option<ElementName> {
        Self::ALL
            .into_iter()
            .find(|element| element.as_str().eq_ignore_ascii_case(name))
    }

    /// Case-insensitive prefix lookup: the first vocabulary entry that starts
    /// with `prefix`. An empty prefix matches nothing.
    pub fn from_prefix(prefix: &str) -> Option<ElementName> {
        if prefix.is_empty() {
            return None;
        }
        let prefix = prefix.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|element| element.as_str().starts_with(&prefix))
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementName {
    type Err = DublinCoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementName::from_name(s).ok_or_else(|| DublinCoreError::UnknownElement(s.to_string()))
    }
}

/// Placeholder handed out when a lookup finds nothing.
pub(crate) static PLACEHOLDER: Element = Element {
    name: None,
    qualifier: None,
    content: None,
    language: None,
    scheme: None,
};

/// A single Dublin Core metadata element.
///
/// Values are stored verbatim; the string getters return them HTML-escaped
/// and fall back to an empty string when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    qualifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheme: Option<String>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// An element with every field unset. Its getters all return `""`.
    pub fn placeholder() -> &'static Element {
        &PLACEHOLDER
    }

    /// True when no field has been set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.qualifier.is_none()
            && self.content.is_none()
            && self.language.is_none()
            && self.scheme.is_none()
    }

    pub fn name(&self) -> String {
        escape(self.name.as_deref())
    }

    pub fn qualifier(&self) -> String {
        escape(self.qualifier.as_deref())
    }

    pub fn content(&self) -> String {
        escape(self.content.as_deref())
    }

    pub fn language(&self) -> String {
        escape(self.language.as_deref())
    }

    pub fn scheme(&self) -> String {
        escape(self.scheme.as_deref())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> String {
        self.name = Some(name.into());
        self.name()
    }

    pub fn set_qualifier(&mut self, qualifier: impl Into<String>) -> String {
        self.qualifier = Some(qualifier.into());
        self.qualifier()
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> String {
        self.content = Some(content.into());
        self.content()
    }

    pub fn set_language(&mut self, language: impl Into<String>) -> String {
        self.language = Some(language.into());
        self.language()
    }

    pub fn set_scheme(&mut self, scheme: impl Into<String>) -> String {
        self.scheme = Some(scheme.into());
        self.scheme()
    }

    pub fn raw_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn raw_qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    pub fn raw_content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn raw_language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn raw_scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Render as a `<meta>` tag, e.g. `<meta name="DC.Date.created" content="2001" scheme="W3CDTF">`.
    ///
    /// The qualifier is written exactly as stored; every other value is escaped.
    pub fn to_html(&self) -> String {
        let mut name = format!("DC.{}", capitalize(&self.name()));
        if let Some(qualifier) = self.qualifier.as_deref().filter(|q| !q.is_empty()) {
            name.push('.');
            name.push_str(qualifier);
        }

        let mut html = format!(r#"<meta name="{}" content="{}""#, name, self.content());
        let scheme = self.scheme();
        if !scheme.is_empty() {
            html.push_str(&format!(r#" scheme="{}""#, scheme));
        }
        let language = self.language();
        if !language.is_empty() {
            html.push_str(&format!(r#" lang="{}""#, language));
        }
        html.push('>');
        html
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

// Each character is replaced at most once, so "&lt;" is never re-escaped.
fn escape(value: Option<&str>) -> String {
    let value = value.unwrap_or("");
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
