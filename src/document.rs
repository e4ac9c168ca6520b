//! Parsed Dublin Core metadata for one HTML document.

use serde::Serialize;

use crate::element::{Element, ElementName};
use crate::error::{DublinCoreError, Result};
use crate::extractors::{scan_start_tags, DublinCoreExtractor, ElementSlots};

/// Dublin Core elements found in an HTML document, grouped by element name
/// in document order, plus the diagnostics collected while scanning.
#[derive(Debug, Clone)]
pub struct DublinCore {
    elements: ElementSlots,
    errors: Vec<String>,
}

/// Defines `first` / `list` accessor pairs for each vocabulary entry.
macro_rules! element_accessors {
    ($($variant:ident => $first:ident, $list:ident;)*) => {
        $(
            #[doc = concat!("First `", stringify!($variant), "` element, or the placeholder.")]
            pub fn $first(&self) -> &Element {
                self.first(ElementName::$variant)
            }

            #[doc = concat!("All `", stringify!($variant), "` elements in document order.")]
            pub fn $list(&self) -> &[Element] {
                self.by_name(ElementName::$variant)
            }
        )*
    };
}

impl DublinCore {
    /// Parse `html` and collect its Dublin Core meta tags.
    pub fn new(html: &str) -> Result<Self> {
        if html.is_empty() {
            return Err(DublinCoreError::EmptyDocument);
        }

        let mut extractor = DublinCoreExtractor::new();
        scan_start_tags(html, &mut extractor);
        let (elements, errors) = extractor.finish();

        let document = Self { elements, errors };
        log::debug!(
            "scanned {} bytes: {} Dublin Core elements, {} errors",
            html.len(),
            document.len(),
            document.errors.len()
        );
        Ok(document)
    }

    element_accessors! {
        Title => title, titles;
        Creator => creator, creators;
        Subject => subject, subjects;
        Description => description, descriptions;
        Publisher => publisher, publishers;
        Contributor => contributor, contributors;
        Date => date, dates;
        Type => r#type, types;
        Format => format, formats;
        Identifier => identifier, identifiers;
        Source => source, sources;
        Language => language, languages;
        Relation => relation, relations;
        Coverage => coverage, coverages;
        Rights => rights, rights_all;
    }

    /// All elements stored under `name`.
    pub fn by_name(&self, name: ElementName) -> &[Element] {
        &self.elements[name.index()]
    }

    /// First element stored under `name`, or the placeholder.
    pub fn first(&self, name: ElementName) -> &Element {
        self.by_name(name)
            .first()
            .unwrap_or(Element::placeholder())
    }

    /// Elements matching `name`, which may carry a `.qualifier` suffix
    /// (`"Date.created"`).
    ///
    /// The base name matches the vocabulary case-insensitively by prefix.
    /// A qualifier matches any stored qualifier that *contains* it,
    /// ignoring case, so `"Date.created"` also finds `DC.Date.DateCreated`.
    pub fn elements(&self, name: &str) -> Result<Vec<&Element>> {
        let (base, qualifier) = match name.split_once('.') {
            Some((base, qualifier)) => (base, Some(qualifier).filter(|q| !q.is_empty())),
            None => (name, None),
        };

        let element = ElementName::from_prefix(base)
            .ok_or_else(|| DublinCoreError::UnknownElement(name.to_string()))?;
        let candidates = self.by_name(element).iter();

        let matches = match qualifier {
            Some(qualifier) => {
                let wanted = qualifier.to_lowercase();
                candidates
                    .filter(|e| {
                        e.raw_qualifier()
                            .is_some_and(|q| q.to_lowercase().contains(&wanted))
                    })
                    .collect()
            }
            None => candidates.collect(),
        };
        Ok(matches)
    }

    /// First element matching `name` (see [`DublinCore::elements`]), or the
    /// placeholder when nothing matches.
    pub fn element(&self, name: &str) -> Result<&Element> {
        Ok(self
            .elements(name)?
            .into_iter()
            .next()
            .unwrap_or(Element::placeholder()))
    }

    /// Every stored element, in vocabulary order then document order.
    pub fn all(&self) -> Vec<&Element> {
        self.elements.iter().flatten().collect()
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.elements.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.iter().all(Vec::is_empty)
    }

    /// Diagnostics for malformed DC meta tags, in document order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All elements as `<meta>` tags, one per line.
    pub fn to_html(&self) -> String {
        self.all()
            .into_iter()
            .map(|element| format!("{}\n", element.to_html()))
            .collect()
    }
}

#[derive(Serialize)]
struct DublinCoreJson<'a> {
    elements: Vec<&'a Element>,
    errors: &'a [String],
}

impl Serialize for DublinCore {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        DublinCoreJson {
            elements: self.all(),
            errors: &self.errors,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
    <html>
    <head>
        <title>Sample</title>
        <meta name="DC.Title" content="The motores">
        <meta name="DC.Creator" content="A">
        <meta name="DC.Creator" content="B">
    </head>
    <body></body>
    </html>
    "#;

    #[test]
    fn test_empty_document_is_rejected() {
        assert_eq!(DublinCore::new("").unwrap_err(), DublinCoreError::EmptyDocument);
    }

    #[test]
    fn test_sample_document() {
        let dc = DublinCore::new(SAMPLE).unwrap();

        assert_eq!(dc.title().content(), "The motores");
        assert_eq!(dc.creators().len(), 2);

        let all = dc.all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name(), "title");
        assert_eq!(all[1].content(), "A");
        assert_eq!(all[2].content(), "B");
        assert_eq!(dc.len(), 3);
        assert!(dc.errors().is_empty());
    }

    #[test]
    fn test_missing_element_returns_placeholder() {
        let dc = DublinCore::new("<html><head></head></html>").unwrap();

        assert!(dc.is_empty());
        assert!(dc.titles().is_empty());
        assert_eq!(dc.title().content(), "");

        let title = dc.element("Title").unwrap();
        assert!(title.is_empty());
        assert_eq!(title.content(), "");
        assert!(dc.elements("Title").unwrap().is_empty());
    }

    #[test]
    fn test_qualified_lookup_is_substring_match() {
        let html = r#"
        <meta name="DC.Date.Created" content="2001">
        <meta name="DC.Date.modified" content="2002">
        <meta name="DC.Date" content="2003">
        <meta name="DC.Date.DateCreated" content="2004">
        "#;
        let dc = DublinCore::new(html).unwrap();

        let created: Vec<String> = dc
            .elements("Date.created")
            .unwrap()
            .iter()
            .map(|e| e.content())
            .collect();
        assert_eq!(created, vec!["2001", "2004"]);

        assert_eq!(dc.elements("Date").unwrap().len(), 4);
        assert_eq!(dc.element("date.MODIFIED").unwrap().content(), "2002");
        assert!(dc.element("Date.issued").unwrap().is_empty());
    }

    #[test]
    fn test_lookup_matches_vocabulary_by_prefix() {
        let dc = DublinCore::new(SAMPLE).unwrap();

        assert_eq!(dc.element("tit").unwrap().content(), "The motores");
        assert_eq!(dc.elements("CREATOR").unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_element_lookup_fails() {
        let dc = DublinCore::new(SAMPLE).unwrap();

        assert_eq!(
            dc.element("Bogus").unwrap_err(),
            DublinCoreError::UnknownElement("Bogus".to_string())
        );
        assert!(dc.elements(".created").is_err());
    }

    #[test]
    fn test_to_html_follows_vocabulary_order() {
        let html = r#"
        <meta name="DC.Rights" content="CC-BY">
        <meta name="DC.Creator" content="A">
        <meta name="DC.Title" content="T" lang="en">
        "#;
        let dc = DublinCore::new(html).unwrap();

        assert_eq!(
            dc.to_html(),
            concat!(
                "<meta name=\"DC.Title\" content=\"T\" lang=\"en\">\n",
                "<meta name=\"DC.Creator\" content=\"A\">\n",
                "<meta name=\"DC.Rights\" content=\"CC-BY\">\n",
            )
        );
    }

    #[test]
    fn test_round_trip() {
        let mut element = Element::new();
        element.set_name("date");
        element.set_qualifier("created");
        element.set_content("2001-07-18");
        element.set_scheme("W3CDTF");
        element.set_language("en");

        let html = format!("<html><head>{}</head><body></body></html>", element.to_html());
        let dc = DublinCore::new(&html).unwrap();

        assert_eq!(dc.dates(), std::slice::from_ref(&element));
    }

    #[test]
    fn test_diagnostics_are_kept() {
        let html = r#"<meta name="DC.Bogus" content="x"><meta name="DC.Title">"#;
        let dc = DublinCore::new(html).unwrap();

        assert!(dc.is_empty());
        assert_eq!(dc.errors().len(), 2);
        assert!(dc.errors()[0].contains("Bogus"));
        assert!(dc.errors()[1].contains("title"));
    }

    #[test]
    fn test_serialize_to_json() {
        let dc = DublinCore::new(SAMPLE).unwrap();
        let json = serde_json::to_value(&dc).unwrap();

        assert_eq!(json["elements"].as_array().unwrap().len(), 3);
        assert_eq!(json["elements"][0]["name"].as_str().unwrap(), "title");
        assert_eq!(json["elements"][0]["content"].as_str().unwrap(), "The motores");
        assert!(json["elements"][0].get("qualifier").is_none());
        assert!(json["errors"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_every_tag_counts_in_document_order() {
        let html = r#"
        <html>
        <head><noscript><meta name="DC.Title" content="T"></noscript></head>
        <body>
        <table><tr><td><meta name="DC.Creator" content="A"></td></tr><meta name="DC.Creator" content="B"></table>
        </body>
        </html>
        "#;
        let dc = DublinCore::new(html).unwrap();

        assert_eq!(dc.titles().len(), 1);
        assert_eq!(dc.title().content(), "T");
        let creators: Vec<String> = dc.creators().iter().map(|e| e.content()).collect();
        assert_eq!(creators, vec!["A", "B"]);
        assert!(dc.errors().is_empty());
    }
}
