//! Dublin Core meta tag extraction
//!
//! Recognizes `<meta name="DC.Element[.qualifier]" content="...">` tags and
//! turns them into [`Element`] records, collecting soft diagnostics for
//! malformed ones.

use std::collections::HashMap;

use crate::element::{Element, ElementName};
use crate::extractors::scanner::StartTagHandler;

/// Per-name element storage, indexed by vocabulary position.
pub type ElementSlots = [Vec<Element>; 15];

/// Builds Dublin Core elements from start tags.
#[derive(Debug, Default)]
pub struct DublinCoreExtractor {
    elements: ElementSlots,
    errors: Vec<String>,
}

impl DublinCoreExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the extractor, returning the collected elements and diagnostics.
    pub fn finish(self) -> (ElementSlots, Vec<String>) {
        (self.elements, self.errors)
    }

    fn record_error(&mut self, message: String) {
        log::warn!("{}", message);
        self.errors.push(message);
    }
}

impl StartTagHandler for DublinCoreExtractor {
    fn start_tag(&mut self, name: &str, attrs: &[(&str, &str)]) {
        if !name.eq_ignore_ascii_case("meta") {
            return;
        }

        let attrs: HashMap<String, &str> = attrs
            .iter()
            .map(|(key, value)| (key.to_ascii_lowercase(), *value))
            .collect();

        let Some(meta_name) = attrs.get("name") else {
            return;
        };

        let mut parts = meta_name.splitn(3, '.');
        let namespace = parts.next().unwrap_or("");
        let element_name = parts.next().unwrap_or("");
        let qualifier = parts.next().filter(|q| !q.is_empty());

        if !namespace.eq_ignore_ascii_case("dc") {
            return;
        }

        let Some(element) = ElementName::from_name(element_name) else {
            self.record_error(format!("invalid element: {} found", element_name));
            return;
        };

        let Some(content) = attrs.get("content").filter(|c| !c.is_empty()) else {
            self.record_error(format!("element {} lacks content", element.as_str()));
            return;
        };

        let mut record = Element::new();
        record.set_name(element.as_str());
        if let Some(qualifier) = qualifier {
            record.set_qualifier(qualifier);
        }
        record.set_content(*content);
        if let Some(scheme) = attrs.get("scheme") {
            record.set_scheme(*scheme);
        }
        if let Some(language) = attrs.get("lang") {
            record.set_language(*language);
        }

        log::debug!("found Dublin Core element {}", meta_name);
        self.elements[element.index()].push(record);
    }
}
