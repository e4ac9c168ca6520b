//! Dublin Core metadata from HTML `<meta>` tags
//!
//! Finds `<meta name="DC.Element[.qualifier]" content="...">` tags, keeps
//! them as [`Element`] records grouped by the 15 Dublin Core element names,
//! and writes them back out as meta tags.
//!
//! ```no_run
//! use dc_meta_parser::DublinCore;
//!
//! let dc = DublinCore::new(r#"<meta name="DC.Date.created" content="2001-07-18">"#)?;
//! assert_eq!(dc.element("Date.created")?.content(), "2001-07-18");
//! # Ok::<(), dc_meta_parser::DublinCoreError>(())
//! ```
//!
//! Also provides an FFI interface returning the same data as JSON.

pub mod document;
pub mod element;
pub mod error;
pub mod extractors;
pub mod ffi;

pub use document::DublinCore;
pub use element::{Element, ElementName};
pub use error::{DublinCoreError, Result};
pub use ffi::*;
