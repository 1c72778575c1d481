//! Extraction strategies for turning file content or file names into
//! bibliographic metadata.
//!
//! Three independent strategies feed the record resolver:
//! - [`bibtex`] - key/value fields from bibliography-style text blocks
//! - [`filename`] - best-effort title/author/year inference from a bare stem
//! - [`sections`] - bilingual labeled-section extraction from free text
//!
//! Each strategy returns `Option`-valued fields; the resolver decides
//! precedence and applies the sentinel fallback.

pub mod bibtex;
pub mod filename;
pub mod sections;

pub use bibtex::{BibFields, extract_bibliographic_fields};
pub use filename::{StemGuess, infer_from_stem};
pub use sections::{SectionFields, extract_sections};
