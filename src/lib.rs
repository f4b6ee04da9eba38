//! # msl - AMDIS Mass Spectral Library Parser
//!
//! `msl` parses AMDIS MSL text libraries into structured, read-only records.
//! An MSL library is a flat text file of compound entries, each with the
//! compound's identity, physical properties and an embedded peak list.
//!
//! ## Quick Start
//!
//! ```rust
//! use msl::document::MslDocument;
//!
//! let text = "NAME:[1] Acetone [58.08]
//! FORM:C3H6O
//! MW:58.08
//! CASNO:67641
//! RI:500
//! RT:1.25
//! RF:1.0
//! RSN:0
//! COMMENT:reference standard
//! Num Peaks: 2 (43 999) (58 300)";
//!
//! let document = MslDocument::parse(text);
//! let record = &document.records()[0];
//!
//! assert_eq!(record.compound_name(), "Acetone");
//! assert_eq!(record.cas_number(), Some("67-64-1"));
//! assert_eq!(record.peaks().len(), 2);
//! ```
//!
//! ## Parsing Model
//!
//! Parsing is a permissive scan: the record pattern is applied leftmost-first
//! over the whole buffer and whatever does not match is skipped. Malformed
//! input never produces an error, only fewer records. A CAS number that
//! cannot be hyphenated is reported as `None`.
//!
//! ## Architecture
//!
//! - [`grammar`]: composable regex patterns for numbers, formulas, peaks and records
//! - [`cas`]: CAS registry number hyphenation
//! - [`models`]: [`Record`](models::Record) and [`Peak`](models::Peak)
//! - [`extractor`]: scans a buffer and decodes record matches
//! - [`document`]: record container and loading from strings, readers and files
//!
//! ## Features
//!
//! - `parallel`: decode matched records on Rayon. Record order is unchanged.
//! - `colorized_output` (default): colored `msl info` output.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod cas;
pub mod document;
pub mod extractor;
pub mod grammar;
pub mod models;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::cas::hyphenate;
    pub use crate::document::{DocumentBuilder, DocumentError, DocumentSummary, MslDocument};
    pub use crate::extractor::{extract_peaks, extract_records, ExtractionStats, RecordExtractor};
    pub use crate::models::{Peak, Record};
}
