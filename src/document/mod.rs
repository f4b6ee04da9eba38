//! # MSL Document
//!
//! Ownership container for the records of one MSL library, plus the thin
//! I/O glue that gets the whole library into memory before parsing.
//!
//! ## Example
//!
//! ```rust,no_run
//! use msl::document::MslDocument;
//!
//! let document = MslDocument::open("NIST.MSL")?;
//! for record in &document {
//!     println!("{} {:?}", record.compound_name(), record.cas_number());
//! }
//!
//! // Post-process once after construction
//! let with_cas = MslDocument::builder()
//!     .post_process(|doc| doc.retain(|r| r.cas_number().is_some()))
//!     .open("NIST.MSL")?;
//! # Ok::<(), msl::document::DocumentError>(())
//! ```

mod error;
mod summary;


use std::fmt;
use std::io::Read;
use std::path::Path;

use log::{info, warn};

use crate::extractor::{ExtractionStats, RecordExtractor};
use crate::models::Record;

pub use error::DocumentError;
pub use summary::DocumentSummary;

type PostProcess = Box<dyn FnOnce(&mut MslDocument)>;

/// A parsed MSL library: an ordered, read-only sequence of records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MslDocument {
    records: Vec<Record>,
    stats: ExtractionStats,
}

impl MslDocument {
    /// Parse a document from an in-memory buffer
    pub fn parse(text: &str) -> Self {
        Self::builder().parse(text)
    }

    /// Parse a document, then run `post_process` on it exactly once
    pub fn parse_with<F>(text: &str, post_process: F) -> Self
    where
        F: FnOnce(&mut MslDocument) + 'static,
    {
        Self::builder().post_process(post_process).parse(text)
    }

    /// Read a whole stream into memory and parse it
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        Self::builder().from_reader(reader)
    }

    /// Read a library file and parse it
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        Self::builder().open(path)
    }

    /// Start configuring how a document is parsed
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// All records, in source order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the document has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterate over records in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Take ownership of the records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Counters from the parse that produced this document
    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    /// First record with the given hyphenated CAS number
    pub fn find_by_cas(&self, cas_number: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.cas_number() == Some(cas_number))
    }

    /// Keep only the records matching `keep`, preserving order
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Record) -> bool,
    {
        self.records.retain(keep);
    }
}

impl<'a> IntoIterator for &'a MslDocument {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for MslDocument {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Builder for [`MslDocument`]
#[derive(Default)]
pub struct DocumentBuilder {
    extractor: RecordExtractor,
    post_process: Option<PostProcess>,
}

impl DocumentBuilder {
    /// Decode records in parallel (requires the `parallel` feature)
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.extractor = self.extractor.with_parallel(parallel);
        self
    }

    /// Run `post_process` once on the constructed document
    pub fn post_process<F>(mut self, post_process: F) -> Self
    where
        F: FnOnce(&mut MslDocument) + 'static,
    {
        self.post_process = Some(Box::new(post_process));
        self
    }

    /// Parse an in-memory buffer
    pub fn parse(self, text: &str) -> MslDocument {
        let (records, stats) = self.extractor.extract_with_stats(text);
        let mut document = MslDocument { records, stats };
        if let Some(post_process) = self.post_process {
            post_process(&mut document);
        }
        document
    }

    /// Read a whole stream into memory and parse it
    pub fn from_reader<R: Read>(self, mut reader: R) -> Result<MslDocument, DocumentError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(self.parse(&decode_text(bytes)))
    }

    /// Read a library file and parse it
    pub fn open<P: AsRef<Path>>(self, path: P) -> Result<MslDocument, DocumentError> {
        let path = path.as_ref();
        info!("Reading MSL library {}", path.display());

        let bytes = std::fs::read(path).map_err(|source| DocumentError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.parse(&decode_text(bytes)))
    }
}

impl fmt::Debug for DocumentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentBuilder")
            .field("extractor", &self.extractor)
            .field("post_process", &self.post_process.is_some())
            .finish()
    }
}

// Invalid UTF-8 sequences become U+FFFD.
fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("Input is not valid UTF-8, invalid bytes were replaced");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
