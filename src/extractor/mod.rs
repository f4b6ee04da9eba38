//! # Record Extractor
//!
//! Turns a whole MSL document buffer into an ordered sequence of
//! [`Record`]s using the [`RECORD`](crate::grammar::RECORD) pattern.
//!
//! ## Two-phase pipeline
//!
//! 1. **Scan (sequential)**: find every non-overlapping record match,
//!    leftmost first, and borrow its captures as a [`RawRecord`]
//! 2. **Decode**: coerce each raw capture set into a typed [`Record`],
//!    including the peak sub-scan and CAS hyphenation. With the `parallel`
//!    feature this phase runs on Rayon; output keeps match order either way.
//!
//! Text that does not match is skipped silently. Stretches that look like
//! a record (a line opens with a `NAME:` label) but fail to match are counted in
//! [`ExtractionStats::skipped_fragments`] and logged at `warn`.

mod coerce;
mod raw;


use std::ops::Range;

use log::{debug, warn};
use serde::Serialize;

use crate::grammar::{groups, PEAK, RECORD};
use crate::models::{Peak, Record};

pub use coerce::{float_prefix, integer_prefix, unsigned_prefix};
pub use raw::RawRecord;

const NAME_LABEL: &str = "NAME:";

/// Counters collected during one extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Records extracted
    pub records: usize,
    /// Peaks extracted across all records
    pub peaks: usize,
    /// Records whose CAS number was absent
    pub records_without_cas: usize,
    /// Records whose `Num Peaks:` differs from the decoded peak list length
    pub peak_count_mismatches: usize,
    /// `NAME:` labels found outside any record match
    pub skipped_fragments: usize,
}

/// Extractor configuration and entry point
#[derive(Debug, Clone, Default)]
pub struct RecordExtractor {
    parallel: bool,
}

impl RecordExtractor {
    /// Create an extractor with sequential decoding
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode matched records in parallel (requires the `parallel` feature)
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether parallel decoding was requested
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Extract all records from a document buffer
    pub fn extract(&self, text: &str) -> Vec<Record> {
        self.extract_with_stats(text).0
    }

    /// Extract all records and report what was seen along the way
    pub fn extract_with_stats(&self, text: &str) -> (Vec<Record>, ExtractionStats) {
        let (raw, skipped_fragments) = scan(text);
        let records = self.decode_all(&raw);

        let stats = ExtractionStats {
            records: records.len(),
            peaks: records.iter().map(|r| r.peaks().len()).sum(),
            records_without_cas: records.iter().filter(|r| r.cas_number().is_none()).count(),
            peak_count_mismatches: records.iter().filter(|r| !r.peaks_count_matches()).count(),
            skipped_fragments,
        };
        debug!(
            "Extracted {} records ({} peaks, {} skipped fragments)",
            stats.records, stats.peaks, stats.skipped_fragments
        );

        (records, stats)
    }

    fn decode_all(&self, raw: &[RawRecord<'_>]) -> Vec<Record> {
        if self.parallel {
            #[cfg(feature = "parallel")]
            {
                use rayon::prelude::*;
                return raw.par_iter().map(RawRecord::decode).collect();
            }
            #[cfg(not(feature = "parallel"))]
            warn!("Parallel decoding requested but the `parallel` feature is disabled");
        }
        raw.iter().map(RawRecord::decode).collect()
    }
}

/// Extract all records from a document buffer with default settings
pub fn extract_records(text: &str) -> Vec<Record> {
    RecordExtractor::new().extract(text)
}

/// Extract the `(m/z height)` pairs of a peak list, in order of appearance
pub fn extract_peaks(peak_list: &str) -> Vec<Peak> {
    PEAK.captures_iter(peak_list)
        .map(|caps| {
            Peak::new(
                unsigned_prefix(raw::group(&caps, groups::MZ)),
                unsigned_prefix(raw::group(&caps, groups::HEIGHT)),
            )
        })
        .collect()
}

/// Scan phase: raw captures in match order plus the skipped-fragment count
pub fn scan(text: &str) -> (Vec<RawRecord<'_>>, usize) {
    let mut raw = Vec::new();
    let mut skipped = 0;
    let mut last_end = 0;

    for caps in RECORD.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        skipped += report_skipped(text, last_end..whole.start());
        last_end = whole.end();
        raw.push(RawRecord::from_captures(&caps));
    }
    skipped += report_skipped(text, last_end..text.len());

    (raw, skipped)
}

/// Count `NAME:` labels that open a line inside `gap`
fn report_skipped(text: &str, gap: Range<usize>) -> usize {
    text[gap.clone()]
        .match_indices(NAME_LABEL)
        .map(|(pos, _)| gap.start + pos)
        .filter(|&pos| starts_line(text, pos))
        .inspect(|pos| warn!("Skipping unrecognized record at byte {}", pos))
        .count()
}

fn starts_line(text: &str, pos: usize) -> bool {
    text[..pos]
        .chars()
        .rev()
        .take_while(|&c| c != '\n')
        .all(char::is_whitespace)
}
