use regex::Captures;

use super::coerce::{float_prefix, integer_prefix, unsigned_prefix};
use super::extract_peaks;
use crate::cas;
use crate::grammar::groups;
use crate::models::Record;

/// Text of a named group, empty when the group did not participate
pub(super) fn group<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Undecoded capture set of one record match
///
/// Scanning produces these sequentially; decoding them is independent per
/// record and can run in parallel.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    /// Byte offset of the match in the document
    pub offset: usize,
    /// Bracketed tag after `NAME:`
    pub compound_id: &'a str,
    /// Untrimmed compound name
    pub compound_name: &'a str,
    /// Bracketed weight on the `NAME:` line
    pub bracket_weight: &'a str,
    /// `FORM:` value
    pub formula: &'a str,
    /// `MW:` value
    pub molecular_weight: &'a str,
    /// `CASNO:` digits
    pub cas: &'a str,
    /// `RI:` value
    pub retention_index: &'a str,
    /// `RT:` value
    pub retention_time: &'a str,
    /// `RF:` value
    pub response_factor: &'a str,
    /// `RSN:` value
    pub resolution: &'a str,
    /// Untrimmed `COMMENT:` text
    pub comment: &'a str,
    /// `Num Peaks:` value
    pub peaks_count: &'a str,
    /// Raw peak list text
    pub peaks: &'a str,
}

impl<'a> RawRecord<'a> {
    /// Borrow the field captures of one record match
    pub fn from_captures(caps: &Captures<'a>) -> Self {
        Self {
            offset: caps.get(0).map_or(0, |m| m.start()),
            compound_id: group(caps, groups::COMPOUND_ID),
            compound_name: group(caps, groups::COMPOUND_NAME),
            bracket_weight: group(caps, groups::BRACKET_WEIGHT),
            formula: group(caps, groups::FORMULA),
            molecular_weight: group(caps, groups::MOLECULAR_WEIGHT),
            cas: group(caps, groups::CAS),
            retention_index: group(caps, groups::RETENTION_INDEX),
            retention_time: group(caps, groups::RETENTION_TIME),
            response_factor: group(caps, groups::RESPONSE_FACTOR),
            resolution: group(caps, groups::RESOLUTION),
            comment: group(caps, groups::COMMENT),
            peaks_count: group(caps, groups::PEAKS_COUNT),
            peaks: group(caps, groups::PEAKS),
        }
    }

    /// Coerce the captured text into a typed record
    pub fn decode(&self) -> Record {
        Record {
            compound_id: integer_prefix(self.compound_id),
            compound_name: self.compound_name.trim().to_string(),
            molecular_formula: self.formula.trim().to_string(),
            molecular_weight: float_prefix(self.molecular_weight),
            cas_number: cas::hyphenate_digits(self.cas),
            retention_index: float_prefix(self.retention_index),
            retention_time: float_prefix(self.retention_time),
            response_factor: float_prefix(self.response_factor),
            resolution: float_prefix(self.resolution),
            comment: self.comment.trim().to_string(),
            peaks_count: unsigned_prefix(self.peaks_count),
            peaks: extract_peaks(self.peaks),
        }
    }
}
