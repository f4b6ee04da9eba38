//! # MSL Grammar
//!
//! Composable pattern definitions for AMDIS MSL records. Lower-level
//! fragments are embedded verbatim in higher-level ones, so every place a
//! number is expected accepts exactly the same numeric syntax.
//!
//! ## Composition
//!
//! ```text
//! UNSIGNED_INTEGER   0 | [1-9][0-9]*
//! UNSIGNED_FLOAT     UNSIGNED_INTEGER ( . [0-9]+ )?
//! MOLECULAR_FORMULA  ( [A-Z][a-z]* UNSIGNED_INTEGER? )+
//! PEAK               ( ws? UNSIGNED_INTEGER ws UNSIGNED_INTEGER ws? )
//! RECORD             NAME: FORM: MW: CASNO: RI: RT: RF: RSN: COMMENT: Num Peaks: PEAK*
//! ```
//!
//! A record in an MSL library looks like:
//!
//! ```text
//! NAME:[1] Acetone [58.08]
//! FORM:C3H6O
//! MW:58.08
//! CASNO:67641
//! RI:500
//! RT:1.25
//! RF:1.0
//! RSN:0
//! COMMENT:reference standard
//! Num Peaks: 3
//! (15 100) (43 999) (58 300)
//! ```
//!
//! Field values follow their label directly; only `Num Peaks:` may be
//! followed by whitespace.

mod fragments;
mod pattern;


pub use pattern::Pattern;

/// Record capture group names, in field order
pub mod groups {
    /// Bracketed tag after `NAME:`
    pub const COMPOUND_ID: &str = "compound_id";
    /// Free text between the tag and the bracketed weight
    pub const COMPOUND_NAME: &str = "compound_name";
    /// Bracketed float that closes the `NAME:` line
    pub const BRACKET_WEIGHT: &str = "bracket_weight";
    /// `FORM:` value
    pub const FORMULA: &str = "formula";
    /// `MW:` value
    pub const MOLECULAR_WEIGHT: &str = "molecular_weight";
    /// `CASNO:` digits
    pub const CAS: &str = "cas";
    /// `RI:` value
    pub const RETENTION_INDEX: &str = "retention_index";
    /// `RT:` value
    pub const RETENTION_TIME: &str = "retention_time";
    /// `RF:` value
    pub const RESPONSE_FACTOR: &str = "response_factor";
    /// `RSN:` value
    pub const RESOLUTION: &str = "resolution";
    /// `COMMENT:` text, which may span lines
    pub const COMMENT: &str = "comment";
    /// `Num Peaks:` value
    pub const PEAKS_COUNT: &str = "peaks_count";
    /// Raw text of the peak list
    pub const PEAKS: &str = "peaks";
    /// Peak m/z
    pub const MZ: &str = "mz";
    /// Peak height
    pub const HEIGHT: &str = "height";
}

/// Unsigned integer: `0`, or a nonzero digit followed by digits
pub static UNSIGNED_INTEGER: Pattern =
    Pattern::new("unsigned integer", fragments::UNSIGNED_INTEGER);

/// Unsigned float: an unsigned integer with an optional fraction
pub static UNSIGNED_FLOAT: Pattern = Pattern::new("unsigned float", fragments::UNSIGNED_FLOAT);

/// Molecular formula such as `C6H12O6`
pub static MOLECULAR_FORMULA: Pattern =
    Pattern::new("molecular formula", fragments::MOLECULAR_FORMULA);

/// A single `(m/z height)` peak
pub static PEAK: Pattern = Pattern::new("peak", fragments::PEAK);

/// A full compound record
pub static RECORD: Pattern = Pattern::new("record", fragments::RECORD);

/// Unhyphenated CAS registry number: 2-6 digits, 2 digits, 1 check digit
pub static CAS_SHAPE: Pattern = Pattern::new("CAS number", fragments::CAS_SHAPE);

/// All grammar patterns, lowest level first
pub fn all() -> [&'static Pattern; 6] {
    [
        &UNSIGNED_INTEGER,
        &UNSIGNED_FLOAT,
        &MOLECULAR_FORMULA,
        &PEAK,
        &RECORD,
        &CAS_SHAPE,
    ]
}
