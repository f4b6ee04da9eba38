//! Data models for MSL library entries
//!
//! Records are produced only by the extractor and are read-only afterwards:
//! fields are private and exposed through accessors.

use std::fmt;

use serde::Serialize;

/// One mass-spectral data point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Peak {
    /// Nominal mass-to-charge ratio
    pub mass_to_charge_ratio: u64,
    /// Peak height (abundance)
    pub height: u64,
}

impl Peak {
    /// Create a peak
    pub fn new(mass_to_charge_ratio: u64, height: u64) -> Self {
        Self {
            mass_to_charge_ratio,
            height,
        }
    }
}

impl fmt::Display for Peak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.mass_to_charge_ratio, self.height)
    }
}

/// One compound entry of an MSL library
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub(crate) compound_id: i64,
    pub(crate) compound_name: String,
    pub(crate) molecular_formula: String,
    pub(crate) molecular_weight: f64,
    pub(crate) cas_number: Option<String>,
    pub(crate) retention_index: f64,
    pub(crate) retention_time: f64,
    pub(crate) response_factor: f64,
    pub(crate) resolution: f64,
    pub(crate) comment: String,
    pub(crate) peaks_count: u64,
    pub(crate) peaks: Vec<Peak>,
}

impl Record {
    /// Numeric tag from the brackets after `NAME:`
    pub fn compound_id(&self) -> i64 {
        self.compound_id
    }

    /// Compound name, trimmed
    pub fn compound_name(&self) -> &str {
        &self.compound_name
    }

    /// Molecular formula as written, e.g. `C6H12O6`
    pub fn molecular_formula(&self) -> &str {
        &self.molecular_formula
    }

    /// Molecular weight from `MW:`
    pub fn molecular_weight(&self) -> f64 {
        self.molecular_weight
    }

    /// Hyphenated CAS registry number, `None` when the raw number is unusable
    pub fn cas_number(&self) -> Option<&str> {
        self.cas_number.as_deref()
    }

    /// Retention index from `RI:`
    pub fn retention_index(&self) -> f64 {
        self.retention_index
    }

    /// Retention time from `RT:`
    pub fn retention_time(&self) -> f64 {
        self.retention_time
    }

    /// Response factor from `RF:`
    pub fn response_factor(&self) -> f64 {
        self.response_factor
    }

    /// Resolution from `RSN:`
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Free-text comment, possibly empty
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Peak count declared by `Num Peaks:`
    ///
    /// This is not checked against [`Record::peaks`].
    pub fn peaks_count(&self) -> u64 {
        self.peaks_count
    }

    /// Peaks in order of appearance
    pub fn peaks(&self) -> &[Peak] {
        &self.peaks
    }

    /// Whether the declared peak count agrees with the decoded peak list
    pub fn peaks_count_matches(&self) -> bool {
        self.peaks_count == self.peaks.len() as u64
    }

    /// Highest peak, first one wins on ties
    pub fn base_peak(&self) -> Option<&Peak> {
        self.peaks
            .iter()
            .reduce(|best, p| if p.height > best.height { p } else { best })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} MW={} CAS={} RI={} RT={} peaks={}",
            self.compound_id,
            self.compound_name,
            self.molecular_formula,
            self.molecular_weight,
            self.cas_number.as_deref().unwrap_or("-"),
            self.retention_index,
            self.retention_time,
            self.peaks.len()
        )
    }
}
