use std::fmt;

use serde::Serialize;

use super::MslDocument;

/// Summary statistics about a parsed MSL document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSummary {
    /// Number of records
    pub records: usize,
    /// Total peaks across all records
    pub total_peaks: usize,
    /// Records with a usable CAS number
    pub with_cas: usize,
    /// Records without a usable CAS number
    pub without_cas: usize,
    /// Records whose declared peak count differs from the peak list
    pub peak_count_mismatches: usize,
    /// Record-like fragments skipped during parsing
    pub skipped_fragments: usize,
    /// Molecular weight range (min, max)
    pub molecular_weight_range: Option<(f64, f64)>,
    /// Retention index range (min, max)
    pub retention_index_range: Option<(f64, f64)>,
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

impl MslDocument {
    /// Get summary statistics about the document
    pub fn summary(&self) -> DocumentSummary {
        let records = self.records();
        let with_cas = records.iter().filter(|r| r.cas_number().is_some()).count();

        DocumentSummary {
            records: records.len(),
            total_peaks: records.iter().map(|r| r.peaks().len()).sum(),
            with_cas,
            without_cas: records.len() - with_cas,
            peak_count_mismatches: records.iter().filter(|r| !r.peaks_count_matches()).count(),
            skipped_fragments: self.stats().skipped_fragments,
            molecular_weight_range: range(records.iter().map(|r| r.molecular_weight())),
            retention_index_range: range(records.iter().map(|r| r.retention_index())),
        }
    }
}

impl fmt::Display for DocumentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Records:            {}", self.records)?;
        writeln!(f, "Total peaks:        {}", self.total_peaks)?;
        writeln!(f, "With CAS number:    {}", self.with_cas)?;
        writeln!(f, "Without CAS number: {}", self.without_cas)?;
        writeln!(f, "Peak count mismatches: {}", self.peak_count_mismatches)?;
        writeln!(f, "Skipped fragments:  {}", self.skipped_fragments)?;
        match self.molecular_weight_range {
            Some((lo, hi)) => writeln!(f, "Molecular weight:   {:.2} - {:.2}", lo, hi)?,
            None => writeln!(f, "Molecular weight:   n/a")?,
        }
        match self.retention_index_range {
            Some((lo, hi)) => write!(f, "Retention index:    {:.1} - {:.1}", lo, hi),
            None => write!(f, "Retention index:    n/a"),
        }
    }
}
