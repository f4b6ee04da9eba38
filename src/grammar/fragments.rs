//! Regex fragment sources for the MSL grammar
//!
//! Every fragment is assembled at compile time with `concat!`, so a composite
//! fragment contains the source of each building block character for character.
//! Digits are spelled `[0-9]` rather than `\d` to keep numbers ASCII-only.

macro_rules! unsigned_integer {
    () => {
        r"(?:0|[1-9][0-9]*)"
    };
}

macro_rules! unsigned_float {
    () => {
        concat!(r"(?:", unsigned_integer!(), r"(?:\.[0-9]+)?)")
    };
}

macro_rules! molecular_formula {
    () => {
        concat!(r"(?:(?:[A-Z][a-z]*", unsigned_integer!(), r"?)+)")
    };
}

macro_rules! peak {
    () => {
        concat!(
            r"\(\s*(?P<mz>",
            unsigned_integer!(),
            r")\s+(?P<height>",
            unsigned_integer!(),
            r")\s*\)"
        )
    };
}

macro_rules! record {
    () => {
        concat!(
            r"NAME:\[(?P<compound_id>[^\]]*)\]\s+(?P<compound_name>.*?)\s+\[(?P<bracket_weight>",
            unsigned_float!(),
            r")\]",
            r"\s+FORM:(?P<formula>",
            molecular_formula!(),
            r")",
            r"\s+MW:(?P<molecular_weight>",
            unsigned_float!(),
            r")",
            r"\s+CASNO:(?P<cas>",
            unsigned_integer!(),
            r"|0+)",
            r"\s+RI:(?P<retention_index>",
            unsigned_float!(),
            r")",
            r"\s+RT:(?P<retention_time>",
            unsigned_float!(),
            r")",
            r"\s+RF:(?P<response_factor>",
            unsigned_float!(),
            r")",
            r"\s+RSN:(?P<resolution>",
            unsigned_float!(),
            r")",
            r"\s+COMMENT:(?P<comment>(?s:.*?))",
            r"\s+Num Peaks:\s*(?P<peaks_count>",
            unsigned_integer!(),
            r")",
            r"(?P<peaks>(?:\s*",
            peak!(),
            r")*)"
        )
    };
}

/// `0`, or a nonzero digit followed by any digits
pub const UNSIGNED_INTEGER: &str = unsigned_integer!();

/// An unsigned integer with an optional `.digits` fraction
pub const UNSIGNED_FLOAT: &str = unsigned_float!();

/// Element symbols, each with an optional count, e.g. `C6H12O6`
pub const MOLECULAR_FORMULA: &str = molecular_formula!();

/// A parenthesised `(m/z height)` pair with captures `mz` and `height`
pub const PEAK: &str = peak!();

/// One complete compound entry, with one named capture per field
pub const RECORD: &str = record!();

/// Shape of a CAS registry number with its hyphens removed
pub const CAS_SHAPE: &str = r"(?P<first>[0-9]{2,6})(?P<second>[0-9]{2})(?P<check>[0-9])";
