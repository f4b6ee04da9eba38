use std::fmt;

use once_cell::sync::OnceCell;
use regex::{CaptureMatches, Captures, Matches, Regex};

/// A named grammar pattern, compiled on first use and shared process-wide
///
/// Patterns are declared as `static` items; the compiled regexes live in
/// `OnceCell`s and are never mutated after initialization.
pub struct Pattern {
    name: &'static str,
    source: &'static str,
    regex: OnceCell<Regex>,
    anchored: OnceCell<Regex>,
}

impl Pattern {
    /// Declare a pattern from a fragment source
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        Self {
            name,
            source,
            regex: OnceCell::new(),
            anchored: OnceCell::new(),
        }
    }

    /// Human-readable pattern name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Regex source text of this pattern
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// The unanchored compiled regex, for scanning
    pub fn regex(&self) -> &Regex {
        self.regex.get_or_init(|| compile(self.name, self.source))
    }

    fn anchored(&self) -> &Regex {
        self.anchored
            .get_or_init(|| compile(self.name, &format!(r"\A(?:{})\z", self.source)))
    }

    /// Check whether `text` as a whole belongs to this pattern's language
    pub fn matches_fully(&self, text: &str) -> bool {
        self.anchored().is_match(text)
    }

    /// Capture groups of a match spanning the whole of `text`
    pub fn captures_fully<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.anchored().captures(text)
    }

    /// Non-overlapping matches, leftmost first
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> Matches<'r, 't> {
        self.regex().find_iter(text)
    }

    /// Non-overlapping capture sets, leftmost first
    pub fn captures_iter<'r, 't>(&'r self, text: &'t str) -> CaptureMatches<'r, 't> {
        self.regex().captures_iter(text)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)
    }
}

// Sources are compile-time constants; see grammar tests.
fn compile(name: &str, source: &str) -> Regex {
    Regex::new(source)
        .unwrap_or_else(|e| panic!("grammar pattern `{}` failed to compile: {}", name, e))
}
