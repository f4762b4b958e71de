//! Advisory diagnostics for glossary compilation.
//!
//! Rendering itself is infallible: every input, however malformed,
//! yields some document. The only thing that can go wrong is a caller
//! supplying a glossary term that cannot become a match pattern; such
//! terms are skipped and reported here instead of raised.

use std::fmt;

/// Warning kinds for categorizing skipped glossary terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderWarningKind {
    /// Term text was empty (or whitespace only) and can match nothing.
    EmptyTerm,
    /// Escaped term still failed to compile as a pattern
    /// (e.g. it exceeded the regex size limit).
    InvalidPattern,
}

/// A skipped glossary term with the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderWarning {
    /// Human-readable description.
    pub message: String,
    /// The offending term as supplied by the caller.
    pub term: String,
    /// Warning categorization.
    pub kind: RenderWarningKind,
}

impl RenderWarning {
    /// Warning for an empty glossary term.
    pub fn empty_term() -> Self {
        Self {
            message: "glossary term is empty and can match nothing".to_string(),
            term: String::new(),
            kind: RenderWarningKind::EmptyTerm,
        }
    }

    /// Warning for a term whose pattern failed to compile.
    pub fn invalid_pattern(term: &str, detail: impl fmt::Display) -> Self {
        Self {
            message: format!("glossary term pattern rejected: {}", detail),
            term: term.to_string(),
            kind: RenderWarningKind::InvalidPattern,
        }
    }
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if !self.term.is_empty() {
            write!(f, " (term: {:?})", self.term)?;
        }
        Ok(())
    }
}

impl std::error::Error for RenderWarning {}

/// A collection of warnings produced while compiling a glossary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderWarnings {
    warnings: Vec<RenderWarning>,
}

impl RenderWarnings {
    /// Create an empty warning collection.
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// Add a warning to the collection.
    pub fn push(&mut self, warning: RenderWarning) {
        self.warnings.push(warning);
    }

    /// Check if any warnings were collected.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Get the number of warnings.
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Iterate over the warnings.
    pub fn iter(&self) -> impl Iterator<Item = &RenderWarning> {
        self.warnings.iter()
    }
}

impl IntoIterator for RenderWarnings {
    type Item = RenderWarning;
    type IntoIter = std::vec::IntoIter<RenderWarning>;

    fn into_iter(self) -> Self::IntoIter {
        self.warnings.into_iter()
    }
}
