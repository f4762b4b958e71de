//! Order-preserving, non-overlapping glossary annotation.
//!
//! The annotator folds the caller-ordered term list over a growing
//! fragment list. Each term is only ever matched against the fragments
//! that are still plain text: once a range is annotated it leaves the
//! pool, which is the whole non-overlap argument. Earlier terms
//! therefore shadow later ones by construction.

use regex::Regex;

use crate::ast::{Annotation, CowStr, GlossaryTerm};
use crate::error::{RenderWarning, RenderWarnings};

/// An intermediate unit of the annotation fold.
///
/// Plain fragments are still eligible for later terms and for the
/// emphasis pass; annotated fragments are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment<'a> {
    /// Text not (yet) claimed by any term.
    Plain(&'a str),
    /// A resolved glossary match. Never re-scanned.
    Annotated(Annotation<'a>),
}

/// A glossary term with its compiled match pattern.
#[derive(Debug)]
struct CompiledTerm {
    term: String,
    definition: String,
    pattern: Regex,
}

/// A caller-supplied glossary compiled into match patterns.
///
/// Compilation never fails: terms are escaped so operator-supplied
/// vocabulary is always treated literally, and any term that still
/// cannot become a pattern is skipped and recorded as a warning.
#[derive(Debug, Default)]
pub struct Glossary {
    terms: Vec<CompiledTerm>,
    warnings: RenderWarnings,
}

impl Glossary {
    /// Compile the supplied terms, preserving their order.
    ///
    /// Patterns are case-insensitive and whole-word
    /// (`(?i)\b…\b` over the escaped term text).
    pub fn compile(terms: &[GlossaryTerm]) -> Self {
        let mut compiled = Vec::with_capacity(terms.len());
        let mut warnings = RenderWarnings::new();

        for entry in terms {
            if entry.term.trim().is_empty() {
                warnings.push(RenderWarning::empty_term());
                continue;
            }

            let pattern = format!(r"(?i)\b{}\b", regex::escape(&entry.term));
            match Regex::new(&pattern) {
                Ok(pattern) => compiled.push(CompiledTerm {
                    term: entry.term.clone(),
                    definition: entry.definition.clone(),
                    pattern,
                }),
                Err(e) => warnings.push(RenderWarning::invalid_pattern(&entry.term, e)),
            }
        }

        Self {
            terms: compiled,
            warnings,
        }
    }

    /// Check whether any terms survived compilation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Warnings collected while compiling the term list.
    #[inline]
    pub fn warnings(&self) -> &RenderWarnings {
        &self.warnings
    }

    /// Split `text` into plain and annotated fragments.
    ///
    /// Terms are applied in supplied order; each pass rebuilds the full
    /// fragment list, splitting only the fragments that are still
    /// plain. Matched substrings keep their original casing in
    /// `display` while `term` carries the canonical glossary casing.
    pub fn annotate<'a>(&self, text: &'a str) -> Vec<Fragment<'a>> {
        let mut fragments = vec![Fragment::Plain(text)];
        if self.terms.is_empty() || text.is_empty() {
            return fragments;
        }

        for term in &self.terms {
            let mut rebuilt = Vec::with_capacity(fragments.len());

            for fragment in fragments {
                match fragment {
                    Fragment::Annotated(_) => rebuilt.push(fragment),
                    Fragment::Plain(plain) => term.split_plain(plain, &mut rebuilt),
                }
            }

            fragments = rebuilt;
        }

        fragments
    }
}

impl CompiledTerm {
    /// Split one plain fragment around this term's matches.
    fn split_plain<'a>(&self, plain: &'a str, out: &mut Vec<Fragment<'a>>) {
        let mut cursor = 0;

        for m in self.pattern.find_iter(plain) {
            if m.start() > cursor {
                out.push(Fragment::Plain(&plain[cursor..m.start()]));
            }
            out.push(Fragment::Annotated(Annotation {
                term: CowStr::Owned(self.term.clone()),
                definition: CowStr::Owned(self.definition.clone()),
                display: CowStr::Borrowed(m.as_str()),
            }));
            cursor = m.end();
        }

        if cursor == 0 {
            // No match: keep the fragment untouched.
            out.push(Fragment::Plain(plain));
        } else if cursor < plain.len() {
            out.push(Fragment::Plain(&plain[cursor..]));
        }
    }
}
