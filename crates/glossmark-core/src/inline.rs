//! Two-pass inline emphasis extraction.
//!
//! Pass one resolves `**bold**` spans; pass two resolves `*italic*`
//! spans, but only inside the sub-fragments pass one left plain. A
//! resolved Bold span is never re-entered, so a lone `*` inside it
//! stays a literal character. Malformed or unterminated markers never
//! fail: they degrade to plain text.

use regex::Regex;

use crate::ast::{Bold, CowStr, Inline, Italic, Text};

/// Lazy, non-empty-content double marker. A four-character match
/// (`****`) has no content and is rejected after the fact.
const BOLD_PATTERN: &str = r"\*\*.*?\*\*";

/// Single marker with at least one non-marker character between.
const ITALIC_PATTERN: &str = r"\*[^*]+?\*";

/// Emphasis span extractor for plain text fragments.
#[derive(Debug)]
pub struct InlineFormatter {
    bold: Regex,
    italic: Regex,
}

impl InlineFormatter {
    /// Create a formatter with the two emphasis patterns compiled.
    pub fn new() -> Self {
        Self {
            // Both patterns are fixed and known to compile.
            bold: Regex::new(BOLD_PATTERN).expect("bold pattern is valid"),
            italic: Regex::new(ITALIC_PATTERN).expect("italic pattern is valid"),
        }
    }

    /// Extract ordered `Text | Bold | Italic` spans from one fragment.
    ///
    /// Empty sub-fragments are dropped; they contribute no text.
    pub fn format<'a>(&self, text: &'a str) -> Vec<Inline<'a>> {
        let mut spans = Vec::new();
        if text.is_empty() {
            return spans;
        }

        let mut cursor = 0;
        for m in self.bold.find_iter(text) {
            if m.start() > cursor {
                self.italic_pass(&text[cursor..m.start()], &mut spans);
            }

            let candidate = m.as_str();
            if candidate.len() > 4 {
                spans.push(Inline::Bold(Bold {
                    content: CowStr::Borrowed(&candidate[2..candidate.len() - 2]),
                }));
            } else {
                // `****`: no content, leave the markers to the italic
                // pass (which will keep them literal).
                self.italic_pass(candidate, &mut spans);
            }

            cursor = m.end();
        }

        if cursor < text.len() {
            self.italic_pass(&text[cursor..], &mut spans);
        }

        spans
    }

    /// Resolve `*italic*` spans in a fragment pass one left plain.
    fn italic_pass<'a>(&self, text: &'a str, out: &mut Vec<Inline<'a>>) {
        let mut cursor = 0;

        for m in self.italic.find_iter(text) {
            if m.start() > cursor {
                out.push(Inline::Text(Text {
                    content: CowStr::Borrowed(&text[cursor..m.start()]),
                }));
            }

            let matched = m.as_str();
            out.push(Inline::Italic(Italic {
                content: CowStr::Borrowed(&matched[1..matched.len() - 1]),
            }));

            cursor = m.end();
        }

        if cursor < text.len() {
            out.push(Inline::Text(Text {
                content: CowStr::Borrowed(&text[cursor..]),
            }));
        }
    }
}

impl Default for InlineFormatter {
    fn default() -> Self {
        Self::new()
    }
}
