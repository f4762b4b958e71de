//! Structural classification of a single source line.
//!
//! Each physical line maps to exactly one block kind, decided by its
//! structural prefix. Prefixes are tested longest-first so `### ` is
//! never shadowed by `## ` or `# `.

/// How a trimmed source line should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Heading line; `text` is the content after the marker.
    Heading {
        /// Heading level (1-3).
        level: u8,
        /// Text after the `#` marker run and its space.
        text: &'a str,
    },
    /// Bulleted list entry (`* ` or `- `).
    ListItem {
        /// Text after the two-character bullet prefix.
        text: &'a str,
    },
    /// Quoted line (`> `).
    Blockquote {
        /// Text after the quote prefix.
        text: &'a str,
    },
    /// Line is empty after trimming.
    Blank,
    /// Anything else.
    Paragraph {
        /// The full trimmed line.
        text: &'a str,
    },
}

/// Classify a trimmed line by longest-prefix-first priority.
///
/// A `#` run without a trailing space (or deeper than three) carries no
/// structural meaning here and falls through to `Paragraph`.
#[inline]
pub fn classify(trimmed: &str) -> LineKind<'_> {
    if let Some(text) = trimmed.strip_prefix("### ") {
        return LineKind::Heading { level: 3, text };
    }
    if let Some(text) = trimmed.strip_prefix("## ") {
        return LineKind::Heading { level: 2, text };
    }
    if let Some(text) = trimmed.strip_prefix("# ") {
        return LineKind::Heading { level: 1, text };
    }
    if let Some(text) = trimmed
        .strip_prefix("* ")
        .or_else(|| trimmed.strip_prefix("- "))
    {
        return LineKind::ListItem { text };
    }
    if let Some(text) = trimmed.strip_prefix("> ") {
        return LineKind::Blockquote { text };
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    LineKind::Paragraph { text: trimmed }
}
