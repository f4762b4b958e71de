//! Display-tree types produced by the renderer.
//!
//! This module contains every node type a presentation layer consumes.
//! The tree is designed to be:
//!
//! - **Zero-copy**: Uses `Cow<'a, str>` to borrow from input when possible
//! - **Keyed**: Every block carries its source line index as a stable key
//! - **Closed**: Block and inline variants are exhaustive sum types, so a
//!   presentation boundary can match on them without a fallback arm

/// Borrowed or owned string type for zero-copy rendering.
pub type CowStr<'a> = std::borrow::Cow<'a, str>;

/// A vocabulary entry supplied by the caller.
///
/// Terms are matched case-insensitively on whole-word boundaries.
/// The order of the supplied list is significant: earlier terms claim
/// matches first, and text they claim is never offered to later terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryTerm {
    /// The vocabulary to match (treated literally, never as a pattern).
    pub term: String,
    /// The definition shown by the presentation layer's disclosure.
    pub definition: String,
}

impl GlossaryTerm {
    /// Create a glossary entry.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// A rendered document.
///
/// The root of the display tree: an ordered sequence of blocks, one per
/// physical source line. May be empty (empty input renders to nothing,
/// not an error).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document<'a> {
    /// Blocks in source line order.
    pub blocks: Vec<Block<'a>>,
}

impl<'a> Document<'a> {
    /// Check whether the document has no blocks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate over the heading blocks, in source order.
    ///
    /// Useful for building a table of contents: each heading carries the
    /// slug an anchor-scroll collaborator links to.
    pub fn headings(&self) -> impl Iterator<Item = &Heading<'a>> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Heading(h) => Some(h),
            _ => None,
        })
    }
}

/// Block-level display nodes.
///
/// Exactly one block is produced per physical source line; adjacent
/// paragraph lines stay separate and blank lines become real `Spacer`
/// entries so vertical rhythm survives a redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum Block<'a> {
    /// Section heading (levels 1-3) with a derived anchor slug.
    Heading(Heading<'a>),
    /// Body text line.
    Paragraph(Paragraph<'a>),
    /// Bulleted list entry (`* ` or `- `).
    ListItem(ListItem<'a>),
    /// Quoted line (`> `).
    Blockquote(Blockquote<'a>),
    /// Fixed-height filler for a blank source line.
    Spacer(Spacer),
}

impl<'a> Block<'a> {
    /// The stable key for this block: its source line index.
    ///
    /// Keys let a consuming renderer diff and redraw without flicker.
    #[inline]
    pub fn key(&self) -> usize {
        match self {
            Block::Heading(h) => h.key,
            Block::Paragraph(p) => p.key,
            Block::ListItem(li) => li.key,
            Block::Blockquote(q) => q.key,
            Block::Spacer(s) => s.key,
        }
    }

    /// The inline spans carried by this block (empty for spacers).
    pub fn spans(&self) -> &[Inline<'a>] {
        match self {
            Block::Heading(h) => &h.spans,
            Block::Paragraph(p) => &p.spans,
            Block::ListItem(li) => &li.spans,
            Block::Blockquote(q) => &q.spans,
            Block::Spacer(_) => &[],
        }
    }

    /// Reconstruct the block's literal text content.
    ///
    /// Concatenates the text carried by every span. Consumed emphasis
    /// markers are not part of any span, so the result is the trimmed
    /// source line minus the markers that resolved to Bold or Italic;
    /// unmatched markers survive verbatim inside plain text spans.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for span in self.spans() {
            out.push_str(span.literal());
        }
        out
    }
}

/// Section heading with level, anchor slug, and formatted spans.
///
/// Heading text receives inline emphasis but never glossary annotation:
/// navigation titles are not decorated. The slug is derived from the raw
/// heading text, before formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading<'a> {
    /// Heading level (1-3).
    pub level: u8,
    /// URL/anchor-safe identifier derived from the heading text.
    pub slug: String,
    /// Inline content.
    pub spans: Vec<Inline<'a>>,
    /// Source line index.
    pub key: usize,
}

/// Body text line with annotated and formatted spans.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph<'a> {
    /// Inline content.
    pub spans: Vec<Inline<'a>>,
    /// Source line index.
    pub key: usize,
}

/// Bulleted list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem<'a> {
    /// Inline content (bullet marker already consumed).
    pub spans: Vec<Inline<'a>>,
    /// Source line index.
    pub key: usize,
}

/// Quoted line.
#[derive(Debug, Clone, PartialEq)]
pub struct Blockquote<'a> {
    /// Inline content (`> ` prefix already consumed).
    pub spans: Vec<Inline<'a>>,
    /// Source line index.
    pub key: usize,
}

/// Fixed-height filler emitted for a blank source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacer {
    /// Source line index.
    pub key: usize,
}

/// Inline display nodes within a block.
///
/// Inlines are leaves: a resolved span's text is never re-scanned, so
/// there is no nesting. Literal markers inside a resolved span survive
/// as plain characters.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline<'a> {
    /// Unformatted text.
    Text(Text<'a>),
    /// Bold text (`**content**`, markers consumed).
    Bold(Bold<'a>),
    /// Italic text (`*content*`, markers consumed).
    Italic(Italic<'a>),
    /// Glossary-matched vocabulary carrying its definition.
    Glossary(Annotation<'a>),
}

impl<'a> Inline<'a> {
    /// The literal text this span contributes to the block.
    #[inline]
    pub fn literal(&self) -> &str {
        match self {
            Inline::Text(t) => &t.content,
            Inline::Bold(b) => &b.content,
            Inline::Italic(i) => &i.content,
            Inline::Glossary(a) => &a.display,
        }
    }
}

/// Plain text content.
#[derive(Debug, Clone, PartialEq)]
pub struct Text<'a> {
    /// The text content.
    pub content: CowStr<'a>,
}

/// Bold text.
///
/// Content is literal: a single `*` between the double markers is kept
/// as a plain character, never resolved as nested italic.
#[derive(Debug, Clone, PartialEq)]
pub struct Bold<'a> {
    /// Text between the consumed `**` markers.
    pub content: CowStr<'a>,
}

/// Italic text.
#[derive(Debug, Clone, PartialEq)]
pub struct Italic<'a> {
    /// Text between the consumed `*` markers.
    pub content: CowStr<'a>,
}

/// A glossary match, terminal for all later passes.
///
/// The presentation layer renders `display` with a hover/tap disclosure
/// showing `term` and `definition`.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation<'a> {
    /// The glossary term that matched (canonical casing).
    pub term: CowStr<'a>,
    /// The term's definition.
    pub definition: CowStr<'a>,
    /// The matched substring with its original casing preserved.
    pub display: CowStr<'a>,
}
