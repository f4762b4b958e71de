//! The rendering pipeline: classify, annotate, format, assemble.
//!
//! A stateless pure function of `(text, glossary)`: per physical line,
//! the classifier picks a block kind, the glossary pass claims term
//! matches out of the line's plain text, the emphasis pass formats
//! whatever stayed plain, and the results are spliced back together in
//! source order. Headings skip the glossary pass and additionally get
//! an anchor slug from their raw text.

use crate::ast::{
    Block, Blockquote, Document, GlossaryTerm, Heading, Inline, ListItem, Paragraph, Spacer,
};
use crate::classify::{classify, LineKind};
use crate::error::RenderWarnings;
use crate::glossary::{Fragment, Glossary};
use crate::inline::InlineFormatter;
use crate::lexer::Lexer;
use crate::slug::slugify;

/// A rendered document together with glossary diagnostics.
#[derive(Debug)]
pub struct RenderResult<'a> {
    /// The rendered document (always complete; never partial).
    pub document: Document<'a>,
    /// Glossary terms that were skipped during compilation.
    pub warnings: RenderWarnings,
}

impl<'a> RenderResult<'a> {
    /// Check if every glossary term compiled.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Renderer with a compiled glossary.
///
/// Construction compiles the caller-ordered term list once; the
/// renderer can then be reused across any number of inputs. It holds
/// no mutable state, so repeated calls with the same input yield
/// structurally identical documents.
#[derive(Debug, Default)]
pub struct Renderer {
    glossary: Glossary,
    formatter: InlineFormatter,
}

impl Renderer {
    /// Create a renderer for the given glossary.
    ///
    /// Never fails: unusable terms are skipped and surface through
    /// [`Renderer::render_with_diagnostics`].
    pub fn new(terms: &[GlossaryTerm]) -> Self {
        Self {
            glossary: Glossary::compile(terms),
            formatter: InlineFormatter::new(),
        }
    }

    /// Render input text into a document.
    ///
    /// Empty input yields an empty document. One block is produced per
    /// physical line, keyed by its line index.
    pub fn render<'a>(&self, input: &'a str) -> Document<'a> {
        let mut blocks = Vec::with_capacity(16);

        for line in Lexer::new(input) {
            let key = line.index;
            let block = match classify(line.trimmed()) {
                LineKind::Heading { level, text } => Block::Heading(Heading {
                    level,
                    slug: slugify(text),
                    spans: self.formatter.format(text),
                    key,
                }),
                LineKind::ListItem { text } => Block::ListItem(ListItem {
                    spans: self.annotate_and_format(text),
                    key,
                }),
                LineKind::Blockquote { text } => Block::Blockquote(Blockquote {
                    spans: self.annotate_and_format(text),
                    key,
                }),
                LineKind::Blank => Block::Spacer(Spacer { key }),
                LineKind::Paragraph { text } => Block::Paragraph(Paragraph {
                    spans: self.annotate_and_format(text),
                    key,
                }),
            };
            blocks.push(block);
        }

        Document { blocks }
    }

    /// Render and report which glossary terms were skipped.
    pub fn render_with_diagnostics<'a>(&self, input: &'a str) -> RenderResult<'a> {
        RenderResult {
            document: self.render(input),
            warnings: self.glossary.warnings().clone(),
        }
    }

    /// Glossary pass, then emphasis pass over the plain leftovers.
    ///
    /// Annotated fragments pass through untouched; every fragment the
    /// glossary left plain is formatted independently, which is what
    /// keeps markers split across an annotation literal.
    fn annotate_and_format<'a>(&self, text: &'a str) -> Vec<Inline<'a>> {
        let mut spans = Vec::new();

        for fragment in self.glossary.annotate(text) {
            match fragment {
                Fragment::Plain(plain) => spans.extend(self.formatter.format(plain)),
                Fragment::Annotated(annotation) => spans.push(Inline::Glossary(annotation)),
            }
        }

        spans
    }
}

/// One-shot convenience: compile the glossary and render in one call.
///
/// Prefer constructing a [`Renderer`] when rendering repeatedly with
/// the same glossary; term patterns are then compiled only once.
pub fn render<'a>(input: &'a str, terms: &[GlossaryTerm]) -> Document<'a> {
    Renderer::new(terms).render(input)
}
