//! # Glossmark Core
//!
//! A deterministic renderer for loosely-structured editorial copy.
//!
//! Glossmark turns line-oriented text into a tree of typed display
//! blocks, enriching caller-supplied vocabulary with hover-disclosed
//! glossary definitions and applying lightweight bold/italic emphasis.
//! The engine is a pure, synchronous transform: no I/O, no global
//! state, and no input can make it fail.
//!
//! ## Quick Start
//!
//! ```rust
//! use glossmark_core::{render, GlossaryTerm};
//!
//! let glossary = [GlossaryTerm::new("evaporation", "liquid turning into vapor")];
//! let doc = render("## Water Cycle\nEvaporation starts it.", &glossary);
//!
//! println!("Rendered {} blocks", doc.len());
//! ```
//!
//! ## Reuse
//!
//! When rendering many inputs against one glossary, build a
//! [`Renderer`] so term patterns are compiled once:
//!
//! ```rust
//! use glossmark_core::{GlossaryTerm, Renderer};
//!
//! let renderer = Renderer::new(&[GlossaryTerm::new("osmosis", "solvent diffusion")]);
//! let result = renderer.render_with_diagnostics("Osmosis moves *water*.");
//!
//! // Unusable glossary terms never fail the render; they are reported.
//! assert!(result.is_clean());
//! ```
//!
//! ## Guarantees
//!
//! - One block per physical source line, keyed by line index
//! - Glossary annotations within a block never overlap; earlier terms
//!   shadow later ones
//! - The glossary pass runs before emphasis, and resolved spans are
//!   never re-scanned (no italic inside bold, no emphasis inside an
//!   annotation)
//! - Malformed markers and pattern-hostile terms degrade gracefully;
//!   rendering never panics or errors

pub mod ast;
pub mod classify;
pub mod error;
pub mod glossary;
pub mod inline;
pub mod lexer;
pub mod render;
pub mod slug;

pub use ast::{Annotation, Block, Document, GlossaryTerm, Inline};
pub use error::{RenderWarning, RenderWarningKind, RenderWarnings};
pub use render::{render, RenderResult, Renderer};
pub use slug::slugify;
