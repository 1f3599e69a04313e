/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document transform seam and the sections transform.
 */

//! Document transforms.
//!
//! - [`TreeTransform`] - The trait implemented by document transforms
//! - [`SectionsTransform`] - Wraps headings in nested sections
//!
//! A transform holds only immutable configuration, so one instance can be
//! shared across threads. Per-document state is built inside
//! [`TreeTransform::transform`] and dropped when it returns.
//!
//! # Example
//!
//! ```
//! use docsection::{SectionsConfig, SectionsTransform, TreeTransform};
//! use docsection_tree::{Document, Element};
//!
//! let mut doc = Document::new(
//!     Element::new("div").with_child(Element::new("h1").with_attr("id", "intro")),
//! );
//!
//! SectionsTransform::new(SectionsConfig::default())
//!     .transform(&mut doc)
//!     .unwrap();
//!
//! assert_eq!(doc.root.children[0].tag, "section");
//! assert_eq!(doc.root.children[0].id(), Some("intro"));
//! ```

use crate::Result;
use crate::assembler::SectionAssembler;
use crate::options::SectionsConfig;
use docsection_tree::Document;

/// Trait for document transformations.
///
/// Transforms must be `Send + Sync` so documents can be processed in
/// parallel with a shared instance.
pub trait TreeTransform: Send + Sync {
    /// Human-readable name for this transform.
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &str;

    /// Apply the transformation to the document in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformation fails. The document is left
    /// untouched when it does.
    fn transform(&self, doc: &mut Document) -> Result<()>;
}

/// Transform that wraps headings in sections.
///
/// Options are resolved per document, so front matter in one document
/// never affects another.
#[derive(Debug, Clone, Default)]
pub struct SectionsTransform {
    config: SectionsConfig,
}

impl SectionsTransform {
    pub fn new(config: SectionsConfig) -> Self {
        Self { config }
    }
}

impl TreeTransform for SectionsTransform {
    fn name(&self) -> &str {
        "sections"
    }

    fn transform(&self, doc: &mut Document) -> Result<()> {
        tracing::debug!(transform = self.name(), "Running transform");
        let assembler = SectionAssembler::new(&doc.meta, &self.config)?;
        assembler.assemble(&mut doc.root);
        Ok(())
    }
}
