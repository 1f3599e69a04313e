//! Heading section assembly for parsed document trees.
//!
//! This crate runs after a Markdown parser has produced a flat element tree
//! and after heading ids have been assigned. It wraps each heading and the
//! content that follows it in a `section` element, nesting sections by
//! heading level.
//!
//! # Architecture
//!
//! - [`SectionsConfig`] - Static configuration, usually loaded from YAML
//! - [`SectionsOptions`] - Configuration merged with a document's front matter
//! - [`SectionAssembler`] - The per-document tree rewrite
//! - [`SectionsTransform`] - [`TreeTransform`] wrapper that builds a fresh
//!   assembler for each document
//!
//! # Example
//!
//! ```
//! use docsection::{SectionAssembler, SectionsConfig};
//! use docsection_tree::{Element, Meta};
//!
//! let mut root = Element::new("div")
//!     .with_child(Element::new("h1").with_text("Title"))
//!     .with_child(Element::new("p").with_text("Body"))
//!     .with_child(Element::new("h2").with_text("Part"));
//!
//! SectionAssembler::new(&Meta::new(), &SectionsConfig::default())
//!     .unwrap()
//!     .assemble(&mut root);
//!
//! let outer = &root.children[0];
//! assert_eq!(outer.get("class"), Some("level1"));
//! assert_eq!(outer.children.len(), 3);
//! assert_eq!(outer.children[2].get("class"), Some("level2"));
//! ```

mod arena;
pub mod assembler;
pub mod error;
pub mod options;
pub mod transform;

// Re-export commonly used types
pub use assembler::SectionAssembler;
pub use error::{Result, SectionsError};
pub use options::{
    DEFAULT_CLASS_PREFIX, DEFAULT_MAX_LEVEL, SectionStyle, SectionsConfig, SectionsOptions,
    override_meta, parse_bool,
};
pub use transform::{SectionsTransform, TreeTransform};
