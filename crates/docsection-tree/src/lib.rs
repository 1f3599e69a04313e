/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document tree type definitions for docsection.
 *
 * This crate provides pure data types for the element tree produced by an
 * upstream Markdown parser. It has minimal dependencies (serde, hashlink)
 * and can be used by any crate that needs to build or inspect such trees.
 */

pub mod document;
pub mod element;
pub mod outline;

// Re-export commonly used types at the crate root
pub use document::{Document, Meta, MetaValue};
pub use element::{Attributes, Element, MAX_HEADING_LEVEL, SECTION_TAG, heading_level};
pub use outline::outline;
