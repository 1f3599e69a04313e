/*
 * element.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The element node of a parsed document tree.

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// Tag name of the container elements created around headings.
pub const SECTION_TAG: &str = "section";

/// Deepest heading level a tag can name (`h6`).
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Ordered attribute map. Insertion order is preserved so that rendered
/// output is stable.
pub type Attributes = LinkedHashMap<String, String>;

/// A node in the document tree.
///
/// Mirrors the shape of an ElementTree node: a tag, ordered attributes,
/// ordered child elements, and opaque inline text. `text` is the content
/// before the first child; `tail` is the content following this element
/// inside its parent. Neither is interpreted by the section assembler.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,

    #[serde(default, skip_serializing_if = "LinkedHashMap::is_empty")]
    pub attributes: Attributes,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tail: Option<String>,
}

impl Element {
    /// Create an element with no attributes, children or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder: set an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder: set the inline text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: append a child.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: append several children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, keeping its position if it already exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.get_mut(&name) {
            Some(slot) => *slot = value,
            None => {
                self.attributes.insert(name, value);
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn id(&self) -> Option<&str> {
        self.get("id")
    }

    /// Whitespace-separated tokens of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get("class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Heading level of this element, if its tag is `h1`..`h6`.
    pub fn heading_level(&self) -> Option<u8> {
        heading_level(&self.tag)
    }

    pub fn is_section(&self) -> bool {
        self.tag == SECTION_TAG
    }

    /// Direct children that are `section` elements.
    pub fn child_sections(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter(|c| c.is_section())
    }

    /// Number of elements in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Element::subtree_len).sum::<usize>()
    }
}

/// Parse a heading level from a tag name.
///
/// Only the lowercase tags `h1` through `h6` are headings.
pub fn heading_level(tag: &str) -> Option<u8> {
    let digit = tag.strip_prefix('h')?;
    let level = match digit.as_bytes() {
        [d @ b'1'..=b'9'] => d - b'0',
        _ => return None,
    };
    (level <= MAX_HEADING_LEVEL).then_some(level)
}
