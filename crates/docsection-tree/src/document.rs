/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! A document: front-matter metadata plus the root of its element tree.

use crate::element::Element;
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// Document-level metadata (front matter), in source order.
pub type Meta = LinkedHashMap<String, MetaValue>;

/// A front-matter value.
///
/// Front matter is loosely typed: the same key may arrive as a YAML scalar,
/// a JSON number, or a list of lines (the Python-Markdown `meta` convention).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<MetaValue>),
}

impl MetaValue {
    /// Render a scalar value as a string.
    ///
    /// Lists yield their first element, so a single-line list entry reads
    /// the same as a plain scalar. Empty lists yield `None`.
    pub fn as_scalar_string(&self) -> Option<String> {
        match self {
            MetaValue::Bool(b) => Some(b.to_string()),
            MetaValue::Integer(i) => Some(i.to_string()),
            MetaValue::Float(f) => Some(f.to_string()),
            MetaValue::String(s) => Some(s.clone()),
            MetaValue::List(items) => items.first().and_then(MetaValue::as_scalar_string),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::String(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::String(value)
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        MetaValue::Bool(value)
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        MetaValue::Integer(value)
    }
}

/// A parsed document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "LinkedHashMap::is_empty")]
    pub meta: Meta,
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            meta: Meta::new(),
            root,
        }
    }

    /// Builder: add a metadata entry.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_strings() {
        assert_eq!(MetaValue::from(true).as_scalar_string().as_deref(), Some("true"));
        assert_eq!(MetaValue::Integer(4).as_scalar_string().as_deref(), Some("4"));
        assert_eq!(MetaValue::from("h").as_scalar_string().as_deref(), Some("h"));
        assert_eq!(MetaValue::Float(2.5).as_scalar_string().as_deref(), Some("2.5"));
    }

    #[test]
    fn test_list_uses_first_item() {
        let v = MetaValue::List(vec!["2".into(), "3".into()]);
        assert_eq!(v.as_scalar_string().as_deref(), Some("2"));
        assert_eq!(MetaValue::List(vec![]).as_scalar_string(), None);
    }

    #[test]
    fn test_document_from_json() {
        let doc: Document = serde_json::from_str(
            r#"{
                "meta": {"max_level": 2, "class_prefix": "lvl", "hijack_header_id": ["no"]},
                "root": {"tag": "div", "children": [{"tag": "h1", "text": "Title"}]}
            }"#,
        )
        .unwrap();

        assert_eq!(doc.meta.get("max_level"), Some(&MetaValue::Integer(2)));
        assert_eq!(doc.meta.get("class_prefix"), Some(&MetaValue::from("lvl")));
        assert_eq!(
            doc.meta.get("hijack_header_id"),
            Some(&MetaValue::List(vec![MetaValue::from("no")]))
        );
        assert_eq!(doc.root.children[0].heading_level(), Some(1));
    }

    #[test]
    fn test_document_meta_is_optional() {
        let doc: Document = serde_json::from_str(r#"{"root": {"tag": "div"}}"#).unwrap();
        assert!(doc.meta.is_empty());
        assert_eq!(doc, Document::new(Element::new("div")));
    }
}
