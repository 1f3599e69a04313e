/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Option resolution for the section assembler.
 */

//! Section assembly options.
//!
//! Options come from two layers. [`SectionsConfig`] is the static,
//! call-site configuration (usually loaded from YAML). A document's
//! front matter may override any of its keys; front matter always wins.
//! Keys are looked up in `snake_case` first, then `kebab-case`.
//!
//! | key                 | type   | default   |
//! |---------------------|--------|-----------|
//! | `max_level`         | int    | `3`       |
//! | `class_prefix`      | string | `"level"` |
//! | `hijack_header_id`  | bool   | `true`    |
//! | `count_subsections` | bool   | `false`   |

use crate::error::{Result, SectionsError};
use docsection_tree::{MAX_HEADING_LEVEL, Meta, MetaValue};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_MAX_LEVEL: u8 = 3;
pub const DEFAULT_CLASS_PREFIX: &str = "level";

/// Static configuration for the sections transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionsConfig {
    /// Deepest heading level that opens a section. Accepts an integer or a
    /// numeric string.
    #[serde(alias = "max-level", deserialize_with = "deserialize_max_level")]
    pub max_level: u8,

    /// Prefix of the level class (`level2`). Empty disables the class.
    #[serde(alias = "class-prefix")]
    pub class_prefix: String,

    /// Move the heading's id onto its section instead of deriving one.
    #[serde(alias = "hijack-header-id")]
    pub hijack_header_id: bool,

    /// Tag each section with `hasN`, its number of direct child sections.
    #[serde(alias = "count-subsections")]
    pub count_subsections: bool,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            hijack_header_id: true,
            count_subsections: false,
        }
    }
}

/// How a section derives its `id` and `class` from its heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionStyle {
    /// The heading's id moves to the section. Section class is the level
    /// class only.
    #[default]
    Hijack,
    /// The section gets `section_<id>` and the heading keeps its id.
    /// Section class is the level class followed by the heading's classes.
    Prefixed,
}

impl SectionStyle {
    pub fn from_hijack(hijack_header_id: bool) -> Self {
        if hijack_header_id {
            Self::Hijack
        } else {
            Self::Prefixed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hijack => "hijack",
            Self::Prefixed => "prefixed",
        }
    }
}

/// Options after merging front matter over the static configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionsOptions {
    /// In `1..=6`.
    pub max_level: u8,
    pub class_prefix: String,
    pub style: SectionStyle,
    pub count_subsections: bool,
}

impl SectionsOptions {
    /// Resolve options, letting `meta` override `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SectionsError::InvalidOption`] if `max_level` is not a
    /// positive integer.
    pub fn resolve(meta: &Meta, config: &SectionsConfig) -> Result<Self> {
        let max_level = match lookup(meta, "max_level") {
            Some(raw) => parse_max_level(&raw)?,
            None => u32::from(config.max_level),
        };
        if max_level == 0 {
            return Err(SectionsError::invalid_option(
                "max_level",
                max_level.to_string(),
                "a positive integer",
            ));
        }
        // Levels past h6 name no tags, so they select the same headings as 6.
        let max_level = max_level.min(u32::from(MAX_HEADING_LEVEL)) as u8;

        let class_prefix =
            lookup(meta, "class_prefix").unwrap_or_else(|| config.class_prefix.clone());

        let hijack_header_id = lookup(meta, "hijack_header_id")
            .map_or(config.hijack_header_id, |raw| {
                parse_bool(&raw, config.hijack_header_id)
            });

        let count_subsections = lookup(meta, "count_subsections")
            .map_or(config.count_subsections, |raw| {
                parse_bool(&raw, config.count_subsections)
            });

        Ok(Self {
            max_level,
            class_prefix,
            style: SectionStyle::from_hijack(hijack_header_id),
            count_subsections,
        })
    }

    /// Level of `tag` if it is a heading that opens a section.
    pub fn section_level(&self, tag: &str) -> Option<u8> {
        docsection_tree::heading_level(tag).filter(|level| *level <= self.max_level)
    }
}

impl Default for SectionsOptions {
    fn default() -> Self {
        let config = SectionsConfig::default();
        Self {
            max_level: config.max_level,
            class_prefix: config.class_prefix,
            style: SectionStyle::from_hijack(config.hijack_header_id),
            count_subsections: config.count_subsections,
        }
    }
}

/// Coerce a boolean-looking string.
///
/// Recognizes `1 t true on yes y` and `0 f false off no n`, ignoring case.
/// Anything else yields `default`.
pub fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "t" | "true" | "on" | "yes" | "y" => true,
        "0" | "f" | "false" | "off" | "no" | "n" => false,
        _ => default,
    }
}

fn parse_max_level(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| SectionsError::invalid_option("max_level", raw, "a positive integer"))
}

/// Set `key` in `meta`, replacing it under either spelling.
///
/// Front matter may carry `max_level` or `max-level`. An override must
/// replace whichever is present, otherwise the snake_case key would keep
/// winning the lookup.
pub fn override_meta(meta: &mut Meta, key: &str, value: MetaValue) {
    meta.remove(&key.replace('-', "_"));
    meta.remove(&key.replace('_', "-"));
    meta.insert(key.to_string(), value);
}

fn deserialize_max_level<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawLevel {
        Integer(u64),
        String(String),
    }

    let level = match RawLevel::deserialize(deserializer)? {
        RawLevel::Integer(level) => level,
        RawLevel::String(raw) => raw.trim().parse::<u64>().map_err(|_| {
            serde::de::Error::custom(format!(
                "max_level must be a positive integer, got {:?}",
                raw
            ))
        })?,
    };
    // Zero survives so that resolution reports it.
    Ok(level.min(u64::from(MAX_HEADING_LEVEL)) as u8)
}

fn lookup(meta: &Meta, key: &str) -> Option<String> {
    let kebab = key.replace('_', "-");
    meta.get(key)
        .or_else(|| meta.get(&kebab))
        .and_then(|value| value.as_scalar_string())
}
