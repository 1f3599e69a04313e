/*
 * assembler.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Section assembly: wrap headings and their content in nested sections.
 */

//! The section assembler.
//!
//! Walks an element tree and wraps each heading, plus the siblings that
//! follow it, in a `section` element. Sections nest by heading level.
//!
//! ## Example
//!
//! Input children of a container:
//! ```text
//! h1 #intro
//! p
//! h2 #usage
//! p
//! h2 #faq
//! ```
//!
//! Output (hijack style, subsection counting on):
//! ```text
//! section #intro .level1 .has2
//!   h1
//!   p
//!   section #usage .level2
//!     h2
//!     p
//!   section #faq .level2
//!     h2
//! ```
//!
//! ## Behavior
//!
//! - Content before the first heading of a container stays where it is
//! - A heading at level N closes every open section at level >= N
//! - A heading with no shallower open section opens a section in its own
//!   container, whatever its level (a document may start with `h3`)
//! - Headings deeper than `max_level` are ordinary content
//! - Open sections belong to the whole walk, not to one container. A
//!   heading inside a `blockquote` nests its section under the enclosing
//!   open section, and later siblings of the blockquote land in that new
//!   section.

use crate::arena::{Arena, NodeId};
use crate::error::Result;
use crate::options::{SectionStyle, SectionsConfig, SectionsOptions};
use docsection_tree::{Element, Meta, SECTION_TAG};

/// Wraps headings in sections. One assembler handles one document.
///
/// Build it from the document's metadata with [`SectionAssembler::new`]
/// and consume it with [`SectionAssembler::assemble`]. The open-section
/// state lives here for the duration of that single walk.
#[derive(Debug)]
pub struct SectionAssembler {
    options: SectionsOptions,
    /// Innermost open section.
    current: Option<OpenSection>,
    /// Open sections enclosing `current`, outermost first. Levels strictly
    /// increase from the first entry to `current`.
    ancestors: Vec<OpenSection>,
    sections_created: usize,
}

/// A section that has not been closed yet, and the heading level that
/// opened it.
#[derive(Debug, Clone, Copy)]
struct OpenSection {
    node: NodeId,
    level: u8,
}

impl SectionAssembler {
    /// Create an assembler for a document with the given metadata.
    ///
    /// # Errors
    ///
    /// Fails if an option cannot be coerced (see [`SectionsOptions::resolve`]).
    pub fn new(meta: &Meta, config: &SectionsConfig) -> Result<Self> {
        let options = SectionsOptions::resolve(meta, config)?;
        tracing::debug!(
            max_level = options.max_level,
            class_prefix = %options.class_prefix,
            style = options.style.as_str(),
            count_subsections = options.count_subsections,
            "Resolved section options"
        );
        Ok(Self::with_options(options))
    }

    pub fn with_options(options: SectionsOptions) -> Self {
        Self {
            options,
            current: None,
            ancestors: Vec::new(),
            sections_created: 0,
        }
    }

    /// Assemble sections throughout the tree rooted at `root`, in place.
    pub fn assemble(mut self, root: &mut Element) {
        let (mut arena, root_id) = Arena::from_tree(std::mem::take(root));
        self.assemble_children(&mut arena, root_id);
        *root = arena.into_tree(root_id);
        tracing::debug!(sections = self.sections_created, "Assembled sections");
    }

    /// Level of the innermost open section, 0 if none is open.
    fn current_level(&self) -> u8 {
        self.current.map_or(0, |open| open.level)
    }

    fn assemble_children(&mut self, arena: &mut Arena, parent: NodeId) {
        // Walk a snapshot: sections get appended to `parent` and children
        // get moved out of it during the loop.
        let children = arena.children(parent);
        let mut active = false;

        for child in children {
            if let Some(level) = self.options.section_level(&arena.element(child).tag) {
                self.begin_section(arena, child, parent, level);
                active = true;
            }
            if let (true, Some(open)) = (active, self.current) {
                arena.move_to(child, open.node);
            }
            if arena.has_children(child) {
                self.assemble_children(arena, child);
            }
        }
    }

    fn begin_section(&mut self, arena: &mut Arena, heading: NodeId, parent: NodeId, level: u8) {
        while self.current_level() >= level {
            self.end_section();
        }

        let mut attach_to = parent;
        if let Some(open) = self.current {
            if self.options.count_subsections {
                increment_subsection_count(arena.element_mut(open.node));
            }
            self.ancestors.push(open);
            attach_to = open.node;
        }

        let section = self.make_section(arena.element_mut(heading), level);
        tracing::trace!(
            level,
            depth = self.ancestors.len(),
            id = section.id().unwrap_or_default(),
            "Opening section"
        );
        let node = arena.append(attach_to, section);
        self.sections_created += 1;
        self.current = Some(OpenSection { node, level });
    }

    /// Close the innermost open section, making its enclosing section
    /// current again.
    fn end_section(&mut self) {
        let Some(closed) = self.current.take() else {
            return;
        };
        tracing::trace!(level = closed.level, "Closing section");
        self.current = self.ancestors.pop();
    }

    fn make_section(&self, heading: &mut Element, level: u8) -> Element {
        let mut section = Element::new(SECTION_TAG);
        let level_class = if self.options.class_prefix.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.options.class_prefix, level)
        };

        let class = match self.options.style {
            SectionStyle::Hijack => {
                if let Some(id) = heading.remove("id").filter(|id| !id.is_empty()) {
                    section.set("id", id);
                }
                level_class
            }
            SectionStyle::Prefixed => {
                if let Some(id) = heading.id().filter(|id| !id.is_empty()) {
                    section.set("id", format!("section_{}", id));
                }
                match heading.get("class") {
                    Some(heading_class) => format!("{} {}", level_class, heading_class)
                        .trim()
                        .to_string(),
                    None => level_class,
                }
            }
        };

        if !class.is_empty() {
            section.set("class", class);
        }
        section
    }
}

/// Replace the section's `hasN` class token with `has{N+1}`.
///
/// A section without a counter token counts as `has0`.
fn increment_subsection_count(section: &mut Element) {
    let mut count = 0;
    let mut classes: Vec<String> = Vec::new();
    for token in section.classes() {
        match subsection_count(token) {
            Some(n) => count = n,
            None => classes.push(token.to_string()),
        }
    }
    classes.push(format!("has{}", count + 1));
    section.set("class", classes.join(" "));
}

/// Parse a `has<digits>` counter token.
fn subsection_count(token: &str) -> Option<usize> {
    let digits = token.strip_prefix("has")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
