/*
 * arena.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Index arena used while re-parenting nodes.
 */

//! Index arena over an [`Element`] tree.
//!
//! Section assembly keeps pointers to open sections across the whole walk,
//! and moves nodes between parents that may already have been visited.
//! The arena flattens the tree into nodes addressed by [`NodeId`], each
//! recording its parent, so moves are O(1) and nothing is invalidated.
//!
//! Moving a node only updates its `parent` and the new parent's child list.
//! The old parent keeps a stale entry, which [`Arena::into_tree`] drops
//! because the entry's `parent` no longer points back.

use docsection_tree::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug)]
struct Node {
    /// The element with its `children` moved into `children` below.
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    /// Flatten `root` into an arena. Returns the arena and the root's id.
    pub(crate) fn from_tree(root: Element) -> (Self, NodeId) {
        let mut arena = Self {
            nodes: Vec::with_capacity(root.subtree_len()),
        };
        let root_id = arena.insert(root, None);
        (arena, root_id)
    }

    fn insert(&mut self, mut element: Element, parent: Option<NodeId>) -> NodeId {
        let children = std::mem::take(&mut element.children);
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent,
            children: Vec::with_capacity(children.len()),
        });
        for child in children {
            let child_id = self.insert(child, Some(id));
            self.nodes[id.0].children.push(child_id);
        }
        id
    }

    pub(crate) fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id.0].element
    }

    pub(crate) fn element_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.0].element
    }

    /// Current children of `id`, in order.
    pub(crate) fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id.0]
            .children
            .iter()
            .copied()
            .filter(|child| self.nodes[child.0].parent == Some(id))
            .collect()
    }

    pub(crate) fn has_children(&self, id: NodeId) -> bool {
        self.nodes[id.0]
            .children
            .iter()
            .any(|child| self.nodes[child.0].parent == Some(id))
    }

    /// Append a new childless element as the last child of `parent`.
    pub(crate) fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = self.insert(element, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Detach `child` from its parent and append it to `new_parent`.
    pub(crate) fn move_to(&mut self, child: NodeId, new_parent: NodeId) {
        self.nodes[child.0].parent = Some(new_parent);
        self.nodes[new_parent.0].children.push(child);
    }

    /// Rebuild the owned tree below `root`.
    pub(crate) fn into_tree(mut self, root: NodeId) -> Element {
        self.build(root)
    }

    fn build(&mut self, id: NodeId) -> Element {
        let children = std::mem::take(&mut self.nodes[id.0].children);
        let mut element = std::mem::take(&mut self.nodes[id.0].element);
        let attached: Vec<NodeId> = children
            .into_iter()
            .filter(|child| self.nodes[child.0].parent == Some(id))
            .collect();
        element.children = attached.into_iter().map(|child| self.build(child)).collect();
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("div")
            .with_child(Element::new("p").with_text("a"))
            .with_child(
                Element::new("blockquote").with_child(Element::new("p").with_text("b")),
            )
    }

    #[test]
    fn test_round_trip_preserves_tree() {
        let (arena, root) = Arena::from_tree(sample());
        assert_eq!(arena.into_tree(root), sample());
    }

    #[test]
    fn test_move_drops_stale_entry() {
        let (mut arena, root) = Arena::from_tree(sample());
        let children = arena.children(root);
        let (para, quote) = (children[0], children[1]);

        arena.move_to(para, quote);
        assert_eq!(arena.children(root), vec![quote]);
        assert_eq!(arena.children(quote).len(), 2);

        let tree = arena.into_tree(root);
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].children[1].text.as_deref(), Some("a"));
    }

    #[test]
    fn test_append_and_has_children() {
        let (mut arena, root) = Arena::from_tree(Element::new("div"));
        assert!(!arena.has_children(root));

        let section = arena.append(root, Element::new("section"));
        assert!(arena.has_children(root));
        assert_eq!(arena.element(section).tag, "section");

        arena.element_mut(section).set("id", "s");
        assert_eq!(arena.into_tree(root).children[0].id(), Some("s"));
    }
}
