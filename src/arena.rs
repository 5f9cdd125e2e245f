use generational_arena::{Arena, Index};
use itertools::Itertools;
use tracing::instrument;

use crate::errors::{LinkError, LinkResult};
use crate::link::LinkData;

/// Tree node in the arena-based link hierarchy.
#[derive(Debug)]
pub struct LinkNode {
    /// Hyperlink payload for this node
    pub data: LinkData,
    /// Own active flag, independent of descendants
    is_active: bool,
    /// Number of direct children that count as active
    active_children: usize,
    /// Index of the parent node in the arena, None for detached links
    parent: Option<Index>,
    /// Indices of child nodes in the arena
    children: Vec<Index>,
}

impl LinkNode {
    fn new(data: LinkData) -> Self {
        Self {
            data,
            is_active: false,
            active_children: 0,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Whether this link itself is marked active.
    ///
    /// Reflects only the flag set through [`LinkTree::set_active`], never
    /// the state of descendants.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Whether at least one direct child counts as active.
    pub fn has_active_children(&self) -> bool {
        self.active_children > 0
    }

    /// Number of direct children that count as active.
    pub fn active_children_count(&self) -> usize {
        self.active_children
    }

    /// Whether this link contributes to its parent's active child count,
    /// through its own flag or through an active descendant.
    pub fn counts_as_active(&self) -> bool {
        self.is_active || self.active_children > 0
    }

    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    pub fn children(&self) -> &[Index] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Arena-based forest of navigation links.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Links are inserted detached and wired into hierarchies explicitly, so one
/// tree can hold several independent menus.
///
/// Each node tracks how many of its direct children count as active. The
/// count is maintained incrementally: toggling a flag or moving a subtree
/// walks the ancestor chain in O(depth) and stops at the first ancestor
/// whose aggregate state did not change.
#[derive(Debug)]
pub struct LinkTree {
    /// Arena storage for all link nodes
    arena: Arena<LinkNode>,
}

impl Default for LinkTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains(&self, idx: Index) -> bool {
        self.arena.contains(idx)
    }

    /// Inserts a new detached link and returns its handle.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_link(&mut self, data: LinkData) -> Index {
        self.arena.insert(LinkNode::new(data))
    }

    /// Inserts a new link directly under `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_child(&mut self, parent: Index, data: LinkData) -> LinkResult<Index> {
        if !self.contains(parent) {
            return Err(LinkError::NotFound(parent));
        }
        let child = self.insert_link(data);
        self.add_child(parent, child)?;
        Ok(child)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&LinkNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut LinkNode> {
        self.arena.get_mut(idx)
    }

    /// Sets the link's own active flag and updates ancestor counts.
    ///
    /// Unknown handles and redundant assignments are ignored. Only the
    /// addressed link's flag changes; ancestors are adjusted through their
    /// child counts alone.
    #[instrument(level = "trace", skip(self))]
    pub fn set_active(&mut self, idx: Index, active: bool) {
        let Some(node) = self.arena.get_mut(idx) else {
            return;
        };
        if node.is_active == active {
            return;
        }
        node.is_active = active;
        // Active children keep the aggregate up regardless of the own flag,
        // so ancestors observe no change.
        if node.active_children > 0 {
            return;
        }
        let parent = node.parent;
        if active {
            self.propagate_activation(parent);
        } else {
            self.propagate_deactivation(parent);
        }
    }

    /// Attaches the detached link `child` under `parent`.
    ///
    /// Fails without mutating anything when a handle is stale, `child`
    /// already has a parent, or the attachment would close a cycle. If the
    /// attached subtree counts as active, ancestor counts are raised as if
    /// it had just been activated in place.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent: Index, child: Index) -> LinkResult<()> {
        if !self.contains(parent) {
            return Err(LinkError::NotFound(parent));
        }
        let Some(child_node) = self.arena.get(child) else {
            return Err(LinkError::NotFound(child));
        };
        if child_node.parent.is_some() {
            return Err(LinkError::AlreadyAttached(child));
        }
        let child_counts = child_node.counts_as_active();
        if child == parent || self.is_ancestor(child, parent) {
            return Err(LinkError::CycleDetected { parent, child });
        }

        if let Some(node) = self.arena.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.arena.get_mut(parent) {
            node.children.push(child);
        }
        if child_counts {
            self.propagate_activation(Some(parent));
        }
        Ok(())
    }

    /// Detaches `child` from `parent`, keeping both subtrees intact.
    ///
    /// Returns false when `child` is not a current child of `parent`. If the
    /// detached subtree counted as active, ancestor counts drop by exactly
    /// one; the subtree keeps its internal flags and counts. Arena slots of
    /// detached links stay allocated until the tree drops.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_child(&mut self, parent: Index, child: Index) -> bool {
        let Some(parent_node) = self.arena.get_mut(parent) else {
            return false;
        };
        let Some(pos) = parent_node.children.iter().position(|&c| c == child) else {
            return false;
        };
        parent_node.children.remove(pos);

        let mut child_counted = false;
        if let Some(child_node) = self.arena.get_mut(child) {
            child_counted = child_node.counts_as_active();
            child_node.parent = None;
        }
        if child_counted {
            self.propagate_deactivation(Some(parent));
        }
        true
    }

    /// Replaces the children of `parent` with `children`, in order.
    ///
    /// Links already under `parent` may appear in the new list and are
    /// kept. The whole list is validated before any detachment happens, so
    /// a failed call leaves the tree untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn set_children(&mut self, parent: Index, children: &[Index]) -> LinkResult<()> {
        if !self.contains(parent) {
            return Err(LinkError::NotFound(parent));
        }
        for &child in children {
            let Some(child_node) = self.arena.get(child) else {
                return Err(LinkError::NotFound(child));
            };
            if let Some(current) = child_node.parent {
                if current != parent {
                    return Err(LinkError::AlreadyAttached(child));
                }
            }
            if child == parent || self.is_ancestor(child, parent) {
                return Err(LinkError::CycleDetected { parent, child });
            }
        }
        if let Some(&duplicate) = children.iter().duplicates().next() {
            return Err(LinkError::AlreadyAttached(duplicate));
        }

        let current = self
            .arena
            .get(parent)
            .map(|node| node.children.clone())
            .unwrap_or_default();
        for child in current {
            self.remove_child(parent, child);
        }
        for &child in children {
            self.add_child(parent, child)?;
        }
        Ok(())
    }

    /// Whether `candidate` appears on the parent chain above `node`.
    fn is_ancestor(&self, candidate: Index, node: Index) -> bool {
        let mut cursor = self.arena.get(node).and_then(|n| n.parent);
        while let Some(idx) = cursor {
            if idx == candidate {
                return true;
            }
            cursor = self.arena.get(idx).and_then(|n| n.parent);
        }
        false
    }

    /// Raises active child counts up the parent chain after one child
    /// started counting as active.
    ///
    /// Stops at the first ancestor that already counted as active, since
    /// its own contribution upwards did not change.
    fn propagate_activation(&mut self, start: Option<Index>) {
        let mut cursor = start;
        while let Some(idx) = cursor {
            let Some(node) = self.arena.get_mut(idx) else {
                break;
            };
            let was_counted = node.counts_as_active();
            node.active_children += 1;
            if was_counted {
                break;
            }
            cursor = node.parent;
        }
    }

    /// Lowers active child counts up the parent chain after one child
    /// stopped counting as active.
    ///
    /// Stops at the first ancestor that still counts as active through its
    /// own flag or a remaining active child.
    fn propagate_deactivation(&mut self, start: Option<Index>) {
        let mut cursor = start;
        while let Some(idx) = cursor {
            let Some(node) = self.arena.get_mut(idx) else {
                break;
            };
            debug_assert!(node.active_children > 0, "active child count underflow");
            node.active_children = node.active_children.saturating_sub(1);
            if node.counts_as_active() {
                break;
            }
            cursor = node.parent;
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_from(&self, start: Index) -> LinkIterator {
        LinkIterator::new(self, start)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder_from(&self, start: Index) -> PostOrderIterator {
        PostOrderIterator::new(self, start)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self, root: Index) -> usize {
        if self.contains(root) {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Walks the chain of active links from `root` downwards.
    ///
    /// Follows the first child in insertion order that counts as active at
    /// each level. Empty when `root` itself does not count as active. This
    /// is the breadcrumb path of a rendered menu.
    #[instrument(level = "debug", skip(self))]
    pub fn active_trail(&self, root: Index) -> Vec<Index> {
        let mut trail = Vec::new();
        let mut cursor = Some(root);
        while let Some(idx) = cursor {
            let Some(node) = self.get_node(idx) else {
                break;
            };
            if !node.counts_as_active() {
                break;
            }
            trail.push(idx);
            cursor = node.children.iter().copied().find(|&child| {
                self.get_node(child)
                    .map(|n| n.counts_as_active())
                    .unwrap_or(false)
            });
        }
        trail
    }
}

pub struct LinkIterator<'a> {
    tree: &'a LinkTree,
    stack: Vec<Index>,
}

impl<'a> LinkIterator<'a> {
    #[instrument(level = "trace")]
    fn new(tree: &'a LinkTree, start: Index) -> Self {
        let mut stack = Vec::new();
        if tree.contains(start) {
            stack.push(start);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for LinkIterator<'a> {
    type Item = (Index, &'a LinkNode);

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a LinkTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    #[instrument(level = "trace")]
    fn new(tree: &'a LinkTree, start: Index) -> Self {
        let mut stack = Vec::new();
        if tree.contains(start) {
            stack.push((start, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a LinkNode);

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
