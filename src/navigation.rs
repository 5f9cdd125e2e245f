use generational_arena::Index;
use tracing::instrument;

use crate::arena::LinkTree;
use crate::title::Title;

/// A navigation menu.
///
/// Owns a [`LinkTree`] plus the ordered list of top-level links rendered at
/// the menu root, and an optional menu title. Top-level links are detached
/// roots inside the tree; their subtrees hang below them.
#[derive(Debug)]
pub struct Navigation {
    /// Menu title, shown above the rendered links
    title: Option<Title>,
    /// Storage for all links of this menu
    tree: LinkTree,
    /// Top-level links in render order
    links: Vec<Index>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            title: None,
            tree: LinkTree::new(),
            links: Vec::new(),
        }
    }

    pub fn with_title(title: impl Into<Title>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::new()
        }
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    pub fn set_title(&mut self, title: impl Into<Title>) {
        self.title = Some(title.into());
    }

    pub fn clear_title(&mut self) {
        self.title = None;
    }

    pub fn tree(&self) -> &LinkTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut LinkTree {
        &mut self.tree
    }

    /// Top-level links in render order.
    pub fn links(&self) -> &[Index] {
        &self.links
    }

    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }

    /// Appends a link to the top level of the menu.
    #[instrument(level = "trace", skip(self))]
    pub fn add_link(&mut self, link: Index) {
        self.links.push(link);
    }

    /// Removes the first top-level occurrence of `link`.
    ///
    /// Returns false when the link is not at the top level. The link and
    /// its subtree stay in the tree.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_link(&mut self, link: Index) -> bool {
        let Some(pos) = self.links.iter().position(|&l| l == link) else {
            return false;
        };
        self.links.remove(pos);
        true
    }

    /// Replaces the top-level links wholesale.
    #[instrument(level = "trace", skip(self))]
    pub fn set_links(&mut self, links: Vec<Index>) {
        self.links = links;
    }
}
