use generational_arena::Index;
use termtree::Tree;

use crate::arena::LinkTree;
use crate::navigation::Navigation;

/// Conversion into a printable tree for terminal display.
pub trait ToTreeString {
    fn to_tree_string(&self) -> Tree<String>;
}

impl ToTreeString for Navigation {
    fn to_tree_string(&self) -> Tree<String> {
        let label = self
            .title()
            .map(|title| title.to_string())
            .unwrap_or_else(|| "navigation".to_string());
        let mut tree = Tree::new(label);
        for &link in self.links() {
            tree.push(subtree(self.tree(), link));
        }
        tree
    }
}

/// Renders the subtree rooted at `root`, marking active links.
///
/// A link's own flag renders as `(active)`, a link that is only on the
/// path to an active descendant as `(trail)`.
pub fn subtree(tree: &LinkTree, root: Index) -> Tree<String> {
    fn build(tree: &LinkTree, idx: Index) -> Tree<String> {
        let mut out = Tree::new(label(tree, idx));
        if let Some(node) = tree.get_node(idx) {
            for &child in node.children() {
                out.push(build(tree, child));
            }
        }
        out
    }
    build(tree, root)
}

fn label(tree: &LinkTree, idx: Index) -> String {
    match tree.get_node(idx) {
        Some(node) if node.is_active() => format!("{} (active)", node.data),
        Some(node) if node.has_active_children() => format!("{} (trail)", node.data),
        Some(node) => node.data.to_string(),
        None => "missing link".to_string(),
    }
}
