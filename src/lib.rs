//! Navigation menus as link trees.
//!
//! Links live in an arena-backed [`LinkTree`] and carry an own active flag
//! plus a maintained count of active direct children. Toggling a link or
//! moving a subtree updates the ancestor chain incrementally, so menu
//! highlighting costs O(depth) per change instead of a full-tree sweep.
//!
//! A link's own flag and the state of its descendants stay separate:
//! [`LinkNode::is_active`] answers "is this the current page", while
//! [`LinkNode::has_active_children`] answers "does the current page live
//! somewhere below". Menus that highlight open branches read both.
//!
//! ```
//! use rsnav::{LinkData, LinkTree};
//!
//! let mut tree = LinkTree::new();
//! let products = tree.insert_link(LinkData::new("Products").with_href("/products"));
//! let laptops = tree.insert_child(products, LinkData::new("Laptops"))?;
//!
//! tree.set_active(laptops, true);
//!
//! let node = tree.get_node(products).unwrap();
//! assert!(!node.is_active());
//! assert!(node.has_active_children());
//! assert_eq!(node.active_children_count(), 1);
//! # Ok::<(), rsnav::LinkError>(())
//! ```

pub mod arena;
pub mod display;
pub mod errors;
pub mod link;
pub mod navigation;
pub mod title;
pub mod util;

pub use arena::{LinkIterator, LinkNode, LinkTree, PostOrderIterator};
pub use display::ToTreeString;
pub use errors::{LinkError, LinkResult};
pub use link::{LinkData, Target};
pub use navigation::Navigation;
pub use title::Title;

pub use generational_arena::Index;
