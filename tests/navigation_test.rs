//! Tests for Navigation menus and their terminal rendering

use std::fmt;

use rsnav::errors::LinkResult;
use rsnav::util::testing;
use rsnav::{LinkData, Navigation, Title, ToTreeString};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Stand-in for a message resolved against a translation catalogue.
struct CatalogueMessage {
    key: &'static str,
    locale: &'static str,
}

impl fmt::Display for CatalogueMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.locale, self.key) {
            ("de", "menu.main") => f.write_str("Hauptmenü"),
            (_, key) => f.write_str(key),
        }
    }
}

// ============================================================
// Title Tests
// ============================================================

#[test]
fn given_title_when_set_and_cleared_then_reflected() {
    let mut nav = Navigation::with_title("Main menu");
    assert_eq!(nav.title().map(Title::to_string).as_deref(), Some("Main menu"));

    nav.set_title("Sidebar");
    assert_eq!(nav.title().map(Title::to_string).as_deref(), Some("Sidebar"));

    nav.clear_title();
    assert!(nav.title().is_none());
}

#[test]
fn given_lazy_title_when_displayed_then_resolved_at_render_time() {
    let mut nav = Navigation::new();
    nav.set_title(Title::lazy(CatalogueMessage {
        key: "menu.main",
        locale: "de",
    }));

    assert_eq!(nav.title().map(Title::to_string).as_deref(), Some("Hauptmenü"));
}

// ============================================================
// Top-Level Link Tests
// ============================================================

#[test]
fn given_links_when_added_then_kept_in_order() {
    let mut nav = Navigation::new();
    assert!(!nav.has_links());

    let home = nav.tree_mut().insert_link(LinkData::new("Home").with_href("/"));
    let shop = nav.tree_mut().insert_link(LinkData::new("Shop").with_href("/shop"));
    let about = nav.tree_mut().insert_link(LinkData::new("About").with_href("/about"));

    nav.add_link(home);
    nav.add_link(shop);
    nav.add_link(about);

    assert!(nav.has_links());
    assert_eq!(nav.links(), &[home, shop, about]);
}

#[test]
fn given_links_when_removed_then_order_of_rest_survives() {
    let mut nav = Navigation::new();
    let home = nav.tree_mut().insert_link(LinkData::new("Home"));
    let shop = nav.tree_mut().insert_link(LinkData::new("Shop"));
    let about = nav.tree_mut().insert_link(LinkData::new("About"));
    nav.set_links(vec![home, shop, about]);

    assert!(nav.remove_link(shop));
    assert_eq!(nav.links(), &[home, about]);

    // Gone from the top level, but still a valid link in the tree.
    assert!(!nav.remove_link(shop));
    assert!(nav.tree().contains(shop));
}

#[test]
fn given_new_link_list_when_set_then_replaces_wholesale() {
    let mut nav = Navigation::new();
    let a = nav.tree_mut().insert_link(LinkData::new("a"));
    let b = nav.tree_mut().insert_link(LinkData::new("b"));
    nav.set_links(vec![a]);

    nav.set_links(vec![b, a]);

    assert_eq!(nav.links(), &[b, a]);
}

// ============================================================
// Rendering Tests
// ============================================================

#[test]
fn given_menu_with_active_leaf_when_rendered_then_trail_is_marked() -> LinkResult<()> {
    // Arrange
    let mut nav = Navigation::with_title("Webshop");
    let products = nav
        .tree_mut()
        .insert_link(LinkData::new("Products").with_href("/products"));
    let laptops = nav
        .tree_mut()
        .insert_child(products, LinkData::new("Laptops"))?;
    let about = nav.tree_mut().insert_link(LinkData::new("About").with_href("/about"));
    nav.add_link(products);
    nav.add_link(about);

    // Act
    nav.tree_mut().set_active(laptops, true);
    let rendered = nav.to_tree_string().to_string();

    // Assert
    assert!(rendered.starts_with("Webshop"));
    assert!(rendered.contains("Products (trail)"));
    assert!(rendered.contains("Laptops (active)"));
    assert!(rendered.contains("About"));
    assert!(!rendered.contains("About (trail)"));

    // The own flag wins over the trail marker.
    nav.tree_mut().set_active(products, true);
    let rendered = nav.to_tree_string().to_string();
    assert!(rendered.contains("Products (active)"));
    Ok(())
}

#[test]
fn given_untitled_menu_when_rendered_then_generic_root_label() {
    let nav = Navigation::default();
    let rendered = nav.to_tree_string().to_string();
    assert!(rendered.starts_with("navigation"));
}
