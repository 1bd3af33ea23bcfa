use super::*;
use crate::net::types::Id;

fn leaf(id: i64, name: &str) -> MenuNode {
    MenuNode { id: Id::Int(id), name: name.to_owned(), children: Vec::new() }
}

fn parent(id: i64, name: &str, children: Vec<MenuNode>) -> MenuNode {
    MenuNode { id: Id::Int(id), name: name.to_owned(), children }
}

// =============================================================
// MenuItemState
// =============================================================

#[test]
fn parent_starts_collapsed_with_plus_badge() {
    let state = MenuItemState::for_node(&parent(1, "Settings", vec![leaf(2, "Users")]));
    assert!(!state.is_expanded());
    assert!(state.shows_toggle());
    assert!(!state.shows_children());
    assert_eq!(state.badge(), Some("+"));
}

#[test]
fn toggle_expands_and_collapses_parent() {
    let mut state = MenuItemState::for_node(&parent(1, "Settings", vec![leaf(2, "Users")]));
    state.toggle();
    assert!(state.shows_children());
    assert_eq!(state.badge(), Some("-"));
    state.toggle();
    assert!(!state.shows_children());
    assert_eq!(state.badge(), Some("+"));
}

#[test]
fn leaf_never_renders_toggle() {
    let mut state = MenuItemState::for_node(&leaf(3, "Home"));
    assert!(!state.shows_toggle());
    assert_eq!(state.badge(), None);
    state.toggle();
    assert!(!state.is_expanded());
    assert!(!state.shows_children());
}

#[test]
fn toggling_one_item_leaves_siblings_and_descendants_alone() {
    let child = parent(11, "Reports", vec![leaf(12, "Daily")]);
    let root = parent(10, "Admin", vec![child.clone()]);
    let sibling = parent(20, "Billing", vec![leaf(21, "Invoices")]);

    let mut root_state = MenuItemState::for_node(&root);
    let child_state = MenuItemState::for_node(&child);
    let sibling_state = MenuItemState::for_node(&sibling);

    root_state.toggle();

    assert!(root_state.is_expanded());
    assert!(!child_state.is_expanded());
    assert!(!sibling_state.is_expanded());
}

// =============================================================
// menu_panel
// =============================================================

#[test]
fn pending_fetch_shows_empty_message() {
    assert_eq!(menu_panel(None), MenuPanel::Empty);
}

#[test]
fn empty_result_shows_empty_message() {
    assert_eq!(menu_panel(Some(Vec::new())), MenuPanel::Empty);
    assert_eq!(EMPTY_MENU_MESSAGE, "No menu available");
}

#[test]
fn non_empty_result_renders_tree_in_order() {
    let items = vec![leaf(1, "Home"), parent(2, "Admin", vec![leaf(3, "Users")])];
    assert_eq!(menu_panel(Some(items.clone())), MenuPanel::Tree(items));
}
