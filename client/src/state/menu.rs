//! Navigation menu presentation state.
//!
//! DESIGN
//! ======
//! Each rendered menu item owns one `MenuItemState`; nothing is shared between
//! items, so toggling one node never touches a sibling or descendant. The
//! state is rebuilt (collapsed) whenever the item is recreated.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::net::types::MenuNode;

/// Shown in the sidebar while the menu is loading or empty.
pub const EMPTY_MENU_MESSAGE: &str = "No menu available";
/// Notice shown when the menu fetch fails.
pub const MENU_FETCH_FAILED_NOTICE: &str = "Failed to fetch menus";

/// Expand/collapse state for one rendered menu node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuItemState {
    has_children: bool,
    expanded: bool,
}

impl MenuItemState {
    pub fn for_node(node: &MenuNode) -> Self {
        Self { has_children: node.has_children(), expanded: false }
    }

    /// Flip expansion. Leaves stay collapsed.
    pub fn toggle(&mut self) {
        if self.has_children {
            self.expanded = !self.expanded;
        }
    }

    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    /// Leaves get no toggle affordance.
    pub fn shows_toggle(self) -> bool {
        self.has_children
    }

    pub fn shows_children(self) -> bool {
        self.has_children && self.expanded
    }

    pub fn badge(self) -> Option<&'static str> {
        if !self.has_children {
            None
        } else if self.expanded {
            Some("-")
        } else {
            Some("+")
        }
    }
}

/// What the dashboard sidebar renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuPanel {
    Empty,
    Tree(Vec<MenuNode>),
}

/// `None` means the fetch has not completed (or failed).
pub fn menu_panel(menus: Option<Vec<MenuNode>>) -> MenuPanel {
    match menus {
        Some(items) if !items.is_empty() => MenuPanel::Tree(items),
        _ => MenuPanel::Empty,
    }
}
