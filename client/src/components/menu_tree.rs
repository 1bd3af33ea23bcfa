//! Recursive collapsible navigation menu.
//!
//! ARCHITECTURE
//! ============
//! `MenuTree` renders one level; every `MenuItem` owns its own expansion
//! signal and renders a nested `MenuTree`-shaped list for its children when
//! expanded. Recursion depth equals menu depth; the input is trusted to be a
//! tree.

use leptos::prelude::*;

use crate::net::types::MenuNode;
use crate::state::menu::MenuItemState;

/// One level of the navigation hierarchy.
#[component]
pub fn MenuTree(menus: Vec<MenuNode>, #[prop(optional)] nested: bool) -> AnyView {
    view! {
        <ul class="menu-tree" class:menu-tree--nested=nested>
            {menus.into_iter().map(|node| view! { <MenuItem node=node/> }).collect_view()}
        </ul>
    }
    .into_any()
}

/// A single menu entry. Parents toggle on click; leaves are inert.
#[component]
pub fn MenuItem(node: MenuNode) -> AnyView {
    let state = RwSignal::new(MenuItemState::for_node(&node));
    let has_children = node.has_children();
    let MenuNode { name, children, .. } = node;
    let children = StoredValue::new(children);

    view! {
        <li class="menu-item">
            <div
                class="menu-item__row"
                class:menu-item__row--parent=has_children
                on:click=move |_| state.update(MenuItemState::toggle)
            >
                <span class="menu-item__name">{name}</span>
                {move || {
                    state
                        .get()
                        .badge()
                        .map(|badge| view! { <span class="menu-item__badge">{badge}</span> })
                }}
            </div>
            {move || {
                state
                    .get()
                    .shows_children()
                    .then(|| view! { <MenuTree menus=children.get_value() nested=true/> })
            }}
        </li>
    }
    .into_any()
}
