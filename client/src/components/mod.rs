//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from props and keep only their own local state.

pub mod menu_tree;
