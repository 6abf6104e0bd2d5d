//! Client-side interaction script.
//!
//! Embedded at compile time using `include_str!`. Markup opts in through
//! these attributes, all resolved relative to a `data-component` root:
//!
//! - `data-dropdown` wrapping `data-dropdown-toggle` and `data-dropdown-menu`
//! - `data-password-field` wrapping `data-password-input`,
//!   `data-password-toggle` and `data-password-icon`
//! - `data-slideover="name"` containing `data-slideover-backdrop` and
//!   `data-slideover-close`, opened by `data-slideover-open="name"`
//! - `data-dismiss` removing its enclosing `data-dismissable` block
//!
//! Menus and slide-overs start with the `hidden` class.

pub const INTERACTION_SCRIPT: &str = include_str!("assets/interactions.js");

pub fn render_script_tag() -> String {
    format!("<script>{}</script>", INTERACTION_SCRIPT)
}
