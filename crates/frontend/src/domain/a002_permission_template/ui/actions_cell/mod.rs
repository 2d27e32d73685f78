//! Actions dropdown of a permission template row
//!
//! - menu.rs: menu entries derived from the template, set-default command
//! - view.rs: Leptos component

mod menu;
mod view;

pub use menu::{
    available_qualifiers, menu_entries, set_default, EntryLabel, MenuEntry, SetDefaultLabel,
};
pub use view::TemplateActionsMenu;
