//! Quality profiles panel of the project overview
//!
//! - model.rs: deprecated rule counts loading and row derivation
//! - view.rs: Leptos component

mod model;
mod view;

pub use model::{
    load_deprecated_counts, profile_rows, refresh_deprecated_counts, DeprecatedCounts,
    DeprecatedWarning, ProfileRow,
};
pub use view::ProfileListPanel;
