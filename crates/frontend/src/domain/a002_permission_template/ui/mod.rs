pub mod actions_cell;
pub mod list;
