pub mod deprecated_rules;
pub mod list;
pub mod profile_date;
