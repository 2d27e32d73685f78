pub mod a001_quality_profile;
pub mod a002_permission_template;
pub mod a003_rule;
pub mod common;
