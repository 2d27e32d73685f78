pub mod a001_quality_profile;
pub mod a002_permission_template;
