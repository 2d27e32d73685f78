//! Common types shared by several aggregates

pub mod qualifier;

pub use qualifier::Qualifier;
