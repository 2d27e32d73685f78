//! Component lifecycle helpers

use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation flag shared between a component and the async work it spawned.
///
/// In-flight requests cannot be aborted, so results are checked against the
/// flag before they touch component state.
#[derive(Debug, Clone)]
pub struct ActiveFlag(Arc<AtomicBool>);

impl ActiveFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn deactivate(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for ActiveFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Flag that turns inactive when the current reactive owner is cleaned up
pub fn use_active_flag() -> ActiveFlag {
    let flag = ActiveFlag::new();
    let on_unmount = flag.clone();
    on_cleanup(move || on_unmount.deactivate());
    flag
}
