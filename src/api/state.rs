//! Application state for the payroll registry API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex};

use crate::registry::PayrollRegistry;

/// Shared application state.
///
/// The registry itself is single-threaded with no internal locking, so the
/// whole of it sits behind one coarse mutex: each request takes the lock,
/// performs exactly one registry operation, and releases it. Operations are
/// short and never block, so contention is not a concern at this scale.
#[derive(Clone, Default)]
pub struct AppState {
    registry: Arc<Mutex<PayrollRegistry>>,
}

impl AppState {
    /// Creates application state around a fresh, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates application state around an existing registry.
    pub fn with_registry(registry: PayrollRegistry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
        }
    }

    /// Locks the registry for one operation.
    ///
    /// Registry operations never panic for expected conditions, so a
    /// poisoned mutex can only follow a programmer error; the data is still
    /// consistent (failed operations never half-mutate), so the poison flag
    /// is cleared rather than propagated.
    pub fn registry(&self) -> std::sync::MutexGuard<'_, PayrollRegistry> {
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
