// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Destination for user-visible error messages.
//!
//! The error display belongs to whoever hosts the form. The controller only
//! writes to it.

use std::sync::{Arc, RwLock};

/// Receives error messages meant for the user
pub trait ErrorSink: Send + Sync {
    fn set_error_msg(&self, message: String);
}

impl<F> ErrorSink for F
where
    F: Fn(String) + Send + Sync,
{
    fn set_error_msg(&self, message: String) {
        self(message)
    }
}

/// Error slot shared between the form and its host.
///
/// Clones point at the same slot; the most recent write wins.
#[derive(Debug, Clone, Default)]
pub struct SharedErrorSlot {
    inner: Arc<RwLock<Option<String>>>,
}

impl SharedErrorSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last message written, if any
    pub fn get(&self) -> Option<String> {
        self.inner.read().map(|slot| slot.clone()).unwrap_or(None)
    }

    /// Remove the current message and return it
    pub fn take(&self) -> Option<String> {
        self.inner.write().ok().and_then(|mut slot| slot.take())
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = None;
        }
    }
}

impl ErrorSink for SharedErrorSlot {
    fn set_error_msg(&self, message: String) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(message);
        }
    }
}
