// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-call context for a serialization run.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Cancellation and deadline settings for one call.
///
/// The walker checks the context before visiting each node, so a cancelled or
/// expired call stops at the next node instead of running to completion.
#[derive(Debug, Clone, Default)]
pub struct SerializeContext {
    deadline: Option<Instant>,
    cancelled: Option<Arc<AtomicBool>>,
}

impl SerializeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Stop the walk once `flag` is set to `true`.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancelled = Some(flag);
        self
    }

    /// Reason the call must stop, if any.
    pub(crate) fn interrupted(&self) -> Option<&'static str> {
        if self
            .cancelled
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return Some("cancelled");
        }
        if self
            .deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
        {
            return Some("deadline exceeded");
        }
        None
    }
}
