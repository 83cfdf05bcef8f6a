//! Refresh-cycle bookkeeping: generation tagging, one-shot fetch guards,
//! and the write-then-resync settlement policy.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::core::AppNotification;

/// Monotonic generation counter for table refresh cycles.
///
/// Every refresh begins a new cycle and hands out a [`CycleToken`]. A
/// continuation spawned during cycle N checks `is_current` before applying
/// its result; anything resolving after a newer cycle started becomes a
/// no-op instead of a write into rebuilt state.
#[derive(Clone, Debug, Default)]
pub struct RefreshCycle {
    current: Arc<AtomicU64>,
}

/// Token identifying one refresh cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleToken(u64);

impl RefreshCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, invalidating every outstanding token.
    pub fn begin(&self) -> CycleToken {
        CycleToken(self.current.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether `token` still names the live cycle.
    pub fn is_current(&self, token: CycleToken) -> bool {
        self.current.load(Ordering::Relaxed) == token.0
    }
}

/// One-shot guard coalescing concurrent first callers to a single request.
///
/// The identity fetch is issued at most once per page lifetime: the caller
/// that wins `begin()` starts the request, every other caller shares its
/// eventual result through the reactive state it resolves into.
#[derive(Clone, Debug, Default)]
pub struct FetchOnce {
    started: Arc<AtomicBool>,
}

impl FetchOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly once across all clones.
    pub fn begin(&self) -> bool {
        !self.started.swap(true, Ordering::AcqRel)
    }

    /// Whether the request has already been started (pending or resolved).
    pub fn started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }
}

/// Settle a finished mutation: exactly one full table resync on success,
/// exactly one failure notification and no resync on failure. The table is
/// never mutated optimistically, so the failure path has nothing to roll
/// back.
pub fn settle_mutation<E: std::fmt::Display>(
    action: &'static str,
    success_message: Option<String>,
    result: Result<(), E>,
    refresh: impl FnOnce(),
    notify: impl FnOnce(AppNotification),
) {
    match result {
        Ok(()) => {
            if let Some(message) = success_message {
                notify(AppNotification::success(action, message));
            }
            refresh();
        }
        Err(err) => notify(AppNotification::error(action, err.to_string())),
    }
}
