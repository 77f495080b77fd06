//! One-time installation latch for the native input interception hook.
//!
//! Installing the hook (a low-level mouse hook on Windows, global event
//! monitors on macOS) rewires process-wide dispatch and must happen at most
//! once. The latch serialises concurrent install attempts and keeps the
//! hook installed for the remaining process lifetime; `Visualizer::stop`
//! only disables handling, it never uninstalls.

use std::sync::atomic::{AtomicU8, Ordering};

const STATE_NONE: u8 = 0;
const STATE_INSTALLING: u8 = 1;
const STATE_INSTALLED: u8 = 2;

/// Outcome of an [`EventTap::install`] attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapStatus {
    /// This call performed the installation.
    Installed,
    /// A previous call already installed the hook; nothing was done.
    AlreadyInstalled,
    /// The platform refused the hook. The latch was not set and a later
    /// call may retry.
    Unavailable,
}

/// Idempotent install latch for the process-wide input hook.
pub struct EventTap {
    state: AtomicU8,
}

impl EventTap {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(STATE_NONE),
        }
    }

    /// Runs `register` at most once per process. `register` performs the
    /// actual platform hook registration and reports success.
    pub fn install(&self, register: impl FnOnce() -> bool) -> TapStatus {
        match self.state.compare_exchange(
            STATE_NONE,
            STATE_INSTALLING,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => {
                if register() {
                    self.state.store(STATE_INSTALLED, Ordering::Release);
                    TapStatus::Installed
                } else {
                    // Leave the latch open so a later attempt can retry.
                    self.state.store(STATE_NONE, Ordering::Release);
                    TapStatus::Unavailable
                }
            }
            Err(_) => TapStatus::AlreadyInstalled,
        }
    }

    pub fn is_installed(&self) -> bool {
        self.state.load(Ordering::Acquire) == STATE_INSTALLED
    }
}

impl Default for EventTap {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide latch used by the platform backends.
pub static TAP: EventTap = EventTap::new();
