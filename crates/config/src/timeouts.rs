//! Expiry windows for pending interpreter state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default window for an accumulated numeric prefix.
pub const DEFAULT_COUNT_MS: u64 = 1000;
/// Default window for an open two-key chord.
pub const DEFAULT_CHORD_MS: u64 = 500;

/// Expiry windows for the interpreter's two pending records.
///
/// The windows are independent: a digit restarts only the count window and
/// a chord opener starts only the chord window. A user may type a count,
/// pause briefly, and still have it apply to a chord typed before the
/// longer count window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Timeouts {
    /// Milliseconds an accumulated count stays valid after the last digit.
    pub count_ms: u64,
    /// Milliseconds a pending chord waits for its completing key.
    pub chord_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            count_ms: DEFAULT_COUNT_MS,
            chord_ms: DEFAULT_CHORD_MS,
        }
    }
}

impl Timeouts {
    /// Count window as a [`Duration`].
    pub fn count(&self) -> Duration {
        Duration::from_millis(self.count_ms)
    }

    /// Chord window as a [`Duration`].
    pub fn chord(&self) -> Duration {
        Duration::from_millis(self.chord_ms)
    }
}
