//! Interpreter state: pending count, pending chord, and key resolution.

use std::time::Instant;

use config::Timeouts;
use tracing::trace;

use crate::{Anchor, Command, KeyInput, KeyOutcome};

/// Numeric prefix under accumulation, with its own expiry deadline.
#[derive(Debug, Clone, Copy)]
struct PendingCount {
    value: u32,
    deadline: Instant,
}

impl PendingCount {
    /// Append one digit, saturating rather than wrapping on absurd input.
    fn push(&mut self, digit: u32) {
        self.value = self.value.saturating_mul(10).saturating_add(digit);
    }
}

/// Keys that open a two-key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChordLead {
    /// `g`, completed by a second `g`.
    G,
}

/// An open chord waiting for its completing key, with its own deadline.
///
/// The count is captured when the chord opens, so "5g" then "g" jumps to
/// the fifth result even if the count window lapses in between.
#[derive(Debug, Clone, Copy)]
struct PendingChord {
    leading: ChordLead,
    captured_count: Option<u32>,
    deadline: Instant,
}

/// The keystroke-sequence interpreter.
///
/// Feed it one keydown at a time via [`State::handle_key`]; it resolves
/// each to a [`KeyOutcome`]. Expiry of the two pending records is applied
/// at the top of every call against the caller-supplied instant, so the
/// machine is fully deterministic under test.
#[derive(Debug)]
pub struct State {
    timeouts: Timeouts,
    count: Option<PendingCount>,
    chord: Option<PendingChord>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Timeouts::default())
    }
}

impl State {
    /// Create an interpreter with the given expiry windows.
    pub fn new(timeouts: Timeouts) -> Self {
        Self {
            timeouts,
            count: None,
            chord: None,
        }
    }

    /// Process one keydown at instant `now`.
    pub fn handle_key(&mut self, key: &KeyInput, now: Instant) -> KeyOutcome {
        // Bare modifier keydowns are invisible to sequence state.
        if key.is_pure_modifier() {
            return KeyOutcome::Forward;
        }

        self.expire(now);

        // Digits only ever touch the count record and its deadline.
        if let Some(digit) = key.digit() {
            let deadline = now + self.timeouts.count();
            match &mut self.count {
                Some(pending) => {
                    pending.push(digit);
                    pending.deadline = deadline;
                }
                None => {
                    self.count = Some(PendingCount {
                        value: digit,
                        deadline,
                    });
                }
            }
            trace!(count = self.count.map(|c| c.value), "digit buffered");
            return KeyOutcome::Buffered;
        }

        // The count is consumed exactly once, by the first non-digit key.
        let (count, has_explicit_count) = match self.count.take() {
            Some(pending) => (pending.value, true),
            None => (1, false),
        };

        if let Some(chord) = self.chord.take() {
            if chord.leading == ChordLead::G && key.ident() == "g" {
                // Resolution uses the count captured at chord start; a
                // count typed mid-chord is discarded with the consumption
                // above.
                let cmd = Command::Jump {
                    anchor: Anchor::Start,
                    count: chord.captured_count,
                };
                trace!(?cmd, "chord completed");
                return KeyOutcome::Dispatch(cmd);
            }
            // Abandoned: the second key is evaluated on its own merits
            // with the freshly consumed count.
            trace!(key = %key, "chord abandoned");
        }

        match key.ident() {
            "j" => KeyOutcome::Dispatch(Command::Move { step: 1, count }),
            "k" => KeyOutcome::Dispatch(Command::Move { step: -1, count }),
            "G" => KeyOutcome::Dispatch(Command::Jump {
                anchor: Anchor::End,
                count: has_explicit_count.then_some(count),
            }),
            "Enter" | "o" => KeyOutcome::Dispatch(Command::Activate),
            "O" => KeyOutcome::Dispatch(Command::ActivateNewContext),
            "H" => KeyOutcome::Dispatch(Command::PagePrev),
            "L" => KeyOutcome::Dispatch(Command::PageNext),
            "y" => KeyOutcome::Dispatch(Command::CopyReference),
            "?" => KeyOutcome::Dispatch(Command::ToggleHelp),
            "g" => {
                self.chord = Some(PendingChord {
                    leading: ChordLead::G,
                    captured_count: has_explicit_count.then_some(count),
                    deadline: now + self.timeouts.chord(),
                });
                trace!(captured = ?has_explicit_count.then_some(count), "chord opened");
                KeyOutcome::Buffered
            }
            // Escape propagates so the page sees it too; pending state is
            // already cleared by the consumption paths above.
            "Escape" => KeyOutcome::DispatchAndForward(Command::Dismiss),
            _ => KeyOutcome::Forward,
        }
    }

    /// Drop pending records whose deadline has passed. Expiry is silent:
    /// no command, no side effect.
    fn expire(&mut self, now: Instant) {
        if self.count.is_some_and(|c| now >= c.deadline) {
            trace!("count expired");
            self.count = None;
        }
        if self.chord.is_some_and(|c| now >= c.deadline) {
            trace!("chord expired");
            self.chord = None;
        }
    }

    /// The accumulated count, if one is pending.
    pub fn pending_count(&self) -> Option<u32> {
        self.count.map(|c| c.value)
    }

    /// True when a chord is open and waiting for its second key.
    pub fn chord_open(&self) -> bool {
        self.chord.is_some()
    }

    /// Short display form of the pending sequence ("5", "g", "5g"), for
    /// status surfaces and diagnostics.
    pub fn pending_display(&self) -> String {
        let mut out = String::new();
        if let Some(chord) = &self.chord {
            if let Some(n) = chord.captured_count {
                out.push_str(&n.to_string());
            }
            match chord.leading {
                ChordLead::G => out.push('g'),
            }
        } else if let Some(count) = &self.count {
            out.push_str(&count.value.to_string());
        }
        out
    }
}
