//! Modal keystroke-sequence interpreter.
//!
//! Turns a raw stream of keydown identifiers into discrete [`Command`]s,
//! honoring numeric repeat prefixes ("5j"), the two-key `gg` chord, and
//! per-record expiry deadlines. The interpreter is a pure state machine:
//! it owns no side effects, takes the current instant as an argument, and
//! applies deadline expiry explicitly at the start of every call rather
//! than from scheduled callbacks.

mod command;
mod key;
mod state;

pub use command::{Anchor, Command, KeyOutcome};
pub use key::KeyInput;
pub use state::State;
