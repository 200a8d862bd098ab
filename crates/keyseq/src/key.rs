//! Keydown identifiers as delivered by the host page.

use std::fmt;

/// A single keydown, identified by its DOM `KeyboardEvent.key` value.
///
/// Printable keys arrive as themselves ("j", "G", "?"), named keys by
/// their standard names ("Enter", "Escape"). Case is significant: "g" and
/// "G" are distinct inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyInput {
    ident: String,
}

impl KeyInput {
    /// Wrap a raw `KeyboardEvent.key` identifier.
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
        }
    }

    /// The raw identifier.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The digit value, for "0" through "9".
    pub fn digit(&self) -> Option<u32> {
        let mut chars = self.ident.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10),
            _ => None,
        }
    }

    /// True for keydowns of a bare modifier key. These never form part of
    /// a sequence; "G" arrives as its own keydown with Shift already held.
    pub fn is_pure_modifier(&self) -> bool {
        matches!(self.ident.as_str(), "Shift" | "Control" | "Alt" | "Meta")
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ident)
    }
}

impl From<&str> for KeyInput {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
