//! The index cursor: one selected position within the result list.

use keyseq::Anchor;

/// Current selection within the result list. `None` until the first
/// movement on a page.
///
/// A set position is only meaningful relative to the list it was computed
/// against; after a rebuild it may be out of bounds. That is fine: every
/// operation here clamps against the length passed in at call time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pos: Option<usize>,
}

impl Cursor {
    /// The current position, if any.
    pub fn position(&self) -> Option<usize> {
        self.pos
    }

    /// Move by `step` (±1) repeated `count` times, clamped to
    /// `[0, len-1]`. Returns the new position when it actually changed;
    /// `None` for an empty list or a clamped-in-place move.
    pub fn move_by(&mut self, step: i64, count: u32, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let current = self.pos.map_or(-1, |p| p as i64);
        let target = (current + step * i64::from(count)).clamp(0, len as i64 - 1) as usize;
        self.set(target)
    }

    /// Jump to an absolute position. With a count the target is the
    /// count-th result for either anchor (the anchors differ only in
    /// their no-count default). Returns the new position when changed.
    pub fn jump(&mut self, anchor: Anchor, count: Option<u32>, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let target = match count {
            Some(n) => (n.saturating_sub(1) as usize).min(len - 1),
            None => match anchor {
                Anchor::Start => 0,
                Anchor::End => len - 1,
            },
        };
        self.set(target)
    }

    fn set(&mut self, target: usize) -> Option<usize> {
        if self.pos == Some(target) {
            return None;
        }
        self.pos = Some(target);
        Some(target)
    }
}
