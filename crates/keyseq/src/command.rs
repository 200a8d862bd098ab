//! Resolved commands and the per-keystroke outcome.

/// Which end of the result list an absolute jump defaults to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `gg`: first result when no count is given.
    Start,
    /// `G`: last result when no count is given.
    End,
}

/// A fully resolved navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor by `step` (±1), repeated `count` times.
    Move {
        /// Direction of travel: +1 for next, -1 for previous.
        step: i64,
        /// Repeat count; 1 when no prefix was typed.
        count: u32,
    },
    /// Jump to an absolute position. With a count, the target is the
    /// count-th result (1-indexed, clamped) for either anchor; without,
    /// the anchor's own end of the list.
    Jump {
        /// Default target when no count is given.
        anchor: Anchor,
        /// Explicit 1-indexed target, if a count was typed.
        count: Option<u32>,
    },
    /// Open the current result in this browsing context.
    Activate,
    /// Open the current result in a new browsing context.
    ActivateNewContext,
    /// Follow the site's next-page control.
    PageNext,
    /// Follow the site's previous-page control.
    PagePrev,
    /// Copy the current result's URL to the clipboard.
    CopyReference,
    /// Show or hide the help overlay.
    ToggleHelp,
    /// Escape: close the help overlay. Pending interpreter state is
    /// already cleared by the time this is emitted.
    Dismiss,
}

/// What the interpreter decided about one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Resolved to a command; the keystroke is consumed.
    Dispatch(Command),
    /// Consumed as part of an in-progress sequence (digit or chord
    /// opener); no command yet.
    Buffered,
    /// Resolved to a command, but the event must still reach the page.
    DispatchAndForward(Command),
    /// Not ours; the page receives the keystroke unmodified.
    Forward,
}

impl KeyOutcome {
    /// True when the keystroke should be withheld from the page.
    pub fn consumed(&self) -> bool {
        matches!(self, Self::Dispatch(_) | Self::Buffered)
    }

    /// The resolved command, if any.
    pub fn command(&self) -> Option<Command> {
        match self {
            Self::Dispatch(cmd) | Self::DispatchAndForward(cmd) => Some(*cmd),
            Self::Buffered | Self::Forward => None,
        }
    }
}
