//! navki engine
//!
//! The engine coordinates everything a page context owns:
//! - feeds keydowns through the [`keyseq`] interpreter
//! - dispatches resolved commands onto the cursor and the page boundaries
//! - rebuilds the result list on DOM change notifications
//! - applies the visual focus side effect
//!
//! One [`Engine`] exists per page load. It is driven externally: the
//! embedding forwards each keydown to [`Engine::dispatch_key`] and each
//! mutation batch to [`Engine::on_dom_mutation`], strictly in order. All
//! state transitions are synchronous; the only asynchronous edge is the
//! fire-and-forget clipboard write, which touches no engine state.

use std::{sync::Arc, time::Instant};

mod cursor;
mod focus;

use config::SiteProfile;
use keyseq::{Command, KeyInput, KeyOutcome};
use navki_world::Results;
use tracing::{debug, trace};
use webdom::{ClipboardOps, DomOps, LinkHandle, NavOps, VisualOps};

pub use cursor::Cursor;

/// What the embedding should do with the keydown it just forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Suppress the page's default handling.
    Consumed,
    /// Let the event reach the page unmodified.
    Propagate,
}

/// Per-page-context engine. Owns the interpreter state, the cursor, the
/// result list, and the help-overlay flag; borrows the page through the
/// boundary traits.
///
/// The copy-reference command spawns its clipboard write onto the ambient
/// Tokio runtime; everything else is runtime-free.
pub struct Engine {
    profile: SiteProfile,
    keys: keyseq::State,
    cursor: Cursor,
    results: Results,
    focus: focus::FocusRing,
    help_visible: bool,
    dom: Arc<dyn DomOps>,
    visual: Arc<dyn VisualOps>,
    nav: Arc<dyn NavOps>,
    clipboard: Arc<dyn ClipboardOps>,
}

impl Engine {
    /// Create an engine for one page load with default timing, locating
    /// the initial result list immediately.
    pub fn new(
        profile: SiteProfile,
        dom: Arc<dyn DomOps>,
        visual: Arc<dyn VisualOps>,
        nav: Arc<dyn NavOps>,
        clipboard: Arc<dyn ClipboardOps>,
    ) -> Self {
        Self::with_timeouts(
            profile,
            config::Timeouts::default(),
            dom,
            visual,
            nav,
            clipboard,
        )
    }

    /// As [`Engine::new`], with explicit interpreter expiry windows.
    pub fn with_timeouts(
        profile: SiteProfile,
        timeouts: config::Timeouts,
        dom: Arc<dyn DomOps>,
        visual: Arc<dyn VisualOps>,
        nav: Arc<dyn NavOps>,
        clipboard: Arc<dyn ClipboardOps>,
    ) -> Self {
        let mut results = Results::new();
        results.rebuild(dom.as_ref(), &profile);
        Self {
            profile,
            keys: keyseq::State::new(timeouts),
            cursor: Cursor::default(),
            results,
            focus: focus::FocusRing::default(),
            help_visible: false,
            dom,
            visual,
            nav,
            clipboard,
        }
    }

    /// Process one keydown. The embedding calls this for every keydown on
    /// the page and suppresses default handling when it returns
    /// [`Disposition::Consumed`].
    pub fn dispatch_key(&mut self, key: &KeyInput) -> Disposition {
        self.dispatch_key_at(key, Instant::now())
    }

    /// As [`Engine::dispatch_key`], with an explicit instant for
    /// deterministic timing in tests.
    pub fn dispatch_key_at(&mut self, key: &KeyInput, now: Instant) -> Disposition {
        // While an editable element has focus the page behaves
        // unmodified; the interpreter sees nothing at all.
        if self.dom.editable_focused() {
            return Disposition::Propagate;
        }

        match self.keys.handle_key(key, now) {
            KeyOutcome::Buffered => Disposition::Consumed,
            KeyOutcome::Dispatch(cmd) => {
                self.run_command(cmd);
                Disposition::Consumed
            }
            KeyOutcome::DispatchAndForward(cmd) => {
                self.run_command(cmd);
                Disposition::Propagate
            }
            KeyOutcome::Forward => Disposition::Propagate,
        }
    }

    /// Handle one DOM mutation batch: relocate results wholesale. The
    /// cursor is left numerically unchanged; Move/Jump clamp against the
    /// new length when they next run.
    pub fn on_dom_mutation(&mut self) {
        self.results.rebuild(self.dom.as_ref(), &self.profile);
    }

    fn run_command(&mut self, cmd: Command) {
        debug!(?cmd, "command");
        match cmd {
            Command::Move { step, count } => {
                let len = self.results.len();
                if let Some(pos) = self.cursor.move_by(step, count, len) {
                    self.focus_position(pos);
                }
            }
            Command::Jump { anchor, count } => {
                let len = self.results.len();
                if let Some(pos) = self.cursor.jump(anchor, count, len) {
                    self.focus_position(pos);
                }
            }
            Command::Activate => {
                if let Some(link) = self.current_link() {
                    self.nav.navigate(&link.href);
                }
            }
            Command::ActivateNewContext => {
                if let Some(link) = self.current_link() {
                    self.nav.open_new_context(&link.href);
                }
            }
            Command::PageNext => self.paginate(self.profile.next_page_query.as_deref()),
            Command::PagePrev => self.paginate(self.profile.prev_page_query.as_deref()),
            Command::CopyReference => self.copy_reference(),
            Command::ToggleHelp => {
                self.help_visible = !self.help_visible;
                self.visual.set_help_visible(self.help_visible);
            }
            Command::Dismiss => {
                if self.help_visible {
                    self.help_visible = false;
                    self.visual.set_help_visible(false);
                }
            }
        }
    }

    /// Apply the marker/scroll side effect to the element at `pos`.
    fn focus_position(&mut self, pos: usize) {
        if let Some(element) = self.results.get(pos) {
            self.focus.apply(self.visual.as_ref(), element);
        }
    }

    /// The activation link of the element under the cursor, resolved
    /// against the live DOM at call time. `None` for an unset cursor, a
    /// stale out-of-bounds position, or an element whose link vanished.
    pub fn current_link(&self) -> Option<LinkHandle> {
        let pos = self.cursor.position()?;
        let element = self.results.get(pos)?;
        self.dom.activation_link(element)
    }

    /// Follow a pagination control, if the site has one and the page
    /// currently shows it.
    fn paginate(&self, selector: Option<&str>) {
        let Some(selector) = selector else {
            trace!("site has no pagination control for this direction");
            return;
        };
        let Some(element) = self.dom.query_first(selector) else {
            trace!(%selector, "pagination control not present");
            return;
        };
        let Some(link) = self.dom.activation_link(&element) else {
            trace!(%selector, "pagination control has no link");
            return;
        };
        self.nav.navigate(&link.href);
    }

    /// Kick off the asynchronous clipboard write. Success shows a toast;
    /// failure is swallowed, by contract.
    fn copy_reference(&self) {
        let Some(link) = self.current_link() else {
            return;
        };
        let clipboard = Arc::clone(&self.clipboard);
        let visual = Arc::clone(&self.visual);
        tokio::spawn(async move {
            match clipboard.write_text(&link.href).await {
                Ok(()) => visual.toast("Link copied"),
                Err(err) => debug!(%err, "clipboard write failed"),
            }
        });
    }

    /// Current cursor position, if any.
    pub fn cursor_position(&self) -> Option<usize> {
        self.cursor.position()
    }

    /// Length of the current result list.
    pub fn results_len(&self) -> usize {
        self.results.len()
    }

    /// Whether the help overlay is currently shown.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Pending-sequence display form, for status surfaces ("5", "g").
    pub fn pending_display(&self) -> String {
        self.keys.pending_display()
    }
}
