//! Scenario definitions and the step runner.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use config::Site;
use keyseq::KeyInput;
use navki_engine::Engine;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};
use webdom::mock::{MockClipboard, MockDom, MockNav, MockVisual};

/// Href given to the simulated next-page control.
pub const NEXT_PAGE_HREF: &str = "https://page.example/next";
/// Href given to the simulated previous-page control.
pub const PREV_PAGE_HREF: &str = "https://page.example/prev";

/// A scripted run against a simulated page.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Site profile the page is built from.
    pub site: Site,
    /// Number of results seeded before the engine starts.
    pub results: usize,
    /// Steps, executed in order; key steps advance a simulated clock by
    /// 20ms each.
    pub steps: Vec<Step>,
}

/// One scripted action or assertion.
#[derive(Debug, Clone, Deserialize)]
pub enum Step {
    /// Press one key (a DOM `KeyboardEvent.key` value).
    Key(String),
    /// Advance the simulated clock without pressing anything.
    Wait(u64),
    /// Replace the result set with this many fresh results and deliver a
    /// mutation notification.
    Mutate(usize),
    /// Focus (true) or blur (false) an editable element.
    Editable(bool),
    /// Assert the cursor position.
    ExpectCursor(Option<usize>),
    /// Assert the most recent navigation URL.
    ExpectNavigation(String),
    /// Assert help overlay visibility.
    ExpectHelp(bool),
}

/// Scenario failures.
#[derive(Debug, Error)]
pub enum SmokeError {
    /// Scenario file could not be read.
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    /// Scenario file did not parse.
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// A step's expectation did not hold.
    #[error("step {index} failed: {detail}")]
    StepFailed {
        /// Zero-based index of the failing step.
        index: usize,
        /// Human-readable mismatch description.
        detail: String,
    },
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct Report {
    /// Steps executed.
    pub steps: usize,
}

/// Parse a scenario from RON text.
pub fn parse(text: &str) -> Result<Scenario, SmokeError> {
    Ok(ron::from_str(text)?)
}

/// Build the simulated page and engine, then execute every step.
///
/// Requires an ambient Tokio runtime: copy-reference steps spawn their
/// clipboard writes.
pub fn run(scenario: &Scenario) -> Result<Report, SmokeError> {
    let profile = scenario.site.profile();
    let dom = Arc::new(MockDom::new());
    let visual = Arc::new(MockVisual::new());
    let nav = Arc::new(MockNav::new());
    let clipboard = Arc::new(MockClipboard::new());

    dom.seed_results(&profile.result_query, scenario.results);
    if let Some(sel) = &profile.next_page_query {
        dom.push_element(sel, 16.0, Some(NEXT_PAGE_HREF));
    }
    if let Some(sel) = &profile.prev_page_query {
        dom.push_element(sel, 16.0, Some(PREV_PAGE_HREF));
    }

    let mut engine = Engine::new(
        profile.clone(),
        dom.clone(),
        visual.clone(),
        nav.clone(),
        clipboard.clone(),
    );

    let mut now = Instant::now();
    for (index, step) in scenario.steps.iter().enumerate() {
        debug!(index, ?step, "step");
        match step {
            Step::Key(k) => {
                let disposition = engine.dispatch_key_at(&KeyInput::new(k.as_str()), now);
                debug!(key = %k, ?disposition, "key dispatched");
                now += Duration::from_millis(20);
            }
            Step::Wait(ms) => now += Duration::from_millis(*ms),
            Step::Mutate(n) => {
                dom.seed_results(&profile.result_query, *n);
                engine.on_dom_mutation();
            }
            Step::Editable(focused) => dom.set_editable_focused(*focused),
            Step::ExpectCursor(expected) => {
                let got = engine.cursor_position();
                if got != *expected {
                    return Err(SmokeError::StepFailed {
                        index,
                        detail: format!("cursor is {got:?}, expected {expected:?}"),
                    });
                }
            }
            Step::ExpectNavigation(expected) => {
                let got = nav.last_navigation();
                if got.as_deref() != Some(expected.as_str()) {
                    return Err(SmokeError::StepFailed {
                        index,
                        detail: format!("last navigation is {got:?}, expected {expected:?}"),
                    });
                }
            }
            Step::ExpectHelp(expected) => {
                if engine.help_visible() != *expected {
                    return Err(SmokeError::StepFailed {
                        index,
                        detail: format!(
                            "help overlay visible={}, expected {expected}",
                            engine.help_visible()
                        ),
                    });
                }
            }
        }
    }

    info!(steps = scenario.steps.len(), "scenario passed");
    Ok(Report {
        steps: scenario.steps.len(),
    })
}
