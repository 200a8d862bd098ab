//! End-to-end engine tests over the mock page boundaries.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use config::SiteProfile;
use keyseq::KeyInput;
use navki_engine::{Disposition, Engine};
use webdom::DomOps;
use webdom::mock::{MockClipboard, MockDom, MockNav, MockVisual};

const RESULT_QUERY: &str = ".result";

struct TestPage {
    dom: Arc<MockDom>,
    visual: Arc<MockVisual>,
    nav: Arc<MockNav>,
    clipboard: Arc<MockClipboard>,
}

fn profile() -> SiteProfile {
    SiteProfile {
        result_query: RESULT_QUERY.into(),
        next_page_query: Some(".next".into()),
        prev_page_query: None,
    }
}

fn create_test_engine(results: usize) -> (Engine, TestPage) {
    let page = TestPage {
        dom: Arc::new(MockDom::new()),
        visual: Arc::new(MockVisual::new()),
        nav: Arc::new(MockNav::new()),
        clipboard: Arc::new(MockClipboard::new()),
    };
    page.dom.seed_results(RESULT_QUERY, results);
    let engine = Engine::new(
        profile(),
        page.dom.clone(),
        page.visual.clone(),
        page.nav.clone(),
        page.clipboard.clone(),
    );
    (engine, page)
}

/// Press a sequence of keys 10ms apart, starting from `start`.
fn press(engine: &mut Engine, start: Instant, keys: &[&str]) -> Vec<Disposition> {
    keys.iter()
        .enumerate()
        .map(|(i, k)| {
            engine.dispatch_key_at(&KeyInput::new(*k), start + Duration::from_millis(10 * i as u64))
        })
        .collect()
}

#[test]
fn end_to_end_walk() {
    // j -> 0, then 5j -> 5, then gg -> 0, then G -> 9.
    let (mut engine, _page) = create_test_engine(10);
    assert_eq!(engine.cursor_position(), None);

    let start = Instant::now();
    press(&mut engine, start, &["j"]);
    assert_eq!(engine.cursor_position(), Some(0));

    press(&mut engine, start + Duration::from_millis(100), &["5", "j"]);
    assert_eq!(engine.cursor_position(), Some(5));

    press(&mut engine, start + Duration::from_millis(200), &["g", "g"]);
    assert_eq!(engine.cursor_position(), Some(0));

    press(&mut engine, start + Duration::from_millis(300), &["G"]);
    assert_eq!(engine.cursor_position(), Some(9));
}

#[test]
fn counted_jumps_land_one_indexed() {
    let (mut engine, _page) = create_test_engine(10);
    let start = Instant::now();

    press(&mut engine, start, &["3", "g", "g"]);
    assert_eq!(engine.cursor_position(), Some(2));

    press(&mut engine, start + Duration::from_millis(100), &["7", "G"]);
    assert_eq!(engine.cursor_position(), Some(6));

    // A count past the end clamps to the last result.
    press(&mut engine, start + Duration::from_millis(200), &["4", "2", "G"]);
    assert_eq!(engine.cursor_position(), Some(9));
}

#[test]
fn g_then_j_behaves_like_j_alone() {
    let (mut engine, _page) = create_test_engine(10);
    press(&mut engine, Instant::now(), &["g", "j"]);
    assert_eq!(engine.cursor_position(), Some(0));
}

#[test]
fn moves_are_clamped_and_empty_list_is_inert() {
    let (mut engine, page) = create_test_engine(0);
    let dispositions = press(&mut engine, Instant::now(), &["j", "k", "G", "g", "g"]);
    assert_eq!(engine.cursor_position(), None);
    // The keys were still recognized (and consumed), they just had
    // nothing to act on.
    assert!(dispositions.iter().all(|d| *d == Disposition::Consumed));
    assert!(page.visual.marked().is_empty());
    assert!(page.visual.scrolls().is_empty());
}

#[test]
fn focus_follows_the_cursor() {
    let (mut engine, page) = create_test_engine(3);
    let start = Instant::now();
    press(&mut engine, start, &["j", "j"]);
    // Exactly one marker, on the second result.
    let expected = page.dom.query_all(RESULT_QUERY)[1];
    assert_eq!(page.visual.marked(), vec![expected]);
    assert_eq!(page.visual.scrolls().len(), 2);

    // A clamped-in-place move fires no additional visual work.
    press(&mut engine, start + Duration::from_millis(100), &["k", "k", "k"]);
    let first = page.dom.query_all(RESULT_QUERY)[0];
    assert_eq!(page.visual.marked(), vec![first]);
    let scrolls_before = page.visual.scrolls().len();
    press(&mut engine, start + Duration::from_millis(200), &["k"]);
    assert_eq!(page.visual.scrolls().len(), scrolls_before);
}

#[test]
fn editable_focus_makes_the_engine_transparent() {
    let (mut engine, page) = create_test_engine(10);
    page.dom.set_editable_focused(true);

    let start = Instant::now();
    let dispositions = press(&mut engine, start, &["5", "j", "g"]);
    assert!(dispositions.iter().all(|d| *d == Disposition::Propagate));
    assert_eq!(engine.cursor_position(), None);
    assert_eq!(engine.pending_display(), "");

    // Back out of the field: the earlier keystrokes left no residue.
    page.dom.set_editable_focused(false);
    press(&mut engine, start + Duration::from_millis(100), &["j"]);
    assert_eq!(engine.cursor_position(), Some(0));
}

#[test]
fn mutation_shrink_clamps_on_next_move() {
    let (mut engine, page) = create_test_engine(10);
    let start = Instant::now();
    press(&mut engine, start, &["8", "g", "g"]);
    assert_eq!(engine.cursor_position(), Some(7));

    // The page swaps in a shorter list; the cursor is not touched until
    // the next movement.
    page.dom.seed_results(RESULT_QUERY, 3);
    engine.on_dom_mutation();
    assert_eq!(engine.cursor_position(), Some(7));
    assert_eq!(engine.results_len(), 3);

    press(&mut engine, start + Duration::from_millis(100), &["j"]);
    assert_eq!(engine.cursor_position(), Some(2));
}

#[test]
fn stale_cursor_has_no_activation_target() {
    let (mut engine, page) = create_test_engine(10);
    press(&mut engine, Instant::now(), &["8", "g", "g"]);
    page.dom.seed_results(RESULT_QUERY, 3);
    engine.on_dom_mutation();

    // Position 7 is out of bounds of the new list: activation is a
    // silent no-op.
    press(&mut engine, Instant::now() + Duration::from_secs(2), &["o"]);
    assert!(page.nav.navigations().is_empty());
}

#[test]
fn activation_navigates_to_the_current_link() {
    let (mut engine, page) = create_test_engine(10);
    let start = Instant::now();
    press(&mut engine, start, &["3", "j"]);
    press(&mut engine, start + Duration::from_millis(100), &["Enter"]);
    assert_eq!(
        page.nav.last_navigation(),
        Some("https://results.example/item/2".into())
    );

    press(&mut engine, start + Duration::from_millis(200), &["O"]);
    assert_eq!(
        page.nav.new_contexts(),
        vec!["https://results.example/item/2".to_string()]
    );
}

#[test]
fn link_vanishing_after_selection_is_inert() {
    // The activation target is resolved at use time, not at selection.
    let (mut engine, page) = create_test_engine(10);
    press(&mut engine, Instant::now(), &["j"]);
    let selected = page.dom.query_all(RESULT_QUERY)[0];
    page.dom.set_href(selected, None);

    press(&mut engine, Instant::now() + Duration::from_secs(2), &["Enter"]);
    assert!(page.nav.navigations().is_empty());
}

#[test]
fn activation_without_selection_is_inert() {
    let (mut engine, page) = create_test_engine(10);
    press(&mut engine, Instant::now(), &["Enter", "o", "O", "y"]);
    assert!(page.nav.navigations().is_empty());
    assert!(page.nav.new_contexts().is_empty());
}

#[test]
fn pagination_follows_the_profile() {
    let (mut engine, page) = create_test_engine(10);
    page.dom
        .push_element(".next", 16.0, Some("https://results.example/page/2"));

    let start = Instant::now();
    press(&mut engine, start, &["L"]);
    assert_eq!(
        page.nav.last_navigation(),
        Some("https://results.example/page/2".into())
    );

    // No prev-page selector in this profile: H is a silent no-op.
    press(&mut engine, start + Duration::from_millis(100), &["H"]);
    assert_eq!(page.nav.navigations().len(), 1);
}

#[test]
fn pagination_control_absent_is_inert() {
    // Profile has a next selector but the page shows no such element.
    let (mut engine, page) = create_test_engine(10);
    press(&mut engine, Instant::now(), &["L"]);
    assert!(page.nav.navigations().is_empty());
}

#[test]
fn help_overlay_toggles_and_escape_dismisses() {
    let (mut engine, page) = create_test_engine(10);
    let start = Instant::now();

    press(&mut engine, start, &["?"]);
    assert!(engine.help_visible());
    assert!(page.visual.help_visible());

    press(&mut engine, start + Duration::from_millis(100), &["?"]);
    assert!(!engine.help_visible());

    press(&mut engine, start + Duration::from_millis(200), &["?"]);
    let disposition = engine.dispatch_key_at(
        &KeyInput::new("Escape"),
        start + Duration::from_millis(300),
    );
    // Escape acts and still reaches the page.
    assert_eq!(disposition, Disposition::Propagate);
    assert!(!engine.help_visible());
    assert!(!page.visual.help_visible());
}

#[test]
fn unrecognized_keys_propagate() {
    let (mut engine, _page) = create_test_engine(10);
    let disposition = engine.dispatch_key_at(&KeyInput::new("x"), Instant::now());
    assert_eq!(disposition, Disposition::Propagate);
}

#[tokio::test(flavor = "multi_thread")]
async fn copy_reference_writes_and_toasts() {
    let (mut engine, page) = create_test_engine(10);
    let start = Instant::now();
    press(&mut engine, start, &["j"]);
    press(&mut engine, start + Duration::from_millis(100), &["y"]);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(
        page.clipboard.writes(),
        vec!["https://results.example/item/0".to_string()]
    );
    assert_eq!(page.visual.toasts(), vec!["Link copied".to_string()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn copy_reference_failure_is_silent() {
    let (mut engine, page) = create_test_engine(10);
    page.clipboard.set_fail(true);
    let start = Instant::now();
    press(&mut engine, start, &["j"]);
    press(&mut engine, start + Duration::from_millis(100), &["y"]);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(page.clipboard.writes().is_empty());
    assert!(page.visual.toasts().is_empty());
}
