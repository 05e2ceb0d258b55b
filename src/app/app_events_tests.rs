//! Tests for app_events

use super::*;
use crate::provider::Candidate;
use crate::test_utils::test_helpers::{key, key_with_mods, sample_candidates, test_app};
use ratatui::crossterm::event::{KeyEventState, MouseEvent};

#[test]
fn test_typing_updates_field_and_arms_debounce() {
    let mut harness = test_app();
    harness.type_str("AAP");

    assert_eq!(harness.app.query(), "AAP");
    assert_eq!(harness.app.typeahead.query_text(), "AAP");
    assert!(harness.sent().is_empty());

    harness.settle();
    let sent = harness.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].query, "AAP");
}

#[test]
fn test_enter_commits_into_field() {
    let mut harness = test_app();
    harness.search("AAP", vec![Candidate::stock("AAPL", "Apple Inc.")]);

    harness.press(KeyCode::Down);
    assert_eq!(harness.app.typeahead.view().highlighted, Some(0));

    harness.press(KeyCode::Enter);
    assert_eq!(harness.app.query(), "AAPL");
    assert_eq!(harness.app.committed().unwrap().name, "Apple Inc.");
    assert!(!harness.app.typeahead.view().panel_visible);
    assert!(!harness.app.should_quit());
}

#[test]
fn test_enter_with_hidden_panel_accepts_and_quits() {
    let mut harness = test_app();
    harness.search("AAP", sample_candidates());
    harness.press(KeyCode::Enter);
    assert!(!harness.app.should_quit());

    harness.press(KeyCode::Enter);
    assert!(harness.app.should_quit());
    assert!(harness.app.accepted);
    assert_eq!(harness.app.committed().unwrap().symbol, "AAPL");
}

#[test]
fn test_ctrl_m_behaves_like_enter() {
    let mut harness = test_app();
    harness.search("A", sample_candidates());

    harness
        .app
        .handle_key_event(key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL), Instant::now());

    assert_eq!(harness.app.query(), "AAPL");
    assert_eq!(harness.app.typeahead.host().textarea.lines().len(), 1);
}

#[test]
fn test_escape_hides_panel_then_quits() {
    let mut harness = test_app();
    harness.search("A", sample_candidates());

    harness.press(KeyCode::Esc);
    assert!(!harness.app.typeahead.view().panel_visible);
    assert!(!harness.app.should_quit());

    harness.press(KeyCode::Esc);
    assert!(harness.app.should_quit());
    assert!(!harness.app.accepted);
}

#[test]
fn test_ctrl_c_quits_without_accepting() {
    let mut harness = test_app();
    harness.search("A", sample_candidates());
    harness.press(KeyCode::Enter);

    harness
        .app
        .handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL), Instant::now());

    assert!(harness.app.should_quit());
    assert!(!harness.app.accepted);
}

#[test]
fn test_backspace_to_empty_clears_panel() {
    let mut harness = test_app();
    harness.search("A", sample_candidates());

    harness.press(KeyCode::Backspace);
    assert_eq!(harness.app.query(), "");
    assert!(!harness.app.typeahead.view().panel_visible);

    harness.settle();
    assert!(harness.sent().is_empty());
}

#[test]
fn test_cursor_movement_does_not_search() {
    let mut harness = test_app();
    harness.type_str("AA");
    harness.settle();
    harness.sent();

    harness.press(KeyCode::Left);
    harness.press(KeyCode::Home);
    harness.settle();
    assert!(harness.sent().is_empty());
}

#[test]
fn test_tab_blurs_and_restores_focus() {
    let mut harness = test_app();
    harness.search("A", sample_candidates());

    harness.press(KeyCode::Tab);
    assert_eq!(harness.app.focus, Focus::Outside);

    harness.press(KeyCode::Tab);
    assert_eq!(harness.app.focus, Focus::InputField);
    assert!(harness.app.typeahead.view().panel_visible);
}

#[test]
fn test_typing_while_blurred_refocuses() {
    let mut harness = test_app();
    harness.press(KeyCode::Tab);

    harness.type_str("M");
    assert_eq!(harness.app.focus, Focus::InputField);
    assert_eq!(harness.app.query(), "M");
}

#[test]
fn test_focus_lost_event_starts_grace_timer() {
    let mut harness = test_app();
    harness.search("A", sample_candidates());
    let now = Instant::now();

    harness.app.handle_event(Event::FocusLost, now);
    assert_eq!(harness.app.focus, Focus::Outside);
    assert_eq!(
        harness.app.poll_timeout(now),
        Duration::from_millis(100)
    );

    harness.app.poll_typeahead(now + Duration::from_millis(250));
    assert!(!harness.app.typeahead.view().panel_visible);

    harness.app.handle_event(Event::FocusGained, now + Duration::from_millis(300));
    assert!(harness.app.typeahead.view().panel_visible);
}

#[test]
fn test_paste_flattens_newlines_and_searches() {
    let mut harness = test_app();
    harness
        .app
        .handle_event(Event::Paste("TS\nLA".to_string()), Instant::now());

    assert_eq!(harness.app.query(), "TSLA");
    harness.settle();
    assert_eq!(harness.sent()[0].query, "TSLA");
}

#[test]
fn test_key_release_is_ignored() {
    let mut harness = test_app();
    let release = KeyEvent {
        code: KeyCode::Char('A'),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Release,
        state: KeyEventState::empty(),
    };

    harness.app.handle_event(Event::Key(release), Instant::now());
    assert_eq!(harness.app.query(), "");
}

#[test]
fn test_mouse_move_is_ignored() {
    let mut harness = test_app();
    harness.search("A", sample_candidates());

    let mouse = MouseEvent {
        kind: MouseEventKind::Moved,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    harness.app.handle_event(Event::Mouse(mouse), Instant::now());
    assert_eq!(harness.app.focus, Focus::InputField);
}

#[test]
fn test_poll_timeout_tracks_pending_debounce() {
    let mut harness = test_app();
    let now = Instant::now();
    harness.app.handle_key_event(key(KeyCode::Char('A')), now);

    // 300ms debounce is longer than the idle poll
    assert_eq!(harness.app.poll_timeout(now), Duration::from_millis(100));
    assert_eq!(
        harness.app.poll_timeout(now + Duration::from_millis(250)),
        Duration::from_millis(50)
    );
}

#[test]
fn test_poll_timeout_shortens_while_loading() {
    let mut harness = test_app();
    harness.type_str("A");
    harness.settle();

    assert!(harness.app.typeahead.view().loading);
    assert_eq!(harness.app.poll_timeout(Instant::now()), Duration::from_millis(20));
}

#[test]
fn test_arrow_keys_do_not_edit_text() {
    let mut harness = test_app();
    harness.search("A", sample_candidates());

    harness.press(KeyCode::Down);
    harness.press(KeyCode::Down);
    harness.press(KeyCode::Up);

    assert_eq!(harness.app.query(), "A");
    assert_eq!(harness.app.typeahead.view().highlighted, Some(0));
}
