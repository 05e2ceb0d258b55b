//! Tests for the selection state machine

use super::*;
use proptest::prelude::*;

fn three() -> Vec<Candidate> {
    vec![
        Candidate::stock("AAPL", "Apple Inc."),
        Candidate::stock("AMZN", "Amazon.com Inc."),
        Candidate::stock("ADBE", "Adobe Inc."),
    ]
}

fn suggesting() -> SelectionState {
    let mut state = SelectionState::default();
    state.show_results(three(), false);
    state
}

#[test]
fn test_default_is_idle() {
    let state = SelectionState::default();
    assert_eq!(state, SelectionState::Idle);
    assert!(!state.is_panel_visible());
    assert!(state.candidates().is_empty());
    assert_eq!(state.highlighted(), None);
}

#[test]
fn test_suggestions_reject_empty_list() {
    assert!(Suggestions::new(Vec::new()).is_none());
}

#[test]
fn test_results_enter_suggesting_without_highlight() {
    let state = suggesting();
    assert_eq!(state.name(), "suggesting");
    assert!(state.is_panel_visible());
    assert_eq!(state.candidates().len(), 3);
    assert_eq!(state.highlighted(), None);
}

#[test]
fn test_new_results_reset_highlight() {
    let mut state = suggesting();
    state.handle_key(TypeaheadKey::ArrowDown);
    state.handle_key(TypeaheadKey::ArrowDown);
    assert_eq!(state.highlighted(), Some(1));

    state.show_results(vec![Candidate::stock("MSFT", "Microsoft Corporation")], false);
    assert_eq!(state.highlighted(), None);
    assert_eq!(state.candidates()[0].symbol, "MSFT");
}

#[test]
fn test_empty_results_with_query_is_empty_state() {
    let mut state = suggesting();
    state.show_results(Vec::new(), false);
    assert_eq!(state, SelectionState::Empty);
    assert!(state.is_panel_visible());
    assert!(state.candidates().is_empty());
}

#[test]
fn test_empty_results_without_query_is_idle() {
    let mut state = suggesting();
    state.show_results(Vec::new(), true);
    assert_eq!(state, SelectionState::Idle);
}

#[test]
fn test_failure_matches_empty_results() {
    let mut state = suggesting();
    state.show_failure(false);
    assert_eq!(state, SelectionState::Empty);

    state.show_failure(true);
    assert_eq!(state, SelectionState::Idle);
}

#[test]
fn test_arrow_down_advances_and_clamps_at_last() {
    let mut state = suggesting();
    assert_eq!(state.handle_key(TypeaheadKey::ArrowDown), KeyEffect::Highlight(Some(0)));
    assert_eq!(state.handle_key(TypeaheadKey::ArrowDown), KeyEffect::Highlight(Some(1)));
    assert_eq!(state.handle_key(TypeaheadKey::ArrowDown), KeyEffect::Highlight(Some(2)));
    assert_eq!(state.handle_key(TypeaheadKey::ArrowDown), KeyEffect::None);
    assert_eq!(state.highlighted(), Some(2));
}

#[test]
fn test_arrow_up_from_first_clears_highlight() {
    let mut state = suggesting();
    state.handle_key(TypeaheadKey::ArrowDown);
    assert_eq!(state.highlighted(), Some(0));

    assert_eq!(state.handle_key(TypeaheadKey::ArrowUp), KeyEffect::Highlight(None));
    assert_eq!(state.highlighted(), None);

    // Further ArrowUp stays at none
    assert_eq!(state.handle_key(TypeaheadKey::ArrowUp), KeyEffect::None);
    assert_eq!(state.highlighted(), None);
}

#[test]
fn test_arrow_up_moves_back_one_row() {
    let mut state = suggesting();
    state.handle_key(TypeaheadKey::ArrowDown);
    state.handle_key(TypeaheadKey::ArrowDown);
    state.handle_key(TypeaheadKey::ArrowDown);
    assert_eq!(state.handle_key(TypeaheadKey::ArrowUp), KeyEffect::Highlight(Some(1)));
}

#[test]
fn test_arrows_ignored_when_panel_hidden() {
    let mut idle = SelectionState::default();
    assert_eq!(idle.handle_key(TypeaheadKey::ArrowDown), KeyEffect::None);

    let mut dismissed = suggesting();
    dismissed.hide();
    assert_eq!(dismissed.handle_key(TypeaheadKey::ArrowDown), KeyEffect::None);
    assert_eq!(dismissed.highlighted(), None);

    let mut empty = SelectionState::Empty;
    assert_eq!(empty.handle_key(TypeaheadKey::ArrowDown), KeyEffect::None);
    assert_eq!(empty.handle_key(TypeaheadKey::ArrowUp), KeyEffect::None);
}

#[test]
fn test_enter_commits_highlighted_candidate() {
    let mut state = suggesting();
    state.handle_key(TypeaheadKey::ArrowDown);
    state.handle_key(TypeaheadKey::ArrowDown);

    assert_eq!(
        state.handle_key(TypeaheadKey::Enter),
        KeyEffect::Commit(Candidate::stock("AMZN", "Amazon.com Inc."))
    );
}

#[test]
fn test_enter_without_highlight_commits_first() {
    let mut state = suggesting();
    assert_eq!(
        state.handle_key(TypeaheadKey::Enter),
        KeyEffect::Commit(Candidate::stock("AAPL", "Apple Inc."))
    );
}

#[test]
fn test_enter_without_candidates_is_noop() {
    let mut idle = SelectionState::Idle;
    assert_eq!(idle.handle_key(TypeaheadKey::Enter), KeyEffect::None);

    let mut empty = SelectionState::Empty;
    assert_eq!(empty.handle_key(TypeaheadKey::Enter), KeyEffect::None);
}

#[test]
fn test_escape_hides_and_keeps_results_and_highlight() {
    let mut state = suggesting();
    state.handle_key(TypeaheadKey::ArrowDown);

    assert_eq!(state.handle_key(TypeaheadKey::Escape), KeyEffect::Hidden);
    assert_eq!(state.name(), "dismissed");
    assert!(!state.is_panel_visible());
    assert_eq!(state.candidates().len(), 3);
    assert_eq!(state.highlighted(), Some(0));
}

#[test]
fn test_escape_on_empty_goes_idle() {
    let mut state = SelectionState::Empty;
    assert_eq!(state.handle_key(TypeaheadKey::Escape), KeyEffect::Hidden);
    assert_eq!(state, SelectionState::Idle);
}

#[test]
fn test_escape_when_hidden_is_noop() {
    let mut state = SelectionState::Idle;
    assert_eq!(state.handle_key(TypeaheadKey::Escape), KeyEffect::None);
}

#[test]
fn test_focus_reshows_dismissed_results() {
    let mut state = suggesting();
    state.handle_key(TypeaheadKey::ArrowDown);
    state.hide();

    assert!(state.focus());
    assert_eq!(state.name(), "suggesting");
    assert_eq!(state.highlighted(), Some(0));
}

#[test]
fn test_focus_without_cached_results_is_noop() {
    let mut idle = SelectionState::Idle;
    assert!(!idle.focus());
    assert_eq!(idle, SelectionState::Idle);

    let mut empty = SelectionState::Empty;
    assert!(!empty.focus());
    assert_eq!(empty, SelectionState::Empty);
}

#[test]
fn test_click_commits_row_regardless_of_highlight() {
    let mut state = suggesting();
    state.handle_key(TypeaheadKey::ArrowDown);

    assert_eq!(state.click(2), Some(Candidate::stock("ADBE", "Adobe Inc.")));
}

#[test]
fn test_click_out_of_range_or_hidden_is_noop() {
    let state = suggesting();
    assert_eq!(state.click(3), None);

    let mut dismissed = suggesting();
    dismissed.hide();
    assert_eq!(dismissed.click(0), None);
}

#[test]
fn test_clear_goes_idle() {
    let mut state = suggesting();
    state.clear();
    assert_eq!(state, SelectionState::Idle);
}

#[derive(Debug, Clone)]
enum Op {
    Key(TypeaheadKey),
    Results(usize),
    Fail,
    Focus,
    Hide,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Key(TypeaheadKey::ArrowDown)),
        Just(Op::Key(TypeaheadKey::ArrowUp)),
        Just(Op::Key(TypeaheadKey::Escape)),
        (0usize..6).prop_map(Op::Results),
        Just(Op::Fail),
        Just(Op::Focus),
        Just(Op::Hide),
    ]
}

// The highlight is always none or a valid row, whatever happens
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_highlight_always_in_range(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut state = SelectionState::default();

        for op in ops {
            match op {
                Op::Key(key) => {
                    state.handle_key(key);
                }
                Op::Results(n) => {
                    let candidates = (0..n)
                        .map(|i| Candidate::stock(format!("S{}", i), format!("Name {}", i)))
                        .collect();
                    state.show_results(candidates, false);
                    prop_assert_eq!(state.highlighted(), None);
                }
                Op::Fail => state.show_failure(false),
                Op::Focus => {
                    state.focus();
                }
                Op::Hide => {
                    state.hide();
                }
            }

            if let Some(i) = state.highlighted() {
                prop_assert!(i < state.candidates().len());
            }
            if state.is_panel_visible() && state.highlighted().is_some() {
                prop_assert!(!state.candidates().is_empty());
            }
        }
    }
}

// ArrowDown never passes the last row, ArrowUp bottoms out at none
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_arrow_clamping(len in 1usize..10, downs in 0usize..20, ups in 0usize..20) {
        let candidates = (0..len)
            .map(|i| Candidate::stock(format!("S{}", i), "Name"))
            .collect();
        let mut state = SelectionState::default();
        state.show_results(candidates, false);

        for _ in 0..downs {
            state.handle_key(TypeaheadKey::ArrowDown);
        }
        let expected_down = if downs == 0 { None } else { Some((downs - 1).min(len - 1)) };
        prop_assert_eq!(state.highlighted(), expected_down);

        for _ in 0..ups {
            state.handle_key(TypeaheadKey::ArrowUp);
        }
        let expected_up = expected_down.and_then(|i| i.checked_sub(ups));
        prop_assert_eq!(state.highlighted(), expected_up);
    }
}
