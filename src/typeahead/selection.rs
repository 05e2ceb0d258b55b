//! Selection state machine for the results panel
//!
//! The panel is in exactly one of four states. Candidates and the highlight
//! live inside [`Suggestions`], which cannot be empty and cannot hold a
//! highlight past its end, so "visible panel pointing at a row that does not
//! exist" is not representable.

use crate::provider::Candidate;

/// Keys the typeahead reacts to; everything else is plain text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeaheadKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// A non-empty result set plus the highlighted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    candidates: Vec<Candidate>,
    /// None = nothing highlighted
    highlighted: Option<usize>,
}

impl Suggestions {
    /// `None` for an empty list
    pub fn new(candidates: Vec<Candidate>) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        Some(Self {
            candidates,
            highlighted: None,
        })
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_candidate(&self) -> Option<&Candidate> {
        self.highlighted.and_then(|i| self.candidates.get(i))
    }

    /// Move down one row, stopping at the last one (no wraparound)
    pub fn highlight_next(&mut self) {
        let last = self.candidates.len() - 1;
        self.highlighted = match self.highlighted {
            None => Some(0),
            Some(i) => Some((i + 1).min(last)),
        };
    }

    /// Move up one row; above the first row nothing is highlighted
    pub fn highlight_previous(&mut self) {
        self.highlighted = match self.highlighted {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Candidate Enter commits: the highlighted one, else the first
    pub fn enter_target(&self) -> &Candidate {
        self.highlighted_candidate()
            .unwrap_or(&self.candidates[0])
    }
}

/// Visible state of the results panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Panel hidden, no candidates
    #[default]
    Idle,
    /// Panel visible with candidates
    Suggesting(Suggestions),
    /// Panel hidden, candidates kept so focus can bring them back
    Dismissed(Suggestions),
    /// Panel visible with a "no results" notice
    Empty,
}

/// What a key press asks the controller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEffect {
    /// Nothing changed
    None,
    /// The highlight moved; `Some(row)` should be scrolled into view
    Highlight(Option<usize>),
    /// The panel was hidden
    Hidden,
    /// Commit this candidate
    Commit(Candidate),
}

impl SelectionState {
    pub fn is_panel_visible(&self) -> bool {
        matches!(self, SelectionState::Suggesting(_) | SelectionState::Empty)
    }

    /// Candidates currently known, visible or not
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            SelectionState::Suggesting(s) | SelectionState::Dismissed(s) => s.candidates(),
            SelectionState::Idle | SelectionState::Empty => &[],
        }
    }

    pub fn highlighted(&self) -> Option<usize> {
        match self {
            SelectionState::Suggesting(s) | SelectionState::Dismissed(s) => s.highlighted(),
            SelectionState::Idle | SelectionState::Empty => None,
        }
    }

    /// Short state name for logs and the status line
    pub fn name(&self) -> &'static str {
        match self {
            SelectionState::Idle => "idle",
            SelectionState::Suggesting(_) => "suggesting",
            SelectionState::Dismissed(_) => "dismissed",
            SelectionState::Empty => "empty",
        }
    }

    /// A lookup answered. Non-empty results replace the set with nothing
    /// highlighted; otherwise the panel shows "no results" for a non-empty
    /// query and goes idle for an empty one.
    pub fn show_results(&mut self, candidates: Vec<Candidate>, query_is_empty: bool) {
        *self = match Suggestions::new(candidates) {
            Some(suggestions) => SelectionState::Suggesting(suggestions),
            None => Self::no_results(query_is_empty),
        };
    }

    /// A lookup failed; same visible result as an empty answer
    pub fn show_failure(&mut self, query_is_empty: bool) {
        *self = Self::no_results(query_is_empty);
    }

    fn no_results(query_is_empty: bool) -> Self {
        if query_is_empty {
            SelectionState::Idle
        } else {
            SelectionState::Empty
        }
    }

    pub fn clear(&mut self) {
        *self = SelectionState::Idle;
    }

    /// Focus re-shows cached candidates without a new lookup
    pub fn focus(&mut self) -> bool {
        match std::mem::take(self) {
            SelectionState::Dismissed(s) => {
                *self = SelectionState::Suggesting(s);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Hide the panel, keeping candidates and highlight for later
    pub fn hide(&mut self) -> bool {
        match std::mem::take(self) {
            SelectionState::Suggesting(s) => {
                *self = SelectionState::Dismissed(s);
                true
            }
            SelectionState::Empty => true,
            other => {
                *self = other;
                false
            }
        }
    }

    /// Keyboard handling; keys only act on a visible panel
    pub fn handle_key(&mut self, key: TypeaheadKey) -> KeyEffect {
        if key == TypeaheadKey::Escape {
            return if self.hide() {
                KeyEffect::Hidden
            } else {
                KeyEffect::None
            };
        }

        let SelectionState::Suggesting(suggestions) = self else {
            return KeyEffect::None;
        };

        match key {
            TypeaheadKey::ArrowDown => {
                let before = suggestions.highlighted();
                suggestions.highlight_next();
                highlight_effect(before, suggestions.highlighted())
            }
            TypeaheadKey::ArrowUp => {
                let before = suggestions.highlighted();
                suggestions.highlight_previous();
                highlight_effect(before, suggestions.highlighted())
            }
            TypeaheadKey::Enter => KeyEffect::Commit(suggestions.enter_target().clone()),
            TypeaheadKey::Escape => KeyEffect::None,
        }
    }

    /// Pointer click on a visible row, regardless of highlight
    pub fn click(&self, row: usize) -> Option<Candidate> {
        match self {
            SelectionState::Suggesting(s) => s.candidates().get(row).cloned(),
            _ => None,
        }
    }
}

fn highlight_effect(before: Option<usize>, after: Option<usize>) -> KeyEffect {
    if before == after {
        KeyEffect::None
    } else {
        KeyEffect::Highlight(after)
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
