//! Typeahead controller
//!
//! Owns one input's typeahead: the debounce timer, the blur grace timer, the
//! lookup dispatcher and the selection state. Every event runs to completion
//! on the owning thread; time is passed in explicitly so timers can be driven
//! by the event loop (or by tests) through [`TypeaheadController::tick`].

use std::time::{Duration, Instant};

use super::debouncer::{DebounceScheduler, InputDisposition};
use super::dispatcher::{LookupDispatcher, LookupOutcome};
use super::host::HostField;
use super::scroll::PanelScroll;
use super::selection::{KeyEffect, SelectionState, TypeaheadKey};
use super::timer::Timer;
use crate::config::{Config, TypeaheadConfig};
use crate::provider::{Candidate, SearchProvider};

pub const DEFAULT_BLUR_GRACE_MS: u64 = 200;

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeaheadView<'a> {
    pub query_text: &'a str,
    pub results: &'a [Candidate],
    pub highlighted: Option<usize>,
    pub panel_visible: bool,
    pub loading: bool,
    /// Show the "no results" notice instead of rows
    pub show_no_results: bool,
    /// First row drawn in the panel
    pub scroll_offset: usize,
}

pub struct TypeaheadController<H: HostField> {
    query_text: String,
    debouncer: DebounceScheduler,
    blur_grace: Timer,
    dispatcher: LookupDispatcher,
    selection: SelectionState,
    scroll: PanelScroll,
    host: H,
    /// Cleared by teardown; every event is ignored afterwards
    mounted: bool,
}

impl<H: HostField> TypeaheadController<H> {
    /// Controller with its own lookup worker
    pub fn new<P: SearchProvider>(config: &Config, provider: P, host: H) -> Self {
        let dispatcher = LookupDispatcher::spawn(provider, config.search.timeout());
        Self::with_dispatcher(&config.typeahead, dispatcher, host)
    }

    pub fn with_dispatcher(config: &TypeaheadConfig, dispatcher: LookupDispatcher, host: H) -> Self {
        Self {
            query_text: String::new(),
            debouncer: DebounceScheduler::new(config.debounce()),
            blur_grace: Timer::new(config.blur_grace()),
            dispatcher,
            selection: SelectionState::Idle,
            scroll: PanelScroll::new(config.max_visible_rows.max(1)),
            host,
            mounted: true,
        }
    }

    /// Externally controlled value. No callbacks, no lookup.
    pub fn set_text(&mut self, text: &str) {
        if !self.mounted {
            return;
        }

        self.query_text = text.to_string();
        if text.is_empty() {
            self.clear_results();
        }
    }

    /// A keystroke changed the input text
    pub fn on_input_changed(&mut self, text: &str, now: Instant) {
        if !self.mounted {
            return;
        }

        self.query_text = text.to_string();
        self.host.on_text_changed(text);

        if self.debouncer.on_input_changed(text, now) == InputDisposition::Cleared {
            self.clear_results();
        }
    }

    pub fn on_focus(&mut self) {
        if !self.mounted {
            return;
        }

        self.blur_grace.cancel();
        if self.selection.focus() {
            log::debug!("Focus re-shows {} cached candidates", self.selection.candidates().len());
        }
    }

    /// Hiding is deferred so a click that blurs the input still lands
    pub fn on_blur(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }

        self.blur_grace.arm(now);
    }

    /// Returns true when the key was consumed by the typeahead
    pub fn on_key(&mut self, key: TypeaheadKey) -> bool {
        if !self.mounted {
            return false;
        }

        match self.selection.handle_key(key) {
            KeyEffect::None => false,
            KeyEffect::Highlight(row) => {
                if let Some(row) = row {
                    self.scroll.ensure_visible(row);
                }
                true
            }
            KeyEffect::Hidden => true,
            KeyEffect::Commit(candidate) => {
                self.commit(candidate);
                true
            }
        }
    }

    /// Pointer click on a panel row (index into the full result set)
    pub fn on_row_clicked(&mut self, row: usize) -> bool {
        if !self.mounted {
            return false;
        }

        match self.selection.click(row) {
            Some(candidate) => {
                self.commit(candidate);
                true
            }
            None => false,
        }
    }

    /// Fire due timers. Returns true when anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }

        let mut changed = false;

        if let Some(query) = self.debouncer.poll(now) {
            self.dispatcher.dispatch(&query);
            changed = true;
        }

        if self.blur_grace.fire(now) {
            changed |= self.selection.hide();
        }

        changed
    }

    /// Apply finished lookups. Returns true when anything changed.
    pub fn poll_lookups(&mut self) -> bool {
        if !self.mounted {
            return false;
        }

        let outcomes = self.dispatcher.poll();
        let changed = !outcomes.is_empty();

        for outcome in outcomes {
            match outcome {
                LookupOutcome::Found { candidates, .. } => {
                    self.selection
                        .show_results(candidates, self.query_text.is_empty());
                    self.scroll.reset();
                }
                LookupOutcome::NoResults { .. } | LookupOutcome::Failed { .. } => {
                    self.selection.show_failure(self.query_text.is_empty());
                    self.scroll.reset();
                }
            }
        }

        changed
    }

    /// Earliest pending timer deadline, for sizing the event loop's wait
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.mounted {
            return None;
        }

        match (self.debouncer.deadline(), self.blur_grace.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Time left until the next timer fires, if any
    pub fn time_until_next_deadline(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// The panel was laid out with room for `rows` rows
    pub fn set_panel_rows(&mut self, rows: usize) {
        let row_count = self.selection.candidates().len();
        self.scroll.set_viewport(rows, row_count);
        if let Some(row) = self.selection.highlighted() {
            self.scroll.ensure_visible(row);
        }
    }

    pub fn view(&self) -> TypeaheadView<'_> {
        let loading = self.dispatcher.is_loading();
        TypeaheadView {
            query_text: &self.query_text,
            results: self.selection.candidates(),
            highlighted: self.selection.highlighted(),
            panel_visible: self.selection.is_panel_visible(),
            loading,
            show_no_results: matches!(self.selection, SelectionState::Empty)
                && !loading
                && !self.query_text.is_empty(),
            scroll_offset: self.scroll.offset(),
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Cancel both timers and stop the worker. Idempotent.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }

        log::debug!("Typeahead teardown");
        self.mounted = false;
        self.debouncer.cancel();
        self.blur_grace.cancel();
        self.dispatcher.shutdown();
    }

    fn commit(&mut self, candidate: Candidate) {
        log::debug!("Committing {}", candidate.symbol);

        self.blur_grace.cancel();
        self.debouncer.cancel();
        self.dispatcher.invalidate();

        self.query_text = candidate.symbol.clone();
        self.selection.clear();
        self.scroll.reset();

        self.host.on_text_changed(&candidate.symbol);
        self.host.on_candidate_committed(&candidate);
    }

    fn clear_results(&mut self) {
        self.debouncer.cancel();
        self.dispatcher.invalidate();
        self.selection.clear();
        self.scroll.reset();
    }
}

impl<H: HostField> Drop for TypeaheadController<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
