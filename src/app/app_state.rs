use std::time::Instant;

use super::input_field::InputField;
use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::provider::{Candidate, SearchProvider};
use crate::typeahead::{LookupDispatcher, TypeaheadController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    /// Focus moved off the input (Tab, click elsewhere, terminal lost focus)
    Outside,
}

pub struct App {
    pub typeahead: TypeaheadController<InputField>,
    pub focus: Focus,
    pub should_quit: bool,
    /// Exited with Enter; the committed candidate is printed
    pub accepted: bool,
    /// Config problem shown on the status line
    pub warning: Option<String>,
    pub layout_regions: LayoutRegions,
    /// Panel height limit from config
    pub max_visible_rows: usize,
    needs_render: bool,
}

impl App {
    pub fn new<P: SearchProvider>(config: &Config, provider: P, initial: &str) -> Self {
        let typeahead = TypeaheadController::new(config, provider, InputField::new(initial));
        Self::with_typeahead(typeahead, config, initial)
    }

    /// App wired to an existing dispatcher (tests drive lookups by hand)
    pub fn with_dispatcher(config: &Config, dispatcher: LookupDispatcher, initial: &str) -> Self {
        let typeahead = TypeaheadController::with_dispatcher(
            &config.typeahead,
            dispatcher,
            InputField::new(initial),
        );
        Self::with_typeahead(typeahead, config, initial)
    }

    fn with_typeahead(
        mut typeahead: TypeaheadController<InputField>,
        config: &Config,
        initial: &str,
    ) -> Self {
        typeahead.set_text(initial);

        Self {
            typeahead,
            focus: Focus::InputField,
            should_quit: false,
            accepted: false,
            warning: None,
            layout_regions: LayoutRegions::new(),
            max_visible_rows: config.typeahead.max_visible_rows.max(1),
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.typeahead.host().text()
    }

    pub fn committed(&self) -> Option<&Candidate> {
        self.typeahead.host().committed()
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Fire due timers and apply finished lookups
    pub fn poll_typeahead(&mut self, now: Instant) {
        let fired = self.typeahead.tick(now);
        let applied = self.typeahead.poll_lookups();
        if fired || applied {
            self.mark_dirty();
        }
    }

    pub fn focus_input_field(&mut self) {
        if self.focus != Focus::InputField {
            self.focus = Focus::InputField;
            self.typeahead.on_focus();
            self.mark_dirty();
        }
    }

    pub fn blur_input_field(&mut self, now: Instant) {
        if self.focus == Focus::InputField {
            self.focus = Focus::Outside;
            self.typeahead.on_blur(now);
            self.mark_dirty();
        }
    }

    /// Stop timers and the lookup worker before exit
    pub fn shutdown(&mut self) {
        self.typeahead.teardown();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
