use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::{App, Focus};
use super::mouse_click;
use crate::layout::region_at;
use crate::typeahead::TypeaheadKey;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);
/// Poll faster while a lookup is out so results show up promptly
const LOOKUP_POLL_INTERVAL: Duration = Duration::from_millis(20);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_typeahead(Instant::now());

        if event::poll(self.poll_timeout(Instant::now()))? {
            let event = event::read()?;
            self.handle_event(event, Instant::now());
        }
        Ok(())
    }

    /// How long the event loop may block before a timer is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let mut timeout = EVENT_POLL_TIMEOUT;
        if self.typeahead.view().loading {
            timeout = timeout.min(LOOKUP_POLL_INTERVAL);
        }
        if let Some(until_deadline) = self.typeahead.time_until_next_deadline(now) {
            timeout = timeout.min(until_deadline);
        }
        timeout
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event, now);
            }
            Event::Paste(text) => {
                self.handle_paste_event(&text, now);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let region = region_at(&self.layout_regions, mouse.column, mouse.row);
                mouse_click::handle_click(self, region, mouse, now);
            }
            Event::FocusGained => self.focus_input_field(),
            Event::FocusLost => self.blur_input_field(now),
            Event::Resize(_, _) => self.mark_dirty(),
            _ => {}
        }
    }

    fn handle_paste_event(&mut self, text: &str, now: Instant) {
        self.focus_input_field();

        // Single-line field: drop line breaks
        let flattened: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.typeahead.host_mut().textarea.insert_str(&flattened);
        self.text_edited(now);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            match self.focus {
                Focus::InputField => self.blur_input_field(now),
                Focus::Outside => self.focus_input_field(),
            }
            return;
        }

        // Any other key brings focus back to the input
        self.focus_input_field();
        self.handle_input_field_key(key, now);
    }

    fn handle_input_field_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Down => {
                self.typeahead.on_key(TypeaheadKey::ArrowDown);
            }
            KeyCode::Up => {
                self.typeahead.on_key(TypeaheadKey::ArrowUp);
            }
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Char('m') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.handle_enter()
            }
            KeyCode::Esc => {
                if !self.typeahead.on_key(TypeaheadKey::Escape) {
                    self.should_quit = true;
                }
            }
            _ => {
                if self.typeahead.host_mut().textarea.input(key) {
                    self.text_edited(now);
                }
            }
        }
    }

    /// Enter commits from the panel; with nothing to commit it accepts and exits
    fn handle_enter(&mut self) {
        if !self.typeahead.on_key(TypeaheadKey::Enter) {
            self.accepted = true;
            self.should_quit = true;
        }
    }

    fn text_edited(&mut self, now: Instant) {
        let text = self.query().to_string();
        if text != self.typeahead.query_text() {
            self.typeahead.on_input_changed(&text, now);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
