use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::provider::Candidate;
use crate::theme;
use crate::typeahead::HostField;

/// Single-line ticker input; the host the typeahead commits into
pub struct InputField {
    pub textarea: TextArea<'static>,
    committed: Option<Candidate>,
}

impl Default for InputField {
    fn default() -> Self {
        Self::new("")
    }
}

impl InputField {
    pub fn new(initial: &str) -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Ticker ")
                .border_style(Style::default().fg(theme::input::BORDER_UNFOCUSED)),
        );

        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::palette::CURSOR);
        textarea.insert_str(initial);

        Self {
            textarea,
            committed: None,
        }
    }

    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Last candidate committed into this field
    pub fn committed(&self) -> Option<&Candidate> {
        self.committed.as_ref()
    }

    fn replace_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::Head);
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }
}

impl HostField for InputField {
    fn on_text_changed(&mut self, text: &str) {
        // Keystrokes already edited the textarea; only commits differ
        if self.text() != text {
            self.replace_text(text);
        }
    }

    fn on_candidate_committed(&mut self, candidate: &Candidate) {
        self.committed = Some(candidate.clone());
    }
}
