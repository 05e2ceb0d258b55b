use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::{App, Focus};
use super::panel_render;
use crate::theme;

const TITLE: &str = " tickahead ";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (title_area, input_area, body_area, status_area) =
            (layout[0], layout[1], layout[2], layout[3]);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(theme::palette::CYAN)
                    .add_modifier(Modifier::BOLD),
            ))),
            title_area,
        );

        self.render_input(frame, input_area);
        self.layout_regions.input_field = Some(input_area);

        self.render_selection(frame, body_area);
        self.render_status(frame, status_area);

        // Panel last so it draws over the body
        let bounds = Rect {
            height: frame.area().height.saturating_sub(status_area.height),
            ..frame.area()
        };
        if let Some(panel_rect) = panel_render::render_panel(self, frame, input_area, bounds) {
            self.layout_regions.results_panel = Some(panel_rect);
        }
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::InputField;
        let border_color = if focused {
            theme::input::BORDER_FOCUSED
        } else {
            theme::input::BORDER_UNFOCUSED
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(" Ticker ")
            .border_style(Style::default().fg(border_color));

        if self.typeahead.view().loading {
            block = block.title_bottom(
                Line::from(Span::styled(
                    " searching… ",
                    Style::default().fg(theme::input::LOADING),
                ))
                .right_aligned(),
            );
        }

        let textarea = &mut self.typeahead.host_mut().textarea;
        textarea.set_block(block);
        if focused {
            textarea.set_cursor_style(theme::palette::CURSOR);
        } else {
            textarea.set_cursor_style(Style::default());
        }

        frame.render_widget(&*textarea, area);
    }

    fn render_selection(&self, frame: &mut Frame, area: Rect) {
        let Some(candidate) = self.committed() else {
            return;
        };

        let line = Line::from(vec![
            Span::styled(" Selected: ", Style::default().fg(theme::palette::TEXT_DIM)),
            Span::styled(
                candidate.symbol.as_str(),
                Style::default()
                    .fg(theme::input::COMMITTED)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(candidate.name.as_str(), theme::panel::NAME),
            Span::styled(
                format!("  [{}]", candidate.kind),
                Style::default().fg(theme::palette::TEXT_DIM),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.warning {
            Some(warning) => Line::from(Span::styled(
                format!(" ⚠ {}", warning),
                Style::default().fg(theme::status::WARNING),
            )),
            None => {
                let mut spans = Vec::new();
                for (key, description) in [
                    ("↑↓", "select"),
                    ("Enter", "commit"),
                    ("Esc", "hide"),
                    ("Tab", "blur"),
                    ("Ctrl+C", "cancel"),
                ] {
                    spans.push(Span::styled(
                        format!(" {} ", key),
                        Style::default().fg(theme::status::KEY),
                    ));
                    spans.push(Span::styled(
                        format!("{} ", description),
                        Style::default().fg(theme::status::DESCRIPTION),
                    ));
                }
                Line::from(spans)
            }
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}
