use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app_state::App;
use crate::provider::{AssetKind, Candidate};
use crate::theme;
use crate::widgets::{popup, scrollbar};

const MAX_PANEL_WIDTH: u16 = 60;
const PANEL_BORDER_HEIGHT: u16 = 2;
const PANEL_PADDING: u16 = 4;
const PANEL_OFFSET_X: u16 = 1;
const NO_RESULTS_TEXT: &str = "No matching tickers";
const HIGHLIGHT_MARKER: &str = "► ";

/// Draw the results panel under the input. Returns its area when drawn.
pub fn render_panel(app: &mut App, frame: &mut Frame, input_area: Rect, bounds: Rect) -> Option<Rect> {
    let max_visible_rows = app.max_visible_rows;

    let view = app.typeahead.view();
    if !view.panel_visible {
        return None;
    }

    let content_rows = if view.show_no_results {
        1
    } else if view.results.is_empty() {
        // Empty state while the next lookup is still out
        return None;
    } else {
        view.results.len().min(max_visible_rows)
    };

    let content_width = if view.show_no_results {
        NO_RESULTS_TEXT.len()
    } else {
        view.results.iter().map(row_width).max().unwrap_or(0)
    };
    let panel_width = (content_width as u16 + PANEL_PADDING).min(MAX_PANEL_WIDTH);
    let panel_height = content_rows as u16 + PANEL_BORDER_HEIGHT;

    let panel_area = popup::popup_below_anchor(
        input_area,
        bounds,
        panel_width,
        panel_height,
        PANEL_OFFSET_X,
    );
    if panel_area.height <= PANEL_BORDER_HEIGHT {
        return None;
    }

    let show_no_results = view.show_no_results;
    let inner_rows = (panel_area.height - PANEL_BORDER_HEIGHT) as usize;

    popup::clear_area(frame, panel_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::panel::BORDER))
        .style(Style::default().bg(theme::panel::BACKGROUND));

    if show_no_results {
        frame.render_widget(
            Paragraph::new(Span::styled(NO_RESULTS_TEXT, theme::panel::NO_RESULTS)).block(block),
            panel_area,
        );
        return Some(panel_area);
    }

    // The terminal may have less room than configured
    app.typeahead.set_panel_rows(inner_rows);
    let view = app.typeahead.view();

    let label_width = view
        .results
        .iter()
        .map(|candidate| candidate.symbol.len())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = view
        .results
        .iter()
        .enumerate()
        .skip(view.scroll_offset)
        .take(inner_rows)
        .map(|(i, candidate)| {
            ListItem::new(candidate_line(candidate, label_width, view.highlighted == Some(i)))
        })
        .collect();

    let title = format!(" {} ", view.results.len());
    frame.render_widget(
        List::new(items).block(block.title(Line::from(title).right_aligned())),
        panel_area,
    );

    scrollbar::render_vertical_scrollbar(
        frame,
        panel_area,
        view.results.len(),
        inner_rows,
        view.scroll_offset,
        theme::panel::SCROLLBAR,
    );

    Some(panel_area)
}

fn row_width(candidate: &Candidate) -> usize {
    HIGHLIGHT_MARKER.chars().count()
        + candidate.symbol.len()
        + 2
        + candidate.name.chars().count()
        + candidate.kind.to_string().len()
        + 3
}

fn candidate_line(candidate: &Candidate, label_width: usize, highlighted: bool) -> Line<'static> {
    let kind_color = match candidate.kind {
        AssetKind::Stock => theme::panel::KIND_STOCK,
        AssetKind::Crypto => theme::panel::KIND_CRYPTO,
        AssetKind::Other => theme::panel::KIND_OTHER,
    };

    let marker = if highlighted {
        Span::styled(
            HIGHLIGHT_MARKER,
            Style::default().fg(theme::panel::HIGHLIGHT_MARKER),
        )
    } else {
        Span::raw("  ")
    };

    let line = Line::from(vec![
        marker,
        Span::styled(
            format!("{:<width$}", candidate.symbol, width = label_width),
            theme::panel::SYMBOL,
        ),
        Span::raw("  "),
        Span::styled(candidate.name.clone(), theme::panel::NAME),
        Span::styled(format!(" [{}]", candidate.kind), Style::default().fg(kind_color)),
    ]);

    if highlighted {
        line.style(Style::default().bg(theme::panel::HIGHLIGHT_BG))
    } else {
        line
    }
}

#[cfg(test)]
#[path = "panel_render_tests.rs"]
mod panel_render_tests;
