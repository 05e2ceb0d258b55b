//! Mouse click handling
//!
//! A click on a panel row commits it, a click on the input focuses it, and a
//! click anywhere else blurs the input.

use std::time::Instant;

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;
use crate::widgets::popup::inset_rect;

pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent, now: Instant) {
    match region {
        Some(Region::ResultsPanel) => click_results_panel(app, mouse),
        Some(Region::InputField) => app.focus_input_field(),
        None => app.blur_input_field(now),
    }
}

fn click_results_panel(app: &mut App, mouse: MouseEvent) {
    let Some(panel_rect) = app.layout_regions.results_panel else {
        return;
    };

    // Rows live inside the border
    let inner = inset_rect(panel_rect, 1, 1);
    if mouse.row < inner.y || mouse.row >= inner.y.saturating_add(inner.height) {
        return;
    }

    let relative_y = (mouse.row - inner.y) as usize;
    let row = app.typeahead.view().scroll_offset + relative_y;

    if app.typeahead.on_row_clicked(row) {
        app.focus_input_field();
        app.mark_dirty();
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
