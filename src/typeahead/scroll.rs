//! Scroll position of the results panel
//!
//! Only the panel scrolls; the surrounding page never moves when a row is
//! brought into view.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelScroll {
    /// First visible row
    offset: usize,
    /// Rows that fit in the panel (0 = not laid out yet)
    viewport_rows: usize,
}

impl PanelScroll {
    pub fn new(viewport_rows: usize) -> Self {
        Self {
            offset: 0,
            viewport_rows,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Update the panel height, keeping the offset valid for `row_count`
    pub fn set_viewport(&mut self, viewport_rows: usize, row_count: usize) {
        self.viewport_rows = viewport_rows;
        let max_offset = row_count.saturating_sub(viewport_rows);
        self.offset = self.offset.min(max_offset);
    }

    /// Scroll the minimum amount that puts `row` inside the viewport
    ///
    /// Nothing moves when all rows fit.
    pub fn ensure_visible(&mut self, row: usize) {
        if self.viewport_rows == 0 {
            return;
        }

        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.viewport_rows {
            self.offset = row + 1 - self.viewport_rows;
        }
    }

    pub fn is_row_visible(&self, row: usize) -> bool {
        row >= self.offset && row < self.offset + self.viewport_rows
    }

    /// Back to the top (new result set)
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
