//! Rendered areas of UI components

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    ResultsPanel,
}

/// Updated during each render pass. The panel is `None` while hidden.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub results_panel: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
