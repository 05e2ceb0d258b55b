//! Screen regions for mouse hit testing
//!
//! `LayoutRegions` records where the input and the results panel were drawn
//! on the last frame; `region_at()` maps a click back to one of them.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
