mod app_events;
mod app_render;
mod app_state;
mod input_field;
mod mouse_click;
mod panel_render;


// Re-export public types
pub use app_state::{App, Focus};
pub use input_field::InputField;
