pub mod popup;
pub mod scrollbar;
