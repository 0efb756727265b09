//! Presentation of comparison results.
//!
//! The diff core never decides presentation; these renderers own escaping,
//! markers and styling.

pub mod html;
pub mod text;

pub use html::{render_html, render_html_page};
pub use text::render_text;
