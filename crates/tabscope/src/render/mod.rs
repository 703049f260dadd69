//! Markup rendering.

mod html;

pub use html::{PREVIEW_CLASSES, STATS_CLASSES, escape_html, render_description, render_preview};
