// Page geometry, font metrics and text fitting for the PDF renderer.

pub mod font_metrics;
pub mod sanitize;
pub mod wrap;

// Re-export the public API consumed by other modules (renderer, config, state).
pub use font_metrics::{default_page_config, FontFace, PageConfig, PaperSize};
pub use wrap::wrap_text;
