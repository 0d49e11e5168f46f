// PDF rendering of resume records.
// Rendering is synchronous and CPU-bound: callers run it on the blocking pool.

pub mod pdf;

use thiserror::Error;

pub use pdf::render_resume;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("resume is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("PDF backend error: {0}")]
    Pdf(String),
}
