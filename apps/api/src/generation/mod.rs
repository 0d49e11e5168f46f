// Resume generation: data pools, record building, content strategies,
// batch orchestration, ZIP packaging and the HTTP handlers on top.
// Gemini calls go through llm_client only.

pub mod archive;
pub mod batch;
pub mod builder;
pub mod content;
pub mod handlers;
pub mod pools;
pub mod validation;
