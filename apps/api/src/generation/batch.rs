//! Batch orchestration: build N records, render each, zip the PDFs.
//!
//! Records are built one after another (Gemini calls are awaited in turn),
//! then rendered and zipped sequentially on the blocking pool.
//!
//! Failure policy is hard-fail: the first render or archive error aborts the
//! whole batch and no partial archive is returned.

use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::archive::build_zip;
use crate::generation::builder::ResumeBuilder;
use crate::layout::PageConfig;
use crate::models::resume::ResumeRecord;
use crate::render::render_resume;

/// One file inside the archive.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub filename: String,
    pub size: usize,
}

/// Result of one generation request.
#[derive(Debug)]
pub struct Batch {
    pub entries: Vec<BatchEntry>,
    pub archive: Vec<u8>,
}

impl Batch {
    pub fn resume_count(&self) -> usize {
        self.entries.len()
    }

    pub fn archive_size(&self) -> usize {
        self.archive.len()
    }
}

/// Builds `count` records and packages them. `count` is validated by the caller.
pub async fn generate_batch(
    builder: &ResumeBuilder,
    count: usize,
    page: &PageConfig,
    rng: &mut StdRng,
) -> Result<Batch, AppError> {
    info!("Generating batch of {count} resumes ({} content)", builder.backend());

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let record = builder.build(rng).await;
        debug!("Built resume {}/{count}: {}", i + 1, record.personal.name);
        records.push(record);
    }

    let page = page.clone();
    let batch = tokio::task::spawn_blocking(move || package_batch(records, &page))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Render task failed: {e}")))??;

    info!(
        "Batch complete: {} resumes, {} bytes",
        batch.resume_count(),
        batch.archive_size()
    );
    Ok(batch)
}

/// Renders every record and zips the results. Consumes the records so each one
/// is dropped as soon as it has been rendered.
pub fn package_batch(records: Vec<ResumeRecord>, page: &PageConfig) -> Result<Batch, AppError> {
    let mut files: Vec<(String, Vec<u8>)> = Vec::with_capacity(records.len());

    for (i, record) in records.into_iter().enumerate() {
        let filename = resume_filename(i + 1, &record.personal.name);
        let pdf = render_resume(&record, page)?;
        debug!("Rendered {filename} ({} bytes)", pdf.len());
        files.push((filename, pdf));
    }

    let archive = build_zip(
        files
            .iter()
            .map(|(name, bytes)| (name.as_str(), bytes.as_slice())),
    )?;

    let entries = files
        .into_iter()
        .map(|(filename, bytes)| BatchEntry {
            filename,
            size: bytes.len(),
        })
        .collect();

    Ok(Batch { entries, archive })
}

/// `resume_{index:03}_{Safe_Name}.pdf`. The index makes names unique.
pub fn resume_filename(index: usize, name: &str) -> String {
    let safe: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let safe = safe.trim_end().replace(' ', "_");
    if safe.is_empty() {
        format!("resume_{index:03}.pdf")
    } else {
        format!("resume_{index:03}_{safe}.pdf")
    }
}
