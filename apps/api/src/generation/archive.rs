//! In-memory ZIP assembly. No filesystem access.

use std::io::{Cursor, Write};

use thiserror::Error;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("duplicate archive entry '{0}'")]
    DuplicateEntry(String),
}

/// Packs `(name, bytes)` pairs, in order, into a Deflate-compressed ZIP.
pub fn build_zip<'a, I>(entries: I) -> Result<Vec<u8>, ArchiveError>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut seen = std::collections::HashSet::new();

    for (name, bytes) in entries {
        if !seen.insert(name) {
            return Err(ArchiveError::DuplicateEntry(name.to_string()));
        }
        writer.start_file(name, options)?;
        writer.write_all(bytes)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
