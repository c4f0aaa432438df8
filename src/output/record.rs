//! Structured page record output
//!
//! One JSON object per accepted page. Field declaration order is the sorted
//! key order (tags, text, url), and serde_json writes non-ASCII text
//! verbatim, so the on-disk format has stable sorted keys with the original
//! CJK content preserved.

use serde::Serialize;
use std::path::Path;

/// The persisted record for one accepted forum page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageRecord {
    pub tags: Vec<String>,
    pub text: String,
    pub url: String,
}

/// Serializes a record to the given path as UTF-8 JSON
pub fn write_record(path: &Path, record: &PageRecord) -> crate::Result<()> {
    let json = serde_json::to_string(record)?;
    std::fs::write(path, json)?;
    Ok(())
}
