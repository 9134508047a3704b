//! File export collaborator.
//!
//! # Responsibility
//! - Fix the filename and MIME conventions for document exports.
//! - Write prepared exports into a caller-chosen directory.
//!
//! # Invariants
//! - Export content is produced by the services; this module never derives
//!   artifacts itself.

use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Filename for the Markdown ruleset export.
pub const RULESET_EXPORT_FILENAME: &str = "instructional-ruleset.md";
/// Basename for compendium exports; the format supplies the extension.
pub const COMPENDIUM_EXPORT_BASENAME: &str = "knowledge-compendium";

/// One prepared export: filename convention, MIME type and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// Writes one export into `dir`, creating the directory when missing.
///
/// Returns the full path of the written file.
pub fn write_export(dir: impl AsRef<Path>, file: &ExportFile) -> io::Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(&file.filename);
    fs::write(&path, &file.content)?;
    info!(
        "event=export_write module=export status=ok filename={} bytes={}",
        file.filename,
        file.content.len()
    );
    Ok(path)
}
