// src/core/validation.rs

//! Upload preconditions. Every way a file can enter the app (typed path,
//! dropped/pasted path, command-line argument) goes through `load_upload`,
//! which in turn uses the single pure check `validate_upload`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::models::{MAX_UPLOAD_BYTES, PDF_MEDIA_TYPE, UploadedFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a PDF file only.")]
    NotPdf,
    #[error("File size must be less than 10MB.")]
    TooLarge,
}

/// Why a submitted path did not turn into an `UploadedFile`.
#[derive(Debug, Error)]
pub enum FileRejection {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("No file at {}", .0.display())]
    NotFound(PathBuf),
    #[error("{} is not a regular file.", .0.display())]
    NotAFile(PathBuf),
    #[error("Could not read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn validate_upload(media_type: &str, size: u64) -> Result<(), ValidationError> {
    if media_type != PDF_MEDIA_TYPE {
        return Err(ValidationError::NotPdf);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge);
    }
    Ok(())
}

impl UploadedFile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_upload(&self.media_type, self.size())
    }
}

/// Declares a media type from the extension, the same way a browser fills in
/// `File.type`. Content is never sniffed.
pub fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => PDF_MEDIA_TYPE,
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "rtf" => "application/rtf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

/// Turns whatever a terminal hands us on drag-and-drop into a path: trims
/// whitespace, strips one layer of matching quotes and a `file://` prefix.
pub fn normalize_dropped_path(raw: &str) -> PathBuf {
    let mut text = raw.trim();
    for quote in ['\'', '"'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            text = &text[1..text.len() - 1];
            break;
        }
    }
    let text = text.strip_prefix("file://").unwrap_or(text);
    PathBuf::from(text)
}

/// Checks type and size from metadata first, so an oversized or non-PDF file
/// is never read, then loads the content.
pub fn load_upload(path: &Path) -> Result<UploadedFile, FileRejection> {
    let metadata = std::fs::metadata(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => FileRejection::NotFound(path.to_path_buf()),
        _ => FileRejection::Unreadable { path: path.to_path_buf(), source },
    })?;
    if !metadata.is_file() {
        return Err(FileRejection::NotAFile(path.to_path_buf()));
    }

    let media_type = media_type_for(path);
    validate_upload(media_type, metadata.len())?;

    let content = std::fs::read(path)
        .map_err(|source| FileRejection::Unreadable { path: path.to_path_buf(), source })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    debug!(file = %name, bytes = content.len(), "Résumé loaded.");

    Ok(UploadedFile::new(name, media_type, content))
}
