//! Boundary glue between encoded images, the result sink and the pipeline.
//!
//! - [`load_gray`]: read a PNG/JPEG/etc. from disk into an owned 8-bit gray buffer.
//! - [`decode_gray`]: decode an in-memory encoded byte buffer (e.g. fetched
//!   from object storage by the caller) into the same.
//! - [`write_json_file`]: pretty-print a serializable value to disk.
//!
//! Decode failures and zero-area inputs surface as [`PlanError::Decode`]
//! before any detection stage runs.

use super::GrayBuffer;
use crate::error::PlanError;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_gray(path: impl AsRef<Path>) -> Result<GrayBuffer, PlanError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| PlanError::Decode {
        reason: format!("failed to open {}: {e}", path.display()),
    })?;
    to_gray_buffer(img)
}

/// Decode an encoded image held in memory and convert to 8-bit grayscale.
pub fn decode_gray(bytes: &[u8]) -> Result<GrayBuffer, PlanError> {
    let img = image::load_from_memory(bytes).map_err(|e| PlanError::Decode {
        reason: format!("failed to decode buffer: {e}"),
    })?;
    to_gray_buffer(img)
}

fn to_gray_buffer(img: image::DynamicImage) -> Result<GrayBuffer, PlanError> {
    let gray = img.into_luma8();
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    if width == 0 || height == 0 {
        return Err(PlanError::Decode {
            reason: format!("zero-area image ({width}x{height})"),
        });
    }
    Ok(GrayBuffer::new(width, height, gray.into_raw()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
