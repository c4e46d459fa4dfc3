//! PNG output for finished canvases.
//!
//! Writes a canvas to disk with optional integer scaling, creating parent
//! directories on the way.

use std::fs;
use std::path::Path;

use crate::error::{Result, SpriteError};

use super::Canvas;

/// Largest integer scale factor accepted for output.
pub const MAX_SCALE: u32 = 64;

/// Validate an output scale factor. Zero is treated as 1.
pub fn check_scale(scale: u32) -> Result<u32> {
    if scale > MAX_SCALE {
        return Err(SpriteError::Input {
            message: format!("Scale factor {} is too large", scale),
            help: Some(format!("Use a scale between 1 and {}", MAX_SCALE)),
        });
    }
    Ok(scale.max(1))
}

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The canvas to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    let scale = check_scale(scale)?;
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let scaled;
    let canvas = if scale > 1 {
        scaled = canvas.upscale(scale);
        &scaled
    } else {
        canvas
    };

    canvas
        .image()
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| SpriteError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}

/// Create a directory and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| SpriteError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}
