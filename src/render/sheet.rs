//! Frame metadata for grid sheets.
//!
//! Describes the fixed cells of an atlas or spritesheet and writes them in
//! TexturePacker-compatible JSON Hash format for game engine interop.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SpriteError};

/// A frame in the sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Sprite sheet metadata.
#[derive(Debug, Clone)]
pub struct SheetMeta {
    pub frames: Vec<Frame>,
    pub image: String,
    pub size: (u32, u32),
    pub scale: u32,
}

impl SheetMeta {
    /// Describe a uniform grid of `cell` sized frames.
    ///
    /// Names are assigned row-major; the grid is `cols` wide and as many rows
    /// tall as the names need.
    pub fn grid(image: &str, cell: (u32, u32), cols: u32, names: &[String], scale: u32) -> Self {
        let cols = cols.max(1);
        let (cw, ch) = cell;
        let frames: Vec<Frame> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let i = i as u32;
                Frame {
                    name: name.clone(),
                    x: (i % cols) * cw,
                    y: (i / cols) * ch,
                    w: cw,
                    h: ch,
                }
            })
            .collect();
        let rows = (names.len() as u32).div_ceil(cols);
        let width = if names.is_empty() { 0 } else { cols.min(names.len() as u32) * cw };

        Self {
            frames,
            image: image.to_string(),
            size: (width, rows * ch),
            scale: scale.max(1),
        }
    }
}

/// Write sheet metadata as TexturePacker-compatible JSON Hash format.
pub fn write_sheet_json(meta: &SheetMeta, path: &Path) -> Result<()> {
    let output = TexturePackerJson::from_meta(meta);
    let json = serde_json::to_string_pretty(&output).map_err(|e| SpriteError::Encode {
        message: format!("Failed to serialize sheet metadata: {}", e),
    })?;
    fs::write(path, json).map_err(|e| SpriteError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write sheet metadata: {}", e),
    })?;
    Ok(())
}

// --- TexturePacker JSON serialization types ---

#[derive(Serialize)]
struct TexturePackerJson {
    frames: BTreeMap<String, TPFrame>,
    meta: TPMeta,
}

#[derive(Serialize)]
struct TPFrame {
    frame: TPRect,
    rotated: bool,
    trimmed: bool,
    #[serde(rename = "spriteSourceSize")]
    sprite_source_size: TPRect,
    #[serde(rename = "sourceSize")]
    source_size: TPSize,
}

#[derive(Serialize)]
struct TPRect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPSize {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPMeta {
    app: String,
    version: String,
    image: String,
    size: TPSize,
    scale: String,
}

impl TexturePackerJson {
    fn from_meta(meta: &SheetMeta) -> Self {
        let s = meta.scale;
        let mut frames = BTreeMap::new();
        for f in &meta.frames {
            frames.insert(
                f.name.clone(),
                TPFrame {
                    frame: TPRect {
                        x: f.x * s,
                        y: f.y * s,
                        w: f.w * s,
                        h: f.h * s,
                    },
                    rotated: false,
                    trimmed: false,
                    sprite_source_size: TPRect {
                        x: 0,
                        y: 0,
                        w: f.w * s,
                        h: f.h * s,
                    },
                    source_size: TPSize { w: f.w * s, h: f.h * s },
                },
            );
        }

        TexturePackerJson {
            frames,
            meta: TPMeta {
                app: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                image: meta.image.clone(),
                size: TPSize {
                    w: meta.size.0 * s,
                    h: meta.size.1 * s,
                },
                scale: meta.scale.to_string(),
            },
        }
    }
}
