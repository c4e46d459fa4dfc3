//! Convert-floor command implementation.
//!
//! Cuts two square regions out of a floor photo and writes them as the
//! 128×64 floor atlas.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{Result, SpriteError};
use crate::output::{display_path, Printer};
use crate::render::{write_png, Canvas};
use crate::sprites::{floor, FLOOR_ATLAS};
use crate::types::Category;

/// Cut a floor photo into the two-tile floor atlas
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Source floor image
    #[arg(required = true)]
    pub input: PathBuf,

    /// Sprite root directory
    #[arg(long, short, default_value = super::DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

/// Path of the written atlas under a sprite root.
pub fn atlas_path(root: &Path) -> PathBuf {
    root.join(Category::Tiles.dir_name())
        .join(format!("{}.png", FLOOR_ATLAS))
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<PathBuf> {
    let path = &args.input;
    let display = display_path(path);

    if !path.exists() {
        return Err(SpriteError::Input {
            message: format!("Source image not found: {}", display),
            help: Some("Pass the path of an existing floor image".to_string()),
        });
    }

    printer.status("Loading", &display);
    let source = image::open(path)
        .map_err(|e| SpriteError::Input {
            message: format!("Failed to decode {}: {}", display, e),
            help: Some("The source must be a readable image (PNG, JPEG, ...)".to_string()),
        })?
        .to_rgba8();
    let source = Canvas::from_image(source);

    let (w, h) = source.size();
    let square = floor::source_square(w, h);
    printer.info("Source", &format!("{}x{} image", w, h));
    printer.status(
        "Cropping",
        &format!("2 tiles of {0}x{0} -> {1}x{1}", square, floor::TILE_SIZE),
    );

    let atlas = floor::atlas_from_source(&source)?;

    let out = atlas_path(&args.output);
    write_png(&atlas, &out, 1)?;
    printer.success("Finished", &display_path(&out));

    Ok(out)
}
