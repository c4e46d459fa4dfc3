//! Rendering module.
//!
//! This module holds the raster canvas and its drawing primitives, the
//! seeded noise stream, PNG output and grid-sheet metadata.

mod canvas;
mod noise;
mod png;
mod sheet;

pub use canvas::{BBox, Canvas};
pub use noise::NoiseStream;
pub use png::{check_scale, ensure_dir, write_png, MAX_SCALE};
pub use sheet::{write_sheet_json, Frame, SheetMeta};
