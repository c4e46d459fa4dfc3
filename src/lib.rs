//! cauldron-sprites - Pixel-art sprite generator
//!
//! A library for procedurally drawing the Cozy Cauldron sprite set (floor
//! tiles, machines, items and the player walk cycle) and writing it out as
//! PNG files.

pub mod cli;
pub mod error;
pub mod output;
pub mod render;
pub mod sprites;
pub mod types;

pub use error::{Result, SpriteError};
pub use render::{write_png, write_sheet_json, BBox, Canvas, NoiseStream, SheetMeta};
pub use sprites::{catalog, Renderer, Sprite};
pub use types::{clamp, Category, Colour};
