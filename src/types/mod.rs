//! Core domain types.
//!
//! - `Colour` - RGBA colour values with clamped darken/lighten arithmetic
//! - `Category` - the output directory a sprite belongs to

mod category;
mod colour;

pub use category::Category;
pub use colour::{clamp, Colour};
