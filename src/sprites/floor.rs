//! Floor atlas: two 64×64 wood tiles side by side.
//!
//! The atlas is either drawn procedurally (plank seams plus seeded grain) or
//! cut out of a source photo.

use crate::error::{Result, SpriteError};
use crate::render::{Canvas, NoiseStream};
use crate::types::Colour;

/// Edge length of one floor tile.
pub const TILE_SIZE: u32 = 64;

/// Atlas dimensions (two tiles in a row).
pub const ATLAS_SIZE: (u32, u32) = (TILE_SIZE * 2, TILE_SIZE);

/// Default seed for the wood grain.
pub const DEFAULT_SEED: u64 = 42;

const BASES: [Colour; 2] = [
    Colour::rgb(140, 100, 60), // medium oak
    Colour::rgb(130, 90, 55),  // slightly darker
];

const SEAM_ROWS: [i32; 3] = [15, 31, 47];
const PLANK_BANDS: [(i32, i32); 4] = [(0, 14), (16, 30), (32, 46), (48, 63)];

const GRAIN_PIXELS: usize = 50;
const SHEEN_PIXELS: usize = 25;

/// Draw the procedural wood floor atlas.
pub fn floor_atlas(seed: u64) -> Canvas {
    let mut img = Canvas::new(ATLAS_SIZE.0, ATLAS_SIZE.1);
    for (tile, base) in BASES.into_iter().enumerate() {
        draw_tile(&mut img, tile, base, seed);
    }
    img
}

fn draw_tile(img: &mut Canvas, tile: usize, base: Colour, seed: u64) {
    let size = TILE_SIZE as i32;
    let ox = tile as i32 * size;

    img.rect([ox, 0, ox + size - 1, size - 1], base);

    let plank = base.darken(0.75);
    for y in SEAM_ROWS {
        img.line((ox, y), (ox + size - 1, y), plank);
    }

    // Joints shift per band so neighbouring planks never line up.
    for (row, (y0, y1)) in PLANK_BANDS.into_iter().enumerate() {
        let x = ox + stagger_offset(row, tile);
        img.line((x, y0), (x, y1), plank);
    }

    let mut rng = NoiseStream::for_tile(seed, tile as u64);
    for _ in 0..GRAIN_PIXELS {
        let (x, y) = random_pixel(&mut rng, ox);
        let grain = base.darken(rng.uniform(0.85, 0.95));
        img.point(x, y, grain);
    }
    for _ in 0..SHEEN_PIXELS {
        let (x, y) = random_pixel(&mut rng, ox);
        let sheen = base.lighten(rng.uniform(1.05, 1.15));
        img.point(x, y, sheen);
    }
}

/// Horizontal offset of the vertical joint in one plank band.
pub fn stagger_offset(row: usize, tile: usize) -> i32 {
    ((row * 20 + tile * 10) % TILE_SIZE as usize) as i32
}

fn random_pixel(rng: &mut NoiseStream, ox: i32) -> (i32, i32) {
    let max = TILE_SIZE - 1;
    let x = ox + rng.int_inclusive(0, max) as i32;
    let y = rng.int_inclusive(0, max) as i32;
    (x, y)
}

/// Side length of the square regions cut from a `width × height` source.
pub fn source_square(width: u32, height: u32) -> u32 {
    (width / 2).min(height)
}

/// Build the atlas from a source photo.
///
/// Two `square × square` regions are taken, one at the origin and one
/// directly to its right, each scaled to a tile with nearest-neighbour
/// sampling.
pub fn atlas_from_source(source: &Canvas) -> Result<Canvas> {
    let (w, h) = source.size();
    let square = source_square(w, h);
    if square == 0 {
        return Err(SpriteError::Input {
            message: format!("Source image {}x{} is too small to cut two tiles from", w, h),
            help: Some("Use an image at least 2 pixels wide and 1 pixel tall".to_string()),
        });
    }

    let left = source
        .crop(0, 0, square, square)
        .resize_nearest(TILE_SIZE, TILE_SIZE);
    let right = source
        .crop(square, 0, square, square)
        .resize_nearest(TILE_SIZE, TILE_SIZE);

    let mut atlas = Canvas::new(ATLAS_SIZE.0, ATLAS_SIZE.1);
    atlas.paste(&left, 0, 0);
    atlas.paste(&right, TILE_SIZE as i64, 0);
    Ok(atlas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_atlas_dimensions() {
        assert_eq!(floor_atlas(DEFAULT_SEED).size(), (128, 64));
    }

    #[test]
    fn test_atlas_is_deterministic() {
        assert_eq!(floor_atlas(42), floor_atlas(42));
    }

    #[test]
    fn test_seed_changes_grain() {
        assert_ne!(floor_atlas(42), floor_atlas(43));
    }

    #[test]
    fn test_atlas_is_opaque() {
        let atlas = floor_atlas(DEFAULT_SEED);
        assert!(atlas.image().pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_stagger_offsets() {
        assert_eq!(
            (0..4).map(|r| stagger_offset(r, 0)).collect::<Vec<_>>(),
            vec![0, 20, 40, 60]
        );
        assert_eq!(
            (0..4).map(|r| stagger_offset(r, 1)).collect::<Vec<_>>(),
            vec![10, 30, 50, 6]
        );
    }

    #[test]
    fn test_seam_row_colour() {
        let atlas = floor_atlas(DEFAULT_SEED);
        let plank = BASES[0].darken(0.75);
        // The row 15 seam may be speckled by grain, but most of it survives.
        let seam = (0..64)
            .filter(|&x| atlas.get(x, 15) == Some(plank))
            .count();
        assert!(seam > 48, "only {seam} seam pixels");
    }

    #[test]
    fn test_noise_stays_in_its_tile() {
        // Tile 1 pixels only ever take tile 1 shades.
        let atlas = floor_atlas(DEFAULT_SEED);
        let base = BASES[1];
        for x in 64..128 {
            for y in 0..64 {
                let c = atlas.get(x, y).unwrap();
                assert!(c.r <= base.lighten(1.15).r && c.r >= base.darken(0.75).r);
            }
        }
    }

    #[test]
    fn test_source_square() {
        assert_eq!(source_square(200, 100), 100);
        assert_eq!(source_square(300, 100), 100);
        assert_eq!(source_square(100, 300), 50);
        assert_eq!(source_square(1, 10), 0);
    }

    #[test]
    fn test_atlas_from_source_halves() {
        // 200×100: red left square, blue right square.
        let mut source = Canvas::filled(200, 100, Colour::rgb(255, 0, 0));
        source.rect([100, 0, 199, 99], Colour::rgb(0, 0, 255));

        let atlas = atlas_from_source(&source).unwrap();
        assert_eq!(atlas.size(), (128, 64));
        for y in 0..64 {
            for x in 0..64 {
                assert_eq!(atlas.get(x, y), Some(Colour::rgb(255, 0, 0)));
                assert_eq!(atlas.get(x + 64, y), Some(Colour::rgb(0, 0, 255)));
            }
        }
    }

    #[test]
    fn test_atlas_from_source_ignores_extra_rows() {
        // 200×150: rows below 100 are never sampled.
        let mut source = Canvas::filled(200, 150, Colour::WHITE);
        source.rect([0, 100, 199, 149], Colour::BLACK);

        let atlas = atlas_from_source(&source).unwrap();
        assert!(atlas.image().pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_atlas_from_tiny_source_fails() {
        let err = atlas_from_source(&Canvas::new(1, 1)).unwrap_err();
        assert!(matches!(err, SpriteError::Input { .. }));
    }
}
