//! Generate-sprites command implementation.
//!
//! Draws every catalog sprite and writes it under the sprite root, one
//! sub-directory per category.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::{check_scale, ensure_dir, write_png, write_sheet_json, SheetMeta, MAX_SCALE};
use crate::sprites::{catalog, floor, player, Sprite, FLOOR_ATLAS, PLAYER_SHEET};
use crate::types::Category;

/// Draw the full sprite set
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Sprite root directory
    #[arg(long, short, default_value = super::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Seed for the floor grain
    #[arg(long, default_value_t = floor::DEFAULT_SEED)]
    pub seed: u64,

    /// Scale factor for output (integer upscaling)
    #[arg(
        long,
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64)
    )]
    pub scale: u32,

    /// Also write TexturePacker JSON for the floor atlas and player sheet
    #[arg(long)]
    pub meta: bool,
}

/// Generate every sprite. Returns the written PNG paths in catalog order.
pub fn run(args: GenerateArgs, printer: &Printer) -> Result<Vec<PathBuf>> {
    let scale = check_scale(args.scale)?;
    for category in Category::ALL {
        ensure_dir(&args.output.join(category.dir_name()))?;
    }

    let sprites = catalog(args.seed);
    printer.status(
        "Generating",
        &format!("{} (seed {})", plural(sprites.len(), "sprite", "sprites"), args.seed),
    );

    let mut written = Vec::with_capacity(sprites.len());
    for sprite in &sprites {
        let path = write_sprite(sprite, &args.output, scale)?;
        printer.status("Writing", &sprite.relative_path().display().to_string());
        written.push(path);
    }

    if args.meta {
        for meta_path in write_metadata(&args.output, scale)? {
            printer.status("Writing", &display_path(&meta_path));
        }
    }

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(written.len(), "sprite", "sprites"),
            display_path(&args.output)
        ),
    );

    Ok(written)
}

fn write_sprite(sprite: &Sprite, root: &Path, scale: u32) -> Result<PathBuf> {
    let path = root.join(sprite.relative_path());
    write_png(&sprite.render(), &path, scale)?;
    Ok(path)
}

/// Write frame metadata for the two grid images.
fn write_metadata(root: &Path, scale: u32) -> Result<Vec<PathBuf>> {
    let floor_names: Vec<String> = (0..2).map(|i| format!("floor_{}", i)).collect();
    let sheets = [
        (
            Category::Tiles,
            FLOOR_ATLAS,
            SheetMeta::grid(
                &format!("{}.png", FLOOR_ATLAS),
                (floor::TILE_SIZE, floor::TILE_SIZE),
                2,
                &floor_names,
                scale,
            ),
        ),
        (
            Category::Player,
            PLAYER_SHEET,
            SheetMeta::grid(
                &format!("{}.png", PLAYER_SHEET),
                player::FRAME_SIZE,
                player::WALK_FRAMES,
                &player::frame_names(),
                scale,
            ),
        ),
    ];

    let mut paths = Vec::with_capacity(sheets.len());
    for (category, name, meta) in &sheets {
        let path = root
            .join(category.dir_name())
            .join(format!("{}.json", name));
        write_sheet_json(meta, &path)?;
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(output: PathBuf) -> GenerateArgs {
        GenerateArgs {
            output,
            seed: floor::DEFAULT_SEED,
            scale: 1,
            meta: false,
        }
    }

    #[test]
    fn test_generate_writes_every_sprite() {
        let dir = tempdir().unwrap();
        let written = run(args(dir.path().to_path_buf()), &Printer::new()).unwrap();

        assert_eq!(written.len(), 42);
        for path in &written {
            assert!(path.exists(), "{}", path.display());
        }
        assert!(dir.path().join("machines/auto_seller.png").exists());
        assert!(dir.path().join("items/bottle_overlay.png").exists());
        assert!(!dir.path().join("player/player_spritesheet.json").exists());
    }

    #[test]
    fn test_generate_is_deterministic() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        let a = run(args(first.path().to_path_buf()), &Printer::new()).unwrap();
        run(args(second.path().to_path_buf()), &Printer::new()).unwrap();

        for path in &a {
            let rel = path.strip_prefix(first.path()).unwrap();
            let left = fs::read(path).unwrap();
            let right = fs::read(second.path().join(rel)).unwrap();
            assert!(left == right, "{} differs between runs", rel.display());
        }
    }

    #[test]
    fn test_generate_seed_changes_floor_only() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        run(args(first.path().to_path_buf()), &Printer::new()).unwrap();
        let mut other = args(second.path().to_path_buf());
        other.seed = 7;
        run(other, &Printer::new()).unwrap();

        let read = |root: &Path, rel: &str| fs::read(root.join(rel)).unwrap();
        assert!(
            read(first.path(), "tiles/floor_atlas.png")
                != read(second.path(), "tiles/floor_atlas.png")
        );
        assert_eq!(
            read(first.path(), "machines/sorter.png"),
            read(second.path(), "machines/sorter.png")
        );
    }

    #[test]
    fn test_generate_dimensions_on_disk() {
        let dir = tempdir().unwrap();
        run(args(dir.path().to_path_buf()), &Printer::new()).unwrap();

        let dims = |rel: &str| image::image_dimensions(dir.path().join(rel)).unwrap();
        assert_eq!(dims("tiles/floor_atlas.png"), (128, 64));
        assert_eq!(dims("machines/cauldron.png"), (64, 64));
        assert_eq!(dims("items/star.png"), (20, 20));
        assert_eq!(dims("items/lucky_potion.png"), (20, 20));
        assert_eq!(dims("player/player_spritesheet.png"), (128, 192));
    }

    #[test]
    fn test_generate_scaled() {
        let dir = tempdir().unwrap();
        let mut a = args(dir.path().to_path_buf());
        a.scale = 3;
        run(a, &Printer::new()).unwrap();

        let dims = image::image_dimensions(dir.path().join("items/heart.png")).unwrap();
        assert_eq!(dims, (60, 60));
    }

    #[test]
    fn test_generate_with_meta() {
        let dir = tempdir().unwrap();
        let mut a = args(dir.path().to_path_buf());
        a.meta = true;
        let written = run(a, &Printer::new()).unwrap();
        assert_eq!(written.len(), 42);

        let content =
            fs::read_to_string(dir.path().join("player/player_spritesheet.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["frames"].as_object().unwrap().len(), 16);
        assert_eq!(parsed["frames"]["left_3"]["frame"]["x"], 96);
        assert_eq!(parsed["frames"]["left_3"]["frame"]["y"], 144);
        assert_eq!(parsed["meta"]["size"]["h"], 192);

        let content = fs::read_to_string(dir.path().join("tiles/floor_atlas.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["frames"]["floor_1"]["frame"]["x"], 64);
    }

    #[test]
    fn test_generate_rejects_oversized_scale() {
        let dir = tempdir().unwrap();
        let mut a = args(dir.path().join("sprites"));
        a.scale = 40_000_000;

        let err = run(a, &Printer::new()).unwrap_err();
        assert!(matches!(err, crate::error::SpriteError::Input { .. }));
        assert!(!dir.path().join("sprites").exists());
    }

    #[test]
    fn test_generate_into_file_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("sprites");
        fs::write(&blocker, b"x").unwrap();

        let err = run(args(blocker), &Printer::new()).unwrap_err();
        assert!(matches!(err, crate::error::SpriteError::Io { .. }));
    }
}
