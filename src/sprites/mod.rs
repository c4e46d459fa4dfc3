//! The fixed sprite set.
//!
//! Every sprite is a pure drawing routine returning a fresh canvas. The
//! catalog ties each routine to its category and file name so the generator,
//! the listing and the tests all walk the same table.

pub mod floor;
pub mod ingredients;
pub mod machines;
pub mod player;
pub mod potions;

use std::path::PathBuf;

use crate::render::Canvas;
use crate::types::{Category, Colour};

/// How a sprite is drawn.
#[derive(Debug, Clone, Copy)]
pub enum Renderer {
    /// A dedicated zero-argument routine.
    Fixed(fn() -> Canvas),
    /// The shared potion bottle filled with a colour.
    Potion(Colour),
    /// The procedural floor atlas with a grain seed.
    Floor(u64),
}

impl Renderer {
    pub fn render(&self) -> Canvas {
        match *self {
            Renderer::Fixed(draw) => draw(),
            Renderer::Potion(colour) => potions::potion(colour),
            Renderer::Floor(seed) => floor::floor_atlas(seed),
        }
    }
}

/// One named sprite in the catalog.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub category: Category,
    pub name: &'static str,
    pub renderer: Renderer,
}

impl Sprite {
    fn new(category: Category, name: &'static str, renderer: Renderer) -> Self {
        Self {
            category,
            name,
            renderer,
        }
    }

    /// Path relative to the sprite root, e.g. `items/star.png`.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.category.dir_name()).join(format!("{}.png", self.name))
    }

    /// Declared pixel size before any output scaling.
    pub fn size(&self) -> (u32, u32) {
        match self.category {
            Category::Tiles => floor::ATLAS_SIZE,
            Category::Machines => (machines::MACHINE_SIZE, machines::MACHINE_SIZE),
            Category::Items => (ingredients::ITEM_SIZE, ingredients::ITEM_SIZE),
            Category::Player => player::SHEET_SIZE,
        }
    }

    pub fn render(&self) -> Canvas {
        self.renderer.render()
    }
}

/// Name of the floor atlas sprite.
pub const FLOOR_ATLAS: &str = "floor_atlas";

/// Name of the player spritesheet sprite.
pub const PLAYER_SHEET: &str = "player_spritesheet";

/// The full sprite set in output order.
pub fn catalog(seed: u64) -> Vec<Sprite> {
    let mut sprites = vec![Sprite::new(
        Category::Tiles,
        FLOOR_ATLAS,
        Renderer::Floor(seed),
    )];

    sprites.extend(
        machines::MACHINES
            .iter()
            .map(|&(name, draw)| Sprite::new(Category::Machines, name, Renderer::Fixed(draw))),
    );
    sprites.extend(
        ingredients::INGREDIENTS
            .iter()
            .map(|&(name, draw)| Sprite::new(Category::Items, name, Renderer::Fixed(draw))),
    );
    sprites.extend(potions::POTIONS.iter().map(|&(name, rgb)| {
        Sprite::new(
            Category::Items,
            name,
            Renderer::Potion(potions::potion_colour(rgb)),
        )
    }));
    sprites.push(Sprite::new(
        Category::Items,
        "bottle_overlay",
        Renderer::Fixed(potions::bottle_overlay),
    ));
    sprites.push(Sprite::new(
        Category::Player,
        PLAYER_SHEET,
        Renderer::Fixed(player::player_spritesheet),
    ));

    sprites
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_counts() {
        let sprites = catalog(floor::DEFAULT_SEED);
        assert_eq!(sprites.len(), 42);

        let count = |c: Category| sprites.iter().filter(|s| s.category == c).count();
        assert_eq!(count(Category::Tiles), 1);
        assert_eq!(count(Category::Machines), 9);
        assert_eq!(count(Category::Items), 31);
        assert_eq!(count(Category::Player), 1);
    }

    #[test]
    fn test_paths_are_unique() {
        let sprites = catalog(floor::DEFAULT_SEED);
        let paths: HashSet<PathBuf> = sprites.iter().map(Sprite::relative_path).collect();
        assert_eq!(paths.len(), sprites.len());
    }

    #[test]
    fn test_rendered_sizes_match_declared() {
        for sprite in catalog(floor::DEFAULT_SEED) {
            assert_eq!(
                sprite.render().size(),
                sprite.size(),
                "{}",
                sprite.relative_path().display()
            );
        }
    }

    #[test]
    fn test_relative_path() {
        let sprites = catalog(floor::DEFAULT_SEED);
        assert_eq!(sprites[0].relative_path(), PathBuf::from("tiles/floor_atlas.png"));
        let last = sprites.last().unwrap();
        assert_eq!(last.relative_path(), PathBuf::from("player/player_spritesheet.png"));
    }

    #[test]
    fn test_catalog_listing() {
        let listing: Vec<String> = catalog(floor::DEFAULT_SEED)
            .iter()
            .filter(|s| s.category != Category::Items)
            .map(|s| {
                let (w, h) = s.size();
                format!("{} {}x{}", s.relative_path().display(), w, h)
            })
            .collect();
        insta::assert_snapshot!(listing.join("\n"), @r"
        tiles/floor_atlas.png 128x64
        machines/conveyor.png 64x64
        machines/fast_belt.png 64x64
        machines/dispenser.png 64x64
        machines/cauldron.png 64x64
        machines/storage.png 64x64
        machines/splitter.png 64x64
        machines/sorter.png 64x64
        machines/bottler.png 64x64
        machines/auto_seller.png 64x64
        player/player_spritesheet.png 128x192
        ");
    }
}
