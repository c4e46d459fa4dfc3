//! Sprite categories.

use std::fmt;

/// The asset sub-directory a sprite is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Tiles,
    Machines,
    Items,
    Player,
}

impl Category {
    /// All categories in output order.
    pub const ALL: [Category; 4] = [
        Category::Tiles,
        Category::Machines,
        Category::Items,
        Category::Player,
    ];

    /// Directory name under the sprite root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Tiles => "tiles",
            Category::Machines => "machines",
            Category::Items => "items",
            Category::Player => "player",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
