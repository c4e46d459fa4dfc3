//! Potion bottles and the bottled-potion overlay (20×20).
//!
//! Every potion shares one bottle drawing, parameterised only by the liquid
//! colour. The overlay is drawn independently and composited by the game.

use crate::render::Canvas;
use crate::types::Colour;

use super::ingredients::blank;

const GLASS: Colour = Colour::new(200, 200, 210, 140);
const NECK_ALPHA: u8 = 120;

/// Potion names and liquid colours as unit-float RGB.
pub const POTIONS: [(&str, [f64; 3]); 10] = [
    ("health_potion", [1.0, 0.2, 0.3]),
    ("mana_potion", [0.3, 0.2, 1.0]),
    ("speed_potion", [1.0, 0.95, 0.1]),
    ("love_potion", [1.0, 0.3, 0.65]),
    ("invisibility_potion", [0.85, 0.85, 0.9]),
    ("fire_resistance_potion", [1.0, 0.5, 0.0]),
    ("strength_potion", [0.7, 0.1, 0.15]),
    ("night_vision_potion", [0.6, 1.0, 0.2]),
    ("water_breathing_potion", [0.1, 0.85, 0.85]),
    ("lucky_potion", [1.0, 0.8, 0.0]),
];

/// Liquid colour for a potion table entry.
pub fn potion_colour([r, g, b]: [f64; 3]) -> Colour {
    Colour::from_unit(r, g, b, 1.0)
}

/// A corked bottle filled with `liquid`.
pub fn potion(liquid: Colour) -> Canvas {
    let mut img = blank();

    let body = [5, 8, 14, 17];
    img.rect(body, liquid);
    img.rect_outline(body, GLASS, 1);

    let neck = [7, 4, 12, 8];
    img.rect(neck, liquid.with_alpha(NECK_ALPHA));
    img.rect_outline(neck, GLASS, 1);

    img.rect([8, 2, 11, 4], Colour::rgb(160, 120, 70));
    img.line((6, 9), (6, 15), Colour::new(255, 255, 255, 80));
    img
}

/// Gold bottle outline with a corner sparkle.
pub fn bottle_overlay() -> Canvas {
    let mut img = blank();
    let gold = Colour::new(230, 200, 80, 200);
    img.rect_outline([4, 7, 15, 18], gold, 2);
    img.rect_outline([6, 3, 13, 7], gold, 2);

    let sparkle = Colour::new(255, 230, 100, 180);
    img.line((2, 2), (4, 4), sparkle);
    img.line((3, 2), (3, 4), sparkle);
    img.line((2, 3), (4, 3), sparkle);
    img
}
