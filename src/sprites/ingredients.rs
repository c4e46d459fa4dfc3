//! Ingredient item sprites (20×20).

use crate::render::Canvas;
use crate::types::Colour;

/// Item sprite edge length.
pub const ITEM_SIZE: u32 = 20;

/// Named ingredient routines in output order.
pub const INGREDIENTS: [(&str, fn() -> Canvas); 20] = [
    ("mushroom", mushroom),
    ("herb", herb),
    ("crystal", crystal),
    ("water", water),
    ("feather", feather),
    ("lightning", lightning),
    ("rose", rose),
    ("heart", heart),
    ("shadow", shadow),
    ("moonlight", moonlight),
    ("ice", ice),
    ("lava", lava),
    ("dragon_scale", dragon_scale),
    ("ember", ember),
    ("glowshroom", glowshroom),
    ("eye", eye),
    ("seaweed", seaweed),
    ("bubble", bubble),
    ("clover", clover),
    ("star", star),
];

pub(crate) fn blank() -> Canvas {
    Canvas::new(ITEM_SIZE, ITEM_SIZE)
}

/// Point on a circle around `centre`; the offset is truncated toward zero.
fn polar(centre: (i32, i32), radius: f64, degrees: f64) -> (i32, i32) {
    let rad = degrees.to_radians();
    (
        centre.0 + (radius * rad.cos()) as i32,
        centre.1 + (radius * rad.sin()) as i32,
    )
}

pub fn mushroom() -> Canvas {
    let mut img = blank();
    img.rect([7, 10, 12, 17], Colour::rgb(220, 200, 170));
    img.ellipse([3, 2, 16, 14], Colour::rgb(184, 72, 72));
    let spot = Colour::new(255, 220, 200, 180);
    img.ellipse([6, 5, 8, 7], spot);
    img.ellipse([11, 4, 13, 6], spot);
    img.ellipse([8, 8, 10, 10], spot.with_alpha(140));
    img
}

pub fn herb() -> Canvas {
    let mut img = blank();
    let leaf = Colour::rgb(80, 180, 80);
    img.thick_line((10, 17), (10, 6), Colour::rgb(60, 120, 50), 2);
    img.ellipse([4, 4, 10, 10], leaf);
    img.ellipse([10, 3, 16, 9], leaf);
    img.ellipse([6, 8, 12, 14], leaf.lighten(1.1));
    img
}

pub fn crystal() -> Canvas {
    let mut img = blank();
    let c = Colour::rgb(130, 130, 230);
    img.polygon(&[(10, 2), (15, 10), (10, 18), (5, 10)], c);
    img.polygon(&[(10, 2), (12, 10), (10, 14)], c.lighten(1.3));
    img.line((8, 5), (9, 7), Colour::new(200, 200, 255, 200));
    img
}

pub fn water() -> Canvas {
    let mut img = blank();
    let c = Colour::rgb(60, 135, 210);
    img.polygon(&[(10, 3), (16, 12), (10, 17), (4, 12)], c);
    img.ellipse([5, 9, 15, 17], c);
    img.ellipse([7, 8, 10, 11], Colour::new(120, 180, 240, 150));
    img
}

pub fn feather() -> Canvas {
    let mut img = blank();
    let c = Colour::rgb(225, 225, 232);
    img.line((5, 17), (15, 3), Colour::rgb(180, 180, 190));
    img.polygon(&[(15, 3), (12, 7), (6, 14), (4, 14), (10, 6)], c);
    img.polygon(&[(15, 3), (16, 7), (12, 14), (10, 14), (14, 6)], c.lighten(1.05));
    img
}

pub fn lightning() -> Canvas {
    let mut img = blank();
    let c = Colour::rgb(255, 240, 50);
    img.polygon(&[(12, 2), (6, 10), (10, 10), (8, 18), (14, 9), (10, 9)], c);
    img.polygon(&[(11, 4), (8, 9), (10, 9), (9, 15), (13, 9), (10, 9)], c.lighten(1.2));
    img
}

pub fn rose() -> Canvas {
    let mut img = blank();
    let petal = Colour::rgb(240, 100, 150);
    img.thick_line((10, 17), (10, 10), Colour::rgb(50, 120, 50), 2);
    img.ellipse([5, 3, 12, 10], petal);
    img.ellipse([8, 2, 15, 9], petal);
    img.ellipse([6, 5, 13, 12], petal.lighten(1.1));
    img.ellipse([8, 5, 12, 9], Colour::rgb(200, 60, 100));
    img
}

pub fn heart() -> Canvas {
    let mut img = blank();
    let c = Colour::rgb(215, 38, 64);
    img.ellipse([3, 4, 11, 12], c);
    img.ellipse([9, 4, 17, 12], c);
    img.polygon(&[(3, 9), (17, 9), (10, 17)], c);
    img.ellipse([5, 5, 9, 9], c.lighten(1.2));
    img
}

pub fn shadow() -> Canvas {
    let mut img = blank();
    let c = Colour::rgb(60, 48, 85);
    img.ellipse([3, 3, 17, 17], c);
    img.ellipse([5, 5, 15, 15], c.darken(0.7));
    let wisp = Colour::new(50, 40, 70, 150);
    img.ellipse([2, 8, 8, 14], wisp);
    img.ellipse([12, 6, 18, 12], wisp);
    img.ellipse([9, 9, 11, 11], Colour::new(120, 100, 160, 200));
    img
}

pub fn moonlight() -> Canvas {
    let mut img = blank();
    img.ellipse([4, 3, 16, 17], Colour::rgb(215, 215, 180));
    // crescent
    img.ellipse([7, 2, 18, 16], Colour::TRANSPARENT);
    let star = Colour::new(255, 255, 220, 180);
    for (x, y) in [(14, 5), (16, 9), (13, 14)] {
        img.point(x, y, star);
    }
    img
}

/// Snowflake: three diameters, a bright centre and six tip points.
pub fn ice() -> Canvas {
    let mut img = blank();
    let c = Colour::rgb(150, 225, 240);
    let centre = (10, 10);
    for angle in [0.0, 60.0, 120.0] {
        let (x, y) = polar(centre, 6.0, angle);
        let (dx, dy) = (x - centre.0, y - centre.1);
        img.thick_line((centre.0 - dx, centre.1 - dy), (x, y), c, 2);
    }
    img.ellipse([8, 8, 12, 12], c.lighten(1.2));
    let tip = Colour::rgb(200, 240, 255);
    for step in 0..6 {
        let (x, y) = polar(centre, 6.0, step as f64 * 60.0);
        img.point(x, y, tip);
    }
    img
}

pub fn lava() -> Canvas {
    let mut img = blank();
    let c = Colour::rgb(240, 100, 25);
    img.ellipse([3, 4, 17, 17], c);
    img.ellipse([6, 7, 14, 14], Colour::rgb(255, 180, 50));
    img.ellipse([8, 9, 12, 13], Colour::rgb(255, 230, 100));
    img.polygon(&[(10, 4), (12, 7), (8, 7)], c);
    img
}

pub fn dragon_scale() -> Canvas {
    let mut img = blank();
    let c = Colour::rgb(50, 128, 75);
    img.polygon(&[(10, 2), (17, 8), (14, 17), (6, 17), (3, 8)], c);
    let ridge = c.darken(0.7);
    img.line((10, 2), (10, 14), ridge);
    img.line((6, 8), (14, 8), ridge);
    img.polygon(&[(10, 3), (14, 8), (10, 8)], c.lighten(1.3));
    img
}

pub fn ember() -> Canvas {
    let mut img = blank();
    img.polygon(&[(10, 2), (15, 10), (13, 17), (7, 17), (5, 10)], Colour::rgb(255, 150, 35));
    img.polygon(&[(10, 5), (13, 10), (11, 15), (9, 15), (7, 10)], Colour::rgb(255, 200, 80));
    img.polygon(&[(10, 8), (12, 11), (10, 14), (8, 11)], Colour::rgb(255, 240, 150));
    img
}

pub fn glowshroom() -> Canvas {
    let mut img = blank();
    img.rect([8, 10, 12, 17], Colour::rgb(190, 210, 150));
    img.ellipse([3, 2, 17, 13], Colour::rgb(175, 240, 75));
    let glow = Colour::new(220, 255, 130, 200);
    img.ellipse([6, 4, 8, 6], glow);
    img.ellipse([12, 5, 14, 7], glow);
    img.ellipse([9, 7, 11, 9], glow);
    img
}

pub fn eye() -> Canvas {
    let mut img = blank();
    img.ellipse([2, 5, 18, 15], Colour::rgb(240, 230, 200));
    img.ellipse([7, 6, 14, 14], Colour::rgb(215, 180, 50));
    img.ellipse([9, 8, 12, 12], Colour::rgb(30, 20, 10));
    img.point(10, 9, Colour::new(255, 255, 255, 220));
    img.arc([2, 3, 18, 15], 200.0, 340.0, Colour::rgb(150, 120, 40), 1);
    img
}

pub fn seaweed() -> Canvas {
    let mut img = blank();
    let c = Colour::rgb(35, 128, 115);
    img.polyline(&[(7, 17), (6, 12), (8, 8), (6, 3)], c, 2);
    img.polyline(&[(13, 17), (14, 12), (12, 8), (14, 3)], c, 2);
    img.polyline(&[(10, 17), (10, 10), (11, 5)], c.lighten(1.2), 2);
    img
}

pub fn bubble() -> Canvas {
    let mut img = blank();
    img.ellipse([3, 3, 17, 17], Colour::new(180, 230, 255, 160));
    img.ellipse_outline([3, 3, 17, 17], Colour::new(200, 240, 255, 200), 1);
    img.ellipse([6, 5, 10, 9], Colour::new(230, 245, 255, 180));
    img.ellipse([14, 13, 16, 15], Colour::new(220, 240, 255, 140));
    img
}

pub fn clover() -> Canvas {
    let mut img = blank();
    let c = Colour::rgb(50, 150, 60);
    img.thick_line((10, 17), (10, 11), Colour::rgb(40, 100, 45), 2);
    for (ox, oy) in [(-3, -3), (3, -3), (-3, 3), (3, 3)] {
        let (cx, cy) = (10 + ox, 8 + oy);
        img.ellipse([cx - 3, cy - 3, cx + 3, cy + 3], c);
    }
    img.ellipse([9, 7, 11, 9], c.lighten(1.3));
    img
}

/// Star polygon vertices: ten points alternating outer radius 8 and inner
/// radius 4, every 36° from the top.
pub fn star_points() -> Vec<(i32, i32)> {
    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { 8.0 } else { 4.0 };
            let rad = (i as f64 * 36.0 - 90.0).to_radians();
            (
                (10.0 + radius * rad.cos()) as i32,
                (10.0 + radius * rad.sin()) as i32,
            )
        })
        .collect()
}

pub fn star() -> Canvas {
    let mut img = blank();
    let c = Colour::rgb(255, 215, 50);
    img.polygon(&star_points(), c);
    img.ellipse([8, 8, 12, 12], c.lighten(1.3));
    img
}
