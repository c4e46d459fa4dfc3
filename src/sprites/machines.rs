//! Machine sprites (64×64, art within a 52×52 rounded body).

use crate::render::{BBox, Canvas};
use crate::types::Colour;

/// Machine sprite edge length.
pub const MACHINE_SIZE: u32 = 64;

/// Body bounding box shared by every machine.
pub const BODY: BBox = [6, 6, 57, 57];

const CORNER_RADIUS: i32 = 4;

/// Named machine routines in output order.
pub const MACHINES: [(&str, fn() -> Canvas); 9] = [
    ("conveyor", conveyor),
    ("fast_belt", fast_belt),
    ("dispenser", dispenser),
    ("cauldron", cauldron),
    ("storage", storage_chest),
    ("splitter", splitter),
    ("sorter", sorter),
    ("bottler", bottler),
    ("auto_seller", auto_seller),
];

/// Filled rectangle with rounded corners.
///
/// Two crossing rectangles cover the body and a circle fills each corner.
pub fn rounded_rect(img: &mut Canvas, bbox: BBox, colour: Colour, radius: i32) {
    let [x0, y0, x1, y1] = bbox;
    let d = radius * 2;
    img.rect([x0 + radius, y0, x1 - radius, y1], colour);
    img.rect([x0, y0 + radius, x1, y1 - radius], colour);
    img.ellipse([x0, y0, x0 + d, y0 + d], colour);
    img.ellipse([x1 - d, y0, x1, y0 + d], colour);
    img.ellipse([x0, y1 - d, x0 + d, y1], colour);
    img.ellipse([x1 - d, y1 - d, x1, y1], colour);
}

fn body(colour: Colour) -> Canvas {
    let mut img = Canvas::new(MACHINE_SIZE, MACHINE_SIZE);
    rounded_rect(&mut img, BODY, colour, CORNER_RADIUS);
    img
}

fn belt(img: &mut Canvas, base: Colour, roller: Colour, rollers: [i32; 4]) {
    img.rect([10, 20, 53, 43], base.darken(0.7));
    for rx in rollers {
        img.rect([rx, 22, rx + 3, 41], roller);
    }
}

fn side_rails(img: &mut Canvas, base: Colour) {
    let rail = base.lighten(1.2);
    img.rect([10, 18, 53, 20], rail);
    img.rect([10, 43, 53, 45], rail);
}

fn corner_squares(img: &mut Canvas, corners: [(i32, i32); 4], size: i32, colour: Colour) {
    for (x, y) in corners {
        img.rect([x, y, x + size, y + size], colour);
    }
}

/// Grey belt with four rollers.
pub fn conveyor() -> Canvas {
    let base = Colour::rgb(105, 105, 115);
    let mut img = body(base);
    belt(&mut img, base, Colour::rgb(140, 140, 150), [16, 26, 36, 46]);
    side_rails(&mut img, base);
    img
}

/// Golden belt with speed chevrons.
pub fn fast_belt() -> Canvas {
    let base = Colour::rgb(180, 145, 50);
    let mut img = body(base);
    belt(&mut img, base, Colour::rgb(210, 175, 60), [14, 24, 34, 44]);

    let chevron = Colour::new(255, 220, 80, 180);
    for cx in [20, 32, 44] {
        img.thick_line((cx, 28), (cx + 4, 32), chevron, 2);
        img.thick_line((cx + 4, 32), (cx, 36), chevron, 2);
    }

    side_rails(&mut img, base);
    img
}

/// Green hopper feeding a chute.
pub fn dispenser() -> Canvas {
    let base = Colour::rgb(70, 155, 95);
    let mut img = body(base);

    img.polygon(&[(14, 10), (49, 10), (43, 26), (20, 26)], base.darken(0.8));
    img.rect([24, 26, 39, 50], base.darken(0.7));
    // ingredient slot
    img.ellipse_outline([24, 32, 39, 47], Colour::new(255, 255, 255, 180), 2);

    corner_squares(
        &mut img,
        [(10, 10), (52, 10), (10, 52), (52, 52)],
        2,
        Colour::rgb(160, 180, 160),
    );
    img
}

/// Purple base holding a bubbling pot.
pub fn cauldron() -> Canvas {
    let base = Colour::rgb(145, 85, 155);
    let mut img = body(base);

    let rim = Colour::rgb(120, 70, 130);
    img.ellipse([14, 16, 49, 51], Colour::rgb(35, 25, 45));
    img.ellipse_outline([14, 16, 49, 51], rim, 2);
    img.arc([14, 14, 49, 34], 200.0, 340.0, rim.lighten(1.4), 2);

    let bubble = Colour::new(180, 140, 210, 160);
    img.ellipse([22, 28, 28, 34], bubble);
    img.ellipse([34, 32, 39, 37], bubble);
    img.ellipse([27, 38, 32, 43], bubble);

    let leg = base.darken(0.6);
    img.rect([16, 50, 20, 56], leg);
    img.rect([43, 50, 47, 56], leg);
    img
}

/// Wooden chest with a metal band and clasp.
pub fn storage_chest() -> Canvas {
    let base = Colour::rgb(130, 90, 45);
    let mut img = body(base);

    img.rect([8, 8, 55, 26], base.lighten(1.15));
    img.rect([8, 24, 55, 28], Colour::rgb(160, 150, 100));

    let clasp = Colour::rgb(190, 170, 80);
    img.rect([28, 22, 35, 30], clasp);
    img.rect([29, 23, 34, 29], clasp.darken(0.7));

    let plank = base.darken(0.75);
    img.line((8, 38), (55, 38), plank);
    img.line((8, 48), (55, 48), plank);

    corner_squares(
        &mut img,
        [(8, 8), (52, 8), (8, 52), (52, 52)],
        4,
        Colour::rgb(140, 130, 80),
    );
    img
}

/// Purple body with a Y-fork and a centre gem.
pub fn splitter() -> Canvas {
    let base = Colour::rgb(145, 70, 170);
    let mut img = body(base);

    let fork = Colour::rgb(200, 160, 220);
    img.rect([10, 28, 30, 35], fork);
    img.polygon(&[(30, 28), (52, 14), (52, 22), (30, 32)], fork);
    img.polygon(&[(30, 31), (52, 41), (52, 49), (30, 35)], fork);

    let gem = Colour::rgb(220, 180, 255);
    img.ellipse([26, 27, 36, 37], gem);
    img.ellipse([28, 29, 34, 35], gem.lighten(1.1));
    img
}

/// Teal body with a filter lens over two channels.
pub fn sorter() -> Canvas {
    let base = Colour::rgb(50, 145, 145);
    let mut img = body(base);

    let lens = Colour::rgb(70, 180, 180);
    img.ellipse([22, 10, 41, 29], lens);
    img.ellipse([24, 12, 39, 27], lens.darken(0.7));
    img.ellipse([26, 14, 30, 18], Colour::new(120, 220, 220, 160));

    let channel = Colour::rgb(40, 110, 110);
    img.rect([28, 29, 35, 52], channel);
    img.rect([35, 36, 52, 43], channel);
    img.ellipse([29, 33, 38, 42], Colour::rgb(80, 160, 160));
    img
}

/// Amber body with a labelled bottle.
pub fn bottler() -> Canvas {
    let base = Colour::rgb(180, 130, 35);
    let mut img = body(base);

    let bottle = Colour::rgb(220, 200, 160);
    img.rect([22, 26, 41, 50], bottle);
    img.rect([27, 14, 36, 26], bottle);
    img.rect([25, 10, 38, 14], Colour::rgb(160, 120, 30));
    img.rect([24, 34, 39, 44], Colour::rgb(255, 240, 200));
    img.line((24, 28), (24, 48), Colour::new(255, 255, 230, 120));
    img
}

/// Gold body with a coin stack and sparkles.
pub fn auto_seller() -> Canvas {
    let base = Colour::rgb(190, 165, 25);
    let mut img = body(base);

    let coin_dark = Colour::rgb(170, 140, 10);
    let coin_light = Colour::rgb(230, 200, 40);
    for y in [40, 34, 28] {
        img.ellipse([18, y, 45, y + 10], coin_dark);
        img.ellipse([18, y - 2, 45, y + 8], coin_light);
    }
    img.ellipse([22, 24, 41, 34], Colour::rgb(200, 175, 20));
    img.ellipse_outline([28, 26, 35, 33], Colour::rgb(140, 110, 10), 1);

    let sparkle = Colour::new(255, 255, 200, 200);
    for (x, y) in [(14, 14), (46, 12)] {
        sparkle_cross(&mut img, x, y, sparkle);
    }
    img
}

/// Small 5×5 sparkle: one diagonal plus a plus sign.
fn sparkle_cross(img: &mut Canvas, x: i32, y: i32, colour: Colour) {
    img.line((x, y), (x + 4, y + 4), colour);
    img.line((x + 2, y), (x + 2, y + 4), colour);
    img.line((x, y + 2), (x + 4, y + 2), colour);
}
