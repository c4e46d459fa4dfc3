//! Player walk-cycle spritesheet.
//!
//! A purple-robed wizard in a 4×4 grid of 32×48 frames. Rows are facing
//! directions, columns are walk frames.

use crate::render::Canvas;
use crate::types::Colour;

/// Frame size in pixels.
pub const FRAME_SIZE: (u32, u32) = (32, 48);

/// Frames per row.
pub const WALK_FRAMES: u32 = 4;

/// Sheet size in pixels.
pub const SHEET_SIZE: (u32, u32) = (FRAME_SIZE.0 * WALK_FRAMES, FRAME_SIZE.1 * 4);

const ROBE: Colour = Colour::rgb(130, 65, 170);
const ROBE_DARK: Colour = Colour::rgb(100, 50, 140);
const HAT: Colour = Colour::rgb(90, 40, 130);
const HAT_BAND: Colour = Colour::rgb(180, 140, 50);
const SKIN: Colour = Colour::rgb(230, 190, 150);
const SHOE: Colour = Colour::rgb(80, 50, 30);

/// Eye pixel colour.
pub const EYE: Colour = Colour::rgb(40, 30, 20);

/// Mouth and cheek pixel colour.
pub const MOUTH: Colour = Colour::rgb(190, 150, 120);

/// Facing direction; also the sheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Down,
    Right,
    Up,
    Left,
}

impl Facing {
    /// Rows in sheet order.
    pub const ROWS: [Facing; 4] = [Facing::Down, Facing::Right, Facing::Up, Facing::Left];

    pub fn name(self) -> &'static str {
        match self {
            Facing::Down => "down",
            Facing::Right => "right",
            Facing::Up => "up",
            Facing::Left => "left",
        }
    }
}

/// Vertical bob for a walk frame; stride frames lift one pixel.
pub fn bob(col: u32) -> i32 {
    if col % 2 == 1 {
        -1
    } else {
        0
    }
}

/// Foot splay for a walk frame.
pub fn leg_offset(col: u32) -> i32 {
    match col {
        1 => 2,
        3 => -2,
        _ => 0,
    }
}

/// Frame names in row-major sheet order, e.g. `down_0` .. `left_3`.
pub fn frame_names() -> Vec<String> {
    Facing::ROWS
        .iter()
        .flat_map(|f| (0..WALK_FRAMES).map(move |c| format!("{}_{}", f.name(), c)))
        .collect()
}

/// Draw the full spritesheet.
pub fn player_spritesheet() -> Canvas {
    let mut img = Canvas::new(SHEET_SIZE.0, SHEET_SIZE.1);
    for (row, facing) in Facing::ROWS.into_iter().enumerate() {
        for col in 0..WALK_FRAMES {
            let origin = (
                (col * FRAME_SIZE.0) as i32,
                (row as u32 * FRAME_SIZE.1) as i32,
            );
            draw_frame(&mut img, origin, facing, col);
        }
    }
    img
}

fn draw_frame(img: &mut Canvas, (ox, oy): (i32, i32), facing: Facing, col: u32) {
    let bob = bob(col);
    let leg = leg_offset(col);

    // hat
    let tip_y = oy + 2 + bob;
    let base_y = oy + 14 + bob;
    img.polygon(&[(ox + 16, tip_y), (ox + 22, base_y), (ox + 10, base_y)], HAT);
    img.rect([ox + 8, base_y, ox + 24, base_y + 3], HAT);
    img.rect([ox + 10, base_y - 2, ox + 22, base_y], HAT_BAND);

    let head_y = oy + 15 + bob;
    img.ellipse([ox + 11, head_y, ox + 21, head_y + 10], SKIN);
    match facing {
        Facing::Down => {
            img.point(ox + 14, head_y + 4, EYE);
            img.point(ox + 18, head_y + 4, EYE);
            img.point(ox + 16, head_y + 7, MOUTH);
        }
        Facing::Right => {
            img.point(ox + 18, head_y + 4, EYE);
            img.point(ox + 19, head_y + 7, MOUTH);
        }
        Facing::Left => {
            img.point(ox + 13, head_y + 4, EYE);
            img.point(ox + 12, head_y + 7, MOUTH);
        }
        Facing::Up => {}
    }

    // robe, shaded on the trailing side
    let body_y = oy + 25 + bob;
    img.rect([ox + 10, body_y, ox + 22, body_y + 14], ROBE);
    let shadow = match facing {
        Facing::Right => [ox + 10, body_y, ox + 15, body_y + 14],
        Facing::Left => [ox + 17, body_y, ox + 22, body_y + 14],
        Facing::Down | Facing::Up => [ox + 10, body_y + 8, ox + 22, body_y + 14],
    };
    img.rect(shadow, ROBE_DARK);

    let arm_y = body_y + 3;
    match facing {
        Facing::Right => img.rect([ox + 22, arm_y, ox + 25, arm_y + 6], ROBE),
        Facing::Left => img.rect([ox + 7, arm_y, ox + 10, arm_y + 6], ROBE),
        Facing::Down | Facing::Up => {
            img.rect([ox + 7, arm_y, ox + 10, arm_y + 5], ROBE);
            img.rect([ox + 22, arm_y, ox + 25, arm_y + 5], ROBE);
        }
    }

    let feet_y = body_y + 14;
    let left_x = ox + 11 + leg;
    let right_x = ox + 18 - leg;
    img.rect([left_x, feet_y, left_x + 4, feet_y + 4], SHOE);
    img.rect([right_x, feet_y, right_x + 4, feet_y + 4], SHOE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count(img: &Canvas, colour: Colour) -> usize {
        img.image()
            .pixels()
            .filter(|p| Colour::from(**p) == colour)
            .count()
    }

    /// Cut one frame out of a rendered sheet.
    fn frame(sheet: &Canvas, facing: Facing, col: u32) -> Canvas {
        let row = Facing::ROWS.iter().position(|f| *f == facing).unwrap_or(0) as u32;
        sheet.crop(
            col * FRAME_SIZE.0,
            row * FRAME_SIZE.1,
            FRAME_SIZE.0,
            FRAME_SIZE.1,
        )
    }

    #[test]
    fn test_sheet_dimensions() {
        assert_eq!(player_spritesheet().size(), (128, 192));
    }

    #[test]
    fn test_sixteen_frames() {
        let sheet = player_spritesheet();
        let mut frames = 0;
        for facing in Facing::ROWS {
            for col in 0..WALK_FRAMES {
                let f = frame(&sheet, facing, col);
                assert_eq!(f.size(), (32, 48));
                assert!(f.image().pixels().any(|p| p[3] > 0));
                frames += 1;
            }
        }
        assert_eq!(frames, 16);
        assert_eq!(frame_names().len(), 16);
    }

    #[test]
    fn test_front_face_dots() {
        let f = frame(&player_spritesheet(), Facing::Down, 0);
        assert_eq!(f.get(14, 19), Some(EYE));
        assert_eq!(f.get(18, 19), Some(EYE));
        assert_eq!(f.get(16, 22), Some(MOUTH));
    }

    #[test]
    fn test_back_view_has_no_face() {
        let sheet = player_spritesheet();
        for col in 0..WALK_FRAMES {
            let f = frame(&sheet, Facing::Up, col);
            assert_eq!(count(&f, EYE), 0, "up frame {col}");
            assert_eq!(count(&f, MOUTH), 0, "up frame {col}");
        }
    }

    #[test]
    fn test_side_views_have_one_eye() {
        let sheet = player_spritesheet();
        let right = frame(&sheet, Facing::Right, 0);
        let left = frame(&sheet, Facing::Left, 0);
        assert_eq!(count(&right, EYE), 1);
        assert_eq!(count(&left, EYE), 1);
        assert_eq!(right.get(18, 19), Some(EYE));
        assert_eq!(left.get(13, 19), Some(EYE));
    }

    #[test]
    fn test_stride_frames_bob() {
        let sheet = player_spritesheet();
        // The hat band sits one pixel higher on stride frames.
        let still = frame(&sheet, Facing::Down, 0);
        let stride = frame(&sheet, Facing::Down, 1);
        assert_eq!(still.get(16, 11), Some(HAT));
        assert_eq!(still.get(16, 12), Some(HAT_BAND));
        assert_eq!(stride.get(16, 11), Some(HAT_BAND));
    }

    #[test]
    fn test_walk_tables() {
        assert_eq!((0..4).map(bob).collect::<Vec<_>>(), vec![0, -1, 0, -1]);
        assert_eq!((0..4).map(leg_offset).collect::<Vec<_>>(), vec![0, 2, 0, -2]);
    }

    #[test]
    fn test_frame_names() {
        let names = frame_names();
        assert_eq!(names[0], "down_0");
        assert_eq!(names[5], "right_1");
        assert_eq!(names[15], "left_3");
    }
}
