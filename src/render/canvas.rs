//! Raster canvas with the drawing primitives the sprite routines use.
//!
//! Shapes are addressed by inclusive bounding boxes `[x0, y0, x1, y1]`, the
//! way sprite coordinates are usually written down by hand. Drawing replaces
//! pixels outright (no alpha blending), so a transparent fill cuts a hole.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use imageproc::drawing::{
    draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::types::Colour;

/// Inclusive bounding box `[x0, y0, x1, y1]`.
pub type BBox = [i32; 4];

/// An RGBA raster owned by one drawing routine.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Colour::TRANSPARENT)
    }

    /// Create a canvas filled with one colour.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, colour.into()),
        }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Get a pixel, or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|p| Colour::from(*p))
    }

    /// Set one pixel. Points outside the canvas are ignored.
    pub fn point(&mut self, x: i32, y: i32, colour: Colour) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.width() && y < self.height() {
            self.image.put_pixel(x, y, colour.into());
        }
    }

    /// Filled rectangle.
    pub fn rect(&mut self, bbox: BBox, colour: Colour) {
        if let Some(rect) = bbox_rect(bbox) {
            draw_filled_rect_mut(&mut self.image, rect, colour.into());
        }
    }

    /// Rectangle outline; extra width grows inward.
    pub fn rect_outline(&mut self, bbox: BBox, colour: Colour, width: i32) {
        let [x0, y0, x1, y1] = bbox;
        for i in 0..width {
            if let Some(rect) = bbox_rect([x0 + i, y0 + i, x1 - i, y1 - i]) {
                draw_hollow_rect_mut(&mut self.image, rect, colour.into());
            }
        }
    }

    /// Filled ellipse inscribed in the box, touching all four edges.
    pub fn ellipse(&mut self, bbox: BBox, colour: Colour) {
        let [x0, y0, x1, y1] = bbox;
        for y in y0..=y1 {
            for x in x0..=x1 {
                if inside_ellipse(bbox, x, y) {
                    self.point(x, y, colour);
                }
            }
        }
    }

    /// Ellipse outline; extra width grows inward.
    pub fn ellipse_outline(&mut self, bbox: BBox, colour: Colour, width: i32) {
        let [x0, y0, x1, y1] = bbox;
        let w = width.max(1);
        let inner = [x0 + w, y0 + w, x1 - w, y1 - w];
        for y in y0..=y1 {
            for x in x0..=x1 {
                if inside_ellipse(bbox, x, y) && !inside_ellipse(inner, x, y) {
                    self.point(x, y, colour);
                }
            }
        }
    }

    /// Arc of the inscribed ellipse between two angles in degrees.
    ///
    /// Angles start at three o'clock and run clockwise (y points down).
    pub fn arc(&mut self, bbox: BBox, start: f64, end: f64, colour: Colour, width: i32) {
        let [x0, y0, x1, y1] = bbox;
        let cx = (x0 + x1) as f64 / 2.0;
        let cy = (y0 + y1) as f64 / 2.0;
        for i in 0..width {
            let rx = (x1 - x0) as f64 / 2.0 - i as f64;
            let ry = (y1 - y0) as f64 / 2.0 - i as f64;
            if rx < 0.0 || ry < 0.0 {
                break;
            }
            let mut angle = start;
            while angle <= end {
                let rad = angle.to_radians();
                let px = (cx + rx * rad.cos()).round() as i32;
                let py = (cy + ry * rad.sin()).round() as i32;
                self.point(px, py, colour);
                angle += 0.5;
            }
        }
    }

    /// Filled polygon. A repeated closing vertex is dropped.
    pub fn polygon(&mut self, points: &[(i32, i32)], colour: Colour) {
        let mut poly: Vec<Point<i32>> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        while poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }
        if poly.is_empty() {
            return;
        }
        draw_polygon_mut(&mut self.image, &poly, colour.into());
    }

    /// One-pixel line segment, endpoints included.
    pub fn line(&mut self, from: (i32, i32), to: (i32, i32), colour: Colour) {
        draw_line_segment_mut(
            &mut self.image,
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            colour.into(),
        );
    }

    /// Line segment `width` pixels thick, widened across its minor axis.
    pub fn thick_line(&mut self, from: (i32, i32), to: (i32, i32), colour: Colour, width: i32) {
        let horizontal = (to.0 - from.0).abs() >= (to.1 - from.1).abs();
        for k in 0..width.max(1) {
            let off = k - width / 2;
            let (dx, dy) = if horizontal { (0, off) } else { (off, 0) };
            self.line((from.0 + dx, from.1 + dy), (to.0 + dx, to.1 + dy), colour);
        }
    }

    /// Connected thick line segments through `points`.
    pub fn polyline(&mut self, points: &[(i32, i32)], colour: Colour, width: i32) {
        for pair in points.windows(2) {
            self.thick_line(pair[0], pair[1], colour, width);
        }
    }

    /// Copy out a sub-region. The region is clipped to the canvas.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Canvas {
        Canvas::from_image(imageops::crop_imm(&self.image, x, y, width, height).to_image())
    }

    /// Resize with nearest-neighbour sampling (no blending).
    pub fn resize_nearest(&self, width: u32, height: u32) -> Canvas {
        Canvas::from_image(imageops::resize(&self.image, width, height, FilterType::Nearest))
    }

    /// Integer upscale; every source pixel becomes a `scale × scale` block.
    pub fn upscale(&self, scale: u32) -> Canvas {
        let scale = scale.max(1); // Minimum scale of 1
        if scale == 1 {
            return self.clone();
        }
        let (w, h) = self.size();
        let mut out = RgbaImage::new(w * scale, h * scale);
        for (x, y, px) in self.image.enumerate_pixels() {
            for sy in 0..scale {
                for sx in 0..scale {
                    out.put_pixel(x * scale + sx, y * scale + sy, *px);
                }
            }
        }
        Canvas::from_image(out)
    }

    /// Paste another canvas at an offset, replacing the covered pixels.
    pub fn paste(&mut self, top: &Canvas, x: i64, y: i64) {
        imageops::replace(&mut self.image, &top.image, x, y);
    }
}

fn bbox_rect([x0, y0, x1, y1]: BBox) -> Option<Rect> {
    if x1 < x0 || y1 < y0 {
        return None;
    }
    Some(Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32))
}

/// Whether the pixel centre `(x, y)` lies in the ellipse inscribed in the box.
///
/// The ellipse spans the outer pixel edges, so its semi-axes are half the
/// inclusive width and height. An inverted box contains nothing.
fn inside_ellipse([x0, y0, x1, y1]: BBox, x: i32, y: i32) -> bool {
    if x1 < x0 || y1 < y0 {
        return false;
    }
    let cx = (x0 + x1) as f64 / 2.0;
    let cy = (y0 + y1) as f64 / 2.0;
    let rx = (x1 - x0 + 1) as f64 / 2.0;
    let ry = (y1 - y0 + 1) as f64 / 2.0;
    let dx = (x as f64 - cx) / rx;
    let dy = (y as f64 - cy) / ry;
    dx * dx + dy * dy <= 1.0
}
