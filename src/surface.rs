use egui::{Color32, ColorImage, Pos2, Vec2};

use crate::error::BoardError;

/// Compositing mode for a draw call.
///
/// `SourceOver` paints the brush color; `DestOut` subtracts from existing
/// paint (the eraser). The mode is an argument per draw call, never surface
/// state, so painting always reverts to `SourceOver` for the next path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    SourceOver,
    DestOut,
}

/// The raster target backing the canvas.
///
/// Strokes land on a straight-alpha paint layer kept separate from the
/// background color; presented and exported pixels composite the paint
/// layer over the background. Erasing clears paint pixels, so the
/// background fill always shows through erased areas.
pub struct Surface {
    width: usize,
    height: usize,
    background: Color32,
    paint: Vec<Color32>,
}

impl Surface {
    pub fn new(width: usize, height: usize, background: Color32) -> Self {
        Self {
            width,
            height,
            background,
            paint: vec![Color32::TRANSPARENT; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn set_background(&mut self, color: Color32) {
        self.background = color;
    }

    /// Drop all paint, leaving only the background fill.
    pub fn clear(&mut self) {
        self.paint.fill(Color32::TRANSPARENT);
    }

    /// The raw paint layer, for pixel-identical comparisons.
    pub fn paint(&self) -> &[Color32] {
        &self.paint
    }

    /// The composited color at (x, y): paint over background.
    pub fn pixel(&self, x: usize, y: usize) -> Color32 {
        let src = self.paint[y * self.width + x];
        let a = src.a() as u32;
        if a == 255 {
            src
        } else if a == 0 {
            self.background
        } else {
            // Premultiplied source over opaque background.
            let inv = 255 - a;
            let bg = self.background;
            Color32::from_rgb(
                (src.r() as u32 + bg.r() as u32 * inv / 255) as u8,
                (src.g() as u32 + bg.g() as u32 * inv / 255) as u8,
                (src.b() as u32 + bg.b() as u32 * inv / 255) as u8,
            )
        }
    }

    /// Stroke the segment a→b with round caps.
    ///
    /// Coverage is binary: a pixel is painted when its center lies within
    /// size/2 of the segment. A zero-length segment renders as a dot.
    pub fn stroke_segment(&mut self, a: Pos2, b: Pos2, size: f32, color: Color32, blend: Blend) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let radius = (size * 0.5).max(0.5);
        let min_x = a.x.min(b.x) - radius;
        let max_x = a.x.max(b.x) + radius;
        let min_y = a.y.min(b.y) - radius;
        let max_y = a.y.max(b.y) + radius;

        let r_sq = radius * radius;
        for (x, y) in self.pixels_in(min_x, min_y, max_x, max_y) {
            let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
            if dist_sq_to_segment(center, a, b) <= r_sq {
                self.put(x, y, color, blend);
            }
        }
    }

    /// Stroke a circle outline centered at `center` with the given radius.
    pub fn stroke_ring(&mut self, center: Pos2, radius: f32, size: f32, color: Color32, blend: Blend) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let half = (size * 0.5).max(0.5);
        let min_x = center.x - radius - half;
        let max_x = center.x + radius + half;
        let min_y = center.y - radius - half;
        let max_y = center.y + radius + half;

        for (x, y) in self.pixels_in(min_x, min_y, max_x, max_y) {
            let center_px = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
            let dist = (center_px - center).length();
            if (dist - radius).abs() <= half {
                self.put(x, y, color, blend);
            }
        }
    }

    /// Resize the surface, preserving the overlapping paint region.
    ///
    /// Matches the original board's behavior of carrying the raster across a
    /// resize without re-rendering paths. Degenerate or unchanged dimensions
    /// are ignored.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == 0 || height == 0 || (width == self.width && height == self.height) {
            return;
        }
        let mut paint = vec![Color32::TRANSPARENT; width * height];
        for y in 0..self.height.min(height) {
            for x in 0..self.width.min(width) {
                paint[y * width + x] = self.paint[y * self.width + x];
            }
        }
        self.width = width;
        self.height = height;
        self.paint = paint;
    }

    /// Composite into an `egui::ColorImage` for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        let pixels = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.pixel(x, y))
            .collect();
        ColorImage {
            size: [self.width, self.height],
            pixels,
        }
    }

    /// Encode the composited surface as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, BoardError> {
        let mut img = image::RgbaImage::new(self.width as u32, self.height as u32);
        for (x, y, px) in img.enumerate_pixels_mut() {
            let c = self.pixel(x as usize, y as usize);
            *px = image::Rgba([c.r(), c.g(), c.b(), 255]);
        }
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Pixel coordinates whose centers fall inside the clamped float box.
    fn pixels_in(
        &self,
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
    ) -> impl Iterator<Item = (usize, usize)> + use<> {
        let x0 = min_x.floor().max(0.0) as usize;
        let y0 = min_y.floor().max(0.0) as usize;
        let x1 = (max_x.ceil().max(0.0) as usize).min(self.width.saturating_sub(1));
        let y1 = (max_y.ceil().max(0.0) as usize).min(self.height.saturating_sub(1));
        (y0..=y1).flat_map(move |y| (x0..=x1).map(move |x| (x, y)))
    }

    fn put(&mut self, x: usize, y: usize, color: Color32, blend: Blend) {
        let idx = y * self.width + x;
        self.paint[idx] = match blend {
            Blend::SourceOver => color,
            Blend::DestOut => Color32::TRANSPARENT,
        };
    }
}

fn dist_sq_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab: Vec2 = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= f32::EPSILON {
        return (p - a).length_sq();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).length_sq()
}
