//! CPU rasterizer for producing screenshots without a window.
//!
//! Fills are alpha-blended straight into an [`RgbaImage`]. Glyphs are drawn
//! as solid cells inset by one pixel: the font bitmap belongs to the host,
//! so the canvas only shows where text lands.

use std::path::Path;

use image::{Rgba, RgbaImage};
use tracing::info;

use crate::display_list::DrawSink;
use crate::error::Result;
use crate::geometry::{Color, Rect};

#[derive(Debug, Clone)]
pub struct SoftwareCanvas {
    image: RgbaImage,
}

impl SoftwareCanvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let px = Rgba([background.r, background.g, background.b, background.a]);
        Self { image: RgbaImage::from_pixel(width, height, px) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let Rgba([r, g, b, a]) = *self.image.get_pixel(x, y);
        Color::rgba(r, g, b, a)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Write the canvas to `path`; the format follows the extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.image.save(path)?;
        info!(path = %path.display(), width = self.width(), height = self.height(), "saved canvas");
        Ok(())
    }

    fn blend_rect(&mut self, rect: Rect, color: Color) {
        if !color.is_visible() {
            return;
        }
        let bounds = Rect::new(0, 0, self.width() as i32, self.height() as i32);
        let Some(r) = rect.intersection(&bounds) else {
            return;
        };
        for y in r.y..r.y + r.h {
            for x in r.x..r.x + r.w {
                let dst = self.image.get_pixel_mut(x as u32, y as u32);
                *dst = blend(*dst, color);
            }
        }
    }
}

/// Source-over blend of `src` onto `dst`.
fn blend(dst: Rgba<u8>, src: Color) -> Rgba<u8> {
    if src.a == 255 {
        return Rgba([src.r, src.g, src.b, 255]);
    }
    let sa = src.a as u32;
    let inv = 255 - sa;
    let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * inv + 127) / 255) as u8;
    let Rgba([dr, dg, db, da]) = dst;
    Rgba([
        mix(src.r, dr),
        mix(src.g, dg),
        mix(src.b, db),
        (sa + (da as u32 * inv + 127) / 255).min(255) as u8,
    ])
}

impl DrawSink for SoftwareCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.blend_rect(rect, color);
    }

    fn draw_glyph(&mut self, rect: Rect, glyph: char, color: Color) {
        if glyph.is_whitespace() {
            return;
        }
        self.blend_rect(rect.inset(1, 1, 1, 1), color);
    }
}
