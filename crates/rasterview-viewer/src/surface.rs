//! Drawing surface for the paint pipeline.
//! Wraps a tiny-skia pixmap with the current scale transform, so overlays and
//! paintlets draw in image pixel coordinates while the result lands in
//! screen space.

use crate::raster::Image;
use image::{Rgba, RgbaImage};
use rasterview_core::{CodecError, Color, PixelRect, Size, ViewerError};
use std::path::Path;
use tiny_skia::{
    ColorU8, FilterQuality, IntSize, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke,
    Transform,
};

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = false; // crisp pixel edges
    paint
}

/// Converts the raster to a premultiplied pixmap for compositing.
fn to_pixmap(image: &Image) -> Option<Pixmap> {
    let size = IntSize::from_wh(image.width(), image.height())?;
    let mut data = Vec::with_capacity(image.pixels().as_raw().len());
    for pixel in image.pixels().pixels() {
        let [r, g, b, a] = pixel.0;
        let c = ColorU8::from_rgba(r, g, b, a).premultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Pixmap::from_vec(data, size)
}

/// Screen-sized raster that one frame is composed on.
pub struct Surface {
    pixmap: Pixmap,
    transform: Transform,
    scale: f64,
}

impl Surface {
    /// Allocates a transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self, ViewerError> {
        let pixmap = Pixmap::new(width, height).ok_or(ViewerError::Surface { width, height })?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            scale: 1.0,
        })
    }

    pub fn with_size(size: Size) -> Result<Self, ViewerError> {
        Self::new(size.width, size.height)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Fills the whole surface, ignoring the current transform.
    pub fn fill(&mut self, color: Color) {
        self.pixmap.fill(skia_color(color));
    }

    /// Makes subsequent drawing operate in pixel space at `scale`.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.transform = Transform::from_scale(scale as f32, scale as f32);
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn reset_transform(&mut self) {
        self.set_scale(1.0);
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Draws the image at the pixel origin. Transparent pixels show
    /// `background` rather than whatever was on the surface before.
    pub fn draw_image(&mut self, image: &Image, background: Color) {
        let Some(source) = to_pixmap(image) else {
            return;
        };
        self.fill_rect(
            0.0,
            0.0,
            image.width() as f64,
            image.height() as f64,
            background,
        );
        let paint = PixmapPaint {
            quality: FilterQuality::Nearest,
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, source.as_ref(), &paint, self.transform, None);
    }

    /// Fills a rectangle given in pixel space.
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        let Some(rect) = Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &solid_paint(color), self.transform, None);
    }

    /// Outlines a pixel rectangle. `line_width` is in screen pixels, so the
    /// outline keeps its thickness at every zoom level.
    pub fn stroke_rect(&mut self, rect: PixelRect, color: Color, line_width: f64) {
        let Some(bounds) = Rect::from_xywh(
            rect.top_left.x as f32,
            rect.top_left.y as f32,
            rect.width().max(1) as f32,
            rect.height().max(1) as f32,
        ) else {
            return;
        };
        let path = PathBuilder::from_rect(bounds);
        let stroke = self.screen_stroke(line_width);
        self.pixmap
            .stroke_path(&path, &solid_paint(color), &stroke, self.transform, None);
    }

    /// Draws connected line segments through `points` (pixel space).
    pub fn stroke_polyline(&mut self, points: &[(f64, f64)], color: Color, line_width: f64) {
        let Some(((x0, y0), rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(*x0 as f32, *y0 as f32);
        for (x, y) in rest {
            pb.line_to(*x as f32, *y as f32);
        }
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = self.screen_stroke(line_width);
        self.pixmap
            .stroke_path(&path, &solid_paint(color), &stroke, self.transform, None);
    }

    fn screen_stroke(&self, line_width: f64) -> Stroke {
        Stroke {
            width: (line_width / self.scale) as f32,
            ..Default::default()
        }
    }

    /// Colour of a screen pixel, unpremultiplied.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color::rgba(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Copies the frame into an `image` buffer.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut out = RgbaImage::new(self.width(), self.height());
        for (dst, src) in out.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }

    /// Writes the frame as PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), CodecError> {
        self.to_rgba_image()
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| CodecError::Encode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}
