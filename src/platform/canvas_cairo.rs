/// Cairo-based canvas implementation.

use crate::core::config;
use crate::core::error::{Error, Result};
use crate::core::types::{Cap, Color, Font, Style};
use crate::platform::bitmap_cairo::CairoBitmap;
use crate::platform::canvas::{Canvas, TextPlacement};
use crate::platform::graphics::{Bitmap, Paint};
use crate::platform::matrix_cairo::CairoMatrix;
use crate::platform::path_cairo::CairoPath;
use cairo::{Context, Extend, ImageSurface, LineCap, SurfacePattern};
use std::f64::consts::PI;

/// The context being drawn into, plus the bitmap behind it when the canvas
/// bound that bitmap itself.
struct Target {
    bitmap: Option<CairoBitmap>,
    cr: Context,
}

impl Target {
    fn bind(bitmap: CairoBitmap) -> Result<Self> {
        let cr = Context::new(bitmap.surface())?;
        cr.set_antialias(config::ANTIALIAS);
        cr.set_fill_rule(config::FILL_RULE);
        cr.set_font_options(&Font::rendering_options()?);

        Ok(Self {
            bitmap: Some(bitmap),
            cr,
        })
    }

    fn extents(&self) -> Result<(i32, i32)> {
        if let Some(bitmap) = &self.bitmap {
            return Ok((bitmap.width(), bitmap.height()));
        }
        match ImageSurface::try_from(self.cr.target()) {
            Ok(surface) => Ok((surface.width(), surface.height())),
            Err(_) => Err(Error::NoExtents),
        }
    }
}

pub struct CairoCanvas {
    target: Option<Target>,
}

impl CairoCanvas {
    pub fn new() -> Self {
        Self { target: None }
    }

    /// Draw through a context owned by the caller, e.g. a window surface.
    ///
    /// The context's own rendering settings are left untouched. `width` and
    /// `height` report the surface extents for image surfaces and
    /// `Error::NoExtents` for any other surface type.
    pub fn from_context(cr: Context) -> Self {
        Self {
            target: Some(Target { bitmap: None, cr }),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// The context's current user-to-device transform.
    pub fn transform(&self) -> Result<CairoMatrix> {
        Ok(CairoMatrix::from_cairo(self.context()?.matrix()))
    }

    fn target(&self) -> Result<&Target> {
        self.target.as_ref().ok_or(Error::Unbound)
    }

    fn context(&self) -> Result<&Context> {
        Ok(&self.target()?.cr)
    }

    fn set_paint_attributes(cr: &Context, paint: &dyn Paint<Bitmap = CairoBitmap>) {
        Color::from_packed(paint.color()).apply(cr);
        cr.set_line_width(f64::from(paint.stroke_width()));
        cr.set_line_cap(line_cap(paint.stroke_cap()));
        cr.set_line_join(config::LINE_JOIN);
    }

    fn bitmap_pattern(bitmap: &CairoBitmap) -> SurfacePattern {
        let pattern = SurfacePattern::create(bitmap.surface());
        pattern.set_filter(config::BITMAP_FILTER);
        pattern
    }

    /// Run `draw` and put the context transform back afterwards, whatever
    /// `draw` returned.
    fn with_saved_transform<F>(&self, draw: F) -> Result<()>
    where
        F: FnOnce(&Context) -> Result<()>,
    {
        let cr = self.context()?;
        let saved = cr.matrix();
        let result = draw(cr);
        cr.set_matrix(saved);
        result
    }

    fn show_text(
        cr: &Context,
        text: &str,
        x: i32,
        y: i32,
        paint: &dyn Paint<Bitmap = CairoBitmap>,
    ) -> Result<()> {
        Self::set_paint_attributes(cr, paint);
        match paint.font() {
            Some(font) => font.apply(cr),
            None => Font::default().apply(cr),
        }
        cr.new_path();
        cr.move_to(f64::from(x), f64::from(y));
        cr.show_text(text)?;
        Ok(())
    }
}

impl Default for CairoCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for CairoCanvas {
    type Bitmap = CairoBitmap;
    type Matrix = CairoMatrix;
    type Path = CairoPath;

    fn set_bitmap(&mut self, bitmap: Option<CairoBitmap>) -> Result<Option<CairoBitmap>> {
        // Bind before releasing the old target so a failed bind changes nothing.
        let next = match bitmap {
            Some(bitmap) => {
                log::debug!("Binding canvas to {}x{} bitmap", bitmap.width(), bitmap.height());
                Some(Target::bind(bitmap)?)
            }
            None => {
                log::debug!("Unbinding canvas");
                None
            }
        };
        let previous = std::mem::replace(&mut self.target, next);
        Ok(previous.and_then(|target| target.bitmap))
    }

    fn width(&self) -> Result<i32> {
        Ok(self.target()?.extents()?.0)
    }

    fn height(&self) -> Result<i32> {
        Ok(self.target()?.extents()?.1)
    }

    fn fill_color(&mut self, color: u32) -> Result<()> {
        let target = self.target()?;
        let (width, height) = target.extents()?;
        let cr = &target.cr;
        Color::from_packed(color).apply(cr);
        cr.new_path();
        cr.rectangle(0.0, 0.0, f64::from(width), f64::from(height));
        cr.fill()?;
        Ok(())
    }

    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        paint: &dyn Paint<Bitmap = CairoBitmap>,
    ) -> Result<()> {
        let cr = self.context()?;
        Self::set_paint_attributes(cr, paint);
        cr.new_path();
        cr.move_to(f64::from(x1), f64::from(y1));
        cr.line_to(f64::from(x2), f64::from(y2));
        cr.stroke()?;
        Ok(())
    }

    /// Strokes the circle inscribed in the `radius` x `radius` box at
    /// (x, y). The paint's style is not consulted.
    fn draw_circle(
        &mut self,
        x: i32,
        y: i32,
        radius: i32,
        paint: &dyn Paint<Bitmap = CairoBitmap>,
    ) -> Result<()> {
        let cr = self.context()?;
        if radius < 0 {
            return Ok(());
        }
        Self::set_paint_attributes(cr, paint);

        let half = f64::from(radius) / 2.0;
        cr.new_path();
        cr.arc(f64::from(x) + half, f64::from(y) + half, half, 0.0, 2.0 * PI);
        cr.stroke()?;
        Ok(())
    }

    fn draw_path(
        &mut self,
        path: &CairoPath,
        paint: &dyn Paint<Bitmap = CairoBitmap>,
    ) -> Result<()> {
        let cr = self.context()?;
        Self::set_paint_attributes(cr, paint);

        if let Some(texture) = paint.bitmap() {
            // Identity pattern matrix: tiles start at user-space (0, 0).
            let pattern = Self::bitmap_pattern(texture);
            pattern.set_extend(Extend::Repeat);
            cr.set_source(&pattern)?;
        }

        path.append_to(cr);
        match paint.style() {
            Style::Fill => cr.fill()?,
            Style::Stroke => cr.stroke()?,
        }
        Ok(())
    }

    fn draw_bitmap(&mut self, bitmap: &CairoBitmap, left: i32, top: i32) -> Result<()> {
        let cr = self.context()?;
        let pattern = Self::bitmap_pattern(bitmap);
        pattern.set_matrix(cairo::Matrix::new(
            1.0,
            0.0,
            0.0,
            1.0,
            -f64::from(left),
            -f64::from(top),
        ));
        cr.set_source(&pattern)?;
        cr.paint()?;
        Ok(())
    }

    fn draw_bitmap_matrix(&mut self, bitmap: &CairoBitmap, matrix: &CairoMatrix) -> Result<()> {
        self.with_saved_transform(|cr| {
            // A singular matrix would leave the context in a permanent error state.
            if !matrix.is_invertible() {
                return Err(Error::SingularMatrix);
            }
            cr.transform(matrix.to_cairo());
            cr.set_source(&Self::bitmap_pattern(bitmap))?;
            cr.paint()?;
            Ok(())
        })
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        paint: &dyn Paint<Bitmap = CairoBitmap>,
    ) -> Result<()> {
        Self::show_text(self.context()?, text, x, y, paint)
    }

    fn draw_text_rotated(
        &mut self,
        text: &str,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        paint: &dyn Paint<Bitmap = CairoBitmap>,
    ) -> Result<()> {
        self.with_saved_transform(|cr| {
            let placement = TextPlacement::along_line(
                x1,
                y1,
                x2,
                y2,
                paint.text_width(text)?,
                paint.text_height(text)?,
            );

            let (pivot_x, pivot_y) = (f64::from(x1), f64::from(y1));
            cr.translate(pivot_x, pivot_y);
            cr.rotate(placement.theta);
            cr.translate(-pivot_x, -pivot_y);

            Self::show_text(cr, text, placement.x, placement.y, paint)
        })
    }
}

fn line_cap(cap: Cap) -> LineCap {
    match cap {
        Cap::Butt => LineCap::Butt,
        Cap::Round => LineCap::Round,
        Cap::Square => LineCap::Square,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::graphics::{Matrix, Path};
    use crate::platform::paint_cairo::CairoPaint;
    use cairo::{Content, RecordingSurface};

    const WHITE: u32 = 0xFFFF_FFFF;
    const RED: u32 = 0xFFFF_0000;
    const GREEN: u32 = 0xFF00_FF00;
    const BLUE: u32 = 0xFF00_00FF;

    fn bound_canvas(width: i32, height: i32) -> (CairoCanvas, CairoBitmap) {
        let bitmap = CairoBitmap::new(width, height).unwrap();
        let mut canvas = CairoCanvas::new();
        canvas.set_bitmap(Some(bitmap.clone())).unwrap();
        canvas.fill_color(WHITE).unwrap();
        (canvas, bitmap)
    }

    fn paint(color: u32, style: Style, width: f32) -> CairoPaint {
        let mut paint = CairoPaint::new();
        paint.set_color(color);
        paint.set_style(style);
        paint.set_stroke_width(width);
        paint.set_stroke_cap(Cap::Butt);
        paint
    }

    fn assert_identity(canvas: &CairoCanvas) {
        let m = canvas.transform().unwrap();
        assert_eq!(m.transform_point(0.0, 0.0), (0.0, 0.0));
        assert_eq!(m.transform_point(1.0, 2.0), (1.0, 2.0));
    }

    /// Bounding box (x0, y0, x1, y1) of every pixel that is no longer white.
    fn ink_bounds(bitmap: &CairoBitmap) -> Option<(i32, i32, i32, i32)> {
        let mut bounds: Option<(i32, i32, i32, i32)> = None;
        for y in 0..bitmap.height() {
            for x in 0..bitmap.width() {
                if bitmap.pixel(x, y).unwrap() == WHITE {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }

    fn assert_same_pixels(left: &CairoBitmap, right: &CairoBitmap) {
        for y in 0..left.height() {
            for x in 0..left.width() {
                assert_eq!(
                    left.pixel(x, y).unwrap(),
                    right.pixel(x, y).unwrap(),
                    "pixel ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    fn text_paint(color: u32, size: f64) -> CairoPaint {
        let mut p = CairoPaint::new();
        p.set_color(color);
        p.set_text_size(size);
        p
    }

    /// Paint with fixed text metrics; optionally fails to measure.
    struct FixedMetricsPaint {
        inner: CairoPaint,
        width: i32,
        height: i32,
        fail: bool,
    }

    impl Paint for FixedMetricsPaint {
        type Bitmap = CairoBitmap;

        fn color(&self) -> u32 {
            self.inner.color()
        }
        fn stroke_cap(&self) -> Cap {
            self.inner.stroke_cap()
        }
        fn stroke_width(&self) -> f32 {
            self.inner.stroke_width()
        }
        fn style(&self) -> Style {
            self.inner.style()
        }
        fn bitmap(&self) -> Option<&CairoBitmap> {
            self.inner.bitmap()
        }
        fn font(&self) -> Option<&Font> {
            self.inner.font()
        }
        fn text_width(&self, _text: &str) -> Result<i32> {
            if self.fail {
                return Err(Error::InvalidBitmap("no metrics".into()));
            }
            Ok(self.width)
        }
        fn text_height(&self, _text: &str) -> Result<i32> {
            Ok(self.height)
        }
    }

    #[test]
    fn test_unbound_canvas() {
        let mut canvas = CairoCanvas::new();
        assert!(!canvas.is_bound());
        assert!(matches!(canvas.width(), Err(Error::Unbound)));
        assert!(matches!(canvas.height(), Err(Error::Unbound)));
        assert!(matches!(canvas.fill_color(RED), Err(Error::Unbound)));

        let p = CairoPaint::new();
        assert!(matches!(
            canvas.draw_line(0, 0, 1, 1, &p),
            Err(Error::Unbound)
        ));
        assert!(matches!(
            canvas.draw_path(&CairoPath::new(), &p),
            Err(Error::Unbound)
        ));
        assert!(matches!(
            canvas.draw_text_rotated("a", 0, 0, 5, 0, &p),
            Err(Error::Unbound)
        ));
    }

    #[test]
    fn test_bind_and_unbind() {
        let mut canvas = CairoCanvas::new();
        let first = CairoBitmap::new(12, 7).unwrap();
        let second = CairoBitmap::new(3, 4).unwrap();

        assert!(canvas.set_bitmap(Some(first)).unwrap().is_none());
        assert_eq!(canvas.width().unwrap(), 12);
        assert_eq!(canvas.height().unwrap(), 7);

        let previous = canvas.set_bitmap(Some(second)).unwrap().unwrap();
        assert_eq!(previous.width(), 12);
        assert_eq!(canvas.width().unwrap(), 3);

        let released = canvas.set_bitmap(None).unwrap().unwrap();
        assert_eq!(released.height(), 4);
        assert!(!canvas.is_bound());
        assert!(matches!(canvas.width(), Err(Error::Unbound)));
    }

    #[test]
    fn test_failed_bind_keeps_previous_target() {
        let (mut canvas, bound) = bound_canvas(9, 5);
        let broken = CairoBitmap::new(3, 3).unwrap();
        broken.surface().finish();

        assert!(canvas.set_bitmap(Some(broken)).is_err());
        assert!(canvas.is_bound());
        assert_eq!(canvas.width().unwrap(), 9);

        canvas.fill_color(BLUE).unwrap();
        assert_eq!(bound.pixel(8, 4).unwrap(), BLUE);
        let released = canvas.set_bitmap(None).unwrap().unwrap();
        assert_eq!(released.height(), 5);
    }

    #[test]
    fn test_draw_through_caller_context() {
        let bitmap = CairoBitmap::new(10, 6).unwrap();
        let cr = Context::new(bitmap.surface()).unwrap();
        let mut canvas = CairoCanvas::from_context(cr);

        assert!(canvas.is_bound());
        assert_eq!(canvas.width().unwrap(), 10);
        assert_eq!(canvas.height().unwrap(), 6);

        canvas.fill_color(WHITE).unwrap();
        canvas
            .draw_line(0, 3, 10, 3, &paint(RED, Style::Stroke, 2.0))
            .unwrap();
        assert_eq!(bitmap.pixel(5, 2).unwrap(), RED);
        assert_eq!(bitmap.pixel(5, 3).unwrap(), RED);
        assert_eq!(bitmap.pixel(5, 0).unwrap(), WHITE);

        // The caller owns the surface, so unbinding hands nothing back.
        assert!(canvas.set_bitmap(None).unwrap().is_none());
        assert!(!canvas.is_bound());
    }

    #[test]
    fn test_caller_context_without_extents() {
        let surface =
            RecordingSurface::create(Content::ColorAlpha, None::<cairo::Rectangle>).unwrap();
        let cr = Context::new(&surface).unwrap();
        let mut canvas = CairoCanvas::from_context(cr);

        assert!(matches!(canvas.width(), Err(Error::NoExtents)));
        assert!(matches!(canvas.height(), Err(Error::NoExtents)));
        assert!(matches!(canvas.fill_color(RED), Err(Error::NoExtents)));
        canvas
            .draw_line(0, 0, 8, 8, &paint(RED, Style::Stroke, 1.0))
            .unwrap();
    }

    #[test]
    fn test_rebinding_starts_with_fresh_context() {
        let (mut canvas, bitmap) = bound_canvas(4, 4);
        canvas.context().unwrap().translate(5.0, 5.0);

        canvas.set_bitmap(Some(bitmap)).unwrap();
        assert_identity(&canvas);
    }

    #[test]
    fn test_fill_color_covers_every_pixel() {
        let (mut canvas, bitmap) = bound_canvas(5, 3);
        canvas.fill_color(0xFF33_6699).unwrap();
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(bitmap.pixel(x, y).unwrap(), 0xFF33_6699);
            }
        }

        // Overwrites earlier content.
        canvas.fill_color(GREEN).unwrap();
        assert_eq!(bitmap.pixel(4, 2).unwrap(), GREEN);
    }

    #[test]
    fn test_draw_line() {
        let (mut canvas, bitmap) = bound_canvas(12, 12);
        canvas
            .draw_line(0, 5, 10, 5, &paint(RED, Style::Stroke, 2.0))
            .unwrap();
        assert_eq!(bitmap.pixel(5, 4).unwrap(), RED);
        assert_eq!(bitmap.pixel(5, 5).unwrap(), RED);
        assert_eq!(bitmap.pixel(5, 8).unwrap(), WHITE);
        // Butt cap ends at x = 10.
        assert_eq!(bitmap.pixel(11, 5).unwrap(), WHITE);
    }

    #[test]
    fn test_draw_circle_never_fills() {
        let (mut canvas, bitmap) = bound_canvas(20, 20);
        canvas
            .draw_circle(2, 2, 16, &paint(RED, Style::Fill, 2.0))
            .unwrap();

        assert_eq!(bitmap.pixel(10, 10).unwrap(), WHITE);
        assert_ne!(bitmap.pixel(10, 2).unwrap(), WHITE);
        assert_ne!(bitmap.pixel(2, 10).unwrap(), WHITE);
        assert_eq!(bitmap.pixel(0, 0).unwrap(), WHITE);
    }

    #[test]
    fn test_negative_circle_draws_nothing() {
        let (mut canvas, bitmap) = bound_canvas(12, 12);
        canvas
            .draw_circle(5, 5, -8, &paint(RED, Style::Stroke, 2.0))
            .unwrap();
        assert_eq!(ink_bounds(&bitmap), None);
    }

    fn square(path: &mut CairoPath, origin: i32, size: i32) {
        path.move_to(origin, origin);
        path.line_to(origin + size, origin);
        path.line_to(origin + size, origin + size);
        path.line_to(origin, origin + size);
        path.line_to(origin, origin);
    }

    #[test]
    fn test_draw_path_fill_and_stroke() {
        let (mut canvas, bitmap) = bound_canvas(16, 16);
        let mut path = CairoPath::new();
        square(&mut path, 4, 8);

        canvas.draw_path(&path, &paint(BLUE, Style::Fill, 1.0)).unwrap();
        assert_eq!(bitmap.pixel(8, 8).unwrap(), BLUE);
        assert_eq!(bitmap.pixel(2, 2).unwrap(), WHITE);

        canvas.fill_color(WHITE).unwrap();
        canvas.draw_path(&path, &paint(RED, Style::Stroke, 2.0)).unwrap();
        assert_eq!(bitmap.pixel(8, 8).unwrap(), WHITE);
        assert_eq!(bitmap.pixel(8, 4).unwrap(), RED);
        assert_eq!(bitmap.pixel(4, 8).unwrap(), RED);
    }

    #[test]
    fn test_texture_fill_tiles_from_origin() {
        let rgba = [
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 255,
        ];
        let texture = CairoBitmap::from_rgba(2, 2, &rgba).unwrap();
        let (mut canvas, bitmap) = bound_canvas(8, 8);

        let mut textured = paint(0xFF12_3456, Style::Fill, 1.0);
        textured.set_bitmap(Some(texture.clone()));

        let mut path = CairoPath::new();
        square(&mut path, 0, 8);
        canvas.draw_path(&path, &textured).unwrap();

        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(
                    bitmap.pixel(x, y).unwrap(),
                    texture.pixel(x % 2, y % 2).unwrap(),
                    "pixel ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_draw_bitmap_at_offset() {
        let red = CairoBitmap::from_rgba(2, 2, &[255, 0, 0, 255].repeat(4)).unwrap();
        let (mut canvas, bitmap) = bound_canvas(8, 8);

        canvas.draw_bitmap(&red, 3, 4).unwrap();
        assert_eq!(bitmap.pixel(3, 4).unwrap(), RED);
        assert_eq!(bitmap.pixel(4, 5).unwrap(), RED);
        assert_eq!(bitmap.pixel(2, 4).unwrap(), WHITE);
        assert_eq!(bitmap.pixel(5, 4).unwrap(), WHITE);
        assert_eq!(bitmap.pixel(3, 6).unwrap(), WHITE);
    }

    #[test]
    fn test_draw_bitmap_with_matrix() {
        let green = CairoBitmap::from_rgba(2, 2, &[0, 255, 0, 255].repeat(4)).unwrap();
        let (mut canvas, bitmap) = bound_canvas(10, 10);

        let mut matrix = CairoMatrix::new();
        matrix.translate(5.0, 5.0);
        matrix.scale(2.0, 2.0);
        canvas.draw_bitmap_matrix(&green, &matrix).unwrap();

        assert_eq!(bitmap.pixel(6, 6).unwrap(), GREEN);
        assert_eq!(bitmap.pixel(7, 7).unwrap(), GREEN);
        assert_eq!(bitmap.pixel(1, 1).unwrap(), WHITE);
        assert_eq!(bitmap.pixel(2, 8).unwrap(), WHITE);
        assert_identity(&canvas);
    }

    #[test]
    fn test_singular_matrix_is_rejected() {
        let green = CairoBitmap::from_rgba(1, 1, &[0, 255, 0, 255]).unwrap();
        let (mut canvas, bitmap) = bound_canvas(4, 4);

        let mut matrix = CairoMatrix::new();
        matrix.scale(0.0, 0.0);
        assert!(matches!(
            canvas.draw_bitmap_matrix(&green, &matrix),
            Err(Error::SingularMatrix)
        ));

        // The context is still usable.
        canvas.fill_color(BLUE).unwrap();
        assert_eq!(bitmap.pixel(0, 0).unwrap(), BLUE);
    }

    #[test]
    fn test_draw_text_inks_above_baseline() {
        let (mut canvas, bitmap) = bound_canvas(48, 32);
        canvas.draw_text("H", 4, 20, &text_paint(RED, 16.0)).unwrap();
        assert_identity(&canvas);

        let (x0, y0, _, y1) = ink_bounds(&bitmap).expect("text left no ink");
        assert!(x0 >= 3, "ink starts left of the origin at x = {}", x0);
        assert!(y0 < 20);
        assert!(y1 <= 21, "ink below the baseline at y = {}", y1);

        let mut solid = false;
        for y in 0..bitmap.height() {
            for x in 0..bitmap.width() {
                let argb = bitmap.pixel(x, y).unwrap();
                // Red over white keeps the red channel saturated.
                assert_eq!((argb >> 16) & 0xFF, 0xFF, "pixel ({}, {})", x, y);
                solid |= (argb >> 8) & 0xFF < 0x40 && argb & 0xFF < 0x40;
            }
        }
        assert!(solid, "no pixel took on the paint color");
    }

    #[test]
    fn test_rotated_text_restores_transform() {
        let (mut canvas, _bitmap) = bound_canvas(64, 64);
        let p = CairoPaint::new();

        for &(x1, y1, x2, y2) in &[(0, 0, 100, 0), (10, 10, 10, 60), (50, 5, -20, 40)] {
            canvas.draw_text_rotated("Elm", x1, y1, x2, y2, &p).unwrap();
            assert_identity(&canvas);
        }
    }

    #[test]
    fn test_rotated_text_keeps_existing_transform() {
        let (mut canvas, _bitmap) = bound_canvas(32, 32);
        canvas.context().unwrap().translate(3.0, 7.0);

        canvas
            .draw_text_rotated("Oak", 0, 0, 10, 10, &CairoPaint::new())
            .unwrap();
        let m = canvas.transform().unwrap();
        assert_eq!(m.transform_point(0.0, 0.0), (3.0, 7.0));
    }

    #[test]
    fn test_rotated_text_restores_transform_on_error() {
        let (mut canvas, _bitmap) = bound_canvas(32, 32);
        let failing = FixedMetricsPaint {
            inner: CairoPaint::new(),
            width: 40,
            height: 9,
            fail: true,
        };

        let result = canvas.draw_text_rotated("Pine", 4, 4, 20, 30, &failing);
        assert!(matches!(result, Err(Error::InvalidBitmap(_))));
        assert_identity(&canvas);
    }

    #[test]
    fn test_rotated_text_with_fixed_metrics() {
        let fixed = FixedMetricsPaint {
            inner: text_paint(BLUE, 12.0),
            width: 40,
            height: 9,
            fail: false,
        };

        let (mut rotated, along) = bound_canvas(128, 32);
        rotated
            .draw_text_rotated("Birch", 0, 20, 100, 20, &fixed)
            .unwrap();
        assert_identity(&rotated);

        // (100 - 40) / 2 across, 9 / 3 down.
        let (mut plain, expected) = bound_canvas(128, 32);
        plain.draw_text("Birch", 30, 23, &fixed.inner).unwrap();

        assert!(ink_bounds(&expected).is_some());
        assert_same_pixels(&along, &expected);
    }

    #[test]
    fn test_horizontal_rotated_text_matches_plain_text() {
        let p = text_paint(RED, 14.0);
        let text = "Elm Road";
        let width = p.text_width(text).unwrap();
        let height = p.text_height(text).unwrap();

        let (mut rotated, along) = bound_canvas(128, 40);
        rotated.draw_text_rotated(text, 0, 20, 100, 20, &p).unwrap();

        let (mut plain, expected) = bound_canvas(128, 40);
        plain
            .draw_text(text, (100 - width) / 2, 20 + height / 3, &p)
            .unwrap();

        assert!(ink_bounds(&expected).is_some());
        assert_same_pixels(&along, &expected);
    }

    #[test]
    fn test_vertical_rotated_text_runs_down() {
        let (mut canvas, bitmap) = bound_canvas(60, 100);
        canvas
            .draw_text_rotated("WWWWWW", 30, 5, 30, 95, &text_paint(BLUE, 12.0))
            .unwrap();
        assert_identity(&canvas);

        let (x0, y0, x1, y1) = ink_bounds(&bitmap).expect("text left no ink");
        assert!(
            y1 - y0 > x1 - x0,
            "ink box {}x{} is not taller than wide",
            x1 - x0 + 1,
            y1 - y0 + 1
        );
    }

    #[test]
    fn test_line_cap_mapping() {
        assert_eq!(line_cap(Cap::Butt), LineCap::Butt);
        assert_eq!(line_cap(Cap::Round), LineCap::Round);
        assert_eq!(line_cap(Cap::Square), LineCap::Square);
    }
}
