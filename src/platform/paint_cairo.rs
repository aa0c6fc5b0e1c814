/// Paint record with Cairo-based text measurement.

use crate::core::error::Result;
use crate::core::types::{Cap, Font, FontFamily, FontStyle, Style};
use crate::platform::bitmap_cairo::CairoBitmap;
use crate::platform::graphics::Paint;
use cairo::{Context, Format, ImageSurface, TextExtents};
use std::cell::RefCell;

thread_local! {
    /// Measuring context reused by every paint on this thread.
    static SCRATCH: RefCell<Option<Context>> = const { RefCell::new(None) };
}

/// Context that text is measured on. It carries the same font options as a
/// bound canvas so measured and drawn glyphs agree.
fn scratch_context() -> Result<Context> {
    SCRATCH.with(|slot| {
        if let Some(cr) = slot.borrow().clone() {
            return Ok(cr);
        }
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)?;
        let cr = Context::new(&surface)?;
        cr.set_font_options(&Font::rendering_options()?);
        *slot.borrow_mut() = Some(cr.clone());
        Ok(cr)
    })
}

#[derive(Debug, Clone)]
pub struct CairoPaint {
    color: u32,
    cap: Cap,
    stroke_width: f32,
    style: Style,
    bitmap: Option<CairoBitmap>,
    font: Option<Font>,
}

impl CairoPaint {
    pub fn new() -> Self {
        Self {
            color: 0xFF00_0000,
            cap: Cap::Round,
            stroke_width: 1.0,
            style: Style::Fill,
            bitmap: None,
            font: None,
        }
    }

    pub fn set_color(&mut self, color: u32) {
        self.color = color;
    }

    pub fn set_stroke_cap(&mut self, cap: Cap) {
        self.cap = cap;
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn set_bitmap(&mut self, bitmap: Option<CairoBitmap>) {
        self.bitmap = bitmap;
    }

    pub fn set_typeface(&mut self, family: FontFamily, style: FontStyle) {
        let font = self.font.get_or_insert_with(Font::default);
        font.family = family;
        font.style = style;
    }

    pub fn set_text_size(&mut self, size: f64) {
        self.font.get_or_insert_with(Font::default).size = size;
    }

    fn text_extents(&self, text: &str) -> Result<TextExtents> {
        let cr = scratch_context()?;
        match &self.font {
            Some(font) => font.apply(&cr),
            None => Font::default().apply(&cr),
        }
        Ok(cr.text_extents(text)?)
    }
}

impl Default for CairoPaint {
    fn default() -> Self {
        Self::new()
    }
}

impl Paint for CairoPaint {
    type Bitmap = CairoBitmap;

    fn color(&self) -> u32 {
        self.color
    }

    fn stroke_cap(&self) -> Cap {
        self.cap
    }

    fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    fn style(&self) -> Style {
        self.style
    }

    fn bitmap(&self) -> Option<&CairoBitmap> {
        self.bitmap.as_ref()
    }

    fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    fn text_width(&self, text: &str) -> Result<i32> {
        Ok(self.text_extents(text)?.x_advance().round() as i32)
    }

    fn text_height(&self, text: &str) -> Result<i32> {
        Ok(self.text_extents(text)?.height().ceil() as i32)
    }
}
