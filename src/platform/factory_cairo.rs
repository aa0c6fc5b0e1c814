/// Single entry point for creating Cairo-backed graphics objects.

use crate::core::error::Result;
use crate::platform::bitmap_cairo::CairoBitmap;
use crate::platform::canvas_cairo::CairoCanvas;
use crate::platform::matrix_cairo::CairoMatrix;
use crate::platform::paint_cairo::CairoPaint;
use crate::platform::path_cairo::CairoPath;
use std::io::Read;

#[derive(Debug, Clone, Copy, Default)]
pub struct CairoGraphicFactory;

impl CairoGraphicFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create_bitmap(&self, width: i32, height: i32) -> Result<CairoBitmap> {
        CairoBitmap::new(width, height)
    }

    pub fn create_bitmap_from_rgba(
        &self,
        width: i32,
        height: i32,
        rgba: &[u8],
    ) -> Result<CairoBitmap> {
        CairoBitmap::from_rgba(width, height, rgba)
    }

    pub fn create_bitmap_from_png<R: Read>(&self, reader: &mut R) -> Result<CairoBitmap> {
        CairoBitmap::from_png(reader)
    }

    pub fn create_canvas(&self) -> CairoCanvas {
        CairoCanvas::new()
    }

    pub fn create_paint(&self) -> CairoPaint {
        CairoPaint::new()
    }

    pub fn create_path(&self) -> CairoPath {
        CairoPath::new()
    }

    pub fn create_matrix(&self) -> CairoMatrix {
        CairoMatrix::new()
    }
}
