//! Canvas and path bridge that renders map-tile primitives through Cairo.

pub mod core;
pub mod platform;

pub use crate::core::error::{Error, Result};
pub use crate::core::types::{Cap, Color, Font, FontFamily, FontStyle, Style};
pub use crate::platform::bitmap_cairo::CairoBitmap;
pub use crate::platform::canvas::{Canvas, TextPlacement};
pub use crate::platform::canvas_cairo::CairoCanvas;
pub use crate::platform::factory_cairo::CairoGraphicFactory;
pub use crate::platform::graphics::{Bitmap, Matrix, Paint, Path};
pub use crate::platform::matrix_cairo::CairoMatrix;
pub use crate::platform::paint_cairo::CairoPaint;
pub use crate::platform::path_cairo::{CairoPath, PathSegment};
