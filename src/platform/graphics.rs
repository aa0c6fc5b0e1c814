/// Abstract collaborators consumed by a canvas: bitmaps, paints, paths and matrices.

use crate::core::error::Result;
use crate::core::types::{Cap, Font, Style};

/// A decoded pixel raster.
pub trait Bitmap {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
}

/// Affine transform. Every operation is concatenated so that it applies to
/// points before the transform already held.
pub trait Matrix {
    fn reset(&mut self);
    fn rotate(&mut self, theta: f64);
    fn rotate_about(&mut self, theta: f64, pivot_x: f64, pivot_y: f64);
    fn scale(&mut self, scale_x: f64, scale_y: f64);
    fn scale_about(&mut self, scale_x: f64, scale_y: f64, pivot_x: f64, pivot_y: f64);
    fn translate(&mut self, translate_x: f64, translate_y: f64);
}

/// Style attributes applied to a single draw operation.
pub trait Paint {
    type Bitmap: Bitmap;

    /// Packed ARGB color.
    fn color(&self) -> u32;
    fn stroke_cap(&self) -> Cap;
    fn stroke_width(&self) -> f32;
    fn style(&self) -> Style;

    /// Texture used instead of the solid color when filling paths.
    fn bitmap(&self) -> Option<&Self::Bitmap>;
    fn font(&self) -> Option<&Font>;

    fn text_width(&self, text: &str) -> Result<i32>;
    fn text_height(&self, text: &str) -> Result<i32>;
}

/// An accumulated sequence of move/line segments.
pub trait Path {
    fn clear(&mut self);
    fn move_to(&mut self, x: i32, y: i32);
    fn line_to(&mut self, x: i32, y: i32);
}
