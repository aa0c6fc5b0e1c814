/// Abstract drawing surface bound to a pixel target.

use crate::core::config;
use crate::core::error::Result;
use crate::platform::graphics::{Bitmap, Matrix, Paint, Path};

pub trait Canvas {
    type Bitmap: Bitmap;
    type Matrix: Matrix;
    type Path: Path;

    /// Bind a new target (or unbind with `None`) and return the previous one.
    fn set_bitmap(&mut self, bitmap: Option<Self::Bitmap>) -> Result<Option<Self::Bitmap>>;

    fn width(&self) -> Result<i32>;
    fn height(&self) -> Result<i32>;

    // Fill
    fn fill_color(&mut self, color: u32) -> Result<()>;

    // Geometry
    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        paint: &dyn Paint<Bitmap = Self::Bitmap>,
    ) -> Result<()>;
    fn draw_circle(
        &mut self,
        x: i32,
        y: i32,
        radius: i32,
        paint: &dyn Paint<Bitmap = Self::Bitmap>,
    ) -> Result<()>;
    fn draw_path(
        &mut self,
        path: &Self::Path,
        paint: &dyn Paint<Bitmap = Self::Bitmap>,
    ) -> Result<()>;

    // Bitmaps
    fn draw_bitmap(&mut self, bitmap: &Self::Bitmap, left: i32, top: i32) -> Result<()>;
    fn draw_bitmap_matrix(&mut self, bitmap: &Self::Bitmap, matrix: &Self::Matrix) -> Result<()>;

    // Text
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        paint: &dyn Paint<Bitmap = Self::Bitmap>,
    ) -> Result<()>;
    fn draw_text_rotated(
        &mut self,
        text: &str,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        paint: &dyn Paint<Bitmap = Self::Bitmap>,
    ) -> Result<()>;
}

/// Where a label lands when it is laid along a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPlacement {
    /// Rotation about the line start, in radians.
    pub theta: f64,
    /// Baseline origin in the rotated frame.
    pub x: i32,
    pub y: i32,
}

impl TextPlacement {
    /// Center a label of `text_width` x `text_height` pixels on the line
    /// from (x1, y1) to (x2, y2).
    pub fn along_line(x1: i32, y1: i32, x2: i32, y2: i32, text_width: i32, text_height: i32) -> Self {
        let delta_x = f64::from(x2 - x1);
        let delta_y = f64::from(y2 - y1);

        let theta = delta_y.atan2(delta_x);
        let line_length = delta_x.hypot(delta_y);

        // Truncate the real-valued slack first, then halve in integers.
        let dx = (line_length - f64::from(text_width)) as i32 / 2;
        let dy = text_height / config::TEXT_BASELINE_DIVISOR;

        Self {
            theta,
            x: x1 + dx,
            y: y1 + dy,
        }
    }
}
