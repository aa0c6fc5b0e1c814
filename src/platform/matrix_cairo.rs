/// Affine transform backed by `cairo::Matrix`.

use crate::platform::graphics::Matrix;

#[derive(Debug, Clone, Copy)]
pub struct CairoMatrix {
    inner: cairo::Matrix,
}

impl CairoMatrix {
    pub fn new() -> Self {
        Self {
            inner: cairo::Matrix::identity(),
        }
    }

    pub fn from_cairo(inner: cairo::Matrix) -> Self {
        Self { inner }
    }

    pub fn to_cairo(&self) -> cairo::Matrix {
        self.inner
    }

    pub fn is_invertible(&self) -> bool {
        self.inner.try_invert().is_ok()
    }

    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        self.inner.transform_point(x, y)
    }
}

impl Default for CairoMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl Matrix for CairoMatrix {
    fn reset(&mut self) {
        self.inner = cairo::Matrix::identity();
    }

    fn rotate(&mut self, theta: f64) {
        self.inner.rotate(theta);
    }

    fn rotate_about(&mut self, theta: f64, pivot_x: f64, pivot_y: f64) {
        self.inner.translate(pivot_x, pivot_y);
        self.inner.rotate(theta);
        self.inner.translate(-pivot_x, -pivot_y);
    }

    fn scale(&mut self, scale_x: f64, scale_y: f64) {
        self.inner.scale(scale_x, scale_y);
    }

    fn scale_about(&mut self, scale_x: f64, scale_y: f64, pivot_x: f64, pivot_y: f64) {
        self.inner.translate(pivot_x, pivot_y);
        self.inner.scale(scale_x, scale_y);
        self.inner.translate(-pivot_x, -pivot_y);
    }

    fn translate(&mut self, translate_x: f64, translate_y: f64) {
        self.inner.translate(translate_x, translate_y);
    }
}
