/// Segment-list path replayed onto a Cairo context at draw time.

use crate::platform::graphics::Path;
use cairo::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    MoveTo { x: i32, y: i32 },
    LineTo { x: i32, y: i32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CairoPath {
    segments: Vec<PathSegment>,
}

impl CairoPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Replace the context's current path with this one.
    ///
    /// A leading `LineTo` is passed through unchanged; Cairo treats a line
    /// with no current point as a move.
    pub fn append_to(&self, cr: &Context) {
        cr.new_path();
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo { x, y } => cr.move_to(f64::from(x), f64::from(y)),
                PathSegment::LineTo { x, y } => cr.line_to(f64::from(x), f64::from(y)),
            }
        }
    }
}

impl Path for CairoPath {
    fn clear(&mut self) {
        self.segments.clear();
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.segments.push(PathSegment::MoveTo { x, y });
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.segments.push(PathSegment::LineTo { x, y });
    }
}
