pub mod bitmap_cairo;
pub mod canvas;
pub mod canvas_cairo;
pub mod factory_cairo;
pub mod graphics;
pub mod matrix_cairo;
pub mod paint_cairo;
pub mod path_cairo;
