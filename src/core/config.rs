/// Rendering policy and demo constants.

use cairo::{Antialias, FillRule, Filter, LineJoin};

// --- Rendering policy (fixed, not configurable per call) ---
pub const ANTIALIAS: Antialias = Antialias::Best;
pub const BITMAP_FILTER: Filter = Filter::Good;
pub const LINE_JOIN: LineJoin = LineJoin::Round;
pub const FILL_RULE: FillRule = FillRule::Winding;

// --- Text ---
pub const DEFAULT_FONT_FACE: &str = "sans-serif";
pub const DEFAULT_TEXT_SIZE: f64 = 12.0;
/// Rotated labels are shifted down by a third of their height.
pub const TEXT_BASELINE_DIVISOR: i32 = 3;

// --- Demo tile ---
pub const DEMO_TILE_SIZE: i32 = 256;
pub const DEMO_OUTPUT: &str = "tile.png";
pub const LAND_COLOR: u32 = 0xFFF8F4F0;
pub const WATER_COLOR: u32 = 0xFFB5D0D0;
pub const ROAD_CASING: u32 = 0xFF707070;
pub const ROAD_FILL: u32 = 0xFFFFFFFF;
pub const POI_COLOR: u32 = 0xFFE94560;
pub const LABEL_COLOR: u32 = 0xFF202020;
