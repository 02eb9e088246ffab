//! Manager-wide defaults.
//! Keeping them in a single place makes it easier to tweak the magic numbers.

/// Square tile size in pixels, used when projecting bounds to pixels.
pub const TILE_SIZE: u32 = 256;

/// Lowest zoom considered when fitting bounds.
pub const MIN_ZOOM: u8 = 0;

/// Highest zoom considered when fitting bounds.
pub const MAX_ZOOM: u8 = 21;

/// Padding on every side when fitting markers, as a fraction of display width.
pub const DEFAULT_PADDING_RATIO: f64 = 0.10;

/// Circle stroke color (opaque black, ARGB).
pub const DEFAULT_STROKE_COLOR: u32 = 0xff00_0000;

/// Circle fill color (translucent red, ARGB).
pub const DEFAULT_FILL_COLOR: u32 = 0x30ff_0000;

/// Circle stroke width in screen pixels.
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;
