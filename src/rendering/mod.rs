pub mod headless;

// Re-export main types
pub use headless::{HeadlessCircle, HeadlessMarker, HeadlessSurface, SurfaceCall};
