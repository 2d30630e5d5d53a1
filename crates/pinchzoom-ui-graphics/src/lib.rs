//! Pure geometry shared by the pinch-to-zoom crates
//!
//! Points describe focal positions and translations, sizes describe the
//! viewport the zoomed content is laid out in.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Size};
}
