//! Turns an [`poster_core::EditorState`] into pixels.
//!
//! - [`paint`] builds the display list for one frame and replays it onto any
//!   [`surface::Surface`].
//! - [`raster::PixelBuffer`] is the built-in RGBA software surface used for
//!   both the on-screen preview and export.
//! - [`export`] encodes a pixel buffer as PNG.

pub mod error;
pub mod export;
pub mod font;
pub mod paint;
pub mod raster;
pub mod surface;

pub use error::{RenderError, RenderResult};
pub use export::encode_png;
pub use font::{PlacedGlyph, TextFont};
pub use paint::{PaintCommand, display_list, render};
pub use raster::PixelBuffer;
pub use surface::{Rect, Surface};
