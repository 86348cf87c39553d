//! State and history primitives for the poster editor.
//!
//! Everything in here is plain data: no widgets, no drawing, no files.

pub mod color;
pub mod errors;
pub mod history;
pub mod state;

pub use color::Rgb;
pub use errors::{PosterError, PosterResult};
pub use history::HistoryBuffer;
pub use state::{EditorState, FontSize};
