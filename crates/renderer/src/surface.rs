use layout::TextMeasure;
use poster_core::Rgb;

/// Axis-aligned rectangle in canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A fixed-size drawable target.
///
/// Text is always anchored center-horizontally and middle-vertically on the
/// given point, and measured with the same font the target draws with.
pub trait Surface {
    type Metrics: TextMeasure;

    /// `(width, height)` in canvas units.
    fn size(&self) -> (u32, u32);

    /// Font metrics for text drawn at `font_size` pixels.
    fn metrics(&self, font_size: u32) -> Self::Metrics;

    /// Resets every pixel to transparent.
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Strokes the outline of `rect` with a band of `line_width` centered on
    /// its edges.
    fn stroke_rect(&mut self, rect: Rect, color: Rgb, line_width: f64);

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font_size: u32, color: Rgb);
}
