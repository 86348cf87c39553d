//! The poster's typeface: an embedded TrueType font rasterized with `fontdue`.
//!
//! The face is parsed once and shared by every size. [`TextFont`] binds it to
//! one pixel size and is both the layout [`TextMeasure`] and the glyph source
//! for [`crate::PixelBuffer`], so measured and drawn widths always agree.

use std::sync::OnceLock;

use fontdue::{Font, FontSettings, Metrics};
use layout::{FONT_FAMILY, TextMeasure};

/// Faces compiled into the binary, keyed by family name.
const EMBEDDED: &[(&str, &[u8])] = &[("DejaVu Sans", include_bytes!("../assets/DejaVuSans.ttf"))];

fn embedded(family: &str) -> Option<&'static [u8]> {
    EMBEDDED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(family))
        .map(|&(_, bytes)| bytes)
}

fn face() -> &'static Font {
    static FACE: OnceLock<Font> = OnceLock::new();
    FACE.get_or_init(|| {
        let bytes = embedded(FONT_FAMILY).expect("poster font family is not embedded");
        Font::from_bytes(bytes, FontSettings::default()).expect("Failed to load embedded font")
    })
}

/// ASCII whitespace is drawn and measured as a plain space.
#[inline]
fn normalize(c: char) -> char {
    if c.is_ascii_whitespace() { ' ' } else { c }
}

/// A character and the pen position its glyph origin sits at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub x: f64,
}

/// The embedded face at one pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextFont {
    size: u32,
}

impl TextFont {
    pub fn at_size(size: u32) -> Self {
        Self { size }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    fn px(&self) -> f32 {
        self.size as f32
    }

    /// e.g. `"24px DejaVu Sans"`.
    pub fn descriptor(&self) -> String {
        layout::font_descriptor(self.size)
    }

    /// Offset from a vertical center line down to the baseline, i.e. where
    /// the baseline goes when text is middle-aligned.
    pub fn middle_offset(&self) -> f64 {
        match face().horizontal_line_metrics(self.px()) {
            Some(line) => f64::from(line.ascent + line.descent) / 2.0,
            None => f64::from(self.px()) * 0.35,
        }
    }

    /// Pen positions for each character of `text`, starting at 0, and the
    /// total advance.
    pub fn shape(&self, text: &str) -> (Vec<PlacedGlyph>, f64) {
        let font = face();
        let px = self.px();
        let mut glyphs = Vec::with_capacity(text.len());
        let mut pen = 0.0_f64;
        let mut prev: Option<char> = None;

        for ch in text.chars().map(normalize) {
            if let Some(left) = prev
                && let Some(kern) = font.horizontal_kern(left, ch, px)
            {
                pen += f64::from(kern);
            }
            glyphs.push(PlacedGlyph { ch, x: pen });
            pen += f64::from(font.metrics(ch, px).advance_width);
            prev = Some(ch);
        }

        (glyphs, pen)
    }

    /// Coverage bitmap for one glyph, row-major from the top, `0..=255`.
    pub fn rasterize(&self, ch: char) -> (Metrics, Vec<u8>) {
        face().rasterize(normalize(ch), self.px())
    }
}

impl TextMeasure for TextFont {
    fn measure_text_width(&self, text: &str) -> f64 {
        self.shape(text).1
    }
}
