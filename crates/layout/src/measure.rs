/// The one font family the poster is drawn in. Renderers look their embedded
/// face up by this name.
pub const FONT_FAMILY: &str = "DejaVu Sans";

/// Width of a string as rendered by some target, in canvas units.
///
/// Implementations are bound to one font size; the layout engine never
/// switches fonts mid-measurement.
pub trait TextMeasure {
    fn measure_text_width(&self, text: &str) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f64,
{
    #[inline]
    fn measure_text_width(&self, text: &str) -> f64 {
        self(text)
    }
}

/// CSS-style font shorthand for `size`, e.g. `"24px DejaVu Sans"`.
#[must_use]
pub fn font_descriptor(size: u32) -> String {
    format!("{size}px {FONT_FAMILY}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_measure() {
        let per_char = 7.5;
        let m = move |s: &str| s.len() as f64 * per_char;
        assert_eq!(m.measure_text_width("abcd"), 30.0);
    }

    #[test]
    fn test_font_descriptor() {
        assert_eq!(font_descriptor(24), "24px DejaVu Sans");
    }
}
