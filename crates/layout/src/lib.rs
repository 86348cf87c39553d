//! Greedy word-wrap and vertical centering for the poster's single text layer.
//!
//! [`compute_layout`] is a pure function. Font metrics come in through the
//! [`TextMeasure`] capability so it can be driven by any render target, or by
//! a closure in tests.

pub mod measure;

pub use measure::{FONT_FAMILY, TextMeasure, font_descriptor};

/// Horizontal space kept free across both sides of the canvas.
pub const WRAP_MARGIN: f64 = 40.0;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// The fixed poster surface.
    pub const POSTER: CanvasSize = CanvasSize::new(600.0, 400.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Widest a wrapped line may measure. Negative for tiny canvases, in which
    /// case every word after the first lands on its own line.
    #[inline]
    #[must_use]
    pub fn wrap_width(&self) -> f64 {
        self.width - WRAP_MARGIN
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::POSTER
    }
}

/// One wrapped line, drawn centered horizontally and vertically on
/// `(anchor_x, baseline_y)`.
///
/// `content` keeps the trailing space the wrapper appends after every word.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub content: String,
    pub baseline_y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    pub lines: Vec<Line>,
    pub anchor_x: f64,
    pub line_height: f64,
    pub font_size: u32,
    pub color: poster_core::Rgb,
}

impl LineLayout {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_height(&self) -> f64 {
        self.lines.len() as f64 * self.line_height
    }
}

/// Splits `text` on single spaces and packs the words greedily into lines no
/// wider than [`CanvasSize::wrap_width`].
///
/// - Splitting is naive: `"a  b"` yields an empty word between `a` and `b`,
///   and `""` yields one empty word, so there is always at least one line.
/// - A word only starts a new line when the current one is non-empty, so a
///   single overlong word still gets a line of its own.
/// - The last line is always emitted.
///
/// `font_size` is taken as is; callers clamp it.
pub fn compute_layout<M>(
    text: &str,
    font_size: u32,
    color: poster_core::Rgb,
    canvas: CanvasSize,
    measure: &M,
) -> LineLayout
where
    M: TextMeasure + ?Sized,
{
    let wrap_width = canvas.wrap_width();
    let mut contents: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split(' ') {
        let mut candidate = String::with_capacity(current_line.len() + word.len() + 1);
        candidate.push_str(&current_line);
        candidate.push_str(word);
        candidate.push(' ');

        if measure.measure_text_width(&candidate) > wrap_width && !current_line.is_empty() {
            contents.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
            current_line.push(' ');
        } else {
            current_line = candidate;
        }
    }
    contents.push(current_line);

    let size = f64::from(font_size);
    let line_height = size * LINE_HEIGHT_FACTOR;
    let total_height = contents.len() as f64 * line_height;
    let start_y = (canvas.height - total_height) / 2.0 + size / 2.0;

    let lines = contents
        .into_iter()
        .enumerate()
        .map(|(i, content)| Line {
            content,
            baseline_y: start_y + i as f64 * line_height,
        })
        .collect();

    LineLayout {
        lines,
        anchor_x: canvas.width / 2.0,
        line_height,
        font_size,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poster_core::Rgb;

    /// Every char is 10 units wide.
    fn fixed(line: &str) -> f64 {
        line.chars().count() as f64 * 10.0
    }

    fn contents(layout: &LineLayout) -> Vec<&str> {
        layout.lines.iter().map(|l| l.content.as_str()).collect()
    }

    #[track_caller]
    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_text_yields_one_line() {
        let color: Rgb = "#000".parse().unwrap();
        let layout = compute_layout("", 24, color, CanvasSize::POSTER, &fixed);
        assert_eq!(contents(&layout), vec![" "]);
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        let layout = compute_layout("Hello world", 24, Rgb::BLACK, CanvasSize::POSTER, &fixed);
        assert_eq!(contents(&layout), vec!["Hello world "]);
        assert_close(layout.anchor_x, 300.0);
    }

    #[test]
    fn test_wraps_when_candidate_exceeds_budget() {
        // Budget is 100 - 40 = 60 units, i.e. 6 chars including the trailing space
        let canvas = CanvasSize::new(100.0, 100.0);
        let layout = compute_layout("aa bb cc dddd", 12, Rgb::BLACK, canvas, &fixed);
        assert_eq!(contents(&layout), vec!["aa bb ", "cc ", "dddd "]);
    }

    #[test]
    fn test_overlong_first_word_is_not_split() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let layout = compute_layout("abcdefghijkl x", 12, Rgb::BLACK, canvas, &fixed);
        assert_eq!(contents(&layout), vec!["abcdefghijkl ", "x "]);
    }

    #[test]
    fn test_negative_budget_puts_each_word_on_its_own_line() {
        let canvas = CanvasSize::new(10.0, 100.0);
        assert!(canvas.wrap_width() < 0.0);
        let layout = compute_layout("a b c", 12, Rgb::BLACK, canvas, &fixed);
        assert_eq!(contents(&layout), vec!["a ", "b ", "c "]);
    }

    #[test]
    fn test_consecutive_spaces_produce_empty_words() {
        let layout = compute_layout("a  b", 24, Rgb::BLACK, CanvasSize::POSTER, &fixed);
        assert_eq!(contents(&layout), vec!["a  b "]);

        let narrow = CanvasSize::new(10.0, 100.0);
        let layout = compute_layout("a  b", 24, Rgb::BLACK, narrow, &fixed);
        assert_eq!(contents(&layout), vec!["a ", " ", "b "]);
    }

    #[test]
    fn test_lines_reconstruct_the_words_in_order() {
        let text = "the quick brown fox jumps over the lazy dog  twice";
        for width in [10.0, 80.0, 120.0, 250.0, 600.0] {
            let canvas = CanvasSize::new(width, 400.0);
            let layout = compute_layout(text, 24, Rgb::BLACK, canvas, &fixed);
            let joined: String = layout.lines.iter().map(|l| l.content.as_str()).collect();
            assert_eq!(joined, format!("{text} "), "width {width}");
        }
    }

    #[test]
    fn test_vertical_centering() {
        let canvas = CanvasSize::new(100.0, 400.0);
        let layout = compute_layout("aa bb cc dd", 30, Rgb::BLACK, canvas, &fixed);
        let n = layout.len() as f64;
        let h = 30.0 * 1.2;

        assert_eq!(layout.len(), 2);
        assert_close(layout.line_height, h);
        assert_close(layout.lines[0].baseline_y, (400.0 - n * h) / 2.0 + 15.0);
        for pair in layout.lines.windows(2) {
            assert_close(pair[1].baseline_y - pair[0].baseline_y, h);
        }
    }

    #[test]
    fn test_color_and_size_are_carried_through() {
        let color: Rgb = "#ff0000".parse().unwrap();
        let layout = compute_layout("x", 48, color, CanvasSize::POSTER, &fixed);
        assert_eq!(layout.color, color);
        assert_eq!(layout.font_size, 48);
        assert_close(layout.total_height(), 48.0 * 1.2);
    }
}
