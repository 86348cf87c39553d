/// Font size in pixels, kept inside the range the size slider offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u32);

impl FontSize {
    pub const MIN: u32 = 12;
    pub const MAX: u32 = 72;

    /// Clamps `px` into `[MIN, MAX]`.
    #[inline]
    #[must_use]
    pub fn new(px: u32) -> Self {
        Self(px.clamp(Self::MIN, Self::MAX))
    }

    #[inline]
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(24)
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// One complete, self-contained copy of everything the poster shows.
///
/// Snapshots handed to [`crate::history::HistoryBuffer`] are owned clones, so
/// editing the live state can never reach back into history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    pub text: String,
    pub font_size: FontSize,
    pub color: crate::color::Rgb,
}

impl EditorState {
    pub const DEFAULT_TEXT: &'static str = "Click to edit text";

    pub fn new(
        text: impl Into<String>,
        font_size: FontSize,
        color: crate::color::Rgb,
    ) -> Self {
        Self {
            text: text.into(),
            font_size,
            color,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TEXT, FontSize::default(), crate::color::Rgb::BLACK)
    }
}
