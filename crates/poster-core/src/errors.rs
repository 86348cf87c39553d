pub type PosterResult<T> = Result<T, PosterError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PosterError {
    /// The input was not a `#RGB` or `#RRGGBB` hex color.
    #[error("invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),
}
