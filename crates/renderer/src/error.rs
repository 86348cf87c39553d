pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The PNG encoder rejected the frame.
    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}
