/// Convenience result type used across textgif.
pub type TextGifResult<T> = Result<T, TextGifError>;

/// Top-level error taxonomy. Every variant aborts the whole generation.
#[derive(thiserror::Error, Debug)]
pub enum TextGifError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// The bold sans-serif typeface could not be found or loaded.
    #[error("font resolution error: {0}")]
    FontResolution(String),

    /// Rasterization of a frame failed.
    #[error("render error: {0}")]
    Render(String),

    /// Assembling or encoding the GIF stream failed.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The output file could not be written.
    #[error("file write error: {0}")]
    FileWrite(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TextGifError {
    /// Build a [`TextGifError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TextGifError::FontResolution`] value.
    pub fn font_resolution(msg: impl Into<String>) -> Self {
        Self::FontResolution(msg.into())
    }

    /// Build a [`TextGifError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TextGifError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build a [`TextGifError::FileWrite`] value.
    pub fn file_write(msg: impl Into<String>) -> Self {
        Self::FileWrite(msg.into())
    }
}
