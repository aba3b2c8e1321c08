use std::path::PathBuf;

use crate::foundation::error::{TextGifError, TextGifResult};

pub const DEFAULT_TEXT: &str = "Hello!";
pub const DEFAULT_OUTPUT: &str = "output.gif";
pub const DEFAULT_FRAME_COUNT: u32 = 48;
pub const DEFAULT_DEPTH: u32 = 16;

/// What to render and where to write it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Single line of text to render.
    pub text: String,
    /// Destination GIF path. An existing file is replaced.
    pub output_path: PathBuf,
    /// Number of frames in the loop; must be at least 2.
    pub frame_count: u32,
    /// Extrusion depth in pixels; 0 draws flat text.
    pub depth: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            frame_count: DEFAULT_FRAME_COUNT,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> TextGifResult<()> {
        if self.frame_count < 2 {
            return Err(TextGifError::validation(format!(
                "frame count must be >= 2 (got {})",
                self.frame_count
            )));
        }
        if self.text.contains(['\n', '\r']) {
            return Err(TextGifError::validation(
                "text must be a single line (no line breaks)",
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(TextGifError::validation("output path must be non-empty"));
        }
        Ok(())
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}
