/// Convenience result type used across Aquaglow.
pub type AquaglowResult<T> = Result<T, AquaglowError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum AquaglowError {
    /// The raster read failed or the source image is not decodable.
    ///
    /// Never fatal: [`crate::PaletteExtractor::extract`] recovers by
    /// substituting the fallback palette, and a failed
    /// [`crate::decode_image`] leaves the item pending so hover uses its
    /// static color.
    #[error("sample unavailable: {0}")]
    SampleUnavailable(String),

    /// Invalid user-provided data (hex strings, configuration values).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AquaglowError {
    /// Build an [`AquaglowError::SampleUnavailable`] value.
    pub fn sample_unavailable(msg: impl Into<String>) -> Self {
        Self::SampleUnavailable(msg.into())
    }

    /// Build an [`AquaglowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
