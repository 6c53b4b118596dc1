//! Error types for color validation and screen sampling.

use thiserror::Error;

/// Reasons a raw color string is rejected by [`HexColor::normalize`].
///
/// [`HexColor::normalize`]: crate::HexColor::normalize
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Nothing but whitespace (or a lone `#`) was entered.
    #[error("color value is empty")]
    Empty,

    /// Not a 3- or 6-digit hex color.
    #[error("'{0}' is not a 3- or 6-digit hex color")]
    InvalidFormat(String),
}

/// Failures reported by a screen color sampler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplerError {
    /// The platform sampler could not be created.
    #[error("screen color sampler unavailable: {0}")]
    Unavailable(String),

    /// A pixel was picked but could not be converted to sRGB.
    #[error("sampled color could not be converted to sRGB")]
    ColorSpace,
}
