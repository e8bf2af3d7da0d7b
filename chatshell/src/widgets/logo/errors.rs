use thiserror::Error;

/// Errors emitted while reading or decoding the sidebar logo.
#[derive(Debug, Error)]
pub(crate) enum LogoError {
    /// Reading the image file failed.
    #[error("logo IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a decodable image.
    #[error("logo decode failed: {0}")]
    Decode(#[from] image::ImageError),
}
