use std::fs;
use std::path::Path;

use iced::widget::image::Handle;

use super::errors::LogoError;

/// Read and decode the image at `path` into an RGBA handle.
pub(crate) fn decode_logo(path: &Path) -> Result<Handle, LogoError> {
    let bytes = fs::read(path)?;
    decode_logo_bytes(&bytes)
}

fn decode_logo_bytes(bytes: &[u8]) -> Result<Handle, LogoError> {
    let rgba = image::load_from_memory(bytes)?.into_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};

    use super::{LogoError, decode_logo, decode_logo_bytes};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image =
            RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("png should encode");
        bytes
    }

    #[test]
    fn given_png_bytes_when_decoded_then_handle_is_returned() {
        let result = decode_logo_bytes(&png_bytes(3, 2));

        assert!(result.is_ok());
    }

    #[test]
    fn given_garbage_bytes_when_decoded_then_decode_error_is_returned() {
        let result = decode_logo_bytes(b"definitely not an image");

        assert!(matches!(result, Err(LogoError::Decode(_))));
    }

    #[test]
    fn given_missing_file_when_decoded_then_io_error_is_returned() {
        let path = std::env::temp_dir().join(format!(
            "chatshell-logo-missing-{}.png",
            std::process::id()
        ));

        let result = decode_logo(&path);

        assert!(matches!(result, Err(LogoError::Io(_))));
    }
}
