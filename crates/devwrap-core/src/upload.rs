//! Custom background upload: one image file to an inline `data:` URI.

use std::path::Path;

use image::ImageFormat;

use crate::error::WrapError;
use crate::export::{sniff_mime, to_data_uri};

/// Inline `bytes` as a data URI.
///
/// The MIME type is sniffed from content, then from the file extension;
/// nothing else is validated. An unreadable image renders blank on export.
pub fn image_data_uri(bytes: &[u8], file_name: Option<&str>) -> String {
    let mime = sniff_mime(bytes)
        .or_else(|| {
            file_name
                .and_then(|name| ImageFormat::from_path(name).ok())
                .map(|format| format.to_mime_type())
        })
        .unwrap_or("application/octet-stream");
    to_data_uri(mime, bytes)
}

/// Read an image file into a data URI
pub fn load_image_file(path: impl AsRef<Path>) -> Result<String, WrapError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Loaded custom background");
    let name = path.file_name().and_then(|n| n.to_str());
    Ok(image_data_uri(&bytes, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_is_sniffed() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(image_data_uri(&png, Some("wrong.jpg")).starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_extension_fallback() {
        assert!(image_data_uri(b"??", Some("photo.webp")).starts_with("data:image/webp;base64,"));
        assert!(image_data_uri(b"??", None).starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_image_file("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, WrapError::Io(_)));
    }

    #[test]
    fn test_load_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bg.svg");
        std::fs::write(&path, "<svg xmlns='http://www.w3.org/2000/svg'/>").unwrap();
        let uri = load_image_file(&path).unwrap();
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
    }
}
