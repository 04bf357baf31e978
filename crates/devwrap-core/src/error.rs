//! Error types for Software Engineer Wrap

use thiserror::Error;

/// Main error type for wrap operations
#[derive(Error, Debug)]
pub enum WrapError {
    /// Session storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Rasterizing the card failed
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// A share step failed in a way the caller must see
    #[error("Share error: {0}")]
    Share(#[from] ShareError),

    /// Loading an embedded resource failed
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Unknown theme key, malformed month, etc.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Session storage failures.
///
/// Parse failures on read never reach the user: callers log them and fall
/// back to defaults.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Stored JSON was corrupt or had the wrong shape
    #[error("Failed to parse stored '{key}': {source}")]
    Parse {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a value for storage failed
    #[error("Failed to serialize '{key}': {source}")]
    Serialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Backing file could not be accessed
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rasterization failures. No file is written when any of these occur.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The card has no measurable box (not mounted, or zero-sized)
    #[error("Card is not mounted or has an empty bounding box ({width}x{height})")]
    EmptyBounds { width: f64, height: f64 },

    /// The generated SVG could not be parsed by the rasterizer
    #[error("SVG parse failed: {0}")]
    Svg(String),

    /// Output canvas could not be allocated
    #[error("Pixmap allocation failed for {width}x{height}")]
    Pixmap { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// A remote or inline image could not be loaded.
///
/// Non-fatal for export: the resource renders blank.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    /// Network request failed or returned an error status
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The data URI was malformed
    #[error("Invalid data URI: {0}")]
    DataUri(String),

    /// The bytes are not an image format the rasterizer understands
    #[error("Unsupported image data from {0}")]
    Unsupported(String),

    /// Fetching is disabled
    #[error("Offline: {0} was not fetched")]
    Offline(String),
}

/// Share-flow failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShareError {
    /// Native share sheet is not available on this platform
    #[error("Native share is not supported")]
    Unsupported,

    /// User dismissed the share sheet
    #[error("Share cancelled")]
    Cancelled,

    /// Clipboard is unavailable or permission was denied
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    /// The fallback download could not be written
    #[error("Download failed: {0}")]
    Download(String),

    /// Opening a browser context failed
    #[error("Failed to open {url}: {reason}")]
    Open { url: String, reason: String },
}

/// Result type alias using WrapError
pub type WrapResult<T> = Result<T, WrapError>;
