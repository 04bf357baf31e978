//! Fetching and inlining of card images.
//!
//! The rasterizer never touches the network; every image is resolved here
//! to a `data:` URI first. Remote fetching goes through [`ResourceFetcher`]
//! so tests and offline runs can swap the network out.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use percent_encoding::percent_decode_str;

use crate::error::ResourceError;
use crate::render::CardView;

/// Raw bytes of a fetched resource
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedResource {
    pub bytes: Vec<u8>,
    /// `Content-Type` reported by the source, if any
    pub content_type: Option<String>,
}

/// Source of remote images
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedResource, ResourceError>;
}

/// HTTP(S) fetcher backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, ResourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("devwrap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ResourceError::Fetch {
                url: String::new(),
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedResource, ResourceError> {
        let fetch_err = |e: reqwest::Error| ResourceError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fetch_err)?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await.map_err(fetch_err)?.to_vec();

        tracing::debug!(url, bytes = bytes.len(), "Fetched resource");
        Ok(FetchedResource {
            bytes,
            content_type,
        })
    }
}

/// Refuses every request; only inline `data:` images survive
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineFetcher;

#[async_trait]
impl ResourceFetcher for OfflineFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedResource, ResourceError> {
        Err(ResourceError::Offline(url.to_string()))
    }
}

/// Image MIME type of `bytes`, from magic numbers.
///
/// SVG has no magic number, so a leading `<svg` or `<?xml` is accepted.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if let Ok(format) = image::guess_format(bytes) {
        return match format {
            ImageFormat::Png => Some("image/png"),
            ImageFormat::Jpeg => Some("image/jpeg"),
            ImageFormat::Gif => Some("image/gif"),
            ImageFormat::WebP => Some("image/webp"),
            _ => None,
        };
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
    let head = head.trim_start_matches('\u{feff}').trim_start();
    if head.starts_with("<svg") || head.starts_with("<?xml") {
        Some("image/svg+xml")
    } else {
        None
    }
}

/// `data:<mime>;base64,<payload>`
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Split a `data:` URI into its MIME type and decoded bytes.
pub fn parse_data_uri(uri: &str) -> Result<(String, Vec<u8>), ResourceError> {
    let invalid = |why: &str| ResourceError::DataUri(why.to_string());

    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| invalid("missing data: prefix"))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| invalid("missing payload separator"))?;

    let (mime, is_base64) = match meta.strip_suffix(";base64") {
        Some(mime) => (mime, true),
        None => (meta, false),
    };
    let mime = if mime.is_empty() { "text/plain" } else { mime };

    let bytes = if is_base64 {
        STANDARD
            .decode(payload.trim())
            .map_err(|e| invalid(&e.to_string()))?
    } else {
        percent_decode_str(payload).collect()
    };

    Ok((mime.to_string(), bytes))
}

/// Card URL -> embeddable `data:` URI
pub type Embedded = HashMap<String, String>;

fn embed_inline(uri: &str) -> Result<String, ResourceError> {
    let (declared, bytes) = parse_data_uri(uri)?;
    let mime = sniff_mime(&bytes)
        .or_else(|| declared.starts_with("image/svg").then_some("image/svg+xml"))
        .ok_or_else(|| ResourceError::Unsupported(truncate(uri)))?;
    Ok(to_data_uri(mime, &bytes))
}

async fn embed_remote(url: &str, fetcher: &dyn ResourceFetcher) -> Result<String, ResourceError> {
    let fetched = fetcher.fetch(url).await?;
    let mime = sniff_mime(&fetched.bytes)
        .or_else(|| {
            fetched
                .content_type
                .as_deref()
                .filter(|ct| ct.starts_with("image/svg"))
                .map(|_| "image/svg+xml")
        })
        .ok_or_else(|| ResourceError::Unsupported(url.to_string()))?;
    Ok(to_data_uri(mime, &fetched.bytes))
}

fn truncate(uri: &str) -> String {
    uri.chars().take(48).collect()
}

/// Resolve every image on the card. Failures are collected, not raised.
pub(crate) async fn embed_all(
    card: &CardView,
    fetcher: &dyn ResourceFetcher,
) -> (Embedded, Vec<ResourceError>) {
    let mut embedded = Embedded::new();
    let mut warnings = Vec::new();

    for url in card.resource_urls() {
        let result = if url.starts_with("data:") {
            embed_inline(url)
        } else {
            embed_remote(url, fetcher).await
        };
        match result {
            Ok(uri) => {
                embedded.insert(url.to_string(), uri);
            }
            Err(e) => warnings.push(e),
        }
    }

    (embedded, warnings)
}

/// Offline variant of [`embed_all`]: remote URLs are reported, not fetched
pub(crate) fn embed_inline_only(card: &CardView) -> (Embedded, Vec<ResourceError>) {
    let mut embedded = Embedded::new();
    let mut warnings = Vec::new();

    for url in card.resource_urls() {
        let result = if url.starts_with("data:") {
            embed_inline(url)
        } else {
            Err(ResourceError::Offline(url.to_string()))
        };
        match result {
            Ok(uri) => {
                embedded.insert(url.to_string(), uri);
            }
            Err(e) => warnings.push(e),
        }
    }

    (embedded, warnings)
}
