//! Export pipeline: `CardView -> SVG -> PNG`.
//!
//! The card is laid out as SVG sized to the live bounding box of the
//! on-screen card, every referenced image is fetched and inlined, and the
//! result is rasterized at a fixed device-pixel-ratio.
//!
//! Resource failures are soft: the image is still produced, the offending
//! resource is left blank and reported in [`ExportedImage::warnings`].

mod raster;
mod resources;
mod svg;

pub use resources::{
    parse_data_uri, sniff_mime, to_data_uri, Embedded, FetchedResource, HttpFetcher, OfflineFetcher,
    ResourceFetcher,
};
pub use svg::card_svg;

use crate::config::ExportOptions;
use crate::error::{ExportError, ResourceError};
use crate::render::CardView;
use crate::types::WrapProfile;

/// Design size of the card in CSS pixels (9:16)
pub const DESIGN_WIDTH: f64 = 540.0;
pub const DESIGN_HEIGHT: f64 = 960.0;

/// Measured size of the rendered card, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBounds {
    pub width: f64,
    pub height: f64,
}

impl CardBounds {
    /// The card at its design size
    pub const DESIGN: CardBounds = CardBounds {
        width: DESIGN_WIDTH,
        height: DESIGN_HEIGHT,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Box of the given width at the card's 9:16 aspect
    pub fn from_width(width: f64) -> Self {
        Self::new(width, width * DESIGN_HEIGHT / DESIGN_WIDTH)
    }

    fn validate(self) -> Result<Self, ExportError> {
        let ok = |v: f64| v.is_finite() && v >= 1.0;
        if ok(self.width) && ok(self.height) {
            Ok(self)
        } else {
            Err(ExportError::EmptyBounds {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// A rasterized card
#[derive(Debug, Clone)]
pub struct ExportedImage {
    png: Vec<u8>,
    width: u32,
    height: u32,
    warnings: Vec<ResourceError>,
}

impl ExportedImage {
    /// PNG-encoded bytes
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    pub fn into_png(self) -> Vec<u8> {
        self.png
    }

    /// Pixel width (bounds × pixel ratio)
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resources that could not be loaded and render blank
    pub fn warnings(&self) -> &[ResourceError] {
        &self.warnings
    }
}

/// `software-engineer-wrap-<year>[-<MM>]-<theme>.png`
pub fn export_filename(profile: &WrapProfile) -> String {
    format!(
        "software-engineer-wrap-{}-{}.png",
        profile.period_slug(),
        profile.personality.key()
    )
}

/// Rasterize `card` at `bounds` × `options.pixel_ratio`.
pub async fn export(
    card: &CardView,
    bounds: CardBounds,
    fetcher: &dyn ResourceFetcher,
    options: &ExportOptions,
) -> Result<ExportedImage, ExportError> {
    let bounds = bounds.validate()?;

    let (embedded, warnings) = if options.offline {
        resources::embed_inline_only(card)
    } else {
        resources::embed_all(card, fetcher).await
    };
    for warning in &warnings {
        tracing::warn!("Export resource left blank: {}", warning);
    }

    let svg = card_svg(card, bounds, &embedded);
    let (png, width, height) = raster::rasterize(&svg, bounds, options.pixel_ratio)?;

    tracing::info!(
        width,
        height,
        bytes = png.len(),
        missing = warnings.len(),
        "Card exported"
    );

    Ok(ExportedImage {
        png,
        width,
        height,
        warnings,
    })
}
