use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use super::CardBounds;
use crate::error::ExportError;

/// Render `svg` at `bounds × pixel_ratio` and encode as PNG.
///
/// Returns the PNG bytes and the pixel dimensions.
pub(crate) fn rasterize(
    svg: &str,
    bounds: CardBounds,
    pixel_ratio: f32,
) -> Result<(Vec<u8>, u32, u32), ExportError> {
    let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };

    let mut options = Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = Tree::from_data(svg.as_bytes(), &options)
        .map_err(|err| ExportError::Svg(err.to_string()))?;

    let width = (bounds.width * f64::from(ratio)).round() as u32;
    let height = (bounds.height * f64::from(ratio)).round() as u32;
    let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::Pixmap { width, height })?;

    resvg::render(
        &tree,
        Transform::from_scale(ratio, ratio),
        &mut pixmap.as_mut(),
    );

    let png = encode_png(&pixmap)?;
    Ok((png, width, height))
}

/// tiny-skia stores premultiplied alpha; PNG wants straight alpha
fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let image = RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba).ok_or(
        ExportError::Pixmap {
            width: pixmap.width(),
            height: pixmap.height(),
        },
    )?;

    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|err| ExportError::Encode(err.to_string()))?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='10' height='20' viewBox='0 0 10 20'><rect width='10' height='20' fill='red'/></svg>";

    #[test]
    fn test_scales_by_pixel_ratio() {
        let (png, width, height) = rasterize(SQUARE, CardBounds::new(10.0, 20.0), 2.0).unwrap();
        assert_eq!((width, height), (20, 40));
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn test_invalid_svg_is_an_error() {
        let err = rasterize("<not-svg", CardBounds::new(10.0, 10.0), 2.0).unwrap_err();
        assert!(matches!(err, ExportError::Svg(_)));
    }
}
