//! QR code image generation.
//!
//! The symbol is built with error-correction level M, drawn as an SVG path
//! and rasterized with resvg into a 256x256 PNG:
//! - White background, black modules
//! - 4-module quiet zone around the symbol
//! - Whole-pixel module size, symbol centered in the image

use std::fmt::Write;

use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};

/// Image edge length in pixels.
pub const IMAGE_SIZE: u32 = 256;

/// Quiet zone width, in modules, on each side of the symbol.
const QUIET_ZONE: u32 = 4;

/// QR encoding errors. The message is shown to the client as-is.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The payload does not fit in any QR version at level M.
    #[error("{0}")]
    Qr(#[from] QrError),

    /// The SVG could not be rasterized or the PNG could not be written.
    #[error("{0}")]
    Raster(String),
}

/// Encode `url` as a QR code PNG.
pub fn encode(url: &str) -> Result<Vec<u8>, EncodeError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::M)?;
    let svg = symbol_svg(&code);

    let options = resvg::usvg::Options::default();
    let tree = resvg::usvg::Tree::from_str(&svg, &options)
        .map_err(|e| EncodeError::Raster(format!("SVG parse error: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(IMAGE_SIZE, IMAGE_SIZE)
        .ok_or_else(|| EncodeError::Raster("failed to create pixmap".to_string()))?;

    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| EncodeError::Raster(format!("PNG encode error: {e}")))
}

/// Lay the symbol out as one SVG path of unit squares.
///
/// Even a version 40 symbol (177 modules + quiet zone) fits in 256 pixels
/// at one pixel per module, so the scale is always at least 1.
fn symbol_svg(code: &QrCode) -> String {
    let width = code.width() as u32;
    let total = width + 2 * QUIET_ZONE;
    let scale = (IMAGE_SIZE / total).max(1);
    let offset = (IMAGE_SIZE.saturating_sub(total * scale)) / 2 + QUIET_ZONE * scale;

    let mut path = String::with_capacity(code.width() * code.width() * 8);
    for (i, color) in code.to_colors().into_iter().enumerate() {
        if color != Color::Dark {
            continue;
        }
        let i = i as u32;
        let x = offset + (i % width) * scale;
        let y = offset + (i / width) * scale;
        let _ = write!(path, "M{x} {y}h{scale}v{scale}h-{scale}z");
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}" shape-rendering="crispEdges"><rect width="{s}" height="{s}" fill="#fff"/><path d="{path}" fill="#000"/></svg>"##,
        s = IMAGE_SIZE,
        path = path,
    )
}
