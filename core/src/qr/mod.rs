//! QR code encoding of payment URIs
//!
//! The URI is encoded as raw ASCII bytes at error correction level Q, which
//! tolerates roughly 25% damage and leaves room for a logo over the centre
//! of the code. Nothing here alters the string being encoded.

mod terminal;

use qrcode::{render::svg, Color, EcLevel, QrCode};

use crate::uri::constants::DEFAULT_MODULE_SIZE;
use crate::{Error, Result};

pub use terminal::render_terminal;

/// Error correction level used for every payment QR code
pub const ERROR_CORRECTION: EcLevel = EcLevel::Q;

/// Rendering configuration for plain QR images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrConfig {
    /// Pixels per module
    pub module_size: u32,
    /// Draw the standard four-module light border
    pub quiet_zone: bool,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            module_size: DEFAULT_MODULE_SIZE,
            quiet_zone: true,
        }
    }
}

/// Encode a URI into a QR code.
///
/// Fails with [`Error::NonAsciiUri`] if the string has non-ASCII bytes (only
/// possible through the unencoded receiver address), and with
/// [`Error::QrEncoding`] if the data does not fit in any QR version.
pub fn encode(uri: &str) -> Result<QrCode> {
    if !uri.is_ascii() {
        return Err(Error::NonAsciiUri);
    }

    let code = QrCode::with_error_correction_level(uri.as_bytes(), ERROR_CORRECTION)?;
    tracing::debug!("encoded {} bytes as {:?} QR code, width {}", uri.len(), code.version(), code.width());
    Ok(code)
}

/// Square grid of QR modules, `true` for dark.
///
/// Row-major, without quiet zone. This is the form the badge compositor
/// draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Encode a URI and capture its module grid
    pub fn from_uri(uri: &str) -> Result<Self> {
        Ok(Self::from(&encode(uri)?))
    }

    /// Modules per side
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at column `x`, row `y` is dark.
    /// Coordinates outside the grid are light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&dark| dark).count()
    }

    /// Iterate over dark module coordinates as `(x, y)`
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.modules
            .iter()
            .enumerate()
            .filter(|&(_, &dark)| dark)
            .map(move |(i, _)| (i % self.width, i / self.width))
    }
}

impl From<&QrCode> for QrMatrix {
    fn from(code: &QrCode) -> Self {
        Self {
            width: code.width(),
            modules: code.to_colors().into_iter().map(|c| c == Color::Dark).collect(),
        }
    }
}

/// Render an unstyled QR code as an SVG document
pub fn render_svg(uri: &str, config: &QrConfig) -> Result<String> {
    let code = encode(uri)?;

    let svg = code
        .render::<svg::Color>()
        .quiet_zone(config.quiet_zone)
        .module_dimensions(config.module_size, config.module_size)
        .build();

    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URI: &str = "algorand://4AOJ5QITUBWZGO4K5AF77H5GED5A4QDBB6DOQGI63QE2GU6KD2XNETBBJE?label=Barclay&amount=100&xnote=Transporter%20Insurance";

    #[test]
    fn test_encode_uses_q_level() {
        let code = encode(URI).unwrap();
        assert_eq!(code.error_correction_level(), EcLevel::Q);
    }

    #[test]
    fn test_encode_rejects_non_ascii() {
        assert!(matches!(encode("algorand://adresse-é"), Err(Error::NonAsciiUri)));
    }

    #[test]
    fn test_encode_rejects_oversized_input() {
        let huge = format!("algorand://A?note={}", "x".repeat(4000));
        assert!(matches!(encode(&huge), Err(Error::QrEncoding(_))));
    }

    #[test]
    fn test_matrix_is_deterministic() {
        let a = QrMatrix::from_uri(URI).unwrap();
        let b = QrMatrix::from_uri(URI).unwrap();
        assert_eq!(a, b);
        assert!(a.width() >= 21);
        assert_eq!((a.width() - 17) % 4, 0);
    }

    #[test]
    fn test_matrix_finder_pattern() {
        let matrix = QrMatrix::from_uri(URI).unwrap();
        // top-left finder pattern: dark outer ring, light separator, dark core
        assert!(matrix.is_dark(0, 0));
        assert!(matrix.is_dark(6, 6));
        assert!(!matrix.is_dark(1, 1));
        assert!(matrix.is_dark(3, 3));
        assert!(!matrix.is_dark(7, 7));
        assert!(!matrix.is_dark(matrix.width(), 0));
    }

    #[test]
    fn test_dark_modules_matches_count() {
        let matrix = QrMatrix::from_uri(URI).unwrap();
        assert_eq!(matrix.dark_modules().count(), matrix.dark_count());
        assert!(matrix.dark_modules().all(|(x, y)| matrix.is_dark(x, y)));
    }

    #[test]
    fn test_render_svg() {
        let svg = render_svg(URI, &QrConfig::default()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }
}
