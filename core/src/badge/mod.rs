//! Styled QR badges for payment requests
//!
//! A badge is a square SVG: an optional coloured frame, the QR code tinted
//! with a foreground colour on a white field, and optionally the Algorand
//! mark in a small knockout at the centre. The knockout is sized in modules
//! so that error correction level Q can restore what it hides.

mod color;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::qr::QrMatrix;
use crate::uri::constants::{DEFAULT_BADGE_SIZE, QUIET_ZONE_MODULES};
use crate::uri::PaymentRequest;
use crate::Result;

pub use color::Rgb;

/// Simplified Algorand mark on a 100x100 grid
pub const ALGORAND_MARK_PATH: &str =
    "M0 100L46 0H62L100 100H80L56 38L20 100ZM40 58L50 40L72 100H56Z";

/// Whether the badge is drawn inside a coloured frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameConfiguration {
    #[default]
    Unframed,
    Framed(Rgb),
}

/// Visual configuration of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    /// Colour of the dark QR modules; darker colours scan better
    pub qr_color: Rgb,
    pub frame: FrameConfiguration,
    /// Draw the Algorand mark (always black) over the centre
    pub include_logo: bool,
    /// Side length in pixels
    pub size: u32,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            qr_color: Rgb::BLACK,
            frame: FrameConfiguration::Unframed,
            include_logo: false,
            size: DEFAULT_BADGE_SIZE,
        }
    }
}

/// Render a badge for a payment request as an SVG document.
pub fn render_badge(request: &PaymentRequest, style: &BadgeStyle) -> Result<String> {
    let uri = request.to_uri_string();
    let matrix = QrMatrix::from_uri(&uri)?;
    tracing::debug!("rendering {}px badge ({:?}, logo: {})", style.size, style.frame, style.include_logo);
    Ok(compose(&matrix, style))
}

fn compose(matrix: &QrMatrix, style: &BadgeStyle) -> String {
    let size = style.size as f64;
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
        style.size
    );

    // Frame
    let inset = match style.frame {
        FrameConfiguration::Framed(color) => {
            svg.push_str(&format!(r#"<rect width="{0}" height="{0}" fill="{1}"/>"#, style.size, color));
            size / 30.0
        }
        FrameConfiguration::Unframed => 0.0,
    };

    // QR code in module units, including its quiet zone, scaled into the inset square
    let quiet = QUIET_ZONE_MODULES as i64;
    let span = matrix.width() as i64 + 2 * quiet;
    svg.push_str(&format!(
        r#"<svg x="{0}" y="{0}" width="{1}" height="{1}" viewBox="{2} {2} {3} {3}" shape-rendering="crispEdges">"#,
        inset,
        size - 2.0 * inset,
        -quiet,
        span
    ));
    svg.push_str(&format!(
        r#"<rect x="{0}" y="{0}" width="{1}" height="{1}" fill="{2}"/>"#,
        -quiet,
        span,
        Rgb::WHITE
    ));
    svg.push_str(&format!(r#"<path fill="{}" d=""#, style.qr_color));
    for (x, y) in matrix.dark_modules() {
        svg.push_str(&format!("M{x} {y}h1v1h-1z"));
    }
    svg.push_str(r#""/>"#);

    // Logo: white knockout with the black mark inset inside it
    if style.include_logo {
        let area = LogoArea::for_width(matrix.width());
        svg.push_str(&format!(
            r#"<rect x="{0}" y="{0}" width="{1}" height="{1}" fill="{2}"/>"#,
            area.origin,
            area.side,
            Rgb::WHITE
        ));
        let mark_origin = area.origin + 1;
        svg.push_str(&format!(
            r#"<path transform="translate({mark_origin} {mark_origin}) scale({scale})" fill="{color}" d="{ALGORAND_MARK_PATH}"/>"#,
            scale = (area.side - 2) as f64 / 100.0,
            color = Rgb::BLACK,
        ));
    }

    svg.push_str("</svg></svg>");
    svg
}

/// Centred square of modules given up to the logo.
///
/// About a fifth of the code's side, odd so it sits exactly on the centre
/// module, and never smaller than 5 so the mark keeps a one-module margin.
/// It stays clear of the finder patterns and their separators, and covers
/// well under the ~25% of codewords level Q can restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogoArea {
    origin: usize,
    side: usize,
}

impl LogoArea {
    fn for_width(width: usize) -> Self {
        let side = (width / 5).max(5) | 1;
        Self {
            origin: (width - side) / 2,
            side,
        }
    }
}

/// Wrap an SVG document in a `data:` URL
pub fn to_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}
