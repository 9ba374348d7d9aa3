//! QR rendering for terminal output

use super::QrMatrix;
use crate::uri::constants::QUIET_ZONE_MODULES;
use crate::Result;

/// Render a URI as a QR code made of Unicode block characters.
///
/// Each character covers two vertically stacked modules, so the output is
/// roughly square in a typical terminal font. Dark modules are drawn with
/// ink; the surrounding quiet zone is left as spaces.
pub fn render_terminal(uri: &str) -> Result<String> {
    let matrix = QrMatrix::from_uri(uri)?;
    Ok(render_matrix(&matrix))
}

pub(crate) fn render_matrix(matrix: &QrMatrix) -> String {
    let width = matrix.width();
    let quiet = " ".repeat(QUIET_ZONE_MODULES);
    let blank_line = " ".repeat(width + 2 * QUIET_ZONE_MODULES);

    let mut out = String::new();

    // Top quiet zone
    for _ in 0..QUIET_ZONE_MODULES / 2 {
        out.push_str(&blank_line);
        out.push('\n');
    }

    for y in (0..width).step_by(2) {
        out.push_str(&quiet);
        for x in 0..width {
            let top = matrix.is_dark(x, y);
            let bottom = matrix.is_dark(x, y + 1);

            let ch = match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            };
            out.push(ch);
        }
        out.push_str(&quiet);
        out.push('\n');
    }

    // Bottom quiet zone
    for _ in 0..QUIET_ZONE_MODULES / 2 {
        out.push_str(&blank_line);
        out.push('\n');
    }

    out
}
