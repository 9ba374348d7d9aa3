//! QR code display.

use algouri_core::qr::render_terminal;

/// Print a QR code for `uri` to the terminal.
///
/// Encoding failures (non-ASCII address, oversized note) are reported
/// and the URI is still printed by the caller.
pub fn print_qr_code(uri: &str) {
    match render_terminal(uri) {
        Ok(rendered) => print!("{}", rendered),
        Err(e) => eprintln!("\x1b[1;31m✗\x1b[0m Failed to generate QR code: {}", e),
    }
}
