//! UI utilities for terminal output.

mod banner;
mod qr;

pub use banner::print_header;
pub use qr::print_qr_code;
