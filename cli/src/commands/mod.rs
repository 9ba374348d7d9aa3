//! CLI command implementations.

mod badge;
mod parse;
mod request;

pub use badge::{badge_style, write_badge};
pub use parse::parse_uri;
pub use request::{print_qr, print_uri, share};
