//! Algouri Core - Algorand payment URIs, QR codes and badges
//!
//! This library builds `algorand://` payment prompt URIs from an immutable
//! [`PaymentRequest`], renders them as QR codes (plain SVG, terminal, or a
//! styled badge with frame and logo), and hands them to the clipboard.

pub mod badge;
pub mod qr;
pub mod share;
pub mod uri;

#[cfg(feature = "ffi")]
pub mod ffi;

mod error;

pub use error::{Error, Result};

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

// Re-export key types for convenience
pub use badge::{render_badge, BadgeStyle, FrameConfiguration, Rgb};
pub use qr::{QrConfig, QrMatrix};
pub use share::ShareItem;
pub use uri::{parse, serialize, AssetAmount, Note, PaymentRequest};
