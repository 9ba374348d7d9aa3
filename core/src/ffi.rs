//! Foreign bindings for mobile hosts

use crate::badge::{self, BadgeStyle, FrameConfiguration, Rgb};
use crate::uri::{self, PaymentRequest};

/// Error surfaced to foreign callers
#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum FfiError {
    #[error("{0}")]
    Failed(String),
}

impl From<crate::Error> for FfiError {
    fn from(e: crate::Error) -> Self {
        Self::Failed(e.to_string())
    }
}

#[uniffi::export]
pub fn payment_uri(request: PaymentRequest) -> String {
    uri::serialize(&request)
}

#[uniffi::export]
pub fn parse_payment_uri(uri: String) -> Result<PaymentRequest, FfiError> {
    Ok(uri::parse(&uri)?)
}

/// SVG badge; colours are `#rrggbb` strings
#[uniffi::export]
pub fn badge_svg(
    request: PaymentRequest,
    qr_color: String,
    frame_color: Option<String>,
    include_logo: bool,
    size: u32,
) -> Result<String, FfiError> {
    let frame = match frame_color {
        Some(color) => FrameConfiguration::Framed(color.parse::<Rgb>()?),
        None => FrameConfiguration::Unframed,
    };
    let style = BadgeStyle {
        qr_color: qr_color.parse::<Rgb>()?,
        frame,
        include_logo,
        size,
    };
    Ok(badge::render_badge(&request, &style)?)
}
