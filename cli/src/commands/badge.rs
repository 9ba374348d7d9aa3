//! Badge command implementation.

use std::path::Path;

use algouri_core::badge::{render_badge, to_data_url, BadgeStyle, FrameConfiguration, Rgb};
use algouri_core::PaymentRequest;

/// Build a badge style from command-line colours.
pub fn badge_style(color: &str, frame: Option<&str>, logo: bool, size: u32) -> anyhow::Result<BadgeStyle> {
    let frame = match frame {
        Some(frame_color) => FrameConfiguration::Framed(frame_color.parse::<Rgb>()?),
        None => FrameConfiguration::Unframed,
    };

    Ok(BadgeStyle {
        qr_color: color.parse::<Rgb>()?,
        frame,
        include_logo: logo,
        size,
    })
}

/// Render a badge to `out`, or print it as a data URL.
pub fn write_badge(request: &PaymentRequest, style: &BadgeStyle, out: Option<&Path>) -> anyhow::Result<()> {
    let svg = render_badge(request, style)?;

    match out {
        Some(path) => {
            std::fs::write(path, &svg)?;
            tracing::info!("wrote badge to {}", path.display());
            println!("\x1b[1;32m✓\x1b[0m Badge for {} written to {}", request, path.display());
        }
        None => println!("{}", to_data_url(&svg)),
    }

    Ok(())
}
