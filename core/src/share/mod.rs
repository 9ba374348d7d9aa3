//! Handing payment URIs to the system clipboard

use arboard::Clipboard;
use serde::{Deserialize, Serialize};

use crate::uri::constants::SHARE_TITLE;
use crate::uri::PaymentRequest;
use crate::{Error, Result};

/// A payment URI plus the metadata shown alongside it when shared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareItem {
    pub url: String,
    pub title: String,
}

impl ShareItem {
    pub fn for_request(request: &PaymentRequest) -> Self {
        Self {
            url: request.to_uri_string(),
            title: SHARE_TITLE.to_string(),
        }
    }
}

/// Write the item's URL to the clipboard
pub fn copy_to_clipboard(item: &ShareItem) -> Result<()> {
    let mut clipboard = Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;

    clipboard
        .set_text(item.url.as_str())
        .map_err(|e| Error::Clipboard(e.to_string()))?;

    tracing::info!("copied {} to clipboard", item.url);
    Ok(())
}
