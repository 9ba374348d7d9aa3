//! Centralized URI constants
//!
//! Scheme and query keys of the Algorand payment prompt format, plus the
//! defaults used when rendering and sharing a URI.

/// URI scheme for payment prompts
pub const SCHEME: &str = "algorand";

/// Prefix every serialized URI starts with
pub const SCHEME_PREFIX: &str = "algorand://";

/// Receiver display label
pub const KEY_LABEL: &str = "label";

/// Amount in base units of the asset
pub const KEY_AMOUNT: &str = "amount";

/// Numeric id of a non-native asset
pub const KEY_ASSET: &str = "asset";

/// Read-only transaction note
pub const KEY_XNOTE: &str = "xnote";

/// Editable transaction note
pub const KEY_NOTE: &str = "note";

/// Title attached to shared URIs
pub const SHARE_TITLE: &str = "Algorand Transaction";

/// Pixels per QR module when rendering images
pub const DEFAULT_MODULE_SIZE: u32 = 10;

/// Quiet zone around the QR code, in modules
pub const QUIET_ZONE_MODULES: usize = 4;

/// Side length of a rendered badge in pixels
pub const DEFAULT_BADGE_SIZE: u32 = 300;
