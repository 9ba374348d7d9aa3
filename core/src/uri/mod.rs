//! Algorand payment URIs
//!
//! Builds and parses `algorand://<address>?label=..&asset=..&amount=..&note=..`
//! prompts, following the payment prompt format published at
//! <https://developer.algorand.org/docs/reference/payment_prompts/>.

pub mod constants;
pub mod encoding;
mod parse;
mod request;

pub use parse::parse;
pub use request::{serialize, AssetAmount, Note, PaymentRequest};
