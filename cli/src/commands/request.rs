//! Commands that build a payment request from flags.

use algouri_core::share::{copy_to_clipboard, ShareItem};
use algouri_core::{AssetAmount, Note, PaymentRequest};

use crate::ui::{print_header, print_qr_code};
use crate::RequestArgs;

impl From<RequestArgs> for PaymentRequest {
    fn from(args: RequestArgs) -> Self {
        let asset_amount = match (args.asset, args.amount) {
            (Some(asset_id), Some(units)) => Some(AssetAmount::other_asset(asset_id, units)),
            (None, Some(units)) => Some(AssetAmount::native(units)),
            // clap enforces that --asset comes with --amount
            (_, None) => None,
        };

        let note = match (args.xnote, args.note) {
            (Some(text), _) => Some(Note::read_only(text)),
            (None, Some(text)) => Some(Note::editable(text)),
            (None, None) => None,
        };

        PaymentRequest::new(args.address, args.label, asset_amount, note)
    }
}

/// Print the serialized URI.
pub fn print_uri(request: &PaymentRequest) {
    println!("{}", request);
}

/// Print the URI with a scannable QR code.
pub fn print_qr(request: &PaymentRequest) {
    let uri = request.to_uri_string();

    println!("\n\x1b[1;33mScan this QR code with an Algorand wallet:\x1b[0m\n");
    print_qr_code(&uri);
    println!("\n\x1b[2m{}\x1b[0m\n", uri);
}

/// Copy the URI to the clipboard.
pub fn share(request: &PaymentRequest) -> anyhow::Result<()> {
    let item = ShareItem::for_request(request);
    copy_to_clipboard(&item)?;

    print_header(&item.title);
    println!("{}", item.url);
    println!("\n\x1b[1;32m✓\x1b[0m Copied to clipboard");

    Ok(())
}
