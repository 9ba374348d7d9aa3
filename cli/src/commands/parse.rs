//! Parse command implementation.

use algouri_core::{AssetAmount, Note, PaymentRequest};

use crate::ui::print_header;

/// Parse a payment URI and print its fields.
pub fn parse_uri(uri: &str, json: bool) -> anyhow::Result<()> {
    let request: PaymentRequest = uri.parse()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    print_header("Algorand Payment Request");
    println!("\x1b[1mReceiver:\x1b[0m {}", request.receiver_address());
    if let Some(label) = request.receiver_label() {
        println!("\x1b[1mLabel:\x1b[0m    {}", label);
    }
    match request.asset_amount() {
        Some(AssetAmount::Native { units }) => println!("\x1b[1mAmount:\x1b[0m   {} microAlgos", units),
        Some(AssetAmount::OtherAsset { asset_id, units }) => {
            println!("\x1b[1mAsset:\x1b[0m    {}", asset_id);
            println!("\x1b[1mAmount:\x1b[0m   {} base units", units);
        }
        None => {}
    }
    match request.note() {
        Some(Note::ReadOnly { text }) => println!("\x1b[1mNote:\x1b[0m     {} (read-only)", text),
        Some(Note::Editable { text }) => println!("\x1b[1mNote:\x1b[0m     {} (editable)", text),
        None => {}
    }
    println!();

    Ok(())
}
