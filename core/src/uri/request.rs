//! Payment request data model and URI serialization

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{KEY_AMOUNT, KEY_ASSET, KEY_LABEL, KEY_NOTE, KEY_XNOTE, SCHEME_PREFIX};
use super::encoding::encode_query_value;

/// Asset and amount requested by a payment prompt.
///
/// Amounts are always in base units: microAlgos for the native asset, and
/// the smallest indivisible unit for any other asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum AssetAmount {
    /// Algos, in microAlgos
    Native { units: u64 },
    /// Any other asset, identified by its numeric id
    OtherAsset { asset_id: u64, units: u64 },
}

impl AssetAmount {
    pub fn native(units: u64) -> Self {
        Self::Native { units }
    }

    pub fn other_asset(asset_id: u64, units: u64) -> Self {
        Self::OtherAsset { asset_id, units }
    }

    /// Amount in base units, whichever asset it is
    pub fn units(&self) -> u64 {
        match *self {
            Self::Native { units } | Self::OtherAsset { units, .. } => units,
        }
    }
}

/// Transaction note attached to a payment prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum Note {
    /// Shown to the payer but not modifiable (`xnote`)
    ReadOnly { text: String },
    /// Default value the payer's wallet may let them edit (`note`)
    Editable { text: String },
}

impl Note {
    pub fn read_only(text: impl Into<String>) -> Self {
        Self::ReadOnly { text: text.into() }
    }

    pub fn editable(text: impl Into<String>) -> Self {
        Self::Editable { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::ReadOnly { text } | Self::Editable { text } => text,
        }
    }

    /// Query key this note serializes under
    pub fn key(&self) -> &'static str {
        match self {
            Self::ReadOnly { .. } => KEY_XNOTE,
            Self::Editable { .. } => KEY_NOTE,
        }
    }
}

/// An Algorand payment prompt.
///
/// Immutable once built: every field is supplied to [`PaymentRequest::new`]
/// and only read afterwards. Nothing is validated. The address is treated
/// as opaque and handed to the receiving wallet, which is expected to check
/// it, and notes are not held to the on-chain length limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct PaymentRequest {
    receiver_address: String,
    receiver_label: Option<String>,
    asset_amount: Option<AssetAmount>,
    note: Option<Note>,
}

impl PaymentRequest {
    pub fn new(
        receiver_address: impl Into<String>,
        receiver_label: Option<String>,
        asset_amount: Option<AssetAmount>,
        note: Option<Note>,
    ) -> Self {
        Self {
            receiver_address: receiver_address.into(),
            receiver_label,
            asset_amount,
            note,
        }
    }

    pub fn receiver_address(&self) -> &str {
        &self.receiver_address
    }

    /// Display label; `Some("")` is kept distinct from `None`
    pub fn receiver_label(&self) -> Option<&str> {
        self.receiver_label.as_deref()
    }

    pub fn asset_amount(&self) -> Option<AssetAmount> {
        self.asset_amount
    }

    pub fn note(&self) -> Option<&Note> {
        self.note.as_ref()
    }

    /// Query parameters in wire order, values not yet encoded.
    ///
    /// Order is `label`, then `asset` and `amount` (or `amount` alone),
    /// then `xnote` or `note`.
    pub fn query_params(&self) -> Vec<(&'static str, Cow<'_, str>)> {
        let mut params = Vec::with_capacity(4);

        if let Some(label) = &self.receiver_label {
            params.push((KEY_LABEL, Cow::Borrowed(label.as_str())));
        }

        match self.asset_amount {
            Some(AssetAmount::Native { units }) => {
                params.push((KEY_AMOUNT, Cow::Owned(units.to_string())));
            }
            Some(AssetAmount::OtherAsset { asset_id, units }) => {
                params.push((KEY_ASSET, Cow::Owned(asset_id.to_string())));
                params.push((KEY_AMOUNT, Cow::Owned(units.to_string())));
            }
            None => {}
        }

        if let Some(note) = &self.note {
            params.push((note.key(), Cow::Borrowed(note.text())));
        }

        params
    }

    /// Serialize to an `algorand://` URI
    pub fn to_uri_string(&self) -> String {
        let mut uri = String::with_capacity(SCHEME_PREFIX.len() + self.receiver_address.len());
        uri.push_str(SCHEME_PREFIX);
        uri.push_str(&self.receiver_address);

        for (i, (key, value)) in self.query_params().iter().enumerate() {
            uri.push(if i == 0 { '?' } else { '&' });
            uri.push_str(key);
            uri.push('=');
            uri.push_str(&encode_query_value(value));
        }

        tracing::trace!("serialized payment request to {}", uri);
        uri
    }
}

impl fmt::Display for PaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri_string())
    }
}

/// Serialize a payment request to its URI. Never fails.
pub fn serialize(request: &PaymentRequest) -> String {
    request.to_uri_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "4AOJ5QITUBWZGO4K5AF77H5GED5A4QDBB6DOQGI63QE2GU6KD2XNETBBJE";

    fn uri(label: Option<&str>, amount: Option<AssetAmount>, note: Option<Note>) -> String {
        serialize(&PaymentRequest::new(ADDR, label.map(String::from), amount, note))
    }

    #[test]
    fn test_address_only() {
        assert_eq!(uri(None, None, None), format!("algorand://{ADDR}"));
        assert_eq!(serialize(&PaymentRequest::new("", None, None, None)), "algorand://");
    }

    #[test]
    fn test_label_only() {
        assert_eq!(uri(Some("Crusher"), None, None), format!("algorand://{ADDR}?label=Crusher"));
        assert_eq!(
            uri(Some("Wesley Crusher"), None, None),
            format!("algorand://{ADDR}?label=Wesley%20Crusher")
        );
        assert_eq!(uri(Some(""), None, None), format!("algorand://{ADDR}?label="));
    }

    #[test]
    fn test_native_amounts() {
        let cases = [
            (100, "Transporter Insurance", "amount=100&xnote=Transporter%20Insurance"),
            (0, "Spider Traps", "amount=0&xnote=Spider%20Traps"),
            (1, "Holodeck Patch", "amount=1&xnote=Holodeck%20Patch"),
            (1_000_000, "Sunscreen", "amount=1000000&xnote=Sunscreen"),
        ];

        for (units, note, expected) in cases {
            assert_eq!(
                uri(Some("Barclay"), Some(AssetAmount::native(units)), Some(Note::read_only(note))),
                format!("algorand://{ADDR}?label=Barclay&{expected}")
            );
        }
    }

    #[test]
    fn test_other_asset_amounts() {
        assert_eq!(
            uri(Some("Lanel"), Some(AssetAmount::other_asset(45, 150)), Some(Note::editable("Eyeglasses"))),
            format!("algorand://{ADDR}?label=Lanel&asset=45&amount=150&note=Eyeglasses")
        );
        assert_eq!(
            uri(Some("Lanel"), Some(AssetAmount::other_asset(45, 0)), Some(Note::read_only("Malcorian Wine"))),
            format!("algorand://{ADDR}?label=Lanel&asset=45&amount=0&xnote=Malcorian%20Wine")
        );
        assert_eq!(
            uri(Some("Lanel"), Some(AssetAmount::other_asset(0, 1_000_000)), Some(Note::read_only("Floor map"))),
            format!("algorand://{ADDR}?label=Lanel&asset=0&amount=1000000&xnote=Floor%20map")
        );
    }

    #[test]
    fn test_note_permutations() {
        assert_eq!(uri(None, None, Some(Note::read_only(""))), format!("algorand://{ADDR}?xnote="));
        assert_eq!(uri(None, None, Some(Note::read_only("Value"))), format!("algorand://{ADDR}?xnote=Value"));
        assert_eq!(uri(None, None, Some(Note::editable(""))), format!("algorand://{ADDR}?note="));
        assert_eq!(uri(None, None, Some(Note::editable("Value"))), format!("algorand://{ADDR}?note=Value"));
    }

    #[test]
    fn test_long_note_passes_through() {
        let long = "1234567890".repeat(100);
        assert_eq!(uri(None, None, Some(Note::editable(long.clone()))), format!("algorand://{ADDR}?note={long}"));
    }

    #[test]
    fn test_special_characters_in_every_text_field() {
        let specials = "TEST test 1234567890 %20 / \\ !@#$%^&*()|.,;:'\"[]{}=+-_<>";
        let encoded = "TEST%20test%201234567890%20%2520%20/%20%5C%20!@%23$%25%5E%26*()%7C.,;:'%22%5B%5D%7B%7D%3D+-_%3C%3E";

        assert_eq!(uri(Some(specials), None, None), format!("algorand://{ADDR}?label={encoded}"));
        assert_eq!(uri(None, None, Some(Note::editable(specials))), format!("algorand://{ADDR}?note={encoded}"));
        assert_eq!(uri(None, None, Some(Note::read_only(specials))), format!("algorand://{ADDR}?xnote={encoded}"));
    }

    #[test]
    fn test_label_with_note_and_no_amount() {
        assert_eq!(
            uri(Some("Mr. Mot"), None, Some(Note::editable("Haircut"))),
            format!("algorand://{ADDR}?label=Mr.%20Mot&note=Haircut")
        );
    }

    #[test]
    fn test_address_is_not_encoded() {
        let request = PaymentRequest::new("not an/address", None, Some(AssetAmount::native(5)), None);
        assert_eq!(request.to_string(), "algorand://not an/address?amount=5");
    }

    #[test]
    fn test_max_amount() {
        assert_eq!(
            uri(None, Some(AssetAmount::other_asset(u64::MAX, u64::MAX)), None),
            format!("algorand://{ADDR}?asset=18446744073709551615&amount=18446744073709551615")
        );
    }

    #[test]
    fn test_accessors() {
        let request = PaymentRequest::new(ADDR, Some(String::new()), Some(AssetAmount::other_asset(7, 9)), Some(Note::read_only("x")));
        assert_eq!(request.receiver_address(), ADDR);
        assert_eq!(request.receiver_label(), Some(""));
        assert_eq!(request.asset_amount().map(|a| a.units()), Some(9));
        assert_eq!(request.note().map(Note::key), Some("xnote"));
    }
}
