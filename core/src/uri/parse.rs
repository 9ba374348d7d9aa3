//! Parsing `algorand://` URIs back into payment requests

use std::str::FromStr;

use super::constants::{KEY_AMOUNT, KEY_ASSET, KEY_LABEL, KEY_NOTE, KEY_XNOTE, SCHEME_PREFIX};
use super::encoding::decode_query_value;
use super::request::{AssetAmount, Note, PaymentRequest};
use crate::{Error, Result};

impl FromStr for PaymentRequest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Parse a payment URI produced by [`super::serialize`] or a compatible
/// wallet. Keys this crate does not model are skipped.
pub fn parse(uri: &str) -> Result<PaymentRequest> {
    let rest = uri
        .strip_prefix(SCHEME_PREFIX)
        .ok_or_else(|| Error::InvalidScheme(uri.to_string()))?;

    let (address, query) = match rest.split_once('?') {
        Some((address, query)) => (address, Some(query)),
        None => (rest, None),
    };

    let mut label = None;
    let mut amount = None;
    let mut asset = None;
    let mut xnote = None;
    let mut note = None;

    for part in query.into_iter().flat_map(|q| q.split('&')) {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| Error::InvalidParameter(part.to_string()))?;

        match key {
            KEY_LABEL => set_once(&mut label, key, decode_query_value(value)?)?,
            KEY_AMOUNT => set_once(&mut amount, key, parse_number(key, value)?)?,
            KEY_ASSET => set_once(&mut asset, key, parse_number(key, value)?)?,
            KEY_XNOTE => set_once(&mut xnote, key, decode_query_value(value)?)?,
            KEY_NOTE => set_once(&mut note, key, decode_query_value(value)?)?,
            _ => tracing::debug!("ignoring unsupported query parameter {}", key),
        }
    }

    let asset_amount = match (asset, amount) {
        (Some(asset_id), Some(units)) => Some(AssetAmount::OtherAsset { asset_id, units }),
        (Some(_), None) => return Err(Error::MissingParameter(KEY_AMOUNT)),
        (None, Some(units)) => Some(AssetAmount::Native { units }),
        (None, None) => None,
    };

    let note = match (xnote, note) {
        (Some(_), Some(_)) => return Err(Error::ConflictingParameters(KEY_XNOTE, KEY_NOTE)),
        (Some(text), None) => Some(Note::ReadOnly { text }),
        (None, Some(text)) => Some(Note::Editable { text }),
        (None, None) => None,
    };

    Ok(PaymentRequest::new(address, label, asset_amount, note))
}

fn set_once<T>(slot: &mut Option<T>, key: &str, value: T) -> Result<()> {
    if slot.is_some() {
        return Err(Error::DuplicateParameter(key.to_string()));
    }
    *slot = Some(value);
    Ok(())
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    // u64::from_str accepts a leading '+', which serialize never emits
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidNumber { key: key.to_string(), value: value.to_string() });
    }
    value
        .parse()
        .map_err(|_| Error::InvalidNumber { key: key.to_string(), value: value.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "4AOJ5QITUBWZGO4K5AF77H5GED5A4QDBB6DOQGI63QE2GU6KD2XNETBBJE";

    #[test]
    fn test_parse_address_only() {
        let request: PaymentRequest = format!("algorand://{ADDR}").parse().unwrap();
        assert_eq!(request, PaymentRequest::new(ADDR, None, None, None));

        let empty: PaymentRequest = "algorand://".parse().unwrap();
        assert_eq!(empty.receiver_address(), "");
    }

    #[test]
    fn test_parse_full_request() {
        let request = parse(&format!("algorand://{ADDR}?label=Lanel&asset=45&amount=150&note=Eyeglasses")).unwrap();
        assert_eq!(request.receiver_label(), Some("Lanel"));
        assert_eq!(request.asset_amount(), Some(AssetAmount::other_asset(45, 150)));
        assert_eq!(request.note(), Some(&Note::editable("Eyeglasses")));
    }

    #[test]
    fn test_parse_decodes_values() {
        let request = parse(&format!("algorand://{ADDR}?label=Wesley%20Crusher&xnote=a+b%26c")).unwrap();
        assert_eq!(request.receiver_label(), Some("Wesley Crusher"));
        assert_eq!(request.note(), Some(&Note::read_only("a+b&c")));
    }

    #[test]
    fn test_parse_keeps_empty_values() {
        let request = parse(&format!("algorand://{ADDR}?label=&note=")).unwrap();
        assert_eq!(request.receiver_label(), Some(""));
        assert_eq!(request.note(), Some(&Note::editable("")));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let request = parse(&format!("algorand://{ADDR}?fee=1000&amount=5")).unwrap();
        assert_eq!(request.asset_amount(), Some(AssetAmount::native(5)));
    }

    #[test]
    fn test_parse_wrong_scheme() {
        assert!(matches!(parse("https://example.com"), Err(Error::InvalidScheme(_))));
    }

    #[test]
    fn test_parse_asset_without_amount() {
        assert!(matches!(
            parse(&format!("algorand://{ADDR}?asset=45")),
            Err(Error::MissingParameter("amount"))
        ));
    }

    #[test]
    fn test_parse_both_notes() {
        assert!(matches!(
            parse(&format!("algorand://{ADDR}?xnote=a&note=b")),
            Err(Error::ConflictingParameters(_, _))
        ));
    }

    #[test]
    fn test_parse_duplicate_key() {
        assert!(matches!(
            parse(&format!("algorand://{ADDR}?amount=1&amount=2")),
            Err(Error::DuplicateParameter(_))
        ));
    }

    #[test]
    fn test_parse_bad_numbers() {
        for bad in ["amount=", "amount=-1", "amount=+1", "amount=1.5", "asset=x&amount=1", "amount=18446744073709551616"] {
            let result = parse(&format!("algorand://{ADDR}?{bad}"));
            assert!(matches!(result, Err(Error::InvalidNumber { .. })), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_parse_missing_equals() {
        assert!(matches!(
            parse(&format!("algorand://{ADDR}?label")),
            Err(Error::InvalidParameter(_))
        ));
    }
}
