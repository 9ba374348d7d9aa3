//! Percent-encoding of query parameter values
//!
//! Wallets compare payment prompts byte for byte, so the set of characters
//! left unescaped is fixed here rather than taken from a general-purpose
//! encoder. Letters, digits and `-._~!$'()*+,;:@/?` pass through; every
//! other byte, including `%`, space, `&`, `=` and all non-ASCII UTF-8
//! bytes, becomes `%XX` with uppercase hex.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::{Error, Result};

/// Bytes escaped inside a query value.
pub const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');

/// Encode a single query value.
pub fn encode_query_value(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, QUERY_VALUE).into()
}

/// Decode a single query value. `+` is a literal plus, not a space.
pub fn decode_query_value(value: &str) -> Result<String> {
    urlencoding::decode(value)
        .map(Cow::into_owned)
        .map_err(|e| Error::InvalidParameter(format!("invalid UTF-8 in {:?}: {}", value, e)))
}
