//! `application/x-www-form-urlencoded` codec for the location query string.
//!
//! Encoding always yields a string that begins with `?`, even when there are
//! no pairs (`"?"`). Decoding never fails: percent-decoding is lossy and pairs
//! without a key are dropped.

use log::warn;
use url::form_urlencoded;

use crate::SearchState;

/// Normalizes a raw location query so it can be compared against queries this
/// crate produced. The empty-string sentinel ("no query") becomes `"?"`.
pub fn normalize_query(raw: &str) -> String {
    if raw.starts_with('?') {
        raw.to_string()
    } else {
        format!("?{}", raw)
    }
}

/// Joins `key=value` pairs with `&`, percent-encoding reserved characters.
pub fn encode_query<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let body = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("?{}", body)
}

/// Decodes a query string (with or without its leading `?`) into a flat map.
/// When a key repeats, the last occurrence wins.
pub fn parse_query(query: &str) -> SearchState {
    let body = query.strip_prefix('?').unwrap_or(query);
    let mut search = SearchState::new();
    for (key, value) in form_urlencoded::parse(body.as_bytes()) {
        if key.is_empty() {
            warn!("dropping query pair without a key: value {:?}", value);
            continue;
        }
        search.insert(key.into_owned(), value.into_owned());
    }
    search
}
