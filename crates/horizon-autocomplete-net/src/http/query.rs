//! Query string helpers for building lookup URLs.

use crate::error::Result;

/// Encode key/value pairs as an `application/x-www-form-urlencoded` query
/// string, without a leading `?`.
///
/// Pairs are emitted in iteration order; pass a `BTreeMap` or a slice when a
/// stable order matters.
///
/// ```
/// use horizon_autocomplete_net::http::encode_query;
///
/// let query = encode_query([("q", "new york"), ("limit", "5")]);
/// assert_eq!(query, "q=new+york&limit=5");
/// ```
pub fn encode_query<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}

/// Append encoded pairs to the query of `base`, keeping any query it already
/// has.
///
/// ```
/// use horizon_autocomplete_net::http::url_with_query;
///
/// let url = url_with_query("https://api.example.com/search?v=2", [("q", "lon")]).unwrap();
/// assert_eq!(url, "https://api.example.com/search?v=2&q=lon");
/// ```
pub fn url_with_query<I, K, V>(base: &str, pairs: I) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = url::Url::parse(base)?;
    {
        let mut serializer = url.query_pairs_mut();
        for (key, value) in pairs {
            serializer.append_pair(key.as_ref(), value.as_ref());
        }
    }
    Ok(url.into())
}
