use std::borrow::Cow;

/// `encodeURIComponent`-style escaping for query values.
#[must_use]
pub fn encode_component(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Decodes one `application/x-www-form-urlencoded` component. Escapes that
/// do not form valid UTF-8 become U+FFFD, as `URLSearchParams` does.
#[must_use]
pub fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

/// First value for `name` in a `location.search` string (leading `?` optional).
#[must_use]
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key) == name).then(|| decode_component(value))
        })
}

/// Where a header search submission routes. Blank queries do not navigate.
#[must_use]
pub fn products_search_url(products_page: &str, query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("{products_page}?q={}", encode_component(query)))
}

#[must_use]
pub fn is_home_path(pathname: &str) -> bool {
    pathname.ends_with('/') || pathname.ends_with("index.html")
}

/// `pathname + search` with the fragment dropped, for `history.replaceState`.
#[must_use]
pub fn url_without_hash(pathname: &str, search: &str) -> String {
    format!("{pathname}{search}")
}
