//! Query-string assembly for GET routes.

/// Append `key=value` pairs (skipping `None`) to `path`, percent-encoding values.
pub(crate) fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(k, v)| {
            v.as_ref()
                .map(|v| format!("{k}={}", urlencoding::encode(v)))
        })
        .collect();
    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", pairs.join("&"))
    }
}

/// Percent-encode one path segment (ids supplied by callers).
pub(crate) fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
