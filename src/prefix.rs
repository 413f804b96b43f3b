use axum::http::HeaderMap;

pub const X_FORWARDED_PREFIX: &str = "x-forwarded-prefix";

/// Strips the wildcard from a registered route pattern: `/docs/*rest` becomes `/docs/`.
pub fn local_prefix(pattern: &str) -> &str {
    match pattern.find('*') {
        Some(index) => &pattern[..index],
        None => pattern,
    }
}

/// Folds an `X-Forwarded-Prefix` value into a single prefix.
///
/// Each comma separated segment loses its trailing slashes (a lone `/` is kept) and
/// the segments are concatenated as they are, without a separator: `/api/, /v1`
/// folds to `/api/v1`.
pub fn fold_forwarded_prefix(header: &str) -> String {
    let mut prefix = String::new();
    for segment in header.split(',') {
        let segment = segment.trim();
        let mut end = segment.len();
        while end > 1 && segment.as_bytes()[end - 1] == b'/' {
            end -= 1;
        }
        prefix.push_str(&segment[..end]);
    }
    prefix
}

/// Returns the folded forwarded prefix, or an empty string if the header is absent.
pub fn forwarded_prefix(headers: &HeaderMap) -> String {
    headers
        .get(X_FORWARDED_PREFIX)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(fold_forwarded_prefix)
        .unwrap_or_default()
}

/// The prefix under which a mounted handler is reachable from the outside.
pub fn mount_prefix(pattern: &str, headers: &HeaderMap) -> String {
    let local = local_prefix(pattern);
    let mut prefix = forwarded_prefix(headers);
    prefix.push_str(local);
    prefix
}

/// Joins `prefix` and `leaf` into a clean absolute path.
///
/// Runs of `/` collapse, `.` segments are dropped and `..` removes the previous segment
/// without climbing above the root. The result always starts with a single `/`, so a
/// forwarded prefix of `/` cannot turn the redirect into a protocol-relative URL.
pub fn join(prefix: &str, leaf: &str) -> String {
    let mut segments: Vec<&str> = vec![];
    for segment in prefix.split('/').chain(leaf.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }
    format!("/{}", segments.join("/"))
}
