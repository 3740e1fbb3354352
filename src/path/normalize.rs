/// Iterates the non-empty `/`-separated segments of `path`.
#[inline]
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|seg| !seg.is_empty())
}

/// Canonical form shared by templates and request paths: empty segments are
/// dropped, so leading, trailing and repeated slashes carry no meaning. The
/// result always starts with `/` and the root normalizes to `/`.
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn normalize_path(path: &str) -> String {
    let mut output = String::with_capacity(path.len() + 1);

    for seg in segments(path) {
        output.push('/');
        output.push_str(seg);
    }

    if output.is_empty() {
        output.push('/');
    }

    output
}

/// Removes a mount prefix from `path`. The prefix must end on a segment
/// boundary: `/api` strips `/api/users` but not `/apiary`.
pub fn strip_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return Some(path);
    }

    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}
