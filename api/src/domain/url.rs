/// Join a base URL and a path with exactly one slash between them.
///
/// Absolute `http(s)` paths are returned unchanged and an empty path yields
/// the bare base.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}
