/// Join a base URL and a root-relative path with exactly one separating
/// slash, regardless of trailing/leading slashes on either side.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{path}")
    }
}
