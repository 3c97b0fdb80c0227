//! Request target construction.

/// Join the API base URL and an endpoint path with exactly one `/`.
///
/// `("http://127.0.0.1:5000", "/coffees")` gives
/// `"http://127.0.0.1:5000/coffees"`.
pub fn request_target(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}
