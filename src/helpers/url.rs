//! URL helper functions

/// Join a site-relative path onto the configured base URL
///
/// # Examples
/// ```ignore
/// url_for("/site/", "/blog") // -> "/site/blog"
/// ```
pub fn url_for(base_url: &str, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }

    let root = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for("https://example.com/", "/", "/blog") // -> "https://example.com/blog"
/// ```
pub fn full_url_for(site_url: &str, base_url: &str, path: &str) -> String {
    let path = url_for(base_url, path);
    if is_external(&path) {
        return path;
    }
    format!("{}{}", site_url.trim_end_matches('/'), path)
}

/// Whether a link points off-site
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}
