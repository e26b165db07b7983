//! Absolute URL resolution against the site base URL.

/// Join the base URL and a site-relative path.
///
/// Pure concatenation: the config layer strips trailing slashes from the
/// base, and an empty base yields a root-relative URL.
///
/// ```ignore
/// assert_eq!(absolute("https://example.com", "/about"), "https://example.com/about");
/// assert_eq!(absolute("", "/about"), "/about");
/// ```
#[inline]
pub fn absolute(base: &str, path: &str) -> String {
    let mut url = String::with_capacity(base.len() + path.len());
    url.push_str(base);
    url.push_str(path);
    url
}
