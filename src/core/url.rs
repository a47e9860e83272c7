//! Site origin and external-link detection.
//!
//! A link is external when it is absolute (has a scheme, or is
//! protocol-relative) and its host is not the site's own host.

/// The host a site is served from.
///
/// Hosts are stored lowercase (as normalized by the `url` crate), so
/// comparison is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SiteOrigin {
    host: Option<String>,
}

impl SiteOrigin {
    /// Origin with no known host: every absolute URL with a host is external.
    pub const fn unknown() -> Self {
        Self { host: None }
    }

    /// Build from the site URL (e.g. `https://example.github.io/blog`).
    ///
    /// Returns `None` if the URL does not parse or has no host.
    pub fn from_site_url(site_url: &str) -> Option<Self> {
        let parsed = url::Url::parse(site_url).ok()?;
        let host = parsed.host_str()?;
        Some(Self::from_host(host))
    }

    /// Build from a bare host name.
    pub fn from_host(host: &str) -> Self {
        Self {
            host: Some(host.trim().to_ascii_lowercase()),
        }
    }

    #[inline]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Check if `link` leaves this site.
    ///
    /// - Relative links (`/about`, `./img.png`, `#top`) are never external
    /// - `mailto:` is classified by its own rule, not here
    /// - Schemes without a host (`tel:`, `data:`) are external
    /// - Hosted URLs are external unless the host matches
    pub fn is_external(&self, link: &str) -> bool {
        let Some(absolute) = parse_absolute(link) else {
            return false;
        };
        if absolute.scheme() == "mailto" {
            return false;
        }
        match (absolute.host_str(), self.host()) {
            (Some(host), Some(own)) => !host.eq_ignore_ascii_case(own),
            _ => true,
        }
    }
}

/// Parse `link` if it is absolute, resolving protocol-relative links
/// against `https:`.
fn parse_absolute(link: &str) -> Option<url::Url> {
    if link.starts_with("//") {
        return url::Url::parse(&format!("https:{link}")).ok();
    }
    if !has_scheme(link) {
        return None;
    }
    url::Url::parse(link).ok()
}

/// Check if a link starts with a URL scheme (`https:`, `mailto:`, ...).
///
/// A valid scheme must:
/// - Start with an ASCII letter
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn has_scheme(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        link.as_bytes()[0].is_ascii_alphabetic()
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteOrigin {
        SiteOrigin::from_host("example.com")
    }

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://example.com"));
        assert!(has_scheme("http://example.com"));
        assert!(has_scheme("mailto:user@example.com"));
        assert!(has_scheme("tel:+1234567890"));
        assert!(!has_scheme("/about"));
        assert!(!has_scheme("./file.txt"));
        assert!(!has_scheme("#section"));
        assert!(!has_scheme(":nothing"));
        assert!(!has_scheme("/path/with:colon"));
        assert!(!has_scheme("1http://example.com"));
        assert!(!has_scheme("+x:y"));
        assert!(has_scheme("git+ssh://example.com"));
    }

    #[test]
    fn test_digit_scheme_is_not_absolute() {
        assert!(!site().is_external("9p:/srv"));
    }

    #[test]
    fn test_from_site_url() {
        let origin = SiteOrigin::from_site_url("https://Example.GitHub.io/blog/").unwrap();
        assert_eq!(origin.host(), Some("example.github.io"));

        assert!(SiteOrigin::from_site_url("not a url").is_none());
        assert!(SiteOrigin::from_site_url("mailto:a@b.com").is_none());
    }

    #[test]
    fn test_external_other_host() {
        assert!(site().is_external("https://external.example/page"));
        assert!(site().is_external("http://other.org"));
    }

    #[test]
    fn test_same_host_is_internal() {
        assert!(!site().is_external("https://example.com/about"));
        assert!(!site().is_external("https://EXAMPLE.com/about"));
        assert!(!site().is_external("http://example.com:8080/x"));
    }

    #[test]
    fn test_protocol_relative() {
        assert!(site().is_external("//cdn.other.org/x.js"));
        assert!(!site().is_external("//example.com/x.js"));
    }

    #[test]
    fn test_relative_never_external() {
        assert!(!site().is_external("/about"));
        assert!(!site().is_external("about"));
        assert!(!site().is_external("./img.png"));
        assert!(!site().is_external("#top"));
        assert!(!SiteOrigin::unknown().is_external("/about"));
    }

    #[test]
    fn test_hostless_schemes() {
        assert!(site().is_external("tel:+1234567890"));
        assert!(!site().is_external("mailto:a@b.com"));
    }

    #[test]
    fn test_unknown_origin() {
        let origin = SiteOrigin::unknown();
        assert!(origin.is_external("https://example.com/about"));
        assert!(origin.is_external("//cdn.example.com/x"));
    }
}
