//! Site path prefix (subdirectory deployments).
//!
//! When a site is served under `/blog`, the internal routing primitive adds
//! the prefix itself, so links that already carry it must have it removed
//! first to avoid `/blog/blog/...`.

use std::fmt;

use super::url::has_scheme;

/// Boxed error returned by a [`PathPrefixProvider`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Source of the site's configured path prefix.
///
/// Queried once by the caller before classification.
pub trait PathPrefixProvider {
    fn path_prefix(&self) -> Result<PathPrefix, BoxError>;
}

impl PathPrefixProvider for PathPrefix {
    fn path_prefix(&self) -> Result<PathPrefix, BoxError> {
        Ok(self.clone())
    }
}

/// Normalized path prefix.
///
/// Invariants:
/// - Root is stored as the empty string
/// - Non-root always starts with `/` and never ends with `/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathPrefix(String);

impl PathPrefix {
    /// Prefix for a site served at `/`.
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Normalize a raw prefix: `""`, `"/"`, `"blog"`, `"/blog/"` all work.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self::root()
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    /// Check if the prefix is empty or `/`.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// `"/blog"`, or `""` for root.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Remove the first occurrence of the prefix from `url`.
    ///
    /// Matching is by substring, not by path segment: with prefix `/blog`,
    /// `/posts/blog/x` becomes `/posts/x`. A url that consisted of only the
    /// prefix becomes `/`.
    pub fn strip_from(&self, url: &str) -> String {
        if self.is_root() || !url.contains(self.as_str()) {
            return url.to_string();
        }
        let stripped = url.replacen(self.as_str(), "", 1);
        if stripped.is_empty() {
            "/".to_string()
        } else {
            stripped
        }
    }

    /// Join the prefix back onto an internal path (`/post-1` -> `/blog/post-1`).
    ///
    /// Same-host absolute URLs get the prefix at the start of their path:
    /// `https://example.com/post-1` -> `https://example.com/blog/post-1`.
    pub fn join(&self, path: &str) -> String {
        if self.is_root() {
            return path.to_string();
        }
        match path {
            p if p.starts_with("//") => self.join_protocol_relative(p),
            p if has_scheme(p) => self.join_absolute(p),
            "" | "/" => format!("{}/", self.0),
            p if p.starts_with('/') => format!("{}{p}", self.0),
            // Fragment or query only: stay on the prefix root
            p if p.starts_with(['#', '?']) => format!("{}/{p}", self.0),
            // Relative paths resolve against the current page, leave as-is
            p => p.to_string(),
        }
    }

    fn join_absolute(&self, link: &str) -> String {
        match url::Url::parse(link) {
            Ok(mut url) if url.has_host() => {
                let path = self.join(url.path());
                url.set_path(&path);
                url.into()
            }
            _ => link.to_string(),
        }
    }

    fn join_protocol_relative(&self, link: &str) -> String {
        let joined = self.join_absolute(&format!("https:{link}"));
        match joined.strip_prefix("https:") {
            Some(rest) => rest.to_string(),
            None => link.to_string(),
        }
    }
}

impl fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("/")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for PathPrefix {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
