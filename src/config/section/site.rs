//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! url = "https://example.github.io/blog"
//!
//! [site.nav]
//! spa = true
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (url)
    pub info: SiteInfoConfig,

    /// SPA navigation settings.
    pub nav: NavConfig,
}

/// `[site.info]`: the site URL supplies both host and path prefix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site URL, path used as prefix (e.g., "https://example.com/blog/docs").
    pub url: Option<String>,
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.info.url");

    /// Validate site information.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    /// - `url` must not carry a query or fragment (its path is the prefix)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            return;
        };

        let parsed = match url::Url::parse(url_str) {
            Ok(parsed) => parsed,
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
                return;
            }
        };

        if !matches!(parsed.scheme(), "http" | "https") {
            diag.error_with_hint(
                Self::URL,
                format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ),
                "use format like https://example.com",
            );
        }
        if parsed.host_str().is_none() {
            diag.error_with_hint(
                Self::URL,
                "URL must have a valid host",
                "use format like https://example.com",
            );
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            diag.error_with_hint(
                Self::URL,
                "URL must not contain a query or fragment",
                "the URL path is used as the site path prefix",
            );
        }
    }
}

/// `[site.nav]`: client-side navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Enable SPA navigation; internal links are marked for interception.
    pub spa: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { spa: true }
    }
}
