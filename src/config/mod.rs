//! Site configuration read from `tola.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site.info], [site.nav]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # URL path extraction, config discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Derived values
//!
//! | Value         | Source                                   | CLI override    |
//! |---------------|------------------------------------------|-----------------|
//! | site origin   | host of `[site.info] url`                | `--site-url`    |
//! | path prefix   | path of `[site.info] url`                | `--path-prefix` |
//! | SPA marking   | `[site.nav] spa`                         |                 |

pub mod section;
pub mod types;
mod util;

pub use section::SiteSectionConfig;
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use util::{expand_tilde, extract_url_path, find_config_file};

use crate::{
    cli::Cli,
    core::{BoxError, PathPrefix, PathPrefixProvider, SiteOrigin},
    debug,
    link::{Classifier, HtmlPrimitives, LinkError},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "tola.toml";

// ============================================================================
// root configuration
// ============================================================================

/// The subset of `tola.toml` that link rendering depends on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Site configuration (info, nav)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Path prefix derived from `site.info.url` (or `--path-prefix`)
    #[serde(skip)]
    pub path_prefix: PathPrefix,
}

impl SiteConfig {
    pub const PATH_PREFIX: FieldPath = FieldPath::new("path_prefix");

    /// Load configuration according to CLI arguments.
    ///
    /// - `--config PATH`: the file must exist
    /// - otherwise `tola.toml` is searched upward from cwd; defaults apply
    ///   if none is found
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match Self::resolve_config_path(cli)? {
            Some(path) => Self::from_path(&path)?,
            None => {
                debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                Self::default()
            }
        };

        config.apply_cli_options(cli);
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config file to read, if any.
    fn resolve_config_path(cli: &Cli) -> Result<Option<PathBuf>> {
        if let Some(path) = &cli.config {
            let path = expand_tilde(path);
            if !path.is_file() {
                return Err(ConfigError::NotFound(path).into());
            }
            return Ok(Some(path));
        }

        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Ok(find_config_file(&cwd, Path::new(CONFIG_FILE)))
    }

    /// Load configuration from file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            debug!("config"; "ignoring {} field(s) in {}: {}",
                ignored.len(), path.display(), ignored.join(", "));
        }

        config.config_path = Some(path.to_path_buf());
        config.sync_path_prefix_from_url();
        Ok(config)
    }

    /// Parse TOML content, collecting fields this tool does not model.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Apply `--site-url` and `--path-prefix`.
    fn apply_cli_options(&mut self, cli: &Cli) {
        if let Some(url) = &cli.site_url {
            self.site.info.url = Some(url.clone());
            self.sync_path_prefix_from_url();
        }
        if let Some(prefix) = &cli.path_prefix {
            self.path_prefix = PathPrefix::new(prefix);
        }
    }

    /// Derive path_prefix from site.info.url.
    ///
    /// `https://example.github.io/my-project` serves the site under
    /// `/my-project`, so internal links carry that prefix.
    fn sync_path_prefix_from_url(&mut self) {
        if let Some(url) = &self.site.info.url
            && let Some(path) = extract_url_path(url)
        {
            self.path_prefix = PathPrefix::new(&path);
        }
    }

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.site.info.validate(&mut diag);

        let prefix = self.path_prefix.as_str();
        if prefix.contains(['?', '#']) || prefix.contains(char::is_whitespace) {
            diag.error_with_hint(
                Self::PATH_PREFIX,
                format!("invalid path prefix '{}'", prefix),
                "use a plain path like /blog",
            );
        }

        diag.into_result()
    }

    /// Host of the site, from `site.info.url`.
    pub fn origin(&self) -> SiteOrigin {
        self.site
            .info
            .url
            .as_deref()
            .and_then(SiteOrigin::from_site_url)
            .unwrap_or_default()
    }

    /// Build a classifier, querying the path prefix once.
    pub fn classifier(&self) -> Result<Classifier, LinkError> {
        Classifier::from_provider(self.origin(), self)
    }

    /// HTML primitives matching this site's prefix and navigation mode.
    pub fn html_primitives(&self) -> HtmlPrimitives {
        HtmlPrimitives::new(self.path_prefix.clone()).with_nav(self.site.nav.spa)
    }
}

impl PathPrefixProvider for SiteConfig {
    fn path_prefix(&self) -> Result<PathPrefix, BoxError> {
        Ok(self.path_prefix.clone())
    }
}

// ============================================================================
// tests
// ============================================================================
