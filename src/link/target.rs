//! Classification result and the classifier that produces it.

use serde::Serialize;

use super::{LinkError, LinkRequest};
use crate::core::{LinkKind, OpenReason, PathPrefix, PathPrefixProvider, SiteOrigin};

/// Which rendering primitive a link goes through, and with what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LinkTarget {
    /// Plain `<a href>`. `force_blank` adds `target="_blank"` and
    /// `rel="noopener noreferrer"`.
    Plain { href: String, force_blank: bool },
    /// Client-side route. `path` has the site prefix already removed.
    Internal { path: String },
}

/// Classifies link URLs for one site.
///
/// Holds the origin and the path prefix, both resolved once up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classifier {
    origin: SiteOrigin,
    prefix: PathPrefix,
}

impl Classifier {
    pub fn new(origin: SiteOrigin, prefix: PathPrefix) -> Self {
        Self { origin, prefix }
    }

    /// Query the prefix provider once and build a classifier from it.
    pub fn from_provider(
        origin: SiteOrigin,
        provider: &impl PathPrefixProvider,
    ) -> Result<Self, LinkError> {
        let prefix = provider
            .path_prefix()
            .map_err(LinkError::PrefixUnavailable)?;
        Ok(Self::new(origin, prefix))
    }

    #[inline]
    pub fn origin(&self) -> &SiteOrigin {
        &self.origin
    }

    #[inline]
    pub fn prefix(&self) -> &PathPrefix {
        &self.prefix
    }

    /// Classify a URL without building a target.
    #[inline]
    pub fn kind<'a>(&self, url: &'a str) -> LinkKind<'a> {
        LinkKind::classify(url, &self.origin)
    }

    /// Map a URL to its rendering target.
    pub fn target(&self, url: &str) -> LinkTarget {
        match self.kind(url) {
            LinkKind::Section(href) => LinkTarget::Plain {
                href: href.to_string(),
                force_blank: false,
            },
            LinkKind::Open(href, _) => LinkTarget::Plain {
                href: href.to_string(),
                force_blank: true,
            },
            LinkKind::Internal(path) => LinkTarget::Internal {
                path: self.prefix.strip_from(path),
            },
        }
    }

    /// Resolve a request's URL and map it to its rendering target.
    pub fn resolve(&self, request: &LinkRequest) -> Result<LinkTarget, LinkError> {
        Ok(self.target(request.url()?))
    }

    /// Reason a URL opens in a new tab, if it does.
    pub fn open_reason(&self, url: &str) -> Option<OpenReason> {
        match self.kind(url) {
            LinkKind::Open(_, reason) => Some(reason),
            _ => None,
        }
    }
}
