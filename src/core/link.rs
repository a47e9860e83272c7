//! Link classification.

use serde::Serialize;

use super::url::SiteOrigin;

/// Image suffixes that open in a new tab. Case-sensitive, checked in order.
const IMAGE_SUFFIXES: [&str; 4] = [".png", ".jpg", ".jpeg", ".svg"];

/// Why a link is opened in a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenReason {
    /// Absolute URL on another host.
    External,
    /// `mailto:` address.
    MailTo,
    /// Image asset (`.png`, `.jpg`, `.jpeg`, `.svg`).
    Image,
}

impl OpenReason {
    /// Lowercase name, as serialized.
    pub const fn name(self) -> &'static str {
        match self {
            Self::External => "external",
            Self::MailTo => "mailto",
            Self::Image => "image",
        }
    }
}

/// Classification of a link. First matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// In-page anchor (`#section`). Value is the full link including `#`.
    Section(&'a str),
    /// External, mailto or image link, opened with `target="_blank"`.
    Open(&'a str, OpenReason),
    /// Route within the site (`/about`, `posts/hello`).
    Internal(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Classify a link relative to the site origin.
    pub fn classify(link: &'a str, origin: &SiteOrigin) -> Self {
        if link.starts_with('#') {
            Self::Section(link)
        } else if let Some(reason) = Self::open_reason(link, origin) {
            Self::Open(link, reason)
        } else {
            Self::Internal(link)
        }
    }

    fn open_reason(link: &str, origin: &SiteOrigin) -> Option<OpenReason> {
        if origin.is_external(link) {
            Some(OpenReason::External)
        } else if Self::is_mailto(link) {
            Some(OpenReason::MailTo)
        } else if Self::is_image(link) {
            Some(OpenReason::Image)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_mailto(link: &str) -> bool {
        link.starts_with("mailto:")
    }

    #[inline]
    pub fn is_image(link: &str) -> bool {
        IMAGE_SUFFIXES.iter().any(|suffix| link.ends_with(suffix))
    }

    /// Short name used in CLI output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Section(_) => "section",
            Self::Open(..) => "open",
            Self::Internal(_) => "internal",
        }
    }
}
