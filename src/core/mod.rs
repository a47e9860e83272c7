//! Core types - pure abstractions shared across the codebase.

mod link;
mod prefix;
mod url;

pub use link::{LinkKind, OpenReason};
pub use prefix::{BoxError, PathPrefix, PathPrefixProvider};
pub use url::SiteOrigin;
