//! Link request: target URL plus pass-through presentation attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::LinkError;

/// Ordered pass-through attributes (`class`, `aria-label`, `onclick`, ...).
pub type Props = Map<String, Value>;

/// A single link to render.
///
/// `to` is the primary field, `href` the legacy alias. Everything else is
/// collected into `props` and forwarded verbatim.
///
/// ```json
/// {"to": "/about", "class": "nav", "aria-label": "About"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(flatten)]
    pub props: Props,
}

impl LinkRequest {
    pub fn to(url: impl Into<String>) -> Self {
        Self {
            to: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn href(url: impl Into<String>) -> Self {
        Self {
            href: Some(url.into()),
            ..Self::default()
        }
    }

    /// Add a pass-through attribute.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Resolve the target URL: `to` if non-empty, else `href` if non-empty.
    pub fn url(&self) -> Result<&str, LinkError> {
        [self.to.as_deref(), self.href.as_deref()]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .ok_or(LinkError::MissingUrl)
    }
}
