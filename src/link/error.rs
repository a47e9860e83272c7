//! Link resolution error types.

use thiserror::Error;

use crate::core::BoxError;

/// Errors raised while turning a link request into a rendered link.
///
/// Neither is recoverable: there is no I/O of our own to retry.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Both `to` and `href` are absent or empty.
    #[error("link has no URL: set `to` or `href`")]
    MissingUrl,

    /// The path prefix provider failed.
    #[error("failed to read site path prefix")]
    PrefixUnavailable(#[source] BoxError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_link_error_display() {
        let display = format!("{}", LinkError::MissingUrl);
        assert!(display.contains("`to`"));
        assert!(display.contains("`href`"));

        let err = LinkError::PrefixUnavailable(Box::new(Error::new(
            ErrorKind::NotFound,
            "tola.toml missing",
        )));
        assert!(format!("{err}").contains("path prefix"));
        assert!(err.source().unwrap().to_string().contains("tola.toml"));
    }
}
