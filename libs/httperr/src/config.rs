//! Response configuration for a known error condition

use http::StatusCode;

/// HTTP response configuration for an error.
///
/// Built once when populating a [`Registry`](crate::Registry) and treated as
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Config {
    /// RFC 9457 type URI. May be relative; resolved against a base URI when
    /// the problem detail is produced.
    pub type_url: String,
    /// Short, fixed summary of the problem type.
    pub title: String,
    /// HTTP status code for this problem type.
    pub status: StatusCode,
}

impl Config {
    pub fn new(type_url: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_url: type_url.into(),
            title: title.into(),
            status,
        }
    }
}

/// The configuration used when no registry entry matches an error.
impl Default for Config {
    fn default() -> Self {
        Self {
            type_url: "about:blank".to_owned(),
            title: "Internal Server Error".to_owned(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
