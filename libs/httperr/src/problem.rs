//! RFC 9457 Problem Details output shaping (pure data, no HTTP framework)

use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Custom serializer for `StatusCode` to u16
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn serialize_status_code<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

/// Custom deserializer for `StatusCode` from u16
fn deserialize_status_code<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
where
    D: Deserializer<'de>,
{
    let code = u16::deserialize(deserializer)?;
    StatusCode::from_u16(code).map_err(serde::de::Error::custom)
}

fn default_status_code() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// RFC 9457 Problem Details, ready to serialize as
/// [`APPLICATION_PROBLEM_JSON`] content.
///
/// `type`, `title` and `status` are always present. `detail` and `instance`
/// are omitted entirely (not serialized as empty strings) when empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(
    feature = "utoipa",
    schema(
        title = "ProblemDetail",
        description = "RFC 9457 Problem Details for HTTP APIs"
    )
)]
#[must_use]
pub struct ProblemDetail {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence of the problem.
    /// Serializes as u16 for RFC 9457 compatibility.
    #[serde(
        serialize_with = "serialize_status_code",
        deserialize_with = "deserialize_status_code",
        default = "default_status_code"
    )]
    #[cfg_attr(feature = "utoipa", schema(value_type = u16))]
    pub status: StatusCode,
    /// A human-readable explanation specific to this occurrence of the
    /// problem. Empty when no localized detail was available.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub detail: String,
    /// A URI reference that identifies the specific occurrence of the
    /// problem, typically the request path.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub instance: String,
}

/// Whether `uri` needs no resolution against a base URI.
///
/// Exactly three prefixes count as absolute; `about:` covers the
/// `about:blank` default and is deliberately distinct from `http(s)://`.
pub(crate) fn is_absolute_uri(uri: &str) -> bool {
    uri.starts_with("http://") || uri.starts_with("https://") || uri.starts_with("about:")
}

/// Concatenate `reference` onto `base` with exactly one separating `/`.
///
/// `base` is not validated; a malformed base URI is passed through as-is.
pub(crate) fn resolve_uri(base: &str, reference: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{reference}")
    } else {
        format!("{base}/{reference}")
    }
}
