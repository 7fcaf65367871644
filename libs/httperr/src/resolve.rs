//! Error resolution: registry lookup plus localized detail extraction

use std::error::Error;

use crate::config::Config;
use crate::localize;
use crate::problem::{self, ProblemDetail};
use crate::registry::Registry;

use http::StatusCode;

/// Resolved response information for one error occurrence.
///
/// Produced per request by [`resolve`]; carries the matched configuration
/// plus a localized `detail` when the error chain exposed one.
#[derive(Debug, Clone)]
#[must_use]
pub struct Response {
    /// RFC 9457 type URI from the matched configuration.
    pub type_url: String,
    /// Short summary from the matched configuration.
    pub title: String,
    /// HTTP status code from the matched configuration.
    pub status: StatusCode,
    /// Localized message, empty when localization was unavailable.
    pub detail: String,
}

impl Response {
    /// Shape this response as an RFC 9457 problem detail.
    ///
    /// `instance` is the request-identifying path and may be empty. When
    /// `base_uri` is present and non-empty, a relative `type` is resolved
    /// against it with exactly one separating `/`; absolute types
    /// (`http://`, `https://`, `about:`) pass through unchanged.
    pub fn problem_detail(&self, instance: &str, base_uri: Option<&str>) -> ProblemDetail {
        let type_url = match base_uri {
            Some(base) if !base.is_empty() && !problem::is_absolute_uri(&self.type_url) => {
                problem::resolve_uri(base, &self.type_url)
            }
            _ => self.type_url.clone(),
        };

        ProblemDetail {
            type_url,
            title: self.title.clone(),
            status: self.status,
            detail: self.detail.clone(),
            instance: instance.to_owned(),
        }
    }
}

/// Resolve an error to response information.
///
/// Finds the matching [`Config`] in the registry (default configuration when
/// nothing matches), then probes the full cause chain for the
/// [`Localize`](crate::Localize) capability and extracts a detail message for
/// `locale`. Always succeeds; severity decisions (such as logging 5xx
/// responses) are left to the caller via [`Response::status`].
pub fn resolve(err: &(dyn Error + 'static), registry: &Registry, locale: &str) -> Response {
    let config: &Config = registry.match_config(err);

    let detail = localize::find_localized(err, registry.localizers())
        .and_then(|localized| localized.localize(locale))
        .unwrap_or_default();

    Response {
        type_url: config.type_url.clone(),
        title: config.title.clone(),
        status: config.status,
        detail,
    }
}
