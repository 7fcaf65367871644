//! End-to-end resolution scenarios: sentinel registry, wrap chains,
//! localization fallback, and RFC 9457 output shape.

use http::StatusCode;
use httperr::{Config, Localize, Registry, Sentinel, resolve};
use serde_json::json;
use thiserror::Error;

static ERR_NOT_FOUND: Sentinel = Sentinel::new("user not found");
static ERR_CONFLICT: Sentinel = Sentinel::new("user already exists");

/// "context: cause" wrapper around a sentinel, the shape business code
/// produces when annotating a lower-level failure.
#[derive(Debug, Error)]
#[error("{context}: {source}")]
struct Wrapped {
    context: &'static str,
    #[source]
    source: &'static Sentinel,
}

#[derive(Debug, Error)]
#[error("handling request: {source}")]
struct RequestFailed {
    #[source]
    source: Wrapped,
}

#[derive(Debug, Error)]
#[error("handling request: {source}")]
struct LookupFailed {
    #[source]
    source: UserNotFound,
}

#[derive(Debug, Error)]
#[error("user {user_id} not found")]
struct UserNotFound {
    user_id: u64,
    #[source]
    source: &'static Sentinel,
}

impl Localize for UserNotFound {
    fn localize(&self, locale: &str) -> Option<String> {
        // "en" is the base locale; unknown locales fall back to it.
        match locale {
            "ja" => Some(format!("riyousha {} wa sonzai shimasen", self.user_id)),
            _ => Some(format!("user {} does not exist", self.user_id)),
        }
    }
}

fn registry() -> Registry {
    Registry::new()
        .with(
            &ERR_NOT_FOUND,
            Config::new("users/not-found", "User not found", StatusCode::NOT_FOUND),
        )
        .with(
            &ERR_CONFLICT,
            Config::new("users/conflict", "User already exists", StatusCode::CONFLICT),
        )
        .with_localizer::<UserNotFound>()
}

#[test]
fn registered_sentinel_resolves_without_localization() {
    let response = resolve(&ERR_NOT_FOUND, &registry(), "en");
    assert_eq!(response.type_url, "users/not-found");
    assert_eq!(response.title, "User not found");
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.detail.is_empty());
}

#[test]
fn sentinel_matches_through_multiple_wrap_layers() {
    let err = RequestFailed {
        source: Wrapped {
            context: "loading user",
            source: &ERR_CONFLICT,
        },
    };
    let response = resolve(&err, &registry(), "en");
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.type_url, "users/conflict");
}

#[test]
fn localized_error_fills_detail() {
    let err = UserNotFound {
        user_id: 123,
        source: &ERR_NOT_FOUND,
    };
    let registry = registry();

    let ja = resolve(&err, &registry, "ja");
    assert_eq!(ja.detail, "riyousha 123 wa sonzai shimasen");

    let en = resolve(&err, &registry, "en");
    assert_eq!(en.detail, "user 123 does not exist");

    // No French translation; the capability falls back to the base locale.
    let fr = resolve(&err, &registry, "fr");
    assert_eq!(fr.detail, "user 123 does not exist");
}

#[test]
fn localization_is_found_behind_a_wrapper() {
    let err = LookupFailed {
        source: UserNotFound {
            user_id: 7,
            source: &ERR_NOT_FOUND,
        },
    };
    let response = resolve(&err, &registry(), "ja");
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail, "riyousha 7 wa sonzai shimasen");
}

#[test]
fn not_found_scenario_produces_exact_problem_json() {
    let response = resolve(&ERR_NOT_FOUND, &registry(), "en");
    let pd = response.problem_detail("/api/v1/users/123", None);

    assert_eq!(
        serde_json::to_value(&pd).unwrap(),
        json!({
            "type": "users/not-found",
            "title": "User not found",
            "status": 404,
            "instance": "/api/v1/users/123",
        })
    );
}

#[test]
fn unmapped_error_produces_opaque_default() {
    #[derive(Debug, Error)]
    #[error("connection reset by peer")]
    struct ConnectionReset;

    let response = resolve(&ConnectionReset, &registry(), "en");
    let pd = response.problem_detail("", Some("https://api.example.com/problems"));

    // about:blank is absolute, so the base URI must not be applied.
    assert_eq!(
        serde_json::to_value(&pd).unwrap(),
        json!({
            "type": "about:blank",
            "title": "Internal Server Error",
            "status": 500,
        })
    );
}

#[test]
fn base_uri_applies_to_relative_types_end_to_end() {
    let err = Wrapped {
        context: "GET /users/123 failed",
        source: &ERR_NOT_FOUND,
    };
    let response = resolve(&err, &registry(), "en");
    let pd = response.problem_detail("/users/123", Some("https://api.example.com/problems"));
    assert_eq!(
        pd.type_url,
        "https://api.example.com/problems/users/not-found"
    );
    assert_eq!(pd.instance, "/users/123");
}
