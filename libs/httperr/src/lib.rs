//! RFC 9457 Problem Details resolution for application errors
//!
//! Business logic raises plain, HTTP-agnostic errors; this crate maps them to
//! externally-facing response data. It includes:
//! - Response configuration per known error (`Config`, `Registry`)
//! - Identity-based sentinel matching through the full `source()` chain
//! - Localized detail extraction (`Localize`)
//! - RFC 9457 output shaping (`ProblemDetail`)
//!
//! The crate only computes the data to be serialized. Writing the response to
//! the wire, parsing `Accept-Language`, and logging policy belong to the
//! caller.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod localize;
pub mod problem;
pub mod registry;
pub mod resolve;

// Re-export commonly used types
pub use config::Config;
pub use localize::{Chain, Localize, chain};
pub use problem::{APPLICATION_PROBLEM_JSON, ProblemDetail};
pub use registry::{Registry, Sentinel};
pub use resolve::{Response, resolve};
