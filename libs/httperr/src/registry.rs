//! Sentinel errors and the error-to-configuration registry

use std::error::Error;
use std::ptr;

use crate::config::Config;
use crate::localize::{self, Localize, LocalizerProbe};

/// A fixed, identity-comparable error value used as a registry key.
///
/// Declare one `static` per distinct failure condition and register or wrap
/// it by `&'static` reference. Matching compares pointer identity, never
/// message text: two sentinels with identical messages are distinct keys.
/// The type is deliberately not `Clone` so an instance cannot drift away
/// from its registered identity.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Sentinel(&'static str);

impl Sentinel {
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self(message)
    }
}

/// Mapping from sentinel errors to response configurations.
///
/// Built once at startup with the `with*` builders and read-only afterwards;
/// lookups from concurrent request handlers are safe by construction.
#[derive(Default)]
#[must_use]
pub struct Registry {
    entries: Vec<(&'static Sentinel, Config)>,
    localizers: Vec<LocalizerProbe>,
    fallback: Config,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            localizers: Vec::new(),
            fallback: Config::default(),
        }
    }

    /// Register a response configuration for a sentinel error.
    ///
    /// When an error chain satisfies several registered sentinels, the
    /// first-registered entry wins.
    pub fn with(mut self, sentinel: &'static Sentinel, config: Config) -> Self {
        self.entries.push((sentinel, config));
        self
    }

    /// Declare a concrete error type as carrying the [`Localize`] capability.
    ///
    /// [`resolve`](crate::resolve) can only extract a localized detail from
    /// chain elements whose type was declared here.
    pub fn with_localizer<E: Localize>(mut self) -> Self {
        self.localizers
            .push(|err| err.downcast_ref::<E>().map(|e| e as &dyn Localize));
        self
    }

    /// Find the configuration representing `err`.
    ///
    /// An entry matches when `err` is, or transitively wraps, the entry's
    /// sentinel. Unmatched errors resolve to the default configuration
    /// (`about:blank`, 500) rather than failing.
    pub fn match_config(&self, err: &(dyn Error + 'static)) -> &Config {
        for (sentinel, config) in &self.entries {
            let hit = localize::chain(err).any(|cause| {
                cause
                    .downcast_ref::<Sentinel>()
                    .is_some_and(|candidate| ptr::eq(candidate, *sentinel))
            });
            if hit {
                return config;
            }
        }
        tracing::debug!(error = %err, "no registry entry matched, using default configuration");
        &self.fallback
    }

    pub(crate) fn localizers(&self) -> &[LocalizerProbe] {
        &self.localizers
    }
}
