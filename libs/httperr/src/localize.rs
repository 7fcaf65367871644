//! Localized detail extraction from error chains

use std::error::Error;

/// An error that can produce a locale-specific human-readable message.
///
/// Implementations own their fallback policy: when the requested locale has
/// no translation, return the base-locale message instead. Returning `None`
/// leaves the response detail empty, which is a designed outcome rather than
/// a failure.
pub trait Localize: Error + 'static {
    fn localize(&self, locale: &str) -> Option<String>;
}

/// Probe that recognizes one concrete localizable error type inside a chain.
///
/// Stable Rust cannot downcast `dyn Error` to an arbitrary trait, so the
/// capability check is registration-based: each probe is a monomorphized
/// downcast for a type registered via
/// [`Registry::with_localizer`](crate::Registry::with_localizer).
pub(crate) type LocalizerProbe =
    for<'a> fn(&'a (dyn Error + 'static)) -> Option<&'a dyn Localize>;

/// Iterator over an error and its transitive `source()` causes,
/// outermost-first.
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Walk the full cause chain of `err`, starting with `err` itself.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Find the first chain element recognized by any probe.
pub(crate) fn find_localized<'a>(
    err: &'a (dyn Error + 'static),
    probes: &[LocalizerProbe],
) -> Option<&'a dyn Localize> {
    chain(err).find_map(|cause| probes.iter().find_map(|probe| probe(cause)))
}
