//! Clash Resolution Policy
//!
//! When a requested name is already taken in its output file, the registry
//! asks a resolver for a new candidate. Resolvers are pure strategies: same
//! inputs, same output, no registry access. The registry drives the retry
//! loop and enforces the try budget; a resolver only proposes candidates.
//!
//! The default policy appends a numbered suffix derived from the original
//! request (`Foo` -> `Foo$1`, `Foo$2`, ...). Callers with domain-specific
//! conventions inject their own policy at registry construction, either as a
//! type implementing [`ClashResolver`] or as a closure wrapped in
//! [`resolver_fn`].

use crate::config::NamingConfig;

/// Strategy for proposing an alternative name after a collision
///
/// `attempt` starts at 1 and counts resolver invocations for the current
/// registration; `current` is the most recent rejected candidate (the
/// original request on the first attempt).
pub trait ClashResolver<D, F> {
    fn propose(
        &self,
        descriptor: &D,
        file: &F,
        requested: &str,
        kind: &str,
        attempt: u32,
        current: &str,
    ) -> String;
}

// =============================================================================
// Closure Adapter
// =============================================================================

/// A [`ClashResolver`] backed by a closure, built with [`resolver_fn`]
#[derive(Debug, Clone)]
pub struct ResolverFn<T> {
    f: T,
}

/// Wrap a closure as a clash resolver
pub fn resolver_fn<T>(f: T) -> ResolverFn<T> {
    ResolverFn { f }
}

impl<D, F, T> ClashResolver<D, F> for ResolverFn<T>
where
    T: Fn(&D, &F, &str, &str, u32, &str) -> String,
{
    fn propose(
        &self,
        descriptor: &D,
        file: &F,
        requested: &str,
        kind: &str,
        attempt: u32,
        current: &str,
    ) -> String {
        (self.f)(descriptor, file, requested, kind, attempt, current)
    }
}

// =============================================================================
// Default Policy
// =============================================================================

/// Default resolver: append a separator and the attempt number
///
/// Candidates are recomputed from the original request on every attempt, so
/// attempt N replaces attempt N-1's suffix instead of stacking onto it. A
/// request that already ends with the separator has that one trailing
/// separator stripped first: `"Foo$"` becomes `"Foo$1"`, not `"Foo$$1"`.
#[derive(Debug, Clone)]
pub struct SuffixClashResolver {
    separator: char,
}

impl SuffixClashResolver {
    /// Create a resolver from naming configuration
    pub fn new(config: NamingConfig) -> Self {
        Self {
            separator: config.separator,
        }
    }

    /// The configured separator character
    pub fn separator(&self) -> char {
        self.separator
    }
}

impl Default for SuffixClashResolver {
    fn default() -> Self {
        Self::new(NamingConfig::default())
    }
}

impl<D, F> ClashResolver<D, F> for SuffixClashResolver {
    fn propose(
        &self,
        _descriptor: &D,
        _file: &F,
        requested: &str,
        _kind: &str,
        attempt: u32,
        _current: &str,
    ) -> String {
        let base = requested.strip_suffix(self.separator).unwrap_or(requested);
        format!("{}{}{}", base, self.separator, attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn propose(resolver: &SuffixClashResolver, requested: &str, attempt: u32) -> String {
        ClashResolver::<(), ()>::propose(resolver, &(), &(), requested, "default", attempt, requested)
    }

    #[test]
    fn test_appends_numbered_suffix() {
        let resolver = SuffixClashResolver::default();
        assert_eq!(propose(&resolver, "Foo", 1), "Foo$1");
        assert_eq!(propose(&resolver, "Foo", 2), "Foo$2");
    }

    #[test]
    fn test_strips_trailing_separator_before_numbering() {
        let resolver = SuffixClashResolver::default();
        assert_eq!(propose(&resolver, "Foo$", 1), "Foo$1");
        // Only one trailing separator is stripped
        assert_eq!(propose(&resolver, "Foo$$", 3), "Foo$$3");
        // A leading separator is untouched
        assert_eq!(propose(&resolver, "$Foo", 1), "$Foo$1");
    }

    #[test]
    fn test_custom_separator() {
        let resolver = SuffixClashResolver::new(NamingConfig { separator: '_' });
        assert_eq!(propose(&resolver, "Foo", 4), "Foo_4");
        assert_eq!(propose(&resolver, "Foo_", 1), "Foo_1");
    }

    #[test]
    fn test_pure_and_deterministic() {
        let resolver = SuffixClashResolver::default();
        assert_eq!(propose(&resolver, "Widget", 7), propose(&resolver, "Widget", 7));
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = resolver_fn(|_: &(), _: &(), requested: &str, kind: &str, attempt: u32, _: &str| {
            format!("{}_{}_{}", requested, kind, attempt)
        });
        let candidate = ClashResolver::<(), ()>::propose(&resolver, &(), &(), "Foo", "iface", 2, "Foo");
        assert_eq!(candidate, "Foo_iface_2");
    }
}
