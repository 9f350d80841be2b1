//! Name Registry
//!
//! Owns the append-only set of (file, descriptor, kind, name) bindings
//! produced during one generation run and hands out collision-free
//! identifiers for every artifact the pipeline emits.
//!
//! Two invariants hold at all times:
//! - a (descriptor, kind) pair owns at most one entry across the whole
//!   registry, regardless of file
//! - a (file, name) pair is bound at most once, regardless of kind
//!
//! The registry is plain owned state for a single-threaded generation pass:
//! registration takes `&mut self`, lookups take `&self`, and one run owns
//! exactly one instance. Parallel per-file emission would have to serialize
//! whole `register` calls behind a single lock, because both invariants span
//! the entire entry set.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::{NamingError, Result};
use crate::resolver::{ClashResolver, SuffixClashResolver};

/// Kind tag used when a descriptor owns a single generated name
pub const DEFAULT_KIND: &str = "default";

/// Upper bound on resolver invocations for one registration
pub const MAX_CLASH_TRIES: u32 = 100;

// =============================================================================
// Entry
// =============================================================================

/// An immutable binding of an assigned name to a (descriptor, kind) pair
/// within one output file
#[derive(Debug, Clone)]
pub struct NameEntry<D, F> {
    /// Output file the name was assigned in
    pub file: F,

    /// Schema entity that owns the name
    pub descriptor: D,

    /// Artifact kind tag (e.g. "class" vs "interface" for one message)
    pub kind: String,

    /// The finally-assigned, collision-free identifier
    pub name: String,
}

// =============================================================================
// Registry
// =============================================================================

/// Assigns and remembers collision-free names for generated artifacts.
///
/// Generic over the descriptor and file handle types: the registry only
/// requires stable identity (`Eq + Hash` with identity semantics) and a
/// `Display` implementation for diagnostics. The collision policy `R` is
/// injected at construction and defaults to [`SuffixClashResolver`].
pub struct NameRegistry<D, F, R = SuffixClashResolver> {
    /// Injected collision-resolution policy
    resolver: R,

    /// All entries, in registration order
    entries: Vec<NameEntry<D, F>>,

    /// Names already bound per file. Only membership is ever queried, so
    /// hash-iteration order can never influence an assigned name.
    taken: HashMap<F, HashSet<String>>,
}

impl<D, F> NameRegistry<D, F> {
    /// Create an empty registry with the default suffixing resolver
    pub fn new() -> Self {
        Self::with_resolver(SuffixClashResolver::default())
    }
}

impl<D, F> Default for NameRegistry<D, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, F, R> NameRegistry<D, F, R> {
    /// Create an empty registry with a custom clash-resolution policy
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            resolver,
            entries: Vec::new(),
            taken: HashMap::new(),
        }
    }
}

impl<D, F, R> NameRegistry<D, F, R>
where
    D: Clone + Eq + Hash + fmt::Display,
    F: Clone + Eq + Hash + fmt::Display,
    R: ClashResolver<D, F>,
{
    /// Register a name under the default kind
    ///
    /// See [`NameRegistry::register_as`].
    pub fn register(&mut self, requested: &str, descriptor: &D, file: &F) -> Result<String> {
        self.register_as(requested, descriptor, file, DEFAULT_KIND)
    }

    /// Register a name for `(descriptor, kind)` in `file`, resolving clashes
    ///
    /// Returns the finally-assigned name: the requested one when it is free
    /// in `file`, otherwise the first free candidate the resolver proposes
    /// within the try budget. Exactly one entry is appended on success;
    /// failure leaves the registry untouched.
    ///
    /// Fails with [`NamingError::DuplicateRegistration`] if this
    /// `(descriptor, kind)` pair already owns an entry (in any file), and
    /// with [`NamingError::ClashResolutionExhausted`] if the resolver cannot
    /// produce a free name within [`MAX_CLASH_TRIES`] attempts.
    pub fn register_as(
        &mut self,
        requested: &str,
        descriptor: &D,
        file: &F,
        kind: &str,
    ) -> Result<String> {
        if let Some(existing) = self.find(descriptor, kind) {
            return Err(NamingError::DuplicateRegistration {
                symbol: descriptor.to_string(),
                kind: kind.to_string(),
                requested: requested.to_string(),
                existing_name: existing.name.clone(),
                existing_file: existing.file.to_string(),
            });
        }

        let mut name = requested.to_string();
        let mut tries = 0;
        while self.is_taken(file, &name) && tries < MAX_CLASH_TRIES {
            tries += 1;
            name = self
                .resolver
                .propose(descriptor, file, requested, kind, tries, &name);
        }
        if self.is_taken(file, &name) {
            return Err(NamingError::ClashResolutionExhausted {
                symbol: descriptor.to_string(),
                file: file.to_string(),
                requested: requested.to_string(),
                tries: MAX_CLASH_TRIES,
            });
        }

        if tries > 0 {
            debug!(requested, assigned = %name, tries, kind, "resolved name clash");
        } else {
            trace!(assigned = %name, kind, "registered name");
        }

        self.taken
            .entry(file.clone())
            .or_default()
            .insert(name.clone());
        self.entries.push(NameEntry {
            file: file.clone(),
            descriptor: descriptor.clone(),
            kind: kind.to_string(),
            name: name.clone(),
        });

        Ok(name)
    }

    /// Look up the entry for `(descriptor, kind)`, if registered
    pub fn find(&self, descriptor: &D, kind: &str) -> Option<&NameEntry<D, F>> {
        self.entries
            .iter()
            .find(|e| e.descriptor == *descriptor && e.kind == kind)
    }

    /// Look up the entry for `(descriptor, kind)`, failing if absent
    pub fn get(&self, descriptor: &D, kind: &str) -> Result<&NameEntry<D, F>> {
        self.find(descriptor, kind)
            .ok_or_else(|| NamingError::SymbolNotFound {
                symbol: descriptor.to_string(),
                kind: kind.to_string(),
                file_count: self.file_count(),
            })
    }

    /// Whether `(descriptor, kind)` has a registered name in any file
    pub fn has(&self, descriptor: &D, kind: &str) -> bool {
        self.find(descriptor, kind).is_some()
    }

    /// Whether `(descriptor, kind)` has a registered name in `file`
    pub fn has_in_file(&self, descriptor: &D, file: &F, kind: &str) -> bool {
        self.find(descriptor, kind).map_or(false, |e| e.file == *file)
    }

    /// All entries assigned to `file`, in registration order
    pub fn list(&self, file: &F) -> Vec<&NameEntry<D, F>> {
        self.entries.iter().filter(|e| e.file == *file).collect()
    }

    /// The entries assigned to `file` with the given kind, in registration order
    pub fn list_kind(&self, file: &F, kind: &str) -> Vec<&NameEntry<D, F>> {
        self.entries
            .iter()
            .filter(|e| e.file == *file && e.kind == kind)
            .collect()
    }

    /// All entries, in registration order
    pub fn entries(&self) -> impl Iterator<Item = &NameEntry<D, F>> {
        self.entries.iter()
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no names have been registered yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct files currently holding entries
    pub fn file_count(&self) -> usize {
        self.taken.len()
    }

    fn is_taken(&self, file: &F, name: &str) -> bool {
        self.taken.get(file).map_or(false, |names| names.contains(name))
    }
}
