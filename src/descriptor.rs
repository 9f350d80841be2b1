//! Schema Descriptor Handles
//!
//! Lightweight identity handles for the schema entities (messages, enums,
//! services) that receive generated names. The registry compares descriptors
//! by identity, never by content: two handles are equal only when one was
//! cloned from the other, so two structurally identical entities loaded from
//! different schema files are never conflated.
//!
//! A full descriptor model (fields, nesting, options) lives in the generation
//! pipeline. The registry only needs stable identity plus a human-readable
//! description for diagnostics, which is what these handles provide.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// The flavor of schema entity a descriptor stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Message,
    Enum,
    Service,
}

impl EntityKind {
    /// Lowercase label used in diagnostics ("message chat.Message")
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Message => "message",
            EntityKind::Enum => "enum",
            EntityKind::Service => "service",
        }
    }
}

#[derive(Debug)]
struct DescriptorData {
    kind: EntityKind,
    full_name: String,
}

/// Identity handle for one schema entity
///
/// Cheap to clone; clones share identity with the original. Equality and
/// hashing go through the underlying allocation, not the stored fields.
#[derive(Debug, Clone)]
pub struct Descriptor {
    data: Rc<DescriptorData>,
}

impl Descriptor {
    /// Create a handle for a new schema entity
    pub fn new(kind: EntityKind, full_name: impl Into<String>) -> Self {
        Self {
            data: Rc::new(DescriptorData {
                kind,
                full_name: full_name.into(),
            }),
        }
    }

    /// Create a message descriptor
    pub fn message(full_name: impl Into<String>) -> Self {
        Self::new(EntityKind::Message, full_name)
    }

    /// Create an enum descriptor
    pub fn enumeration(full_name: impl Into<String>) -> Self {
        Self::new(EntityKind::Enum, full_name)
    }

    /// Create a service descriptor
    pub fn service(full_name: impl Into<String>) -> Self {
        Self::new(EntityKind::Service, full_name)
    }

    /// The entity flavor
    pub fn entity_kind(&self) -> EntityKind {
        self.data.kind
    }

    /// Dotted schema name (e.g. "chat.Message")
    pub fn full_name(&self) -> &str {
        &self.data.full_name
    }
}

impl PartialEq for Descriptor {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Descriptor {}

impl Hash for Descriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.data) as usize).hash(state);
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.data.kind.label(), self.data.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_not_structural() {
        let a = Descriptor::message("chat.Message");
        let b = Descriptor::message("chat.Message");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_display_description() {
        let d = Descriptor::service("chat.ChatService");
        assert_eq!(d.to_string(), "service chat.ChatService");
        assert_eq!(Descriptor::enumeration("chat.Role").to_string(), "enum chat.Role");
    }
}
