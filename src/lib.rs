//! Meridian Codegen Naming
//!
//! Collision-free name assignment for the Meridian schema-to-source code
//! generators. One generation run owns one [`NameRegistry`]; every artifact
//! the pipeline emits (a class, an interface, ...) registers the name it
//! would like, and the registry hands back the name it actually gets.
//!
//! ## Features
//!
//! - **Two uniqueness guarantees**: one name per (descriptor, kind) across
//!   the run, and one owner per name within each output file
//! - **Pluggable clash resolution**: a pure strategy proposes alternative
//!   candidates, bounded to 100 attempts per registration
//! - **Deterministic**: the same registration sequence always yields the
//!   same names
//! - **Precise diagnostics**: every failure names the descriptor, kind,
//!   requested name, and implicated file
//!
//! ## Architecture
//!
//! ```text
//! generation pipeline
//!     ├── register("Foo", descriptor, file, kind)   one call per artifact
//!     │       └── ClashResolver                     proposes Foo$1, Foo$2, ...
//!     └── get/find/list                             cross-file reference lookup
//!             └── NameEntry { file, descriptor, kind, name }
//! ```
//!
//! The registry is generic over its descriptor and output-file handles; it
//! needs stable identity and a `Display` impl for diagnostics, nothing more.
//! [`Descriptor`] and [`GeneratedFile`] are ready-made handles for pipelines
//! that do not bring their own.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod output;
pub mod registry;
pub mod resolver;

pub use config::NamingConfig;
pub use descriptor::{Descriptor, EntityKind};
pub use error::{NamingError, Result};
pub use output::GeneratedFile;
pub use registry::{NameEntry, NameRegistry, DEFAULT_KIND, MAX_CLASH_TRIES};
pub use resolver::{resolver_fn, ClashResolver, ResolverFn, SuffixClashResolver};
