//! Output File Handles
//!
//! Identity handles for the destination units that receive emitted source
//! text. Assigned names must be unique within one output file, so the
//! registry keys its per-file invariant on these handles. Like descriptors,
//! they compare by identity: creating two handles with the same path yields
//! two distinct files as far as the registry is concerned.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

#[derive(Debug)]
struct FileData {
    path: String,
}

/// Identity handle for one generated output file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    data: Rc<FileData>,
}

impl GeneratedFile {
    /// Create a handle for a new output file
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            data: Rc::new(FileData { path: path.into() }),
        }
    }

    /// Display path used in diagnostics
    pub fn path(&self) -> &str {
        &self.data.path
    }
}

impl PartialEq for GeneratedFile {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for GeneratedFile {}

impl Hash for GeneratedFile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.data) as usize).hash(state);
    }
}

impl fmt::Display for GeneratedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data.path)
    }
}
