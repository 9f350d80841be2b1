//! Naming Configuration
//!
//! Settings for the default clash-resolution policy. This crate only defines
//! the config structs with serde derives and defaults; loading them from the
//! toolchain's config file is the caller's concern.

use serde::{Deserialize, Serialize};

/// Configuration for the default suffixing clash resolver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Separator placed between a clashing name and its numeric suffix
    #[serde(default = "default_separator")]
    pub separator: char,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

fn default_separator() -> char {
    '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separator() {
        let config = NamingConfig::default();
        assert_eq!(config.separator, '$');
    }
}
