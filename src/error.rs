//! Error types for the name registry

use thiserror::Error;

/// Result type for naming operations
pub type Result<T> = std::result::Result<T, NamingError>;

/// Name registry errors
///
/// Every variant is terminal for the operation that raised it: the generation
/// pipeline is expected to abort the current artifact or file rather than
/// recover locally. Payloads are owned strings rendered at raise time, so an
/// error carries its full diagnostic context without borrowing the registry.
#[derive(Error, Debug)]
pub enum NamingError {
    #[error("Duplicate registration for {symbol} (kind \"{kind}\"): requested \"{requested}\", but \"{existing_name}\" is already assigned in {existing_file}")]
    DuplicateRegistration {
        symbol: String,
        kind: String,
        requested: String,
        existing_name: String,
        existing_file: String,
    },

    #[error("No free name for {symbol} in {file}: gave up on \"{requested}\" after {tries} attempts")]
    ClashResolutionExhausted {
        symbol: String,
        file: String,
        requested: String,
        tries: u32,
    },

    #[error("No name registered for {symbol} (kind \"{kind}\"); searched across {file_count} files")]
    SymbolNotFound {
        symbol: String,
        kind: String,
        file_count: usize,
    },
}
