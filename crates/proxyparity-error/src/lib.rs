//! Error types shared by the proxyparity crates.
//!
//! Two severities exist and are deliberately separate types:
//! - diagnostic mismatches are report rows, never errors;
//! - [`InvariantViolation`] is a broken key-position assumption that aborts a
//!   run. It travels inside [`ParityError::Invariant`].

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, ParityError>;

/// Structural invariant of the command tables that the proxy's forwarding
/// logic relies on. Any of these aborts the check sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The proxy declares full support for a command the server table lacks.
    #[error("proxy supports {name} but the server table has no entry for it")]
    MissingServerEntry { name: String },

    /// The proxy declares full support for a command that is not single-key.
    #[error(
        "proxy supports {name} but its key span is first={first_key} last={last_key}, \
         expected first=1 last=1"
    )]
    ProxyKeyShape {
        name: String,
        first_key: i32,
        last_key: i32,
    },

    /// `first_key == 0` must imply `last_key == 0`.
    #[error("{name} addresses no keys (first=0) but has last={last_key}")]
    KeylessCommandHasLastKey { name: String, last_key: i32 },

    /// `last_key == 0` must imply `first_key == 0`.
    #[error("{name} has last=0 but first={first_key}")]
    LastKeyWithoutFirstKey { name: String, first_key: i32 },

    /// `last_key == 1` must imply `first_key == 1`.
    #[error("{name} has last=1 but first={first_key}")]
    SingleKeyNotFirst { name: String, first_key: i32 },
}

impl InvariantViolation {
    /// Command name the violation is about.
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::MissingServerEntry { name }
            | Self::ProxyKeyShape { name, .. }
            | Self::KeylessCommandHasLastKey { name, .. }
            | Self::LastKeyWithoutFirstKey { name, .. }
            | Self::SingleKeyNotFirst { name, .. } => name,
        }
    }

    /// Stable snake_case tag for single-line diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingServerEntry { .. } => "missing_server_entry",
            Self::ProxyKeyShape { .. } => "proxy_key_shape",
            Self::KeylessCommandHasLastKey { .. } => "keyless_command_has_last_key",
            Self::LastKeyWithoutFirstKey { .. } => "last_key_without_first_key",
            Self::SingleKeyNotFirst { .. } => "single_key_not_first",
        }
    }
}

/// Primary error type for the workspace.
#[derive(Debug, Error)]
pub enum ParityError {
    /// A table edit broke a routing invariant.
    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),

    /// A flag string contains a code with no known meaning.
    #[error("unknown flag '{flag}' in flag string \"{flags}\" of {command}")]
    UnknownFlag {
        command: String,
        flags: String,
        flag: char,
    },

    /// An argument vector does not satisfy the command's declared arity.
    #[error("wrong number of arguments for {command}: arity={arity} argc={argc}")]
    ArityMismatch {
        command: String,
        arity: i32,
        argc: usize,
    },

    /// A `numkeys` argument is not a count that fits the argument vector.
    #[error("invalid key count for {command}: {detail}")]
    InvalidKeyCount { command: String, detail: String },

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the report failed.
    #[error("report serialization failed: {0}")]
    Serialize(String),

    /// Bad command-line usage.
    #[error("{0}")]
    Usage(String),
}

impl ParityError {
    /// Whether this error is a fatal table invariant rather than an
    /// environmental failure.
    #[must_use]
    pub const fn is_invariant(&self) -> bool {
        matches!(self, Self::Invariant(_))
    }

    /// The violated invariant, if this is one.
    #[must_use]
    pub const fn invariant(&self) -> Option<&InvariantViolation> {
        match self {
            Self::Invariant(violation) => Some(violation),
            _ => None,
        }
    }
}
