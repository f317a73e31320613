//! Command metadata for the server and the proxy in front of it.
//!
//! - [`command`]: server command rows and key-position resolution
//! - [`flags`]: decoding of one-character flag strings
//! - [`support`]: support levels on each side of the reconciliation
//! - [`tables`]: the embedded server and proxy tables

pub mod command;
pub mod flags;
pub mod support;
pub mod tables;

pub use command::{KeyExtractor, ServerCommand};
pub use flags::CommandFlags;
pub use support::{DeclaredSupport, ProxyCommand, ProxySupport, ServerSupport};
pub use tables::{PROXY_COMMANDS, SERVER_COMMANDS};
