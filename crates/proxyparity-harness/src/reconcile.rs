//! Merge the server and proxy tables by command name.

use std::collections::BTreeMap;

use proxyparity_types::{DeclaredSupport, ProxyCommand, ServerCommand, ServerSupport};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Support pair for one command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledEntry {
    /// Derived from the server row's key span.
    pub server: ServerSupport,
    /// Copied from the proxy row.
    pub proxy: DeclaredSupport,
}

impl Default for ReconciledEntry {
    fn default() -> Self {
        Self {
            server: ServerSupport::Unknown,
            proxy: DeclaredSupport::Unknown,
        }
    }
}

impl ReconciledEntry {
    /// The two sides disagree. `Yes*` is not `Yes`; `Unknown` matches nothing
    /// but itself.
    #[must_use]
    pub fn differs(&self) -> bool {
        self.server != self.proxy
    }
}

/// Name-ordered reconciliation result.
pub type ReconciledMap = BTreeMap<String, ReconciledEntry>;

/// Build the reconciled mapping over the union of both tables' names.
///
/// Each side is written once per row; a name repeated within one table keeps
/// its last row.
#[must_use]
pub fn reconcile(server: &[ServerCommand], proxy: &[ProxyCommand]) -> ReconciledMap {
    let mut reconciled = ReconciledMap::new();

    for name in server
        .iter()
        .map(|command| command.name)
        .chain(proxy.iter().map(|command| command.name))
    {
        reconciled.entry(name.to_owned()).or_default();
    }

    for command in server {
        if let Some(entry) = reconciled.get_mut(command.name) {
            entry.server = ServerSupport::from_first_key(command.first_key);
        }
    }

    for command in proxy {
        if let Some(entry) = reconciled.get_mut(command.name) {
            entry.proxy = command.support.into();
        }
    }

    debug!(
        server_rows = server.len(),
        proxy_rows = proxy.len(),
        names = reconciled.len(),
        "command tables reconciled"
    );
    reconciled
}
