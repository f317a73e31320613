//! Support levels on both sides of the reconciliation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Support level the proxy table declares for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProxySupport {
    Yes,
    /// Partial or conditional support (all keys must hash to one server, etc).
    #[serde(rename = "Yes*")]
    YesStar,
    No,
}

/// Server-side support derived from the key span: a command with at least one
/// key argument can be routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerSupport {
    Yes,
    No,
    /// The name has no row in the server table.
    Unknown,
}

/// Proxy side of a reconciled entry; `Unknown` when the proxy table has no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclaredSupport {
    Yes,
    #[serde(rename = "Yes*")]
    YesStar,
    No,
    Unknown,
}

impl ServerSupport {
    #[must_use]
    pub const fn from_first_key(first_key: i32) -> Self {
        if first_key == 0 { Self::No } else { Self::Yes }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Unknown => "Unknown",
        }
    }
}

impl DeclaredSupport {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::YesStar => "Yes*",
            Self::No => "No",
            Self::Unknown => "Unknown",
        }
    }
}

impl ProxySupport {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::YesStar => "Yes*",
            Self::No => "No",
        }
    }
}

impl From<ProxySupport> for DeclaredSupport {
    fn from(support: ProxySupport) -> Self {
        match support {
            ProxySupport::Yes => Self::Yes,
            ProxySupport::YesStar => Self::YesStar,
            ProxySupport::No => Self::No,
        }
    }
}

/// Cross-side comparison by label: `Yes*` never equals `Yes`, and `Unknown`
/// only equals `Unknown`.
impl PartialEq<DeclaredSupport> for ServerSupport {
    fn eq(&self, other: &DeclaredSupport) -> bool {
        self.label() == other.label()
    }
}

impl fmt::Display for ServerSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl fmt::Display for DeclaredSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl fmt::Display for ProxySupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One row of the proxy support table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyCommand {
    pub name: &'static str,
    pub support: ProxySupport,
    /// Maintainer annotation carried next to the row.
    pub note: Option<&'static str>,
}

impl ProxyCommand {
    #[must_use]
    pub const fn new(name: &'static str, support: ProxySupport) -> Self {
        Self {
            name,
            support,
            note: None,
        }
    }

    #[must_use]
    pub const fn noted(name: &'static str, support: ProxySupport, note: &'static str) -> Self {
        Self {
            name,
            support,
            note: Some(note),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_key_zero_means_no_support() {
        assert_eq!(ServerSupport::from_first_key(0), ServerSupport::No);
        assert_eq!(ServerSupport::from_first_key(1), ServerSupport::Yes);
        assert_eq!(ServerSupport::from_first_key(2), ServerSupport::Yes);
    }

    #[test]
    fn partial_support_differs_from_full_support() {
        assert!(ServerSupport::Yes == DeclaredSupport::Yes);
        assert!(ServerSupport::Yes != DeclaredSupport::YesStar);
        assert!(ServerSupport::No == DeclaredSupport::No);
        assert!(ServerSupport::Unknown != DeclaredSupport::No);
        assert!(ServerSupport::Yes != DeclaredSupport::Unknown);
    }

    #[test]
    fn proxy_support_converts_verbatim() {
        assert_eq!(DeclaredSupport::from(ProxySupport::Yes), DeclaredSupport::Yes);
        assert_eq!(
            DeclaredSupport::from(ProxySupport::YesStar),
            DeclaredSupport::YesStar
        );
        assert_eq!(DeclaredSupport::from(ProxySupport::No), DeclaredSupport::No);
    }

    #[test]
    fn serde_uses_table_spelling() {
        let json = serde_json::to_string(&DeclaredSupport::YesStar).expect("serialize");
        assert_eq!(json, "\"Yes*\"");
        let back: ProxySupport = serde_json::from_str("\"Yes*\"").expect("deserialize");
        assert_eq!(back, ProxySupport::YesStar);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(ProxySupport::YesStar.to_string(), "Yes*");
        assert_eq!(ServerSupport::Unknown.to_string(), "Unknown");
    }
}
