//! The four checks run over a reconciled mapping.
//!
//! [`full_diff`] and [`claimed_without_keys`] are diagnostic and only return
//! rows. [`enforce_single_key_shape`] and [`survey_key_counts`] also guard
//! invariants the proxy's forwarding relies on and return
//! [`InvariantViolation`] when a table edit breaks one.

use std::collections::BTreeMap;

use proxyparity_error::{InvariantViolation, ParityError, Result};
use proxyparity_types::tables::review_note;
use proxyparity_types::{DeclaredSupport, ServerCommand, ServerSupport};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::reconcile::{ReconciledEntry, ReconciledMap};

/// Proxy-supported commands that legitimately take a list of keys; the proxy
/// splits them per key instead of hashing argument 1.
pub const MULTI_KEY_EXEMPT: [&str; 2] = ["DEL", "MGET"];

/// A reconciled name together with its support pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRow {
    pub name: String,
    pub server: ServerSupport,
    pub proxy: DeclaredSupport,
}

impl DiffRow {
    fn new(name: &str, entry: ReconciledEntry) -> Self {
        Self {
            name: name.to_owned(),
            server: entry.server,
            proxy: entry.proxy,
        }
    }
}

/// A server command whose last key is neither 0 nor 1, listed for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyRow {
    pub name: String,
    pub arity: i32,
    pub flags: String,
    pub first_key: i32,
    pub last_key: i32,
    pub key_step: i32,
    pub server: ServerSupport,
    pub proxy: DeclaredSupport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Every name whose two sides differ, in name order.
#[must_use]
pub fn full_diff(reconciled: &ReconciledMap) -> Vec<DiffRow> {
    let rows: Vec<DiffRow> = reconciled
        .iter()
        .filter(|(_, entry)| entry.differs())
        .map(|(name, entry)| DiffRow::new(name, *entry))
        .collect();
    for row in &rows {
        debug!(command = %row.name, server = %row.server, proxy = %row.proxy, "tables disagree");
    }
    info!(diff_count = rows.len(), "full diff computed");
    rows
}

/// Names the proxy fully supports while the server side is not `Yes`.
#[must_use]
pub fn claimed_without_keys(reconciled: &ReconciledMap) -> Vec<DiffRow> {
    let rows: Vec<DiffRow> = reconciled
        .iter()
        .filter(|(_, entry)| {
            entry.proxy == DeclaredSupport::Yes && entry.server != ServerSupport::Yes
        })
        .map(|(name, entry)| DiffRow::new(name, *entry))
        .collect();
    for row in &rows {
        warn!(command = %row.name, server = %row.server, "proxy claims support for a command without keys");
    }
    info!(anomaly_count = rows.len(), "claimed-support check computed");
    rows
}

/// Require every fully supported proxy command outside [`MULTI_KEY_EXEMPT`]
/// to be single-key at argument 1 in the server table.
///
/// Returns the names that were checked, in name order.
pub fn enforce_single_key_shape(
    server: &[ServerCommand],
    reconciled: &ReconciledMap,
) -> Result<Vec<String>> {
    let by_name = index_by_name(server);
    let mut checked = Vec::new();

    for (name, entry) in reconciled {
        if entry.proxy != DeclaredSupport::Yes || MULTI_KEY_EXEMPT.contains(&name.as_str()) {
            continue;
        }

        let Some(command) = by_name.get(name.as_str()) else {
            return Err(violation(InvariantViolation::MissingServerEntry { name: name.clone() }));
        };
        if !command.is_single_key() {
            return Err(violation(InvariantViolation::ProxyKeyShape {
                name: name.clone(),
                first_key: command.first_key,
                last_key: command.last_key,
            }));
        }
        checked.push(name.clone());
    }

    info!(checked_count = checked.len(), "single-key shape holds");
    Ok(checked)
}

/// Check the key-span implications of every server row and list the rows
/// whose last key is neither 0 nor 1, in table order.
pub fn survey_key_counts(
    server: &[ServerCommand],
    reconciled: &ReconciledMap,
) -> Result<Vec<SurveyRow>> {
    let mut rows = Vec::new();
    survey_key_counts_into(server, reconciled, &mut rows)?;
    Ok(rows)
}

/// Like [`survey_key_counts`], but pushes rows into `rows` as it walks the
/// table. On a violation, `rows` keeps everything surveyed before the
/// offending command.
pub fn survey_key_counts_into(
    server: &[ServerCommand],
    reconciled: &ReconciledMap,
    rows: &mut Vec<SurveyRow>,
) -> Result<()> {
    for command in server {
        check_key_span(command)?;
        if command.last_key == 0 || command.last_key == 1 {
            continue;
        }

        let entry = reconciled.get(command.name).copied().unwrap_or_default();
        debug!(
            command = command.name,
            last_key = command.last_key,
            "multi-key command surveyed"
        );
        rows.push(SurveyRow {
            name: command.name.to_owned(),
            arity: command.arity,
            flags: command.flags.to_owned(),
            first_key: command.first_key,
            last_key: command.last_key,
            key_step: command.key_step,
            server: entry.server,
            proxy: entry.proxy,
            note: review_note(command.name).map(str::to_owned),
        });
    }

    info!(survey_count = rows.len(), "key-count survey computed");
    Ok(())
}

fn check_key_span(command: &ServerCommand) -> Result<()> {
    let name = || command.name.to_owned();
    if command.first_key == 0 && command.last_key != 0 {
        return Err(violation(InvariantViolation::KeylessCommandHasLastKey {
            name: name(),
            last_key: command.last_key,
        }));
    }
    if command.last_key == 0 && command.first_key != 0 {
        return Err(violation(InvariantViolation::LastKeyWithoutFirstKey {
            name: name(),
            first_key: command.first_key,
        }));
    }
    if command.last_key == 1 && command.first_key != 1 {
        return Err(violation(InvariantViolation::SingleKeyNotFirst {
            name: name(),
            first_key: command.first_key,
        }));
    }
    Ok(())
}

/// Lookup for the shape check. A duplicated name resolves to its first row,
/// unlike [`reconcile`](crate::reconcile::reconcile) where the last row wins.
fn index_by_name(server: &[ServerCommand]) -> BTreeMap<&str, &ServerCommand> {
    let mut by_name = BTreeMap::new();
    for command in server {
        by_name.entry(command.name).or_insert(command);
    }
    by_name
}

fn violation(violation: InvariantViolation) -> ParityError {
    error!(
        kind = violation.kind(),
        command = violation.command(),
        "command table invariant violated"
    );
    ParityError::Invariant(violation)
}
