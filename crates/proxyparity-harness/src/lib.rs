//! Consistency gate between the server command table and the proxy's
//! declared support list.
//!
//! [`reconcile`](reconcile::reconcile) merges the tables by name,
//! [`checks`] holds the four checks, and [`report`] runs them in order and
//! renders the result.

pub mod checks;
pub mod log;
pub mod reconcile;
pub mod report;
