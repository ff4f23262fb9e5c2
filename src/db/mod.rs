//! Databases for a run.
//!
//! - The [headline](headline) stores per-coordinate metadata.
//! - The [group database](group) stores the named example matrices.
//!
//! Both are built while loading input and read-only afterwards, which is what permits lock-free sharing across workers.

pub mod group;
pub mod headline;
