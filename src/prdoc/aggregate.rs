//! Aggregate queries over validated records
//!
//! Pure functions: the max-bump fold is commutative and associative, so the
//! result is identical for any input order, and the BTreeMap output keeps
//! crate names sorted for stable rendering.

use crate::prdoc::schema::{Audience, BumpLevel, ChangeRecord, DocEntry};
use std::collections::BTreeMap;

/// Resolve each crate mentioned by any record to the maximum bump observed
///
/// Independently versioned crates sharing a release train take the strongest
/// obligation: major > minor > patch.
pub fn aggregate_bumps<'a>(records: impl IntoIterator<Item = &'a ChangeRecord>) -> BTreeMap<String, BumpLevel> {
  let mut bumps: BTreeMap<String, BumpLevel> = BTreeMap::new();

  for record in records {
    for crate_bump in &record.crates {
      bumps
        .entry(crate_bump.name.clone())
        .and_modify(|level| *level = (*level).max(crate_bump.bump))
        .or_insert(crate_bump.bump);
    }
  }

  bumps
}

/// Collect doc entries addressed to the given audience
///
/// Ordering preserves record order first, then entry order within a record.
pub fn by_audience<'a>(
  records: impl IntoIterator<Item = &'a ChangeRecord>,
  audience: Audience,
) -> Vec<&'a DocEntry> {
  records
    .into_iter()
    .flat_map(|record| record.doc.iter())
    .filter(|entry| entry.addresses(audience))
    .collect()
}
