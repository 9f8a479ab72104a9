//! Re-ranking of the league after excluding calls.

use std::collections::HashSet;

use super::types::{ProcessedRow, RawRow};


/// Calls to drop from the league before re-ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<String>);

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls are matched exactly as Club Log reports them.
    pub fn contains(&self, call: &str) -> bool {
        self.0.contains(call)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Drop excluded calls and close the rank gaps they leave.
///
/// A rank more than one ahead of the previous kept rank is pulled down to
/// `previous + 1`; any other rank, including ties, is kept as reported. The
/// previous rank starts at 1, so a leading rank of 2 is kept.
pub fn process_league(rows: &[RawRow], exclude: &ExclusionSet) -> Vec<ProcessedRow> {
    let mut last_rank: u32 = 1;

    rows.iter()
        .filter(|row| !exclude.contains(row.call()))
        .map(|row| {
            let rank = row.rank().min(last_rank.saturating_add(1));
            last_rank = rank;

            ProcessedRow {
                rank,
                call: row.call().to_string(),
                dxcc: row.dxcc(),
                slots: row.slots(),
                bands: *row.bands(),
            }
        })
        .collect()
}
