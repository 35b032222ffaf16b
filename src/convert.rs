use serde::{Deserialize, Serialize};
use tracing::warn;

/// One row of the ranked-names CSV, after unknown columns are dropped.
/// Missing cells are kept as `None` rather than rejected at load time.
#[derive(Debug, Clone)]
pub struct NameRow {
    pub rank: Option<String>,
    pub name: Option<String>,
}

/// Final record written to the JSON output. Field order here is the wire
/// order: id, name, origin, meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub id: u32,
    pub name: String,
    pub origin: String,
    pub meaning: String,
}

/// Sort key assigned to rows whose `rank` column is absent or not an
/// integer. Sorts after every valid rank, so malformed rows land at the back
/// of the candidate list instead of aborting the run.
pub const SENTINEL_RANK: u32 = u32::MAX;

/// Resolve a row's sort key: the parsed `rank`, or [`SENTINEL_RANK`] when
/// the column is missing, blank, or unparseable.
pub fn resolve_rank(row: &NameRow) -> u32 {
    match row.rank.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw.parse().unwrap_or_else(|_| {
            warn!(rank = raw, "unparseable rank, sorting row to the end");
            SENTINEL_RANK
        }),
        _ => SENTINEL_RANK,
    }
}

/// Order rows by resolved rank ascending, keep at most `max` candidates,
/// then drop candidates whose trimmed name is empty while assigning
/// contiguous 1-based ids.
///
/// The sort is stable, so rows sharing a rank (including all sentinel rows)
/// keep their input order. The cap applies to the candidate count before
/// name filtering, so the result may hold fewer than `max` records.
pub fn convert(mut rows: Vec<NameRow>, max: usize) -> Vec<NameRecord> {
    rows.sort_by_key(resolve_rank);
    rows.truncate(max);

    let mut records = Vec::with_capacity(rows.len());
    for row in &rows {
        let name = row.name.as_deref().map(str::trim).unwrap_or("");
        if name.is_empty() {
            warn!("skipping candidate row with empty name");
            continue;
        }
        records.push(NameRecord {
            id: records.len() as u32 + 1,
            name: name.to_string(),
            origin: String::new(),
            meaning: String::new(),
        });
    }
    records
}
