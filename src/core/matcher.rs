//! Club-history overlap matching between two players.
//!
//! Pure functions only: no I/O, no shared state, safe to call from any thread.

use crate::domain::model::{OverlapRecord, TenureRecord};

/// Finds every pair of tenures (one per player) at the same club whose year
/// ranges overlap.
///
/// Iteration is outer over `history_a`, inner over `history_b`, both in the
/// given order; results are emitted in that order with no deduplication or
/// merging. A shared boundary year (one spell ends the year the other
/// begins) does not count as an overlap.
pub fn find_connections(
    history_a: &[TenureRecord],
    history_b: &[TenureRecord],
) -> Vec<OverlapRecord> {
    let mut connections = Vec::new();

    for a in history_a {
        for b in history_b {
            if a.club != b.club {
                continue;
            }

            let overlap_start = a.start_year.max(b.start_year);
            let overlap_end = a.end_year.min(b.end_year);

            if overlap_start < overlap_end {
                connections.push(OverlapRecord {
                    club: a.club.clone(),
                    overlap_start,
                    overlap_end,
                    player1_period: a.period(),
                    player2_period: b.period(),
                });
            }
        }
    }

    connections
}

/// Length of an overlap in years. Accepts any two integers; computed in
/// `i64` so extreme inputs cannot overflow.
pub fn overlap_years(overlap_start: i32, overlap_end: i32) -> i64 {
    i64::from(overlap_end) - i64::from(overlap_start)
}

/// 單筆重疊結果的顯示區塊
pub fn format_connection_result(connection: &OverlapRecord, player1: &str, player2: &str) -> String {
    let mut result = format!("{}\n", connection.club);
    result.push_str(&format!(
        "✓ Played together: {}-{}\n",
        connection.overlap_start, connection.overlap_end
    ));
    result.push_str(&format!("{} at club: {}\n", player1, connection.player1_period));
    result.push_str(&format!("{} at club: {}\n", player2, connection.player2_period));
    result
}
