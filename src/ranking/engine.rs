use std::cmp::Ordering;

use serde::Serialize;

use super::metric::MetricKey;
use crate::domain::StatRecord;

/// One row of a leaderboard. `value` is `None` when the record has nothing
/// recorded for the metric; such rows always trail the ranked ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub value: Option<f64>,
    #[serde(flatten)]
    pub record: StatRecord,
}

/// Orders `records` by `metric`, highest first.
///
/// Records without a value for the metric are placed after every record
/// that has one. The sort is stable: equal values, and records without a
/// value, keep their input order. There is no secondary key, so callers
/// that need reproducible ties must supply records in a reproducible order.
///
/// An unknown metric is not an error; every record resolves to no value
/// and the input order is returned unchanged.
pub fn leaderboard(records: Vec<StatRecord>, metric: &str) -> Vec<LeaderboardEntry> {
    let key = MetricKey::lookup(metric);

    let mut resolved: Vec<(Option<f64>, StatRecord)> = records
        .into_iter()
        .map(|record| (key.and_then(|k| k.resolve(&record.line)), record))
        .collect();

    resolved.sort_by(|(a, _), (b, _)| compare_values(*a, *b));

    resolved
        .into_iter()
        .enumerate()
        .map(|(idx, (value, record))| LeaderboardEntry {
            rank: idx + 1,
            value,
            record,
        })
        .collect()
}

/// Same ordering as [`leaderboard`], without the resolved values.
pub fn rank(records: Vec<StatRecord>, metric: &str) -> Vec<StatRecord> {
    leaderboard(records, metric)
        .into_iter()
        .map(|entry| entry.record)
        .collect()
}

fn compare_values(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        // Descending; NaN never reaches here.
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
