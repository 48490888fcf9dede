use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::StatLine;

/// Read-only view of one rankable column.
pub type Accessor = fn(&StatLine) -> Option<f64>;

/// A recognised metric name paired with the column it reads.
#[derive(Debug, Clone, Copy)]
pub struct MetricKey {
    name: &'static str,
    accessor: Accessor,
}

macro_rules! integer_metrics {
    ($( $column:ident ),* $(,)?) => {
        vec![$(
            MetricKey {
                name: stringify!($column),
                accessor: |line: &StatLine| line.$column.map(f64::from),
            }
        ),*]
    };
}

struct MetricTable {
    ordered: Vec<MetricKey>,
    by_name: HashMap<&'static str, MetricKey>,
}

static METRICS: LazyLock<MetricTable> = LazyLock::new(|| {
    let ordered = integer_metrics![
        passing_yards,
        rushing_yards,
        receiving_yards,
        points,
        rebounds,
        assists,
        goals,
        hits,
        runs,
        rbis,
        home_runs,
        stolen_bases,
        tackles,
        interceptions,
        sacks,
        steals,
        blocks,
        saves,
        shutouts,
        strikeouts,
        wins,
        losses,
    ];
    let by_name = ordered.iter().map(|key| (key.name, *key)).collect();
    MetricTable { ordered, by_name }
});

impl MetricKey {
    /// Resolves user input such as `"Passing-Yards"` to a catalogue entry.
    pub fn lookup(raw: &str) -> Option<MetricKey> {
        METRICS.by_name.get(normalize(raw).as_str()).copied()
    }

    pub fn catalogue() -> impl Iterator<Item = &'static str> {
        METRICS.ordered.iter().map(|key| key.name)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// NaN is treated like a missing value so that ordering stays total.
    pub fn resolve(&self, line: &StatLine) -> Option<f64> {
        (self.accessor)(line).filter(|value| !value.is_nan())
    }
}

pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['-', ' '], "_")
}
