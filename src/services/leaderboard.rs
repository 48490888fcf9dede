use anyhow::Result;
use log::{debug, warn};

use crate::config::LeaderboardSettings;
use crate::database::StatsStore;
use crate::ranking::{self, LeaderboardEntry, MetricKey};

#[derive(Debug, Clone)]
pub struct LeaderboardQuery {
    pub sport: String,
    pub division: String,
    pub season: Option<String>,
    pub metric: String,
    pub limit: Option<usize>,
}

/// Fetches one sport/division partition from the store and ranks it.
pub struct LeaderboardService<'a> {
    store: &'a dyn StatsStore,
    settings: &'a LeaderboardSettings,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(store: &'a dyn StatsStore, settings: &'a LeaderboardSettings) -> Self {
        Self { store, settings }
    }

    pub fn build(&self, query: &LeaderboardQuery) -> Result<Vec<LeaderboardEntry>> {
        if MetricKey::lookup(&query.metric).is_none() {
            warn!(
                "Unknown leaderboard metric '{}', returning unranked records",
                query.metric
            );
        }

        let records = self.store.fetch_records(
            &query.sport,
            &query.division,
            query.season.as_deref(),
        )?;
        debug!(
            "Ranking {} records for {}/{} by {}",
            records.len(),
            query.sport,
            query.division,
            query.metric
        );

        let mut entries = ranking::leaderboard(records, &query.metric);
        if let Some(limit) = self.settings.effective_limit(query.limit) {
            entries.truncate(limit);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StatLine, StatRecord};
    use std::sync::Mutex;

    struct FakeStore {
        records: Vec<StatRecord>,
        calls: Mutex<Vec<(String, String, Option<String>)>>,
    }

    impl FakeStore {
        fn new(records: Vec<StatRecord>) -> Self {
            Self {
                records,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl StatsStore for FakeStore {
        fn fetch_records(
            &self,
            sport: &str,
            division: &str,
            season: Option<&str>,
        ) -> Result<Vec<StatRecord>> {
            self.calls.lock().unwrap().push((
                sport.to_string(),
                division.to_string(),
                season.map(str::to_string),
            ));
            Ok(self.records.clone())
        }
    }

    struct FailingStore;

    impl StatsStore for FailingStore {
        fn fetch_records(&self, _: &str, _: &str, _: Option<&str>) -> Result<Vec<StatRecord>> {
            Err(anyhow::anyhow!("store unavailable"))
        }
    }

    fn rusher(id: i64, yards: Option<i32>) -> StatRecord {
        StatRecord {
            id,
            player_name: format!("Back {id}"),
            team_name: "Miners".to_string(),
            school_name: "North Pocono".to_string(),
            sport: "football".to_string(),
            division: "3A".to_string(),
            season: "2024".to_string(),
            line: StatLine {
                rushing_yards: yards,
                ..Default::default()
            },
            created_at: None,
            updated_at: None,
        }
    }

    fn query(metric: &str, limit: Option<usize>) -> LeaderboardQuery {
        LeaderboardQuery {
            sport: "football".to_string(),
            division: "3A".to_string(),
            season: Some("2024".to_string()),
            metric: metric.to_string(),
            limit,
        }
    }

    #[test]
    fn test_build_ranks_and_passes_filters() {
        let store = FakeStore::new(vec![rusher(1, Some(640)), rusher(2, None), rusher(3, Some(1210))]);
        let settings = LeaderboardSettings::default();
        let service = LeaderboardService::new(&store, &settings);

        let entries = service.build(&query("rushing_yards", None)).unwrap();

        let ids: Vec<i64> = entries.iter().map(|e| e.record.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(
            store.calls.lock().unwrap().as_slice(),
            &[("football".to_string(), "3A".to_string(), Some("2024".to_string()))]
        );
    }

    #[test]
    fn test_build_truncates_to_limit() {
        let store = FakeStore::new((1..=5).map(|i| rusher(i, Some(i as i32 * 100))).collect());
        let settings = LeaderboardSettings::default();
        let service = LeaderboardService::new(&store, &settings);

        let entries = service.build(&query("rushing_yards", Some(2))).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].record.id, 5);
        assert_eq!(entries[1].record.id, 4);
    }

    #[test]
    fn test_build_without_limit_returns_whole_partition() {
        let store = FakeStore::new((1..=150).map(|i| rusher(i, Some(i as i32))).collect());
        let settings = LeaderboardSettings::default();
        let service = LeaderboardService::new(&store, &settings);

        let entries = service.build(&query("rushing_yards", None)).unwrap();

        assert_eq!(entries.len(), 150);
        assert_eq!(entries[0].record.id, 150);
        assert_eq!(entries[149].rank, 150);
    }

    #[test]
    fn test_unknown_metric_degrades() {
        let store = FakeStore::new(vec![rusher(1, Some(10)), rusher(2, Some(90))]);
        let settings = LeaderboardSettings::default();
        let service = LeaderboardService::new(&store, &settings);

        let entries = service.build(&query("foo_bar", None)).unwrap();

        let ids: Vec<i64> = entries.iter().map(|e| e.record.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(entries.iter().all(|e| e.value.is_none()));
    }

    #[test]
    fn test_store_errors_propagate() {
        let settings = LeaderboardSettings::default();
        let service = LeaderboardService::new(&FailingStore, &settings);

        assert!(service.build(&query("goals", None)).is_err());
    }
}
