use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::models::analysis_log::{AnalysisLog, NewAnalysisLog};
use crate::models::cycle_log::{CycleLog, NewCycleLog};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence seam for the two entity kinds. Both are append-only; there
/// are no update or delete operations. `PgStore` is the real thing,
/// `MemoryStore` backs the handler tests.
#[async_trait]
pub trait Store: Send + Sync {
    async fn ping(&self) -> Result<()>;

    async fn create_cycle_log(&self, log: NewCycleLog) -> Result<CycleLog>;

    /// All cycle logs, ordered by start date descending.
    async fn cycle_logs(&self) -> Result<Vec<CycleLog>>;

    async fn create_analysis_log(&self, log: NewAnalysisLog) -> Result<AnalysisLog>;

    /// All analysis logs, ordered by creation time descending.
    async fn analysis_logs(&self) -> Result<Vec<AnalysisLog>>;
}

/// Populates three demo cycle logs when the table is empty, so a fresh
/// install renders a non-empty dashboard.
pub async fn seed_if_empty(store: &dyn Store) -> Result<()> {
    if !store.cycle_logs().await?.is_empty() {
        return Ok(());
    }

    let today = Utc::now();
    let last_month = today - Duration::days(28);
    let two_months_ago = today - Duration::days(56);

    store
        .create_cycle_log(NewCycleLog {
            start_date: two_months_ago - Duration::days(5),
            end_date: two_months_ago,
            mood: "Happy".into(),
            energy_level: "High".into(),
            symptoms: "None".into(),
            flow_intensity: "Medium".into(),
        })
        .await?;

    store
        .create_cycle_log(NewCycleLog {
            start_date: last_month - Duration::days(4),
            end_date: last_month,
            mood: "Anxious".into(),
            energy_level: "Low".into(),
            symptoms: "Cramps".into(),
            flow_intensity: "Heavy".into(),
        })
        .await?;

    store
        .create_cycle_log(NewCycleLog {
            start_date: today - Duration::days(3),
            end_date: today,
            mood: "Calm".into(),
            energy_level: "Medium".into(),
            symptoms: "Headache".into(),
            flow_intensity: "Light".into(),
        })
        .await?;

    tracing::info!("Seeded demo cycle logs");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_populates_empty_store_once() {
        let store = MemoryStore::new();
        seed_if_empty(&store).await.unwrap();
        assert_eq!(store.cycle_logs().await.unwrap().len(), 3);

        // A second run must not duplicate the seed rows.
        seed_if_empty(&store).await.unwrap();
        assert_eq!(store.cycle_logs().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn seeded_logs_come_back_newest_first() {
        let store = MemoryStore::new();
        seed_if_empty(&store).await.unwrap();

        let logs = store.cycle_logs().await.unwrap();
        assert!(logs[0].start_date > logs[1].start_date);
        assert!(logs[1].start_date > logs[2].start_date);
    }
}
