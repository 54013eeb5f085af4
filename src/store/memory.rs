use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;

use crate::models::analysis_log::{AnalysisLog, NewAnalysisLog};
use crate::models::cycle_log::{CycleLog, NewCycleLog};

use super::Store;

/// In-memory fake with the same ordering guarantees as `PgStore`.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    cycle_logs: Vec<CycleLog>,
    analysis_logs: Vec<AnalysisLog>,
    next_cycle_id: i32,
    next_analysis_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn create_cycle_log(&self, log: NewCycleLog) -> Result<CycleLog> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner.next_cycle_id += 1;
        let created = CycleLog {
            id: inner.next_cycle_id,
            start_date: log.start_date,
            end_date: log.end_date,
            mood: log.mood,
            energy_level: log.energy_level,
            symptoms: log.symptoms,
            flow_intensity: log.flow_intensity,
            created_at: Utc::now(),
        };
        inner.cycle_logs.push(created.clone());
        Ok(created)
    }

    async fn cycle_logs(&self) -> Result<Vec<CycleLog>> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        let mut logs = inner.cycle_logs.clone();
        logs.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));
        Ok(logs)
    }

    async fn create_analysis_log(&self, log: NewAnalysisLog) -> Result<AnalysisLog> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner.next_analysis_id += 1;
        let created = AnalysisLog {
            id: inner.next_analysis_id,
            kind: log.kind,
            input: log.input,
            result: log.result,
            created_at: Utc::now(),
        };
        inner.analysis_logs.push(created.clone());
        Ok(created)
    }

    async fn analysis_logs(&self) -> Result<Vec<AnalysisLog>> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        let mut logs = inner.analysis_logs.clone();
        // Insertion id breaks ties when two logs land in the same instant.
        logs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(logs)
    }
}
