use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::analysis_log::{AnalysisLog, NewAnalysisLog};
use crate::models::cycle_log::{CycleLog, NewCycleLog};

use super::Store;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    async fn create_cycle_log(&self, log: NewCycleLog) -> Result<CycleLog> {
        let created = sqlx::query_as::<_, CycleLog>(
            r#"
            INSERT INTO cycle_logs (start_date, end_date, mood, energy_level, symptoms, flow_intensity)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(log.start_date)
        .bind(log.end_date)
        .bind(&log.mood)
        .bind(&log.energy_level)
        .bind(&log.symptoms)
        .bind(&log.flow_intensity)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn cycle_logs(&self) -> Result<Vec<CycleLog>> {
        let logs = sqlx::query_as::<_, CycleLog>(
            "SELECT * FROM cycle_logs ORDER BY start_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    async fn create_analysis_log(&self, log: NewAnalysisLog) -> Result<AnalysisLog> {
        let created = sqlx::query_as::<_, AnalysisLog>(
            r#"
            INSERT INTO analysis_logs (kind, input, result)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(log.kind)
        .bind(&log.input)
        .bind(&log.result)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn analysis_logs(&self) -> Result<Vec<AnalysisLog>> {
        let logs = sqlx::query_as::<_, AnalysisLog>(
            "SELECT * FROM analysis_logs ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }
}
