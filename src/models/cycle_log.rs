use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One recorded menstrual cycle. Rows are immutable once created; there is
/// no update or delete path anywhere in the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CycleLog {
    pub id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub mood: String,
    pub energy_level: String,
    pub symptoms: String,
    pub flow_intensity: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a cycle log. All category fields are free-form
/// strings; start_date <= end_date is expected but not enforced.
#[derive(Debug, Clone)]
pub struct NewCycleLog {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub mood: String,
    pub energy_level: String,
    pub symptoms: String,
    pub flow_intensity: String,
}
