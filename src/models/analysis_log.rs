use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "analysis_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Text,
    Voice,
    Image,
}

/// A persisted analysis request and its computed result. Append-only; the
/// `result` column holds the response bundle serialized as a JSON string.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisLog {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: AnalysisKind,
    pub input: String,
    pub result: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAnalysisLog {
    pub kind: AnalysisKind,
    pub input: String,
    pub result: String,
}
