use axum::extract::multipart::Multipart;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use serde_json::Value;
use uuid::Uuid;

use crate::analysis::color::{self, ColorAnalysis};
use crate::analysis::text::{analyze_text as run_classifier, TextAnalysis};
use crate::dto::{self, AnalyzeTextRequest};
use crate::error::{AppError, AppResult};
use crate::models::analysis_log::{AnalysisKind, AnalysisLog, NewAnalysisLog};
use crate::AppState;

/// POST /api/analyze/text
pub async fn analyze_text(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<TextAnalysis>> {
    analyze_transcript(state, AnalysisKind::Text, body).await
}

/// POST /api/analyze/voice — transcribed speech, same pipeline as text.
pub async fn analyze_voice(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<TextAnalysis>> {
    analyze_transcript(state, AnalysisKind::Voice, body).await
}

async fn analyze_transcript(
    state: AppState,
    kind: AnalysisKind,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<TextAnalysis>> {
    let Json(body) = body.map_err(|e| AppError::invalid_body(e.body_text()))?;
    let request: AnalyzeTextRequest = dto::from_json(body)?;
    let text = request.validate()?;

    let result = run_classifier(&text);

    state
        .store
        .create_analysis_log(NewAnalysisLog {
            kind,
            input: text,
            result: serde_json::to_string(&result).map_err(anyhow::Error::from)?,
        })
        .await?;

    Ok(Json(result))
}

/// POST /api/analyze/image — multipart upload, field "image". The file is
/// written to the uploads directory, decoded for its dominant color, and
/// removed once the color is known.
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ColorAnalysis>> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| anyhow::anyhow!("multipart read failed: {e}"))?
    {
        if field.name() == Some("image") {
            upload = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| anyhow::anyhow!("multipart read failed: {e}"))?,
            );
            break;
        }
    }
    let bytes = upload.ok_or(AppError::MissingUpload)?;

    let path = state
        .config
        .uploads_dir
        .join(format!("{}.upload", Uuid::new_v4()));
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(anyhow::Error::from)?;

    let decode_path = path.clone();
    let (r, g, b) = tokio::task::spawn_blocking(move || -> anyhow::Result<(u8, u8, u8)> {
        let img = image::open(&decode_path)?;
        Ok(color::average_rgb(&img))
    })
    .await
    .map_err(anyhow::Error::from)??;

    let result = color::classify_color(r, g, b);

    // Uploads are single-use. Removal is best-effort; a decode failure
    // above returns early and leaves the file behind.
    if let Err(e) = tokio::fs::remove_file(&path).await {
        tracing::warn!(error = %e, path = %path.display(), "Failed to remove uploaded image");
    }

    state
        .store
        .create_analysis_log(NewAnalysisLog {
            kind: AnalysisKind::Image,
            input: "Uploaded Image".into(),
            result: serde_json::to_string(&result).map_err(anyhow::Error::from)?,
        })
        .await?;

    Ok(Json(result))
}

/// GET /api/history — every analysis ever run, newest first.
pub async fn history(State(state): State<AppState>) -> AppResult<Json<Vec<AnalysisLog>>> {
    let logs = state.store.analysis_logs().await?;
    Ok(Json(logs))
}
