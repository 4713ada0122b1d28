use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::path::{Path as FsPath, PathBuf};
use uuid::Uuid;

use crate::analysis::ats::{self, AtsResult};
use crate::analysis::projection::{self, CareerProjection};
use crate::analysis::skill_gap::{self, SkillGapResult};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(default = "default_experience")]
    pub experience: String,
}

fn default_experience() -> String {
    "Student".to_string()
}

#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    /// Correlation id for fetching this result later via the result endpoint.
    pub result_id: Uuid,
    #[serde(flatten)]
    pub projection: CareerProjection,
}

/// POST /api/v1/career/projection
pub async fn handle_projection(
    State(state): State<AppState>,
    Json(req): Json<ProjectionRequest>,
) -> Result<Json<ProjectionResponse>, AppError> {
    let projection = projection::project(&req.experience);
    let result_id = state.projections.insert(projection.clone()).await;
    tracing::debug!(%result_id, experience = %req.experience, "career projection stored");
    Ok(Json(ProjectionResponse {
        result_id,
        projection,
    }))
}

/// GET /api/v1/career/result/:id
pub async fn handle_projection_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CareerProjection>, AppError> {
    state
        .projections
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Result {id} not found or expired")))
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub target_role: String,
}

/// POST /api/v1/skill-gap
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(req): Json<SkillGapRequest>,
) -> Result<Json<SkillGapResult>, AppError> {
    Ok(Json(skill_gap::analyze(
        &req.skills,
        &req.target_role,
        &state.catalog,
    )))
}

/// POST /api/v1/resume/analysis
///
/// Multipart form with a `resume_file` part (filename + bytes) and a `role`
/// text part. The upload is persisted under the configured upload directory,
/// its text extracted, and the ATS score computed. An extraction failure is
/// logged and scored as an unreadable resume rather than surfaced as an
/// error, so the client always gets a well-formed result.
pub async fn handle_resume_analysis(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AtsResult>, AppError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;
    let mut role = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        match field.name() {
            Some("resume_file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                upload = Some((file_name, data));
            }
            Some("role") => {
                role = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read role field: {e}")))?;
            }
            _ => {}
        }
    }

    let (file_name, data) = upload.ok_or_else(|| AppError::Validation("No resume uploaded".to_string()))?;
    if file_name.is_empty() {
        return Err(AppError::Validation("No resume uploaded".to_string()));
    }

    let path = state.config.upload_dir.join(sanitize_file_name(&file_name));
    tokio::fs::write(&path, &data)
        .await
        .map_err(anyhow::Error::from)?;

    let resume_text = match state.extractor.extract(&path).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                file = %path.display(),
                error = %e,
                "resume text extraction failed; scoring as unreadable"
            );
            String::new()
        }
    };

    Ok(Json(ats::score(&resume_text, &role, &state.catalog)))
}

/// Strips any directory components from a client-supplied filename, so the
/// upload can only land inside the upload directory.
fn sanitize_file_name(file_name: &str) -> PathBuf {
    FsPath::new(file_name)
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("upload"))
}
