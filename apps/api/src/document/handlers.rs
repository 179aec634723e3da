use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::{
    DocumentUpdate, EducationField, ExperienceField, SkillDraft, UpdateOutcome, UpdateStatus,
};
use crate::errors::AppError;
use crate::models::resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument, SkillEntry, SkillType,
};
use crate::state::AppState;

#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
    pub document: ResumeDocument,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub saved_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

/// Runs one update against the session. Rejections become 422; everything
/// else answers with the current document.
async fn run(state: &AppState, update: DocumentUpdate) -> Result<UpdateOutcome, AppError> {
    let outcome = state.session.lock().await.dispatch(update);
    match outcome.status {
        UpdateStatus::Rejected(reason) => Err(AppError::Rejected(reason)),
        _ => Ok(outcome),
    }
}

async fn run_for_document(
    state: &AppState,
    update: DocumentUpdate,
) -> Result<Json<ResumeDocument>, AppError> {
    Ok(Json(run(state, update).await?.document))
}

async fn run_for_created(
    state: &AppState,
    update: DocumentUpdate,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let outcome = run(state, update).await?;
    let id = outcome
        .created
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("insert produced no id")))?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            document: outcome.document,
        }),
    ))
}

fn parse_skill_type(raw: &str) -> Result<SkillType, AppError> {
    SkillType::parse(raw).ok_or_else(|| {
        AppError::Validation(format!(
            "unknown skill type '{raw}', expected '{}' or '{}'",
            SkillType::Technical.as_str(),
            SkillType::Soft.as_str()
        ))
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Whole document
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.session.lock().await.document().clone())
}

/// PUT /api/v1/resume/personal
pub async fn handle_set_personal(
    State(state): State<AppState>,
    Json(info): Json<PersonalInfo>,
) -> Result<Json<ResumeDocument>, AppError> {
    run_for_document(&state, DocumentUpdate::SetPersonalInfo { info }).await
}

/// POST /api/v1/resume/save
pub async fn handle_save(State(state): State<AppState>) -> Result<Json<SaveResponse>, AppError> {
    let snapshot = state.session.lock().await.document().clone();
    state.repository.save(&snapshot).await?;
    Ok(Json(SaveResponse {
        saved_at: Utc::now(),
    }))
}

/// POST /api/v1/resume/reset
/// Clears the session document. The saved copy is left in place.
pub async fn handle_reset(State(state): State<AppState>) -> Result<Json<ResumeDocument>, AppError> {
    run_for_document(&state, DocumentUpdate::Reset).await
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    run_for_created(
        &state,
        DocumentUpdate::AddExperience {
            template: ExperienceEntry::default(),
        },
    )
    .await
}

/// PATCH /api/v1/resume/experience/:id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<ExperienceField>,
) -> Result<Json<ResumeDocument>, AppError> {
    run_for_document(&state, DocumentUpdate::UpdateExperience { id, update }).await
}

/// DELETE /api/v1/resume/experience/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    run_for_document(&state, DocumentUpdate::RemoveExperience { id }).await
}

/// POST /api/v1/resume/experience/:id/toggle-current
pub async fn handle_toggle_experience_current(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    run_for_document(&state, DocumentUpdate::ToggleExperienceCurrent { id }).await
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/education
pub async fn handle_add_education(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    run_for_created(
        &state,
        DocumentUpdate::AddEducation {
            template: EducationEntry::default(),
        },
    )
    .await
}

/// PATCH /api/v1/resume/education/:id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<EducationField>,
) -> Result<Json<ResumeDocument>, AppError> {
    run_for_document(&state, DocumentUpdate::UpdateEducation { id, update }).await
}

/// DELETE /api/v1/resume/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    run_for_document(&state, DocumentUpdate::RemoveEducation { id }).await
}

/// POST /api/v1/resume/education/:id/toggle-current
pub async fn handle_toggle_education_current(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    run_for_document(&state, DocumentUpdate::ToggleEducationCurrent { id }).await
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(draft): Json<SkillDraft>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    run_for_created(&state, DocumentUpdate::AddSkill { draft }).await
}

/// PUT /api/v1/resume/skills/:id
pub async fn handle_update_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<SkillDraft>,
) -> Result<Json<ResumeDocument>, AppError> {
    let skill = SkillEntry {
        id,
        name: draft.name,
        level: draft.level,
        category: draft.category,
        skill_type: draft.skill_type,
    };
    run_for_document(&state, DocumentUpdate::UpdateSkill { skill }).await
}

/// DELETE /api/v1/resume/skills/:id
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    run_for_document(&state, DocumentUpdate::RemoveSkill { id }).await
}

/// POST /api/v1/resume/skill-categories/:type
pub async fn handle_add_skill_category(
    State(state): State<AppState>,
    Path(skill_type): Path<String>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    let skill_type = parse_skill_type(&skill_type)?;
    run_for_document(
        &state,
        DocumentUpdate::AddSkillCategory {
            skill_type,
            name: req.name,
        },
    )
    .await
}

/// DELETE /api/v1/resume/skill-categories/:type/:name
pub async fn handle_remove_skill_category(
    State(state): State<AppState>,
    Path((skill_type, name)): Path<(String, String)>,
) -> Result<Json<ResumeDocument>, AppError> {
    let skill_type = parse_skill_type(&skill_type)?;
    run_for_document(
        &state,
        DocumentUpdate::RemoveSkillCategory { skill_type, name },
    )
    .await
}
