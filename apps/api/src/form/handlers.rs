use axum::{extract::State, Json};
use serde::Serialize;

use crate::document::UpdateStatus;
use crate::errors::AppError;
use crate::form::view::{build_form_view, FormView};
use crate::form::FormEvent;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

#[derive(Serialize)]
pub struct FormEventResponse {
    pub status: UpdateStatus,
    pub form: FormView,
    pub document: ResumeDocument,
}

/// GET /api/v1/form
pub async fn handle_get_form(State(state): State<AppState>) -> Json<FormView> {
    let session = state.session.lock().await;
    Json(build_form_view(session.form(), session.document()))
}

/// POST /api/v1/form/events
/// A refused skill add or save answers 422; the editor keeps its draft.
pub async fn handle_form_event(
    State(state): State<AppState>,
    Json(event): Json<FormEvent>,
) -> Result<Json<FormEventResponse>, AppError> {
    let mut session = state.session.lock().await;
    let status = session.handle_form_event(event);
    if let UpdateStatus::Rejected(reason) = status {
        return Err(AppError::Rejected(reason));
    }
    Ok(Json(FormEventResponse {
        status,
        form: build_form_view(session.form(), session.document()),
        document: session.document().clone(),
    }))
}
