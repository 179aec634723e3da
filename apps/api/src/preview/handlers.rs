use axum::{extract::State, response::Html, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::preview::ResumeView;
use crate::state::AppState;
use crate::theme::{PreviewColors, Theme, ThemeName};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSummary {
    pub name: ThemeName,
    pub label: String,
    pub preview_colors: PreviewColors,
}

#[derive(Serialize)]
pub struct ActiveThemeResponse {
    pub name: ThemeName,
    pub label: String,
    pub theme: &'static Theme,
}

impl ActiveThemeResponse {
    fn from_name(name: ThemeName) -> Self {
        Self {
            name,
            label: name.label(),
            theme: name.theme(),
        }
    }
}

#[derive(Deserialize)]
pub struct SetThemeRequest {
    pub name: String,
}

#[derive(Serialize)]
pub struct PreviewViewResponse {
    pub visible: bool,
    pub view: ResumeView,
}

#[derive(Serialize, Deserialize)]
pub struct VisibilityRequest {
    pub visible: bool,
}

/// GET /api/v1/themes
pub async fn handle_list_themes() -> Json<Vec<ThemeSummary>> {
    Json(
        ThemeName::ALL
            .into_iter()
            .map(|name| ThemeSummary {
                name,
                label: name.label(),
                preview_colors: name.theme().preview_colors(),
            })
            .collect(),
    )
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ActiveThemeResponse> {
    let name = state.session.lock().await.theme();
    Json(ActiveThemeResponse::from_name(name))
}

/// PUT /api/v1/theme
/// Unknown names select `modern`.
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Json(req): Json<SetThemeRequest>,
) -> Json<ActiveThemeResponse> {
    let name = ThemeName::from_name(&req.name);
    state.session.lock().await.set_theme(name);
    Json(ActiveThemeResponse::from_name(name))
}

/// GET /api/v1/preview
pub async fn handle_preview_html(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = state.session.lock().await.render()?;
    Ok(Html(html))
}

/// GET /api/v1/preview/view
pub async fn handle_preview_view(State(state): State<AppState>) -> Json<PreviewViewResponse> {
    let session = state.session.lock().await;
    Json(PreviewViewResponse {
        visible: session.preview_visible(),
        view: session.view(),
    })
}

/// PUT /api/v1/preview/visibility
pub async fn handle_set_visibility(
    State(state): State<AppState>,
    Json(req): Json<VisibilityRequest>,
) -> Json<VisibilityRequest> {
    state.session.lock().await.set_preview_visible(req.visible);
    Json(req)
}
