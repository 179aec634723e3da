pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::document::handlers as resume;
use crate::export::handlers as export;
use crate::form::handlers as form;
use crate::preview::handlers as preview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document
        .route("/api/v1/resume", get(resume::handle_get_resume))
        .route("/api/v1/resume/personal", put(resume::handle_set_personal))
        .route("/api/v1/resume/save", post(resume::handle_save))
        .route("/api/v1/resume/reset", post(resume::handle_reset))
        .route(
            "/api/v1/resume/experience",
            post(resume::handle_add_experience),
        )
        .route(
            "/api/v1/resume/experience/:id",
            patch(resume::handle_update_experience).delete(resume::handle_remove_experience),
        )
        .route(
            "/api/v1/resume/experience/:id/toggle-current",
            post(resume::handle_toggle_experience_current),
        )
        .route(
            "/api/v1/resume/education",
            post(resume::handle_add_education),
        )
        .route(
            "/api/v1/resume/education/:id",
            patch(resume::handle_update_education).delete(resume::handle_remove_education),
        )
        .route(
            "/api/v1/resume/education/:id/toggle-current",
            post(resume::handle_toggle_education_current),
        )
        .route("/api/v1/resume/skills", post(resume::handle_add_skill))
        .route(
            "/api/v1/resume/skills/:id",
            put(resume::handle_update_skill).delete(resume::handle_remove_skill),
        )
        .route(
            "/api/v1/resume/skill-categories/:type",
            post(resume::handle_add_skill_category),
        )
        .route(
            "/api/v1/resume/skill-categories/:type/:name",
            delete(resume::handle_remove_skill_category),
        )
        // Themes and preview
        .route("/api/v1/themes", get(preview::handle_list_themes))
        .route(
            "/api/v1/theme",
            get(preview::handle_get_theme).put(preview::handle_set_theme),
        )
        .route("/api/v1/preview", get(preview::handle_preview_html))
        .route("/api/v1/preview/view", get(preview::handle_preview_view))
        .route(
            "/api/v1/preview/visibility",
            put(preview::handle_set_visibility),
        )
        // Export
        .route("/api/v1/export", post(export::handle_export))
        // Editor
        .route("/api/v1/form", get(form::handle_get_form))
        .route("/api/v1/form/events", post(form::handle_form_event))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::export::{ExportError, Exporter, PageFormat, PdfRenderer};
    use crate::models::resume::ResumeDocument;
    use crate::session::Session;
    use crate::storage::{MemoryStore, ResumeRepository};
    use crate::theme::ThemeName;

    struct StaticPdf;

    #[async_trait]
    impl PdfRenderer for StaticPdf {
        async fn render(&self, html: &str, _page: PageFormat) -> Result<Vec<u8>, ExportError> {
            Ok(format!("%PDF-1.7\n{}", html.len()).into_bytes())
        }

        fn name(&self) -> &'static str {
            "static"
        }
    }

    fn test_state() -> AppState {
        AppState::new(
            Session::new(ResumeDocument::default(), ThemeName::Modern),
            ResumeRepository::new(Arc::new(MemoryStore::default())),
            Exporter::new(Arc::new(StaticPdf), Duration::from_secs(5)),
        )
    }

    async fn send(
        state: &AppState,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, bytes) = send_raw(state, method, uri, body).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn send_raw(
        state: &AppState,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = build_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let state = test_state();
        let (status, body) = send(&state, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_experience_lifecycle() {
        let state = test_state();
        let (status, created) =
            send(&state, Method::POST, "/api/v1/resume/experience", None).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["document"]["experience"][0]["achievements"], json!([""]));

        let (status, doc) = send(
            &state,
            Method::PATCH,
            &format!("/api/v1/resume/experience/{id}"),
            Some(json!({ "field": "position", "value": "Engineer" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["experience"][0]["position"], "Engineer");

        let (_, doc) = send(
            &state,
            Method::POST,
            &format!("/api/v1/resume/experience/{id}/toggle-current"),
            None,
        )
        .await;
        assert_eq!(doc["experience"][0]["current"], true);

        let (status, doc) = send(
            &state,
            Method::DELETE,
            &format!("/api/v1/resume/experience/{id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["experience"], json!([]));
    }

    #[tokio::test]
    async fn test_document_routes_keep_editor_in_step() {
        let state = test_state();
        send(&state, Method::POST, "/api/v1/resume/education", None).await;
        let (_, created) = send(&state, Method::POST, "/api/v1/resume/education", None).await;
        let (_, form) = send(&state, Method::GET, "/api/v1/form", None).await;
        assert_eq!(form["education"][0]["expanded"], false);
        assert_eq!(form["education"][1]["expanded"], true);

        let id = created["id"].as_str().unwrap().to_string();
        send(
            &state,
            Method::DELETE,
            &format!("/api/v1/resume/education/{id}"),
            None,
        )
        .await;
        let (_, form) = send(&state, Method::GET, "/api/v1/form", None).await;
        assert_eq!(form["education"].as_array().unwrap().len(), 1);
        assert_eq!(form["education"][0]["expanded"], false);
    }

    #[tokio::test]
    async fn test_unknown_id_is_silent_no_op() {
        let state = test_state();
        let before = state.session.lock().await.document().clone();
        let (status, doc) = send(
            &state,
            Method::DELETE,
            &format!("/api/v1/resume/education/{}", uuid::Uuid::new_v4()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc, serde_json::to_value(&before).unwrap());
    }

    #[tokio::test]
    async fn test_rejected_skill_is_422_and_document_unchanged() {
        let state = test_state();
        let (status, body) = send(
            &state,
            Method::POST,
            "/api/v1/resume/skills",
            Some(json!({ "name": "Rust", "level": 4, "category": "", "type": "technical" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "REJECTED");
        assert!(state.session.lock().await.document().skills.is_empty());
    }

    #[tokio::test]
    async fn test_skill_level_is_clamped_over_http() {
        let state = test_state();
        let (status, created) = send(
            &state,
            Method::POST,
            "/api/v1/resume/skills",
            Some(json!({
                "name": "Rust",
                "level": 9,
                "category": "Programming Languages",
                "type": "technical"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["document"]["skills"][0]["level"], 5);
    }

    #[tokio::test]
    async fn test_unknown_skill_type_is_bad_request() {
        let state = test_state();
        let (status, body) = send(
            &state,
            Method::POST,
            "/api/v1/resume/skill-categories/hard",
            Some(json!({ "name": "Welding" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("'technical' or 'soft'"));
    }

    #[tokio::test]
    async fn test_remove_category_over_http() {
        let state = test_state();
        let (status, doc) = send(
            &state,
            Method::DELETE,
            "/api/v1/resume/skill-categories/soft/Leadership",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(!doc["skillCategories"]["soft"]
            .as_array()
            .unwrap()
            .contains(&json!("Leadership")));
    }

    #[tokio::test]
    async fn test_save_writes_repository() {
        let state = test_state();
        send(
            &state,
            Method::PUT,
            "/api/v1/resume/personal",
            Some(json!({ "fullName": "Ada Lovelace" })),
        )
        .await;
        let (status, body) = send(&state, Method::POST, "/api/v1/resume/save", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["savedAt"].is_string());

        let restored = state.repository.load().await.unwrap();
        assert_eq!(restored.personal_info.full_name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_theme_switch_and_fallback() {
        let state = test_state();
        let (_, themes) = send(&state, Method::GET, "/api/v1/themes", None).await;
        assert_eq!(themes.as_array().unwrap().len(), 5);

        let (_, body) = send(
            &state,
            Method::PUT,
            "/api/v1/theme",
            Some(json!({ "name": "creative" })),
        )
        .await;
        assert_eq!(body["name"], "creative");
        let (status, html) = send_raw(&state, Method::GET, "/api/v1/preview", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(html).unwrap().contains("#9333ea"));

        let (_, body) = send(
            &state,
            Method::PUT,
            "/api/v1/theme",
            Some(json!({ "name": "neon" })),
        )
        .await;
        assert_eq!(body["name"], "modern");
    }

    #[tokio::test]
    async fn test_export_returns_named_pdf() {
        let state = test_state();
        send(
            &state,
            Method::PUT,
            "/api/v1/resume/personal",
            Some(json!({ "fullName": "Ada Lovelace" })),
        )
        .await;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/export")
            .body(Body::empty())
            .unwrap();
        let response = build_router(state.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Ada_Lovelace.pdf\"; filename*=UTF-8''Ada_Lovelace.pdf"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_export_keeps_accented_name() {
        let state = test_state();
        send(
            &state,
            Method::PUT,
            "/api/v1/resume/personal",
            Some(json!({ "fullName": "José Müller" })),
        )
        .await;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/export")
            .body(Body::empty())
            .unwrap();
        let response = build_router(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("filename=\"Jos_M_ller.pdf\""));
        assert!(disposition.ends_with("filename*=UTF-8''Jos%C3%A9_M%C3%BCller.pdf"));
    }

    #[tokio::test]
    async fn test_export_with_hidden_preview_is_conflict() {
        let state = test_state();
        let (status, _) = send(
            &state,
            Method::PUT,
            "/api/v1/preview/visibility",
            Some(json!({ "visible": false })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&state, Method::POST, "/api/v1/export", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "EXPORT_FAILED");
    }

    #[tokio::test]
    async fn test_form_events_drive_document() {
        let state = test_state();
        let (status, body) = send(
            &state,
            Method::POST,
            "/api/v1/form/events",
            Some(json!({ "event": "add_entry", "kind": "education" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"]["status"], "changed");
        assert_eq!(body["form"]["education"][0]["title"], "New Education Entry");
        assert_eq!(body["form"]["education"][0]["expanded"], true);

        let (status, _) = send(
            &state,
            Method::POST,
            "/api/v1/form/events",
            Some(json!({ "event": "set_new_skill_name", "name": "Rust" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(
            &state,
            Method::POST,
            "/api/v1/form/events",
            Some(json!({ "event": "add_skill" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, form) = send(&state, Method::GET, "/api/v1/form", None).await;
        assert_eq!(form["skills"]["new_skill"]["name"], "Rust");
    }
}
