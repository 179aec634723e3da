//! The single editing session: document, selected theme, editor state and
//! preview visibility. `AppState` holds one behind a mutex so every write
//! goes through [`Session::dispatch`] one at a time.

use tracing::{debug, info};

use crate::document::{apply, DocumentUpdate, UpdateOutcome, UpdateStatus};
use crate::errors::AppError;
use crate::form::{FollowUp, FormController, FormEvent};
use crate::models::resume::ResumeDocument;
use crate::preview::{build_view, render_html, RenderedSurface, ResumeView};
use crate::theme::ThemeName;

#[derive(Debug, Clone)]
pub struct Session {
    document: ResumeDocument,
    theme: ThemeName,
    form: FormController,
    preview_visible: bool,
}

impl Session {
    pub fn new(document: ResumeDocument, theme: ThemeName) -> Self {
        Self {
            document,
            theme,
            form: FormController::default(),
            preview_visible: true,
        }
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn preview_visible(&self) -> bool {
        self.preview_visible
    }

    /// Swaps the theme. The document is not touched.
    pub fn set_theme(&mut self, theme: ThemeName) {
        if theme != self.theme {
            info!("Theme changed: {} -> {}", self.theme.as_str(), theme.as_str());
        }
        self.theme = theme;
    }

    pub fn set_preview_visible(&mut self, visible: bool) {
        self.preview_visible = visible;
    }

    /// Applies one update, keeps the resulting document and brings the editor
    /// state in line with it.
    pub fn dispatch(&mut self, update: DocumentUpdate) -> UpdateOutcome {
        let follow_up = FollowUp::implied_by(&update);
        let outcome = apply(&self.document, update);
        match outcome.status {
            UpdateStatus::Changed => debug!("Document updated"),
            UpdateStatus::Unchanged => debug!("Update left document unchanged"),
            UpdateStatus::Rejected(reason) => debug!("Update rejected: {}", reason.message()),
        }
        self.form.settle(follow_up, &outcome);
        self.document = outcome.document.clone();
        outcome
    }

    /// Feeds an editor event through the form controller and applies the
    /// document change it produces, if any.
    pub fn handle_form_event(&mut self, event: FormEvent) -> UpdateStatus {
        let Some(dispatch) = self.form.handle(&self.document, event) else {
            return UpdateStatus::Unchanged;
        };
        let outcome = self.dispatch(dispatch.update);
        self.form.settle(dispatch.follow_up, &outcome);
        outcome.status
    }

    pub fn view(&self) -> ResumeView {
        build_view(&self.document, self.theme.theme())
    }

    pub fn render(&self) -> Result<String, AppError> {
        render_html(&self.view(), self.theme.theme())
    }

    /// The printable page, or `None` while the preview is hidden.
    pub fn surface(&self) -> Result<Option<RenderedSurface>, AppError> {
        if !self.preview_visible {
            return Ok(None);
        }
        Ok(Some(RenderedSurface {
            html: self.render()?,
            full_name: self.document.personal_info.full_name.clone(),
        }))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ResumeDocument::default(), ThemeName::default())
    }
}
