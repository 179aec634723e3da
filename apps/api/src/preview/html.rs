use askama::Template;

use crate::errors::AppError;
use crate::preview::view::{
    EducationView, ExperienceView, ResumeView, SectionView, SkillGroupView,
};
use crate::theme::Theme;

#[derive(Template)]
#[template(path = "preview.html")]
struct PreviewPage<'a> {
    view: &'a ResumeView,
    theme: &'a Theme,
    css_vars: String,
    experience: &'a [ExperienceView],
    education: &'a [EducationView],
    skills: &'a [SkillGroupView],
}

/// A styled, printable page produced from the current view. This is what the
/// exporter hands to the PDF renderer.
#[derive(Debug, Clone)]
pub struct RenderedSurface {
    pub html: String,
    /// The person's full name, empty when not entered.
    pub full_name: String,
}

pub fn render_html(view: &ResumeView, theme: &Theme) -> Result<String, AppError> {
    let mut experience: &[ExperienceView] = &[];
    let mut education: &[EducationView] = &[];
    let mut skills: &[SkillGroupView] = &[];
    for section in &view.sections {
        match section {
            SectionView::Experience { items } => experience = items.as_slice(),
            SectionView::Education { items } => education = items.as_slice(),
            SectionView::Skills { groups } => skills = groups.as_slice(),
        }
    }

    let page = PreviewPage {
        view,
        theme,
        css_vars: theme.css_variables_inline(),
        experience,
        education,
        skills,
    };
    page.render()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("preview template failed: {e}")))
}
