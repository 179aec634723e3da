use serde::Serialize;
use uuid::Uuid;

use crate::document::SkillDraft;
use crate::form::{EntryKind, FormController, Section};
use crate::models::resume::{
    EducationEntry, ExperienceEntry, ResumeDocument, SkillEntry, SkillType,
};
use crate::preview::grouping::{group_skills, EDITOR_FALLBACK_CATEGORY};

/// Read model of the editor, returned by `GET /api/v1/form`.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub active_section: Section,
    pub active_index: usize,
    pub progress: Vec<ProgressDot>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub show_tips: bool,
    pub experience: Vec<EntryHeader>,
    pub education: Vec<EntryHeader>,
    pub skills: SkillsTabView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressDot {
    pub index: usize,
    pub section: Section,
    pub label: &'static str,
    pub active: bool,
}

/// Collapsed-row summary of one experience or education entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryHeader {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub expanded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillsTabView {
    pub active_tab: SkillType,
    pub categories: Vec<String>,
    pub groups: Vec<EditorSkillGroup>,
    pub editing: Option<SkillEntry>,
    pub new_skill: SkillDraft,
    pub new_category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorSkillGroup {
    pub category: String,
    pub skills: Vec<SkillEntry>,
}

pub const NEW_EXPERIENCE_LABEL: &str = "New Experience Entry";
pub const NEW_EDUCATION_LABEL: &str = "New Education Entry";

fn experience_header(entry: &ExperienceEntry, expanded: bool) -> EntryHeader {
    let title = if entry.position.trim().is_empty() {
        NEW_EXPERIENCE_LABEL.to_string()
    } else {
        entry.position.clone()
    };
    EntryHeader {
        id: entry.id,
        title,
        subtitle: entry.company.clone(),
        expanded,
    }
}

/// "Degree in Field", either half may be missing.
fn education_header(entry: &EducationEntry, expanded: bool) -> EntryHeader {
    let degree = entry.degree.trim();
    let field = entry.field.trim();
    let title = match (degree.is_empty(), field.is_empty()) {
        (true, true) => NEW_EDUCATION_LABEL.to_string(),
        (false, true) => degree.to_string(),
        (true, false) => format!("in {field}"),
        (false, false) => format!("{degree} in {field}"),
    };
    EntryHeader {
        id: entry.id,
        title,
        subtitle: entry.institution.clone(),
        expanded,
    }
}

pub fn build_form_view(form: &FormController, doc: &ResumeDocument) -> FormView {
    let progress = Section::ORDER
        .iter()
        .enumerate()
        .map(|(i, section)| ProgressDot {
            index: i,
            section: *section,
            label: section.label(),
            active: i == form.active_section,
        })
        .collect();

    let experience = doc
        .experience
        .iter()
        .enumerate()
        .map(|(i, e)| experience_header(e, form.expanded(EntryKind::Experience) == Some(i)))
        .collect();
    let education = doc
        .education
        .iter()
        .enumerate()
        .map(|(i, e)| education_header(e, form.expanded(EntryKind::Education) == Some(i)))
        .collect();

    let tab = form.skills.active_tab;
    let groups = group_skills(
        doc.skills.iter().filter(|s| s.skill_type == tab),
        EDITOR_FALLBACK_CATEGORY,
    )
    .into_iter()
    .map(|g| EditorSkillGroup {
        category: g.category,
        skills: g.skills.into_iter().cloned().collect(),
    })
    .collect();

    FormView {
        active_section: form.section(),
        active_index: form.active_section,
        progress,
        can_go_previous: form.active_section > 0,
        can_go_next: form.active_section + 1 < Section::ORDER.len(),
        show_tips: form.show_tips,
        experience,
        education,
        skills: SkillsTabView {
            active_tab: tab,
            categories: doc.skill_categories.for_type(tab).clone(),
            groups,
            editing: form.skills.editing.clone(),
            new_skill: form.skills.new_skill.clone(),
            new_category: form.skills.new_category.clone(),
        },
    }
}
