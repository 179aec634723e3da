//! The update channel: one message type for every document mutation.
//!
//! UI-facing layers (form controller, HTTP handlers) never touch the document
//! directly. They produce a [`DocumentUpdate`] and the session applies it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::{self, EducationField, ExperienceField, Rejected, SkillDraft};
use crate::models::resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument, SkillEntry, SkillType,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DocumentUpdate {
    SetPersonalInfo { info: PersonalInfo },
    AddExperience { template: ExperienceEntry },
    UpdateExperience { id: Uuid, update: ExperienceField },
    RemoveExperience { id: Uuid },
    ToggleExperienceCurrent { id: Uuid },
    AddEducation { template: EducationEntry },
    UpdateEducation { id: Uuid, update: EducationField },
    RemoveEducation { id: Uuid },
    ToggleEducationCurrent { id: Uuid },
    AddSkillCategory { skill_type: SkillType, name: String },
    RemoveSkillCategory { skill_type: SkillType, name: String },
    AddSkill { draft: SkillDraft },
    UpdateSkill { skill: SkillEntry },
    RemoveSkill { id: Uuid },
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum UpdateStatus {
    Changed,
    Unchanged,
    Rejected(Rejected),
}

/// Result of applying one update. `document` is always the document to keep:
/// the new value on change, an identical copy otherwise.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub document: ResumeDocument,
    pub status: UpdateStatus,
    /// Id assigned to a newly created entry or skill.
    pub created: Option<Uuid>,
}

impl UpdateOutcome {
    fn settled(before: &ResumeDocument, document: ResumeDocument) -> Self {
        let status = if &document == before {
            UpdateStatus::Unchanged
        } else {
            UpdateStatus::Changed
        };
        Self {
            document,
            status,
            created: None,
        }
    }

    fn created(document: ResumeDocument, id: Uuid) -> Self {
        Self {
            document,
            status: UpdateStatus::Changed,
            created: Some(id),
        }
    }

    fn rejected(before: &ResumeDocument, reason: Rejected) -> Self {
        Self {
            document: before.clone(),
            status: UpdateStatus::Rejected(reason),
            created: None,
        }
    }
}

pub fn apply(doc: &ResumeDocument, update: DocumentUpdate) -> UpdateOutcome {
    match update {
        DocumentUpdate::SetPersonalInfo { info } => {
            UpdateOutcome::settled(doc, document::set_personal_info(doc, info))
        }
        DocumentUpdate::AddExperience { template } => {
            let (next, id) = document::add_entry(doc, template);
            UpdateOutcome::created(next, id)
        }
        DocumentUpdate::UpdateExperience { id, update } => UpdateOutcome::settled(
            doc,
            document::update_entry_field::<ExperienceEntry>(doc, id, update),
        ),
        DocumentUpdate::RemoveExperience { id } => {
            UpdateOutcome::settled(doc, document::remove_entry::<ExperienceEntry>(doc, id))
        }
        DocumentUpdate::ToggleExperienceCurrent { id } => {
            UpdateOutcome::settled(doc, document::toggle_current::<ExperienceEntry>(doc, id))
        }
        DocumentUpdate::AddEducation { template } => {
            let (next, id) = document::add_entry(doc, template);
            UpdateOutcome::created(next, id)
        }
        DocumentUpdate::UpdateEducation { id, update } => UpdateOutcome::settled(
            doc,
            document::update_entry_field::<EducationEntry>(doc, id, update),
        ),
        DocumentUpdate::RemoveEducation { id } => {
            UpdateOutcome::settled(doc, document::remove_entry::<EducationEntry>(doc, id))
        }
        DocumentUpdate::ToggleEducationCurrent { id } => {
            UpdateOutcome::settled(doc, document::toggle_current::<EducationEntry>(doc, id))
        }
        DocumentUpdate::AddSkillCategory { skill_type, name } => UpdateOutcome::settled(
            doc,
            document::add_skill_category(doc, skill_type, &name),
        ),
        DocumentUpdate::RemoveSkillCategory { skill_type, name } => UpdateOutcome::settled(
            doc,
            document::remove_skill_category(doc, skill_type, &name),
        ),
        DocumentUpdate::AddSkill { draft } => match document::add_skill(doc, draft) {
            Ok((next, id)) => UpdateOutcome::created(next, id),
            Err(reason) => UpdateOutcome::rejected(doc, reason),
        },
        DocumentUpdate::UpdateSkill { skill } => match document::update_skill(doc, skill) {
            Ok(next) => UpdateOutcome::settled(doc, next),
            Err(reason) => UpdateOutcome::rejected(doc, reason),
        },
        DocumentUpdate::RemoveSkill { id } => {
            UpdateOutcome::settled(doc, document::remove_skill(doc, id))
        }
        DocumentUpdate::Reset => UpdateOutcome::settled(doc, document::reset()),
    }
}
