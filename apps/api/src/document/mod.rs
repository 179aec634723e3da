//! Document Model: pure update operations over [`ResumeDocument`].
//!
//! Every operation borrows the current document and returns a new value.
//! Lookups by id never fail: a missing id yields the document unchanged.
//! Validation failures on skills are reported as [`Rejected`] and also leave
//! the document unchanged.

pub mod entries;
pub mod handlers;
pub mod update;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::{PersonalInfo, ResumeDocument, SkillEntry, SkillLevel, SkillType};

pub use entries::{EducationField, Entry, ExperienceField};
pub use update::{apply, DocumentUpdate, UpdateOutcome, UpdateStatus};

/// Why a skill mutation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejected {
    EmptyName,
    EmptyCategory,
}

impl Rejected {
    pub fn message(&self) -> &'static str {
        match self {
            Rejected::EmptyName => "skill name must not be empty",
            Rejected::EmptyCategory => "skill category must be selected",
        }
    }
}

/// Skill fields supplied by the caller when adding a skill. The id is
/// generated on insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type", default)]
    pub skill_type: SkillType,
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info
// ────────────────────────────────────────────────────────────────────────────

/// Replaces the whole personal record.
pub fn set_personal_info(doc: &ResumeDocument, info: PersonalInfo) -> ResumeDocument {
    let mut next = doc.clone();
    next.personal_info = info;
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Experience / education
// ────────────────────────────────────────────────────────────────────────────

/// Appends `template` under a freshly generated id. Returns the new document
/// and the id assigned to the entry.
pub fn add_entry<E: Entry>(doc: &ResumeDocument, template: E) -> (ResumeDocument, Uuid) {
    let mut next = doc.clone();
    let id = Uuid::new_v4();
    let mut entry = template;
    entry.set_id(id);
    E::collection_mut(&mut next).push(entry);
    (next, id)
}

pub fn update_entry_field<E: Entry>(doc: &ResumeDocument, id: Uuid, field: E::Field) -> ResumeDocument {
    let mut next = doc.clone();
    if let Some(entry) = E::collection_mut(&mut next).iter_mut().find(|e| e.id() == id) {
        entry.apply_field(field);
    }
    next
}

pub fn remove_entry<E: Entry>(doc: &ResumeDocument, id: Uuid) -> ResumeDocument {
    let mut next = doc.clone();
    E::collection_mut(&mut next).retain(|e| e.id() != id);
    next
}

pub fn toggle_current<E: Entry>(doc: &ResumeDocument, id: Uuid) -> ResumeDocument {
    let mut next = doc.clone();
    if let Some(entry) = E::collection_mut(&mut next).iter_mut().find(|e| e.id() == id) {
        entry.toggle_current();
    }
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Skill categories
// ────────────────────────────────────────────────────────────────────────────

/// Appends `name` to the type's category list. Empty or whitespace-only names
/// are ignored; duplicates are kept.
pub fn add_skill_category(doc: &ResumeDocument, skill_type: SkillType, name: &str) -> ResumeDocument {
    if name.trim().is_empty() {
        return doc.clone();
    }
    let mut next = doc.clone();
    next.skill_categories
        .for_type_mut(skill_type)
        .push(name.to_string());
    next
}

/// Removes `name` from the type's category list and clears `category` on
/// every skill of that type that referenced it. Skills are never removed.
pub fn remove_skill_category(doc: &ResumeDocument, skill_type: SkillType, name: &str) -> ResumeDocument {
    let mut next = doc.clone();
    next.skill_categories
        .for_type_mut(skill_type)
        .retain(|c| c != name);
    for skill in next
        .skills
        .iter_mut()
        .filter(|s| s.skill_type == skill_type && s.category == name)
    {
        skill.category.clear();
    }
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

fn validate_skill(name: &str, category: &str) -> Result<(), Rejected> {
    if name.trim().is_empty() {
        return Err(Rejected::EmptyName);
    }
    if category.is_empty() {
        return Err(Rejected::EmptyCategory);
    }
    Ok(())
}

pub fn add_skill(doc: &ResumeDocument, draft: SkillDraft) -> Result<(ResumeDocument, Uuid), Rejected> {
    validate_skill(&draft.name, &draft.category)?;
    let id = Uuid::new_v4();
    let mut next = doc.clone();
    next.skills.push(SkillEntry {
        id,
        name: draft.name,
        level: draft.level,
        category: draft.category,
        skill_type: draft.skill_type,
    });
    Ok((next, id))
}

/// Replaces the skill with the same id. An unknown id is a silent no-op once
/// the skill passes validation.
pub fn update_skill(doc: &ResumeDocument, skill: SkillEntry) -> Result<ResumeDocument, Rejected> {
    validate_skill(&skill.name, &skill.category)?;
    let mut next = doc.clone();
    if let Some(slot) = next.skills.iter_mut().find(|s| s.id == skill.id) {
        *slot = skill;
    }
    Ok(next)
}

pub fn remove_skill(doc: &ResumeDocument, id: Uuid) -> ResumeDocument {
    let mut next = doc.clone();
    next.skills.retain(|s| s.id != id);
    next
}

/// The empty document a reset starts from.
pub fn reset() -> ResumeDocument {
    ResumeDocument::default()
}
