//! Form Controller: editor-side UI state and the events that drive it.
//!
//! The controller reads the document but never writes it. An event that should
//! change the document yields a [`Dispatch`]: the `DocumentUpdate` to apply
//! plus a follow-up for the controller's own state, which the session runs
//! only if the update was not rejected. Updates that bypass the editor still
//! get the follow-up their kind implies (see [`FollowUp::implied_by`]).

pub mod handlers;
pub mod view;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::{DocumentUpdate, Entry, SkillDraft, UpdateOutcome, UpdateStatus};
use crate::models::resume::{
    EducationEntry, ExperienceEntry, ResumeDocument, SkillLevel, SkillType,
};

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Personal,
    Experience,
    Education,
    Skills,
}

impl Section {
    pub const ORDER: [Section; 4] = [
        Section::Personal,
        Section::Experience,
        Section::Education,
        Section::Skills,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Personal => "Personal Info",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
        }
    }
}

/// Which entry collection an entry-level event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Experience,
    Education,
}

// ────────────────────────────────────────────────────────────────────────────
// State
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsEditor {
    pub active_tab: SkillType,
    /// Working copy of the skill being edited. At most one at a time.
    pub editing: Option<crate::models::resume::SkillEntry>,
    pub new_skill: SkillDraft,
    pub new_category: String,
}

impl Default for SkillsEditor {
    fn default() -> Self {
        Self {
            active_tab: SkillType::Technical,
            editing: None,
            new_skill: SkillDraft::default(),
            new_category: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormController {
    pub active_section: usize,
    pub show_tips: bool,
    pub experience_expanded: Option<usize>,
    pub education_expanded: Option<usize>,
    pub skills: SkillsEditor,
}

impl Default for FormController {
    fn default() -> Self {
        Self {
            active_section: 0,
            show_tips: true,
            experience_expanded: None,
            education_expanded: None,
            skills: SkillsEditor::default(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Events
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    NextSection,
    PreviousSection,
    GoToSection { index: usize },
    ToggleTips,

    AddEntry { kind: EntryKind },
    RemoveEntry { kind: EntryKind, id: Uuid },
    ToggleExpanded { kind: EntryKind, index: usize },

    SelectSkillTab { tab: SkillType },
    SetNewSkillName { name: String },
    SetNewSkillLevel { level: i64 },
    SetNewSkillCategory { category: String },
    AddSkill,
    StartEditSkill { id: Uuid },
    SetEditName { name: String },
    SetEditLevel { level: i64 },
    SetEditCategory { category: String },
    SaveEdit,
    CancelEdit,
    DeleteSkill { id: Uuid },
    SetNewCategory { name: String },
    AddCategory,
    DeleteCategory { name: String },
}

/// Controller-side bookkeeping that runs after a successful update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Nothing,
    ExpandNewest(EntryKind),
    Collapse(EntryKind),
    ResetSkillDraft,
    FinishEdit,
    CancelEditOf(Uuid),
    ForgetSelection,
}

impl FollowUp {
    /// Bookkeeping every update of this kind needs, whichever path it came in on.
    pub fn implied_by(update: &DocumentUpdate) -> Self {
        match update {
            DocumentUpdate::AddExperience { .. } => FollowUp::ExpandNewest(EntryKind::Experience),
            DocumentUpdate::AddEducation { .. } => FollowUp::ExpandNewest(EntryKind::Education),
            DocumentUpdate::RemoveExperience { .. } => FollowUp::Collapse(EntryKind::Experience),
            DocumentUpdate::RemoveEducation { .. } => FollowUp::Collapse(EntryKind::Education),
            DocumentUpdate::RemoveSkill { id } => FollowUp::CancelEditOf(*id),
            DocumentUpdate::Reset => FollowUp::ForgetSelection,
            _ => FollowUp::Nothing,
        }
    }
}

fn position_of<E: Entry>(doc: &ResumeDocument, id: Uuid) -> Option<usize> {
    E::collection(doc).iter().position(|e| e.id() == id)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub update: DocumentUpdate,
    pub follow_up: FollowUp,
}

impl Dispatch {
    fn new(update: DocumentUpdate, follow_up: FollowUp) -> Self {
        Self { update, follow_up }
    }
}

impl FormController {
    pub fn section(&self) -> Section {
        Section::ORDER[self.active_section]
    }

    pub fn expanded(&self, kind: EntryKind) -> Option<usize> {
        match kind {
            EntryKind::Experience => self.experience_expanded,
            EntryKind::Education => self.education_expanded,
        }
    }

    fn expanded_mut(&mut self, kind: EntryKind) -> &mut Option<usize> {
        match kind {
            EntryKind::Experience => &mut self.experience_expanded,
            EntryKind::Education => &mut self.education_expanded,
        }
    }

    /// Applies `event` to local state. Returns the document change it asks
    /// for, if any.
    pub fn handle(&mut self, doc: &ResumeDocument, event: FormEvent) -> Option<Dispatch> {
        match event {
            FormEvent::NextSection => {
                self.navigate(self.active_section + 1);
                None
            }
            FormEvent::PreviousSection => {
                self.navigate(self.active_section.saturating_sub(1));
                None
            }
            FormEvent::GoToSection { index } => {
                self.navigate(index);
                None
            }
            FormEvent::ToggleTips => {
                self.show_tips = !self.show_tips;
                None
            }

            FormEvent::AddEntry { kind } => {
                let update = match kind {
                    EntryKind::Experience => DocumentUpdate::AddExperience {
                        template: ExperienceEntry::default(),
                    },
                    EntryKind::Education => DocumentUpdate::AddEducation {
                        template: EducationEntry::default(),
                    },
                };
                Some(Dispatch::new(update, FollowUp::ExpandNewest(kind)))
            }
            FormEvent::RemoveEntry { kind, id } => {
                let update = match kind {
                    EntryKind::Experience => DocumentUpdate::RemoveExperience { id },
                    EntryKind::Education => DocumentUpdate::RemoveEducation { id },
                };
                Some(Dispatch::new(update, FollowUp::Collapse(kind)))
            }
            FormEvent::ToggleExpanded { kind, index } => {
                let len = match kind {
                    EntryKind::Experience => doc.experience.len(),
                    EntryKind::Education => doc.education.len(),
                };
                let slot = self.expanded_mut(kind);
                *slot = if *slot == Some(index) || index >= len {
                    None
                } else {
                    Some(index)
                };
                None
            }

            FormEvent::SelectSkillTab { tab } => {
                self.skills.active_tab = tab;
                None
            }
            FormEvent::SetNewSkillName { name } => {
                self.skills.new_skill.name = name;
                None
            }
            FormEvent::SetNewSkillLevel { level } => {
                self.skills.new_skill.level = SkillLevel::new(level);
                None
            }
            FormEvent::SetNewSkillCategory { category } => {
                self.skills.new_skill.category = category;
                None
            }
            FormEvent::AddSkill => {
                let draft = SkillDraft {
                    skill_type: self.skills.active_tab,
                    ..self.skills.new_skill.clone()
                };
                Some(Dispatch::new(
                    DocumentUpdate::AddSkill { draft },
                    FollowUp::ResetSkillDraft,
                ))
            }
            FormEvent::StartEditSkill { id } => {
                // Replaces any edit in progress; unsaved changes are dropped.
                if let Some(skill) = doc.skills.iter().find(|s| s.id == id) {
                    self.skills.editing = Some(skill.clone());
                }
                None
            }
            FormEvent::SetEditName { name } => {
                if let Some(editing) = self.skills.editing.as_mut() {
                    editing.name = name;
                }
                None
            }
            FormEvent::SetEditLevel { level } => {
                if let Some(editing) = self.skills.editing.as_mut() {
                    editing.level = SkillLevel::new(level);
                }
                None
            }
            FormEvent::SetEditCategory { category } => {
                if let Some(editing) = self.skills.editing.as_mut() {
                    editing.category = category;
                }
                None
            }
            FormEvent::SaveEdit => self.skills.editing.clone().map(|skill| {
                Dispatch::new(DocumentUpdate::UpdateSkill { skill }, FollowUp::FinishEdit)
            }),
            FormEvent::CancelEdit => {
                self.skills.editing = None;
                None
            }
            FormEvent::DeleteSkill { id } => Some(Dispatch::new(
                DocumentUpdate::RemoveSkill { id },
                FollowUp::CancelEditOf(id),
            )),
            FormEvent::SetNewCategory { name } => {
                self.skills.new_category = name;
                None
            }
            FormEvent::AddCategory => {
                if self.skills.new_category.trim().is_empty() {
                    return None;
                }
                let name = std::mem::take(&mut self.skills.new_category);
                Some(Dispatch::new(
                    DocumentUpdate::AddSkillCategory {
                        skill_type: self.skills.active_tab,
                        name,
                    },
                    FollowUp::Nothing,
                ))
            }
            FormEvent::DeleteCategory { name } => Some(Dispatch::new(
                DocumentUpdate::RemoveSkillCategory {
                    skill_type: self.skills.active_tab,
                    name,
                },
                FollowUp::Nothing,
            )),
        }
    }

    /// Moves to `index` if it names a section. Leaving a section discards its
    /// local state: expanded rows, skill drafts and any edit in progress.
    fn navigate(&mut self, index: usize) {
        if index >= Section::ORDER.len() || index == self.active_section {
            return;
        }
        self.active_section = index;
        self.forget_selection();
        self.skills = SkillsEditor::default();
    }

    /// Drops every per-entry selection, keeping navigation and tips. Used when
    /// the whole document is replaced.
    pub fn forget_selection(&mut self) {
        self.experience_expanded = None;
        self.education_expanded = None;
        self.skills.editing = None;
    }

    /// Runs the follow-up of a dispatch once its update has been applied.
    /// Rejected updates leave the controller as it was, so a refused save
    /// stays in edit mode and a refused add keeps its draft.
    pub fn settle(&mut self, follow_up: FollowUp, outcome: &UpdateOutcome) {
        if matches!(outcome.status, UpdateStatus::Rejected(_)) {
            return;
        }
        match follow_up {
            FollowUp::Nothing => {}
            FollowUp::ExpandNewest(kind) => {
                let doc = &outcome.document;
                *self.expanded_mut(kind) = outcome.created.and_then(|id| match kind {
                    EntryKind::Experience => position_of::<ExperienceEntry>(doc, id),
                    EntryKind::Education => position_of::<EducationEntry>(doc, id),
                });
            }
            FollowUp::Collapse(kind) => *self.expanded_mut(kind) = None,
            FollowUp::ResetSkillDraft => self.skills.new_skill = SkillDraft::default(),
            FollowUp::FinishEdit => self.skills.editing = None,
            FollowUp::CancelEditOf(id) => {
                if self.skills.editing.as_ref().map(|s| s.id) == Some(id) {
                    self.skills.editing = None;
                }
            }
            FollowUp::ForgetSelection => self.forget_selection(),
        }
        // An edit target that left the document can no longer be saved.
        if let Some(editing) = &self.skills.editing {
            if !outcome.document.skills.iter().any(|s| s.id == editing.id) {
                self.skills.editing = None;
            }
        }
    }
}
