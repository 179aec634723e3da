use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Root aggregate
// ────────────────────────────────────────────────────────────────────────────

/// The resume being edited in the active session.
///
/// Field names serialize in camelCase so a persisted document keeps the
/// `resumeData` layout used by the browser builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub skill_categories: SkillCategories,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    /// URL or data URL of the uploaded picture.
    pub profile_picture: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Collection entries
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: Uuid,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub location: String,
    /// Year-month, `YYYY-MM`. Empty when not yet entered.
    #[serde(default)]
    pub start_date: String,
    /// Year-month, `YYYY-MM`. Ignored for display while `current` is set.
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Default for ExperienceEntry {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            company: String::new(),
            position: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
            achievements: vec![String::new()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: Uuid,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub highlights: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillType {
    #[default]
    Technical,
    Soft,
}

impl SkillType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillType::Technical => "technical",
            SkillType::Soft => "soft",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "technical" => Some(SkillType::Technical),
            "soft" => Some(SkillType::Soft),
            _ => None,
        }
    }
}

/// Proficiency from 1 to 5. Every construction path clamps into range,
/// including deserialization of stored documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: i64) -> Self {
        Self(level.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        Self(3)
    }
}

impl From<i64> for SkillLevel {
    fn from(level: i64) -> Self {
        Self::new(level)
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    /// May be empty, e.g. after the referenced category was deleted.
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type", default)]
    pub skill_type: SkillType,
}

/// Per-type category lists. User-extensible and independent of which skills
/// currently reference them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategories {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

const DEFAULT_TECHNICAL_CATEGORIES: &[&str] = &[
    "Programming Languages",
    "Frameworks & Libraries",
    "Tools & Technologies",
    "Databases",
    "Cloud & DevOps",
    "Design & UI/UX",
];

const DEFAULT_SOFT_CATEGORIES: &[&str] = &[
    "Leadership",
    "Communication",
    "Problem Solving",
    "Teamwork",
    "Time Management",
    "Adaptability",
];

impl Default for SkillCategories {
    fn default() -> Self {
        Self {
            technical: DEFAULT_TECHNICAL_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            soft: DEFAULT_SOFT_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl SkillCategories {
    pub fn for_type(&self, skill_type: SkillType) -> &Vec<String> {
        match skill_type {
            SkillType::Technical => &self.technical,
            SkillType::Soft => &self.soft,
        }
    }

    pub fn for_type_mut(&mut self, skill_type: SkillType) -> &mut Vec<String> {
        match skill_type {
            SkillType::Technical => &mut self.technical,
            SkillType::Soft => &mut self.soft,
        }
    }
}
