use serde::Serialize;

use crate::models::resume::SkillEntry;

/// Fallback heading for uncategorized skills in the rendered resume.
pub const PREVIEW_FALLBACK_CATEGORY: &str = "General";
/// Fallback heading for uncategorized skills in the skills editor.
pub const EDITOR_FALLBACK_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup<'a> {
    pub category: String,
    pub skills: Vec<&'a SkillEntry>,
}

/// Groups skills by category, keeping categories in first-seen order and
/// skills in document order. Empty categories collect under `fallback`.
pub fn group_skills<'a, I>(skills: I, fallback: &str) -> Vec<SkillGroup<'a>>
where
    I: IntoIterator<Item = &'a SkillEntry>,
{
    let mut groups: Vec<SkillGroup<'a>> = Vec::new();
    for skill in skills {
        let category = if skill.category.is_empty() {
            fallback
        } else {
            skill.category.as_str()
        };
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: category.to_string(),
                skills: vec![skill],
            }),
        }
    }
    groups
}
