//! Projection of a document into the tree the preview displays.
//!
//! Pure: the same `(document, theme)` always yields the same view. All
//! placeholder text and conditional sections are decided here so the HTML
//! template only lays things out.

use serde::Serialize;

use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument};
use crate::preview::dates::format_range;
use crate::preview::grouping::{group_skills, PREVIEW_FALLBACK_CATEGORY};
use crate::theme::{Theme, ThemeName};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeView {
    pub theme: ThemeName,
    pub header: HeaderView,
    /// Only non-empty sections, in display order.
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub name: String,
    pub title: String,
    pub profile_picture: Option<String>,
    pub contacts: Vec<ContactItem>,
    pub links: Vec<ContactItem>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub label: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
    Github,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionView {
    Experience { items: Vec<ExperienceView> },
    Education { items: Vec<EducationView> },
    Skills { groups: Vec<SkillGroupView> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceView {
    pub position: String,
    pub company_line: String,
    pub date_range: Option<String>,
    pub description: Option<String>,
    /// Non-blank achievements only. Empty means the list is not rendered.
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationView {
    pub heading: String,
    pub institution_line: String,
    pub date_range: Option<String>,
    pub gpa: Option<String>,
    pub highlights: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroupView {
    pub category: String,
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Projection
// ────────────────────────────────────────────────────────────────────────────

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

pub fn build_view(doc: &ResumeDocument, theme: &Theme) -> ResumeView {
    let mut sections = Vec::new();

    if !doc.experience.is_empty() {
        sections.push(SectionView::Experience {
            items: doc.experience.iter().map(experience_view).collect(),
        });
    }
    if !doc.education.is_empty() {
        sections.push(SectionView::Education {
            items: doc.education.iter().map(education_view).collect(),
        });
    }
    if !doc.skills.is_empty() {
        let groups = group_skills(&doc.skills, PREVIEW_FALLBACK_CATEGORY)
            .into_iter()
            .map(|g| SkillGroupView {
                category: g.category,
                skills: g.skills.iter().map(|s| s.name.clone()).collect(),
            })
            .collect();
        sections.push(SectionView::Skills { groups });
    }

    ResumeView {
        theme: theme.name,
        header: header_view(&doc.personal_info),
        sections,
    }
}

fn header_view(info: &PersonalInfo) -> HeaderView {
    let mut contacts = Vec::new();
    if !info.email.is_empty() {
        contacts.push(ContactItem {
            kind: ContactKind::Email,
            label: info.email.clone(),
            href: Some(format!("mailto:{}", info.email)),
        });
    }
    if !info.phone.is_empty() {
        contacts.push(ContactItem {
            kind: ContactKind::Phone,
            label: info.phone.clone(),
            href: Some(format!("tel:{}", info.phone)),
        });
    }
    if !info.location.is_empty() {
        contacts.push(ContactItem {
            kind: ContactKind::Location,
            label: info.location.clone(),
            href: None,
        });
    }

    let links = [
        (ContactKind::Website, "Portfolio", &info.website),
        (ContactKind::Linkedin, "LinkedIn", &info.linkedin),
        (ContactKind::Github, "GitHub", &info.github),
    ]
    .into_iter()
    .filter(|(_, _, url)| !url.is_empty())
    .map(|(kind, label, url)| ContactItem {
        kind,
        label: label.to_string(),
        href: Some(url.clone()),
    })
    .collect();

    HeaderView {
        name: or_placeholder(&info.full_name, "Your Name"),
        title: or_placeholder(&info.job_title, "Professional Title"),
        profile_picture: non_empty(&info.profile_picture),
        contacts,
        links,
        summary: non_empty(&info.summary),
    }
}

fn experience_view(exp: &ExperienceEntry) -> ExperienceView {
    ExperienceView {
        position: or_placeholder(&exp.position, "Position"),
        company_line: format!(
            "{} - {}",
            or_placeholder(&exp.company, "Company"),
            or_placeholder(&exp.location, "Location")
        ),
        date_range: format_range(&exp.start_date, &exp.end_date, exp.current),
        description: non_empty(&exp.description),
        achievements: exp
            .achievements
            .iter()
            .filter(|a| !a.trim().is_empty())
            .cloned()
            .collect(),
    }
}

fn education_view(edu: &EducationEntry) -> EducationView {
    let degree = or_placeholder(&edu.degree, "Degree");
    let heading = if edu.field.is_empty() {
        degree
    } else {
        format!("{degree} in {}", edu.field)
    };
    EducationView {
        heading,
        institution_line: format!(
            "{} - {}",
            or_placeholder(&edu.institution, "Institution"),
            or_placeholder(&edu.location, "Location")
        ),
        date_range: format_range(&edu.start_date, &edu.end_date, edu.current),
        gpa: non_empty(&edu.gpa),
        highlights: non_empty(&edu.highlights),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{self, SkillDraft};
    use crate::models::resume::{SkillLevel, SkillType};

    fn modern() -> &'static Theme {
        ThemeName::Modern.theme()
    }

    #[test]
    fn test_empty_document_has_placeholders_and_no_sections() {
        let view = build_view(&ResumeDocument::default(), modern());
        assert!(view.sections.is_empty());
        assert_eq!(view.header.name, "Your Name");
        assert_eq!(view.header.title, "Professional Title");
        assert!(view.header.contacts.is_empty());
        assert!(view.header.summary.is_none());
    }

    #[test]
    fn test_achievements_hidden_when_all_blank() {
        let template = ExperienceEntry {
            achievements: vec!["".to_string(), "   ".to_string()],
            ..Default::default()
        };
        let (doc, _) = document::add_entry(&ResumeDocument::default(), template);
        let view = build_view(&doc, modern());
        match &view.sections[0] {
            SectionView::Experience { items } => assert!(items[0].achievements.is_empty()),
            other => panic!("unexpected section {other:?}"),
        }
    }

    #[test]
    fn test_blank_achievements_are_filtered() {
        let template = ExperienceEntry {
            achievements: vec!["Shipped v2".to_string(), " ".to_string()],
            ..Default::default()
        };
        let (doc, _) = document::add_entry(&ResumeDocument::default(), template);
        let view = build_view(&doc, modern());
        match &view.sections[0] {
            SectionView::Experience { items } => {
                assert_eq!(items[0].achievements, vec!["Shipped v2".to_string()]);
                assert_eq!(items[0].company_line, "Company - Location");
            }
            other => panic!("unexpected section {other:?}"),
        }
    }

    #[test]
    fn test_current_then_toggled_date_range() {
        let template = ExperienceEntry {
            start_date: "2020-01".to_string(),
            current: true,
            ..Default::default()
        };
        let (doc, id) = document::add_entry(&ResumeDocument::default(), template);
        let range = |doc: &ResumeDocument| match &build_view(doc, modern()).sections[0] {
            SectionView::Experience { items } => items[0].date_range.clone(),
            _ => None,
        };
        assert_eq!(range(&doc).as_deref(), Some("Jan 2020 – Present"));

        let toggled = document::toggle_current::<ExperienceEntry>(&doc, id);
        assert!(!toggled.experience[0].current);
        assert_eq!(toggled.experience[0].end_date, "");
        assert_eq!(range(&toggled).as_deref(), Some("Jan 2020 – End Date"));
    }

    #[test]
    fn test_education_heading_includes_field() {
        let template = EducationEntry {
            degree: "BSc".to_string(),
            field: "Physics".to_string(),
            gpa: "3.8".to_string(),
            ..Default::default()
        };
        let (doc, _) = document::add_entry(&ResumeDocument::default(), template);
        match &build_view(&doc, modern()).sections[0] {
            SectionView::Education { items } => {
                assert_eq!(items[0].heading, "BSc in Physics");
                assert_eq!(items[0].gpa.as_deref(), Some("3.8"));
                assert!(items[0].date_range.is_none());
            }
            other => panic!("unexpected section {other:?}"),
        }
    }

    #[test]
    fn test_rejected_skill_then_accepted_skill_is_grouped() {
        let doc = ResumeDocument::default();
        let rejected = document::add_skill(
            &doc,
            SkillDraft {
                name: String::new(),
                category: "Tools".to_string(),
                ..Default::default()
            },
        );
        assert!(rejected.is_err());

        let (doc, _) = document::add_skill(
            &doc,
            SkillDraft {
                name: "Go".to_string(),
                level: SkillLevel::new(4),
                category: "Tools".to_string(),
                skill_type: SkillType::Technical,
            },
        )
        .unwrap();
        match &build_view(&doc, modern()).sections[0] {
            SectionView::Skills { groups } => {
                assert_eq!(groups.len(), 1);
                assert_eq!(groups[0].category, "Tools");
                assert_eq!(groups[0].skills, vec!["Go".to_string()]);
            }
            other => panic!("unexpected section {other:?}"),
        }
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let (doc, _) = document::add_entry(&ResumeDocument::default(), EducationEntry::default());
        let (doc, _) = document::add_entry(&doc, ExperienceEntry::default());
        let sections = build_view(&doc, modern()).sections;
        assert_eq!(sections.len(), 2);
        assert!(matches!(sections[0], SectionView::Experience { .. }));
        assert!(matches!(sections[1], SectionView::Education { .. }));
    }

    #[test]
    fn test_links_only_for_present_urls() {
        let doc = document::set_personal_info(
            &ResumeDocument::default(),
            PersonalInfo {
                email: "ada@example.com".to_string(),
                github: "https://github.com/ada".to_string(),
                ..Default::default()
            },
        );
        let header = build_view(&doc, modern()).header;
        assert_eq!(header.contacts.len(), 1);
        assert_eq!(header.contacts[0].href.as_deref(), Some("mailto:ada@example.com"));
        assert_eq!(header.links.len(), 1);
        assert_eq!(header.links[0].label, "GitHub");
    }

    #[test]
    fn test_switching_theme_changes_only_theme() {
        let (doc, _) = document::add_entry(&ResumeDocument::default(), EducationEntry::default());
        let a = build_view(&doc, ThemeName::Modern.theme());
        let b = build_view(&doc, ThemeName::Creative.theme());
        assert_eq!(a.sections, b.sections);
        assert_eq!(b.theme, ThemeName::Creative);
    }
}
