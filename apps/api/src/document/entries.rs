//! Id-keyed collections of the resume and their typed field updates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeDocument};

/// An ordered, id-keyed record inside the document (experience or education).
pub trait Entry: Clone {
    /// One replaceable field together with its new value.
    type Field;

    fn id(&self) -> Uuid;
    fn set_id(&mut self, id: Uuid);
    fn apply_field(&mut self, field: Self::Field);

    /// Flips `current`. The false → true transition clears `end_date`.
    fn toggle_current(&mut self);

    fn collection(doc: &ResumeDocument) -> &Vec<Self>;
    fn collection_mut(doc: &mut ResumeDocument) -> &mut Vec<Self>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ExperienceField {
    Company(String),
    Position(String),
    Location(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
    Description(String),
    Achievements(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EducationField {
    Institution(String),
    Degree(String),
    Field(String),
    Location(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
    Gpa(String),
    Highlights(String),
}

impl Entry for ExperienceEntry {
    type Field = ExperienceField;

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn apply_field(&mut self, field: ExperienceField) {
        match field {
            ExperienceField::Company(v) => self.company = v,
            ExperienceField::Position(v) => self.position = v,
            ExperienceField::Location(v) => self.location = v,
            ExperienceField::StartDate(v) => self.start_date = v,
            ExperienceField::EndDate(v) => self.end_date = v,
            ExperienceField::Current(v) => self.current = v,
            ExperienceField::Description(v) => self.description = v,
            ExperienceField::Achievements(v) => self.achievements = v,
        }
    }

    fn toggle_current(&mut self) {
        if !self.current {
            self.end_date.clear();
        }
        self.current = !self.current;
    }

    fn collection(doc: &ResumeDocument) -> &Vec<Self> {
        &doc.experience
    }

    fn collection_mut(doc: &mut ResumeDocument) -> &mut Vec<Self> {
        &mut doc.experience
    }
}

impl Entry for EducationEntry {
    type Field = EducationField;

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn apply_field(&mut self, field: EducationField) {
        match field {
            EducationField::Institution(v) => self.institution = v,
            EducationField::Degree(v) => self.degree = v,
            EducationField::Field(v) => self.field = v,
            EducationField::Location(v) => self.location = v,
            EducationField::StartDate(v) => self.start_date = v,
            EducationField::EndDate(v) => self.end_date = v,
            EducationField::Current(v) => self.current = v,
            EducationField::Gpa(v) => self.gpa = v,
            EducationField::Highlights(v) => self.highlights = v,
        }
    }

    fn toggle_current(&mut self) {
        if !self.current {
            self.end_date.clear();
        }
        self.current = !self.current;
    }

    fn collection(doc: &ResumeDocument) -> &Vec<Self> {
        &doc.education
    }

    fn collection_mut(doc: &mut ResumeDocument) -> &mut Vec<Self> {
        &mut doc.education
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_update_wire_shape() {
        let field: ExperienceField =
            serde_json::from_value(json!({ "field": "startDate", "value": "2020-01" })).unwrap();
        assert_eq!(field, ExperienceField::StartDate("2020-01".to_string()));

        let field: EducationField =
            serde_json::from_value(json!({ "field": "gpa", "value": "3.9" })).unwrap();
        assert_eq!(field, EducationField::Gpa("3.9".to_string()));
    }

    #[test]
    fn test_unknown_field_does_not_parse() {
        let parsed: Result<ExperienceField, _> =
            serde_json::from_value(json!({ "field": "salary", "value": "lots" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_toggle_clears_end_date_when_becoming_current() {
        let mut entry = EducationEntry {
            end_date: "2019-06".to_string(),
            ..Default::default()
        };
        entry.toggle_current();
        assert!(entry.current);
        assert!(entry.end_date.is_empty());
        entry.toggle_current();
        assert!(!entry.current);
        assert!(entry.end_date.is_empty());
    }
}
