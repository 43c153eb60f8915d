//! Typed, read-only view of a cleaned resume record.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::layout::template::ContentLimits;
use crate::richtext::coerce_text;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EducationEntry {
    Structured {
        degree: Option<String>,
        institution: Option<String>,
    },
    Plain(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CertificationEntry {
    Structured {
        title: Option<String>,
        issuer: Option<String>,
        year: Option<String>,
    },
    Plain(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEntry {
    pub title: Option<String>,
    /// Raw description sources; each one is split into bullets at render time.
    pub description: Vec<String>,
}

/// What the renderer sees of a resume. Text fields still carry their markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeView {
    pub name: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl ResumeView {
    /// Builds a view from a record that has already been through `sanitize::clean`,
    /// truncating skills and certifications to `limits`.
    pub fn from_record(record: &Map<String, Value>, limits: &ContentLimits) -> Self {
        let mut skills = text_list(record.get("skills"));
        skills.truncate(limits.max_skills);

        let mut certifications: Vec<CertificationEntry> = items(record.get("certifications"))
            .iter()
            .filter_map(certification_entry)
            .collect();
        certifications.truncate(limits.max_certifications);

        ResumeView {
            name: field_text(record, "name"),
            title: field_text(record, "title"),
            summary: field_text(record, "summary"),
            skills,
            education: items(record.get("education"))
                .iter()
                .filter_map(education_entry)
                .collect(),
            certifications,
            projects: items(record.get("projects"))
                .iter()
                .filter_map(project_entry)
                .collect(),
        }
    }

    /// Download name: candidate name with spaces as underscores, `resume` if unknown.
    /// Letters and digits in any script are kept; other punctuation is dropped.
    pub fn file_stem(&self) -> String {
        let stem: String = self
            .name
            .as_deref()
            .unwrap_or_default()
            .trim()
            .chars()
            .filter_map(|c| match c {
                ' ' => Some('_'),
                c if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') => Some(c),
                _ => None,
            })
            .collect();

        if stem.trim_matches(|c| c == '_' || c == '.').is_empty() {
            "resume".to_string()
        } else {
            stem
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field extraction
// ────────────────────────────────────────────────────────────────────────────

fn field_text(record: &Map<String, Value>, key: &str) -> Option<String> {
    record.get(key).and_then(coerce_text)
}

/// Sequence items of a field; a lone scalar counts as a one-item sequence.
fn items(value: Option<&Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => vec![other.clone()],
    }
}

fn text_list(value: Option<&Value>) -> Vec<String> {
    items(value).iter().filter_map(coerce_text).collect()
}

fn education_entry(value: &Value) -> Option<EducationEntry> {
    match value {
        Value::Object(map) => Some(EducationEntry::Structured {
            degree: field_text(map, "degree"),
            institution: field_text(map, "institution"),
        }),
        other => coerce_text(other).map(EducationEntry::Plain),
    }
}

fn certification_entry(value: &Value) -> Option<CertificationEntry> {
    match value {
        Value::Object(map) => Some(CertificationEntry::Structured {
            title: field_text(map, "title"),
            issuer: field_text(map, "issuer"),
            year: field_text(map, "year"),
        }),
        other => coerce_text(other).map(CertificationEntry::Plain),
    }
}

fn project_entry(value: &Value) -> Option<ProjectEntry> {
    let Value::Object(map) = value else {
        return None;
    };
    Some(ProjectEntry {
        title: field_text(map, "title"),
        description: text_list(map.get("description")),
    })
}
