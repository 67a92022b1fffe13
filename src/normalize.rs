//! Record normalization — the boundary between untrusted LLM output and the
//! typed internal model.
//!
//! The raw record is adversarial by construction: fields may be missing,
//! null, mistyped, or carry unknown keys. `normalize` never fails — it
//! always returns a fully-defaulted [`ResumeModel`] — so no renderer
//! downstream ever presence-checks or type-checks anything.

use serde_json::Value;
use tracing::debug;

use crate::models::{
    Award, Certification, Contact, ContactLink, Education, Experience, Project, ResumeModel,
    SkillRow, SkillSet, MAX_SKILL_ROWS,
};

/// Normalizes a raw semi-structured record into a validated `ResumeModel`.
///
/// Tolerant by design: scalars where lists are expected become singletons,
/// null/absent lists become empty, unknown keys are ignored, and missing
/// sub-fields become empty strings. Values are treated as plain text.
pub fn normalize(raw: &Value) -> ResumeModel {
    let name = normalize_name(raw.get("name"));
    let skills = normalize_skills(raw);

    let model = ResumeModel {
        name,
        contact: normalize_contact(raw),
        strengths: normalize_strengths(raw),
        skills,
        experience: as_list(raw.get("experience"))
            .iter()
            .map(normalize_experience)
            .collect(),
        education: as_list(raw.get("education"))
            .iter()
            .map(normalize_education)
            .collect(),
        certifications: as_list(raw.get("certifications"))
            .iter()
            .map(normalize_certification)
            .collect(),
        projects: as_list(raw.get("projects"))
            .iter()
            .map(normalize_project)
            .collect(),
        awards: as_list(raw.get("awards"))
            .iter()
            .map(normalize_award)
            .collect(),
    };

    debug!(
        "Normalized record for '{}': {} experience, {} education entries",
        model.name,
        model.experience.len(),
        model.education.len()
    );

    model
}

// ────────────────────────────────────────────────────────────────────────────
// Field normalizers
// ────────────────────────────────────────────────────────────────────────────

/// Missing/null/non-string/blank → "Unknown"; otherwise trimmed and
/// title-cased for display.
fn normalize_name(value: Option<&Value>) -> String {
    match value.and_then(Value::as_str).map(str::trim) {
        Some(s) if !s.is_empty() => title_case(s),
        _ => "Unknown".to_string(),
    }
}

fn normalize_contact(raw: &Value) -> Contact {
    let mut links = Vec::new();
    for (label, key) in [("LinkedIn", "linkedin"), ("GitHub", "github")] {
        let url = as_string(raw.get(key));
        if !url.is_empty() {
            links.push(ContactLink {
                label: label.to_string(),
                url,
            });
        }
    }

    Contact {
        email: as_string(raw.get("email")),
        phone: as_string(raw.get("phone")),
        links,
    }
}

/// The upstream schema calls this field `summary`; accept `strengths` too.
/// A scalar string becomes a singleton list.
fn normalize_strengths(raw: &Value) -> Vec<String> {
    let value = raw.get("strengths").or_else(|| raw.get("summary"));
    as_string_list(value)
}

/// Skills resolve to exactly one mode.
///
/// A `skills_matrix` list of mappings wins; otherwise `skills` entries that
/// are mappings with a name/level-ish key select matrix mode, and scalar
/// entries select flat mode. Matrix mode keeps the first [`MAX_SKILL_ROWS`]
/// rows in their original order.
fn normalize_skills(raw: &Value) -> SkillSet {
    let matrix_entries: Vec<&Value> = as_list(raw.get("skills_matrix"))
        .into_iter()
        .filter(|v| looks_like_skill_row(v))
        .collect();

    if !matrix_entries.is_empty() {
        return SkillSet::Matrix(truncate_rows(&matrix_entries));
    }

    let entries = as_list(raw.get("skills"));
    let row_entries: Vec<&Value> = entries
        .iter()
        .copied()
        .filter(|v| looks_like_skill_row(v))
        .collect();

    if !row_entries.is_empty() {
        return SkillSet::Matrix(truncate_rows(&row_entries));
    }

    SkillSet::Flat(
        entries
            .iter()
            .filter_map(|v| scalar_to_string(v))
            .filter(|s| !s.is_empty())
            .collect(),
    )
}

/// A mapping qualifies as a matrix row when it carries a name-like or
/// level-like key. The upstream schema uses `skills` for the name column and
/// `proficiency` for the level column.
fn looks_like_skill_row(value: &Value) -> bool {
    value.as_object().is_some_and(|obj| {
        ["name", "skill", "skills", "level", "proficiency"]
            .iter()
            .any(|k| obj.contains_key(*k))
    })
}

fn truncate_rows(entries: &[&Value]) -> Vec<SkillRow> {
    entries
        .iter()
        .take(MAX_SKILL_ROWS)
        .map(|v| SkillRow {
            name: first_string(v, &["name", "skill", "skills"]),
            level: first_string(v, &["level", "proficiency"]),
            years: first_string(v, &["years", "years_experience"]),
        })
        .collect()
}

fn normalize_experience(value: &&Value) -> Experience {
    Experience {
        title: first_string(value, &["title", "job_title"]),
        company: first_string(value, &["company", "employer"]),
        dates: date_range(value),
        bullets: as_string_list(
            value
                .get("bullets")
                .or_else(|| value.get("description"))
                .or_else(|| value.get("Description")),
        ),
    }
}

fn normalize_education(value: &&Value) -> Education {
    let degree = first_string(value, &["degree"]);
    let major = first_string(value, &["major", "field_of_study"]);
    let degree = match (degree.is_empty(), major.is_empty()) {
        (false, false) => format!("{degree} in {major}"),
        (true, false) => major,
        _ => degree,
    };

    Education {
        degree,
        institution: first_string(value, &["institution", "university", "school"]),
        dates: date_range(value),
    }
}

fn normalize_certification(value: &&Value) -> Certification {
    Certification {
        name: first_string(value, &["name"]),
        issuer: first_string(value, &["issuer", "organization"]),
    }
}

fn normalize_project(value: &&Value) -> Project {
    Project {
        name: first_string(value, &["name", "project_name", "title"]),
        client: first_string(value, &["client", "company"]),
        dates: first_string(value, &["dates", "date_range"]),
        bullets: as_string_list(value.get("bullets").or_else(|| value.get("content"))),
        technologies: first_string(value, &["technologies"]),
        environment: first_string(value, &["environment"]),
    }
}

fn normalize_award(value: &&Value) -> Award {
    Award {
        name: first_string(value, &["name"]),
        issuer: first_string(value, &["issuer", "organization"]),
        year: first_string(value, &["year", "date"]),
    }
}

/// Accepts a preformatted `dates` string, or composes "start – end" from the
/// upstream record's split date fields.
fn date_range(value: &Value) -> String {
    let preformatted = first_string(value, &["dates", "date_range"]);
    if !preformatted.is_empty() {
        return preformatted;
    }

    let start = first_string(value, &["start_date", "start"]);
    let end = first_string(value, &["end_date", "end"]);
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start} – {end}"),
        (false, true) => start,
        (true, false) => end,
        (true, true) => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Coercion helpers
// ────────────────────────────────────────────────────────────────────────────

/// Coerces a value expected to be a list: an array yields its elements, a
/// scalar/mapping wraps into a singleton, null/absent yields empty.
fn as_list(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
    }
}

/// Coerces a value expected to be a string. Numbers and booleans are
/// stringified (the LLM sometimes returns `"years_experience": 5`); arrays
/// and mappings yield an empty string.
fn as_string(value: Option<&Value>) -> String {
    value.and_then(scalar_to_string).unwrap_or_default()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerces a value into a list of non-empty strings, wrapping scalars.
fn as_string_list(value: Option<&Value>) -> Vec<String> {
    as_list(value)
        .into_iter()
        .filter_map(scalar_to_string)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Returns the first non-empty string among the given keys of a mapping.
fn first_string(value: &Value, keys: &[&str]) -> String {
    keys.iter()
        .map(|k| as_string(value.get(k)))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

/// Capitalizes the first letter of each whitespace-separated word.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
