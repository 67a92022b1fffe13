//! The validated internal resume model.
//!
//! Everything downstream of normalization works against these types and
//! trusts them completely: every string is present (possibly empty), every
//! list is present (possibly empty), `name` is never blank. There is no
//! `Option` anywhere a renderer would have to null-check.

use serde::{Deserialize, Serialize};

/// Maximum number of rows in a matrix-mode skill table.
///
/// The branded output template has fixed vertical space for the skill matrix;
/// rows beyond this are dropped during normalization, not errored.
pub const MAX_SKILL_ROWS: usize = 10;

/// A labelled URL in the contact block (LinkedIn, GitHub, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

/// Candidate contact details. Empty strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub links: Vec<ContactLink>,
}

impl Contact {
    /// True when no sub-field carries any content.
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.phone.is_empty() && self.links.is_empty()
    }
}

/// One row of a matrix-mode skill table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRow {
    pub name: String,
    pub level: String,
    pub years: String,
}

/// Skills are in exactly one of two modes — never mixed.
///
/// Flat mode is a plain ordered list of names; matrix mode carries
/// per-skill proficiency metadata and renders as a table capped at
/// [`MAX_SKILL_ROWS`] rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkillSet {
    Flat(Vec<String>),
    Matrix(Vec<SkillRow>),
}

impl SkillSet {
    pub fn is_empty(&self) -> bool {
        match self {
            SkillSet::Flat(names) => names.is_empty(),
            SkillSet::Matrix(rows) => rows.is_empty(),
        }
    }
}

impl Default for SkillSet {
    fn default() -> Self {
        SkillSet::Flat(Vec::new())
    }
}

/// One employment entry, in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub dates: String,
    pub bullets: Vec<String>,
}

/// One education entry. `degree` already folds in the field of study
/// ("B.Sc. in Computer Science") when the upstream record provides one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub dates: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub client: String,
    pub dates: String,
    pub bullets: Vec<String>,
    pub technologies: String,
    pub environment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

/// The fully-defaulted resume model produced by normalization.
///
/// Owned exclusively by one conversion's rendering pass; nothing is shared
/// across conversions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeModel {
    /// Always non-empty; `"Unknown"` when the upstream record had no usable name.
    pub name: String,
    pub contact: Contact,
    pub strengths: Vec<String>,
    pub skills: SkillSet,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub awards: Vec<Award>,
}

impl Default for ResumeModel {
    fn default() -> Self {
        ResumeModel {
            name: "Unknown".to_string(),
            contact: Contact::default(),
            strengths: Vec::new(),
            skills: SkillSet::default(),
            experience: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            projects: Vec::new(),
            awards: Vec::new(),
        }
    }
}
