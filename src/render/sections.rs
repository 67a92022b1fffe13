//! Section renderers — each maps one part of the model to formatted content
//! blocks on the canvas.
//!
//! Renderers are a closed set of variants sharing one capability ("append
//! formatted content to the canvas") and carry no cross-call state. An empty
//! section is skipped entirely — no heading, no blank block — so the branded
//! template never shows visual gaps. Entries render in model order; the
//! extraction order is preserved, never re-sorted by date.

use crate::models::ResumeModel;
use crate::render::canvas::DocumentCanvas;

/// Company line placed in the page footer of every branded document.
pub const COMPANY_FOOTER: &str =
    "www.herald-consulting.com    4200 Meridian Ave N, Suite 310, Seattle, WA 98103";

/// Fixed column headers for the matrix-mode skill table.
pub const SKILL_TABLE_HEADERS: [&str; 3] = ["Skill", "Level", "Years"];

/// The closed set of document sections, dispatched in template order by the
/// layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Strengths,
    SkillMatrix,
    Certifications,
    Experience,
    Projects,
    Education,
    Awards,
    Footer,
}

impl Section {
    /// True when the section has no content and should be skipped. Header
    /// and Footer always render.
    pub fn is_empty(&self, model: &ResumeModel) -> bool {
        match self {
            Section::Header | Section::Footer => false,
            Section::Strengths => model.strengths.is_empty(),
            Section::SkillMatrix => model.skills.is_empty(),
            Section::Certifications => model.certifications.is_empty(),
            Section::Experience => model.experience.is_empty(),
            Section::Projects => model.projects.is_empty(),
            Section::Education => model.education.is_empty(),
            Section::Awards => model.awards.is_empty(),
        }
    }

    /// Appends this section's content to the canvas. Assumes a normalized
    /// model: no presence or type checks happen here.
    pub fn render(&self, model: &ResumeModel, logo: Option<&[u8]>, canvas: &mut dyn DocumentCanvas) {
        match self {
            Section::Header => render_header(model, logo, canvas),
            Section::Strengths => render_strengths(model, canvas),
            Section::SkillMatrix => render_skills(model, canvas),
            Section::Certifications => render_certifications(model, canvas),
            Section::Experience => render_experience(model, canvas),
            Section::Projects => render_projects(model, canvas),
            Section::Education => render_education(model, canvas),
            Section::Awards => render_awards(model, canvas),
            Section::Footer => render_footer(model, canvas),
        }
    }
}

fn render_header(model: &ResumeModel, logo: Option<&[u8]>, canvas: &mut dyn DocumentCanvas) {
    if let Some(image) = logo {
        canvas.logo_top_right(image);
    }
    canvas.title(&model.name);

    // Contact details centered under the name: phone, email, then links.
    // Empty sub-fields emit nothing.
    let contact = &model.contact;
    if !contact.phone.is_empty() {
        canvas.centered_line(&contact.phone);
    }
    if !contact.email.is_empty() {
        canvas.centered_line(&contact.email);
    }
    for link in &contact.links {
        canvas.centered_line(&link.url);
    }
}

fn render_strengths(model: &ResumeModel, canvas: &mut dyn DocumentCanvas) {
    canvas.heading("Candidate Strengths");
    for strength in &model.strengths {
        canvas.paragraph(strength);
    }
}

fn render_skills(model: &ResumeModel, canvas: &mut dyn DocumentCanvas) {
    use crate::models::SkillSet;

    canvas.heading("Skill Matrix");
    match &model.skills {
        SkillSet::Flat(names) => canvas.paragraph(&names.join(", ")),
        SkillSet::Matrix(rows) => {
            let table_rows: Vec<Vec<String>> = rows
                .iter()
                .map(|row| vec![row.name.clone(), row.level.clone(), row.years.clone()])
                .collect();
            canvas.table(&SKILL_TABLE_HEADERS, &table_rows);
        }
    }
}

fn render_certifications(model: &ResumeModel, canvas: &mut dyn DocumentCanvas) {
    canvas.heading("Certifications");
    for cert in &model.certifications {
        canvas.bullet(&joined_pair(&cert.name, &cert.issuer));
    }
}

fn render_experience(model: &ResumeModel, canvas: &mut dyn DocumentCanvas) {
    canvas.heading("Professional Experience");
    for exp in &model.experience {
        canvas.bold_paragraph(&entry_line(&exp.title, &exp.company, &exp.dates));
        for bullet in &exp.bullets {
            canvas.bullet(bullet);
        }
    }
}

fn render_projects(model: &ResumeModel, canvas: &mut dyn DocumentCanvas) {
    canvas.heading("Projects");
    for project in &model.projects {
        canvas.bold_paragraph(&entry_line(&project.name, &project.client, &project.dates));
        for bullet in &project.bullets {
            canvas.bullet(bullet);
        }
        if !project.technologies.is_empty() {
            canvas.paragraph(&format!("Technologies: {}", project.technologies));
        }
        if !project.environment.is_empty() {
            canvas.paragraph(&format!("Environment: {}", project.environment));
        }
    }
}

fn render_education(model: &ResumeModel, canvas: &mut dyn DocumentCanvas) {
    canvas.heading("Education");
    for edu in &model.education {
        let line = entry_line(&edu.degree, &edu.institution, &edu.dates);
        canvas.bullet(&line);
    }
}

fn render_awards(model: &ResumeModel, canvas: &mut dyn DocumentCanvas) {
    canvas.heading("Awards");
    for award in &model.awards {
        canvas.bullet(&entry_line(&award.name, &award.issuer, &award.year));
    }
}

/// Footer: contact lines first (omitting any sub-field that is empty after
/// normalization), then the fixed company line.
fn render_footer(model: &ResumeModel, canvas: &mut dyn DocumentCanvas) {
    let contact = &model.contact;
    if !contact.email.is_empty() {
        canvas.footer_line(&format!("Email: {}", contact.email));
    }
    if !contact.phone.is_empty() {
        canvas.footer_line(&format!("Phone: {}", contact.phone));
    }
    for link in &contact.links {
        canvas.footer_line(&format!("{}: {}", link.label, link.url));
    }
    canvas.footer_line(COMPANY_FOOTER);
}

/// "primary - secondary (dates)", dropping whichever parts are empty.
fn entry_line(primary: &str, secondary: &str, dates: &str) -> String {
    let mut line = joined_pair(primary, secondary);
    if !dates.is_empty() {
        if line.is_empty() {
            line = format!("({dates})");
        } else {
            line = format!("{line} ({dates})");
        }
    }
    line
}

fn joined_pair(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (false, false) => format!("{left} - {right}"),
        (false, true) => left.to_string(),
        (true, false) => right.to_string(),
        (true, true) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Award, Certification, Contact, ContactLink, Education, Experience, Project, SkillRow,
        SkillSet,
    };
    use crate::render::canvas::{CanvasOp, RecordingCanvas};

    fn model_with(f: impl FnOnce(&mut ResumeModel)) -> ResumeModel {
        let mut model = ResumeModel::default();
        f(&mut model);
        model
    }

    #[test]
    fn test_header_renders_name_without_logo() {
        let model = model_with(|m| m.name = "Jane Doe".to_string());
        let mut canvas = RecordingCanvas::new();
        Section::Header.render(&model, None, &mut canvas);
        assert_eq!(canvas.ops, vec![CanvasOp::Title("Jane Doe".to_string())]);
    }

    #[test]
    fn test_header_places_logo_before_name() {
        let model = model_with(|m| m.name = "Jane Doe".to_string());
        let logo = [0u8; 16];
        let mut canvas = RecordingCanvas::new();
        Section::Header.render(&model, Some(&logo), &mut canvas);
        assert_eq!(canvas.ops[0], CanvasOp::Logo { bytes: 16 });
        assert_eq!(canvas.ops[1], CanvasOp::Title("Jane Doe".to_string()));
    }

    #[test]
    fn test_header_contact_lines_centered_under_name() {
        let model = model_with(|m| {
            m.name = "Jane Doe".to_string();
            m.contact = Contact {
                email: "jdoe@example.com".to_string(),
                phone: "555-0100".to_string(),
                links: vec![ContactLink {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/jdoe".to_string(),
                }],
            };
        });
        let mut canvas = RecordingCanvas::new();
        Section::Header.render(&model, None, &mut canvas);
        assert_eq!(
            canvas.ops,
            vec![
                CanvasOp::Title("Jane Doe".to_string()),
                CanvasOp::CenteredLine("555-0100".to_string()),
                CanvasOp::CenteredLine("jdoe@example.com".to_string()),
                CanvasOp::CenteredLine("https://linkedin.com/in/jdoe".to_string()),
            ]
        );
    }

    #[test]
    fn test_header_with_empty_contact_emits_no_centered_lines() {
        let model = model_with(|m| m.name = "Jane Doe".to_string());
        let mut canvas = RecordingCanvas::new();
        Section::Header.render(&model, None, &mut canvas);
        assert!(!canvas
            .ops
            .iter()
            .any(|op| matches!(op, CanvasOp::CenteredLine(_))));
    }

    #[test]
    fn test_strengths_heading_then_paragraphs() {
        let model = model_with(|m| {
            m.strengths = vec!["Backend depth".to_string(), "Mentorship".to_string()]
        });
        let mut canvas = RecordingCanvas::new();
        Section::Strengths.render(&model, None, &mut canvas);
        assert_eq!(canvas.headings(), vec!["Candidate Strengths"]);
        assert_eq!(canvas.ops.len(), 3);
    }

    #[test]
    fn test_flat_skills_render_as_comma_list() {
        let model = model_with(|m| {
            m.skills = SkillSet::Flat(vec!["Python".to_string(), "SQL".to_string()])
        });
        let mut canvas = RecordingCanvas::new();
        Section::SkillMatrix.render(&model, None, &mut canvas);
        assert!(canvas
            .ops
            .contains(&CanvasOp::Paragraph("Python, SQL".to_string())));
    }

    #[test]
    fn test_matrix_skills_render_as_three_column_table() {
        let model = model_with(|m| {
            m.skills = SkillSet::Matrix(vec![SkillRow {
                name: "Rust".to_string(),
                level: "Advanced".to_string(),
                years: "5".to_string(),
            }])
        });
        let mut canvas = RecordingCanvas::new();
        Section::SkillMatrix.render(&model, None, &mut canvas);
        match &canvas.ops[1] {
            CanvasOp::Table { headers, rows } => {
                assert_eq!(headers, &["Skill", "Level", "Years"]);
                assert_eq!(rows, &[vec!["Rust", "Advanced", "5"]]);
            }
            other => panic!("expected a table op, got {other:?}"),
        }
    }

    #[test]
    fn test_experience_bold_line_then_bullets_in_model_order() {
        let model = model_with(|m| {
            m.experience = vec![
                Experience {
                    title: "Senior Engineer".to_string(),
                    company: "Acme".to_string(),
                    dates: "2020 – Present".to_string(),
                    bullets: vec!["Led migration".to_string()],
                },
                Experience {
                    title: "Engineer".to_string(),
                    company: "Initech".to_string(),
                    dates: "2016 – 2020".to_string(),
                    bullets: vec![],
                },
            ]
        });
        let mut canvas = RecordingCanvas::new();
        Section::Experience.render(&model, None, &mut canvas);
        assert_eq!(
            canvas.ops,
            vec![
                CanvasOp::Heading("Professional Experience".to_string()),
                CanvasOp::BoldParagraph("Senior Engineer - Acme (2020 – Present)".to_string()),
                CanvasOp::Bullet("Led migration".to_string()),
                CanvasOp::BoldParagraph("Engineer - Initech (2016 – 2020)".to_string()),
            ]
        );
    }

    #[test]
    fn test_education_bullets() {
        let model = model_with(|m| {
            m.education = vec![Education {
                degree: "B.Sc. in Computer Science".to_string(),
                institution: "State University".to_string(),
                dates: "2014 – 2018".to_string(),
            }]
        });
        let mut canvas = RecordingCanvas::new();
        Section::Education.render(&model, None, &mut canvas);
        assert_eq!(
            canvas.ops[1],
            CanvasOp::Bullet("B.Sc. in Computer Science - State University (2014 – 2018)".to_string())
        );
    }

    #[test]
    fn test_certifications_drop_empty_issuer() {
        let model = model_with(|m| {
            m.certifications = vec![Certification {
                name: "CKA".to_string(),
                issuer: String::new(),
            }]
        });
        let mut canvas = RecordingCanvas::new();
        Section::Certifications.render(&model, None, &mut canvas);
        assert_eq!(canvas.ops[1], CanvasOp::Bullet("CKA".to_string()));
    }

    #[test]
    fn test_projects_render_optional_technologies_line() {
        let model = model_with(|m| {
            m.projects = vec![Project {
                name: "Billing revamp".to_string(),
                client: "Acme".to_string(),
                dates: "2021-2022".to_string(),
                bullets: vec!["Migrated ledger".to_string()],
                technologies: "Rust, Postgres".to_string(),
                environment: String::new(),
            }]
        });
        let mut canvas = RecordingCanvas::new();
        Section::Projects.render(&model, None, &mut canvas);
        assert!(canvas
            .ops
            .contains(&CanvasOp::Paragraph("Technologies: Rust, Postgres".to_string())));
        assert!(!canvas
            .ops
            .iter()
            .any(|op| matches!(op, CanvasOp::Paragraph(p) if p.starts_with("Environment:"))));
    }

    #[test]
    fn test_awards_entry_line() {
        let model = model_with(|m| {
            m.awards = vec![Award {
                name: "Engineer of the Year".to_string(),
                issuer: "Acme".to_string(),
                year: "2022".to_string(),
            }]
        });
        let mut canvas = RecordingCanvas::new();
        Section::Awards.render(&model, None, &mut canvas);
        assert_eq!(
            canvas.ops[1],
            CanvasOp::Bullet("Engineer of the Year - Acme (2022)".to_string())
        );
    }

    #[test]
    fn test_footer_omits_empty_contact_fields() {
        let model = model_with(|m| {
            m.contact = Contact {
                email: "jdoe@example.com".to_string(),
                phone: String::new(),
                links: vec![ContactLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/jdoe".to_string(),
                }],
            }
        });
        let mut canvas = RecordingCanvas::new();
        Section::Footer.render(&model, None, &mut canvas);
        assert_eq!(
            canvas.ops,
            vec![
                CanvasOp::FooterLine("Email: jdoe@example.com".to_string()),
                CanvasOp::FooterLine("GitHub: https://github.com/jdoe".to_string()),
                CanvasOp::FooterLine(COMPANY_FOOTER.to_string()),
            ]
        );
    }

    #[test]
    fn test_footer_with_empty_contact_still_has_company_line() {
        let model = ResumeModel::default();
        let mut canvas = RecordingCanvas::new();
        Section::Footer.render(&model, None, &mut canvas);
        assert_eq!(
            canvas.ops,
            vec![CanvasOp::FooterLine(COMPANY_FOOTER.to_string())]
        );
    }

    #[test]
    fn test_empty_sections_report_empty() {
        let model = ResumeModel::default();
        for section in [
            Section::Strengths,
            Section::SkillMatrix,
            Section::Certifications,
            Section::Experience,
            Section::Projects,
            Section::Education,
            Section::Awards,
        ] {
            assert!(section.is_empty(&model), "{section:?} should be empty");
        }
        assert!(!Section::Header.is_empty(&model));
        assert!(!Section::Footer.is_empty(&model));
    }
}
