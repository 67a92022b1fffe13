//! Layout engine — assembles the branded document from a normalized model.
//!
//! Sections render in a fixed, non-configurable order matching the company
//! template. The order never changes even when sections are empty; empty
//! sections are skipped entirely rather than rendered blank.

pub mod canvas;
pub mod sections;

pub use canvas::{DocumentCanvas, DocxCanvas};
pub use sections::Section;

use tracing::debug;

use crate::models::ResumeModel;

/// The template's section order. A design invariant of the branded layout —
/// do not reorder.
const SECTION_ORDER: [Section; 9] = [
    Section::Header,
    Section::Strengths,
    Section::SkillMatrix,
    Section::Certifications,
    Section::Experience,
    Section::Projects,
    Section::Education,
    Section::Awards,
    Section::Footer,
];

/// Drives the section renderers in template order against a canvas.
///
/// Holds the only piece of render-time configuration: the optional company
/// logo bytes. A single linear pass; no state crosses sections.
pub struct LayoutEngine {
    logo: Option<Vec<u8>>,
}

impl LayoutEngine {
    pub fn new(logo: Option<Vec<u8>>) -> Self {
        Self { logo }
    }

    /// Renders the full document. Empty sections are skipped without
    /// emitting a heading.
    pub fn render(&self, model: &ResumeModel, canvas: &mut dyn DocumentCanvas) {
        for section in SECTION_ORDER {
            if section.is_empty(model) {
                debug!("Skipping empty section {section:?}");
                continue;
            }
            section.render(model, self.logo.as_deref(), canvas);
        }
    }
}
