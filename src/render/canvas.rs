//! Document canvas — the styled-document primitive the section renderers
//! write into.
//!
//! `DocumentCanvas` is the seam between layout logic and the DOCX format:
//! renderers append formatted content through it, tests swap in a
//! `RecordingCanvas` to assert document structure without packing a file.

use std::io::{Seek, Write};

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, Footer, IndentLevel, Level, LevelJc, LevelText,
    NumberFormat, Numbering, NumberingId, Paragraph, Pic, Run, Shading, ShdType, Start, Table,
    TableCell, TableRow,
};

use crate::errors::AppError;

/// Brand color for the skill matrix header row (white text on purple).
const BRAND_FILL: &str = "5A2A82";

/// Half-point font sizes mirroring the branded template:
/// 14pt headings/name, 12pt body, 10pt footer.
const SIZE_TITLE: usize = 28;
const SIZE_HEADING: usize = 28;
const SIZE_BODY: usize = 24;
const SIZE_FOOTER: usize = 20;

/// Numbering id for the shared bullet list definition.
const BULLET_NUMBERING: usize = 1;

/// 1.5" in EMU — the fixed logo width from the branded template. Height
/// scales proportionally from the image's intrinsic size.
const LOGO_WIDTH_EMU: u32 = 1_371_600;

/// The capability every section renderer writes against.
pub trait DocumentCanvas {
    /// Section heading: bold, underlined, heading size.
    fn heading(&mut self, text: &str);
    /// Candidate name line: centered, bold, title size.
    fn title(&mut self, text: &str);
    /// Centered body-size line (contact details under the name).
    fn centered_line(&mut self, text: &str);
    /// Plain body paragraph.
    fn paragraph(&mut self, text: &str);
    /// Bold body paragraph (entry title lines).
    fn bold_paragraph(&mut self, text: &str);
    /// Bulleted body line.
    fn bullet(&mut self, text: &str);
    /// Fixed-column table with a branded header row.
    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]);
    /// Company logo, positioned top-right.
    fn logo_top_right(&mut self, image: &[u8]);
    /// A line in the page footer.
    fn footer_line(&mut self, text: &str);
}

/// `DocumentCanvas` backed by a `docx_rs::Docx` builder.
pub struct DocxCanvas {
    docx: Docx,
    footer_lines: Vec<String>,
}

impl DocxCanvas {
    pub fn new() -> Self {
        // One shared bullet-list numbering definition for the whole document.
        let docx = Docx::new()
            .add_abstract_numbering(
                AbstractNumbering::new(BULLET_NUMBERING).add_level(Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                )),
            )
            .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING));

        Self {
            docx,
            footer_lines: Vec::new(),
        }
    }

    fn push(&mut self, paragraph: Paragraph) {
        self.docx = std::mem::take(&mut self.docx).add_paragraph(paragraph);
    }

    /// Packs the document into the given writer. A failure here is a
    /// `RenderError`: the caller guarantees no partial file is left in a
    /// final location.
    pub fn save<W: Write + Seek>(self, writer: W) -> Result<(), AppError> {
        let mut docx = self.docx;

        if !self.footer_lines.is_empty() {
            let mut footer = Footer::new();
            for line in &self.footer_lines {
                footer = footer.add_paragraph(
                    Paragraph::new()
                        .align(AlignmentType::Center)
                        .add_run(Run::new().add_text(line.as_str()).size(SIZE_FOOTER)),
                );
            }
            docx = docx.footer(footer);
        }

        docx.build()
            .pack(writer)
            .map_err(|e| AppError::Render(format!("Failed to pack document: {e}")))
    }
}

impl Default for DocxCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentCanvas for DocxCanvas {
    fn heading(&mut self, text: &str) {
        self.push(
            Paragraph::new().add_run(
                Run::new()
                    .add_text(text)
                    .size(SIZE_HEADING)
                    .bold()
                    .underline("single"),
            ),
        );
    }

    fn title(&mut self, text: &str) {
        self.push(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(text).size(SIZE_TITLE).bold()),
        );
    }

    fn centered_line(&mut self, text: &str) {
        self.push(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(text).size(SIZE_BODY)),
        );
    }

    fn paragraph(&mut self, text: &str) {
        self.push(Paragraph::new().add_run(Run::new().add_text(text).size(SIZE_BODY)));
    }

    fn bold_paragraph(&mut self, text: &str) {
        self.push(Paragraph::new().add_run(Run::new().add_text(text).size(SIZE_BODY).bold()));
    }

    fn bullet(&mut self, text: &str) {
        self.push(
            Paragraph::new()
                .add_run(Run::new().add_text(text).size(SIZE_BODY))
                .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0)),
        );
    }

    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let header_row = TableRow::new(
            headers
                .iter()
                .map(|h| {
                    TableCell::new()
                        .shading(Shading::new().shd_type(ShdType::Clear).fill(BRAND_FILL))
                        .add_paragraph(
                            Paragraph::new().add_run(
                                Run::new()
                                    .add_text(*h)
                                    .size(SIZE_BODY)
                                    .bold()
                                    .color("FFFFFF"),
                            ),
                        )
                })
                .collect(),
        );

        let mut table_rows = vec![header_row];
        for row in rows {
            table_rows.push(TableRow::new(
                row.iter()
                    .map(|cell| {
                        TableCell::new().add_paragraph(
                            Paragraph::new()
                                .add_run(Run::new().add_text(cell.as_str()).size(SIZE_BODY)),
                        )
                    })
                    .collect(),
            ));
        }

        self.docx = std::mem::take(&mut self.docx).add_table(Table::new(table_rows));
    }

    fn logo_top_right(&mut self, image: &[u8]) {
        let pic = Pic::new(image);
        let (width, height) = scale_to_width(pic.size, LOGO_WIDTH_EMU);
        let pic = pic.size(width, height);
        self.push(
            Paragraph::new()
                .align(AlignmentType::Right)
                .add_run(Run::new().add_image(pic)),
        );
    }

    fn footer_line(&mut self, text: &str) {
        self.footer_lines.push(text.to_string());
    }
}

/// Scales an intrinsic (width, height) extent to a target width, keeping the
/// aspect ratio. A degenerate zero-width extent falls back to a square box.
fn scale_to_width(intrinsic: (u32, u32), target_width: u32) -> (u32, u32) {
    let (w, h) = intrinsic;
    if w == 0 {
        return (target_width, target_width);
    }
    let scaled_height = (h as u64 * target_width as u64 / w as u64) as u32;
    (target_width, scaled_height)
}

// ────────────────────────────────────────────────────────────────────────────
// Test double
// ────────────────────────────────────────────────────────────────────────────

/// A canvas operation recorded by [`RecordingCanvas`].
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Heading(String),
    Title(String),
    CenteredLine(String),
    Paragraph(String),
    BoldParagraph(String),
    Bullet(String),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Logo {
        bytes: usize,
    },
    FooterLine(String),
}

/// Records every canvas operation for structural assertions in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<CanvasOp>,
}

#[cfg(test)]
impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headings(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Heading(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl DocumentCanvas for RecordingCanvas {
    fn heading(&mut self, text: &str) {
        self.ops.push(CanvasOp::Heading(text.to_string()));
    }

    fn title(&mut self, text: &str) {
        self.ops.push(CanvasOp::Title(text.to_string()));
    }

    fn centered_line(&mut self, text: &str) {
        self.ops.push(CanvasOp::CenteredLine(text.to_string()));
    }

    fn paragraph(&mut self, text: &str) {
        self.ops.push(CanvasOp::Paragraph(text.to_string()));
    }

    fn bold_paragraph(&mut self, text: &str) {
        self.ops.push(CanvasOp::BoldParagraph(text.to_string()));
    }

    fn bullet(&mut self, text: &str) {
        self.ops.push(CanvasOp::Bullet(text.to_string()));
    }

    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        self.ops.push(CanvasOp::Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows.to_vec(),
        });
    }

    fn logo_top_right(&mut self, image: &[u8]) {
        self.ops.push(CanvasOp::Logo { bytes: image.len() });
    }

    fn footer_line(&mut self, text: &str) {
        self.ops.push(CanvasOp::FooterLine(text.to_string()));
    }
}
