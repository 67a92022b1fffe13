//! Text extraction boundary — turns a source resume file (PDF or DOCX) into
//! clean plain text for the LLM parser.
//!
//! Failure here (missing, corrupt, or unsupported file) is fatal for the
//! conversion and surfaces as [`AppError::Extraction`]; it is never silently
//! swallowed.

use std::path::Path;

use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};
use regex::Regex;
use tracing::warn;
use unicode_normalization::UnicodeNormalization;

use crate::errors::AppError;

/// Extracts clean plain text from a resume file, dispatching on extension.
pub fn extract_text(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        return Err(AppError::Extraction(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let raw = match extension.as_str() {
        "pdf" => pdf_extract::extract_text(path).map_err(|e| {
            AppError::Extraction(format!(
                "Failed to extract text from PDF {}: {e}",
                path.display()
            ))
        })?,
        "docx" => extract_docx_text(path)?,
        other => {
            return Err(AppError::Extraction(format!(
                "Unsupported file type '.{other}' — provide a PDF or DOCX file"
            )))
        }
    };

    let text = clean_text(&raw);
    if text.is_empty() {
        warn!(
            "No text extracted from {} — scanned or image-only source?",
            path.display()
        );
    }
    Ok(text)
}

/// Walks paragraphs and tables of a DOCX body, the way the original template
/// documents are structured (skill matrices live in tables).
fn extract_docx_text(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path).map_err(|e| {
        AppError::Extraction(format!("Failed to read DOCX {}: {e}", path.display()))
    })?;
    let docx = read_docx(&bytes).map_err(|e| {
        AppError::Extraction(format!("Failed to read DOCX {}: {e:?}", path.display()))
    })?;

    let mut text = String::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => push_paragraph_text(p, &mut text),
            DocumentChild::Table(t) => push_table_text(t, &mut text),
            _ => {}
        }
    }
    Ok(text)
}

fn push_paragraph_text(paragraph: &Paragraph, out: &mut String) {
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    out.push_str(&t.text);
                }
            }
        }
    }
    out.push('\n');
}

fn push_table_text(table: &Table, out: &mut String) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => push_paragraph_text(p, out),
                    TableCellContent::Table(t) => push_table_text(t, out),
                    _ => {}
                }
            }
        }
    }
}

/// NFC-normalizes and tidies extracted text: PDF control characters become
/// spaces, runs of horizontal whitespace collapse, and runs of blank lines
/// collapse to a single paragraph break.
fn clean_text(raw: &str) -> String {
    let normalized: String = raw.nfc().collect();

    let re_control = Regex::new(r"[\x00-\x08\x0B-\x1F\x7F]").unwrap();
    let cleaned = re_control.replace_all(&normalized, " ");

    let re_spaces = Regex::new(r"[ \t]+").unwrap();
    let cleaned = re_spaces.replace_all(&cleaned, " ");

    let re_blank_lines = Regex::new(r"\n(\s*\n)+").unwrap();
    let cleaned = re_blank_lines.replace_all(&cleaned, "\n\n");

    cleaned.trim().to_string()
}
