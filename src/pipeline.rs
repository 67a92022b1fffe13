//! Conversion pipeline — one resume, start to finish.
//!
//! Flow: extract text → LLM parse → normalize → render → atomic save.
//! Each conversion is an independent unit of failure: it owns its model and
//! canvas, shares nothing, and a failure surfaces as an `AppError` without
//! affecting any other conversion a caller may be running.

use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::llm_client::LlmClient;
use crate::normalize::normalize;
use crate::parser::parse_record;
use crate::render::{DocxCanvas, LayoutEngine};
use crate::sanitize::output_filename;

/// Converts one resume file into a branded document, returning the path of
/// the written file.
pub async fn convert(input: &Path, config: &Config, llm: &LlmClient) -> Result<PathBuf, AppError> {
    info!("Extracting text from {}", input.display());
    let text = extract_text(input)?;

    info!("Parsing resume content ({} chars of text)", text.len());
    let raw = parse_record(&text, llm).await?;

    let model = normalize(&raw);
    info!("Normalized resume for '{}'", model.name);

    let logo = load_logo(config);
    let engine = LayoutEngine::new(logo);
    let mut canvas = DocxCanvas::new();
    engine.render(&model, &mut canvas);

    let filename = output_filename(&model.name);
    let output_path = save_document(canvas, &config.output_dir, &filename)?;
    info!("Wrote branded resume to {}", output_path.display());

    Ok(output_path)
}

/// Loads the configured logo. Failure is non-fatal — the header renders
/// without it.
fn load_logo(config: &Config) -> Option<Vec<u8>> {
    let path = config.logo_path.as_ref()?;
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!(
                "Could not load logo from {} ({e}) — rendering without it",
                path.display()
            );
            None
        }
    }
}

/// Packs the canvas into a temp file in the output directory, then moves it
/// into place. A failed pack leaves no partial document at the final path;
/// overwriting an existing file of the same name is last-write-wins.
fn save_document(
    canvas: DocxCanvas,
    output_dir: &Path,
    filename: &str,
) -> Result<PathBuf, AppError> {
    std::fs::create_dir_all(output_dir)?;

    let mut tmp = NamedTempFile::new_in(output_dir)?;
    canvas.save(tmp.as_file_mut())?;

    let output_path = output_dir.join(filename);
    tmp.persist(&output_path).map_err(|e| AppError::Io(e.error))?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_logo(logo_path: Option<PathBuf>) -> Config {
        Config {
            gemini_api_key: "test-key".to_string(),
            output_dir: PathBuf::from("."),
            logo_path,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_missing_logo_is_non_fatal() {
        let config = config_with_logo(Some(PathBuf::from("/nonexistent/logo.png")));
        assert!(load_logo(&config).is_none());
    }

    #[test]
    fn test_unconfigured_logo_loads_nothing() {
        let config = config_with_logo(None);
        assert!(load_logo(&config).is_none());
    }

    #[test]
    fn test_configured_logo_loads_bytes() {
        let mut logo = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut logo, b"\x89PNG fake").unwrap();
        let config = config_with_logo(Some(logo.path().to_path_buf()));
        assert_eq!(load_logo(&config).unwrap(), b"\x89PNG fake");
    }

    #[test]
    fn test_save_document_writes_file_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();

        let mut canvas = DocxCanvas::new();
        crate::render::DocumentCanvas::title(&mut canvas, "Jane Doe");
        let path = save_document(canvas, dir.path(), "Jane_Doe_resume.docx").unwrap();
        assert!(path.exists());
        let first_len = std::fs::metadata(&path).unwrap().len();
        assert!(first_len > 0);

        // Second save to the same name is last-write-wins
        let mut canvas = DocxCanvas::new();
        crate::render::DocumentCanvas::title(&mut canvas, "Jane Doe");
        crate::render::DocumentCanvas::paragraph(&mut canvas, "Another line");
        let path2 = save_document(canvas, dir.path(), "Jane_Doe_resume.docx").unwrap();
        assert_eq!(path, path2);
        assert!(path2.exists());
    }

    #[test]
    fn test_no_stray_temp_files_after_save() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = DocxCanvas::new();
        save_document(canvas, dir.path(), "out.docx").unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("out.docx")]);
    }
}
