//! Resume parser — turns extracted plain text into a raw semi-structured
//! record via the LLM.
//!
//! The record returned here is deliberately untyped (`serde_json::Value`):
//! the upstream service makes no contractual guarantee about field presence
//! or typing, and all typing decisions belong to the normalization boundary.

pub mod prompts;

use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::parser::prompts::{RESUME_PARSE_PROMPT_TEMPLATE, RESUME_PARSE_SYSTEM};

/// Parses raw resume text into a semi-structured record using the LLM.
pub async fn parse_record(resume_text: &str, llm: &LlmClient) -> Result<Value, AppError> {
    let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

    let record: Value = llm
        .call_json(&prompt, RESUME_PARSE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume parsing failed: {e}")))?;

    info!(
        "Parsed resume record with {} top-level fields",
        record.as_object().map(|o| o.len()).unwrap_or(0)
    );

    Ok(record)
}
