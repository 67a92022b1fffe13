//! Filename sanitization — derives a filesystem-safe token from the
//! candidate name.
//!
//! Pure and deterministic: the same name always yields the same token, so
//! re-running a conversion overwrites the previous output (last-write-wins).

/// Token used when the name yields nothing after sanitization.
const FALLBACK_TOKEN: &str = "candidate";

/// Derives a filesystem-safe `First_Last` token from a candidate name.
///
/// Splits on whitespace to approximate first/last name (middle names are
/// dropped), strips everything outside `[A-Za-z0-9_-]`, and collapses
/// repeated separators. An empty or fully-stripped name yields
/// `"candidate"`.
pub fn sanitize(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();

    let parts: Vec<String> = match words.as_slice() {
        [] => vec![],
        [only] => vec![sanitize_word(only)],
        [first, .., last] => vec![sanitize_word(first), sanitize_word(last)],
    }
    .into_iter()
    .filter(|p| !p.is_empty())
    .collect();

    if parts.is_empty() {
        return FALLBACK_TOKEN.to_string();
    }

    collapse_separators(&parts.join("_"))
}

/// Composes the full output file name for a candidate.
pub fn output_filename(name: &str) -> String {
    format!("{}_resume.docx", sanitize(name))
}

/// Keeps only allow-listed characters from a single word.
fn sanitize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Collapses runs of `_` or `-` into a single occurrence of the first
/// separator in the run, and trims leading/trailing separators.
fn collapse_separators(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for c in token.chars() {
        let is_sep = c == '_' || c == '-';
        let prev_sep = out.ends_with(['_', '-']);
        if is_sep && prev_sep {
            continue;
        }
        if is_sep && out.is_empty() {
            continue;
        }
        out.push(c);
    }
    while out.ends_with(['_', '-']) {
        out.pop();
    }
    out
}
