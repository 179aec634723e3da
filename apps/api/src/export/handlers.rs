use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::errors::AppError;
use crate::export::FALLBACK_FILE_STEM;
use crate::state::AppState;

/// RFC 5987 `attr-char`: everything outside it is percent-encoded.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// POST /api/v1/export
/// Returns the current preview as a PDF attachment. The session lock is
/// released before rendering starts.
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let surface = state.session.lock().await.surface()?;
    let pdf = state.exporter.export(surface).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&pdf.filename)),
        ],
        pdf.bytes,
    )
        .into_response())
}

/// `filename` carries an ASCII-only fallback for old clients; `filename*`
/// carries the real UTF-8 name.
fn content_disposition(filename: &str) -> String {
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii_fallback(filename),
        utf8_percent_encode(filename, ATTR_CHAR)
    )
}

fn ascii_fallback(filename: &str) -> String {
    let stem = filename.strip_suffix(".pdf").unwrap_or(filename);
    let mut ascii = String::with_capacity(stem.len());
    for c in stem.chars() {
        let c = if c.is_ascii() { c } else { '_' };
        if !(c == '_' && ascii.ends_with('_')) {
            ascii.push(c);
        }
    }
    let ascii = ascii.trim_matches('_');
    if ascii.chars().any(|c| c.is_ascii_alphanumeric()) {
        format!("{ascii}.pdf")
    } else {
        format!("{FALLBACK_FILE_STEM}.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_name_is_left_readable() {
        assert_eq!(
            content_disposition("Ada_Lovelace.pdf"),
            "attachment; filename=\"Ada_Lovelace.pdf\"; filename*=UTF-8''Ada_Lovelace.pdf"
        );
    }

    #[test]
    fn test_accented_name_is_encoded() {
        assert_eq!(
            content_disposition("José_Müller.pdf"),
            "attachment; filename=\"Jos_M_ller.pdf\"; filename*=UTF-8''Jos%C3%A9_M%C3%BCller.pdf"
        );
    }

    #[test]
    fn test_script_without_ascii_falls_back() {
        let header = content_disposition("山田_太郎.pdf");
        assert!(header.starts_with("attachment; filename=\"resume.pdf\"; "));
        assert!(header.ends_with("filename*=UTF-8''%E5%B1%B1%E7%94%B0_%E5%A4%AA%E9%83%8E.pdf"));
    }
}
