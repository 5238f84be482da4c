//! Text extraction from uploaded documents.

use crate::{
    constants,
    errors::{AppError, AppResult},
};

/// Pulls plain text out of an uploaded file, dispatching on the extension.
/// Returns `Extraction` when the format is binary-only or nothing readable
/// comes out.
pub fn extract_text(filename: &str, data: &[u8]) -> AppResult<String> {
    let extension = constants::file_extension(filename)
        .ok_or_else(|| AppError::Extraction(format!("'{}' has no file extension", filename)))?;

    let text = match extension.as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Extraction(format!("PDF extraction failed: {}", e)))?,
        "txt" => String::from_utf8_lossy(data).into_owned(),
        other => {
            return Err(AppError::Extraction(format!(
                "Text extraction is not supported for '{}' files",
                other
            )));
        }
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Extraction(format!(
            "No text could be extracted from '{}'",
            filename
        )));
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txt_extraction() {
        let text = extract_text("notes.txt", b"The mitochondria is the powerhouse").unwrap();
        assert_eq!(text, "The mitochondria is the powerhouse");
    }

    #[test]
    fn test_txt_extraction_trims_whitespace() {
        let text = extract_text("notes.txt", b"  padded  \n").unwrap();
        assert_eq!(text, "padded");
    }

    #[test]
    fn test_empty_txt_fails() {
        let result = extract_text("notes.txt", b"   \n  ");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[test]
    fn test_unsupported_extension_fails() {
        let result = extract_text("slides.pptx", b"binary blob");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[test]
    fn test_missing_extension_fails() {
        let result = extract_text("README", b"text");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[test]
    fn test_garbage_pdf_fails() {
        let result = extract_text("broken.pdf", b"not really a pdf");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
