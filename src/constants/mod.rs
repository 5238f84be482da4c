pub mod prompts;

/// Upload ceiling for course materials and lecture files (16 MiB).
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// File extensions accepted by the material store.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "pptx", "txt"];

/// Returns the lowercased extension of a filename, if it has one.
pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("lecture.PDF"), Some("pdf".to_string()));
        assert_eq!(file_extension("notes.tar.gz"), Some("gz".to_string()));
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn test_allowed_extensions_cover_document_formats() {
        for ext in ["pdf", "docx", "pptx", "txt"] {
            assert!(ALLOWED_EXTENSIONS.contains(&ext));
        }
        assert!(!ALLOWED_EXTENSIONS.contains(&"exe"));
    }
}
