use crate::error::DownloaderError;

pub const MIN_PDF_SIZE_BYTES: usize = 1000;
pub const PDF_MAGIC_HEADER: &[u8] = b"%PDF";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Checks that a fetched body really is a price-list PDF before it is
/// allowed to touch the archive.
pub fn validate(content: &[u8], content_type: Option<&str>) -> Result<(), DownloaderError> {
    if let Some(content_type) = content_type {
        if !content_type.to_lowercase().contains(PDF_CONTENT_TYPE) {
            return Err(DownloaderError::ValidationError(format!(
                "Not a PDF file (content-type: {})",
                content_type
            )));
        }
    }

    if content.len() < MIN_PDF_SIZE_BYTES {
        return Err(DownloaderError::ValidationError(format!(
            "File too small ({} bytes)",
            content.len()
        )));
    }

    if !content.starts_with(PDF_MAGIC_HEADER) {
        return Err(DownloaderError::ValidationError(
            "Invalid PDF header".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf_body(len: usize) -> Vec<u8> {
        let mut body = b"%PDF-1.4\n".to_vec();
        body.resize(len, b'0');
        body
    }

    #[test]
    fn accepts_valid_pdf() {
        assert!(validate(&pdf_body(2048), Some("application/pdf")).is_ok());
    }

    #[test]
    fn accepts_missing_content_type() {
        assert!(validate(&pdf_body(2048), None).is_ok());
    }

    #[test]
    fn content_type_check_is_case_insensitive() {
        assert!(validate(&pdf_body(2048), Some("Application/PDF")).is_ok());
    }

    #[test]
    fn rejects_wrong_content_type() {
        let err = validate(&pdf_body(2048), Some("text/html; charset=utf-8")).unwrap_err();
        assert!(err.to_string().contains("Not a PDF file"));
    }

    #[test]
    fn rejects_truncated_body() {
        let err = validate(&pdf_body(999), None).unwrap_err();
        assert!(err.to_string().contains("File too small (999 bytes)"));
    }

    #[test]
    fn rejects_empty_body() {
        let err = validate(&[], Some("application/pdf")).unwrap_err();
        assert!(err.to_string().contains("File too small (0 bytes)"));
    }

    #[test]
    fn rejects_bad_magic_header() {
        let body = vec![b'a'; 2048];
        let err = validate(&body, Some("application/pdf")).unwrap_err();
        assert!(err.to_string().contains("Invalid PDF header"));
    }
}
