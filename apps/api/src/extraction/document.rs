//! Uploaded document handling — turns an uploaded file into plain text.
//!
//! Only PDF and UTF-8 plain text are accepted; everything downstream of this
//! module consumes plain text only.

use crate::errors::AppError;

/// Extracts plain text from an uploaded file, dispatching on the file
/// extension (case-insensitive).
pub fn extract_text(filename: &str, data: &[u8]) -> Result<String, AppError> {
    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::UnprocessableEntity(format!("Error reading PDF: {e}")))
    } else if lower.ends_with(".txt") {
        String::from_utf8(data.to_vec())
            .map_err(|_| AppError::UnprocessableEntity("File is not valid UTF-8 text".to_string()))
    } else {
        Err(AppError::Validation("Unsupported file format".to_string()))
    }
}
