use std::panic;

use tracing::warn;

/// Extracts the text layer of a PDF, page by page in document order.
///
/// Pages without text contribute nothing. A document that cannot be decoded
/// at all (including decoder panics on malformed input) yields an empty string.
pub fn extract_pdf_text(bytes: &[u8]) -> String {
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes));

    match pages {
        Ok(Ok(pages)) => join_pages(pages),
        Ok(Err(e)) => {
            warn!("Failed to extract text from PDF: {e}");
            String::new()
        }
        Err(_) => {
            warn!("PDF decoder panicked on malformed input");
            String::new()
        }
    }
}

/// Concatenates per-page text in order, then trims.
pub fn join_pages(pages: Vec<String>) -> String {
    pages.concat().trim().to_string()
}
