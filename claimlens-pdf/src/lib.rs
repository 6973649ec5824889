//! PDF text extraction with a two-stage strategy.
//!
//! The primary path walks pages with `lopdf` and keeps a newline between
//! pages. If the primary parser rejects the document, partial progress is
//! discarded and the whole file is re-run through `pdf-extract`, which
//! concatenates without a page separator. Failures of the secondary path
//! surface as [`PdfError`].
//!
//! An `Ok` result may still be an empty string: a document with no
//! extractable text (scanned pages, images only) is not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("pdf load failed: {0}")]
    Load(String),
    #[error("text extraction failed: {0}")]
    Extract(String),
}

/// Extract the text content of a PDF document.
pub fn extract_text(bytes: &[u8]) -> Result<String, PdfError> {
    match extract_pagewise(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::warn!(
                error = %err,
                "pagewise extraction failed, retrying with flat extractor"
            );
            extract_flat(bytes)
        }
    }
}

/// Primary path: page-by-page extraction, newline-joined.
fn extract_pagewise(bytes: &[u8]) -> Result<String, PdfError> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| PdfError::Load(e.to_string()))?;

    let mut text = String::new();
    for page_no in doc.get_pages().keys() {
        let page_text = doc
            .extract_text(&[*page_no])
            .map_err(|e| PdfError::Extract(e.to_string()))?;
        if !page_text.is_empty() {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    Ok(text)
}

/// Secondary path: whole-document extraction, no page separator.
fn extract_flat(bytes: &[u8]) -> Result<String, PdfError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| PdfError::Extract(e.to_string()))
}
