//! PDF text extraction.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::errors::ExtractionError;
use crate::text::collapse_whitespace;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Readers accept junk before the header as long as it appears within the first 1024 bytes.
const HEADER_SEARCH_WINDOW: usize = 1024;

/// Form feed written by the decoder between pages.
const PAGE_BREAK: char = '\u{c}';

/// Pulls plain text out of PDF bytes, page by page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts and cleans the text of every page, joined by single spaces.
    ///
    /// Errors are terminal for the document: `NotPdf` without a PDF header,
    /// `Malformed` when decoding fails, `NoText` when nothing printable remains.
    pub fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        if !has_pdf_header(bytes) {
            return Err(ExtractionError::NotPdf);
        }

        // pdf-extract can panic on hostile input; contain it to this document.
        let raw = catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)))
            .map_err(|_| {
                warn!("PDF decoder panicked on a {} byte document", bytes.len());
                ExtractionError::Malformed("PDF decoder aborted".to_string())
            })?
            .map_err(|e| ExtractionError::Malformed(e.to_string()))?;

        let pages: Vec<&str> = raw.split(PAGE_BREAK).collect();
        let page_count = pages.len();
        let text = join_pages(pages);
        if text.is_empty() {
            return Err(ExtractionError::NoText);
        }

        debug!("Extracted {} chars from {page_count} PDF pages", text.len());
        Ok(text)
    }
}

fn has_pdf_header(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(HEADER_SEARCH_WINDOW)];
    window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
}

/// Cleans each page and joins the non-empty ones with a single space.
pub(crate) fn join_pages<'a, I>(pages: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    pages
        .into_iter()
        .map(clean_page_text)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces non-ASCII and control characters with spaces, then collapses whitespace.
pub(crate) fn clean_page_text(page: &str) -> String {
    let ascii: String = page
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() {
                c
            } else {
                ' '
            }
        })
        .collect();
    collapse_whitespace(&ascii)
}
