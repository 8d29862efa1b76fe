//! Page-oriented access to a document's text layer
//!
//! The extractor itself only ever sees one big string; how that string is
//! obtained (which PDF engine, which tool, which settings) is the
//! caller's business. [`PageSource`] is the seam: anything that can hand
//! out per-page plain text, with engine configuration living in the
//! concrete implementation rather than in any global state.

use log::debug;
use thiserror::Error;

/// Page delimiter used by `pdftotext` and friends between pages.
pub const FORM_FEED: &str = "\u{0C}";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("page {page} out of range (document has {pages} pages)")]
    PageOutOfRange { page: usize, pages: usize },
}

/// A document whose text layer can be read one page at a time.
/// Pages are numbered from 1.
pub trait PageSource {
    fn page_count(&self) -> usize;
    fn page_text(&self, page: usize) -> Result<String, DocumentError>;
}

/// Concatenate the text of every page in order, one newline after each
/// page, producing the input expected by the schedule extractor.
pub fn collect_full_text(source: &dyn PageSource) -> Result<String, DocumentError> {
    let pages = source.page_count();
    debug!("collecting text from {} page(s)", pages);

    let mut full_text = String::new();
    for page in 1..=pages {
        full_text.push_str(&source.page_text(page)?);
        full_text.push('\n');
    }
    Ok(full_text)
}

/// An already-extracted text layer held in memory, split into pages on a
/// delimiter. The default delimiter is the form feed that `pdftotext`
/// emits between pages.
#[derive(Debug)]
pub struct TextPages {
    pages: Vec<String>,
}

impl TextPages {
    pub fn new(text: &str) -> Self {
        Self::with_delimiter(text, FORM_FEED)
    }

    pub fn with_delimiter(text: &str, delimiter: &str) -> Self {
        let pages = text.split(delimiter).map(str::to_string).collect();
        Self { pages }
    }
}

impl PageSource for TextPages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, page: usize) -> Result<String, DocumentError> {
        if page == 0 || page > self.pages.len() {
            return Err(DocumentError::PageOutOfRange { page, pages: self.pages.len() });
        }
        Ok(self.pages[page - 1].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_feed_splits_pages() {
        let source = TextPages::new("page one\u{0C}page two");
        assert_eq!(source.page_count(), 2);
        assert_eq!(source.page_text(2).unwrap(), "page two");
    }

    #[test]
    fn test_collect_joins_pages_with_newlines() {
        let source = TextPages::new("one\u{0C}two");
        let text = collect_full_text(&source).unwrap();
        assert_eq!(text, "one\ntwo\n");
    }

    #[test]
    fn test_page_out_of_range() {
        let source = TextPages::new("only page");
        assert!(source.page_text(0).is_err());
        assert!(source.page_text(2).is_err());
    }

    #[test]
    fn test_custom_delimiter() {
        let source = TextPages::with_delimiter("a---b---c", "---");
        assert_eq!(source.page_count(), 3);
        assert_eq!(source.page_text(3).unwrap(), "c");
    }
}
