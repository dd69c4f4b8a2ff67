//! Pre-check: does this document look like a VAT invoice at all?

use crate::document::PageText;

use super::patterns::INVOICE_NUMBER_PATTERNS;

/// How many leading pages the invoice-number pre-check inspects.
const PRECHECK_PAGES: usize = 2;

/// True if any of the first two pages carries an invoice-number label
/// followed by an 8-12 digit run (10-12 for the invoice-code label).
///
/// Text is uppercased before matching so `no 12345678` and
/// `No.12345678` both hit the `NO` pattern. Patterns are tried in
/// order, first match anywhere wins. Callers use this to reject
/// non-invoice inputs before running extraction.
pub fn has_invoice_number(pages: &[PageText]) -> bool {
    for page in pages.iter().take(PRECHECK_PAGES) {
        let text = page.lines().join("\n").to_uppercase();
        if INVOICE_NUMBER_PATTERNS.iter().any(|p| p.is_match(&text)) {
            return true;
        }
    }
    false
}
