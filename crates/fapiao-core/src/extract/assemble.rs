//! Document-level orchestration of the extraction pipeline.

use tracing::debug;

use crate::document::DocumentText;
use crate::models::record::InvoiceDocument;

use super::fields::parse_goods_line;
use super::merge::merge_continuations;
use super::normalize::normalize_text;
use super::section::{find_goods_section, is_total_line};

/// Extract the goods table of one document.
///
/// Goods lines are collected per page and concatenated in page order
/// before anything else happens: an item wrapped across a page break
/// must sit adjacent to its parent row when the continuation merge
/// runs. Stray total lines that slipped into the section (a page
/// boundary can put one mid-sequence) are filtered before parsing.
///
/// Returns the empty document when no page has a goods-table header or
/// when nothing survives merging; callers read both as "not a goods
/// invoice", never as an error.
pub fn extract_document(document: &DocumentText) -> InvoiceDocument {
    let mut goods_lines = Vec::new();
    for (index, page) in document.pages().iter().enumerate() {
        let section = find_goods_section(page.lines());
        debug!(page = index + 1, lines = section.len(), "goods section");
        goods_lines.extend(section);
    }

    if goods_lines.is_empty() {
        debug!("no goods-table header on any page");
        return InvoiceDocument::empty();
    }

    let parsed: Vec<_> = goods_lines
        .iter()
        .filter(|line| !is_total_line(line))
        .map(|line| parse_goods_line(line))
        .collect();

    if parsed.is_empty() {
        return InvoiceDocument::empty();
    }

    let mut items = merge_continuations(parsed);
    for (index, record) in items.iter_mut().enumerate() {
        record.item_name = normalize_text(&record.item_name);
        record.spec_model = normalize_text(&record.spec_model);
        record.sequence_number = (index + 1) as u32;
    }

    debug!(records = items.len(), "extraction finished");
    InvoiceDocument { items }
}
