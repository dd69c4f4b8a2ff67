//! Core library for Chinese VAT invoice line-item extraction.
//!
//! This crate provides:
//! - Plain-text page input model (pages from an upstream extractor)
//! - Goods-table location and line classification heuristics
//! - Field parsing of goods lines (name, spec, unit, quantity,
//!   price, amount, tax rate, tax amount)
//! - Continuation-row merging across lines and page breaks
//! - An invoice-number pre-check for rejecting non-invoice input
//!
//! The engine is best-effort by design: invoice layouts vary enough
//! that strict validation would reject legitimate documents, so every
//! input yields either a partial record sequence or an empty document,
//! never an error.

pub mod document;
pub mod error;
pub mod extract;
pub mod models;

pub use document::{DocumentText, PageText};
pub use error::{FapiaoError, Result};
pub use extract::{extract_document, has_invoice_number};
pub use models::{InvoiceDocument, LineItemRecord};
