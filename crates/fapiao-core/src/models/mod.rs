//! Data models for extracted invoice content.

pub mod record;

pub use record::{InvoiceDocument, LineItemRecord};
