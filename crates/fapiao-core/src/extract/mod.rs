//! Goods-table extraction engine.
//!
//! A pure, synchronous text-to-record transformation: no I/O, no
//! shared state. [`extract_document`] drives the pipeline - section
//! location per page, cross-page concatenation, total-line filtering,
//! field parsing, continuation merging, field normalization, sequence
//! numbering. Every path yields either a (possibly partial) record or
//! an empty document; nothing in here returns an error.

pub mod assemble;
pub mod fields;
pub mod merge;
pub mod normalize;
pub mod patterns;
pub mod precheck;
pub mod section;

pub use assemble::extract_document;
pub use fields::parse_goods_line;
pub use merge::merge_continuations;
pub use normalize::normalize_text;
pub use precheck::has_invoice_number;
pub use section::{find_goods_section, is_end_of_goods_section, is_goods_header, is_total_line};
