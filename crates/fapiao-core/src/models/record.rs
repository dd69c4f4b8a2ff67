//! Line-item records extracted from the goods table.

use serde::{Deserialize, Serialize};

/// One row of the goods table.
///
/// All fields are literal text for fidelity to the source document;
/// numeric conversion is a downstream concern. Quantity, price and
/// amount columns are either empty or digit/decimal literals with
/// thousands separators already removed. `tax_rate` keeps its trailing
/// `%` so spreadsheet formula synthesis can strip it and divide by
/// 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemRecord {
    /// 1-based position in the final document, assigned on assembly.
    #[serde(default)]
    pub sequence_number: u32,
    /// Item name (项目名称).
    pub item_name: String,
    /// Specification / model (规格型号).
    pub spec_model: String,
    /// Unit of measure (单位).
    pub unit: String,
    /// Quantity (数量).
    pub quantity: String,
    /// Unit price (单价).
    pub unit_price: String,
    /// Line amount before tax (金额).
    pub amount: String,
    /// Tax or levy rate (税率/征收率), e.g. `13%`.
    pub tax_rate: String,
    /// Tax amount (税额).
    pub tax_amount: String,
}

impl LineItemRecord {
    /// A record is complete when any of the unit, quantity, unit price
    /// or amount columns is populated. Records failing this test are
    /// wrapped continuations of the previous row's description.
    pub fn is_complete(&self) -> bool {
        !self.unit.is_empty()
            || !self.quantity.is_empty()
            || !self.unit_price.is_empty()
            || !self.amount.is_empty()
    }
}

/// The ordered line items extracted from one source document. An empty
/// item list means "not extractable as a goods invoice" - callers
/// treat that as a status, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    /// Extracted records in output order, sequence numbers 1..N.
    pub items: Vec<LineItemRecord>,
}

impl InvoiceDocument {
    /// Empty document, the "nothing extractable" signal.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
