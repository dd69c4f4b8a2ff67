//! Folding wrapped continuation rows into their parent records.

use crate::models::record::LineItemRecord;

/// Reduce a parsed record sequence by merging continuation fragments.
///
/// A record is complete when any of unit / quantity / unit price /
/// amount is populated; anything else is a wrapped continuation of the
/// previous item's description. The loop carries one accumulator: a
/// complete record flushes the held one and takes its place, a
/// fragment appends its text onto the held record's spec column. A
/// fragment arriving before any complete record becomes the
/// accumulator verbatim rather than being dropped.
///
/// Output order equals input order of the complete records.
pub fn merge_continuations(records: Vec<LineItemRecord>) -> Vec<LineItemRecord> {
    let mut merged = Vec::with_capacity(records.len());
    let mut current: Option<LineItemRecord> = None;

    for record in records {
        if record.is_complete() {
            if let Some(held) = current.take() {
                merged.push(held);
            }
            current = Some(record);
            continue;
        }

        match current.as_mut() {
            Some(held) => {
                let fragment =
                    format!("{} {}", record.item_name.trim(), record.spec_model.trim());
                let fragment = fragment.trim();
                if !fragment.is_empty() {
                    if held.spec_model.is_empty() {
                        held.spec_model = fragment.to_string();
                    } else {
                        held.spec_model.push(' ');
                        held.spec_model.push_str(fragment);
                    }
                }
            }
            None => current = Some(record),
        }
    }

    if let Some(held) = current {
        merged.push(held);
    }

    merged
}
