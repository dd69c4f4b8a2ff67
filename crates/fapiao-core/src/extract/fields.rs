//! Parsing one goods-table line into a [`LineItemRecord`].

use crate::models::record::LineItemRecord;

use super::patterns::{NUMBER_TOKEN, TAX_RATE, UNIT_DIGIT_WINDOW, UNIT_KEYWORDS};

/// Position of an accepted unit keyword, in char indices of the line.
struct UnitMatch {
    keyword: &'static str,
    /// Char offset of the keyword's first char.
    start: usize,
    /// Char count of the keyword.
    len: usize,
}

/// Find the unit column: the first vocabulary keyword (in vocabulary
/// order) whose first occurrence has a digit within
/// [`UNIT_DIGIT_WINDOW`] chars on either side. The digit-proximity
/// test rejects unit words that merely appear inside an item name.
fn find_unit(chars: &[char]) -> Option<UnitMatch> {
    for keyword in UNIT_KEYWORDS.iter().copied() {
        let kw_chars: Vec<char> = keyword.chars().collect();
        let Some(start) = find_chars(chars, &kw_chars) else {
            continue;
        };
        let ctx_start = start.saturating_sub(UNIT_DIGIT_WINDOW);
        let ctx_end = (start + kw_chars.len() + UNIT_DIGIT_WINDOW).min(chars.len());
        if chars[ctx_start..ctx_end].iter().any(|c| c.is_ascii_digit()) {
            return Some(UnitMatch {
                keyword,
                start,
                len: kw_chars.len(),
            });
        }
    }
    None
}

/// First occurrence of `needle` in `haystack`, by char position.
fn find_chars(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// All decimal tokens in `text` with thousands-separator commas removed.
fn number_tokens(text: &str) -> Vec<String> {
    let stripped = text.replace(',', "");
    NUMBER_TOKEN
        .find_iter(&stripped)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parse one goods-section line into a record. Never fails: columns
/// that cannot be located are left empty and the caller decides what
/// an impoverished record means.
pub fn parse_goods_line(line: &str) -> LineItemRecord {
    let mut record = LineItemRecord::default();

    let line = line.trim();
    if line.is_empty() {
        return record;
    }

    // 1. Tax rate, e.g. "13%". First match anywhere wins.
    if let Some(m) = TAX_RATE.find(line) {
        record.tax_rate = m.as_str().to_string();
    }

    // 2. Unit column via the keyword vocabulary.
    let chars: Vec<char> = line.chars().collect();
    let unit = find_unit(&chars);
    if let Some(u) = &unit {
        record.unit = u.keyword.to_string();
    }

    // 3. Numeric tokens: strictly after the unit if one was accepted,
    //    otherwise from the whole line.
    let raw_tokens = match &unit {
        Some(u) => {
            let right: String = chars[u.start + u.len..].iter().collect();
            number_tokens(&right)
        }
        None => number_tokens(line),
    };

    // 4. The tax-rate digits also appear as a bare token next to the
    //    amount columns; drop the right-most occurrence so an earlier
    //    quantity or price that happens to share the digits survives.
    let mut tokens = raw_tokens.clone();
    if !record.tax_rate.is_empty() {
        let rate_digits = record.tax_rate.trim_end_matches('%');
        if let Some(pos) = tokens.iter().rposition(|t| t == rate_digits) {
            tokens.remove(pos);
        }
    }

    // 5. Positional column mapping, degrading with the token count.
    match tokens.len() {
        0 => {}
        1 => {
            record.amount = tokens[0].clone();
        }
        2 => {
            record.quantity = tokens[0].clone();
            record.unit_price = tokens[1].clone();
        }
        3 => {
            record.quantity = tokens[0].clone();
            record.unit_price = tokens[1].clone();
            record.amount = tokens[2].clone();
        }
        _ => {
            record.quantity = tokens[0].clone();
            record.unit_price = tokens[1].clone();
            record.amount = tokens[2].clone();
            record.tax_amount = tokens[3].clone();
        }
    }

    // 6. Name/spec from the text left of the unit (or of the first
    //    numeric token when no unit was accepted).
    let left_text = match &unit {
        Some(u) => chars[..u.start].iter().collect::<String>().trim().to_string(),
        None => {
            if raw_tokens.is_empty() {
                // No unit, no numbers: the whole line is the item name.
                record.item_name = line.to_string();
                return record;
            }
            raw_tokens
                .iter()
                .find_map(|t| line.find(t.as_str()))
                .map(|pos| line[..pos].trim().to_string())
                .unwrap_or_else(|| line.to_string())
        }
    };

    let left_text = left_text.replace("**", "");
    match left_text.split_once(' ') {
        Some((name, spec)) => {
            record.item_name = name.trim().to_string();
            record.spec_model = spec.trim().to_string();
        }
        None => {
            record.item_name = left_text.trim().to_string();
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonical_four_column_row() {
        let record = parse_goods_line("办公用品 A4打印纸 包 100 15.00 1500.00 13% 195.00");
        assert_eq!(record.item_name, "办公用品");
        assert_eq!(record.spec_model, "A4打印纸");
        assert_eq!(record.unit, "包");
        assert_eq!(record.quantity, "100");
        assert_eq!(record.unit_price, "15.00");
        assert_eq!(record.amount, "1500.00");
        assert_eq!(record.tax_rate, "13%");
        assert_eq!(record.tax_amount, "195.00");
    }

    #[test]
    fn tax_rate_token_removed_from_the_right() {
        // Quantity 13 collides with the 13% rate; the right-most
        // occurrence is the rate column, the left-most survives.
        let record = parse_goods_line("电缆 米 13 2.00 26.00 13% 3.38");
        assert_eq!(record.quantity, "13");
        assert_eq!(record.unit_price, "2.00");
        assert_eq!(record.amount, "26.00");
        assert_eq!(record.tax_amount, "3.38");
    }

    #[test]
    fn thousands_separators_are_stripped() {
        let record = parse_goods_line("钢材 吨 10 1,200.00 12,000.00 13% 1,560.00");
        assert_eq!(record.unit_price, "1200.00");
        assert_eq!(record.amount, "12000.00");
        assert_eq!(record.tax_amount, "1560.00");
    }

    #[test]
    fn unit_requires_nearby_digit() {
        // 台 appears in the name but no digit is within the window.
        let record = parse_goods_line("台式电脑专用清洁布（无尘）");
        assert_eq!(record.unit, "");
        assert_eq!(record.item_name, "台式电脑专用清洁布（无尘）");
    }

    #[test]
    fn three_tokens_leave_tax_amount_empty() {
        let record = parse_goods_line("运输服务 次 1 500.00 500.00");
        assert_eq!(record.quantity, "1");
        assert_eq!(record.unit_price, "500.00");
        assert_eq!(record.amount, "500.00");
        assert_eq!(record.tax_amount, "");
    }

    #[test]
    fn single_token_is_the_amount() {
        let record = parse_goods_line("咨询费 300.00");
        assert_eq!(record.item_name, "咨询费");
        assert_eq!(record.amount, "300.00");
        assert_eq!(record.quantity, "");
        assert_eq!(record.unit_price, "");
    }

    #[test]
    fn bare_text_line_becomes_item_name() {
        let record = parse_goods_line("  加长款  ");
        assert_eq!(record.item_name, "加长款");
        assert_eq!(record.unit, "");
        assert_eq!(record.quantity, "");
        assert_eq!(record.amount, "");
    }

    #[test]
    fn empty_line_yields_empty_record() {
        assert_eq!(parse_goods_line("   "), LineItemRecord::default());
    }

    #[test]
    fn marker_asterisks_removed_from_left_text() {
        let record = parse_goods_line("**办公用品**打印纸 盒 2 30.00 60.00");
        assert_eq!(record.item_name, "办公用品打印纸");
    }

    #[test]
    fn vocabulary_order_wins_over_line_position() {
        // 个 precedes 箱 in the vocabulary, so it is tried first even
        // though 箱 appears earlier in the line.
        let record = parse_goods_line("纸箱装货物 5 个 10.00 50.00");
        assert_eq!(record.unit, "个");
    }
}
