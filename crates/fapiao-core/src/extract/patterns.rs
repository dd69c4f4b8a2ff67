//! Keyword vocabularies and regex patterns for goods-table extraction.
//!
//! All vocabularies are plain ordered slices checked with
//! first-match-wins semantics; order is load-bearing for unit
//! detection (e.g. `批` shadows `批次`).

use lazy_static::lazy_static;
use regex::Regex;

/// Measurement and counting words accepted as the unit column, in
/// priority order. Tuned to the mainland-China VAT invoice layout.
pub const UNIT_KEYWORDS: &[&str] = &[
    "千克", "个", "件", "套", "台", "张", "米", "公斤", "升", "吨",
    "箱", "盒", "包", "瓶", "罐", "条", "只", "卷", "桶", "大", "袋",
    "块", "次", "批", "批次", "项",
    "枚", "支", "根", "头", "辆", "架", "艘", "本", "册", "部",
    "组", "副", "双", "对", "厘米", "毫米", "公里", "英尺", "英寸",
    "平方米", "平方英尺", "立方米", "立方厘米", "加仑", "毫升",
    "克", "毫克", "磅", "盎司", "小时", "天", "月", "年", "季度",
    "份", "页", "场", "位", "人次", "立方", "平米", "度", "千瓦时",
    "斤", "两", "㎡", "m³", "㎏", "㎞", "千米",
];

/// Column-name keywords of the goods-table header row. A line matching
/// at least [`HEADER_KEYWORD_THRESHOLD`] of these opens the section.
pub const HEADER_KEYWORDS: &[&str] = &[
    "项目名称", "规格型号", "单位", "数量", "单价", "金额", "税率",
];

/// Minimum header-keyword hits for a line to count as the table header.
pub const HEADER_KEYWORD_THRESHOLD: usize = 2;

/// Closing-total labels; combined with a ≥3 digit run they terminate
/// the goods section.
pub const TOTAL_KEYWORDS: &[&str] = &["合计", "价税合计", "小计", "总计"];

/// Footer markers (tax-amount label, currency, remarks, signatures)
/// that also terminate the section when any digit is present.
pub const FOOTER_KEYWORDS: &[&str] = &["税额", "¥", "￥", "备注", "开票人", "收款人"];

/// Window (in chars) around a unit keyword in which a digit must
/// appear for the keyword to be accepted as the unit column.
pub const UNIT_DIGIT_WINDOW: usize = 5;

lazy_static! {
    /// Tax rate literal, e.g. `13%` or `1.5%`.
    pub static ref TAX_RATE: Regex = Regex::new(r"\d+(?:\.\d+)?%").unwrap();

    /// Decimal token, e.g. `100` or `15.00` (commas stripped first).
    pub static ref NUMBER_TOKEN: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();

    /// Run of three or more digits, the "real amount" test for total lines.
    pub static ref DIGIT_RUN_3: Regex = Regex::new(r"\d{3,}").unwrap();

    /// Any digit.
    pub static ref ANY_DIGIT: Regex = Regex::new(r"\d").unwrap();

    /// Invoice-number labels followed by a digit run, matched against
    /// uppercased page text. Ordered, first match wins.
    pub static ref INVOICE_NUMBER_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"发票号码[：:\s]*[0-9]{8,12}").unwrap(),
        Regex::new(r"发票代码[：:\s]*[0-9]{10,12}").unwrap(),
        Regex::new(r"NO[.:：\s]*[0-9]{8,12}").unwrap(),
        Regex::new(r"发票号[：:\s]*[0-9]{8,12}").unwrap(),
    ];

    // Normalizer patterns (see `normalize`).
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    pub static ref SPACE_AFTER_STAR: Regex = Regex::new(r"\*\s+").unwrap();
    pub static ref SPACE_BEFORE_STAR: Regex = Regex::new(r"\s+\*").unwrap();
    pub static ref SPACE_AFTER_PAREN: Regex = Regex::new(r"\(\s+").unwrap();
    pub static ref SPACE_BEFORE_PAREN: Regex = Regex::new(r"\s+\)").unwrap();

    /// A single gap between two CJK ideographs, an artifact of PDF
    /// text extraction splitting words.
    pub static ref CJK_GAP: Regex =
        Regex::new(r"([\u{4e00}-\u{9fff}])\s+([\u{4e00}-\u{9fff}])").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_rate_pattern_matches_first_literal() {
        let m = TAX_RATE.find("数量 2 单价 3.50 税率 13% 税额 0.91").unwrap();
        assert_eq!(m.as_str(), "13%");
    }

    #[test]
    fn digit_run_requires_three_digits() {
        assert!(DIGIT_RUN_3.is_match("1500"));
        assert!(!DIGIT_RUN_3.is_match("15"));
    }

    #[test]
    fn invoice_number_patterns_are_label_anchored() {
        let text = "发票号码：20250012345";
        assert!(INVOICE_NUMBER_PATTERNS.iter().any(|p| p.is_match(text)));
        assert!(!INVOICE_NUMBER_PATTERNS.iter().any(|p| p.is_match("20250012345")));
    }
}
