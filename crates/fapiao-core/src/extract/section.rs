//! Locating the goods table inside one page of invoice text.

use super::patterns::{
    ANY_DIGIT, DIGIT_RUN_3, FOOTER_KEYWORDS, HEADER_KEYWORDS, HEADER_KEYWORD_THRESHOLD,
    TOTAL_KEYWORDS,
};

/// True if the line is the goods-table header row: it must contain at
/// least two of the seven canonical column-name keywords, so a stray
/// mention of e.g. 单位 in an address block does not open a section.
pub fn is_goods_header(line: &str) -> bool {
    HEADER_KEYWORDS
        .iter()
        .filter(|kw| line.contains(*kw))
        .count()
        >= HEADER_KEYWORD_THRESHOLD
}

/// True if the line carries a closing-total keyword together with a
/// run of at least three digits (thousands separators stripped first).
pub fn is_total_line(line: &str) -> bool {
    TOTAL_KEYWORDS.iter().any(|kw| line.contains(kw))
        && DIGIT_RUN_3.is_match(&line.replace(',', ""))
}

/// True if the line terminates the goods section: either a total line,
/// or a footer marker (tax-amount label, currency symbol, remarks,
/// signature labels) accompanied by any digit.
pub fn is_end_of_goods_section(line: &str) -> bool {
    if is_total_line(line) {
        return true;
    }
    FOOTER_KEYWORDS.iter().any(|kw| line.contains(kw)) && ANY_DIGIT.is_match(line)
}

/// Collect the goods-section lines of one page.
///
/// Scans for the first header line, then collects subsequent lines
/// until the first end-of-section line or end of page. The header and
/// terminating lines are excluded. A page with no header contributes
/// nothing.
pub fn find_goods_section<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut section = Vec::new();
    let mut in_section = false;

    for line in lines {
        let line = line.as_ref();
        if !in_section {
            if is_goods_header(line) {
                in_section = true;
            }
            continue;
        }
        if is_end_of_goods_section(line) {
            break;
        }
        section.push(line.to_string());
    }

    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_needs_two_keywords() {
        assert!(is_goods_header("项目名称 规格型号 单位 数量 单价 金额 税率/征收率 税额"));
        assert!(is_goods_header("项目名称 金额"));
        assert!(!is_goods_header("项目名称"));
        assert!(!is_goods_header("购买方信息"));
    }

    #[test]
    fn total_line_needs_keyword_and_digit_run() {
        assert!(is_total_line("合计 1,500.00 195.00"));
        assert!(is_total_line("价税合计（大写）壹仟陆佰玖拾伍圆整 1695.00"));
        assert!(!is_total_line("合计 12"));
        assert!(!is_total_line("货物 1500.00"));
    }

    #[test]
    fn footer_marker_with_digit_ends_section() {
        assert!(is_end_of_goods_section("开票人：张三 2025"));
        assert!(is_end_of_goods_section("¥1695.00"));
        assert!(!is_end_of_goods_section("备注"));
    }

    #[test]
    fn section_excludes_header_and_terminator() {
        let lines = [
            "发票号码：12345678",
            "项目名称 规格型号 单位 数量 单价 金额 税率 税额",
            "办公用品 包 100 15.00 1500.00 13% 195.00",
            "合计 1500.00 195.00",
            "开票人：张三",
        ];
        let section = find_goods_section(&lines);
        assert_eq!(section, vec!["办公用品 包 100 15.00 1500.00 13% 195.00"]);
    }

    #[test]
    fn page_without_header_contributes_nothing() {
        let lines = ["购买方 某某公司", "销售方 另一公司"];
        assert!(find_goods_section(&lines).is_empty());
    }

    #[test]
    fn section_runs_to_end_of_page_without_terminator() {
        let lines = [
            "项目名称 单位 数量",
            "货物甲 台 1 100.00",
            "货物乙 台 2 200.00",
        ];
        assert_eq!(find_goods_section(&lines).len(), 2);
    }
}
