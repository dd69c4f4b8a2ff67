//! Whitespace and punctuation cleanup for extracted invoice text.

use super::patterns::{
    CJK_GAP, SPACE_AFTER_PAREN, SPACE_AFTER_STAR, SPACE_BEFORE_PAREN, SPACE_BEFORE_STAR,
    WHITESPACE_RUN,
};

/// Normalize a textual field extracted from page text.
///
/// PDF text extraction tends to insert spurious spaces inside CJK
/// words and around separator glyphs. Rules, in order: collapse
/// whitespace runs and trim, drop spaces adjacent to `*`/`(`/`)`,
/// then delete single gaps between adjacent CJK ideographs until
/// none remain. The result is a fixed point: normalizing twice
/// returns the same string.
pub fn normalize_text(text: &str) -> String {
    let mut cleaned = WHITESPACE_RUN.replace_all(text, " ").trim().to_string();
    cleaned = SPACE_AFTER_STAR.replace_all(&cleaned, "*").into_owned();
    cleaned = SPACE_BEFORE_STAR.replace_all(&cleaned, "*").into_owned();
    cleaned = SPACE_AFTER_PAREN.replace_all(&cleaned, "(").into_owned();
    cleaned = SPACE_BEFORE_PAREN.replace_all(&cleaned, ")").into_owned();

    // Non-overlapping replacement can leave every other gap in place
    // ("中 国 石 油" closes to "中国 石油" in one pass), so iterate.
    loop {
        let next = CJK_GAP.replace_all(&cleaned, "$1$2").into_owned();
        if next == cleaned {
            break;
        }
        cleaned = next;
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(normalize_text("  A4   打印纸  "), "A4 打印纸");
        assert_eq!(normalize_text("A4  paper  roll"), "A4 paper roll");
    }

    #[test]
    fn removes_spaces_around_separators() {
        assert_eq!(normalize_text("* 货物 *"), "*货物*");
        assert_eq!(normalize_text("( 含税 )"), "(含税)");
    }

    #[test]
    fn closes_cjk_gaps_to_fixed_point() {
        assert_eq!(normalize_text("中  国 石  油"), "中国石油");
    }

    #[test]
    fn idempotent() {
        let once = normalize_text("*办公 用品* 规格 ( 大 )");
        assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
    }
}
