use std::ops::RangeInclusive;

/// Characters that can appear on a flashcard. The upper bound stops at U+9FA5,
/// short of the end of the CJK Unified Ideographs block, so later additions
/// (U+9FA6..=U+9FFF) and the extension blocks are never quizzed.
pub const IDEOGRAPH_RANGE: RangeInclusive<char> = '\u{4e00}'..='\u{9fa5}';

pub fn is_quizzable(ch: char) -> bool {
    IDEOGRAPH_RANGE.contains(&ch)
}

/// Every quizzable character of `text`, in order, repeats included.
pub fn extract_ideographs(text: &str) -> Vec<char> {
    text.chars().filter(|&ch| is_quizzable(ch)).collect()
}

pub fn has_ideographs(text: &str) -> bool {
    text.chars().any(is_quizzable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_ideographs_in_order() {
        let kept: String = extract_ideographs("你好 hello 123 我").into_iter().collect();
        assert_eq!(kept, "你好我");
    }

    #[test]
    fn repeated_glyphs_stay_repeated() {
        assert_eq!(extract_ideographs("人，人。大人"), vec!['人', '人', '大', '人']);
    }

    #[test]
    fn no_ideographs_yields_empty() {
        assert!(extract_ideographs("").is_empty());
        assert!(extract_ideographs("abc123").is_empty());
        assert!(extract_ideographs("，。！？「」 \n\t").is_empty());
        assert!(!has_ideographs("abc123"));
    }

    #[test]
    fn range_boundaries_are_literal() {
        assert!(is_quizzable('\u{4e00}'));
        assert!(is_quizzable('\u{9fa5}'));
        assert!(!is_quizzable('\u{4dff}'));
        assert!(!is_quizzable('\u{9fa6}'));
        assert!(!is_quizzable('\u{9fff}'));
        // Extension A and B, plus a compatibility ideograph
        assert!(!is_quizzable('\u{3400}'));
        assert!(!is_quizzable('\u{20000}'));
        assert!(!is_quizzable('\u{f900}'));
    }

    #[test]
    fn kana_and_hangul_are_dropped() {
        assert_eq!(extract_ideographs("日本語のひらがな한국어"), vec!['日', '本', '語']);
    }
}
