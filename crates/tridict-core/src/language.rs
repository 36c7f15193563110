use tridict_types::InputLanguage;

/// Classify `input` by the scripts it contains.
///
/// Decision order, first match wins:
/// empty → Unknown, any kana → Japanese, ASCII without ideographs → English,
/// ideographs without kana → Ambiguous, anything else → Unknown.
pub fn detect(input: &str) -> InputLanguage {
    if input.is_empty() {
        return InputLanguage::Unknown;
    }

    let scripts = Scripts::scan(input);

    if scripts.hiragana || scripts.katakana {
        InputLanguage::Japanese
    } else if scripts.ascii && !scripts.cjk {
        InputLanguage::English
    } else if scripts.cjk {
        InputLanguage::Ambiguous
    } else {
        InputLanguage::Unknown
    }
}

/// Which script buckets occur in a string (presence only, not counts)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Scripts {
    hiragana: bool,
    katakana: bool,
    cjk: bool,
    ascii: bool,
}

impl Scripts {
    fn scan(text: &str) -> Self {
        let mut scripts = Scripts::default();
        for c in text.chars() {
            if is_hiragana(c) {
                scripts.hiragana = true;
            } else if is_katakana(c) {
                scripts.katakana = true;
            } else if is_cjk_unified(c) {
                scripts.cjk = true;
            } else if is_printable_ascii(c) {
                scripts.ascii = true;
            }
        }
        scripts
    }
}

pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// CJK Unified Ideographs block, shared by kanji and hanzi
pub fn is_cjk_unified(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

fn is_printable_ascii(c: char) -> bool {
    (' '..='~').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_unknown() {
        assert_eq!(detect(""), InputLanguage::Unknown);
    }

    #[test]
    fn ascii_only_is_english() {
        assert_eq!(detect("cat"), InputLanguage::English);
        assert_eq!(detect("ice cream"), InputLanguage::English);
        assert_eq!(detect("42!"), InputLanguage::English);
        assert_eq!(detect(" "), InputLanguage::English);
    }

    #[test]
    fn kana_wins_over_everything() {
        assert_eq!(detect("ねこ"), InputLanguage::Japanese);
        assert_eq!(detect("パン"), InputLanguage::Japanese);
        assert_eq!(detect("食べる"), InputLanguage::Japanese);
        assert_eq!(detect("Tシャツ"), InputLanguage::Japanese);
        assert_eq!(detect("猫 cat ねこ"), InputLanguage::Japanese);
    }

    #[test]
    fn ideographs_without_kana_are_ambiguous() {
        assert_eq!(detect("猫"), InputLanguage::Ambiguous);
        assert_eq!(detect("学校"), InputLanguage::Ambiguous);
        assert_eq!(detect("猫cat"), InputLanguage::Ambiguous);
    }

    #[test]
    fn other_scripts_are_unknown() {
        assert_eq!(detect("한국어"), InputLanguage::Unknown);
        assert_eq!(detect("кошка"), InputLanguage::Unknown);
        assert_eq!(detect("\u{3000}"), InputLanguage::Unknown);
    }

    #[test]
    fn non_ascii_latin_alongside_ascii_is_still_english() {
        assert_eq!(detect("café"), InputLanguage::English);
    }

    #[test]
    fn detection_is_repeatable() {
        for input in ["", "cat", "ねこ", "猫", "한국어"] {
            assert_eq!(detect(input), detect(input));
        }
    }

    #[test]
    fn script_ranges() {
        assert!(is_hiragana('ね'));
        assert!(is_katakana('パ'));
        assert!(!is_hiragana('パ'));
        assert!(is_cjk_unified('猫'));
        assert!(!is_cjk_unified('ね'));
    }
}
