/// Derive the lookup keys for an apostrophe-separated phrase such as
/// `ai'qing`.
///
/// Variant `f` spells out the first `f` syllables and abbreviates the rest to
/// their initial letter, for `f` from 0 (all initials, `aq`) to N (full
/// pinyin, `aiqing`). A variant equal to the one before it is dropped, which
/// happens when a syllable is a single letter (`e'xi` → `ex`, `exi`).
///
/// Returns an empty list when any syllable is empty (`'a`, `a''b`, `a'`).
pub fn expand_phrase(phrase: &str) -> Vec<String> {
    let parts: Vec<&str> = phrase.split('\'').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Vec::new();
    }

    let mut variants: Vec<String> = Vec::with_capacity(parts.len() + 1);
    for full in 0..=parts.len() {
        let mut key = String::with_capacity(phrase.len());
        for (i, part) in parts.iter().enumerate() {
            if i < full {
                key.push_str(part);
            } else if let Some(initial) = part.chars().next() {
                key.push(initial);
            }
        }
        if variants.last() != Some(&key) {
            variants.push(key);
        }
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_syllables() {
        assert_eq!(expand_phrase("ai'qing"), vec!["aq", "aiq", "aiqing"]);
    }

    #[test]
    fn two_syllables_single_letter_first() {
        // "e" spelled out equals its own initial
        assert_eq!(expand_phrase("e'xi"), vec!["ex", "exi"]);
    }

    #[test]
    fn two_syllables_single_letter_last() {
        assert_eq!(expand_phrase("ni'e"), vec!["ne", "nie"]);
    }

    #[test]
    fn three_syllables() {
        assert_eq!(
            expand_phrase("zhong'hua'min"),
            vec!["zhm", "zhonghm", "zhonghuam", "zhonghuamin"]
        );
    }

    #[test]
    fn three_syllables_single_letter_middle() {
        assert_eq!(expand_phrase("xi'a'men"), vec!["xam", "xiam", "xiamen"]);
    }

    #[test]
    fn four_syllables() {
        assert_eq!(
            expand_phrase("e'xing'xun'huan"),
            vec!["exxh", "exingxh", "exingxunh", "exingxunhuan"]
        );
    }

    #[test]
    fn five_syllables_generalizes() {
        assert_eq!(
            expand_phrase("zhong'hua'ren'min'guo"),
            vec![
                "zhrmg",
                "zhonghrmg",
                "zhonghuarmg",
                "zhonghuarenmg",
                "zhonghuarenming",
                "zhonghuarenminguo",
            ]
        );
    }

    #[test]
    fn malformed_phrase_yields_nothing() {
        assert!(expand_phrase("'ai").is_empty());
        assert!(expand_phrase("ai'").is_empty());
        assert!(expand_phrase("ai''qing").is_empty());
    }
}
