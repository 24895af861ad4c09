/// A dictionary line split into its Hanzi text and syllable run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub hanzi: &'a str,
    /// Lowercase letters and apostrophes, e.g. `ai'qing`.
    pub syllables: &'a str,
}

impl ParsedLine<'_> {
    pub fn is_phrase(&self) -> bool {
        self.syllables.contains('\'')
    }
}

fn is_syllable_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b == b'\''
}

/// Split `<hanzi><syllables>` at the first run of `[a-z']`.
///
/// Returns `None` when the line has no such run or nothing precedes it.
/// Multi-byte UTF-8 sequences never contain ASCII bytes, so scanning bytes
/// is safe.
pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let bytes = line.as_bytes();
    let start = bytes.iter().position(|&b| is_syllable_byte(b))?;
    let len = bytes[start..]
        .iter()
        .take_while(|&&b| is_syllable_byte(b))
        .count();

    let hanzi = line[..start].trim();
    if hanzi.is_empty() {
        return None;
    }
    Some(ParsedLine {
        hanzi,
        syllables: &line[start..start + len],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character() {
        let p = parse_line("爱ai").unwrap();
        assert_eq!(p.hanzi, "爱");
        assert_eq!(p.syllables, "ai");
        assert!(!p.is_phrase());
    }

    #[test]
    fn phrase_with_trailing_text() {
        let p = parse_line("爱情ai'qing 12\r").unwrap();
        assert_eq!(p.hanzi, "爱情");
        assert_eq!(p.syllables, "ai'qing");
        assert!(p.is_phrase());
    }

    #[test]
    fn hanzi_is_trimmed() {
        let p = parse_line("  中国 zhong'guo").unwrap();
        assert_eq!(p.hanzi, "中国");
    }

    #[test]
    fn uppercase_stays_in_hanzi() {
        let p = parse_line("A股agu").unwrap();
        assert_eq!(p.hanzi, "A股");
        assert_eq!(p.syllables, "agu");
    }

    #[test]
    fn no_syllables() {
        assert!(parse_line("中国").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn no_hanzi() {
        assert!(parse_line("zhongguo").is_none());
        assert!(parse_line("   ai").is_none());
    }
}
