// Character classification for the word alphabet
//
// A word character is one of `[A-Za-z0-9_]`. Everything else separates
// tokens. The alphabet is ASCII only: non-ASCII letters are separators.

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    /// ASCII letter `A-Z` or `a-z`.
    Letter,
    /// ASCII digit `0-9`.
    Digit,
    /// The underscore, which the word alphabet treats like a letter.
    Underscore,
    Whitespace,
    /// Anything else (punctuation, symbols, non-ASCII letters).
    Separator,
}

impl CharType {
    /// Whether characters of this type belong to the word alphabet.
    pub fn is_word(self) -> bool {
        matches!(self, CharType::Letter | CharType::Digit | CharType::Underscore)
    }
}

/// Returns the character type for a given character.
pub fn get_char_type(c: char) -> CharType {
    if c.is_ascii_alphabetic() {
        CharType::Letter
    } else if c.is_ascii_digit() {
        CharType::Digit
    } else if c == '_' {
        CharType::Underscore
    } else if c.is_whitespace() {
        CharType::Whitespace
    } else {
        CharType::Separator
    }
}

/// Check whether a character belongs to the word alphabet `[A-Za-z0-9_]`.
#[inline]
pub fn is_word_char(c: char) -> bool {
    get_char_type(c).is_word()
}

// ---------------------------------------------------------------------------
// Whole-word predicates
// ---------------------------------------------------------------------------

/// Check whether `word` is non-empty and made of ASCII digits only.
///
/// Equivalent to matching `^[0-9]+$`.
pub fn is_all_digits(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// Check whether `word` starts with an ASCII digit (`1st`, `2nd`, `42`).
pub fn starts_with_digit(word: &str) -> bool {
    word.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

/// Lowercase a run of word characters.
///
/// The word alphabet is ASCII, so the simple one-to-one mapping is exact.
pub fn lower_word(word: &str) -> String {
    word.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_type_letters() {
        assert_eq!(get_char_type('A'), CharType::Letter);
        assert_eq!(get_char_type('z'), CharType::Letter);
    }

    #[test]
    fn char_type_non_ascii_letter_is_separator() {
        // ä is a letter in Unicode, but not in the word alphabet
        assert_eq!(get_char_type('\u{00E4}'), CharType::Separator);
        assert!(!is_word_char('\u{00E4}'));
    }

    #[test]
    fn char_type_digits_and_underscore() {
        assert_eq!(get_char_type('0'), CharType::Digit);
        assert_eq!(get_char_type('9'), CharType::Digit);
        assert_eq!(get_char_type('_'), CharType::Underscore);
    }

    #[test]
    fn char_type_whitespace_and_punctuation() {
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\n'), CharType::Whitespace);
        assert_eq!(get_char_type('.'), CharType::Separator);
        assert_eq!(get_char_type('-'), CharType::Separator);
        assert_eq!(get_char_type('\''), CharType::Separator);
    }

    #[test]
    fn word_types() {
        assert!(CharType::Letter.is_word());
        assert!(CharType::Digit.is_word());
        assert!(CharType::Underscore.is_word());
        assert!(!CharType::Whitespace.is_word());
        assert!(!CharType::Separator.is_word());
    }

    #[test]
    fn all_digits() {
        assert!(is_all_digits("123"));
        assert!(is_all_digits("0"));
        assert!(!is_all_digits(""));
        assert!(!is_all_digits("cat9"));
        assert!(!is_all_digits("1st"));
        assert!(!is_all_digits("1_000"));
    }

    #[test]
    fn leading_digit() {
        assert!(starts_with_digit("1st"));
        assert!(starts_with_digit("42"));
        assert!(!starts_with_digit("cat9"));
        assert!(!starts_with_digit(""));
        assert!(!starts_with_digit("_1"));
    }

    #[test]
    fn lower_word_is_ascii_lowercase() {
        assert_eq!(lower_word("Thiss"), "thiss");
        assert_eq!(lower_word("ABC_9"), "abc_9");
    }
}
