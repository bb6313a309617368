/*
 * lexer.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Token definitions for mini-notation

use logos::Logos;

/// All tokens the leaf extractor distinguishes
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum MiniToken {
    // Grouping
    #[token("[")]
    OpenSequence,
    #[token("]")]
    CloseSequence,
    #[token("<")]
    OpenAlternation,
    #[token(">")]
    CloseAlternation,
    #[token("{")]
    OpenPolymeter,
    #[token("}")]
    ClosePolymeter,
    #[token("(")]
    OpenEuclid,
    #[token(")")]
    CloseEuclid,

    // Separators
    #[token(",")]
    Comma,
    #[token("|")]
    Choice,
    #[token("\"")]
    Quote,

    // Step operators
    #[token("*")]
    Fast,
    #[token("/")]
    Slow,
    #[token("@")]
    Elongate,
    #[token("!")]
    Replicate,
    #[token("?")]
    Degrade,
    #[token("%")]
    Steps,

    // Step words (catch-all for non-special characters); a backslash
    // escape belongs to the word it appears in
    #[regex(r#"([^\s\[\]<>{}(),|"*/@!?%\\]|\\.)+"#)]
    Word,
}

impl MiniToken {
    /// Check if this token opens a group
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            MiniToken::OpenSequence
                | MiniToken::OpenAlternation
                | MiniToken::OpenPolymeter
                | MiniToken::OpenEuclid
        )
    }

    /// Check if this token closes a group
    pub fn is_close(&self) -> bool {
        matches!(
            self,
            MiniToken::CloseSequence
                | MiniToken::CloseAlternation
                | MiniToken::ClosePolymeter
                | MiniToken::CloseEuclid
        )
    }

    /// Check if this token modifies the preceding step and takes an operand
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            MiniToken::Fast
                | MiniToken::Slow
                | MiniToken::Elongate
                | MiniToken::Replicate
                | MiniToken::Degrade
                | MiniToken::Steps
        )
    }
}

/// Whether a step word produces an event
pub fn is_sounding_word(word: &str) -> bool {
    if word == "~" || word == "-" {
        return false;
    }
    !word.chars().all(|c| c == '.' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<MiniToken> {
        MiniToken::lexer(source).filter_map(Result::ok).collect()
    }

    #[test]
    fn test_words_and_groups() {
        assert_eq!(
            tokens("bd [hh sn]"),
            vec![
                MiniToken::Word,
                MiniToken::OpenSequence,
                MiniToken::Word,
                MiniToken::Word,
                MiniToken::CloseSequence,
            ]
        );
    }

    #[test]
    fn test_operators_split_words() {
        assert_eq!(
            tokens("bd*2 sn:3?"),
            vec![
                MiniToken::Word,
                MiniToken::Fast,
                MiniToken::Word,
                MiniToken::Word,
                MiniToken::Degrade,
            ]
        );
    }

    #[test]
    fn test_quotes_are_tokens() {
        let mut lexer = MiniToken::lexer("\"bd\"");
        assert_eq!(lexer.next(), Some(Ok(MiniToken::Quote)));
        assert_eq!(lexer.next(), Some(Ok(MiniToken::Word)));
        assert_eq!(lexer.slice(), "bd");
        assert_eq!(lexer.next(), Some(Ok(MiniToken::Quote)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_escaped_quote_stays_in_word() {
        let mut lexer = MiniToken::lexer(r#"bd \"x sn"#);
        assert_eq!(lexer.next(), Some(Ok(MiniToken::Word)));
        assert_eq!(lexer.next(), Some(Ok(MiniToken::Word)));
        assert_eq!(lexer.slice(), r#"\"x"#);
        assert_eq!(lexer.next(), Some(Ok(MiniToken::Word)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_sounding_words() {
        assert!(is_sounding_word("bd"));
        assert!(is_sounding_word("0.25"));
        assert!(is_sounding_word("-1"));
        assert!(!is_sounding_word("~"));
        assert!(!is_sounding_word("-"));
        assert!(!is_sounding_word("."));
        assert!(!is_sounding_word("_"));
    }
}
