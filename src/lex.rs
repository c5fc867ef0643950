//! Morphological word classification (`lex`, §4.2).
//!
//! Its morphological resolution is feeble by design: it can split a word
//! that is really a run of compound cmavo, but it assumes brivla and cmene
//! stand alone with no cmavo clinging to their front. That assumption holds
//! for consciously written Lojban text.
//!
//! Classification order: consonant-final words are cmene; words containing
//! a consonant cluster (two consonants in a row, ignoring `y` and `'`) are
//! brivla; everything else is a cmavo, of which only the longest
//! no-internal-consonant-start prefix is consumed, with the remainder
//! queued for the next call. This queue is a field of [`Lexer`], not a
//! hidden static, so independent lexers never share state.

use crate::category::CMENE_517;
use crate::diagnostics::Diagnostics;
use crate::scanner::Scanner;

/// A classified word awaiting selma'o assignment: `category` is either
/// [`CMENE_517`], `BRIVLA_509`, or [`crate::token::UNSET`] for a cmavo
/// still needing table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexedWord {
    pub category: i32,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

/// Wraps a [`Scanner`], splitting its words into brivla / cmene / cmavo and
/// holding back the unconsumed remainder of a compound-cmavo word between
/// calls (the reference's `_lex._word` static, made an instance field).
#[derive(Debug)]
pub struct Lexer {
    scanner: Scanner,
    pending: Option<(String, u32, u32)>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            scanner: Scanner::new(source),
            pending: None,
        }
    }

    /// Returns the next classified word, or `None` once the reference
    /// `ttype == 0` end-of-text sentinel would be produced.
    pub fn lex(&mut self, diagnostics: &Diagnostics) -> Option<LexedWord> {
        let (word, line, column) = match self.pending.take() {
            Some(w) => w,
            None => {
                let scanned = self.scanner.getword()?;
                (scanned.text, scanned.line, scanned.column)
            }
        };

        if is_cmene(&word) {
            check_cmene(&word, diagnostics, line, column);
            let lexed = LexedWord { category: CMENE_517, text: word, line, column };
            diagnostics.trace_word(&lexed.text, lexed.category, line, column);
            return Some(lexed);
        }
        if is_brivla(&word) {
            let lexed = LexedWord { category: crate::category::BRIVLA_509, text: word, line, column };
            diagnostics.trace_word(&lexed.text, lexed.category, line, column);
            return Some(lexed);
        }

        // Cmavo: take the longest prefix with no consonant at any position
        // past the first, queue the remainder for the next call.
        let chars: Vec<char> = word.chars().collect();
        let mut split = chars.len();
        for (idx, ch) in chars.iter().enumerate().skip(1) {
            if crate::category::is_consonant(*ch) {
                split = idx;
                break;
            }
        }
        let prefix: String = chars[..split].iter().collect();
        let rest: String = chars[split..].iter().collect();
        if !rest.is_empty() {
            self.pending = Some((rest, line, column + split as u32));
        }
        let lexed = LexedWord {
            category: crate::token::UNSET,
            text: prefix,
            line,
            column,
        };
        diagnostics.trace_word(&lexed.text, lexed.category, line, column);
        Some(lexed)
    }
}

/// `_isbrivla`: true if `word` contains two consecutive consonants,
/// ignoring `y` and `'`.
pub fn is_brivla(word: &str) -> bool {
    let mut last_was_consonant = false;
    for ch in word.chars() {
        if ch == 'y' || ch == '\'' {
            continue;
        }
        if crate::category::is_consonant(ch) {
            if last_was_consonant {
                return true;
            }
            last_was_consonant = true;
        } else {
            last_was_consonant = false;
        }
    }
    false
}

/// `_iscmene`: true if `word` ends in a consonant.
pub fn is_cmene(word: &str) -> bool {
    word.chars().next_back().is_some_and(crate::category::is_consonant)
}

const ILLEGAL_CMENE_SUBSTRINGS: [&str; 5] = ["la", "doi", "h", "w", "q"];

/// `_cmenecheck` for each of the five illegal substrings: a substring is
/// illegal inside a cmene only when it is not preceded by a vowel (i.e. it
/// starts the word, or the character before it is a consonant).
fn check_cmene(word: &str, diagnostics: &Diagnostics, line: u32, column: u32) {
    let chars: Vec<char> = word.chars().collect();
    for bad in ILLEGAL_CMENE_SUBSTRINGS {
        let bad_chars: Vec<char> = bad.chars().collect();
        if bad_chars.len() > chars.len() {
            continue;
        }
        for start in 0..=(chars.len() - bad_chars.len()) {
            if chars[start..start + bad_chars.len()] != bad_chars[..] {
                continue;
            }
            let preceded_by_vowel = start > 0 && crate::category::is_vowel(chars[start - 1]);
            if start == 0 || !preceded_by_vowel {
                let offset: usize = chars[..start].iter().map(|c| c.len_utf8()).sum();
                diagnostics.illegal_cmene_substring(word, bad, offset, line, column);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag() -> Diagnostics {
        Diagnostics::new(crate::config::TraceFlags::default())
    }

    #[test]
    fn consonant_final_word_is_cmene() {
        assert!(is_cmene("djan"));
        assert!(!is_cmene("klama"));
    }

    #[test]
    fn double_consonant_word_is_brivla() {
        assert!(is_brivla("klama"));
        assert!(!is_brivla("mi"));
        assert!(!is_brivla("ty'ompa"));
    }

    #[test]
    fn lexes_cmene_and_brivla_as_single_words() {
        let diagnostics = diag();
        let mut lexer = Lexer::new("djan klama");
        let first = lexer.lex(&diagnostics).unwrap();
        assert_eq!(first.category, CMENE_517);
        assert_eq!(first.text, "djan");
        let second = lexer.lex(&diagnostics).unwrap();
        assert_eq!(second.category, crate::category::BRIVLA_509);
        assert_eq!(second.text, "klama");
    }

    #[test]
    fn splits_compound_cmavo_and_queues_remainder() {
        let diagnostics = diag();
        let mut lexer = Lexer::new("kulenu");
        let first = lexer.lex(&diagnostics).unwrap();
        assert_eq!(first.text, "ku");
        let second = lexer.lex(&diagnostics).unwrap();
        assert_eq!(second.text, "le");
        let third = lexer.lex(&diagnostics).unwrap();
        assert_eq!(third.text, "nu");
    }

    #[test]
    fn end_of_input_yields_none() {
        let diagnostics = diag();
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.lex(&diagnostics), None);
    }
}
