//! Quotation filtering (`filter`, §4.3).
//!
//! Passes every lexed word through unchanged unless it is part of a `zo`,
//! `zoi`/`la'o`, or `lo'u`...`le'u` quotation, in which case the quoted
//! material is folded into a single opaque container token (category
//! `any_word`/`any_words`/`anything`) whose children carry `UNK` so that
//! later stages never try to interpret them as selma'o.
//!
//! The state machine mirrors the reference's six filter modes exactly; the
//! current mode and pending delimiter live on [`Filter`] rather than as
//! module-level statics, so parallel filters never cross-contaminate.

use crate::category::{ANYTHING_699, ANY_WORDS_697, ANY_WORD_698, EOT, UNK};
use crate::diagnostics::Diagnostics;
use crate::lex::Lexer;
use crate::token::{TokenArena, TokenId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    Zo,
    ZoiStart,
    ZoiString,
    ZoiEnd,
    Lohu,
    Lehu,
}

/// Wraps a [`Lexer`], folding `zo`/`zoi`/`la'o`/`lo'u...le'u` quotations
/// into single opaque tokens.
#[derive(Debug)]
pub struct Filter {
    lexer: Lexer,
    mode: Mode,
    pending_end: Option<TokenId>,
    delimiter_text: Option<String>,
}

impl Filter {
    pub fn new(source: &str) -> Self {
        Self {
            lexer: Lexer::new(source),
            mode: Mode::Normal,
            pending_end: None,
            delimiter_text: None,
        }
    }

    fn lex_leaf(&mut self, arena: &mut TokenArena, diagnostics: &Diagnostics) -> TokenId {
        match self.lexer.lex(diagnostics) {
            Some(word) => arena.alloc(word.category, Some(&word.text), word.line, word.column),
            None => arena.alloc(EOT, None, 0, 0),
        }
    }

    /// Returns the next filtered token.
    pub fn next(&mut self, arena: &mut TokenArena, diagnostics: &Diagnostics) -> TokenId {
        match self.mode {
            Mode::Normal => {
                let tok = self.lex_leaf(arena, diagnostics);
                if arena.category(tok) == EOT {
                    return tok;
                }
                match arena.text(tok) {
                    Some("zo") => self.mode = Mode::Zo,
                    Some("zoi") | Some("la'o") => self.mode = Mode::ZoiStart,
                    Some("lo'u") => self.mode = Mode::Lohu,
                    _ => {}
                }
                tok
            }
            Mode::Zo => {
                let tok = self.lex_leaf(arena, diagnostics);
                if arena.category(tok) == EOT {
                    return tok;
                }
                arena.set_category(tok, ANY_WORD_698);
                self.mode = Mode::Normal;
                tok
            }
            Mode::ZoiStart => {
                let tok = self.lex_leaf(arena, diagnostics);
                if arena.category(tok) == EOT {
                    return tok;
                }
                arena.set_category(tok, ANY_WORD_698);
                self.delimiter_text = arena.text(tok).map(str::to_owned);
                self.mode = Mode::ZoiString;
                tok
            }
            Mode::ZoiString => {
                let mut children = Vec::new();
                loop {
                    let tok = self.lex_leaf(arena, diagnostics);
                    if arena.category(tok) == EOT {
                        return tok;
                    }
                    if arena.text(tok) == self.delimiter_text.as_deref() {
                        self.pending_end = Some(tok);
                        break;
                    }
                    arena.set_category(tok, UNK);
                    children.push(tok);
                }
                self.mode = Mode::ZoiEnd;
                arena.node(ANYTHING_699, &children)
            }
            Mode::ZoiEnd => {
                let tok = self.pending_end.take().expect("ZoiEnd reached without a pending delimiter token");
                arena.set_category(tok, ANY_WORD_698);
                self.mode = Mode::Normal;
                tok
            }
            Mode::Lohu => {
                let mut children = Vec::new();
                let mut saw_zo = false;
                loop {
                    let tok = self.lex_leaf(arena, diagnostics);
                    if arena.category(tok) == EOT {
                        return tok;
                    }
                    let text = arena.text(tok).map(str::to_owned);
                    if !saw_zo && text.as_deref() == Some("le'u") {
                        self.pending_end = Some(tok);
                        break;
                    }
                    saw_zo = text.as_deref() == Some("zo");
                    arena.set_category(tok, UNK);
                    children.push(tok);
                }
                self.mode = Mode::Lehu;
                arena.node(ANY_WORDS_697, &children)
            }
            Mode::Lehu => {
                let tok = self.pending_end.take().expect("Lehu reached without a pending delimiter token");
                self.mode = Mode::Normal;
                tok
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TraceFlags;

    fn diag() -> Diagnostics {
        Diagnostics::new(TraceFlags::default())
    }

    #[test]
    fn zo_quotes_exactly_the_next_word() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut filter = Filter::new("zo bu'u cu broda");
        let zo = filter.next(&mut arena, &diagnostics);
        assert_eq!(arena.text(zo), Some("zo"));
        let quoted_word = filter.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(quoted_word), ANY_WORD_698);
        assert_eq!(arena.text(quoted_word), Some("bu'u"));
        let cu = filter.next(&mut arena, &diagnostics);
        assert_eq!(arena.text(cu), Some("cu"));
    }

    #[test]
    fn zoi_wraps_body_in_an_opaque_anything_node() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut filter = Filter::new("zoi gy this is text gy broda");
        let _zoi = filter.next(&mut arena, &diagnostics);
        let _open_delim = filter.next(&mut arena, &diagnostics);
        let body = filter.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(body), ANYTHING_699);
        let children: Vec<_> = arena.children(body).collect();
        assert!(children.iter().all(|c| arena.category(*c) == UNK));
        let close_delim = filter.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(close_delim), ANY_WORD_698);
    }

    #[test]
    fn lohu_lehu_wraps_body_in_opaque_any_words_node() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut filter = Filter::new("lo'u mi klama le'u broda");
        let body = filter.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(body), ANY_WORDS_697);
        let children: Vec<_> = arena.children(body).collect();
        assert_eq!(children.len(), 2);
        let lehu = filter.next(&mut arena, &diagnostics);
        assert_eq!(arena.text(lehu), Some("le'u"));
    }

    #[test]
    fn unquoted_text_passes_through_unchanged() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut filter = Filter::new("mi klama");
        let mi = filter.next(&mut arena, &diagnostics);
        assert_eq!(arena.text(mi), Some("mi"));
    }
}
