//! End-of-text termination (`termin`, §4.7).
//!
//! Passes [`crate::selmao::Selmao`]'s output through unchanged, except that
//! the first end-of-text it sees is replaced with a synthesized `FAhO`
//! leaf (text `"(fa'o)"`) if the text did not already end in an explicit
//! `FAhO`. After the first `FAhO`, real or synthesized, every subsequent
//! call returns end-of-text forever, so callers never have to special-case
//! "have we already terminated."

use crate::category::{EOT, FAHO_529};
use crate::diagnostics::Diagnostics;
use crate::selmao::Selmao;
use crate::token::{TokenArena, TokenId};

/// Wraps a [`Selmao`], guaranteeing every token stream ends in `FAhO`.
#[derive(Debug)]
pub struct Termin {
    selmao: Selmao,
    last_category: i32,
}

impl Termin {
    pub fn new(source: &str) -> Self {
        Self {
            selmao: Selmao::new(source),
            last_category: crate::token::UNSET,
        }
    }

    pub fn next(&mut self, arena: &mut TokenArena, diagnostics: &Diagnostics) -> TokenId {
        if self.last_category == FAHO_529 {
            return arena.alloc(EOT, None, 0, 0);
        }
        let tok = self.selmao.next(arena, diagnostics);
        let category = arena.category(tok);
        let result = if category == EOT {
            let (line, column) = (arena.line(tok), arena.column(tok));
            arena.alloc(FAHO_529, Some("(fa'o)"), line, column)
        } else {
            tok
        };
        self.last_category = arena.category(result);
        result
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
    fn synthesizes_fao_when_text_has_none() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut termin = Termin::new("mi klama");
        let _mi = termin.next(&mut arena, &diagnostics);
        let _klama = termin.next(&mut arena, &diagnostics);
        let synthesized = termin.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(synthesized), FAHO_529);
        assert_eq!(arena.text(synthesized), Some("(fa'o)"));
    }

    #[test]
    fn returns_eot_forever_after_fao() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut termin = Termin::new("mi");
        let _mi = termin.next(&mut arena, &diagnostics);
        let _synthesized = termin.next(&mut arena, &diagnostics);
        let after = termin.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(after), EOT);
        let after2 = termin.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(after2), EOT);
    }

    #[test]
    fn does_not_duplicate_an_explicit_fao() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut termin = Termin::new("mi fa'o");
        let _mi = termin.next(&mut arena, &diagnostics);
        let explicit = termin.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(explicit), FAHO_529);
        let after = termin.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(after), EOT);
    }
}
