//! Cmavo selma'o assignment (`selmao`, §4.4).
//!
//! Consumes [`crate::filter::Filter`]'s output unchanged except for leaves
//! still carrying [`crate::token::UNSET`] (a cmavo [`crate::lex::Lexer`]
//! classified but did not resolve a category for): these are looked up in
//! the skeleton table by leading-consonant class and vowel pattern. A
//! lookup that resolves to `UNK` or `XAI` is reported as a diagnostic and
//! silently treated as `UI` (indicator), matching the reference's fallback.

use crate::category::{EOT, UI_612, UNK, XAI};
use crate::cmavo_table::{consonant_class, get_vowels, lookup};
use crate::diagnostics::Diagnostics;
use crate::filter::Filter;
use crate::token::{TokenArena, TokenId, UNSET};

/// Wraps a [`Filter`], resolving cmavo categories via the skeleton table.
#[derive(Debug)]
pub struct Selmao {
    filter: Filter,
}

impl Selmao {
    pub fn new(source: &str) -> Self {
        Self { filter: Filter::new(source) }
    }

    pub fn next(&mut self, arena: &mut TokenArena, diagnostics: &Diagnostics) -> TokenId {
        let tok = self.filter.next(arena, diagnostics);
        if arena.category(tok) == EOT || arena.category(tok) != UNSET {
            return tok;
        }
        let text = arena.text(tok).unwrap_or("").to_owned();
        let mut chars = text.chars();
        let first = chars.next();
        let class = consonant_class(first).unwrap_or(0);
        let rest = if class != 0 { &text[first.map(char::len_utf8).unwrap_or(0)..] } else { text.as_str() };
        let mut vowel_index = get_vowels(rest);
        if class != 0 && vowel_index > 34 {
            vowel_index = UNK;
        }
        let mut category = if vowel_index != UNK { lookup(class, vowel_index) } else { UNK };

        let line = arena.line(tok);
        let column = arena.column(tok);
        if category == UNK {
            diagnostics.unknown_cmavo(&text, line, column);
            category = UI_612;
        } else if category == XAI {
            diagnostics.experimental_cmavo(&text, line, column);
            category = UI_612;
        }
        arena.set_category(tok, category);
        tok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{COI_519, KOHA_555};
    use crate::config::TraceFlags;

    fn diag() -> Diagnostics {
        Diagnostics::new(TraceFlags::default())
    }

    #[test]
    fn resolves_a_plain_cmavo_to_its_selmao() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut selmao = Selmao::new("coi");
        let tok = selmao.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(tok), COI_519);
    }

    #[test]
    fn resolves_a_consonant_initial_cmavo() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut selmao = Selmao::new("mi");
        let tok = selmao.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(tok), KOHA_555);
    }

    #[test]
    fn unknown_cmavo_falls_back_to_ui() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut selmao = Selmao::new("ababab");
        let tok = selmao.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(tok), UI_612);
    }

    #[test]
    fn brivla_and_cmene_pass_through_without_lookup() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut selmao = Selmao::new("klama djan");
        let brivla = selmao.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(brivla), crate::category::BRIVLA_509);
        let cmene = selmao.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(cmene), crate::category::CMENE_517);
    }
}
