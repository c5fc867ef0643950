//! Forethought, lerfu, and indicator absorption (`fabsorb`, `lerfu`,
//! `absorb`, §4.5 and the design notes).
//!
//! Three independent one-token-lookahead stages, each wrapping the one
//! before it:
//!
//! - [`Fabsorb`] watches for a leading `BAhE` and absorbs the next
//!   (recursively fabsorbed) token into it, the wrapper taking on the
//!   absorbed token's category.
//! - [`Lerfu`] watches for a following `BU` and absorbs it, turning the
//!   host into `BY`.
//! - [`Absorb`] watches for a run of trailing `UI`/`CAI`/`Y`/`DAhO`/`FUhE`/
//!   `FUhO` indicators (with `NAI` absorbed only when it immediately
//!   follows a `UI` or `CAI`) and folds them all into the host.
//!
//! [`crate::parser::Parser`] chains them as `Absorb(Lerfu(Fabsorb(Glue)))`,
//! matching the reference's actual call order (`_absorb` calls `_lerfu`
//! calls `_fabsorb` calls `_glue`), which runs opposite to the pipeline
//! diagram's left-to-right enumeration of the same four stages.

use crate::category::{
    BAHE_503, BU_511, BY_513, CAI_515, DAHO_524, EOT, FUHE_535, FUHO_536, NAI_581, UI_612, Y_618,
};
use crate::diagnostics::Diagnostics;
use crate::glue::Glue;
use crate::token::{TokenArena, TokenId};

fn is_indicator(category: i32) -> bool {
    matches!(category, UI_612 | CAI_515 | Y_618 | DAHO_524 | FUHE_535 | FUHO_536 | NAI_581)
}

/// Wraps a [`Glue`], absorbing a leading `BAhE` into the token it governs.
#[derive(Debug)]
pub struct Fabsorb {
    glue: Glue,
}

impl Fabsorb {
    pub fn new(source: &str) -> Self {
        Self { glue: Glue::new(source) }
    }

    pub fn next(&mut self, arena: &mut TokenArena, diagnostics: &Diagnostics) -> TokenId {
        let tok = self.glue.next(arena, diagnostics);
        if arena.category(tok) != BAHE_503 {
            return tok;
        }
        let absorber = self.next(arena, diagnostics);
        if arena.category(absorber) == EOT {
            return tok;
        }
        let category = arena.category(absorber);
        arena.node(category, &[tok, absorber])
    }
}

/// Wraps a [`Fabsorb`], absorbing a following `BU` and retyping the host
/// as `BY`.
#[derive(Debug)]
pub struct Lerfu {
    fabsorb: Fabsorb,
    cache: Option<TokenId>,
}

impl Lerfu {
    pub fn new(source: &str) -> Self {
        Self { fabsorb: Fabsorb::new(source), cache: None }
    }

    fn pull(&mut self, arena: &mut TokenArena, diagnostics: &Diagnostics) -> TokenId {
        self.fabsorb.next(arena, diagnostics)
    }

    pub fn next(&mut self, arena: &mut TokenArena, diagnostics: &Diagnostics) -> TokenId {
        let tok = match self.cache.take() {
            Some(cached) => cached,
            None => self.pull(arena, diagnostics),
        };
        let lookahead = self.pull(arena, diagnostics);
        if arena.category(lookahead) == BU_511 {
            let result = arena.node(BY_513, &[tok, lookahead]);
            self.cache = None;
            return result;
        }
        self.cache = Some(lookahead);
        tok
    }
}

/// Wraps a [`Lerfu`], absorbing a run of trailing indicators into the
/// host token.
#[derive(Debug)]
pub struct Absorb {
    lerfu: Lerfu,
    cache: Option<TokenId>,
}

impl Absorb {
    pub fn new(source: &str) -> Self {
        Self { lerfu: Lerfu::new(source), cache: None }
    }

    fn pull(&mut self, arena: &mut TokenArena, diagnostics: &Diagnostics) -> TokenId {
        self.lerfu.next(arena, diagnostics)
    }

    pub fn next(&mut self, arena: &mut TokenArena, diagnostics: &Diagnostics) -> TokenId {
        let tok = match self.cache.take() {
            Some(cached) => cached,
            None => self.pull(arena, diagnostics),
        };
        if arena.category(tok) == EOT {
            return tok;
        }
        let mut result: Option<TokenId> = None;
        self.cache = Some(self.pull(arena, diagnostics));
        loop {
            let lookahead = self.cache.expect("cache is always populated before this check");
            if !is_indicator(arena.category(lookahead)) {
                break;
            }
            if arena.category(lookahead) == NAI_581 {
                let Some(current) = result else { break };
                let last_absorbed = arena.last_child(current).map(|h| arena.category(h)).unwrap_or(UNK_FALLBACK);
                if last_absorbed != UI_612 && last_absorbed != CAI_515 {
                    break;
                }
            }
            if result.is_none() {
                let fresh = arena.node(arena.category(tok), &[tok]);
                result = Some(fresh);
            }
            let current = result.expect("just set above");
            arena.append_child(current, lookahead);
            self.cache = Some(self.pull(arena, diagnostics));
        }
        result.unwrap_or(tok)
    }
}

const UNK_FALLBACK: i32 = crate::category::UNK;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{BAHE_503, COI_519};
    use crate::config::TraceFlags;

    fn diag() -> Diagnostics {
        Diagnostics::new(TraceFlags::default())
    }

    #[test]
    fn lone_word_passes_through_absorb_unchanged() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut absorb = Absorb::new("coi");
        let tok = absorb.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(tok), COI_519);
    }

    #[test]
    fn single_trailing_ui_is_absorbed() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut absorb = Absorb::new("broda ui");
        let tok = absorb.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(tok), crate::category::BRIVLA_509);
        let children: Vec<_> = arena.children(tok).collect();
        assert_eq!(children.len(), 2);
        assert_eq!(arena.category(children[1]), UI_612);
    }

    #[test]
    fn nai_after_ui_is_absorbed_but_bare_nai_is_not() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut absorb = Absorb::new("broda ui nai");
        let tok = absorb.next(&mut arena, &diagnostics);
        let children: Vec<_> = arena.children(tok).collect();
        assert_eq!(children.len(), 3);
    }

    #[test]
    fn bahe_prefix_is_absorbed_into_the_following_token() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut fabsorb = Fabsorb::new("ba'e broda");
        let tok = fabsorb.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(tok), crate::category::BRIVLA_509);
        let children: Vec<_> = arena.children(tok).collect();
        assert_eq!(children.len(), 2);
        assert_eq!(arena.category(children[0]), BAHE_503);
    }
}
