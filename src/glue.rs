//! ZEI lujvo joining (`glue`, §4.6).
//!
//! Wraps [`crate::termin::Termin`] and does one-token lookahead for `ZEI`:
//! a run of `head ZEI tail [ZEI tail]...` is folded into a single
//! synthetic `BRIVLA` node whose children are the original leaves (the
//! node's own text is left unset, matching the reference, which never
//! assigns `_newstring` to a glued result).

use crate::category::{BRIVLA_509, EOT, ZEI_623};
use crate::diagnostics::Diagnostics;
use crate::termin::Termin;
use crate::token::{TokenArena, TokenId};

/// Wraps a [`Termin`], joining `ZEI`-separated runs into one `BRIVLA`.
#[derive(Debug)]
pub struct Glue {
    termin: Termin,
    cache: Option<TokenId>,
}

impl Glue {
    pub fn new(source: &str) -> Self {
        Self { termin: Termin::new(source), cache: None }
    }

    fn pull(&mut self, arena: &mut TokenArena, diagnostics: &Diagnostics) -> TokenId {
        self.termin.next(arena, diagnostics)
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
        loop {
            let lookahead = self.pull(arena, diagnostics);
            if arena.category(lookahead) != ZEI_623 {
                self.cache = Some(lookahead);
                break;
            }
            let head = result.unwrap_or(tok);
            let joined = if result.is_none() {
                arena.node(BRIVLA_509, &[head])
            } else {
                head
            };
            arena.append_child(joined, lookahead);
            let tail = self.pull(arena, diagnostics);
            arena.append_child(joined, tail);
            result = Some(joined);
        }
        result.unwrap_or(tok)
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
    fn single_zei_join_yields_one_brivla_node_with_three_children() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut glue = Glue::new("ta melbi zei prenu");
        let _ta = glue.next(&mut arena, &diagnostics);
        let _melbi = glue.next(&mut arena, &diagnostics);
        let joined = glue.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(joined), BRIVLA_509);
        let children: Vec<_> = arena.children(joined).collect();
        assert_eq!(children.len(), 3);
        assert_eq!(arena.category(children[1]), ZEI_623);
    }

    #[test]
    fn no_zei_passes_word_through_unchanged() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut glue = Glue::new("melbi");
        let word = glue.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(word), BRIVLA_509);
        assert_eq!(arena.text(word), Some("melbi"));
    }

    #[test]
    fn repeated_zei_joins_fold_into_one_node() {
        let diagnostics = diag();
        let mut arena = TokenArena::new();
        let mut glue = Glue::new("melbi zei prenu zei klama");
        let joined = glue.next(&mut arena, &diagnostics);
        assert_eq!(arena.category(joined), BRIVLA_509);
        let children: Vec<_> = arena.children(joined).collect();
        assert_eq!(children.len(), 5);
    }
}
