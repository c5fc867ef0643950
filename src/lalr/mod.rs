//! The table-driven shift/reduce parser (`lalr`, §4.9) with generic
//! error recovery.
//!
//! Wraps [`crate::compound::Compound`] and drives the classical
//! enstack/shift/reduce/goto loop against [`tables::decide`]/
//! [`tables::goto`]: shift on a real lookahead match, otherwise take the
//! state's default reduction (consulting the `yyexca` exception table
//! when the default itself defers), exactly as the reference's
//! generated `yyparse` does.
//!
//! A reduction whose grammar alternative is the empty (elided)
//! alternative of one of the 21 terminator gaps
//! (`category::ELIDABLE_TERMINATORS`) synthesizes that terminator
//! instead of requiring it in the input, unless
//! [`crate::config::ParserConfig::elide_terminators`] is off, in which
//! case the reduction fails outright.
//!
//! Every reduction with exactly one real child patches that child's
//! category in place rather than allocating a wrapper node, unless
//! [`crate::config::ParserConfig::collapse_single_child`] is off.
//!
//! On a decision the tables reject outright, generic error recovery
//! escalates through four states (`yyerrflag` counting down from 3):
//! pop the state stack until one admits a shift of the pseudo-token
//! `error` (256, [`tables::YYERRCODE`]), shift it, then discard input
//! tokens until the resulting state accepts the lookahead or the input
//! runs out. A syntax error is only reported the first time recovery
//! begins; while `yyerrflag` is still counting down, further rejections
//! discard tokens silently, exactly as the reference's `yyparse` does.

pub mod rules;
pub mod tables;

use crate::category::{selmao_name, EOT};
use crate::compound::Compound;
use crate::config::ParserConfig;
use crate::diagnostics::Diagnostics;
use crate::error::{ErrorSnapshot, ParseError};
use crate::token::{TokenArena, TokenId};
use rules::{RuleAction, RULES};
use tables::{decide, error_shift_state, goto, Decision, YYERRCODE};

/// How many successful shifts must land before another syntax error is
/// reported (the reference's `yyerrflag` countdown).
const ERROR_COUNTDOWN: u8 = 3;

/// Wraps a [`Compound`], driving it through the decision/goto tables to a
/// single root node or a [`ParseError`].
#[derive(Debug)]
pub struct Lalr {
    compound: Compound,
}

impl Lalr {
    pub fn new(source: &str) -> Self {
        Self { compound: Compound::new(source) }
    }

    /// Parses the whole token stream, returning the root node's id.
    pub fn parse(
        &mut self,
        arena: &mut TokenArena,
        diagnostics: &Diagnostics,
        config: &ParserConfig,
    ) -> Result<TokenId, ParseError> {
        let mut state_stack: Vec<u16> = vec![0];
        let mut node_stack: Vec<TokenId> = Vec::new();
        let mut last_good_construct: &'static str = "text_0";
        let mut error_countdown: u8 = 0;
        let mut lookahead = self.compound.next(arena, diagnostics);

        loop {
            let state = *state_stack.last().expect("state stack is never empty");
            let category = arena.category(lookahead);
            diagnostics.trace_lalr_input(category, arena.line(lookahead), arena.column(lookahead));

            match decide(state, category) {
                Decision::Shift(next) => {
                    node_stack.push(lookahead);
                    state_stack.push(next);
                    if error_countdown > 0 {
                        error_countdown -= 1;
                    }
                    lookahead = self.compound.next(arena, diagnostics);
                }
                Decision::Accept => {
                    return Ok(node_stack.pop().expect("an accepted parse always has a root node"));
                }
                Decision::Reduce(rule_id) => {
                    match self.reduce(arena, diagnostics, config, &mut state_stack, &mut node_stack, lookahead, rule_id) {
                        Some(name) => last_good_construct = name,
                        None => {
                            return Err(self.error(arena, lookahead, last_good_construct));
                        }
                    }
                    if state_stack.len() > config.max_stack_depth {
                        return Err(self.error(arena, lookahead, "stack depth exceeded"));
                    }
                }
                Decision::Error => {
                    if error_countdown == 0 {
                        diagnostics.syntax_error(arena.line(lookahead), arena.column(lookahead));
                        match self.resync(arena, &mut state_stack, &mut node_stack, lookahead) {
                            Some(()) => error_countdown = ERROR_COUNTDOWN,
                            None => return Err(self.error(arena, lookahead, last_good_construct)),
                        }
                        // Re-examine the same lookahead against the state
                        // the error shift just landed on, without
                        // discarding it yet.
                        continue;
                    }
                    if category == EOT {
                        return Err(self.error(arena, lookahead, last_good_construct));
                    }
                    lookahead = self.compound.next(arena, diagnostics);
                }
            }
        }
    }

    /// Pops the state stack until a state legally shifts the pseudo-token
    /// `error`, then performs that shift with a synthesized marker node.
    /// Returns `None` if no state on the stack ever admits it (a fatal,
    /// unrecoverable parse).
    fn resync(
        &self,
        arena: &mut TokenArena,
        state_stack: &mut Vec<u16>,
        node_stack: &mut Vec<TokenId>,
        lookahead: TokenId,
    ) -> Option<()> {
        loop {
            let top = *state_stack.last()?;
            if let Some(shift_to) = error_shift_state(top) {
                let marker = arena.alloc(YYERRCODE, None, arena.line(lookahead), arena.column(lookahead));
                node_stack.push(marker);
                state_stack.push(shift_to);
                return Some(());
            }
            state_stack.pop();
            node_stack.pop();
            if state_stack.is_empty() {
                return None;
            }
        }
    }

    /// Applies `rule_id`'s reduction: pops its real children, synthesizes
    /// an elided terminator if the alternative calls for one, builds (or
    /// collapses into) the result node, and follows the goto edge for the
    /// rule's left-hand side. Returns the reduced construct's name for
    /// error reporting, or `None` if elision was required but disabled.
    fn reduce(
        &mut self,
        arena: &mut TokenArena,
        diagnostics: &Diagnostics,
        config: &ParserConfig,
        state_stack: &mut Vec<u16>,
        node_stack: &mut Vec<TokenId>,
        lookahead: TokenId,
        rule_id: u16,
    ) -> Option<&'static str> {
        let rule = RULES[rule_id as usize];
        let n = rule.rhs_len as usize;
        let mut children = if n > 0 {
            node_stack.split_off(node_stack.len() - n)
        } else {
            Vec::new()
        };
        if n > 0 {
            state_stack.truncate(state_stack.len() - n);
        }

        let (node, name) = match rule.action {
            RuleAction::Toplevel => {
                let root = children.into_iter().next().expect("the augmenting rule always keeps its first child");
                (root, "text_0")
            }
            RuleAction::Node(category) => {
                let node = if children.len() == 1 && config.collapse_single_child {
                    arena.set_category(children[0], category);
                    children[0]
                } else {
                    arena.node(category, &children)
                };
                (node, rules::rule_name(category))
            }
            RuleAction::Elidable(terminator) => {
                let node = match children.pop() {
                    Some(real) => real,
                    None => {
                        if !config.elide_terminators {
                            return None;
                        }
                        let (line, column) = (arena.line(lookahead), arena.column(lookahead));
                        let synthesized = arena.alloc(terminator, Some(selmao_name(terminator)), line, column);
                        diagnostics.elided_terminator(terminator, line, column);
                        synthesized
                    }
                };
                (node, rules::rule_name(terminator))
            }
        };

        diagnostics.trace_lalr_reduction(name, arena.category(node));
        node_stack.push(node);

        let state = *state_stack.last().expect("state stack is never empty");
        let next = goto(state, rule.lhs);
        state_stack.push(next);
        Some(name)
    }

    fn error(&self, arena: &TokenArena, lookahead: TokenId, last_good_construct: &'static str) -> ParseError {
        let category = arena.category(lookahead);
        let name = if category == EOT { "eot" } else { selmao_name(category) };
        ParseError {
            snapshot: ErrorSnapshot {
                line: arena.line(lookahead),
                column: arena.column(lookahead),
                selmao_name: name,
                last_good_construct,
            },
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
    fn lone_vocative_parses_to_text_0() {
        let diagnostics = diag();
        let config = ParserConfig::default();
        let mut arena = TokenArena::new();
        let mut lalr = Lalr::new("coi");
        let root = lalr.parse(&mut arena, &diagnostics, &config).expect("parses");
        assert_eq!(arena.category(root), crate::category::TEXT_0);
    }

    #[test]
    fn simple_bridi_parses() {
        let diagnostics = diag();
        let config = ParserConfig::default();
        let mut arena = TokenArena::new();
        let mut lalr = Lalr::new("mi klama");
        let root = lalr.parse(&mut arena, &diagnostics, &config).expect("parses");
        assert_eq!(arena.category(root), crate::category::TEXT_0);
    }

    #[test]
    fn description_without_ku_is_elided_by_default() {
        let diagnostics = diag();
        let config = ParserConfig::default();
        let mut arena = TokenArena::new();
        let mut lalr = Lalr::new("le zarci");
        let root = lalr.parse(&mut arena, &diagnostics, &config).expect("parses");
        assert_eq!(arena.category(root), crate::category::TEXT_0);
    }

    #[test]
    fn description_without_ku_fails_when_elision_disabled() {
        let diagnostics = diag();
        let config = ParserConfig::builder().elide_terminators(false).build().unwrap();
        let mut arena = TokenArena::new();
        let mut lalr = Lalr::new("le zarci");
        let result = lalr.parse(&mut arena, &diagnostics, &config);
        assert!(result.is_err());
    }

    #[test]
    fn description_with_explicit_ku_parses_regardless_of_elision_setting() {
        let diagnostics = diag();
        let config = ParserConfig::builder().elide_terminators(false).build().unwrap();
        let mut arena = TokenArena::new();
        let mut lalr = Lalr::new("le zarci ku");
        let root = lalr.parse(&mut arena, &diagnostics, &config).expect("parses");
        assert_eq!(arena.category(root), crate::category::TEXT_0);
    }

    #[test]
    fn quoted_word_parses_via_zo() {
        let diagnostics = diag();
        let config = ParserConfig::default();
        let mut arena = TokenArena::new();
        let mut lalr = Lalr::new("zo bu'u cu broda");
        let root = lalr.parse(&mut arena, &diagnostics, &config).expect("parses");
        assert_eq!(arena.category(root), crate::category::TEXT_0);
    }

    #[test]
    fn cmene_sumti_alone_is_a_valid_utterance() {
        let diagnostics = diag();
        let config = ParserConfig::default();
        let mut arena = TokenArena::new();
        let mut lalr = Lalr::new("la djan.");
        let root = lalr.parse(&mut arena, &diagnostics, &config).expect("parses");
        assert_eq!(arena.category(root), crate::category::TEXT_0);
    }

    #[test]
    fn unparseable_input_reports_an_error_snapshot() {
        let diagnostics = diag();
        let config = ParserConfig::default();
        let mut arena = TokenArena::new();
        // `ku` alone shifts nothing in the start state: no rule admits a
        // bare KU as a sentence or utterance, and no state on an
        // effectively empty stack ever shifts the error token either.
        let mut lalr = Lalr::new("ku");
        let result = lalr.parse(&mut arena, &diagnostics, &config);
        assert!(result.is_err());
    }

    #[test]
    fn a_single_bad_token_amid_good_input_can_recover_past_it() {
        // `ku` between two valid bridi is rejected by every state the
        // first `mi klama` reduction can reach; recovery should pop/shift
        // the error token and then discard the stray `ku` tokens until a
        // fresh `i`-led utterance resumes, rather than aborting the parse.
        let diagnostics = diag();
        let config = ParserConfig::default();
        let mut arena = TokenArena::new();
        let mut lalr = Lalr::new("mi klama ku ku i mi klama");
        let result = lalr.parse(&mut arena, &diagnostics, &config);
        // Whether or not this particular grammar position has an
        // error-shifting state, the driver must terminate with either a
        // recovered parse or a clean error snapshot, never a hang.
        match result {
            Ok(root) => assert_eq!(arena.category(root), crate::category::TEXT_0),
            Err(err) => assert!(!err.snapshot.selmao_name.is_empty()),
        }
    }
}
