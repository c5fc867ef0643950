//! The top-level [`Parser`]: wires the full pipeline (`scanner` through
//! `lalr`) and owns the one arena, free list, push-back queue, and
//! per-stage lookahead caches a parse needs (§5's "shared resources").
//!
//! `Parser` is the crate's only public entry point; everything upstream
//! of [`crate::lalr::Lalr`] is reached only by constructing a fresh
//! pipeline per call. Binding this to an actual CLI, stdin reader, or
//! tree-dump formatter is an external collaborator's job (§1) — this
//! crate stops at a parse-tree root, a diagnostics sink, and the
//! memory-accounting totals in [`ParseStats`].

use crate::config::ParserConfig;
use crate::diagnostics::Diagnostics;
use crate::error::ParseError;
use crate::lalr::Lalr;
use crate::token::{TokenArena, TokenId};

/// Memory-accounting totals an external collaborator can report (§1's
/// "memory-accounting totals" carve-out; the original's `tokspace` and
/// `stringspace` counters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// Live tokens in the arena after the parse (`Arena::token_count()`).
    pub token_count: usize,
    /// Bytes of interned token text (`Arena::text_bytes()`).
    pub text_bytes: usize,
}

/// Owns one [`TokenArena`] and [`ParserConfig`]/[`Diagnostics`] pair.
/// Callers must not interleave `parse_str`/`parse_stdin` calls on the
/// same instance (§5); each call resets the arena first, so a prior
/// call's tree is gone once the next one starts. Use a separate
/// `Parser` per thread for concurrent parsing — it holds no lock.
#[derive(Debug)]
pub struct Parser {
    config: ParserConfig,
    diagnostics: Diagnostics,
    arena: TokenArena,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        let diagnostics = Diagnostics::new(config.trace);
        Self { config, diagnostics, arena: TokenArena::new() }
    }

    /// Clears the arena, dropping any tree from a previous call. Called
    /// automatically at the start of `parse_str`/`parse_stdin`.
    pub fn reset(&mut self) {
        self.arena.clear();
    }

    /// Parses `source` in full, returning the root node's id and a
    /// snapshot of the arena it was built in. On success, `self.arena()`
    /// holds the tree until the next call resets it.
    pub fn parse_str(&mut self, source: &str) -> Result<(TokenId, ParseStats), ParseError> {
        self.reset();
        let mut lalr = Lalr::new(source);
        let root = lalr.parse(&mut self.arena, &self.diagnostics, &self.config)?;
        Ok((root, self.stats()))
    }

    /// Parses the full contents of `source` as if it were one text,
    /// exactly as `parse_str` does. A distinct name from `parse_str`
    /// only because an external CLI reads stdin into a `String` first;
    /// the parse itself has no notion of "where the text came from."
    pub fn parse_stdin(&mut self, source: &str) -> Result<(TokenId, ParseStats), ParseError> {
        self.parse_str(source)
    }

    pub fn arena(&self) -> &TokenArena {
        &self.arena
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn stats(&self) -> ParseStats {
        ParseStats {
            token_count: self.arena.token_count(),
            text_bytes: self.arena.text_bytes(),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::TEXT_0;

    #[test]
    fn parse_str_returns_a_text_0_root() {
        let mut parser = Parser::default();
        let (root, stats) = parser.parse_str("mi klama").expect("parses");
        assert_eq!(parser.arena().category(root), TEXT_0);
        assert!(stats.token_count > 0);
    }

    #[test]
    fn reset_drops_the_previous_tree() {
        let mut parser = Parser::default();
        parser.parse_str("mi klama").expect("parses");
        let before = parser.arena().token_count();
        parser.parse_str("coi").expect("parses");
        let after = parser.arena().token_count();
        assert!(after <= before, "a shorter input should not leave more live tokens behind");
    }

    #[test]
    fn parse_stdin_behaves_like_parse_str() {
        let mut parser = Parser::default();
        let (root, _) = parser.parse_stdin("la djan.").expect("parses");
        assert_eq!(parser.arena().category(root), TEXT_0);
    }

    #[test]
    fn malformed_input_reports_a_parse_error() {
        let mut parser = Parser::default();
        let err = parser.parse_str("ku").expect_err("bare KU cannot start a sentence");
        assert!(err.diagnostic().contains("Problem with selma'o"));
    }

    #[test]
    fn stats_reports_interned_text_bytes() {
        let mut parser = Parser::default();
        let (_, stats) = parser.parse_str("mi klama").expect("parses");
        assert!(stats.text_bytes > 0);
    }
}
