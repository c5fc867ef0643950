//! Tracing-backed diagnostic sink for lexical warnings and the six `-d*`
//! trace categories of [`crate::config::TraceFlags`].
//!
//! The reference implementation prints these directly to stderr from
//! whichever stage notices them (`_lex`'s cmene-substring check, `_selmao`'s
//! UNK/XAI fallback, the compounder's per-token/per-reduction trace). Here
//! each call site reports through `tracing` instead, so a host crate can
//! route, filter, or suppress diagnostics with any subscriber it likes
//! rather than being forced to scrape stdout/stderr text.

use crate::category::selmao_name;
use crate::config::TraceFlags;

/// Diagnostic sink owned by [`crate::parser::Parser`]. Stateless beyond the
/// trace flags it was built with; every method is a thin `tracing` wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    trace: TraceFlags,
}

impl Diagnostics {
    pub fn new(trace: TraceFlags) -> Self {
        Self { trace }
    }

    /// A cmavo shaped like a valid cmavo skeleton but with no assigned
    /// meaning (`UNK`), reported as it falls back to UI (§4.4).
    pub fn unknown_cmavo(&self, word: &str, line: u32, column: u32) {
        tracing::warn!(word, line, column, "unknown cmavo, treating as UI");
    }

    /// A cmavo shaped like an experimental-reservation skeleton (`XAI`),
    /// reported as it falls back to UI (§4.4).
    pub fn experimental_cmavo(&self, word: &str, line: u32, column: u32) {
        tracing::warn!(word, line, column, "experimental cmavo, treating as UI");
    }

    /// A cmene containing a substring ("la", "doi", or a bare h/w/q not
    /// preceded by a vowel) that makes it ambiguous with cmavo (§4.2). The
    /// byte offset locates the substring within `word` itself, independent
    /// of the word's line/column position in the source text.
    pub fn illegal_cmene_substring(&self, word: &str, substring: &str, offset: usize, line: u32, column: u32) {
        tracing::warn!(word, substring, offset, line, column, "illegal substring in cmene");
    }

    /// An elidable terminator synthesized by the LALR driver's error
    /// recovery (`-de`).
    pub fn elided_terminator(&self, category: i32, line: u32, column: u32) {
        if self.trace.elision {
            tracing::debug!(selmao = selmao_name(category), line, column, "elided terminator");
        }
    }

    /// Each word as it leaves the lexer (`-dv`).
    pub fn trace_word(&self, text: &str, category: i32, line: u32, column: u32) {
        if self.trace.words {
            tracing::debug!(text, selmao = selmao_name(category), line, column, "word");
        }
    }

    /// Each token entering the compounder (`-dL`).
    pub fn trace_compounder_input(&self, category: i32, line: u32, column: u32) {
        if self.trace.compounder_input {
            tracing::debug!(selmao = selmao_name(category), line, column, "compounder input");
        }
    }

    /// Each compounder reduction (`-dR`).
    pub fn trace_compounder_reduction(&self, rule: &str, category: i32) {
        if self.trace.compounder_reduction {
            tracing::debug!(rule, selmao = selmao_name(category), "compounder reduction");
        }
    }

    /// Each token entering the LALR parser (`-dl`).
    pub fn trace_lalr_input(&self, category: i32, line: u32, column: u32) {
        if self.trace.lalr_input {
            tracing::debug!(selmao = selmao_name(category), line, column, "lalr input");
        }
    }

    /// Each LALR reduction (`-dr`).
    pub fn trace_lalr_reduction(&self, rule: &str, category: i32) {
        if self.trace.lalr_reduction {
            tracing::debug!(rule, selmao = selmao_name(category), "lalr reduction");
        }
    }

    /// A recoverable syntax error, logged once per error episode before the
    /// generic pop/resync recovery starts discarding state (§4.9). Not
    /// gated by a trace flag: like the lexical warnings above, this fires
    /// unconditionally regardless of `-d*` settings.
    pub fn syntax_error(&self, line: u32, column: u32) {
        tracing::warn!(line, column, "syntax error");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_trace_flags_do_not_panic() {
        let diag = Diagnostics::new(TraceFlags::default());
        diag.trace_word("coi", crate::category::COI_519, 1, 0);
        diag.elided_terminator(crate::category::KU_556, 1, 5);
    }

    #[test]
    fn all_trace_flags_do_not_panic() {
        let diag = Diagnostics::new(TraceFlags::all());
        diag.trace_compounder_reduction("sumti", crate::category::KOHA_555);
        diag.trace_lalr_reduction("text_0", crate::category::TEXT_0);
    }
}
