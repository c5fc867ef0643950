//! Typed errors. Only `ParserConfig` construction and top-level parse
//! failure are represented as `Result`/`thiserror` types (§7): everything
//! inside the pipeline itself is backtracking control flow (`Option`), not
//! exception handling, matching the reference's `None`-returning drivers.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_stack_depth must be greater than zero")]
    ZeroStackDepth,
    #[error("max_recorded_reductions must be greater than zero")]
    ZeroRecordedReductions,
}

/// The snapshot recorded when the LALR driver exhausts error recovery
/// (§7: "the parser records `(errline, errcol, errtype, errlastreduce)`").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSnapshot {
    pub line: u32,
    pub column: u32,
    pub selmao_name: &'static str,
    pub last_good_construct: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Problem with selma'o {} at or before line {} column {}", snapshot.selmao_name, snapshot.line, snapshot.column)]
pub struct ParseError {
    pub snapshot: ErrorSnapshot,
}

impl ParseError {
    /// Formats the two-line diagnostic of §6/§7 ("Problem with selma'o…"
    /// followed by "Last good construct was: …").
    pub fn diagnostic(&self) -> String {
        format!(
            "Problem with selma'o {} at or before line {} column {}\nLast good construct was: {}",
            self.snapshot.selmao_name,
            self.snapshot.line,
            self.snapshot.column,
            self.snapshot.last_good_construct
        )
    }
}
