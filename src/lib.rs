//! # lojban-parser
//!
//! A morphological classifier, backtracking compounder, and table-driven
//! LALR(1)-style parser for the constructed language Lojban.
//!
//! ## Pipeline (dependency order)
//!
//! ```text
//! scanner   → word-level character scanning (getword)
//!   ↓
//! lex       → morphological classification (brivla / cmene / cmavo)
//!   ↓
//! filter    → quotation handling (zo / zoi / lo'u...le'u)
//!   ↓
//! selmao    → cmavo skeleton-table category assignment
//!   ↓
//! termin    → FAhO end-of-text guarantee
//!   ↓
//! glue      → ZEI lujvo joining
//!   ↓
//! absorb    → BAhE prefix, then BU suffix, then UI/CAI/Y/DAhO/FUhE/FUhO suffixes
//!   ↓
//! compound  → backtracking recursive-descent compounder
//!   ↓
//! lalr      → table-driven shift/reduce parser with elidable-terminator recovery
//! ```
//!
//! Each stage consumes the previous stage's output one token at a time, the
//! way the reference's `_filter`/`_selmao`/`_termin`/`_glue`/`_fabsorb`/
//! `_lerfu`/`_absorb` chain does: `termin` sits between `selmao` and `glue`
//! so that end-of-text synthesis happens before lookahead-based joining and
//! indicator absorption ever see it, not after.
//!
//! Every stage is a method on a small struct rather than a free function
//! with hidden statics: each stage's one-token lookahead cache is a field
//! of the owning struct, so a process can run many parses serially, or
//! many [`parser::Parser`]s in parallel, each owning its own state.

/// Category code constants (selma'o, compound-lexer output, sentinels).
pub mod category;
/// The cmavo skeleton table: (consonant class, vowel pattern) -> selma'o.
pub mod cmavo_table;
/// `ParserConfig`: the programmatic configuration surface.
pub mod config;
/// Tracing-backed diagnostic sink for lexical warnings and trace output.
pub mod diagnostics;
/// Typed errors: `ConfigError`, `ErrorSnapshot`, `ParseError`.
pub mod error;
/// The token arena: tree storage with a free list for backtracking reuse.
pub mod token;

/// Character-level word scanner (`getword`).
pub mod scanner;
/// Morphological word classifier (`lex`): brivla / cmene / cmavo.
pub mod lex;
/// Quotation filter (`filter`): zo / zoi / la'o / lo'u...le'u.
pub mod filter;
/// Cmavo skeleton-table category assignment (`selmao`).
pub mod selmao;
/// End-of-text termination (`termin`).
pub mod termin;
/// ZEI lujvo joining (`glue`).
pub mod glue;
/// BAhE prefix, BU suffix, and UI/CAI/Y/DAhO/FUhE/FUhO suffix absorption.
pub mod absorb;
/// The backtracking recursive-descent compounder.
pub mod compound;
/// The table-driven LALR-style parser with elidable-terminator recovery.
pub mod lalr;

/// Top-level [`parser::Parser`]: wires the whole pipeline and exposes the
/// public `parseString`/`parseStdin`-equivalent API plus memory accounting.
pub mod parser;

pub use config::{ParserConfig, TraceFlags};
pub use error::{ConfigError, ErrorSnapshot, ParseError};
pub use parser::{ParseStats, Parser};
pub use token::{Token, TokenArena, TokenId};
