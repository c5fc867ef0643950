//! `ParserConfig`: the programmatic configuration surface of §6. Binding
//! these to an actual `-d`/`-e`/`--maxdepth`-style CLI is an external
//! collaborator's job (§1); this crate only exposes the struct.

use std::path::PathBuf;

use crate::error::ConfigError;

/// The six independent `-d*` trace categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceFlags {
    /// `-dv`: trace each word as lexed.
    pub words: bool,
    /// `-dL`: trace each token entering the compounder.
    pub compounder_input: bool,
    /// `-dR`: trace each compounder reduction.
    pub compounder_reduction: bool,
    /// `-dl`: trace each token entering the LALR parser.
    pub lalr_input: bool,
    /// `-dr`: trace each LALR reduction.
    pub lalr_reduction: bool,
    /// `-de`: trace each elidable terminator inserted.
    pub elision: bool,
}

impl TraceFlags {
    /// `-d*`: enables all six trace categories.
    pub fn all() -> Self {
        Self {
            words: true,
            compounder_input: true,
            compounder_reduction: true,
            lalr_input: true,
            lalr_reduction: true,
            elision: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub trace: TraceFlags,
    /// `-f` inverted: collapse single-child reduction nodes by default.
    pub collapse_single_child: bool,
    /// `-e` inverted: synthesize elided terminators by default.
    pub elide_terminators: bool,
    /// `-m N`: `None` means unlimited (N<=0 in the original CLI).
    pub max_line_width: Option<usize>,
    /// `--maxdepth N`, default 200.
    pub max_stack_depth: usize,
    /// `--redmax N`, default 100.
    pub max_recorded_reductions: usize,
    /// `-g`/`--tfile`: grammar error log path, if logging is enabled.
    pub grammar_log_path: Option<PathBuf>,
    /// `-d`: LALR-internal debug trace (distinct from the `-d*` family).
    pub lalr_debug: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            trace: TraceFlags::default(),
            collapse_single_child: true,
            elide_terminators: true,
            max_line_width: None,
            max_stack_depth: 200,
            max_recorded_reductions: 100,
            grammar_log_path: None,
            lalr_debug: false,
        }
    }
}

impl ParserConfig {
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    inner: ParserConfigFields,
}

#[derive(Debug, Clone)]
struct ParserConfigFields(ParserConfig);

impl Default for ParserConfigFields {
    fn default() -> Self {
        Self(ParserConfig::default())
    }
}

impl ParserConfigBuilder {
    pub fn trace(mut self, trace: TraceFlags) -> Self {
        self.inner.0.trace = trace;
        self
    }

    pub fn collapse_single_child(mut self, collapse: bool) -> Self {
        self.inner.0.collapse_single_child = collapse;
        self
    }

    pub fn elide_terminators(mut self, elide: bool) -> Self {
        self.inner.0.elide_terminators = elide;
        self
    }

    pub fn max_line_width(mut self, width: Option<usize>) -> Self {
        self.inner.0.max_line_width = width;
        self
    }

    pub fn max_stack_depth(mut self, depth: usize) -> Self {
        self.inner.0.max_stack_depth = depth;
        self
    }

    pub fn max_recorded_reductions(mut self, max: usize) -> Self {
        self.inner.0.max_recorded_reductions = max;
        self
    }

    pub fn grammar_log_path(mut self, path: Option<PathBuf>) -> Self {
        self.inner.0.grammar_log_path = path;
        self
    }

    pub fn lalr_debug(mut self, debug: bool) -> Self {
        self.inner.0.lalr_debug = debug;
        self
    }

    pub fn build(self) -> Result<ParserConfig, ConfigError> {
        let config = self.inner.0;
        if config.max_stack_depth == 0 {
            return Err(ConfigError::ZeroStackDepth);
        }
        if config.max_recorded_reductions == 0 {
            return Err(ConfigError::ZeroRecordedReductions);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.max_stack_depth, 200);
        assert_eq!(config.max_recorded_reductions, 100);
        assert!(config.elide_terminators);
        assert!(config.collapse_single_child);
    }

    #[test]
    fn zero_stack_depth_is_rejected() {
        let result = ParserConfig::builder().max_stack_depth(0).build();
        assert_eq!(result, Err(ConfigError::ZeroStackDepth));
    }

    #[test]
    fn zero_redmax_is_rejected() {
        let result = ParserConfig::builder().max_recorded_reductions(0).build();
        assert_eq!(result, Err(ConfigError::ZeroRecordedReductions));
    }

    #[test]
    fn trace_all_sets_every_flag() {
        let flags = TraceFlags::all();
        assert!(flags.words && flags.compounder_input && flags.lalr_reduction && flags.elision);
    }
}
