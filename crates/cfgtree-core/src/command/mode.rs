use std::fmt;

use super::parse::Directive;

/// Which kinds of command a pass honours.
///
/// Replaying a buffer as `DelegatesOnly` then `ValuesOnly` lets value
/// commands address delegates declared further down the same buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessMode {
    #[default]
    All,
    /// Only `delegate()` and `include()`; every other command is a no-op.
    DelegatesOnly,
    /// Everything except `delegate()`, which becomes a no-op.
    ValuesOnly,
}

impl ProcessMode {
    /// Whether a command ending in `leaf` is executed in this mode.
    pub fn admits(self, leaf: &str) -> bool {
        let directive = Directive::from_token(leaf);
        match self {
            ProcessMode::All => true,
            ProcessMode::DelegatesOnly => directive.is_some(),
            ProcessMode::ValuesOnly => directive != Some(Directive::Delegate),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProcessMode::All => "all",
            ProcessMode::DelegatesOnly => "delegates",
            ProcessMode::ValuesOnly => "values",
        }
    }
}

impl fmt::Display for ProcessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
