//! Per-call sink selection

use serde::{Deserialize, Serialize};

/// Narrows which of the enabled sinks a single call writes to.
///
/// A preference never turns on a sink that the configuration has disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputPreference {
    ConsoleOnly,
    FileOnly,
    #[default]
    Both,
}

impl OutputPreference {
    #[inline]
    pub fn includes_console(&self) -> bool {
        !matches!(self, OutputPreference::FileOnly)
    }

    #[inline]
    pub fn includes_file(&self) -> bool {
        !matches!(self, OutputPreference::ConsoleOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_both() {
        assert_eq!(OutputPreference::default(), OutputPreference::Both);
    }

    #[test]
    fn test_sink_selection() {
        assert!(OutputPreference::ConsoleOnly.includes_console());
        assert!(!OutputPreference::ConsoleOnly.includes_file());

        assert!(!OutputPreference::FileOnly.includes_console());
        assert!(OutputPreference::FileOnly.includes_file());

        assert!(OutputPreference::Both.includes_console());
        assert!(OutputPreference::Both.includes_file());
    }
}
