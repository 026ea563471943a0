//! Per-query evaluation options.

use crate::errors::SettingsResult;
use crate::evolution::EvoCriteria;
use serde::{Deserialize, Serialize};

/// Which level-up window a query accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearnOption {
    /// The move must be learned inside the stage's level window.
    #[default]
    Current,
    /// Any level up to the stage's maximum counts, e.g. a move learned before
    /// the window and still known.
    AtAnyTime,
}

impl LearnOption {
    pub fn is_level_reachable(self, evo: &EvoCriteria, level: u8) -> bool {
        match self {
            LearnOption::Current => evo.inside_level_range(level),
            LearnOption::AtAnyTime => level <= evo.level_max,
        }
    }
}

/// Options passed with every query.
///
/// ```
/// use pokemon_learnsource::{LearnOption, LearnOptions};
///
/// let options = LearnOptions::from_ron("(mode: AtAnyTime, allow_stadium_tutors: true)").unwrap();
/// assert_eq!(options.mode, LearnOption::AtAnyTime);
/// assert!(options.allow_stadium_tutors);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnOptions {
    pub mode: LearnOption,
    /// Accept moves that were only teachable through the Stadium peripheral games.
    pub allow_stadium_tutors: bool,
}

impl LearnOptions {
    pub const fn new(mode: LearnOption, allow_stadium_tutors: bool) -> Self {
        Self {
            mode,
            allow_stadium_tutors,
        }
    }

    pub fn from_ron(text: &str) -> SettingsResult<Self> {
        Ok(ron::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_fields_use_defaults() {
        let options = LearnOptions::from_ron("(allow_stadium_tutors: true)").unwrap();
        assert_eq!(options, LearnOptions::new(LearnOption::Current, true));
        assert_eq!(LearnOptions::from_ron("()").unwrap(), LearnOptions::default());
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        assert!(LearnOptions::from_ron("(mode: Sometimes)").is_err());
    }

    #[test]
    fn test_level_reachability() {
        let evo = EvoCriteria::new(2, 0, 16, 30);
        assert!(!LearnOption::Current.is_level_reachable(&evo, 7));
        assert!(LearnOption::AtAnyTime.is_level_reachable(&evo, 7));
        assert!(!LearnOption::AtAnyTime.is_level_reachable(&evo, 31));
    }
}
