use bitflags::bitflags;
use schema::LearnEnvironment;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Which learn methods a query may consider.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MoveSourceType: u8 {
        const LEVEL_UP      = 1 << 0;
        const MACHINE       = 1 << 1;
        const SPECIAL_TUTOR = 1 << 2;
        const EGG_MOVE      = 1 << 3;

        const ALL = Self::LEVEL_UP.bits()
            | Self::MACHINE.bits()
            | Self::SPECIAL_TUTOR.bits()
            | Self::EGG_MOVE.bits();
    }
}

impl Default for MoveSourceType {
    fn default() -> Self {
        MoveSourceType::ALL
    }
}

/// How a move was obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearnMethod {
    /// Not learnable by any considered method.
    #[default]
    None,
    LevelUp,
    Machine,
    Tutor,
    EggMove,
    /// Part of the moveset an encounter is generated with.
    Encounter,
}

impl LearnMethod {
    pub const fn is_valid(self) -> bool {
        !matches!(self, LearnMethod::None)
    }
}

impl fmt::Display for LearnMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            LearnMethod::None => "Not learnable",
            LearnMethod::LevelUp => "Level Up",
            LearnMethod::Machine => "TM/HM",
            LearnMethod::Tutor => "Tutor",
            LearnMethod::EggMove => "Egg Move",
            LearnMethod::Encounter => "Encounter",
        };
        write!(f, "{}", display_name)
    }
}

/// The single verdict of a learnability query. The default value means the
/// move is not learnable; `level` is only meaningful for level-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveLearnInfo {
    pub method: LearnMethod,
    pub environment: Option<LearnEnvironment>,
    pub level: u8,
}

impl MoveLearnInfo {
    pub const fn new(method: LearnMethod, environment: LearnEnvironment) -> Self {
        Self {
            method,
            environment: Some(environment),
            level: 0,
        }
    }

    pub const fn level_up(environment: LearnEnvironment, level: u8) -> Self {
        Self {
            method: LearnMethod::LevelUp,
            environment: Some(environment),
            level,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.method.is_valid()
    }
}

impl fmt::Display for MoveLearnInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.method, self.environment) {
            (LearnMethod::None, _) | (_, None) => write!(f, "{}", LearnMethod::None),
            (LearnMethod::LevelUp, Some(env)) => write!(f, "Level Up @ {} ({})", self.level, env),
            (method, Some(env)) => write!(f, "{} ({})", method, env),
        }
    }
}
