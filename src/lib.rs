//! Pokemon Move Learnability Engine
//!
//! Answers whether a species could have learned a move in one of the first
//! three generations of games, and by which method, from packed reference
//! tables decoded once at startup.

// --- MODULE DECLARATIONS ---
pub mod entity;
pub mod errors;
pub mod evolution;
pub mod learn_source;
pub mod learnset;
pub mod linker;
pub mod machine;
pub mod personal;
pub mod settings;
pub mod tables;
pub mod verdict;

#[cfg(test)]
mod test_support;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BaseStats, Generation, LearnEnvironment, ResourceBundle, TableBlob};

// --- From this crate's modules (`src/`) ---

// Query entry points.
pub use learn_source::{LearnSource, LearnSource1, LearnSource2, LearnSource3, MoveLearner};
pub use tables::{initialize_tables, learn_source, learn_tables, GenerationTables, LearnSourceSet};

// Query inputs and results.
pub use entity::{EntityContext, EntityFormat};
pub use evolution::EvoCriteria;
pub use settings::{LearnOption, LearnOptions};
pub use verdict::{LearnMethod, MoveLearnInfo, MoveSourceType};

// Decoded table records.
pub use learnset::{Learnset, LearnsetEncoding, LearnsetEntry, LearnsetFormat};
pub use personal::{PersonalInfo, PersonalTable};

pub use errors::{SettingsError, SettingsResult, TableError, TableResult};
