// Learnability Schema - Shared type definitions
// This crate contains the generation discriminators, id limits and resource
// bundle layout shared between the learnability engine and any tool that packs
// the binary tables, so both sides agree on the postcard encoding.

// Re-export the main types
pub use bundle::*;
pub use environment::*;
pub use species_data::*;

pub mod bundle;
pub mod environment;
pub mod moves;
pub mod species;
pub mod species_data;
