//! Decoded reference tables and the process-wide table store.

use crate::errors::{TableError, TableResult};
use crate::learn_source::{LearnSource, MoveLearner};
use crate::learnset::{Learnset, LearnsetFormat};
use crate::linker::LinkedBlob;
use crate::personal::PersonalTable;
use schema::{Generation, LearnEnvironment, ResourceBundle, TableBlob};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Every table one learn environment reads, decoded and immutable.
#[derive(Debug, Clone)]
pub struct GenerationTables {
    environment: LearnEnvironment,
    personal: PersonalTable,
    learnsets: Vec<Learnset>,
    egg_moves: Vec<Vec<u16>>,
}

impl GenerationTables {
    /// Decode one environment's blobs. Any malformed entry aborts the decode.
    pub fn decode(blob: &TableBlob) -> TableResult<Self> {
        let environment = blob.environment;
        let generation = environment.generation();
        let identifier = environment.blob_identifier();

        let personal = PersonalTable::decode(generation, &blob.personal)?;

        let format = LearnsetFormat::new(generation);
        let learnsets = LinkedBlob::parse(&blob.learnsets, identifier)?
            .entries()
            .enumerate()
            .map(|(species, raw)| format.decode(species, raw))
            .collect::<TableResult<Vec<_>>>()?;

        let egg_moves = if blob.egg_moves.is_empty() {
            Vec::new()
        } else {
            LinkedBlob::parse(&blob.egg_moves, identifier)?
                .entries()
                .enumerate()
                .map(|(species, raw)| decode_egg_moves(generation, species, raw))
                .collect::<TableResult<Vec<_>>>()?
        };

        debug!(
            %environment,
            personal = personal.len(),
            learnsets = learnsets.len(),
            egg_moves = egg_moves.len(),
            "decoded learn tables"
        );

        Ok(Self {
            environment,
            personal,
            learnsets,
            egg_moves,
        })
    }

    pub fn environment(&self) -> LearnEnvironment {
        self.environment
    }

    pub fn personal(&self) -> &PersonalTable {
        &self.personal
    }

    /// Learnset at `species`, or the shared empty learnset past the table end.
    pub fn learnset(&self, species: u16) -> &Learnset {
        self.learnsets
            .get(species as usize)
            .unwrap_or(Learnset::empty())
    }

    pub fn egg_moves(&self, species: u16) -> &[u16] {
        self.egg_moves
            .get(species as usize)
            .map_or(&[], Vec::as_slice)
    }
}

fn decode_egg_moves(generation: Generation, species: usize, raw: &[u8]) -> TableResult<Vec<u16>> {
    match generation {
        Generation::Gen1 | Generation::Gen2 => Ok(raw.iter().map(|&move_id| move_id as u16).collect()),
        Generation::Gen3 => {
            if raw.len() % 2 != 0 {
                return Err(TableError::MalformedEggMoves {
                    species,
                    len: raw.len(),
                });
            }
            Ok(raw
                .chunks_exact(2)
                .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
                .collect())
        }
    }
}

/// One [`LearnSource`] per environment present in the resource bundle.
#[derive(Debug, Clone, Default)]
pub struct LearnSourceSet {
    sources: Vec<LearnSource>,
}

impl LearnSourceSet {
    /// Decode a postcard-encoded [`ResourceBundle`].
    pub fn decode(bytes: &[u8]) -> TableResult<Self> {
        let bundle = ResourceBundle::from_bytes(bytes)?;
        Self::from_bundle(&bundle)
    }

    pub fn from_bundle(bundle: &ResourceBundle) -> TableResult<Self> {
        let mut sources: Vec<LearnSource> = Vec::with_capacity(bundle.tables.len());
        for blob in &bundle.tables {
            if sources.iter().any(|source| source.environment() == blob.environment) {
                return Err(TableError::DuplicateEnvironment(blob.environment));
            }
            sources.push(LearnSource::new(GenerationTables::decode(blob)?));
        }
        Ok(Self { sources })
    }

    pub fn get(&self, environment: LearnEnvironment) -> Option<&LearnSource> {
        self.sources
            .iter()
            .find(|source| source.environment() == environment)
    }

    pub fn environments(&self) -> impl Iterator<Item = LearnEnvironment> + '_ {
        self.sources.iter().map(|source| source.environment())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

// Global table storage - loaded once at startup
static TABLE_STORE: OnceLock<LearnSourceSet> = OnceLock::new();

/// Decode `bytes` and install the result as the process-wide table store.
///
/// Only the first successful call installs tables; later calls are rejected
/// with [`TableError::AlreadyInitialized`] and leave the store untouched.
pub fn initialize_tables(bytes: &[u8]) -> TableResult<&'static LearnSourceSet> {
    if TABLE_STORE.get().is_some() {
        warn!("ignoring repeated reference table initialization");
        return Err(TableError::AlreadyInitialized);
    }

    let set = LearnSourceSet::decode(bytes)?;
    let count = set.len();
    if TABLE_STORE.set(set).is_err() {
        warn!("reference tables were initialized concurrently");
        return Err(TableError::AlreadyInitialized);
    }

    info!(environments = count, "reference tables initialized");
    TABLE_STORE.get().ok_or(TableError::AlreadyInitialized)
}

/// The installed table store, if [`initialize_tables`] has run.
pub fn learn_tables() -> Option<&'static LearnSourceSet> {
    TABLE_STORE.get()
}

/// Installed learn source for `environment`.
pub fn learn_source(environment: LearnEnvironment) -> Option<&'static LearnSource> {
    learn_tables()?.get(environment)
}
