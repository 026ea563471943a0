//! Per-generation answers to "could this move have been learned?".
//!
//! Every version group is one [`LearnSource`] variant owning its decoded tables.
//! The shared query algorithm lives in [`MoveLearner`]'s provided methods; the
//! variants only supply their tutor exceptions and record lookup rules.

pub mod gen1;
pub mod gen2;
pub mod gen3;

#[cfg(test)]
mod tests;

use crate::entity::EntityContext;
use crate::evolution::EvoCriteria;
use crate::learnset::{encounter_start_cursor, Learnset, MOVE_SLOTS};
use crate::machine::{machine_index, machine_moves, mark_all_machine_moves};
use crate::personal::PersonalInfo;
use crate::settings::{LearnOption, LearnOptions};
use crate::tables::GenerationTables;
use crate::verdict::{LearnMethod, MoveLearnInfo, MoveSourceType};
use schema::{Generation, LearnEnvironment};

pub use gen1::LearnSource1;
pub use gen2::LearnSource2;
pub use gen3::LearnSource3;

/// The learnability contract shared by every generation.
pub trait MoveLearner {
    fn tables(&self) -> &GenerationTables;

    /// Whether a generation-specific tutor teaches `move_id` to `species`.
    fn is_special_tutor(
        &self,
        species: u16,
        record: &PersonalInfo,
        move_id: u16,
        options: &LearnOptions,
    ) -> bool;

    /// Mark every move a generation-specific tutor teaches to `species`, up to
    /// move id `limit`.
    fn mark_special_tutors(
        &self,
        result: &mut [bool],
        limit: u16,
        species: u16,
        record: &PersonalInfo,
        options: &LearnOptions,
    );

    /// Base record for `species`. Alternate forms have no records of their own
    /// unless a generation says otherwise.
    fn lookup_base_record(&self, species: u16, form: u8) -> Option<&PersonalInfo> {
        if form != 0 || !self.is_species_in_range(species) {
            return None;
        }
        self.tables().personal().get(species)
    }

    fn environment(&self) -> LearnEnvironment {
        self.tables().environment()
    }

    fn generation(&self) -> Generation {
        self.environment().generation()
    }

    fn max_species(&self) -> u16 {
        self.generation().max_species()
    }

    /// Species 0 is reserved; valid ids run up to the generation maximum.
    fn is_species_in_range(&self, species: u16) -> bool {
        species != 0 && species <= self.max_species()
    }

    fn max_move(&self) -> u16 {
        self.generation().max_move()
    }

    /// Size a per-move result buffer must have.
    fn move_count(&self) -> usize {
        self.generation().move_count()
    }

    /// Level-up learnset of `species`; empty when out of range.
    fn learnset_of(&self, species: u16) -> &Learnset {
        if !self.is_species_in_range(species) {
            return Learnset::empty();
        }
        self.tables().learnset(species)
    }

    fn egg_moves_of(&self, species: u16) -> &[u16] {
        if !self.is_species_in_range(species) {
            return &[];
        }
        self.tables().egg_moves(species)
    }

    /// Whether `record` is flagged for the machine that teaches `move_id`.
    fn is_machine_move(&self, record: &PersonalInfo, move_id: u16) -> bool {
        machine_index(machine_moves(self.generation()), move_id)
            .is_some_and(|index| record.is_machine_compatible(index))
    }

    /// Single verdict for `move_id`, checking machine, tutor, level-up and egg
    /// sources in that order and stopping at the first match.
    fn can_learn<E: EntityContext + ?Sized>(
        &self,
        entity: &E,
        record: &PersonalInfo,
        evo: &EvoCriteria,
        move_id: u16,
        types: MoveSourceType,
        options: LearnOptions,
    ) -> MoveLearnInfo {
        if move_id > self.max_move() || move_id > entity.max_move_id() {
            return MoveLearnInfo::default();
        }

        let environment = self.environment();

        if types.contains(MoveSourceType::MACHINE) && self.is_machine_move(record, move_id) {
            return MoveLearnInfo::new(LearnMethod::Machine, environment);
        }

        if types.contains(MoveSourceType::SPECIAL_TUTOR)
            && self.is_special_tutor(evo.species, record, move_id, &options)
        {
            return MoveLearnInfo::new(LearnMethod::Tutor, environment);
        }

        if types.contains(MoveSourceType::LEVEL_UP) {
            let learned = self.learnset_of(evo.species).iter().find(|entry| {
                entry.move_id == move_id && options.mode.is_level_reachable(evo, entry.level)
            });
            if let Some(entry) = learned {
                return MoveLearnInfo::level_up(environment, entry.level);
            }
        }

        if types.contains(MoveSourceType::EGG_MOVE) && self.egg_moves_of(evo.species).contains(&move_id) {
            return MoveLearnInfo::new(LearnMethod::EggMove, environment);
        }

        MoveLearnInfo::default()
    }

    /// Mark every move reachable through `types` in `result`, indexed by move id.
    /// The buffer is only ever set, never cleared, so results accumulate across
    /// calls; a species without a record leaves it untouched.
    ///
    /// # Panics
    /// If `result` is shorter than [`MoveLearner::move_count`].
    fn all_learnable<E: EntityContext + ?Sized>(
        &self,
        result: &mut [bool],
        entity: &E,
        evo: &EvoCriteria,
        types: MoveSourceType,
        options: LearnOptions,
    ) {
        assert!(
            result.len() >= self.move_count(),
            "result buffer needs {} slots for {}, got {}",
            self.move_count(),
            self.environment(),
            result.len()
        );

        let Some(record) = self.lookup_base_record(evo.species, evo.form) else {
            return;
        };
        let limit = entity.max_move_id().min(self.max_move());

        if types.contains(MoveSourceType::LEVEL_UP) {
            let level_min = match options.mode {
                LearnOption::Current => evo.level_min,
                LearnOption::AtAnyTime => 0,
            };
            let learnset = self.learnset_of(evo.species);
            for move_id in learnset.moves_in_level_range(evo.level_max, level_min) {
                mark_move(result, limit, move_id);
            }
        }

        if types.contains(MoveSourceType::MACHINE) {
            let table = machine_moves(self.generation());
            if limit >= self.max_move() {
                mark_all_machine_moves(result, record.machines(), table);
            } else {
                for index in record.machines().set_bits() {
                    if let Some(&move_id) = table.get(index) {
                        mark_move(result, limit, move_id);
                    }
                }
            }
        }

        if types.contains(MoveSourceType::SPECIAL_TUTOR) {
            self.mark_special_tutors(result, limit, evo.species, record, &options);
        }

        if types.contains(MoveSourceType::EGG_MOVE) {
            for &move_id in self.egg_moves_of(evo.species) {
                mark_move(result, limit, move_id);
            }
        }
    }

    /// Write the moveset `species` would be generated with at `level` into
    /// `moves`: starting moves first, then the learnset replayed in order with
    /// the oldest slot evicted once all four are used.
    ///
    /// # Panics
    /// If `moves` holds fewer than four slots.
    fn reconstruct_encounter_moves(&self, species: u16, form: u8, level: u8, moves: &mut [u16]) {
        assert!(
            moves.len() >= MOVE_SLOTS,
            "encounter move buffer needs {MOVE_SLOTS} slots, got {}",
            moves.len()
        );

        let Some(record) = self.lookup_base_record(species, form) else {
            return;
        };

        record.copy_initial_moves(moves);
        let start = encounter_start_cursor(moves);
        self.learnset_of(species).set_encounter_moves(level, moves, start);
    }
}

fn mark_move(result: &mut [bool], limit: u16, move_id: u16) {
    if move_id != 0 && move_id <= limit {
        result[move_id as usize] = true;
    }
}

/// One decoded environment, dispatched by generation.
#[derive(Debug, Clone)]
pub enum LearnSource {
    Gen1(LearnSource1),
    Gen2(LearnSource2),
    Gen3(LearnSource3),
}

impl LearnSource {
    pub fn new(tables: GenerationTables) -> Self {
        match tables.environment().generation() {
            Generation::Gen1 => LearnSource::Gen1(LearnSource1::new(tables)),
            Generation::Gen2 => LearnSource::Gen2(LearnSource2::new(tables)),
            Generation::Gen3 => LearnSource::Gen3(LearnSource3::new(tables)),
        }
    }
}

impl MoveLearner for LearnSource {
    fn tables(&self) -> &GenerationTables {
        match self {
            LearnSource::Gen1(source) => source.tables(),
            LearnSource::Gen2(source) => source.tables(),
            LearnSource::Gen3(source) => source.tables(),
        }
    }

    fn is_special_tutor(
        &self,
        species: u16,
        record: &PersonalInfo,
        move_id: u16,
        options: &LearnOptions,
    ) -> bool {
        match self {
            LearnSource::Gen1(source) => source.is_special_tutor(species, record, move_id, options),
            LearnSource::Gen2(source) => source.is_special_tutor(species, record, move_id, options),
            LearnSource::Gen3(source) => source.is_special_tutor(species, record, move_id, options),
        }
    }

    fn mark_special_tutors(
        &self,
        result: &mut [bool],
        limit: u16,
        species: u16,
        record: &PersonalInfo,
        options: &LearnOptions,
    ) {
        match self {
            LearnSource::Gen1(source) => source.mark_special_tutors(result, limit, species, record, options),
            LearnSource::Gen2(source) => source.mark_special_tutors(result, limit, species, record, options),
            LearnSource::Gen3(source) => source.mark_special_tutors(result, limit, species, record, options),
        }
    }

    fn lookup_base_record(&self, species: u16, form: u8) -> Option<&PersonalInfo> {
        match self {
            LearnSource::Gen1(source) => source.lookup_base_record(species, form),
            LearnSource::Gen2(source) => source.lookup_base_record(species, form),
            LearnSource::Gen3(source) => source.lookup_base_record(species, form),
        }
    }
}
