use super::{mark_move, MoveLearner};
use crate::personal::PersonalInfo;
use crate::settings::LearnOptions;
use crate::tables::GenerationTables;
use schema::moves::*;
use schema::species::*;
use schema::{Generation, LearnEnvironment};

/// Emerald tutor moves in record flag order.
pub static TUTOR_MOVES_E: [u16; 30] = [
    MEGA_PUNCH, SWORDS_DANCE, MEGA_KICK, BODY_SLAM, DOUBLE_EDGE, COUNTER,
    SEISMIC_TOSS, MIMIC, METRONOME, SOFT_BOILED, DREAM_EATER, THUNDER_WAVE,
    EXPLOSION, ROCK_SLIDE, SUBSTITUTE, DYNAMIC_PUNCH, ROLLOUT, PSYCH_UP,
    SNORE, ICY_WIND, ENDURE, MUD_SLAP, ICE_PUNCH, SWAGGER,
    SLEEP_TALK, SWIFT, DEFENSE_CURL, THUNDER_PUNCH, FIRE_PUNCH, FURY_CUTTER,
];

/// FireRed/LeafGreen tutors are the first fifteen Emerald flags.
pub const TUTOR_COUNT_FRLG: usize = 15;

/// Ruby/Sapphire, Emerald and FireRed/LeafGreen.
///
/// Tutor compatibility comes from the record's tutor flags. FireRed/LeafGreen
/// additionally teaches each fully evolved starter its type's ultimate move.
/// Alternate forms (Unown, Deoxys) share the species record in every game.
#[derive(Debug, Clone)]
pub struct LearnSource3 {
    tables: GenerationTables,
}

impl LearnSource3 {
    pub fn new(tables: GenerationTables) -> Self {
        debug_assert_eq!(tables.environment().generation(), Generation::Gen3);
        Self { tables }
    }

    fn tutor_moves(&self) -> &'static [u16] {
        match self.environment() {
            LearnEnvironment::E => &TUTOR_MOVES_E,
            LearnEnvironment::FRLG => &TUTOR_MOVES_E[..TUTOR_COUNT_FRLG],
            _ => &[],
        }
    }

    fn ultimate_move(&self, species: u16) -> Option<u16> {
        if self.environment() != LearnEnvironment::FRLG {
            return None;
        }
        match species {
            VENUSAUR | MEGANIUM | SCEPTILE => Some(FRENZY_PLANT),
            CHARIZARD | TYPHLOSION | BLAZIKEN => Some(BLAST_BURN),
            BLASTOISE | FERALIGATR | SWAMPERT => Some(HYDRO_CANNON),
            _ => None,
        }
    }
}

impl MoveLearner for LearnSource3 {
    fn tables(&self) -> &GenerationTables {
        &self.tables
    }

    fn lookup_base_record(&self, species: u16, _form: u8) -> Option<&PersonalInfo> {
        if !self.is_species_in_range(species) {
            return None;
        }
        self.tables.personal().get(species)
    }

    fn is_special_tutor(
        &self,
        species: u16,
        record: &PersonalInfo,
        move_id: u16,
        _options: &LearnOptions,
    ) -> bool {
        if self.ultimate_move(species) == Some(move_id) {
            return true;
        }
        self.tutor_moves()
            .iter()
            .position(|&tutor| tutor == move_id)
            .is_some_and(|index| record.is_tutor_compatible(index))
    }

    fn mark_special_tutors(
        &self,
        result: &mut [bool],
        limit: u16,
        species: u16,
        record: &PersonalInfo,
        _options: &LearnOptions,
    ) {
        for (index, &move_id) in self.tutor_moves().iter().enumerate() {
            if record.is_tutor_compatible(index) {
                mark_move(result, limit, move_id);
            }
        }
        if let Some(move_id) = self.ultimate_move(species) {
            mark_move(result, limit, move_id);
        }
    }
}
