use super::{mark_move, MoveLearner};
use crate::personal::PersonalInfo;
use crate::settings::LearnOptions;
use crate::tables::GenerationTables;
use schema::moves::{FLAMETHROWER, ICE_BEAM, THUNDERBOLT};
use schema::{Generation, LearnEnvironment};

/// Moves taught by the Goldenrod tutor, in record flag order.
pub const TUTOR_MOVES_C: [u16; 3] = [FLAMETHROWER, THUNDERBOLT, ICE_BEAM];

/// Gold/Silver and Crystal. Only Crystal has a tutor; compatibility is read from
/// the three flags that follow the machine flags in each record.
#[derive(Debug, Clone)]
pub struct LearnSource2 {
    tables: GenerationTables,
}

impl LearnSource2 {
    pub fn new(tables: GenerationTables) -> Self {
        debug_assert_eq!(tables.environment().generation(), Generation::Gen2);
        Self { tables }
    }

    fn tutor_moves(&self) -> &'static [u16] {
        match self.environment() {
            LearnEnvironment::C => &TUTOR_MOVES_C,
            _ => &[],
        }
    }
}

impl MoveLearner for LearnSource2 {
    fn tables(&self) -> &GenerationTables {
        &self.tables
    }

    fn is_special_tutor(
        &self,
        _species: u16,
        record: &PersonalInfo,
        move_id: u16,
        _options: &LearnOptions,
    ) -> bool {
        self.tutor_moves()
            .iter()
            .position(|&tutor| tutor == move_id)
            .is_some_and(|index| record.is_tutor_compatible(index))
    }

    fn mark_special_tutors(
        &self,
        result: &mut [bool],
        limit: u16,
        _species: u16,
        record: &PersonalInfo,
        _options: &LearnOptions,
    ) {
        for (index, &move_id) in self.tutor_moves().iter().enumerate() {
            if record.is_tutor_compatible(index) {
                mark_move(result, limit, move_id);
            }
        }
    }
}
