use super::{mark_move, MoveLearner};
use crate::personal::PersonalInfo;
use crate::settings::LearnOptions;
use crate::tables::GenerationTables;
use schema::moves::SURF;
use schema::species::{PIKACHU, RAICHU};
use schema::Generation;

/// Red/Blue and Yellow.
///
/// No in-game tutors exist; the only tutor exception is Surf on Pikachu and
/// Raichu, taught through the Stadium games and accepted only when
/// [`LearnOptions::allow_stadium_tutors`] is set.
#[derive(Debug, Clone)]
pub struct LearnSource1 {
    tables: GenerationTables,
}

impl LearnSource1 {
    pub fn new(tables: GenerationTables) -> Self {
        debug_assert_eq!(tables.environment().generation(), Generation::Gen1);
        Self { tables }
    }
}

impl MoveLearner for LearnSource1 {
    fn tables(&self) -> &GenerationTables {
        &self.tables
    }

    fn is_special_tutor(
        &self,
        species: u16,
        _record: &PersonalInfo,
        move_id: u16,
        options: &LearnOptions,
    ) -> bool {
        options.allow_stadium_tutors && move_id == SURF && matches!(species, PIKACHU | RAICHU)
    }

    fn mark_special_tutors(
        &self,
        result: &mut [bool],
        limit: u16,
        species: u16,
        record: &PersonalInfo,
        options: &LearnOptions,
    ) {
        if self.is_special_tutor(species, record, SURF, options) {
            mark_move(result, limit, SURF);
        }
    }
}
