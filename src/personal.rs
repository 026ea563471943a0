//! Per-species base records ("personal" data) and their fixed-size layouts.

use crate::errors::{TableError, TableResult};
use crate::learnset::MOVE_SLOTS;
use crate::machine::{machine_moves, CompatibilityBits};
use schema::{BaseStats, Generation};

/// Number of move tutor flags carried in a generation 2 record.
pub const TUTOR_COUNT_2: usize = 3;
/// Number of move tutor flags carried in a generation 3 record.
pub const TUTOR_COUNT_3: usize = 30;

/// A decoded personal record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfo {
    pub base_stats: BaseStats,
    pub types: [u8; 2],
    pub catch_rate: u8,
    pub base_exp: u8,
    pub growth_rate: u8,
    machines: CompatibilityBits,
    tutors: CompatibilityBits,
    initial_moves: [u16; MOVE_SLOTS],
}

impl PersonalInfo {
    pub fn machines(&self) -> &CompatibilityBits {
        &self.machines
    }

    pub fn tutors(&self) -> &CompatibilityBits {
        &self.tutors
    }

    /// Machine flag at `machine_index` (a position in the generation's index table).
    pub fn is_machine_compatible(&self, machine_index: usize) -> bool {
        self.machines.get(machine_index)
    }

    pub fn is_tutor_compatible(&self, tutor_index: usize) -> bool {
        self.tutors.get(tutor_index)
    }

    /// Moves known at level 1 before any learnset replay. Only generation 1
    /// records carry these; later generations list them in the learnset.
    pub fn initial_moves(&self) -> [u16; MOVE_SLOTS] {
        self.initial_moves
    }

    /// Copy the starting moves into the front of `moves`, zeroing the rest.
    ///
    /// # Panics
    /// If `moves` holds fewer than [`MOVE_SLOTS`] slots.
    pub fn copy_initial_moves(&self, moves: &mut [u16]) {
        assert!(
            moves.len() >= MOVE_SLOTS,
            "encounter move buffer needs {MOVE_SLOTS} slots, got {}",
            moves.len()
        );
        moves.fill(0);
        moves[..MOVE_SLOTS].copy_from_slice(&self.initial_moves);
    }
}

/// Record layout for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalFormat {
    generation: Generation,
}

impl PersonalFormat {
    pub const fn new(generation: Generation) -> Self {
        Self { generation }
    }

    pub const fn record_size(self) -> usize {
        match self.generation {
            Generation::Gen1 => 0x1C,
            Generation::Gen2 => 0x20,
            Generation::Gen3 => 0x28,
        }
    }

    /// Decode one record. `raw` must be exactly `record_size()` bytes.
    fn decode(self, raw: &[u8]) -> PersonalInfo {
        let machine_count = machine_moves(self.generation).len();
        match self.generation {
            Generation::Gen1 => PersonalInfo {
                base_stats: BaseStats {
                    hp: raw[0x01],
                    attack: raw[0x02],
                    defense: raw[0x03],
                    speed: raw[0x04],
                    sp_attack: raw[0x05],
                    sp_defense: raw[0x05],
                },
                types: [raw[0x06], raw[0x07]],
                catch_rate: raw[0x08],
                base_exp: raw[0x09],
                growth_rate: raw[0x13],
                machines: CompatibilityBits::from_le_bytes(&raw[0x14..0x1B], machine_count),
                tutors: CompatibilityBits::default(),
                initial_moves: [
                    raw[0x0F] as u16,
                    raw[0x10] as u16,
                    raw[0x11] as u16,
                    raw[0x12] as u16,
                ],
            },
            Generation::Gen2 => {
                // Machines and the Crystal tutor flags share one 64-bit field.
                let flags = CompatibilityBits::from_le_bytes(&raw[0x18..0x20], 64).raw();
                PersonalInfo {
                    base_stats: BaseStats {
                        hp: raw[0x01],
                        attack: raw[0x02],
                        defense: raw[0x03],
                        speed: raw[0x04],
                        sp_attack: raw[0x05],
                        sp_defense: raw[0x06],
                    },
                    types: [raw[0x07], raw[0x08]],
                    catch_rate: raw[0x09],
                    base_exp: raw[0x0A],
                    growth_rate: raw[0x16],
                    machines: CompatibilityBits::new(flags, machine_count),
                    tutors: CompatibilityBits::new(flags >> machine_count, TUTOR_COUNT_2),
                    initial_moves: [0; MOVE_SLOTS],
                }
            }
            Generation::Gen3 => PersonalInfo {
                base_stats: BaseStats {
                    hp: raw[0x00],
                    attack: raw[0x01],
                    defense: raw[0x02],
                    speed: raw[0x03],
                    sp_attack: raw[0x04],
                    sp_defense: raw[0x05],
                },
                types: [raw[0x06], raw[0x07]],
                catch_rate: raw[0x08],
                base_exp: raw[0x09],
                growth_rate: raw[0x13],
                machines: CompatibilityBits::from_le_bytes(&raw[0x1C..0x24], machine_count),
                tutors: CompatibilityBits::from_le_bytes(&raw[0x24..0x28], TUTOR_COUNT_3),
                initial_moves: [0; MOVE_SLOTS],
            },
        }
    }
}

/// Species-indexed personal records for one environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalTable {
    records: Vec<PersonalInfo>,
}

impl PersonalTable {
    pub fn decode(generation: Generation, data: &[u8]) -> TableResult<Self> {
        let format = PersonalFormat::new(generation);
        let record_size = format.record_size();
        if data.len() % record_size != 0 {
            return Err(TableError::MalformedPersonal {
                len: data.len(),
                record_size,
                generation,
            });
        }

        let records = data
            .chunks_exact(record_size)
            .map(|raw| format.decode(raw))
            .collect();
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record for `species`, `None` past the end of the table.
    pub fn get(&self, species: u16) -> Option<&PersonalInfo> {
        self.records.get(species as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::PersonalBuilder;
    use pretty_assertions::assert_eq;
    use schema::moves;

    #[test]
    fn test_gen1_record_layout() {
        let raw = PersonalBuilder::new(Generation::Gen1)
            .stats([35, 55, 30, 90, 50, 50])
            .machines(&[0, 23, 54])
            .initial_moves([moves::THUNDER_SHOCK, moves::GROWL, 0, 0])
            .build();
        assert_eq!(raw.len(), 0x1C);

        let table = PersonalTable::decode(Generation::Gen1, &raw).unwrap();
        let info = table.get(0).unwrap();
        assert_eq!(info.base_stats.hp, 35);
        assert_eq!(info.base_stats.speed, 90);
        assert_eq!(info.base_stats.sp_attack, info.base_stats.sp_defense);
        assert_eq!(info.machines().width(), 55);
        assert_eq!(info.machines().set_bits().collect::<Vec<_>>(), vec![0, 23, 54]);
        assert_eq!(info.tutors().count(), 0);
        assert_eq!(info.initial_moves(), [moves::THUNDER_SHOCK, moves::GROWL, 0, 0]);
    }

    #[test]
    fn test_gen2_record_splits_machine_and_tutor_flags() {
        let raw = PersonalBuilder::new(Generation::Gen2)
            .machines(&[0, 56])
            .tutors(&[1])
            .build();

        let table = PersonalTable::decode(Generation::Gen2, &raw).unwrap();
        let info = table.get(0).unwrap();
        assert!(info.is_machine_compatible(0));
        assert!(info.is_machine_compatible(56));
        assert_eq!(info.machines().count(), 2);
        assert!(info.is_tutor_compatible(1));
        assert!(!info.is_tutor_compatible(0));
        assert_eq!(info.tutors().width(), TUTOR_COUNT_2);
        assert_eq!(info.initial_moves(), [0; MOVE_SLOTS]);
    }

    #[test]
    fn test_gen3_record_layout() {
        let raw = PersonalBuilder::new(Generation::Gen3)
            .stats([80, 82, 83, 80, 100, 100])
            .machines(&[57])
            .tutors(&[0, 29])
            .build();

        let info = PersonalTable::decode(Generation::Gen3, &raw).unwrap().get(0).cloned().unwrap();
        assert_eq!(info.base_stats.total(), 525);
        assert!(info.is_machine_compatible(57));
        assert!(info.is_tutor_compatible(0));
        assert!(info.is_tutor_compatible(29));
        assert!(!info.is_tutor_compatible(30));
    }

    #[test]
    fn test_table_indexing_and_bounds() {
        let mut raw = PersonalBuilder::new(Generation::Gen1).build();
        raw.extend(PersonalBuilder::new(Generation::Gen1).stats([45, 49, 49, 45, 65, 65]).build());

        let table = PersonalTable::decode(Generation::Gen1, &raw).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1).map(|info| info.base_stats.hp), Some(45));
        assert!(table.get(2).is_none());
    }

    #[test]
    fn test_partial_record_is_rejected() {
        let err = PersonalTable::decode(Generation::Gen2, &[0; 0x21]).unwrap_err();
        assert!(matches!(
            err,
            TableError::MalformedPersonal { len: 0x21, record_size: 0x20, .. }
        ));
    }

    #[test]
    fn test_copy_initial_moves_clears_buffer() {
        let raw = PersonalBuilder::new(Generation::Gen1)
            .initial_moves([moves::TACKLE, 0, 0, 0])
            .build();
        let info = PersonalTable::decode(Generation::Gen1, &raw).unwrap().get(0).cloned().unwrap();

        let mut buffer = [9u16; 4];
        info.copy_initial_moves(&mut buffer);
        assert_eq!(buffer, [moves::TACKLE, 0, 0, 0]);
    }
}
