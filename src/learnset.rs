//! Level-up learnsets and their per-generation encodings.

use crate::errors::{TableError, TableResult};
use schema::Generation;

/// Number of move slots an individual carries.
pub const MOVE_SLOTS: usize = 4;

const GEN3_MOVE_MASK: u16 = 0x01FF;
const GEN3_LEVEL_SHIFT: u16 = 9;

/// One level-up record: `move_id` is learned upon reaching `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearnsetEntry {
    pub level: u8,
    pub move_id: u16,
}

/// A species' level-up moves in table order.
///
/// Table order is non-decreasing by level and may list a move more than once.
/// Level 0 entries are evolution moves and are never replayed for encounters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Learnset {
    entries: Vec<LearnsetEntry>,
}

static EMPTY_LEARNSET: Learnset = Learnset {
    entries: Vec::new(),
};

impl Learnset {
    pub fn new(entries: Vec<LearnsetEntry>) -> Self {
        Self { entries }
    }

    /// Shared empty learnset returned for species outside a table.
    pub fn empty() -> &'static Learnset {
        &EMPTY_LEARNSET
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LearnsetEntry> + Clone + '_ {
        self.entries.iter()
    }

    pub fn contains(&self, move_id: u16) -> bool {
        self.entries.iter().any(|entry| entry.move_id == move_id)
    }

    /// Level of the first table occurrence of `move_id`.
    ///
    /// The first occurrence is authoritative even if the move reappears at a
    /// numerically lower level further down the table.
    pub fn level_of(&self, move_id: u16) -> Option<u8> {
        self.entries
            .iter()
            .find(|entry| entry.move_id == move_id)
            .map(|entry| entry.level)
    }

    /// Lowest numeric level at which `move_id` is listed.
    pub fn min_level_of(&self, move_id: u16) -> Option<u8> {
        self.entries
            .iter()
            .filter(|entry| entry.move_id == move_id)
            .map(|entry| entry.level)
            .min()
    }

    /// Moves whose level lies in `level_min..=level_max`, in table order.
    ///
    /// Note the argument order: the maximum level comes first. Duplicates are
    /// yielded as often as they appear.
    pub fn moves_in_level_range(
        &self,
        level_max: u8,
        level_min: u8,
    ) -> impl Iterator<Item = u16> + Clone + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.level >= level_min && entry.level <= level_max)
            .map(|entry| entry.move_id)
    }

    pub fn moves_at_level(&self, level: u8) -> impl Iterator<Item = u16> + Clone + '_ {
        self.moves_in_level_range(level, level)
    }

    /// Replay level-up learning from level 1 to `level` into `moves`.
    ///
    /// Only the last four learned moves survive: each applicable entry is written
    /// at `start` and the cursor wraps, evicting the oldest slot. Moves already
    /// known are written again rather than skipped.
    ///
    /// # Panics
    /// If `moves` holds fewer than [`MOVE_SLOTS`] slots.
    pub fn set_encounter_moves(&self, level: u8, moves: &mut [u16], start: usize) {
        assert!(
            moves.len() >= MOVE_SLOTS,
            "encounter move buffer needs {MOVE_SLOTS} slots, got {}",
            moves.len()
        );

        let mut cursor = start % MOVE_SLOTS;
        for entry in self
            .entries
            .iter()
            .filter(|entry| entry.level != 0 && entry.level <= level)
        {
            moves[cursor] = entry.move_id;
            cursor = (cursor + 1) % MOVE_SLOTS;
        }
    }
}

/// Slot after the last occupied one, wrapping; 0 when every slot is empty.
pub fn encounter_start_cursor(moves: &[u16]) -> usize {
    moves
        .iter()
        .take(MOVE_SLOTS)
        .rposition(|&move_id| move_id != 0)
        .map_or(0, |last| (last + 1) % MOVE_SLOTS)
}

/// Byte layout of one learnset entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnsetEncoding {
    /// `[level: u8, move: u8]` pairs (generations 1 and 2).
    BytePairs,
    /// Little-endian `u16` words: 9-bit move id, 7-bit level (generation 3).
    PackedWords,
}

/// Learnset layout for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearnsetFormat {
    generation: Generation,
}

impl LearnsetFormat {
    pub const fn new(generation: Generation) -> Self {
        Self { generation }
    }

    pub const fn encoding(self) -> LearnsetEncoding {
        match self.generation {
            Generation::Gen1 | Generation::Gen2 => LearnsetEncoding::BytePairs,
            Generation::Gen3 => LearnsetEncoding::PackedWords,
        }
    }

    /// Decode one species' learnset.
    pub fn decode(self, species: usize, raw: &[u8]) -> TableResult<Learnset> {
        if raw.len() % 2 != 0 {
            return Err(TableError::MalformedLearnset {
                species,
                len: raw.len(),
                generation: self.generation,
            });
        }

        let encoding = self.encoding();
        let entries = raw
            .chunks_exact(2)
            .map(|chunk| match encoding {
                LearnsetEncoding::BytePairs => LearnsetEntry {
                    level: chunk[0],
                    move_id: chunk[1] as u16,
                },
                LearnsetEncoding::PackedWords => {
                    let word = u16::from_le_bytes([chunk[0], chunk[1]]);
                    LearnsetEntry {
                        level: (word >> GEN3_LEVEL_SHIFT) as u8,
                        move_id: word & GEN3_MOVE_MASK,
                    }
                }
            })
            .collect();

        Ok(Learnset::new(entries))
    }
}
