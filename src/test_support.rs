//! Builders for packed table fixtures used across the unit tests.

use crate::learn_source::LearnSource;
use crate::machine::machine_moves;
use crate::personal::PersonalFormat;
use crate::tables::GenerationTables;
use schema::{Generation, LearnEnvironment, TableBlob};
use std::collections::BTreeMap;

/// Pack `entries` into a linked blob tagged with `identifier`.
pub fn pack_linked(identifier: [u8; 2], entries: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&identifier);
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());

    let mut offset = 4 + (entries.len() + 1) * 4;
    for entry in entries {
        out.extend_from_slice(&(offset as u32).to_le_bytes());
        offset += entry.len();
    }
    out.extend_from_slice(&(offset as u32).to_le_bytes());

    for entry in entries {
        out.extend_from_slice(entry);
    }
    out
}

pub fn encode_learnset(generation: Generation, entries: &[(u8, u16)]) -> Vec<u8> {
    let mut out = Vec::with_capacity(entries.len() * 2);
    for &(level, move_id) in entries {
        match generation {
            Generation::Gen1 | Generation::Gen2 => out.extend_from_slice(&[level, move_id as u8]),
            Generation::Gen3 => {
                let word = ((level as u16) << 9) | (move_id & 0x1FF);
                out.extend_from_slice(&word.to_le_bytes());
            }
        }
    }
    out
}

pub fn encode_egg_moves(generation: Generation, moves: &[u16]) -> Vec<u8> {
    match generation {
        Generation::Gen3 => moves.iter().flat_map(|move_id| move_id.to_le_bytes()).collect(),
        _ => moves.iter().map(|&move_id| move_id as u8).collect(),
    }
}

/// Writes one personal record in a generation's byte layout.
#[derive(Debug, Clone)]
pub struct PersonalBuilder {
    generation: Generation,
    stats: [u8; 6],
    machines: Vec<usize>,
    tutors: Vec<usize>,
    initial_moves: [u16; 4],
}

impl PersonalBuilder {
    pub fn new(generation: Generation) -> Self {
        Self {
            generation,
            stats: [0; 6],
            machines: Vec::new(),
            tutors: Vec::new(),
            initial_moves: [0; 4],
        }
    }

    /// HP, Attack, Defense, Speed, Sp. Attack, Sp. Defense.
    pub fn stats(mut self, stats: [u8; 6]) -> Self {
        self.stats = stats;
        self
    }

    pub fn machines(mut self, indices: &[usize]) -> Self {
        self.machines = indices.to_vec();
        self
    }

    pub fn tutors(mut self, indices: &[usize]) -> Self {
        self.tutors = indices.to_vec();
        self
    }

    /// Only generation 1 records carry starting moves.
    pub fn initial_moves(mut self, moves: [u16; 4]) -> Self {
        self.initial_moves = moves;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut raw = vec![0u8; PersonalFormat::new(self.generation).record_size()];
        let [hp, attack, defense, speed, sp_attack, sp_defense] = self.stats;
        let machine_bits = bits_of(&self.machines);
        let tutor_bits = bits_of(&self.tutors);

        match self.generation {
            Generation::Gen1 => {
                raw[0x01..0x06].copy_from_slice(&[hp, attack, defense, speed, sp_attack]);
                for (slot, &move_id) in self.initial_moves.iter().enumerate() {
                    raw[0x0F + slot] = move_id as u8;
                }
                raw[0x14..0x1B].copy_from_slice(&machine_bits.to_le_bytes()[..7]);
            }
            Generation::Gen2 => {
                raw[0x01..0x07].copy_from_slice(&[hp, attack, defense, speed, sp_attack, sp_defense]);
                let shift = machine_moves(Generation::Gen2).len();
                let flags = machine_bits | (tutor_bits << shift);
                raw[0x18..0x20].copy_from_slice(&flags.to_le_bytes());
            }
            Generation::Gen3 => {
                raw[0x00..0x06].copy_from_slice(&[hp, attack, defense, speed, sp_attack, sp_defense]);
                raw[0x1C..0x24].copy_from_slice(&machine_bits.to_le_bytes());
                raw[0x24..0x28].copy_from_slice(&(tutor_bits as u32).to_le_bytes());
            }
        }
        raw
    }
}

fn bits_of(indices: &[usize]) -> u64 {
    indices.iter().fold(0, |acc, &index| acc | 1 << index)
}

/// A whole environment's tables, built species by species.
///
/// The personal and learnset tables span species `0..=highest id given`;
/// species without an explicit entry get an empty record and learnset.
#[derive(Debug, Clone)]
pub struct TableFixture {
    environment: LearnEnvironment,
    species: BTreeMap<u16, (PersonalBuilder, Vec<(u8, u16)>)>,
    egg_moves: BTreeMap<u16, Vec<u16>>,
}

impl TableFixture {
    pub fn new(environment: LearnEnvironment) -> Self {
        Self {
            environment,
            species: BTreeMap::new(),
            egg_moves: BTreeMap::new(),
        }
    }

    pub fn species(mut self, id: u16, personal: PersonalBuilder, learnset: &[(u8, u16)]) -> Self {
        self.species.insert(id, (personal, learnset.to_vec()));
        self
    }

    pub fn egg_moves(mut self, id: u16, moves: &[u16]) -> Self {
        self.egg_moves.insert(id, moves.to_vec());
        self
    }

    fn generation(&self) -> Generation {
        self.environment.generation()
    }

    pub fn blob(&self) -> TableBlob {
        let generation = self.generation();
        let identifier = self.environment.blob_identifier();
        let highest = self
            .species
            .keys()
            .chain(self.egg_moves.keys())
            .copied()
            .max()
            .unwrap_or(0);

        let mut personal = Vec::new();
        let mut learnsets = Vec::new();
        let mut egg_moves = Vec::new();
        for id in 0..=highest {
            match self.species.get(&id) {
                Some((record, learnset)) => {
                    personal.extend(record.build());
                    learnsets.push(encode_learnset(generation, learnset));
                }
                None => {
                    personal.extend(PersonalBuilder::new(generation).build());
                    learnsets.push(Vec::new());
                }
            }
            let eggs = self.egg_moves.get(&id).map_or(&[][..], Vec::as_slice);
            egg_moves.push(encode_egg_moves(generation, eggs));
        }

        TableBlob {
            environment: self.environment,
            personal,
            learnsets: pack_linked(identifier, &learnsets),
            egg_moves: match generation {
                Generation::Gen1 => Vec::new(),
                _ => pack_linked(identifier, &egg_moves),
            },
        }
    }

    pub fn tables(&self) -> GenerationTables {
        GenerationTables::decode(&self.blob()).expect("fixture tables decode")
    }

    pub fn source(&self) -> LearnSource {
        LearnSource::new(self.tables())
    }
}
