use crate::learn_source::LearnSource;
use crate::machine::{machine_index, machine_moves};
use crate::test_support::{PersonalBuilder, TableFixture};
use schema::{moves, LearnEnvironment};

pub const CHARMANDER: u16 = 4;

pub const CHARMANDER_LEARNSET: &[(u8, u16)] = &[
    (1, moves::GROWL),
    (1, moves::TAIL_WHIP),
    (1, moves::DEFENSE_CURL),
    (5, moves::QUICK_ATTACK),
    (10, moves::EMBER),
    (36, moves::FLAMETHROWER),
];

/// Charmander with Scratch as its starting move, the first TM and Surf as
/// machines, and Body Slam as an egg move where eggs exist.
pub fn charmander(environment: LearnEnvironment) -> LearnSource {
    let generation = environment.generation();
    let surf = machine_index(machine_moves(generation), moves::SURF).unwrap();
    TableFixture::new(environment)
        .species(
            CHARMANDER,
            PersonalBuilder::new(generation)
                .machines(&[0, surf])
                .initial_moves([moves::SCRATCH, 0, 0, 0]),
            CHARMANDER_LEARNSET,
        )
        .egg_moves(CHARMANDER, &[moves::BODY_SLAM])
        .source()
}
