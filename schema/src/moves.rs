//! Move ids referenced by the learn rules. Ids follow the national move index,
//! which every generation extends without renumbering.

pub const NONE: u16 = 0;
pub const POUND: u16 = 1;
pub const MEGA_PUNCH: u16 = 5;
pub const FIRE_PUNCH: u16 = 7;
pub const ICE_PUNCH: u16 = 8;
pub const THUNDER_PUNCH: u16 = 9;
pub const SCRATCH: u16 = 10;
pub const SWORDS_DANCE: u16 = 14;
pub const MEGA_KICK: u16 = 25;
pub const TACKLE: u16 = 33;
pub const BODY_SLAM: u16 = 34;
pub const DOUBLE_EDGE: u16 = 38;
pub const TAIL_WHIP: u16 = 39;
pub const GROWL: u16 = 45;
pub const EMBER: u16 = 52;
pub const FLAMETHROWER: u16 = 53;
pub const WATER_GUN: u16 = 55;
pub const SURF: u16 = 57;
pub const ICE_BEAM: u16 = 58;
pub const COUNTER: u16 = 68;
pub const SEISMIC_TOSS: u16 = 69;
pub const THUNDER_SHOCK: u16 = 84;
pub const THUNDERBOLT: u16 = 85;
pub const THUNDER_WAVE: u16 = 86;
pub const THUNDER: u16 = 87;
pub const AGILITY: u16 = 97;
pub const QUICK_ATTACK: u16 = 98;
pub const MIMIC: u16 = 102;
pub const DEFENSE_CURL: u16 = 111;
pub const METRONOME: u16 = 118;
pub const SWIFT: u16 = 129;
pub const SOFT_BOILED: u16 = 135;
pub const DREAM_EATER: u16 = 138;
pub const EXPLOSION: u16 = 153;
pub const ROCK_SLIDE: u16 = 157;
pub const SUBSTITUTE: u16 = 164;
pub const SNORE: u16 = 173;
pub const MUD_SLAP: u16 = 189;
pub const ICY_WIND: u16 = 196;
pub const ENDURE: u16 = 203;
pub const ROLLOUT: u16 = 205;
pub const SWAGGER: u16 = 207;
pub const FURY_CUTTER: u16 = 210;
pub const SLEEP_TALK: u16 = 214;
pub const DYNAMIC_PUNCH: u16 = 223;
pub const PSYCH_UP: u16 = 244;
pub const BLAST_BURN: u16 = 307;
pub const HYDRO_CANNON: u16 = 308;
pub const FRENZY_PLANT: u16 = 338;
