//! National dex ids of the species that carry special tutor rules.

pub const VENUSAUR: u16 = 3;
pub const CHARIZARD: u16 = 6;
pub const BLASTOISE: u16 = 9;
pub const PIKACHU: u16 = 25;
pub const RAICHU: u16 = 26;
pub const MEGANIUM: u16 = 154;
pub const TYPHLOSION: u16 = 157;
pub const FERALIGATR: u16 = 160;
pub const SCEPTILE: u16 = 254;
pub const BLAZIKEN: u16 = 257;
pub const SWAMPERT: u16 = 260;
