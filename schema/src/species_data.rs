use serde::{Deserialize, Serialize};

/// Base stats as stored in a personal record. Opaque to the learn rules; decoded
/// so callers holding a record do not need to re-read the raw bytes.
/// Generation 1 has a single Special stat, stored in both special fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

impl BaseStats {
    pub fn total(&self) -> u16 {
        self.hp as u16
            + self.attack as u16
            + self.defense as u16
            + self.sp_attack as u16
            + self.sp_defense as u16
            + self.speed as u16
    }
}
