/// The reachable species and level window of an entity at one evolution stage.
///
/// Produced by the evolution-chain analysis; the learn rules only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvoCriteria {
    pub species: u16,
    pub form: u8,
    pub level_min: u8,
    pub level_max: u8,
}

impl EvoCriteria {
    pub fn new(species: u16, form: u8, level_min: u8, level_max: u8) -> Self {
        debug_assert!(level_min <= level_max, "level window is inverted");
        Self {
            species,
            form,
            level_min,
            level_max,
        }
    }

    /// Whether `level` lies within the inclusive window.
    pub fn inside_level_range(&self, level: u8) -> bool {
        (self.level_min..=self.level_max).contains(&level)
    }
}
