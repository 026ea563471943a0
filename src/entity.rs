use schema::Generation;

/// What the learn rules need to know about the entity being checked.
///
/// Implemented by the caller's entity model.
pub trait EntityContext {
    /// Generation number of the storage format the entity currently lives in.
    fn format(&self) -> u8;

    /// Highest move id representable in the entity's storage format. Formats
    /// newer than the modelled generations impose no extra limit.
    fn max_move_id(&self) -> u16 {
        Generation::from_number(self.format()).map_or(u16::MAX, Generation::max_move)
    }
}

/// Minimal context carrying only the storage format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityFormat(pub u8);

impl EntityContext for EntityFormat {
    fn format(&self) -> u8 {
        self.0
    }
}

impl<T: EntityContext + ?Sized> EntityContext for &T {
    fn format(&self) -> u8 {
        (**self).format()
    }

    fn max_move_id(&self) -> u16 {
        (**self).max_move_id()
    }
}
