use crate::LearnEnvironment;
use serde::{Deserialize, Serialize};

/// Raw table blobs for one learn environment, exactly as packed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlob {
    pub environment: LearnEnvironment,
    /// Concatenated fixed-size personal records, indexed by species.
    pub personal: Vec<u8>,
    /// Linked blob of level-up learnsets, indexed by species.
    pub learnsets: Vec<u8>,
    /// Linked blob of egg move lists. Empty for generations without breeding.
    #[serde(default)]
    pub egg_moves: Vec<u8>,
}

/// The packed resource holding every environment's tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBundle {
    pub tables: Vec<TableBlob>,
}

impl ResourceBundle {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }

    pub fn get(&self, environment: LearnEnvironment) -> Option<&TableBlob> {
        self.tables.iter().find(|blob| blob.environment == environment)
    }
}
