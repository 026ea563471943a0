//! Read access to the linked-blob container.
//!
//! Layout: a two-byte identifier, a little-endian `u16` entry count `n`, then
//! `n + 1` little-endian `u32` offsets measured from the start of the blob.
//! Entry `i` spans `offsets[i]..offsets[i + 1]`.

use crate::errors::{TableError, TableResult};

const HEADER_SIZE: usize = 4;
const OFFSET_SIZE: usize = 4;

/// A validated view over a linked blob. Offsets are checked once on parse so
/// entry access never fails afterwards.
#[derive(Debug, Clone, Copy)]
pub struct LinkedBlob<'a> {
    data: &'a [u8],
    count: usize,
}

impl<'a> LinkedBlob<'a> {
    pub fn parse(data: &'a [u8], identifier: [u8; 2]) -> TableResult<Self> {
        if data.len() < HEADER_SIZE {
            return Err(TableError::TruncatedBlob {
                len: data.len(),
                needed: HEADER_SIZE,
            });
        }

        let found = [data[0], data[1]];
        if found != identifier {
            return Err(TableError::IdentifierMismatch {
                expected: identifier,
                found,
            });
        }

        let count = u16::from_le_bytes([data[2], data[3]]) as usize;
        let table_end = HEADER_SIZE + (count + 1) * OFFSET_SIZE;
        if data.len() < table_end {
            return Err(TableError::TruncatedBlob {
                len: data.len(),
                needed: table_end,
            });
        }

        let blob = Self { data, count };
        let mut previous = table_end;
        for index in 0..=count {
            let offset = blob.offset(index);
            if offset < previous || offset > data.len() {
                return Err(TableError::OffsetOutOfBounds {
                    index,
                    offset,
                    len: data.len(),
                });
            }
            previous = offset;
        }

        Ok(blob)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Entry at `index`, `None` past the end.
    pub fn get(&self, index: usize) -> Option<&'a [u8]> {
        if index >= self.count {
            return None;
        }
        Some(&self.data[self.offset(index)..self.offset(index + 1)])
    }

    pub fn entries(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        (0..self.count).filter_map(move |index| self.get(index))
    }

    fn offset(&self, index: usize) -> usize {
        let start = HEADER_SIZE + index * OFFSET_SIZE;
        let bytes = &self.data[start..start + OFFSET_SIZE];
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize
    }
}
