//! Machine (TM/HM) index tables and fixed-width compatibility bit sets.
//!
//! Bit `i` of a species' machine bits refers to entry `i` of its generation's
//! index table, so the two must always be versioned together.

use schema::Generation;

/// TM01-TM50 followed by HM01-HM05.
pub const MACHINE_MOVES_1: [u16; 55] = [
      5,  13,  14,  18,  25,  92,  32,  34,  36,  38, // TM01-TM10
     61,  55,  58,  59,  63,   6,  66,  68,  69,  99, // TM11-TM20
     72,  76,  82,  85,  87,  89,  90,  91,  94, 100, // TM21-TM30
    102, 104, 115, 117, 118, 120, 121, 126, 129, 130, // TM31-TM40
    135, 138, 143, 156,  86, 149, 153, 157, 161, 164, // TM41-TM50
     15,  19,  57,  70, 148, // HM01-HM05
];

/// TM01-TM50 followed by HM01-HM07.
pub const MACHINE_MOVES_2: [u16; 57] = [
    223,  29, 174, 205,  46,  92, 192, 249, 244, 237, // TM01-TM10
    241, 230, 173,  59,  63, 196, 182, 240, 202, 203, // TM11-TM20
    218,  76, 231, 225,  87,  89, 216,  91,  94, 247, // TM21-TM30
    189, 104,   8, 207, 214, 188, 201, 126, 129, 111, // TM31-TM40
      9, 138, 197, 156, 213, 168, 211,   7, 210, 171, // TM41-TM50
     15,  19,  57,  70, 148, 250, 127, // HM01-HM07
];

/// TM01-TM50 followed by HM01-HM08.
pub const MACHINE_MOVES_3: [u16; 58] = [
    264, 337, 352, 347,  46,  92, 258, 339, 331, 237, // TM01-TM10
    241, 269,  58,  59,  63, 113, 182, 240, 202, 219, // TM11-TM20
    218,  76, 231,  85,  87,  89, 216,  91,  94, 247, // TM21-TM30
    280, 104, 115, 351,  53, 188, 201, 126, 317, 332, // TM31-TM40
    259, 263, 290, 156, 213, 168, 211, 285, 289, 315, // TM41-TM50
     15,  19,  57,  70, 148, 249, 127, 291, // HM01-HM08
];

/// Index table for `generation`; position is the bit index into machine bits.
pub const fn machine_moves(generation: Generation) -> &'static [u16] {
    match generation {
        Generation::Gen1 => &MACHINE_MOVES_1,
        Generation::Gen2 => &MACHINE_MOVES_2,
        Generation::Gen3 => &MACHINE_MOVES_3,
    }
}

/// Bit position of `move_id` in `table`. The tables are in item order, not move
/// order, so this is a linear scan. `None` means no machine teaches the move.
pub fn machine_index(table: &[u16], move_id: u16) -> Option<usize> {
    if move_id == 0 {
        return None;
    }
    table.iter().position(|&candidate| candidate == move_id)
}

/// A fixed-width bit set of at most 64 flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CompatibilityBits {
    bits: u64,
    width: u8,
}

impl CompatibilityBits {
    /// Keep the low `width` bits of `bits`; anything above is padding.
    pub const fn new(bits: u64, width: usize) -> Self {
        let width = if width > 64 { 64 } else { width };
        let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
        Self {
            bits: bits & mask,
            width: width as u8,
        }
    }

    /// Read up to 8 bytes little-endian, bit 0 of the first byte being flag 0.
    pub fn from_le_bytes(bytes: &[u8], width: usize) -> Self {
        let bits = bytes
            .iter()
            .take(8)
            .enumerate()
            .fold(0u64, |acc, (i, &byte)| acc | (byte as u64) << (i * 8));
        Self::new(bits, width)
    }

    pub const fn width(&self) -> usize {
        self.width as usize
    }

    pub const fn raw(&self) -> u64 {
        self.bits
    }

    /// Flag at `index`; out-of-width indices read as unset.
    pub const fn get(&self, index: usize) -> bool {
        index < self.width as usize && (self.bits >> index) & 1 == 1
    }

    pub const fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Positions of all set flags, ascending. Cloning restarts the walk.
    pub fn set_bits(&self) -> SetBits {
        SetBits {
            remaining: self.bits,
        }
    }
}

/// Iterator over set bit positions of a [`CompatibilityBits`].
#[derive(Debug, Clone)]
pub struct SetBits {
    remaining: u64,
}

impl Iterator for SetBits {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for SetBits {}

/// Mark every move whose machine flag is set in `bits`.
///
/// # Panics
/// If `result` cannot be indexed by a move id present in `index_table`.
pub fn mark_all_machine_moves(result: &mut [bool], bits: &CompatibilityBits, index_table: &[u16]) {
    for index in bits.set_bits() {
        if let Some(&move_id) = index_table.get(index) {
            result[move_id as usize] = true;
        }
    }
}
