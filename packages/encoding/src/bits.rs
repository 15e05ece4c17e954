//! Bit-level stages of the encode pipeline
//!
//! An input is first normalized into a [`BitStream`], which is padded with
//! zero bits up to a multiple of six and then cut into [`Sextet`]s. Each
//! sextet later becomes exactly one alphabet symbol.

use std::fmt;

/// Width of one alphabet symbol, in bits.
pub const SEXTET_BITS: usize = 6;

/// Ordered bits, most significant bit first.
///
/// The bit length is tracked separately from the backing bytes because
/// integer inputs produce streams that are not a whole number of bytes.
/// Unused low-order bits of the last byte are always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bytes: Vec<u8>,
    len: usize,
}

impl BitStream {
    /// Bits of `bytes`, eight per byte, in order.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let len = bytes.len() * 8;
        Self { bytes, len }
    }

    /// Binary numeral of `value` with no leading zeros, so `5` is `101`.
    /// Zero is the single bit `0`.
    #[must_use]
    pub fn from_integer(value: u64) -> Self {
        let len = ((u64::BITS - value.leading_zeros()) as usize).max(1);
        let aligned = value << (u64::BITS as usize - len);
        let bytes = aligned.to_be_bytes()[..len.div_ceil(8)].to_vec();
        Self { bytes, len }
    }

    /// Number of bits in the stream.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stream holds no bits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bit at `index`, or `None` past the end.
    #[must_use]
    pub fn bit(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        if self.len == self.bytes.len() * 8 {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[self.len / 8] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }
}

impl fmt::Display for BitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (0..self.len).try_for_each(|i| {
            f.write_str(if self.bit(i) == Some(true) { "1" } else { "0" })
        })
    }
}

/// A 6-bit group taken from a [`BitStream`]. Always `< 64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sextet(u8);

impl Sextet {
    /// Wrap `value` if it fits in six bits.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (value < 64).then_some(Self(value))
    }

    /// The numeric value, `0..=63`.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

/// Append zero bits until the length is a multiple of six. A stream that is
/// already aligned is returned untouched.
#[must_use]
pub fn pad(mut bits: BitStream) -> BitStream {
    let missing = (SEXTET_BITS - bits.len() % SEXTET_BITS) % SEXTET_BITS;
    for _ in 0..missing {
        bits.push(false);
    }
    bits
}

/// Cut the stream into consecutive sextets.
///
/// On a padded stream every group is complete. An unpadded tail is read as
/// if the missing bits were zero, which is exactly what [`pad`] would add.
#[must_use]
pub fn split_into_chunks(bits: &BitStream) -> Vec<Sextet> {
    (0..bits.len().div_ceil(SEXTET_BITS))
        .map(|chunk| {
            let value = (0..SEXTET_BITS).fold(0u8, |acc, offset| {
                let bit = bits.bit(chunk * SEXTET_BITS + offset).unwrap_or(false);
                (acc << 1) | u8::from(bit)
            });
            Sextet(value)
        })
        .collect()
}
