// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bit positions and the 32-bit mask they address.
//!
//! [`BitIndex`] is a validated bit position in `0..32`, so every shift
//! performed through it stays inside a `u32`. [`Bitmask`] is the unsigned mask
//! itself; its [`Display`](fmt::Display) impl always renders the unsigned value
//! as `0x`-prefixed lowercase hex, so bit 31 reads `0x80000000`.

use core::fmt;

/// A bit position that is guaranteed to be addressable in a [`Bitmask`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitIndex(u8);

impl BitIndex {
    /// Number of addressable bit positions.
    pub const COUNT: u32 = u32::BITS;

    /// The most significant bit position.
    pub const MAX: Self = Self(31);

    /// Returns the bit index for `index`, or `None` if it is `>= 32`.
    #[inline]
    #[must_use]
    pub const fn new(index: u32) -> Option<Self> {
        if index < Self::COUNT {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "index < 32 was checked above"
            )]
            let idx = index as u8;
            Some(Self(idx))
        } else {
            None
        }
    }

    /// Returns the raw bit position.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// Returns the position as a `usize`, for indexing item storage.
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Returns the single-bit mask for this position.
    #[inline]
    #[must_use]
    pub const fn bit(self) -> u32 {
        1_u32 << self.0
    }
}

impl fmt::Debug for BitIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitIndex({})", self.0)
    }
}

impl fmt::Display for BitIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An unsigned 32-bit mask.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bitmask(pub u32);

impl Bitmask {
    /// The mask with no bits set.
    pub const EMPTY: Self = Self(0);

    /// Returns the raw mask value.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if the bit at `index` is set.
    #[inline]
    #[must_use]
    pub const fn is_set(self, index: BitIndex) -> bool {
        self.0 & index.bit() != 0
    }

    /// Returns a copy with the bit at `index` set.
    #[inline]
    #[must_use]
    pub const fn with(self, index: BitIndex) -> Self {
        Self(self.0 | index.bit())
    }

    /// Returns a copy with the bit at `index` cleared.
    #[inline]
    #[must_use]
    pub const fn without(self, index: BitIndex) -> Self {
        Self(self.0 & !index.bit())
    }

    /// Returns a copy with the bit at `index` set to `on`.
    #[inline]
    #[must_use]
    pub const fn with_bit(self, index: BitIndex, on: bool) -> Self {
        if on {
            self.with(index)
        } else {
            self.without(index)
        }
    }

    /// Returns `true` if no bits are set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Bitmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitmask({self})")
    }
}

/// Renders `0x` followed by the unsigned value in lowercase hex.
impl fmt::Display for Bitmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl fmt::LowerHex for Bitmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl From<Bitmask> for u32 {
    fn from(mask: Bitmask) -> Self {
        mask.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString as _;

    #[test]
    fn bit_index_rejects_out_of_range() {
        assert!(BitIndex::new(0).is_some());
        assert!(BitIndex::new(31).is_some());
        assert!(BitIndex::new(32).is_none());
        assert!(BitIndex::new(u32::MAX).is_none());
    }

    #[test]
    fn bit_31_is_unsigned() {
        let mask = Bitmask::EMPTY.with(BitIndex::MAX);
        assert_eq!(mask.bits(), 0x8000_0000);
        assert_eq!(mask.to_string(), "0x80000000");
    }

    #[test]
    fn display_is_prefixed_lowercase_hex() {
        assert_eq!(Bitmask(0).to_string(), "0x0");
        assert_eq!(Bitmask(5).to_string(), "0x5");
        assert_eq!(Bitmask(0xABCD).to_string(), "0xabcd");
        assert_eq!(format!("{:x}", Bitmask(255)), "ff");
    }

    #[test]
    fn with_and_without_touch_one_bit() {
        let idx = BitIndex::new(4).unwrap();
        let base = Bitmask(0b1010_0001);
        let set = base.with(idx);
        assert_eq!(set.bits(), 0b1011_0001);
        assert!(set.is_set(idx));
        assert_eq!(set.without(idx), base);
        assert_eq!(base.with_bit(idx, false), base);
    }
}
