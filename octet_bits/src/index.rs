//! Typed bit positions.
//!
//! Bit positions are closed enums, so an index outside the width of the
//! value it addresses cannot be constructed. Raw integers enter through
//! `TryFrom<u8>`.
//!
//! ```rust
//! use octet_bits::{BitIndex, OctetIndex, QuartetIndex};
//!
//! assert_eq!(OctetIndex::Bit5.mask(), 0b0010_0000);
//! assert_eq!(QuartetIndex::try_from(3), Ok(QuartetIndex::Bit3));
//! assert!(QuartetIndex::try_from(4).is_err());
//! ```

use crate::BitsError;

/// A bit position inside a value that is `WIDTH` bits wide.
pub trait BitIndex: Copy + TryFrom<u8, Error = BitsError> + 'static {
    /// Number of addressable bits.
    const WIDTH: u8;

    /// Every position, least significant first. `ALL[n].shift() == n`.
    const ALL: &'static [Self];

    /// Distance of this bit from the least significant bit.
    fn shift(self) -> u8;

    /// Single-bit mask selecting this position.
    #[inline]
    fn mask(self) -> u8 {
        1 << self.shift()
    }
}

/// Bit position within an [`Octet`](crate::Octet), least significant first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum OctetIndex {
    /// Least significant bit.
    Bit0 = 0,
    /// Bit 1.
    Bit1 = 1,
    /// Bit 2.
    Bit2 = 2,
    /// Bit 3.
    Bit3 = 3,
    /// Bit 4.
    Bit4 = 4,
    /// Bit 5.
    Bit5 = 5,
    /// Bit 6.
    Bit6 = 6,
    /// Most significant bit.
    Bit7 = 7,
}

impl OctetIndex {
    pub const ALL: [OctetIndex; 8] = [
        OctetIndex::Bit0,
        OctetIndex::Bit1,
        OctetIndex::Bit2,
        OctetIndex::Bit3,
        OctetIndex::Bit4,
        OctetIndex::Bit5,
        OctetIndex::Bit6,
        OctetIndex::Bit7,
    ];
}

impl BitIndex for OctetIndex {
    const WIDTH: u8 = 8;
    const ALL: &'static [Self] = &OctetIndex::ALL;

    #[inline]
    fn shift(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for OctetIndex {
    type Error = BitsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        OctetIndex::ALL
            .get(value as usize)
            .copied()
            .ok_or(BitsError::InvalidOctetIndex(value))
    }
}

impl From<OctetIndex> for u8 {
    #[inline]
    fn from(index: OctetIndex) -> Self {
        index as u8
    }
}

/// Bit position within a [`Quartet`](crate::Quartet), least significant first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum QuartetIndex {
    /// Least significant bit.
    Bit0 = 0,
    /// Bit 1.
    Bit1 = 1,
    /// Bit 2.
    Bit2 = 2,
    /// Most significant bit.
    Bit3 = 3,
}

impl QuartetIndex {
    pub const ALL: [QuartetIndex; 4] = [
        QuartetIndex::Bit0,
        QuartetIndex::Bit1,
        QuartetIndex::Bit2,
        QuartetIndex::Bit3,
    ];

    /// The octet bit this position lands on when the quartet sits at `pos`.
    pub fn in_octet(self, pos: QuartetPosition) -> OctetIndex {
        match pos {
            QuartetPosition::Lo => OctetIndex::ALL[self as usize],
            QuartetPosition::Hi => OctetIndex::ALL[self as usize + 4],
        }
    }
}

impl BitIndex for QuartetIndex {
    const WIDTH: u8 = 4;
    const ALL: &'static [Self] = &QuartetIndex::ALL;

    #[inline]
    fn shift(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for QuartetIndex {
    type Error = BitsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        QuartetIndex::ALL
            .get(value as usize)
            .copied()
            .ok_or(BitsError::InvalidQuartetIndex(value))
    }
}

impl From<QuartetIndex> for u8 {
    #[inline]
    fn from(index: QuartetIndex) -> Self {
        index as u8
    }
}

/// Which half of an octet a quartet occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QuartetPosition {
    /// Bits 0..=3.
    Lo = 0,
    /// Bits 4..=7.
    Hi = 1,
}

impl TryFrom<u8> for QuartetPosition {
    type Error = BitsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(QuartetPosition::Lo),
            1 => Ok(QuartetPosition::Hi),
            other => Err(BitsError::InvalidQuartetPosition(other)),
        }
    }
}
