//! 4-bit values.
//!
//! # Examples
//!
//! ```rust
//! use octet_bits::{Quartet, QuartetIndex, quartets_from_byte};
//!
//! let (hi, lo) = quartets_from_byte(0b1000_1110);
//! assert_eq!(hi.bits(), 0b1000);
//! assert_eq!(lo.bits(), 0b1110);
//!
//! let mut q = Quartet::ZERO;
//! q.set(QuartetIndex::Bit0).set(QuartetIndex::Bit3);
//! assert_eq!(q.bits(), 0b1001);
//! ```

use core::fmt;

#[cfg(feature = "alloc")]
use alloc::{format, string::String};
use bytemuck_derive::{NoUninit, Zeroable};

use crate::BitsError;
use crate::bit_ops::{self, LOW_NIBBLE, SetBits};
use crate::index::QuartetIndex;
use crate::map::QuartetMap;

/// A 4-bit value held in the low nibble of a byte.
///
/// The high nibble of the backing byte is always zero. Every constructor
/// and mutator keeps it that way, so the value can be placed into either
/// half of an [`Octet`](crate::Octet) without masking.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, NoUninit)]
#[repr(transparent)]
pub struct Quartet {
    bits: u8,
}

// Safety: Quartet is a transparent u8 and any byte in 0..=0x0F is a valid Quartet
unsafe impl bytemuck::CheckedBitPattern for Quartet {
    type Bits = u8;

    #[inline]
    fn is_valid_bit_pattern(bits: &u8) -> bool {
        *bits <= LOW_NIBBLE
    }
}

impl Quartet {
    pub const ZERO: Quartet = Quartet { bits: 0 };
    pub const MAX: Quartet = Quartet { bits: LOW_NIBBLE };

    /// Creates a quartet from a value in `0..=15`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::QuartetOverflow`] if `value` needs more than 4 bits.
    ///
    /// ```
    /// use octet_bits::Quartet;
    ///
    /// assert_eq!(Quartet::new(0b1010)?.bits(), 0b1010);
    /// assert!(Quartet::new(0x10).is_err());
    /// # Ok::<(), octet_bits::BitsError>(())
    /// ```
    pub const fn new(value: u8) -> Result<Self, BitsError> {
        if value > LOW_NIBBLE {
            return Err(BitsError::QuartetOverflow(value));
        }
        Ok(Self { bits: value })
    }

    /// Keeps the low nibble of `byte` and discards the rest.
    pub const fn from_low_bits(byte: u8) -> Self {
        Self {
            bits: byte & LOW_NIBBLE,
        }
    }

    /// Takes the high nibble of `byte`, shifted down.
    pub const fn from_high_bits(byte: u8) -> Self {
        Self { bits: byte >> 4 }
    }

    /// The value, always in `0..=15`.
    pub const fn bits(&self) -> u8 {
        self.bits
    }

    /// The value moved into the high nibble of a byte.
    pub const fn to_high_bits(&self) -> u8 {
        self.bits << 4
    }

    pub fn set(&mut self, index: QuartetIndex) -> &mut Self {
        self.bits = bit_ops::set(self.bits, index);
        self
    }

    pub fn unset(&mut self, index: QuartetIndex) -> &mut Self {
        self.bits = bit_ops::unset(self.bits, index);
        self
    }

    /// Flips one bit. Toggling the same index twice restores the value.
    pub fn toggle(&mut self, index: QuartetIndex) -> &mut Self {
        self.bits = bit_ops::toggle(self.bits, index);
        self
    }

    pub fn is_set(&self, index: QuartetIndex) -> bool {
        bit_ops::is_set(self.bits, index)
    }

    pub fn quartet_map(&self) -> QuartetMap {
        QuartetMap::from_bits(self.bits)
    }

    /// Positions of the set bits, least significant first.
    pub fn iter_set(&self) -> SetBits<QuartetIndex> {
        SetBits::new(self.bits)
    }

    pub fn count_set(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Four `0`/`1` characters, most significant bit first.
    #[cfg(feature = "alloc")]
    pub fn binary_string(&self) -> String {
        format!("{:04b}", self.bits)
    }

    /// Reinterprets raw bytes as quartets without copying.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::InvalidBitPattern`] if any byte is above `0x0F`.
    ///
    /// ```
    /// use octet_bits::Quartet;
    ///
    /// let qs = Quartet::try_cast_slice(&[0x3, 0xF])?;
    /// assert_eq!(qs[1], Quartet::MAX);
    /// assert!(Quartet::try_cast_slice(&[0x3, 0x10]).is_err());
    /// # Ok::<(), octet_bits::BitsError>(())
    /// ```
    pub fn try_cast_slice(bytes: &[u8]) -> Result<&[Quartet], BitsError> {
        Ok(bytemuck::checked::try_cast_slice(bytes)?)
    }

    pub fn as_bytes(quartets: &[Quartet]) -> &[u8] {
        bytemuck::cast_slice(quartets)
    }
}

/// Splits a byte into its (high, low) nibbles.
pub fn quartets_from_byte(byte: u8) -> (Quartet, Quartet) {
    (Quartet::from_high_bits(byte), Quartet::from_low_bits(byte))
}

impl TryFrom<u8> for Quartet {
    type Error = BitsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Quartet::new(value)
    }
}

impl From<Quartet> for u8 {
    #[inline]
    fn from(q: Quartet) -> Self {
        q.bits
    }
}

impl fmt::Display for Quartet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.bits)
    }
}

impl fmt::Binary for Quartet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.bits, f)
    }
}

impl fmt::LowerHex for Quartet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.bits, f)
    }
}

impl fmt::UpperHex for Quartet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.bits, f)
    }
}
