//! 8-bit values with bit and nibble level access.
//!
//! # Examples
//!
//! ## Single bits
//!
//! ```rust
//! use octet_bits::{Octet, OctetIndex};
//!
//! let mut o = Octet::from_byte(0b0000_0000);
//! o.set(OctetIndex::Bit0).set(OctetIndex::Bit7).toggle(OctetIndex::Bit1);
//! assert_eq!(o.byte(), 0b1000_0011);
//! assert!(o.is_set(OctetIndex::Bit7));
//! assert_eq!(o.to_string(), "10000011");
//! ```
//!
//! ## Nibbles
//!
//! ```rust
//! use octet_bits::{Octet, Quartet, QuartetPosition};
//!
//! let mut o = Octet::from_byte(0xA5);
//! o.overwrite_quartet(Quartet::new(0x3)?, QuartetPosition::Hi);
//! assert_eq!(o.byte(), 0x35);
//!
//! let (hi, lo) = o.quartets();
//! assert_eq!((hi.bits(), lo.bits()), (0x3, 0x5));
//! # Ok::<(), octet_bits::BitsError>(())
//! ```

use core::fmt;

#[cfg(feature = "alloc")]
use alloc::{format, string::String};
use bytemuck_derive::{Pod, Zeroable};

use crate::bit_ops::{self, SetBits};
use crate::index::{OctetIndex, QuartetPosition};
use crate::map::{OctetMap, QuartetMap};
use crate::quartet::{Quartet, quartets_from_byte};

/// An 8-bit value. Every bit pattern is valid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Octet {
    bits: u8,
}

impl Octet {
    pub const fn from_byte(byte: u8) -> Self {
        Self { bits: byte }
    }

    /// Assembles an octet with `hi` in bits 4..=7 and `lo` in bits 0..=3.
    ///
    /// ```
    /// use octet_bits::{Octet, Quartet};
    ///
    /// let o = Octet::from_quartets(Quartet::new(0b1000)?, Quartet::new(0b1110)?);
    /// assert_eq!(o.byte(), 0b1000_1110);
    /// # Ok::<(), octet_bits::BitsError>(())
    /// ```
    pub fn from_quartets(hi: Quartet, lo: Quartet) -> Self {
        Self {
            bits: bit_ops::join_nibbles(hi.bits(), lo.bits()),
        }
    }

    /// The stored byte.
    pub const fn byte(&self) -> u8 {
        self.bits
    }

    pub fn set(&mut self, index: OctetIndex) -> &mut Self {
        self.bits = bit_ops::set(self.bits, index);
        self
    }

    pub fn unset(&mut self, index: OctetIndex) -> &mut Self {
        self.bits = bit_ops::unset(self.bits, index);
        self
    }

    /// Flips one bit. Toggling the same index twice restores the value.
    pub fn toggle(&mut self, index: OctetIndex) -> &mut Self {
        self.bits = bit_ops::toggle(self.bits, index);
        self
    }

    pub fn is_set(&self, index: OctetIndex) -> bool {
        bit_ops::is_set(self.bits, index)
    }

    /// Replaces all eight bits.
    pub fn overwrite(&mut self, byte: u8) -> &mut Self {
        self.bits = byte;
        self
    }

    /// Replaces one nibble with `quartet`, leaving the other nibble as is.
    ///
    /// A [`Quartet`]'s high nibble is zero by construction, so `quartet` is
    /// taken by value and needs no clearing before it is shifted into place.
    ///
    /// ```
    /// use octet_bits::{Octet, Quartet, QuartetPosition};
    ///
    /// let mut o = Octet::from_byte(0b1111_0000);
    /// o.overwrite_quartet(Quartet::new(0b0101)?, QuartetPosition::Lo);
    /// assert_eq!(o.byte(), 0b1111_0101);
    /// # Ok::<(), octet_bits::BitsError>(())
    /// ```
    pub fn overwrite_quartet(&mut self, quartet: Quartet, pos: QuartetPosition) -> &mut Self {
        self.bits = bit_ops::replace_nibble(self.bits, quartet.bits(), pos);
        self
    }

    /// Like [`overwrite_quartet`](Self::overwrite_quartet), but takes a raw
    /// byte. Only its low nibble is used; bits 4..=7 are dropped.
    pub fn overwrite_nibble(&mut self, raw: u8, pos: QuartetPosition) -> &mut Self {
        self.overwrite_quartet(Quartet::from_low_bits(raw), pos)
    }

    /// Clears every bit.
    pub fn nullify(&mut self) -> &mut Self {
        self.bits = 0;
        self
    }

    /// Splits into (high, low) quartets.
    pub fn quartets(&self) -> (Quartet, Quartet) {
        quartets_from_byte(self.bits)
    }

    pub fn quartet(&self, pos: QuartetPosition) -> Quartet {
        match pos {
            QuartetPosition::Hi => Quartet::from_high_bits(self.bits),
            QuartetPosition::Lo => Quartet::from_low_bits(self.bits),
        }
    }

    /// (high, low) nibble maps. Each map is numbered from its own nibble,
    /// so the high map's `b0` is octet bit 4.
    ///
    /// ```
    /// use octet_bits::{Octet, QuartetMap};
    ///
    /// let (hi, lo) = Octet::from_byte(0b1000_1110).quartet_maps();
    /// assert_eq!(hi, QuartetMap { b0: false, b1: false, b2: false, b3: true });
    /// assert_eq!(lo, QuartetMap { b0: false, b1: true, b2: true, b3: true });
    /// ```
    pub fn quartet_maps(&self) -> (QuartetMap, QuartetMap) {
        let (hi, lo) = self.quartets();
        (hi.quartet_map(), lo.quartet_map())
    }

    pub fn octet_map(&self) -> OctetMap {
        OctetMap::from_bits(self.bits)
    }

    /// Positions of the set bits, least significant first.
    pub fn iter_set(&self) -> SetBits<OctetIndex> {
        SetBits::new(self.bits)
    }

    pub fn count_set(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Eight `0`/`1` characters, most significant bit first.
    #[cfg(feature = "alloc")]
    pub fn binary_string(&self) -> String {
        format!("{:08b}", self.bits)
    }

    /// Two lowercase hexadecimal digits.
    #[cfg(feature = "alloc")]
    pub fn hex_string(&self) -> String {
        format!("{:02x}", self.bits)
    }

    /// Views a byte buffer as octets without copying.
    pub fn cast_slice(bytes: &[u8]) -> &[Octet] {
        bytemuck::cast_slice(bytes)
    }

    pub fn cast_slice_mut(bytes: &mut [u8]) -> &mut [Octet] {
        bytemuck::cast_slice_mut(bytes)
    }

    pub fn as_bytes(octets: &[Octet]) -> &[u8] {
        bytemuck::cast_slice(octets)
    }
}

impl From<u8> for Octet {
    #[inline]
    fn from(byte: u8) -> Self {
        Octet::from_byte(byte)
    }
}

impl From<Octet> for u8 {
    #[inline]
    fn from(o: Octet) -> Self {
        o.bits
    }
}

impl From<(Quartet, Quartet)> for Octet {
    fn from((hi, lo): (Quartet, Quartet)) -> Self {
        Octet::from_quartets(hi, lo)
    }
}

impl From<Octet> for (Quartet, Quartet) {
    fn from(o: Octet) -> Self {
        o.quartets()
    }
}

impl fmt::Display for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.bits)
    }
}

impl fmt::Binary for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.bits, f)
    }
}

impl fmt::LowerHex for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.bits, f)
    }
}

impl fmt::UpperHex for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.bits, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::OctetIndex::*;

    fn o(bits: u8) -> Octet {
        Octet::from_byte(bits)
    }

    #[test]
    fn from_byte_keeps_the_byte() {
        assert_eq!(o(0b0110_1001).byte(), 0b0110_1001);
        assert_eq!(u8::from(Octet::from(0xC3u8)), 0xC3);
    }

    #[test]
    fn from_quartets_joins_nibbles() {
        let hi = Quartet::new(0b0110).unwrap();
        let lo = Quartet::new(0b1001).unwrap();
        assert_eq!(Octet::from_quartets(hi, lo), o(0b0110_1001));
        assert_eq!(Octet::from((hi, lo)), o(0b0110_1001));
    }

    #[test]
    fn set_changes_or_keeps() {
        assert_eq!(*o(0b1111_1110).set(Bit0), o(0b1111_1111));
        assert_eq!(*o(0b1111_1111).set(Bit0), o(0b1111_1111));
        assert_eq!(*o(0b0111_1111).set(Bit7), o(0b1111_1111));
        assert_eq!(*o(0b1111_1111).set(Bit7), o(0b1111_1111));
    }

    #[test]
    fn unset_changes_or_keeps() {
        assert_eq!(*o(0b1111_1111).unset(Bit0), o(0b1111_1110));
        assert_eq!(*o(0b1111_1110).unset(Bit0), o(0b1111_1110));
        assert_eq!(*o(0b1111_1111).unset(Bit7), o(0b0111_1111));
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(*o(0b0000_0000).toggle(Bit3), o(0b0000_1000));
        assert_eq!(*o(0b0000_1000).toggle(Bit3), o(0b0000_0000));
    }

    #[test]
    fn mutators_chain() {
        let mut a = o(0);
        a.set(Bit1).set(Bit6).toggle(Bit1).unset(Bit0);
        assert_eq!(a.byte(), 0b0100_0000);
    }

    #[test]
    fn is_set_reads_single_bits() {
        assert!(o(0b0000_0100).is_set(Bit2));
        assert!(!o(0b1111_1011).is_set(Bit2));
    }

    #[test]
    fn octet_map_fields() {
        let map = o(0b0110_1111).octet_map();
        assert!(map.b0 && map.b1 && map.b2 && map.b3);
        assert!(!map.b4);
        assert!(map.b5 && map.b6);
        assert!(!map.b7);
    }

    #[test]
    fn quartet_maps_are_rebased() {
        let (hi, lo) = o(0b1000_1110).quartet_maps();
        assert_eq!(
            hi,
            QuartetMap {
                b0: false,
                b1: false,
                b2: false,
                b3: true
            }
        );
        assert_eq!(
            lo,
            QuartetMap {
                b0: false,
                b1: true,
                b2: true,
                b3: true
            }
        );
    }

    #[test]
    fn quartets_split() {
        let (hi, lo) = o(0b1000_1110).quartets();
        assert_eq!(hi.bits(), 0b1000);
        assert_eq!(lo.bits(), 0b1110);
        assert_eq!(o(0b1000_1110).quartet(QuartetPosition::Hi), hi);
        assert_eq!(o(0b1000_1110).quartet(QuartetPosition::Lo), lo);
    }

    #[test]
    fn overwrite_nibble_drops_high_container_bits() {
        assert_eq!(
            *o(0).overwrite_nibble(0b1110_0111, QuartetPosition::Lo),
            o(0b0000_0111)
        );
        assert_eq!(
            *o(0).overwrite_nibble(0b1110_0111, QuartetPosition::Hi),
            o(0b0111_0000)
        );
    }

    #[test]
    fn overwrite_quartet_keeps_other_nibble() {
        let q = Quartet::from_low_bits(0b1110_0111);
        assert_eq!(*o(0b1010_1010).overwrite_quartet(q, QuartetPosition::Lo), o(0b1010_0111));
        assert_eq!(*o(0b1010_1010).overwrite_quartet(q, QuartetPosition::Hi), o(0b0111_1010));
    }

    #[test]
    fn overwrite_and_nullify() {
        let mut a = o(0b1010_1010);
        a.overwrite(0x5F);
        assert_eq!(a.byte(), 0x5F);
        a.nullify();
        assert_eq!(a.byte(), 0);
        assert_eq!(o(0).nullify().byte(), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn renders_binary_and_hex() {
        let a = o(0b0110_1001);
        assert_eq!(a.binary_string(), "01101001");
        assert_eq!(o(1).binary_string(), "00000001");
        assert_eq!(a.hex_string(), "69");
        assert_eq!(o(0x0A).hex_string(), "0a");
        assert_eq!(format!("{}", a), "01101001");
        assert_eq!(format!("{:#04X}", o(0xAB)), "0xAB");
    }

    #[cfg(feature = "std")]
    #[test]
    fn iter_set_and_count() {
        let a = o(0b1001_0010);
        let set: Vec<OctetIndex> = a.iter_set().collect();
        assert_eq!(set, vec![Bit1, Bit4, Bit7]);
        assert_eq!(a.count_set(), 3);
        assert_eq!(o(0).iter_set().next(), None);
    }

    #[test]
    fn byte_slices_cast_both_ways() {
        let mut buf = [0x00, 0xFF, 0x81];
        {
            let octets = Octet::cast_slice_mut(&mut buf);
            octets[0].set(Bit4);
            octets[2].nullify();
        }
        assert_eq!(buf, [0x10, 0xFF, 0x00]);

        let octets = Octet::cast_slice(&buf);
        assert!(octets[1].is_set(Bit7));
        assert_eq!(Octet::as_bytes(octets), &buf);
    }
}
