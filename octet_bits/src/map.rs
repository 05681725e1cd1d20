//! Named-field snapshots of bit state.
//!
//! A map is a copy taken at the moment it is produced. Mutating the source
//! value afterwards does not change the map.

use crate::bit_ops;
use crate::index::{OctetIndex, QuartetIndex};
use crate::{Octet, Quartet};

/// The four bits of a quartet, `b0` least significant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuartetMap {
    /// Bit 0.
    pub b0: bool,
    /// Bit 1.
    pub b1: bool,
    /// Bit 2.
    pub b2: bool,
    /// Bit 3.
    pub b3: bool,
}

impl QuartetMap {
    pub(crate) fn from_bits(bits: u8) -> Self {
        Self {
            b0: bit_ops::is_set(bits, QuartetIndex::Bit0),
            b1: bit_ops::is_set(bits, QuartetIndex::Bit1),
            b2: bit_ops::is_set(bits, QuartetIndex::Bit2),
            b3: bit_ops::is_set(bits, QuartetIndex::Bit3),
        }
    }

    pub fn get(&self, index: QuartetIndex) -> bool {
        match index {
            QuartetIndex::Bit0 => self.b0,
            QuartetIndex::Bit1 => self.b1,
            QuartetIndex::Bit2 => self.b2,
            QuartetIndex::Bit3 => self.b3,
        }
    }
}

impl From<QuartetMap> for Quartet {
    fn from(map: QuartetMap) -> Self {
        Quartet::from_low_bits(bit_ops::collect_bits(|idx: QuartetIndex| map.get(idx)))
    }
}

/// The eight bits of an octet, `b0` least significant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OctetMap {
    /// Bit 0.
    pub b0: bool,
    /// Bit 1.
    pub b1: bool,
    /// Bit 2.
    pub b2: bool,
    /// Bit 3.
    pub b3: bool,
    /// Bit 4.
    pub b4: bool,
    /// Bit 5.
    pub b5: bool,
    /// Bit 6.
    pub b6: bool,
    /// Bit 7.
    pub b7: bool,
}

impl OctetMap {
    pub(crate) fn from_bits(bits: u8) -> Self {
        Self {
            b0: bit_ops::is_set(bits, OctetIndex::Bit0),
            b1: bit_ops::is_set(bits, OctetIndex::Bit1),
            b2: bit_ops::is_set(bits, OctetIndex::Bit2),
            b3: bit_ops::is_set(bits, OctetIndex::Bit3),
            b4: bit_ops::is_set(bits, OctetIndex::Bit4),
            b5: bit_ops::is_set(bits, OctetIndex::Bit5),
            b6: bit_ops::is_set(bits, OctetIndex::Bit6),
            b7: bit_ops::is_set(bits, OctetIndex::Bit7),
        }
    }

    pub fn get(&self, index: OctetIndex) -> bool {
        match index {
            OctetIndex::Bit0 => self.b0,
            OctetIndex::Bit1 => self.b1,
            OctetIndex::Bit2 => self.b2,
            OctetIndex::Bit3 => self.b3,
            OctetIndex::Bit4 => self.b4,
            OctetIndex::Bit5 => self.b5,
            OctetIndex::Bit6 => self.b6,
            OctetIndex::Bit7 => self.b7,
        }
    }
}

impl From<OctetMap> for Octet {
    fn from(map: OctetMap) -> Self {
        Octet::from_byte(bit_ops::collect_bits(|idx: OctetIndex| map.get(idx)))
    }
}
