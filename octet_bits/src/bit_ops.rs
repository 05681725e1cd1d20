use crate::index::{BitIndex, QuartetPosition};

pub(crate) const LOW_NIBBLE: u8 = 0x0F;

#[inline(always)]
pub(crate) fn set<I: BitIndex>(bits: u8, index: I) -> u8 {
    bits | index.mask()
}

#[inline(always)]
pub(crate) fn unset<I: BitIndex>(bits: u8, index: I) -> u8 {
    bits & !index.mask()
}

#[inline(always)]
pub(crate) fn toggle<I: BitIndex>(bits: u8, index: I) -> u8 {
    bits ^ index.mask()
}

#[inline(always)]
pub(crate) fn is_set<I: BitIndex>(bits: u8, index: I) -> bool {
    (bits >> index.shift()) & 1 == 1
}

#[inline(always)]
pub(crate) fn high_nibble(byte: u8) -> u8 {
    byte >> 4
}

#[inline(always)]
pub(crate) fn low_nibble(byte: u8) -> u8 {
    byte & LOW_NIBBLE
}

/// Both arguments must already fit in 4 bits.
#[inline(always)]
pub(crate) fn join_nibbles(hi: u8, lo: u8) -> u8 {
    (hi << 4) | lo
}

/// Replaces one half of `byte` with the low 4 bits of `nibble`.
#[inline(always)]
pub(crate) fn replace_nibble(byte: u8, nibble: u8, pos: QuartetPosition) -> u8 {
    let nibble = low_nibble(nibble);
    match pos {
        QuartetPosition::Hi => join_nibbles(nibble, low_nibble(byte)),
        QuartetPosition::Lo => join_nibbles(high_nibble(byte), nibble),
    }
}

/// Builds a value from every position of `I` for which `pick` holds.
pub(crate) fn collect_bits<I: BitIndex>(mut pick: impl FnMut(I) -> bool) -> u8 {
    I::ALL
        .iter()
        .filter(|&&idx| pick(idx))
        .fold(0, |bits, &idx| set(bits, idx))
}

/// Yields the positions of set bits, least significant first.
#[derive(Clone, Debug)]
pub struct SetBits<I: 'static> {
    bits: u8,
    remaining: core::slice::Iter<'static, I>,
}

impl<I: BitIndex> SetBits<I> {
    pub(crate) fn new(bits: u8) -> Self {
        Self {
            bits,
            remaining: I::ALL.iter(),
        }
    }
}

impl<I: BitIndex> Iterator for SetBits<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let bits = self.bits;
        self.remaining.by_ref().copied().find(|&idx| is_set(bits, idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OctetIndex, QuartetIndex};

    #[test]
    fn single_bit_primitives() {
        assert_eq!(set(0b1111_1110, OctetIndex::Bit0), 0b1111_1111);
        assert_eq!(unset(0b1111_1111, OctetIndex::Bit7), 0b0111_1111);
        assert_eq!(toggle(0b0000_0100, OctetIndex::Bit2), 0);
        assert!(is_set(0b0000_0100, OctetIndex::Bit2));
        assert!(!is_set(0b1111_1011, OctetIndex::Bit2));
    }

    #[test]
    fn nibble_split_and_join() {
        assert_eq!(high_nibble(0b1000_1110), 0b1000);
        assert_eq!(low_nibble(0b1000_1110), 0b1110);
        assert_eq!(join_nibbles(0b1000, 0b1110), 0b1000_1110);
    }

    #[test]
    fn replace_nibble_masks_the_incoming_value() {
        assert_eq!(replace_nibble(0, 0b1110_0111, QuartetPosition::Lo), 0b0000_0111);
        assert_eq!(replace_nibble(0, 0b1110_0111, QuartetPosition::Hi), 0b0111_0000);
        assert_eq!(
            replace_nibble(0b1010_0101, 0b0011, QuartetPosition::Hi),
            0b0011_0101
        );
    }

    #[test]
    fn collect_bits_sets_selected_positions() {
        assert_eq!(collect_bits(|idx: OctetIndex| u8::from(idx) % 2 == 1), 0b1010_1010);
        assert_eq!(collect_bits(|_: QuartetIndex| true), 0b0000_1111);
        assert_eq!(collect_bits(|_: QuartetIndex| false), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn set_bits_walks_low_to_high_within_width() {
        let octet: Vec<OctetIndex> = SetBits::new(0b1000_0101).collect();
        assert_eq!(octet, vec![OctetIndex::Bit0, OctetIndex::Bit2, OctetIndex::Bit7]);

        // bits above the quartet width are never reported
        let quartet: Vec<QuartetIndex> = SetBits::new(0b1111_0010).collect();
        assert_eq!(quartet, vec![QuartetIndex::Bit1]);
    }
}
