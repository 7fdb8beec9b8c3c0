//! Offset encoder: maps a GMT offset to a single bit inside a fixed 24-bit window.
//!
//! `+12` lands on bit 0, `0` on bit 12 and `-11` on bit 23. Every offset outside
//! `MIN_OFFSET..=MAX_OFFSET` maps to [`OffsetMask::OUT_OF_RANGE`], a bit above the
//! window, so it never shares a bit with a real catalog city.

use serde::Serialize;
use std::fmt;

pub const MIN_OFFSET: i32 = -11;
pub const MAX_OFFSET: i32 = 12;
pub const MASK_WIDTH: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OffsetMask(u32);

impl OffsetMask {
    pub const EMPTY: OffsetMask = OffsetMask(0);
    pub const OUT_OF_RANGE: OffsetMask = OffsetMask(1 << 31);

    pub fn bits(self) -> u32 {
        self.0
    }

    /// True when every bit of `other` is set in `self`.
    pub fn contains(self, other: OffsetMask) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(self, other: OffsetMask) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_out_of_range(self) -> bool {
        self == Self::OUT_OF_RANGE
    }

    /// Bit position inside the 24-bit window, if this is an in-range mask.
    pub fn bit_index(self) -> Option<u32> {
        if self.0.count_ones() != 1 {
            return None;
        }
        let index = self.0.trailing_zeros();
        (index < MASK_WIDTH).then_some(index)
    }

    /// Inverse of [`encode`] for in-range masks.
    pub fn offset(self) -> Option<i32> {
        self.bit_index().map(|index| MAX_OFFSET - index as i32)
    }
}

impl fmt::Display for OffsetMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#034b}", self.0)
    }
}

pub fn is_in_range(offset: i32) -> bool {
    (MIN_OFFSET..=MAX_OFFSET).contains(&offset)
}

pub fn encode(offset: i32) -> OffsetMask {
    if !is_in_range(offset) {
        return OffsetMask::OUT_OF_RANGE;
    }
    let index = (MAX_OFFSET - offset) as u32;
    OffsetMask(1 << index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_encode_window_edges() {
        assert_eq!(encode(12).bits(), 1);
        assert_eq!(encode(0).bits(), 1 << 12);
        assert_eq!(encode(-11).bits(), 1 << 23);
        assert_eq!(encode(3).bits(), 1 << 9);
    }

    #[test]
    fn test_encode_is_injective_over_valid_range() {
        let masks: HashSet<OffsetMask> = (MIN_OFFSET..=MAX_OFFSET).map(encode).collect();
        assert_eq!(masks.len(), 24);
        assert!(masks.iter().all(|mask| mask.bits().count_ones() == 1));
        assert!(masks.iter().all(|mask| mask.bits() < 1 << MASK_WIDTH));
    }

    #[test]
    fn test_encode_is_deterministic() {
        for offset in [-100, MIN_OFFSET, -4, 0, 2, MAX_OFFSET, 99, i32::MIN, i32::MAX] {
            assert_eq!(encode(offset), encode(offset));
        }
    }

    #[test]
    fn test_out_of_range_offsets_share_no_bit_with_window() {
        for offset in [-12, 13, 24, 99, -87, i32::MIN, i32::MAX] {
            let mask = encode(offset);
            assert!(mask.is_out_of_range());
            for valid in MIN_OFFSET..=MAX_OFFSET {
                assert!(!mask.intersects(encode(valid)));
            }
        }
    }

    #[test]
    fn test_offset_roundtrips_through_bit_index() {
        for offset in MIN_OFFSET..=MAX_OFFSET {
            assert_eq!(encode(offset).offset(), Some(offset));
        }
        assert_eq!(OffsetMask::OUT_OF_RANGE.offset(), None);
        assert_eq!(OffsetMask::EMPTY.bit_index(), None);
    }

    #[test]
    fn test_contains_and_intersects() {
        let paris = encode(2);
        assert!(paris.contains(encode(2)));
        assert!(!paris.contains(encode(3)));
        assert!(!paris.intersects(encode(3)));
        assert!(paris.contains(OffsetMask::EMPTY));
    }
}
