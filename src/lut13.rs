//! LUT for 13-bit rank masks (0..8191).
//!
//! Bit `i` of a mask stands for `Rank::from_u8(i)`, so Two is bit 0 and Ace
//! is bit 12. The table is built at compile time and is small enough to stay
//! in cache for the whole simulation.
//!
//! - STRAIGHT_TOP13[mask] -> top rank index (0..12) of the highest straight,
//!                           or -1. The wheel A2345 returns 3 (Five-high).

use crate::card::{Card, Rank};

pub const MASK13: u16 = (1u16 << 13) - 1;

const N: usize = 1 << 13;
const WHEEL_MASK: u16 = (1u16 << 12) | (1u16 << 0) | (1u16 << 1) | (1u16 << 2) | (1u16 << 3);

const fn straight_top_u16(mask: u16) -> i8 {
    // 5-bit windows from the highest possible start (Ten, bit 8) down to Two
    let mut s: i8 = 8;
    while s >= 0 {
        let window: u16 = ((1u16 << 5) - 1) << (s as u16);
        if (mask & window) == window {
            return s + 4;
        }
        s -= 1;
    }

    // Ace plays low only for the wheel
    if (mask & WHEEL_MASK) == WHEEL_MASK {
        return 3;
    }

    -1
}

const fn build_straight_top13() -> [i8; N] {
    let mut arr = [0i8; N];
    let mut i: usize = 0;
    while i < N {
        arr[i] = straight_top_u16(i as u16);
        i += 1;
    }
    arr
}

pub const STRAIGHT_TOP13: [i8; N] = build_straight_top13();

/// Top card of the best straight contained in `mask`, if any.
#[inline(always)]
pub fn straight_top(mask: u16) -> Option<Rank> {
    match STRAIGHT_TOP13[(mask & MASK13) as usize] {
        -1 => None,
        top => Some(Rank::from_u8(top as u8)),
    }
}

#[inline(always)]
pub fn rank_mask(cards: &[Card]) -> u16 {
    cards
        .iter()
        .fold(0u16, |mask, card| mask | (1u16 << card.rank.idx()))
}
