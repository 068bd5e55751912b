use num_traits::int::PrimInt;

pub mod popcnt;
use popcnt::Popcnt;

/// Unsigned integers that a bit-string can be parsed into and rendered from.
pub trait CodeInt: PrimInt + Popcnt {
    /// Gets the number of bits of the type, the widest bit-string it can hold.
    fn dimensions() -> usize {
        Self::zero().count_zeros() as usize
    }
}

impl CodeInt for u8 {}

impl CodeInt for u16 {}

impl CodeInt for u32 {}

impl CodeInt for u64 {}

impl CodeInt for u128 {}
