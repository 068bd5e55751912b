use num_traits::int::PrimInt;

/// Population count by Kernighan's bit clearing.
pub trait Popcnt {
    fn popcnt(&self) -> u32;
}

impl Popcnt for u8 {
    fn popcnt(&self) -> u32 {
        kernighan(*self)
    }
}

impl Popcnt for u16 {
    fn popcnt(&self) -> u32 {
        kernighan(*self)
    }
}

impl Popcnt for u32 {
    fn popcnt(&self) -> u32 {
        kernighan(*self)
    }
}

impl Popcnt for u64 {
    fn popcnt(&self) -> u32 {
        kernighan(*self)
    }
}

impl Popcnt for u128 {
    fn popcnt(&self) -> u32 {
        kernighan(*self)
    }
}

/// Counts the set bits of `x` by repeatedly clearing the lowest one.
/// Runs in time proportional to the number of set bits.
pub fn kernighan<T: PrimInt>(mut x: T) -> u32 {
    let mut count = 0;
    while x != T::zero() {
        x = x & (x - T::one());
        count += 1;
    }
    count
}
