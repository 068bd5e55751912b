//! Hamming weight of bit-strings by table lookup and of integers by Kernighan's algorithm.

use crate::bits;
use crate::codeint::popcnt::Popcnt;
use crate::error::Result;
use crate::lookup::LookupTable;
use crate::CodeInt;

/// Counts the set bits of `s` by splitting it into chunks of the table width
/// and summing their table entries.
///
/// The length of `s` must be a multiple of `table.width()`.
///
/// ```
/// use bitsy::{setbits, LookupTable};
///
/// let table = LookupTable::new(8).unwrap();
/// assert_eq!(setbits("1011010110100110", &table).unwrap(), 9);
/// ```
pub fn setbits(s: &str, table: &LookupTable) -> Result<u32> {
    let mut sum = 0;
    for chunk in bits::chunk(s, table.width())? {
        sum += table.lookup(chunk)?;
    }
    Ok(sum)
}

/// Counts the set bits of `x` by clearing the lowest set bit until none is left.
pub fn hamming_weight<T: CodeInt>(x: T) -> u32 {
    x.popcnt()
}

/// Sums [`setbits`] over all samples.
pub fn sum_setbits<S: AsRef<str>>(samples: &[S], table: &LookupTable) -> Result<u64> {
    let mut sum = 0u64;
    for s in samples {
        sum += setbits(s.as_ref(), table)? as u64;
    }
    Ok(sum)
}

/// Parses every sample as a `T` and sums [`hamming_weight`] over them.
pub fn sum_hamming_weight<T: CodeInt, S: AsRef<str>>(samples: &[S]) -> Result<u64> {
    let mut sum = 0u64;
    for s in samples {
        sum += hamming_weight(bits::from_binary::<T>(s.as_ref())?) as u64;
    }
    Ok(sum)
}
