//! Precomputed table of set-bit counts keyed by bit-string.

use crate::bits;
use crate::error::{Error, Result};

use std::collections::hash_map::Iter;
use std::collections::HashMap;

/// The widest chunk a lookup table can be built for.
pub const MAX_LOOKUP_BITS: usize = 24;

/// Mapping from every `width`-bit string to its number of `'1'` digits.
///
/// The table is immutable once built and can be shared freely by reference.
#[derive(Debug, Clone)]
pub struct LookupTable {
    width: usize,
    counts: HashMap<String, u32>,
}

impl LookupTable {
    /// Builds the table for all `2^width` bit-strings of length `width`.
    /// If the width is zero or larger than [`MAX_LOOKUP_BITS`], returns an error.
    pub fn new(width: usize) -> Result<LookupTable> {
        if width == 0 {
            return Err(Error::ZeroWidth);
        }
        if MAX_LOOKUP_BITS < width {
            return Err(Error::WidthTooLarge {
                width,
                max: MAX_LOOKUP_BITS,
            });
        }

        let size = 1u32 << width;
        let mut counts = HashMap::with_capacity(size as usize);

        for n in 0..size {
            let key = bits::to_binary(n, width)?;
            let ones = key.bytes().filter(|&b| b == b'1').count() as u32;
            counts.insert(key, ones);
        }

        tracing::debug!(width, entries = counts.len(), "built lookup table");

        Ok(LookupTable { width, counts })
    }

    /// Gets the chunk width the table was built for.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Gets the number of entries, always `2^width`.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, chunk: &str) -> Option<u32> {
        self.counts.get(chunk).copied()
    }

    /// Looks up the set-bit count of `chunk`.
    /// Returns [`Error::LookupMiss`] if the chunk has no entry.
    pub fn lookup(&self, chunk: &str) -> Result<u32> {
        self.get(chunk).ok_or_else(|| Error::LookupMiss(chunk.to_string()))
    }

    /// Iterates over all (bit-string, count) entries in unspecified order.
    pub fn iter(&self) -> Iter<'_, String, u32> {
        self.counts.iter()
    }
}

impl<'a> IntoIterator for &'a LookupTable {
    type Item = (&'a String, &'a u32);
    type IntoIter = Iter<'a, String, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
