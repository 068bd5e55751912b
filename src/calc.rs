//! A validated pairing of sample width and lookup chunk width, with timed summation.

use crate::bits::{self, MAX_BITS};
use crate::error::{Error, Result};
use crate::lookup::{LookupTable, MAX_LOOKUP_BITS};
use crate::weight;

use rand::Rng;
use std::time::{Duration, Instant};

/// Totals and timings of one run over a set of samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub samples: usize,
    pub by_lookup: u64,
    pub by_kernighan: u64,
    pub lookup_elapsed: Duration,
    pub kernighan_elapsed: Duration,
}

impl Report {
    /// Checks if both algorithms counted the same number of set bits.
    pub fn agree(&self) -> bool {
        self.by_lookup == self.by_kernighan
    }
}

/// Counts set bits of `bits`-wide binary numbers, owning the lookup table for its chunk width.
#[derive(Debug, Clone)]
pub struct Calculation {
    bits: usize,
    table: LookupTable,
}

impl Calculation {
    /// Validates the widths and builds the lookup table.
    /// If `lookup_bits` does not evenly divide `bits`, returns [`Error::Misaligned`]
    /// before any table is built.
    pub fn new(bits: usize, lookup_bits: usize) -> Result<Calculation> {
        if bits == 0 || lookup_bits == 0 {
            return Err(Error::ZeroWidth);
        }
        if MAX_BITS < bits {
            return Err(Error::WidthTooLarge {
                width: bits,
                max: MAX_BITS,
            });
        }
        if MAX_LOOKUP_BITS < lookup_bits {
            return Err(Error::WidthTooLarge {
                width: lookup_bits,
                max: MAX_LOOKUP_BITS,
            });
        }
        if bits % lookup_bits != 0 {
            return Err(Error::Misaligned {
                width: bits,
                chunk: lookup_bits,
            });
        }

        let table = LookupTable::new(lookup_bits)?;
        Ok(Calculation { bits, table })
    }

    /// Gets the width of each sample.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Gets the chunk width of the lookup table.
    pub fn lookup_bits(&self) -> usize {
        self.table.width()
    }

    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    /// Draws `size` random samples of the configured width.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Result<Vec<String>> {
        let mut samples = Vec::with_capacity(size);
        for _ in 0..size {
            samples.push(bits::randbin_with(rng, self.bits)?);
        }
        Ok(samples)
    }

    /// Counts the set bits of one sample through the lookup table.
    pub fn by_lookup(&self, s: &str) -> Result<u32> {
        self.check_width(s)?;
        weight::setbits(s, &self.table)
    }

    /// Counts the set bits of one sample with Kernighan's algorithm.
    pub fn by_kernighan(&self, s: &str) -> Result<u32> {
        self.check_width(s)?;
        let x = bits::from_binary::<u128>(s)?;
        Ok(weight::hamming_weight(x))
    }

    /// Sums the set bits over all samples with both algorithms, timing each pass.
    pub fn run<S: AsRef<str>>(&self, samples: &[S]) -> Result<Report> {
        tracing::info!(
            samples = samples.len(),
            bits = self.bits,
            lookup_bits = self.lookup_bits(),
            "counting set bits"
        );

        for s in samples {
            self.check_width(s.as_ref())?;
        }

        let ins = Instant::now();
        let by_lookup = weight::sum_setbits(samples, &self.table)?;
        let lookup_elapsed = ins.elapsed();

        let ins = Instant::now();
        let by_kernighan = weight::sum_hamming_weight::<u128, _>(samples)?;
        let kernighan_elapsed = ins.elapsed();

        let report = Report {
            samples: samples.len(),
            by_lookup,
            by_kernighan,
            lookup_elapsed,
            kernighan_elapsed,
        };
        tracing::debug!(?report, "run finished");
        Ok(report)
    }

    fn check_width(&self, s: &str) -> Result<()> {
        if s.len() != self.bits {
            return Err(Error::WidthMismatch {
                expected: self.bits,
                found: s.len(),
            });
        }
        Ok(())
    }
}
