//! # bitsy
//!
//! Counting the set bits (the Hamming weight) of random fixed-width binary numbers in two ways,
//! so that their throughput can be compared:
//!
//! - **Chunked lookup:** the bit-string is split into fixed-size chunks and the count of each chunk
//!   is read from a table precomputed for every possible chunk. Wider chunks mean fewer lookups but
//!   a table of `2^width` entries.
//! - **Kernighan's algorithm:** the number is parsed and its lowest set bit is cleared with
//!   `x & (x - 1)` until nothing is left, taking time proportional to the number of set bits.
//!
//! ## Example
//!
//! ```rust
//! use bitsy::{Calculation, LookupTable};
//!
//! fn main() {
//!     // A table for every 8-bit string
//!     let table = LookupTable::new(8).unwrap();
//!     assert_eq!(table.len(), 256);
//!
//!     // Chunked lookup and Kernighan's algorithm agree
//!     let s = "1011010110100110";
//!     assert_eq!(bitsy::setbits(s, &table).unwrap(), 9);
//!     assert_eq!(bitsy::hamming_weight(0b1011010110100110u16), 9);
//!
//!     // Sum the weights of random 16-bit samples with both algorithms
//!     let calc = Calculation::new(16, 8).unwrap();
//!     let samples = calc.sample(&mut rand::thread_rng(), 1000).unwrap();
//!     let report = calc.run(&samples).unwrap();
//!     assert!(report.agree());
//!
//!     // A chunk width that does not divide the sample width is rejected up front
//!     assert!(Calculation::new(16, 5).is_err());
//! }
//! ```
//!
//! ## Width limits
//!
//! Samples are parsed into `u128` for Kernighan's algorithm, so they are at most 128 bits wide.
//! Lookup tables hold one `String` key per chunk and are capped at 24-bit chunks.

/// Bit-string padding, rendering, parsing, generation and chunking.
pub mod bits;

/// Timed summation over random samples.
pub mod calc;

/// A generic trait of supported binary number types.
pub mod codeint;

pub mod error;

/// The chunk lookup table.
pub mod lookup;

/// Table-based and direct weight calculators.
pub mod weight;

pub use bits::{chunk, pad, randbin, randbin_with};
pub use calc::{Calculation, Report};
pub use codeint::CodeInt;
pub use error::{Error, Result};
pub use lookup::LookupTable;
pub use weight::{hamming_weight, setbits};
