//! Bit-string primitives: padding, rendering, parsing, random generation and chunking.
//!
//! A bit-string is a `str` made of `'0'` and `'1'` characters, most-significant digit first.

use crate::error::{Error, Result};
use crate::CodeInt;

use rand::{thread_rng, Rng};

/// The widest bit-string that can be rendered from or parsed into a native integer.
pub const MAX_BITS: usize = 128;

/// Left-pads `s` with `'0'` until it is exactly `width` characters long.
/// Returns [`Error::InvalidDigit`] on a non-binary character and [`Error::Overlong`]
/// if `s` is already longer than `width`.
///
/// ```
/// assert_eq!(bitsy::pad("1001", 8).unwrap(), "00001001");
/// ```
pub fn pad(s: &str, width: usize) -> Result<String> {
    validate(s)?;
    if s.len() > width {
        return Err(Error::Overlong {
            len: s.len(),
            width,
        });
    }
    Ok(format!("{:0>width$}", s, width = width))
}

/// Renders `x` in base 2, left-padded to `width` digits.
pub fn to_binary<T: CodeInt>(x: T, width: usize) -> Result<String> {
    let digits = (T::dimensions() - x.leading_zeros() as usize).max(1);
    let mut s = String::with_capacity(width.max(digits));
    for i in (0..digits).rev() {
        if (x >> i) & T::one() == T::one() {
            s.push('1');
        } else {
            s.push('0');
        }
    }
    pad(&s, width)
}

/// Parses a bit-string into an integer of type `T`.
pub fn from_binary<T: CodeInt>(s: &str) -> Result<T> {
    if s.is_empty() {
        return Err(Error::ZeroWidth);
    }
    if T::dimensions() < s.len() {
        return Err(Error::WidthTooLarge {
            width: s.len(),
            max: T::dimensions(),
        });
    }

    let mut x = T::zero();
    for (position, c) in s.chars().enumerate() {
        let digit = match c {
            '0' => T::zero(),
            '1' => T::one(),
            found => return Err(Error::InvalidDigit { position, found }),
        };
        x = (x << 1) | digit;
    }
    Ok(x)
}

/// Generates a random `width`-bit binary number as a bit-string, using the thread-local RNG.
///
/// ```
/// let s = bitsy::randbin(16).unwrap();
/// assert_eq!(s.len(), 16);
/// ```
pub fn randbin(width: usize) -> Result<String> {
    randbin_with(&mut thread_rng(), width)
}

/// Generates a random `width`-bit binary number as a bit-string.
/// The value is uniform over `[0, 2^width)`.
pub fn randbin_with<R: Rng + ?Sized>(rng: &mut R, width: usize) -> Result<String> {
    if width == 0 {
        return Err(Error::ZeroWidth);
    }
    if MAX_BITS < width {
        return Err(Error::WidthTooLarge {
            width,
            max: MAX_BITS,
        });
    }

    let x: u128 = rng.gen();
    let x = if width == MAX_BITS {
        x
    } else {
        x & ((1 << width) - 1)
    };
    to_binary(x, width)
}

/// Splits `s` into consecutive `size`-character chunks, most-significant first.
/// The length of `s` must be a multiple of `size`.
///
/// ```
/// let chunks = bitsy::chunk("1011010110100110", 8).unwrap();
/// assert_eq!(chunks, ["10110101", "10100110"]);
/// ```
pub fn chunk(s: &str, size: usize) -> Result<Vec<&str>> {
    if size == 0 {
        return Err(Error::ZeroWidth);
    }
    if let Some((position, found)) = s.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        return Err(Error::InvalidDigit { position, found });
    }
    if s.len() % size != 0 {
        return Err(Error::Misaligned {
            width: s.len(),
            chunk: size,
        });
    }

    let mut chunks = Vec::with_capacity(s.len() / size);
    let mut beg = 0;
    while beg < s.len() {
        chunks.push(&s[beg..beg + size]);
        beg += size;
    }
    Ok(chunks)
}

/// Checks that every character of `s` is a binary digit.
pub fn validate(s: &str) -> Result<()> {
    match s.chars().enumerate().find(|&(_, c)| c != '0' && c != '1') {
        Some((position, found)) => Err(Error::InvalidDigit { position, found }),
        None => Ok(()),
    }
}
