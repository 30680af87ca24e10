use core::fmt::{self, Write};

use crate::{magnitude, BigInt, Limb};

/// The largest power of ten which fits in a single limb
const DECIMAL_CHUNK: Limb = 1_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 9;

impl BigInt {
    /// Renders the magnitude of this value in decimal, without a sign
    fn magnitude_to_decimal(&self) -> Result<String, fmt::Error> {
        // Anything that fits in a machine word can be handled by the native formatter
        if self.limbs.len() <= 2 {
            let low = self.limbs[0] as u64;
            let high = self.limbs.get(1).copied().unwrap_or(0) as u64;
            return Ok(((high << 32) | low).to_string());
        }

        let mut chunks = Vec::new();
        let mut rest = self.limbs.to_vec();
        while !magnitude::is_zero(&rest) {
            let (quotient, chunk) = magnitude::divmod_limb(&rest, DECIMAL_CHUNK);
            chunks.push(chunk);
            rest = quotient;
            while rest.len() > 1 && rest[rest.len() - 1] == 0 {
                rest.pop();
            }
        }

        let mut out = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
        let mut chunks = chunks.iter().rev();
        if let Some(top) = chunks.next() {
            write!(out, "{}", top)?;
        }
        for chunk in chunks {
            write!(out, "{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS)?;
        }
        Ok(out)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.magnitude_to_decimal()?;
        f.pad_integral(!self.negative, "", &digits)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}
