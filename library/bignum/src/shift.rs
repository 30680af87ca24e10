use crate::{arith, BigInt, Limb, LIMB_BITS};

/// Multiplies a magnitude by `2^bits`
pub(crate) fn shl_magnitude(a: &[Limb], bits: usize) -> Vec<Limb> {
    let limbs = bits / LIMB_BITS as usize;
    let rem = (bits % LIMB_BITS as usize) as u32;
    let mut out = Vec::with_capacity(a.len() + limbs + 1);
    out.resize(limbs, 0);
    if rem == 0 {
        out.extend_from_slice(a);
        return out;
    }
    let mut carry = 0;
    for &limb in a {
        out.push((limb << rem) | carry);
        carry = limb >> (LIMB_BITS - rem);
    }
    if carry != 0 {
        out.push(carry);
    }
    out
}

/// Divides a magnitude by `2^bits`, discarding the bits shifted out
pub(crate) fn shr_magnitude(a: &[Limb], bits: usize) -> Vec<Limb> {
    let limbs = bits / LIMB_BITS as usize;
    if limbs >= a.len() {
        return vec![0];
    }
    let rem = (bits % LIMB_BITS as usize) as u32;
    let a = &a[limbs..];
    if rem == 0 {
        return a.to_vec();
    }
    let mut out = Vec::with_capacity(a.len());
    for i in 0..a.len() {
        let high = a.get(i + 1).map(|&next| next << (LIMB_BITS - rem)).unwrap_or(0);
        out.push((a[i] >> rem) | high);
    }
    out
}

pub(crate) fn shl(x: &BigInt, bits: u32) -> BigInt {
    if bits == 0 || x.is_zero() {
        return x.clone();
    }
    BigInt::from_vec(x.negative, shl_magnitude(&x.limbs, bits as usize))
}

/// Arithmetic shift right, rounding toward negative infinity
pub(crate) fn shr(x: &BigInt, bits: u32) -> BigInt {
    if x.negative {
        // floor(x / 2^k) == -(floor(-(x + 1) / 2^k)) - 1, and -(x + 1) is non-negative
        let shifted = shr(&arith::increment(x).negate(), bits);
        return arith::decrement(&shifted.negate());
    }
    BigInt::from_vec(false, shr_magnitude(&x.limbs, bits as usize))
}
