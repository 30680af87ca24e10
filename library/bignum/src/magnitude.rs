//! Unsigned routines over little-endian limb slices.
//!
//! Inputs are expected to be canonical (no trailing zero limbs beyond the first),
//! outputs are not; callers rebuild a `BigInt` from the returned vector, which
//! trims it back into canonical form.
use core::cmp::Ordering;

use crate::{DoubleLimb, Limb, LIMB_BITS};

#[inline]
pub(crate) fn is_zero(a: &[Limb]) -> bool {
    a.iter().all(|&limb| limb == 0)
}

/// Number of significant bits in `a`, zero for zero
pub(crate) fn bit_length(a: &[Limb]) -> u64 {
    match a.iter().rposition(|&limb| limb != 0) {
        None => 0,
        Some(top) => {
            (top as u64) * LIMB_BITS as u64 + (LIMB_BITS - a[top].leading_zeros()) as u64
        }
    }
}

pub(crate) fn cmp(a: &[Limb], b: &[Limb]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

pub(crate) fn add(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry: DoubleLimb = 0;
    for (i, &limb) in long.iter().enumerate() {
        let word = limb as DoubleLimb + short.get(i).copied().unwrap_or(0) as DoubleLimb + carry;
        out.push(word as Limb);
        carry = word >> LIMB_BITS;
    }
    if carry != 0 {
        out.push(carry as Limb);
    }
    out
}

/// Computes `a - b`, requires `a >= b`
pub(crate) fn sub(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    debug_assert_ne!(cmp(a, b), Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = false;
    for (i, &limb) in a.iter().enumerate() {
        let (diff, o1) = limb.overflowing_sub(b.get(i).copied().unwrap_or(0));
        let (diff, o2) = diff.overflowing_sub(borrow as Limb);
        out.push(diff);
        borrow = o1 | o2;
    }
    debug_assert!(!borrow);
    out
}

/// Schoolbook product, `a.len() + b.len()` limbs wide
pub(crate) fn mul(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut out = vec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry: DoubleLimb = 0;
        for (j, &y) in b.iter().enumerate() {
            // (2^32-1)^2 + 2 * (2^32-1) == 2^64-1, so this never overflows
            let word = x as DoubleLimb * y as DoubleLimb + out[i + j] as DoubleLimb + carry;
            out[i + j] = word as Limb;
            carry = word >> LIMB_BITS;
        }
        out[i + b.len()] = carry as Limb;
    }
    out
}

/// Adds one to `a` in place, growing it if the carry runs off the end
pub(crate) fn increment(a: &mut Vec<Limb>) {
    for limb in a.iter_mut() {
        let (sum, overflow) = limb.overflowing_add(1);
        *limb = sum;
        if !overflow {
            return;
        }
    }
    a.push(1);
}

/// Subtracts one from `a` in place, requires `a != 0`
pub(crate) fn decrement(a: &mut [Limb]) {
    debug_assert!(!is_zero(a));
    for limb in a.iter_mut() {
        let (diff, overflow) = limb.overflowing_sub(1);
        *limb = diff;
        if !overflow {
            return;
        }
    }
}

/// Short division by a single limb, returns the quotient and remainder
pub(crate) fn divmod_limb(a: &[Limb], divisor: Limb) -> (Vec<Limb>, Limb) {
    debug_assert_ne!(divisor, 0);
    let divisor = divisor as DoubleLimb;
    let mut quotient = vec![0; a.len()];
    let mut rem: DoubleLimb = 0;
    for j in (0..a.len()).rev() {
        let word = (rem << LIMB_BITS) | a[j] as DoubleLimb;
        quotient[j] = (word / divisor) as Limb;
        rem = word % divisor;
    }
    (quotient, rem as Limb)
}
