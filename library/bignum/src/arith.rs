//! Signed addition, subtraction and multiplication.
//!
//! The magnitude routines only ever see non-negative operands, and subtraction
//! only ever sees the larger magnitude first; the sign bookkeeping happens here.
use core::cmp::Ordering;

use crate::{magnitude, BigInt};

pub(crate) fn add(x: &BigInt, y: &BigInt) -> BigInt {
    match (x.negative, y.negative) {
        (false, true) => sub(x, &y.negate()),
        (true, false) => sub(y, &x.negate()),
        (negative, _) => BigInt::from_vec(negative, magnitude::add(&x.limbs, &y.limbs)),
    }
}

pub(crate) fn sub(x: &BigInt, y: &BigInt) -> BigInt {
    if y.negative {
        return add(x, &y.negate());
    }
    if x.negative {
        return add(&x.negate(), y).negate();
    }
    match magnitude::cmp(&x.limbs, &y.limbs) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => BigInt::from_vec(false, magnitude::sub(&x.limbs, &y.limbs)),
        Ordering::Less => BigInt::from_vec(true, magnitude::sub(&y.limbs, &x.limbs)),
    }
}

pub(crate) fn mul(x: &BigInt, y: &BigInt) -> BigInt {
    if x.is_zero() || y.is_zero() {
        return BigInt::zero();
    }
    BigInt::from_vec(x.negative ^ y.negative, magnitude::mul(&x.limbs, &y.limbs))
}

/// Computes `x + 1` without building a temporary for the constant
pub(crate) fn increment(x: &BigInt) -> BigInt {
    if x.negative {
        let mut limbs = x.limbs.to_vec();
        magnitude::decrement(&mut limbs);
        BigInt::from_vec(true, limbs)
    } else {
        let mut limbs = x.limbs.to_vec();
        magnitude::increment(&mut limbs);
        BigInt::from_vec(false, limbs)
    }
}

/// Computes `x - 1` without building a temporary for the constant
pub(crate) fn decrement(x: &BigInt) -> BigInt {
    if x.negative || x.is_zero() {
        let mut limbs = x.limbs.to_vec();
        magnitude::increment(&mut limbs);
        BigInt::from_vec(true, limbs)
    } else {
        let mut limbs = x.limbs.to_vec();
        magnitude::decrement(&mut limbs);
        BigInt::from_vec(false, limbs)
    }
}
