use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::borrow::Cow;

use super::{Backend, LimbBackend};
#[cfg(feature = "native")]
use super::NativeBackend;
use crate::select::{self, BackendKind};
use crate::{DivisionError, FloatError, ParseIntError};

type LimbBig = unboxed_bignum::BigInt;
#[cfg(feature = "native")]
type NativeBig = num_bigint::BigInt;

/// A big integer produced by whichever backend was selected for this process
///
/// Every value created after the selection is bound carries the same variant, so operations
/// never convert in practice. Values of differing kinds are still handled correctly, by
/// converting both operands to the selected kind first.
#[derive(Debug, Clone)]
pub enum AnyBig {
    Limb(LimbBig),
    #[cfg(feature = "native")]
    Native(NativeBig),
}
impl AnyBig {
    /// Returns the kind of backend which produced this value
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Limb(_) => BackendKind::Limb,
            #[cfg(feature = "native")]
            Self::Native(_) => BackendKind::Native,
        }
    }

    /// Returns this value as a limb engine integer, converting only if necessary
    pub fn to_limb(&self) -> Cow<'_, LimbBig> {
        match self {
            Self::Limb(x) => Cow::Borrowed(x),
            #[cfg(feature = "native")]
            Self::Native(x) => {
                let (sign, digits) = x.to_u32_digits();
                Cow::Owned(LimbBig::from_limbs(sign == num_bigint::Sign::Minus, &digits))
            }
        }
    }

    /// Returns this value as a num-bigint integer, converting only if necessary
    #[cfg(feature = "native")]
    pub fn to_native(&self) -> Cow<'_, NativeBig> {
        match self {
            Self::Native(x) => Cow::Borrowed(x),
            Self::Limb(x) => {
                let sign = if x.is_negative() {
                    num_bigint::Sign::Minus
                } else {
                    num_bigint::Sign::Plus
                };
                Cow::Owned(NativeBig::from_slice(sign, x.limbs()))
            }
        }
    }
}

enum Operands<'a> {
    Limb(Cow<'a, LimbBig>, Cow<'a, LimbBig>),
    #[cfg(feature = "native")]
    Native(Cow<'a, NativeBig>, Cow<'a, NativeBig>),
}

#[allow(unreachable_patterns)]
fn operands<'a>(x: &'a AnyBig, y: &'a AnyBig) -> Operands<'a> {
    match (x, y) {
        (AnyBig::Limb(x), AnyBig::Limb(y)) => Operands::Limb(Cow::Borrowed(x), Cow::Borrowed(y)),
        #[cfg(feature = "native")]
        (AnyBig::Native(x), AnyBig::Native(y)) => {
            Operands::Native(Cow::Borrowed(x), Cow::Borrowed(y))
        }
        _ => match select::current() {
            #[cfg(feature = "native")]
            BackendKind::Native => Operands::Native(x.to_native(), y.to_native()),
            _ => Operands::Limb(x.to_limb(), y.to_limb()),
        },
    }
}

macro_rules! unary {
    ($x:expr, $op:ident $(, $arg:expr)*) => {
        match $x {
            AnyBig::Limb(x) => AnyBig::Limb(LimbBackend::$op(x $(, $arg)*)),
            #[cfg(feature = "native")]
            AnyBig::Native(x) => AnyBig::Native(NativeBackend::$op(x $(, $arg)*)),
        }
    };
}

macro_rules! query {
    ($x:expr, $op:ident) => {
        match $x {
            AnyBig::Limb(x) => LimbBackend::$op(x),
            #[cfg(feature = "native")]
            AnyBig::Native(x) => NativeBackend::$op(x),
        }
    };
}

macro_rules! binary {
    ($x:expr, $y:expr, $op:ident) => {
        match operands($x, $y) {
            Operands::Limb(x, y) => AnyBig::Limb(LimbBackend::$op(&x, &y)),
            #[cfg(feature = "native")]
            Operands::Native(x, y) => AnyBig::Native(NativeBackend::$op(&x, &y)),
        }
    };
}

macro_rules! checked_binary {
    ($x:expr, $y:expr, $op:ident) => {
        match operands($x, $y) {
            Operands::Limb(x, y) => LimbBackend::$op(&x, &y).map(AnyBig::Limb),
            #[cfg(feature = "native")]
            Operands::Native(x, y) => NativeBackend::$op(&x, &y).map(AnyBig::Native),
        }
    };
}

/// Constructs a value with the backend selected for this process
macro_rules! construct {
    ($op:ident($($arg:expr),*)) => {
        match select::current() {
            #[cfg(feature = "native")]
            BackendKind::Native => NativeBackend::$op($($arg),*).map(AnyBig::Native),
            _ => LimbBackend::$op($($arg),*).map(AnyBig::Limb),
        }
    };
}

impl fmt::Display for AnyBig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Limb(x) => fmt::Display::fmt(x, f),
            #[cfg(feature = "native")]
            Self::Native(x) => fmt::Display::fmt(x, f),
        }
    }
}

impl Eq for AnyBig {}
impl PartialEq for AnyBig {
    fn eq(&self, other: &Self) -> bool {
        SelectedBackend::cmp(self, other) == Ordering::Equal
    }
}

impl Hash for AnyBig {
    /// Hashes the sign and the 32-bit magnitude digits, which are identical for equal
    /// values regardless of the backend that produced them
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Limb(x) => {
                // num-bigint has no digits for zero, where the limb engine keeps a single zero limb
                let digits: &[u32] = if x.is_zero() { &[] } else { x.limbs() };
                x.is_negative().hash(state);
                digits.hash(state);
            }
            #[cfg(feature = "native")]
            Self::Native(x) => {
                let (sign, digits) = x.to_u32_digits();
                (sign == num_bigint::Sign::Minus).hash(state);
                digits.hash(state);
            }
        }
    }
}

/// The backend chosen at runtime, see [`crate::select`]
///
/// This is the default backend of [`Int`](crate::Int).
#[derive(Debug, Copy, Clone, Default)]
pub struct SelectedBackend;

impl Backend for SelectedBackend {
    type Big = AnyBig;

    const NAME: &'static str = "selected";

    fn from_hex(s: &str) -> Result<AnyBig, ParseIntError> {
        construct!(from_hex(s))
    }

    fn from_i64(n: i64) -> AnyBig {
        match select::current() {
            #[cfg(feature = "native")]
            BackendKind::Native => AnyBig::Native(NativeBackend::from_i64(n)),
            _ => AnyBig::Limb(LimbBackend::from_i64(n)),
        }
    }

    fn from_f64(n: f64) -> Result<AnyBig, FloatError> {
        construct!(from_f64(n))
    }

    fn to_f64(x: &AnyBig) -> f64 {
        query!(x, to_f64)
    }

    fn to_i64(x: &AnyBig) -> Option<i64> {
        query!(x, to_i64)
    }

    fn is_zero(x: &AnyBig) -> bool {
        query!(x, is_zero)
    }

    fn is_negative(x: &AnyBig) -> bool {
        query!(x, is_negative)
    }

    fn bits(x: &AnyBig) -> u64 {
        query!(x, bits)
    }

    fn cmp(x: &AnyBig, y: &AnyBig) -> Ordering {
        match operands(x, y) {
            Operands::Limb(x, y) => LimbBackend::cmp(&x, &y),
            #[cfg(feature = "native")]
            Operands::Native(x, y) => NativeBackend::cmp(&x, &y),
        }
    }

    fn add(x: &AnyBig, y: &AnyBig) -> AnyBig {
        binary!(x, y, add)
    }

    fn sub(x: &AnyBig, y: &AnyBig) -> AnyBig {
        binary!(x, y, sub)
    }

    fn mul(x: &AnyBig, y: &AnyBig) -> AnyBig {
        binary!(x, y, mul)
    }

    fn div_floor(x: &AnyBig, y: &AnyBig) -> Result<AnyBig, DivisionError> {
        checked_binary!(x, y, div_floor)
    }

    fn mod_floor(x: &AnyBig, y: &AnyBig) -> Result<AnyBig, DivisionError> {
        checked_binary!(x, y, mod_floor)
    }

    fn div_trunc(x: &AnyBig, y: &AnyBig) -> Result<AnyBig, DivisionError> {
        checked_binary!(x, y, div_trunc)
    }

    fn rem_trunc(x: &AnyBig, y: &AnyBig) -> Result<AnyBig, DivisionError> {
        checked_binary!(x, y, rem_trunc)
    }

    fn and(x: &AnyBig, y: &AnyBig) -> AnyBig {
        binary!(x, y, and)
    }

    fn or(x: &AnyBig, y: &AnyBig) -> AnyBig {
        binary!(x, y, or)
    }

    fn xor(x: &AnyBig, y: &AnyBig) -> AnyBig {
        binary!(x, y, xor)
    }

    fn not(x: &AnyBig) -> AnyBig {
        unary!(x, not)
    }

    fn neg(x: &AnyBig) -> AnyBig {
        unary!(x, neg)
    }

    fn shl(x: &AnyBig, bits: u32) -> AnyBig {
        unary!(x, shl, bits)
    }

    fn shr(x: &AnyBig, bits: u32) -> AnyBig {
        unary!(x, shr, bits)
    }
}
