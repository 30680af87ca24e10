//! Integers which stay unboxed machine values for as long as they are exactly representable
//! as floats, and transparently become arbitrary-precision values beyond that.
//!
//! ```
//! use unboxed_number::Int;
//!
//! let x: Int = Int::new(9007199254740991);
//! let y = &x * &Int::new(2);
//! assert!(y.is_big());
//! assert_eq!(y.to_string(), "18014398509481982");
//!
//! let z = Int::<unboxed_number::LimbBackend>::new(-7);
//! assert_eq!(z.div_floor(&Int::new(2)), Ok(Int::new(-4)));
//! ```
//!
//! The arbitrary-precision half is pluggable, see [`Backend`]. By default [`Int`] uses the
//! backend selected once per process through the [`select`] module.
pub mod backend;
mod integer;
pub mod select;

pub use self::backend::{AnyBig, Backend, LimbBackend, SelectedBackend};
#[cfg(feature = "native")]
pub use self::backend::NativeBackend;
pub use self::integer::Int;
pub use self::select::{BackendError, BackendKind};

pub use unboxed_bignum as bignum;
pub use unboxed_bignum::{DivisionError, FloatError, ParseIntError};
