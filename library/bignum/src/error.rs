use core::num::FpCategory;

/// Returned when a string is not a well-formed hexadecimal integer
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseIntError {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid hexadecimal digit {digit:?} at index {index}")]
    InvalidDigit { digit: char, index: usize },
}

/// Returned by every division entry point when the divisor is zero
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("division by zero")]
pub struct DivisionError;

/// Returned when a float with no integer value is converted to an integer
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FloatError {
    #[error("NaN")]
    Nan,
    #[error("Inf")]
    Infinite,
}
impl FloatError {
    pub fn from_category(category: FpCategory) -> Result<(), Self> {
        match category {
            FpCategory::Nan => Err(FloatError::Nan),
            FpCategory::Infinite => Err(FloatError::Infinite),
            _ => Ok(()),
        }
    }
}
