use thiserror::Error;

/// Errors produced by fallible [`BigInt`](crate::BigInt) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("cannot parse integer: {0}")]
    Parse(#[from] ParseErrorKind),
}

/// Why a decimal string was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("no digits found")]
    Empty,

    #[error("invalid character {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

pub type Result<T> = std::result::Result<T, BigIntError>;
