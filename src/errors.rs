// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

//! Errors which may occur when parsing group elements or scalars from
//! their wire encodings.

use core::fmt;
use core::fmt::Display;

/// An error which occurred while decoding a group element or a scalar
/// from bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The bytes were not the canonical encoding of any group element
    /// or scalar.
    ///
    /// The receiver of the failed constructor is left unchanged.
    InvalidEncoding,
    /// An error in the length of bytes handed to a constructor.
    ///
    /// `name` is the type which is returning the error, and `length`
    /// is the number of bytes its constructor expects.
    InvalidLength {
        /// The name of the type rejecting the input.
        name: &'static str,
        /// The length in bytes the constructor expects.
        length: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidEncoding => write!(f, "Encoding is not canonical"),
            Error::InvalidLength { name: n, length: l } => {
                write!(f, "{} must be {} bytes in length", n, l)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidLength {
                name: "CompressedRistretto",
                length: 32
            }
            .to_string(),
            "CompressedRistretto must be 32 bytes in length"
        );
        assert_eq!(Error::InvalidEncoding.to_string(), "Encoding is not canonical");
    }
}
