//! The closed error taxonomy surfaced to callers of [`crate::Engine`].
//! Cryptographic signature failure is not an error here — `verify_signature`
//! returns a plain `bool` for that — these variants are all about malformed
//! inputs the caller handed the engine.

use core::fmt;

/// Errors returned by [`crate::Engine`] construction, signing, verification,
/// and key/signature parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `Engine::new` was given a name that is not one of the twelve
    /// standardized parameter sets.
    InvalidParameterSet(String),
    /// A private or public key byte string did not have the expected
    /// length (`4n` or `2n` for the active parameter set).
    InvalidKeyLength { expected: usize, got: usize },
    /// A serialized signature did not have the expected length `L`.
    InvalidSignatureLength { expected: usize, got: usize },
    /// A context string longer than 255 bytes was supplied.
    ContextTooLong(usize),
    /// A pre-hash algorithm name was not recognized.
    UnsupportedPreHash(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameterSet(name) => write!(f, "unknown SLH-DSA parameter set name: {name}"),
            Error::InvalidKeyLength { expected, got } => {
                write!(f, "key has length {got}, expected {expected}")
            }
            Error::InvalidSignatureLength { expected, got } => {
                write!(f, "signature has length {got}, expected {expected}")
            }
            Error::ContextTooLong(len) => write!(f, "context string of {len} bytes exceeds the 255-byte maximum"),
            Error::UnsupportedPreHash(name) => write!(f, "unknown pre-hash algorithm name: {name}"),
        }
    }
}

impl std::error::Error for Error {}
