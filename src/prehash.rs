//! The pre-hash message envelope: `M′ = byte(0 or 1) ∥ byte(|ctx|) ∥ ctx ∥ [OID ∥ H_pre(M)]`.
//!
//! This module has no counterpart in the teacher crate (which only ever
//! signs the raw message); it is reconstructed from
//! `original_source/internal/util.go`'s `PreHash` function.

use digest::{Digest, ExtendableOutput, Update, XofReader};
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};

use crate::error::Error;

const MAX_CONTEXT_LEN: usize = 255;

/// The pre-hash algorithm applied to the message before signing, or `Pure`
/// for the un-prehashed interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreHashAlg {
    /// No pre-hashing; the message is signed directly.
    Pure,
    /// Pre-hash with SHA2-224.
    Sha2_224,
    /// Pre-hash with SHA2-256.
    Sha2_256,
    /// Pre-hash with SHA2-384.
    Sha2_384,
    /// Pre-hash with SHA2-512.
    Sha2_512,
    /// Pre-hash with SHA2-512/224.
    Sha2_512_224,
    /// Pre-hash with SHA2-512/256.
    Sha2_512_256,
    /// Pre-hash with SHA3-224.
    Sha3_224,
    /// Pre-hash with SHA3-256.
    Sha3_256,
    /// Pre-hash with SHA3-384.
    Sha3_384,
    /// Pre-hash with SHA3-512.
    Sha3_512,
    /// Pre-hash with SHAKE128, squeezing a 32-byte digest.
    Shake128,
    /// Pre-hash with SHAKE256, squeezing a 64-byte digest.
    Shake256,
}

impl PreHashAlg {
    /// Looks up a pre-hash algorithm by its FIPS 205 name (e.g. `"SHA2-256"`,
    /// `"SHAKE-128"`, or `"Pure"` for the un-prehashed interface).
    pub fn from_name(name: &str) -> Result<Self, Error> {
        Ok(match name {
            "Pure" => Self::Pure,
            "SHA2-224" => Self::Sha2_224,
            "SHA2-256" => Self::Sha2_256,
            "SHA2-384" => Self::Sha2_384,
            "SHA2-512" => Self::Sha2_512,
            "SHA2-512/224" => Self::Sha2_512_224,
            "SHA2-512/256" => Self::Sha2_512_256,
            "SHA3-224" => Self::Sha3_224,
            "SHA3-256" => Self::Sha3_256,
            "SHA3-384" => Self::Sha3_384,
            "SHA3-512" => Self::Sha3_512,
            "SHAKE-128" => Self::Shake128,
            "SHAKE-256" => Self::Shake256,
            _ => return Err(Error::UnsupportedPreHash(name.to_string())),
        })
    }

    /// The one-byte OID suffix, per the DER `06 09 60 86 48 01 65 03 04 02 XX`.
    fn oid_suffix(self) -> u8 {
        match self {
            Self::Pure => unreachable!("Pure has no OID"),
            Self::Sha2_256 => 0x01,
            Self::Sha2_384 => 0x02,
            Self::Sha2_512 => 0x03,
            Self::Sha2_224 => 0x04,
            Self::Sha2_512_224 => 0x05,
            Self::Sha2_512_256 => 0x06,
            Self::Sha3_224 => 0x07,
            Self::Sha3_256 => 0x08,
            Self::Sha3_384 => 0x09,
            Self::Sha3_512 => 0x0a,
            Self::Shake128 => 0x0b,
            Self::Shake256 => 0x0c,
        }
    }

    fn digest(self, m: &[u8]) -> Vec<u8> {
        match self {
            Self::Pure => unreachable!("Pure has no digest"),
            Self::Sha2_224 => Sha224::digest(m).to_vec(),
            Self::Sha2_256 => Sha256::digest(m).to_vec(),
            Self::Sha2_384 => Sha384::digest(m).to_vec(),
            Self::Sha2_512 => Sha512::digest(m).to_vec(),
            Self::Sha2_512_224 => Sha512_224::digest(m).to_vec(),
            Self::Sha2_512_256 => Sha512_256::digest(m).to_vec(),
            Self::Sha3_224 => Sha3_224::digest(m).to_vec(),
            Self::Sha3_256 => Sha3_256::digest(m).to_vec(),
            Self::Sha3_384 => Sha3_384::digest(m).to_vec(),
            Self::Sha3_512 => Sha3_512::digest(m).to_vec(),
            Self::Shake128 => shake_xof::<Shake128>(m, 32),
            Self::Shake256 => shake_xof::<Shake256>(m, 64),
        }
    }
}

fn shake_xof<H: Default + Update + ExtendableOutput>(m: &[u8], out_len: usize) -> Vec<u8> {
    let mut hasher = H::default();
    hasher.update(m);
    let mut out = vec![0u8; out_len];
    hasher.finalize_xof().read(&mut out);
    out
}

/// Builds `M′` from the raw message, an optional context, and the chosen
/// pre-hash algorithm. Rejects contexts longer than 255 bytes.
pub(crate) fn build_envelope(alg: PreHashAlg, context: &[u8], m: &[u8]) -> Result<Vec<u8>, Error> {
    if context.len() > MAX_CONTEXT_LEN {
        return Err(Error::ContextTooLong(context.len()));
    }

    let mut out = Vec::new();
    match alg {
        PreHashAlg::Pure => {
            out.push(0x00);
            out.push(context.len() as u8);
            out.extend_from_slice(context);
            out.extend_from_slice(m);
        }
        other => {
            out.push(0x01);
            out.push(context.len() as u8);
            out.extend_from_slice(context);
            out.extend_from_slice(&[0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, other.oid_suffix()]);
            out.extend(other.digest(m));
        }
    }
    Ok(out)
}
