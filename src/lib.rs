#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::clone_on_copy)]
#![deny(missing_docs)]

//! # Usage
//! This crate implements the Stateless Hash-based Digital Signature Algorithm
//! (SLH-DSA) based on the finalized standard by NIST in FIPS-205. SLH-DSA
//! (based on the SPHINCS+ submission) is a signature algorithm designed to be
//! resistant to quantum computers.
//!
//! Unlike a compile-time-monomorphized signature scheme, the parameter set
//! here is selected at runtime by name, so a single [`Engine`] type covers
//! all twelve standardized parameter sets.
//!
//! It is important to note that the signatures produced by the algorithm are
//! much larger than classical schemes like EdDSA, ranging from over 7KB for
//! the smallest parameter set to nearly 50KB at the largest.
//!
//! ```
//! use rand::thread_rng;
//! use slh_dsa_engine::{Engine, PreHashAlg};
//!
//! let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
//! let mut rng = thread_rng();
//!
//! let (sk, pk) = engine.generate_key_pair(&mut rng);
//!
//! let message = b"Hello world";
//! let sig = engine
//!     .generate_signature(&mut rng, &sk, message, b"", false, PreHashAlg::Pure)
//!     .unwrap();
//!
//! assert!(engine
//!     .verify_signature(&pk, message, &sig, b"", PreHashAlg::Pure)
//!     .unwrap());
//! ```

mod address;
mod engine;
mod error;
mod fors;
mod hashes;
mod hypertree;
mod params;
mod prehash;
mod signature_encoding;
mod util;
mod wots;
mod xmss;

pub use engine::{Engine, PrivateKey, PublicKey};
pub use error::Error;
pub use params::ParameterSet;
pub use prehash::PreHashAlg;
