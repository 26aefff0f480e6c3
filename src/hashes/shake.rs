//! SHAKE family implementation of the hash façade: every operation is
//! `SHAKE256` over the concatenated inputs, using the full 32-byte address
//! rather than the SHA-2 family's 22-byte compressed form.

use digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

use crate::address::Address;

fn shake256(parts: &[&[u8]], out_len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    for part in parts {
        Update::update(&mut hasher, part);
    }
    let mut out = vec![0u8; out_len];
    hasher.finalize_xof().read(&mut out);
    out
}

pub(crate) fn prf(n: usize, pk_seed: &[u8], sk_seed: &[u8], adrs: &Address) -> Vec<u8> {
    shake256(&[pk_seed, adrs.as_bytes(), sk_seed], n)
}

pub(crate) fn prf_msg(n: usize, sk_prf: &[u8], opt_rand: &[u8], m: &[u8]) -> Vec<u8> {
    shake256(&[sk_prf, opt_rand, m], n)
}

pub(crate) fn f(n: usize, pk_seed: &[u8], adrs: &Address, m1: &[u8]) -> Vec<u8> {
    shake256(&[pk_seed, adrs.as_bytes(), m1], n)
}

pub(crate) fn h(n: usize, pk_seed: &[u8], adrs: &Address, m2: &[u8]) -> Vec<u8> {
    shake256(&[pk_seed, adrs.as_bytes(), m2], n)
}

pub(crate) fn t_l(n: usize, pk_seed: &[u8], adrs: &Address, ml: &[u8]) -> Vec<u8> {
    shake256(&[pk_seed, adrs.as_bytes(), ml], n)
}

pub(crate) fn h_msg(mlen: usize, r: &[u8], pk_seed: &[u8], pk_root: &[u8], m: &[u8]) -> Vec<u8> {
    shake256(&[r, pk_seed, pk_root, m], mlen)
}
