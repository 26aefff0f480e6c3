//! SHA-2 family implementation of the hash façade. `F` and `PRF` always use
//! SHA-256 regardless of `n`; `H`, `T_l` and the inner hash paired with
//! MGF1 in `H_msg` use SHA-256 when `n = 16` and SHA-512 when `n ∈ {24, 32}`.

use digest::Digest;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

use crate::address::Address;

fn mgf1<D: Digest>(seed: &[u8], len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len + D::output_size());
    let mut counter: u32 = 0;
    while out.len() < len {
        let mut h = D::new();
        h.update(seed);
        h.update(counter.to_be_bytes());
        out.extend_from_slice(&h.finalize());
        counter += 1;
    }
    out.truncate(len);
    out
}

pub(crate) fn prf(n: usize, pk_seed: &[u8], sk_seed: &[u8], adrs: &Address) -> Vec<u8> {
    let mut buf = Vec::with_capacity(pk_seed.len() + 64 + sk_seed.len());
    buf.extend_from_slice(pk_seed);
    buf.extend(std::iter::repeat(0u8).take(64 - n));
    buf.extend_from_slice(&adrs.compressed());
    buf.extend_from_slice(sk_seed);
    Sha256::digest(&buf)[..n].to_vec()
}

pub(crate) fn f(n: usize, pk_seed: &[u8], adrs: &Address, m1: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(pk_seed.len() + 64 + m1.len());
    buf.extend_from_slice(pk_seed);
    buf.extend(std::iter::repeat(0u8).take(64 - n));
    buf.extend_from_slice(&adrs.compressed());
    buf.extend_from_slice(m1);
    Sha256::digest(&buf)[..n].to_vec()
}

fn padded_buf(n: usize, b: usize, pk_seed: &[u8], adrs: &Address, m: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(pk_seed.len() + b + m.len());
    buf.extend_from_slice(pk_seed);
    buf.extend(std::iter::repeat(0u8).take(b - n));
    buf.extend_from_slice(&adrs.compressed());
    buf.extend_from_slice(m);
    buf
}

pub(crate) fn h(n: usize, pk_seed: &[u8], adrs: &Address, m2: &[u8]) -> Vec<u8> {
    if n == 16 {
        let buf = padded_buf(n, 64, pk_seed, adrs, m2);
        Sha256::digest(&buf)[..n].to_vec()
    } else {
        let buf = padded_buf(n, 128, pk_seed, adrs, m2);
        Sha512::digest(&buf)[..n].to_vec()
    }
}

pub(crate) fn t_l(n: usize, pk_seed: &[u8], adrs: &Address, ml: &[u8]) -> Vec<u8> {
    h(n, pk_seed, adrs, ml)
}

pub(crate) fn prf_msg(n: usize, sk_prf: &[u8], opt_rand: &[u8], m: &[u8]) -> Vec<u8> {
    if n == 16 {
        let mut mac = Hmac::<Sha256>::new_from_slice(sk_prf).expect("HMAC accepts any key length");
        mac.update(opt_rand);
        mac.update(m);
        mac.finalize().into_bytes()[..n].to_vec()
    } else {
        let mut mac = Hmac::<Sha512>::new_from_slice(sk_prf).expect("HMAC accepts any key length");
        mac.update(opt_rand);
        mac.update(m);
        mac.finalize().into_bytes()[..n].to_vec()
    }
}

pub(crate) fn h_msg(n: usize, mlen: usize, r: &[u8], pk_seed: &[u8], pk_root: &[u8], m: &[u8]) -> Vec<u8> {
    let mut inner_buf = Vec::with_capacity(r.len() + pk_seed.len() + pk_root.len() + m.len());
    inner_buf.extend_from_slice(r);
    inner_buf.extend_from_slice(pk_seed);
    inner_buf.extend_from_slice(pk_root);
    inner_buf.extend_from_slice(m);

    let mut seed = Vec::with_capacity(r.len() + pk_seed.len() + 64);
    seed.extend_from_slice(r);
    seed.extend_from_slice(pk_seed);

    if n == 16 {
        seed.extend_from_slice(&Sha256::digest(&inner_buf));
        mgf1::<Sha256>(&seed, mlen)
    } else {
        seed.extend_from_slice(&Sha512::digest(&inner_buf));
        mgf1::<Sha512>(&seed, mlen)
    }
}
