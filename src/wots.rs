//! WOTS+ (Winternitz One-Time Signature Plus): chain, public-key
//! generation, sign, and public-key-from-signature.

use crate::address::{Address, AddressType};
use crate::hashes::Hasher;
use crate::params::ParameterSet;
use crate::util::{base_2b, ceil_div, to_byte};

/// A WOTS+ signature: `len` chains of `n` bytes each, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WotsSignature(pub(crate) Vec<Vec<u8>>);

impl WotsSignature {
    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        self.0.concat()
    }

    pub(crate) fn from_chunks(chains: Vec<Vec<u8>>) -> Self {
        Self(chains)
    }
}

/// Starting from `x`, walks the hash chain forward `s` steps beginning at
/// step `i`. `adrs` is mutated locally; the caller's copy is untouched.
pub(crate) fn chain(
    hasher: &Hasher,
    x: &[u8],
    i: u32,
    s: u32,
    pk_seed: &[u8],
    adrs: &Address,
) -> Vec<u8> {
    let mut adrs = *adrs;
    let mut tmp = x.to_vec();
    for j in i..i + s {
        adrs.set_hash(j);
        tmp = hasher.f(pk_seed, &adrs, &tmp);
    }
    tmp
}

fn wots_digits(params: &ParameterSet, m: &[u8]) -> Vec<u32> {
    let wp = params.wots();
    let lg_w = params.lg_w;
    let mut digits = base_2b(m, lg_w, wp.len1);

    let csum: u32 = digits.iter().map(|&d| (wp.w as u32 - 1) - d).sum();
    let shift = (8 - ((wp.len2 * lg_w) % 8)) % 8;
    let csum_bytes = to_byte(u64::from(csum) << shift, ceil_div(wp.len2 * lg_w, 8));
    digits.extend(base_2b(&csum_bytes, lg_w, wp.len2));
    digits
}

fn prf_key_adrs(adrs: &Address) -> Address {
    let mut sk_adrs = *adrs;
    sk_adrs.set_type_and_clear(AddressType::WotsPrf);
    sk_adrs.set_key_pair(adrs.get_key_pair());
    sk_adrs
}

pub(crate) fn pk_gen(
    hasher: &Hasher,
    params: &ParameterSet,
    sk_seed: &[u8],
    pk_seed: &[u8],
    adrs: &Address,
) -> Vec<u8> {
    let wp = params.wots();
    let mut adrs = *adrs;
    let mut sk_adrs = prf_key_adrs(&adrs);

    let mut tmp = Vec::with_capacity(wp.len * params.n);
    for i in 0..wp.len as u32 {
        sk_adrs.set_chain(i);
        adrs.set_chain(i);
        let sk = hasher.prf(pk_seed, sk_seed, &sk_adrs);
        tmp.extend(chain(hasher, &sk, 0, (wp.w - 1) as u32, pk_seed, &adrs));
    }

    let mut pk_adrs = adrs;
    pk_adrs.set_type_and_clear(AddressType::WotsPk);
    pk_adrs.set_key_pair(adrs.get_key_pair());
    hasher.t_l(pk_seed, &pk_adrs, &tmp)
}

pub(crate) fn sign(
    hasher: &Hasher,
    params: &ParameterSet,
    m: &[u8],
    sk_seed: &[u8],
    pk_seed: &[u8],
    adrs: &Address,
) -> WotsSignature {
    let wp = params.wots();
    let digits = wots_digits(params, m);
    let mut adrs = *adrs;
    let mut sk_adrs = prf_key_adrs(&adrs);

    let mut chains = Vec::with_capacity(wp.len);
    for i in 0..wp.len as u32 {
        sk_adrs.set_chain(i);
        adrs.set_chain(i);
        let sk = hasher.prf(pk_seed, sk_seed, &sk_adrs);
        chains.push(chain(hasher, &sk, 0, digits[i as usize], pk_seed, &adrs));
    }
    WotsSignature::from_chunks(chains)
}

pub(crate) fn pk_from_sig(
    hasher: &Hasher,
    params: &ParameterSet,
    sig: &WotsSignature,
    m: &[u8],
    pk_seed: &[u8],
    adrs: &Address,
) -> Vec<u8> {
    let wp = params.wots();
    let digits = wots_digits(params, m);
    let mut adrs = *adrs;

    let mut tmp = Vec::with_capacity(wp.len * params.n);
    for i in 0..wp.len {
        adrs.set_chain(i as u32);
        let d = digits[i];
        tmp.extend(chain(
            hasher,
            &sig.0[i],
            d,
            (wp.w as u32 - 1) - d,
            pk_seed,
            &adrs,
        ));
    }

    let mut pk_adrs = adrs;
    pk_adrs.set_type_and_clear(AddressType::WotsPk);
    pk_adrs.set_key_pair(adrs.get_key_pair());
    hasher.t_l(pk_seed, &pk_adrs, &tmp)
}
