//! FORS (Forest of Random Subsets): the few-time signature over `k` small
//! Merkle trees of height `a`, used to sign the message digest at the leaf
//! the hypertree authenticates.

use crate::address::{Address, AddressType};
use crate::hashes::Hasher;
use crate::params::ParameterSet;
use crate::util::base_2b;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ForsTreeSignature {
    pub(crate) sk: Vec<u8>,
    pub(crate) auth: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ForsSignature(pub(crate) Vec<ForsTreeSignature>);

pub(crate) fn sk_gen(hasher: &Hasher, sk_seed: &[u8], pk_seed: &[u8], adrs: &Address, i: u32) -> Vec<u8> {
    let mut sk_adrs = *adrs;
    sk_adrs.set_type_and_clear(AddressType::ForsPrf);
    sk_adrs.set_key_pair(adrs.get_key_pair());
    sk_adrs.set_tree_index(i);
    hasher.prf(pk_seed, sk_seed, &sk_adrs)
}

/// Recursively computes the root of the subtree of height `z` rooted at
/// index `i`. Bounded to depth `a ≤ 14` for the standardized parameter
/// sets.
pub(crate) fn node(
    hasher: &Hasher,
    sk_seed: &[u8],
    i: u32,
    z: u32,
    pk_seed: &[u8],
    adrs: &Address,
) -> Vec<u8> {
    let mut adrs = *adrs;
    if z == 0 {
        let sk = sk_gen(hasher, sk_seed, pk_seed, &adrs, i);
        adrs.set_tree_height(0);
        adrs.set_tree_index(i);
        hasher.f(pk_seed, &adrs, &sk)
    } else {
        let left = node(hasher, sk_seed, 2 * i, z - 1, pk_seed, &adrs);
        let right = node(hasher, sk_seed, 2 * i + 1, z - 1, pk_seed, &adrs);
        adrs.set_tree_height(z);
        adrs.set_tree_index(i);
        let mut m2 = left;
        m2.extend(right);
        hasher.h(pk_seed, &adrs, &m2)
    }
}

pub(crate) fn sign(
    hasher: &Hasher,
    params: &ParameterSet,
    md: &[u8],
    sk_seed: &[u8],
    pk_seed: &[u8],
    adrs: &Address,
) -> ForsSignature {
    let indices = base_2b(md, params.a, params.k);
    let mut trees = Vec::with_capacity(params.k);

    for (i, &idx) in indices.iter().enumerate() {
        let i = i as u32;
        let sk = sk_gen(hasher, sk_seed, pk_seed, adrs, (i << params.a) + idx);
        let mut auth = Vec::with_capacity(params.a);
        for j in 0..params.a as u32 {
            let s = (idx >> j) ^ 1;
            auth.push(node(hasher, sk_seed, (i << (params.a as u32 - j)) + s, j, pk_seed, adrs));
        }
        trees.push(ForsTreeSignature { sk, auth });
    }

    ForsSignature(trees)
}

pub(crate) fn pk_from_sig(
    hasher: &Hasher,
    params: &ParameterSet,
    sig: &ForsSignature,
    md: &[u8],
    pk_seed: &[u8],
    adrs: &Address,
) -> Vec<u8> {
    let indices = base_2b(md, params.a, params.k);
    let mut adrs = *adrs;
    let mut roots = Vec::with_capacity(params.k * params.n);

    for (i, (&idx, tree_sig)) in indices.iter().zip(sig.0.iter()).enumerate() {
        let i = i as u32;
        adrs.set_tree_height(0);
        adrs.set_tree_index((i << params.a) + idx);
        let mut node0 = hasher.f(pk_seed, &adrs, &tree_sig.sk);

        for j in 0..params.a as u32 {
            adrs.set_tree_height(j + 1);
            let cur = adrs.get_tree_index();
            if (idx >> j) & 1 == 0 {
                adrs.set_tree_index(cur / 2);
                let mut m2 = node0;
                m2.extend(tree_sig.auth[j as usize].clone());
                node0 = hasher.h(pk_seed, &adrs, &m2);
            } else {
                adrs.set_tree_index((cur - 1) / 2);
                let mut m2 = tree_sig.auth[j as usize].clone();
                m2.extend(node0);
                node0 = hasher.h(pk_seed, &adrs, &m2);
            }
        }
        roots.extend(node0);
    }

    let mut pk_adrs = adrs;
    pk_adrs.set_type_and_clear(AddressType::ForsRoots);
    pk_adrs.set_key_pair(adrs.get_key_pair());
    hasher.t_l(pk_seed, &pk_adrs, &roots)
}
