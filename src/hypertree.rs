//! The hypertree: `d` layers of XMSS, each layer signing the root of the
//! layer below, indexed by successive `h'`-bit slices of a tree index.

use crate::address::Address;
use crate::hashes::Hasher;
use crate::params::ParameterSet;
use crate::xmss::{self, XmssSignature};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HypertreeSignature(pub(crate) Vec<XmssSignature>);

pub(crate) fn ht_sign(
    hasher: &Hasher,
    params: &ParameterSet,
    m: &[u8],
    sk_seed: &[u8],
    pk_seed: &[u8],
    mut idx_tree: u64,
    mut idx_leaf: u64,
) -> HypertreeSignature {
    let h_prime = params.h_prime();
    let mut adrs = Address::new();
    adrs.set_tree(idx_tree);

    let sig0 = xmss::sign(hasher, params, m, sk_seed, idx_leaf, pk_seed, &adrs);
    let mut root = xmss::pk_from_sig(hasher, params, idx_leaf, &sig0, m, pk_seed, &adrs);
    let mut sigs = Vec::with_capacity(params.d);
    sigs.push(sig0);

    for j in 1..params.d as u32 {
        idx_leaf = idx_tree & ((1u64 << h_prime) - 1);
        idx_tree >>= h_prime;
        adrs.set_layer(j);
        adrs.set_tree(idx_tree);
        let sig_j = xmss::sign(hasher, params, &root, sk_seed, idx_leaf, pk_seed, &adrs);
        if j != params.d as u32 - 1 {
            root = xmss::pk_from_sig(hasher, params, idx_leaf, &sig_j, &root, pk_seed, &adrs);
        }
        sigs.push(sig_j);
    }

    HypertreeSignature(sigs)
}

pub(crate) fn ht_verify(
    hasher: &Hasher,
    params: &ParameterSet,
    m: &[u8],
    sig: &HypertreeSignature,
    pk_seed: &[u8],
    mut idx_tree: u64,
    mut idx_leaf: u64,
    pk_root: &[u8],
) -> bool {
    let h_prime = params.h_prime();
    let mut adrs = Address::new();
    adrs.set_tree(idx_tree);

    let mut node = xmss::pk_from_sig(hasher, params, idx_leaf, &sig.0[0], m, pk_seed, &adrs);
    for j in 1..params.d as u32 {
        idx_leaf = idx_tree & ((1u64 << h_prime) - 1);
        idx_tree >>= h_prime;
        adrs.set_layer(j);
        adrs.set_tree(idx_tree);
        node = xmss::pk_from_sig(hasher, params, idx_leaf, &sig.0[j as usize], &node, pk_seed, &adrs);
    }
    node == pk_root
}
