//! XMSS: a Merkle tree of WOTS+ public keys. This module is reconstructed
//! from the Go reference implementation (`original_source/internal/xmss.go`)
//! — the upstream Rust crate's own `xmss.rs` was not present in the
//! retrieved pack, though its shape is implied by `hypertree.rs`.

use crate::address::{Address, AddressType};
use crate::hashes::Hasher;
use crate::params::ParameterSet;
use crate::wots::{self, WotsSignature};

/// A single-layer XMSS signature: a WOTS+ signature of the leaf message
/// plus the `h'`-hash authentication path up to the layer root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct XmssSignature {
    pub(crate) wots: WotsSignature,
    pub(crate) auth: Vec<Vec<u8>>,
}

/// Recursively computes the root of the subtree of height `z` rooted at
/// leaf index `i`. Bounded to depth `h' ≤ 9` for the standardized parameter
/// sets, so plain recursion is safe.
pub(crate) fn node(
    hasher: &Hasher,
    params: &ParameterSet,
    sk_seed: &[u8],
    i: u64,
    z: u32,
    pk_seed: &[u8],
    adrs: &Address,
) -> Vec<u8> {
    let mut adrs = *adrs;
    if z == 0 {
        adrs.set_type_and_clear(AddressType::WotsHash);
        adrs.set_key_pair(i as u32);
        wots::pk_gen(hasher, params, sk_seed, pk_seed, &adrs)
    } else {
        let left = node(hasher, params, sk_seed, 2 * i, z - 1, pk_seed, &adrs);
        let right = node(hasher, params, sk_seed, 2 * i + 1, z - 1, pk_seed, &adrs);
        adrs.set_type_and_clear(AddressType::Tree);
        adrs.set_tree_height(z);
        adrs.set_tree_index(i as u32);
        let mut m2 = left;
        m2.extend(right);
        hasher.h(pk_seed, &adrs, &m2)
    }
}

pub(crate) fn sign(
    hasher: &Hasher,
    params: &ParameterSet,
    m: &[u8],
    sk_seed: &[u8],
    idx: u64,
    pk_seed: &[u8],
    adrs: &Address,
) -> XmssSignature {
    let h_prime = params.h_prime();
    let mut auth = Vec::with_capacity(h_prime);
    for j in 0..h_prime as u32 {
        let k = (idx >> j) ^ 1;
        auth.push(node(hasher, params, sk_seed, k, j, pk_seed, adrs));
    }

    let mut wots_adrs = *adrs;
    wots_adrs.set_type_and_clear(AddressType::WotsHash);
    wots_adrs.set_key_pair(idx as u32);
    let wots_sig = wots::sign(hasher, params, m, sk_seed, pk_seed, &wots_adrs);

    XmssSignature {
        wots: wots_sig,
        auth,
    }
}

pub(crate) fn pk_from_sig(
    hasher: &Hasher,
    params: &ParameterSet,
    idx: u64,
    sig: &XmssSignature,
    m: &[u8],
    pk_seed: &[u8],
    adrs: &Address,
) -> Vec<u8> {
    let mut adrs = *adrs;
    adrs.set_type_and_clear(AddressType::WotsHash);
    adrs.set_key_pair(idx as u32);
    let mut node0 = wots::pk_from_sig(hasher, params, &sig.wots, m, pk_seed, &adrs);

    adrs.set_type_and_clear(AddressType::Tree);
    adrs.set_tree_index(idx as u32);
    for k in 0..params.h_prime() as u32 {
        adrs.set_tree_height(k + 1);
        let cur = adrs.get_tree_index();
        if (idx >> k) & 1 == 0 {
            adrs.set_tree_index(cur / 2);
            let mut m2 = node0;
            m2.extend(sig.auth[k as usize].clone());
            node0 = hasher.h(pk_seed, &adrs, &m2);
        } else {
            adrs.set_tree_index((cur - 1) / 2);
            let mut m2 = sig.auth[k as usize].clone();
            m2.extend(node0);
            node0 = hasher.h(pk_seed, &adrs, &m2);
        }
    }
    node0
}
