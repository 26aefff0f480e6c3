//! The hash-family façade: a six-operation capability `{H_msg, PRF,
//! PRF_msg, F, H, T_l}` dispatched at runtime on the active parameter set's
//! [`HashFamily`], rather than selected by a compile-time type parameter.

mod sha2;
mod shake;

use crate::address::Address;
use crate::params::{HashFamily, ParameterSet};

pub(crate) struct Hasher {
    family: HashFamily,
    n: usize,
    m: usize,
}

impl Hasher {
    pub(crate) fn new(params: &ParameterSet) -> Self {
        Self {
            family: params.hash_family,
            n: params.n,
            m: params.m,
        }
    }

    pub(crate) fn h_msg(&self, r: &[u8], pk_seed: &[u8], pk_root: &[u8], m: &[u8]) -> Vec<u8> {
        match self.family {
            HashFamily::Sha2 => sha2::h_msg(self.n, self.m, r, pk_seed, pk_root, m),
            HashFamily::Shake => shake::h_msg(self.m, r, pk_seed, pk_root, m),
        }
    }

    pub(crate) fn prf(&self, pk_seed: &[u8], sk_seed: &[u8], adrs: &Address) -> Vec<u8> {
        match self.family {
            HashFamily::Sha2 => sha2::prf(self.n, pk_seed, sk_seed, adrs),
            HashFamily::Shake => shake::prf(self.n, pk_seed, sk_seed, adrs),
        }
    }

    pub(crate) fn prf_msg(&self, sk_prf: &[u8], opt_rand: &[u8], m: &[u8]) -> Vec<u8> {
        match self.family {
            HashFamily::Sha2 => sha2::prf_msg(self.n, sk_prf, opt_rand, m),
            HashFamily::Shake => shake::prf_msg(self.n, sk_prf, opt_rand, m),
        }
    }

    pub(crate) fn f(&self, pk_seed: &[u8], adrs: &Address, m1: &[u8]) -> Vec<u8> {
        match self.family {
            HashFamily::Sha2 => sha2::f(self.n, pk_seed, adrs, m1),
            HashFamily::Shake => shake::f(self.n, pk_seed, adrs, m1),
        }
    }

    pub(crate) fn h(&self, pk_seed: &[u8], adrs: &Address, m2: &[u8]) -> Vec<u8> {
        match self.family {
            HashFamily::Sha2 => sha2::h(self.n, pk_seed, adrs, m2),
            HashFamily::Shake => shake::h(self.n, pk_seed, adrs, m2),
        }
    }

    pub(crate) fn t_l(&self, pk_seed: &[u8], adrs: &Address, ml: &[u8]) -> Vec<u8> {
        match self.family {
            HashFamily::Sha2 => sha2::t_l(self.n, pk_seed, adrs, ml),
            HashFamily::Shake => shake::t_l(self.n, pk_seed, adrs, ml),
        }
    }
}
