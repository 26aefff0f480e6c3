//! Flattening and parsing of the `(R, FORS, HT)` triple into the wire format:
//! `R ∥ FORS(sk_i, auth_i for i in 0..k) ∥ HT(wots sig, auth path for each of d layers)`.

use crate::error::Error;
use crate::fors::{ForsSignature, ForsTreeSignature};
use crate::hypertree::HypertreeSignature;
use crate::params::ParameterSet;
use crate::wots::WotsSignature;
use crate::xmss::XmssSignature;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SlhDsaSignature {
    pub(crate) r: Vec<u8>,
    pub(crate) fors: ForsSignature,
    pub(crate) ht: HypertreeSignature,
}

impl SlhDsaSignature {
    pub(crate) fn to_bytes(&self, params: &ParameterSet) -> Vec<u8> {
        let mut out = Vec::with_capacity(params.signature_len());
        out.extend_from_slice(&self.r);

        for tree in &self.fors.0 {
            out.extend_from_slice(&tree.sk);
            for node in &tree.auth {
                out.extend_from_slice(node);
            }
        }

        for layer in &self.ht.0 {
            out.extend_from_slice(&layer.wots.to_bytes());
            for node in &layer.auth {
                out.extend_from_slice(node);
            }
        }

        out
    }

    pub(crate) fn from_bytes(params: &ParameterSet, bytes: &[u8]) -> Result<Self, Error> {
        let expected = params.signature_len();
        if bytes.len() != expected {
            return Err(Error::InvalidSignatureLength {
                expected,
                got: bytes.len(),
            });
        }

        let n = params.n;
        let wp = params.wots();
        let h_prime = params.h_prime();
        let mut cursor = 0usize;

        let r = bytes[cursor..cursor + n].to_vec();
        cursor += n;

        let mut trees = Vec::with_capacity(params.k);
        for _ in 0..params.k {
            let sk = bytes[cursor..cursor + n].to_vec();
            cursor += n;
            let mut auth = Vec::with_capacity(params.a);
            for _ in 0..params.a {
                auth.push(bytes[cursor..cursor + n].to_vec());
                cursor += n;
            }
            trees.push(ForsTreeSignature { sk, auth });
        }

        let mut layers = Vec::with_capacity(params.d);
        for _ in 0..params.d {
            let mut chains = Vec::with_capacity(wp.len);
            for _ in 0..wp.len {
                chains.push(bytes[cursor..cursor + n].to_vec());
                cursor += n;
            }
            let mut auth = Vec::with_capacity(h_prime);
            for _ in 0..h_prime {
                auth.push(bytes[cursor..cursor + n].to_vec());
                cursor += n;
            }
            layers.push(XmssSignature {
                wots: WotsSignature::from_chunks(chains),
                auth,
            });
        }

        debug_assert_eq!(cursor, bytes.len());

        Ok(SlhDsaSignature {
            r,
            fors: ForsSignature(trees),
            ht: HypertreeSignature(layers),
        })
    }
}
