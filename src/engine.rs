//! The top-level SLH-DSA engine: key generation, signing, and verification,
//! tying together the address, hash façade, WOTS⁺, XMSS, hypertree, and FORS
//! layers per FIPS 205 algorithms 18–20.

use rand_core::{CryptoRng, RngCore};
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::address::{Address, AddressType};
use crate::error::Error;
use crate::fors;
use crate::hashes::Hasher;
use crate::hypertree::{ht_sign, ht_verify};
use crate::params::ParameterSet;
use crate::prehash::{build_envelope, PreHashAlg};
use crate::signature_encoding::SlhDsaSignature;
use crate::xmss;

/// An SLH-DSA private key: `sk.seed ∥ sk.prf ∥ pk.seed ∥ pk.root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey(Vec<u8>);

#[cfg(feature = "zeroize")]
impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl PrivateKey {
    fn sk_seed(&self, n: usize) -> &[u8] {
        &self.0[0..n]
    }

    fn sk_prf(&self, n: usize) -> &[u8] {
        &self.0[n..2 * n]
    }

    fn pk_seed(&self, n: usize) -> &[u8] {
        &self.0[2 * n..3 * n]
    }

    fn pk_root(&self, n: usize) -> &[u8] {
        &self.0[3 * n..4 * n]
    }

    /// Returns the `sk.seed ∥ sk.prf ∥ pk.seed ∥ pk.root` wire encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

/// An SLH-DSA public key: `pk.seed ∥ pk.root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(Vec<u8>);

impl PublicKey {
    fn pk_seed(&self, n: usize) -> &[u8] {
        &self.0[0..n]
    }

    fn pk_root(&self, n: usize) -> &[u8] {
        &self.0[n..2 * n]
    }

    /// Returns the `pk.seed ∥ pk.root` wire encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

/// An SLH-DSA signing/verification engine bound to one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    params: &'static ParameterSet,
}

impl Engine {
    /// Looks up `name` in the standardized twelve parameter sets.
    pub fn new(name: &str) -> Result<Self, Error> {
        let params = ParameterSet::find(name).ok_or_else(|| Error::InvalidParameterSet(name.to_string()))?;
        Ok(Self { params })
    }

    /// The parameter set this engine was constructed with.
    pub fn parameter_set(&self) -> &'static ParameterSet {
        self.params
    }

    /// Parses a `4n`-byte private key, checking its length against this
    /// engine's parameter set.
    pub fn parse_private_key(&self, bytes: &[u8]) -> Result<PrivateKey, Error> {
        let expected = 4 * self.params.n;
        if bytes.len() != expected {
            return Err(Error::InvalidKeyLength {
                expected,
                got: bytes.len(),
            });
        }
        Ok(PrivateKey(bytes.to_vec()))
    }

    /// Parses a `2n`-byte public key, checking its length against this
    /// engine's parameter set.
    pub fn parse_public_key(&self, bytes: &[u8]) -> Result<PublicKey, Error> {
        let expected = 2 * self.params.n;
        if bytes.len() != expected {
            return Err(Error::InvalidKeyLength {
                expected,
                got: bytes.len(),
            });
        }
        Ok(PublicKey(bytes.to_vec()))
    }

    /// Draws fresh seed material from `rng` and derives `pk.root` via the
    /// top-layer XMSS node.
    pub fn generate_key_pair(&self, rng: &mut impl RngCore + CryptoRng) -> (PrivateKey, PublicKey) {
        let n = self.params.n;
        let mut sk_seed = vec![0u8; n];
        let mut sk_prf = vec![0u8; n];
        let mut pk_seed = vec![0u8; n];
        rng.fill_bytes(&mut sk_seed);
        rng.fill_bytes(&mut sk_prf);
        rng.fill_bytes(&mut pk_seed);

        let hasher = Hasher::new(self.params);
        let mut adrs = Address::new();
        adrs.set_layer((self.params.d - 1) as u32);
        let pk_root = xmss::node(&hasher, self.params, &sk_seed, 0, self.params.h_prime() as u32, &pk_seed, &adrs);

        let mut sk_bytes = Vec::with_capacity(4 * n);
        sk_bytes.extend_from_slice(&sk_seed);
        sk_bytes.extend_from_slice(&sk_prf);
        sk_bytes.extend_from_slice(&pk_seed);
        sk_bytes.extend_from_slice(&pk_root);

        let mut pk_bytes = Vec::with_capacity(2 * n);
        pk_bytes.extend_from_slice(&pk_seed);
        pk_bytes.extend_from_slice(&pk_root);

        (PrivateKey(sk_bytes), PublicKey(pk_bytes))
    }

    /// Signs `message` under `sk`. `add_rand` requests fresh randomizer
    /// bytes from `rng` each call (FIPS 205's "hedged" mode); otherwise
    /// signing is deterministic in `sk.pk_seed`.
    pub fn generate_signature(
        &self,
        rng: &mut impl RngCore + CryptoRng,
        sk: &PrivateKey,
        message: &[u8],
        context: &[u8],
        add_rand: bool,
        prehash: PreHashAlg,
    ) -> Result<Vec<u8>, Error> {
        let n = self.params.n;
        let m_prime = build_envelope(prehash, context, message)?;

        let opt_rand = if add_rand {
            let mut buf = vec![0u8; n];
            rng.fill_bytes(&mut buf);
            buf
        } else {
            sk.pk_seed(n).to_vec()
        };

        let sig = self.sign_internal(sk, &m_prime, &opt_rand);
        Ok(sig.to_bytes(self.params))
    }

    /// Verifies `signature` over `message` under `pk`.
    pub fn verify_signature(
        &self,
        pk: &PublicKey,
        message: &[u8],
        signature: &[u8],
        context: &[u8],
        prehash: PreHashAlg,
    ) -> Result<bool, Error> {
        let m_prime = build_envelope(prehash, context, message)?;
        let sig = SlhDsaSignature::from_bytes(self.params, signature)?;
        Ok(self.verify_internal(pk, &m_prime, &sig))
    }

    fn sign_internal(&self, sk: &PrivateKey, m_prime: &[u8], opt_rand: &[u8]) -> SlhDsaSignature {
        let n = self.params.n;
        let hasher = Hasher::new(self.params);

        let r = hasher.prf_msg(sk.sk_prf(n), opt_rand, m_prime);
        let digest = hasher.h_msg(&r, sk.pk_seed(n), sk.pk_root(n), m_prime);
        let (md, idx_tree, idx_leaf) = self.split_digest(&digest);

        let mut adrs = Address::new();
        adrs.set_tree(idx_tree);
        adrs.set_type_and_clear(AddressType::ForsTree);
        adrs.set_key_pair(idx_leaf as u32);

        let fors_sig = fors::sign(&hasher, self.params, &md, sk.sk_seed(n), sk.pk_seed(n), &adrs);
        let pk_fors = fors::pk_from_sig(&hasher, self.params, &fors_sig, &md, sk.pk_seed(n), &adrs);
        let ht_sig = ht_sign(&hasher, self.params, &pk_fors, sk.sk_seed(n), sk.pk_seed(n), idx_tree, idx_leaf);

        SlhDsaSignature {
            r,
            fors: fors_sig,
            ht: ht_sig,
        }
    }

    fn verify_internal(&self, pk: &PublicKey, m_prime: &[u8], sig: &SlhDsaSignature) -> bool {
        let n = self.params.n;
        let hasher = Hasher::new(self.params);

        let digest = hasher.h_msg(&sig.r, pk.pk_seed(n), pk.pk_root(n), m_prime);
        let (md, idx_tree, idx_leaf) = self.split_digest(&digest);

        let mut adrs = Address::new();
        adrs.set_tree(idx_tree);
        adrs.set_type_and_clear(AddressType::ForsTree);
        adrs.set_key_pair(idx_leaf as u32);

        let pk_fors = fors::pk_from_sig(&hasher, self.params, &sig.fors, &md, pk.pk_seed(n), &adrs);
        ht_verify(
            &hasher,
            self.params,
            &pk_fors,
            &sig.ht,
            pk.pk_seed(n),
            idx_tree,
            idx_leaf,
            pk.pk_root(n),
        )
    }

    /// Splits the `m`-byte message digest into `(md, idx_tree, idx_leaf)`
    /// per §4.9: `md` is the leading `⌈ka/8⌉` bytes; the remaining bytes are
    /// the tree and leaf indices, each reduced modulo their index space.
    fn split_digest(&self, digest: &[u8]) -> (Vec<u8>, u64, u64) {
        let p = self.params;
        let len_md = (p.k * p.a).div_ceil(8);
        let h_prime = p.h_prime();
        let len_tree = (p.h - h_prime).div_ceil(8);
        let len_leaf = h_prime.div_ceil(8);

        let md = digest[0..len_md].to_vec();
        let tmp_tree = &digest[len_md..len_md + len_tree];
        let tmp_leaf = &digest[len_md + len_tree..len_md + len_tree + len_leaf];

        let idx_tree = to_int_u64(tmp_tree) & tree_index_mask(p.h - h_prime);
        let idx_leaf = to_int_u64(tmp_leaf) & tree_index_mask(h_prime);

        (md, idx_tree, idx_leaf)
    }
}

fn to_int_u64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// `2^bits - 1`, saturating to `u64::MAX` when `bits >= 64` (the `h - h'`
/// edge case for parameter sets where that difference reaches 64).
fn tree_index_mask(bits: usize) -> u64 {
    1u64.checked_shl(bits as u32).unwrap_or(0).wrapping_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sign_then_verify_round_trips() {
        let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let (sk, pk) = engine.generate_key_pair(&mut rng);

        let sig = engine
            .generate_signature(&mut rng, &sk, b"Test", b"", false, PreHashAlg::Pure)
            .unwrap();
        assert!(engine.verify_signature(&pk, b"Test", &sig, b"", PreHashAlg::Pure).unwrap());
    }

    #[test]
    fn deterministic_signing_is_byte_identical() {
        let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let (sk, _pk) = engine.generate_key_pair(&mut rng);

        let sig_a = engine
            .generate_signature(&mut rng, &sk, b"Test", b"", false, PreHashAlg::Pure)
            .unwrap();
        let sig_b = engine
            .generate_signature(&mut rng, &sk, b"Test", b"", false, PreHashAlg::Pure)
            .unwrap();
        assert_eq!(sig_a, sig_b);
    }

    #[test]
    fn additional_randomness_changes_r_but_both_verify() {
        let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let (sk, pk) = engine.generate_key_pair(&mut rng);

        let sig_a = engine
            .generate_signature(&mut rng, &sk, b"Test", b"", true, PreHashAlg::Pure)
            .unwrap();
        let sig_b = engine
            .generate_signature(&mut rng, &sk, b"Test", b"", true, PreHashAlg::Pure)
            .unwrap();
        assert_ne!(sig_a[..engine.params.n], sig_b[..engine.params.n]);
        assert!(engine.verify_signature(&pk, b"Test", &sig_a, b"", PreHashAlg::Pure).unwrap());
        assert!(engine.verify_signature(&pk, b"Test", &sig_b, b"", PreHashAlg::Pure).unwrap());
    }

    #[test]
    fn tampering_the_message_fails_verification() {
        let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let (sk, pk) = engine.generate_key_pair(&mut rng);

        let sig = engine
            .generate_signature(&mut rng, &sk, b"Test", b"", false, PreHashAlg::Pure)
            .unwrap();
        assert!(!engine.verify_signature(&pk, b"Tест", &sig, b"", PreHashAlg::Pure).unwrap());
    }

    #[test]
    fn context_mismatch_fails_verification() {
        let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let (sk, pk) = engine.generate_key_pair(&mut rng);

        let sig = engine
            .generate_signature(&mut rng, &sk, b"Test", b"lalalala", false, PreHashAlg::Pure)
            .unwrap();
        assert!(engine
            .verify_signature(&pk, b"Test", &sig, b"lalalala", PreHashAlg::Pure)
            .unwrap());
        assert!(!engine
            .verify_signature(&pk, b"Test", &sig, b"different", PreHashAlg::Pure)
            .unwrap());
    }

    #[test]
    fn short_signature_is_a_length_error() {
        let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        let (sk, pk) = engine.generate_key_pair(&mut rng);
        let sig = engine
            .generate_signature(&mut rng, &sk, b"Test", b"", false, PreHashAlg::Pure)
            .unwrap();
        let short = &sig[..sig.len() - 1];
        assert_eq!(
            engine.verify_signature(&pk, b"Test", short, b"", PreHashAlg::Pure),
            Err(Error::InvalidSignatureLength {
                expected: sig.len(),
                got: sig.len() - 1,
            })
        );
    }

    #[test]
    fn prehash_sha2_512_256_envelope_round_trips() {
        let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let (sk, pk) = engine.generate_key_pair(&mut rng);

        let sig = engine
            .generate_signature(&mut rng, &sk, b"Test", b"lalalala", false, PreHashAlg::Sha2_512_256)
            .unwrap();
        assert!(engine
            .verify_signature(&pk, b"Test", &sig, b"lalalala", PreHashAlg::Sha2_512_256)
            .unwrap());
    }

    #[test]
    fn context_over_255_bytes_is_rejected_at_sign_time() {
        let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let (sk, _pk) = engine.generate_key_pair(&mut rng);
        let ctx = vec![0u8; 256];
        assert_eq!(
            engine.generate_signature(&mut rng, &sk, b"Test", &ctx, false, PreHashAlg::Pure),
            Err(Error::ContextTooLong(256))
        );
    }
}
