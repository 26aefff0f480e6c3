//! The parameter-set registry: the twelve standardized SLH-DSA parameter
//! sets as a `'static` table, looked up by name at [`crate::Engine`]
//! construction rather than selected through a compile-time type parameter.

/// Which hash family a parameter set's six-operation façade is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HashFamily {
    Sha2,
    Shake,
}

/// An immutable FIPS 205 parameter-set record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSet {
    /// Exact name string, e.g. `"SLH-DSA-SHAKE-128s"`.
    pub name: &'static str,
    pub(crate) hash_family: HashFamily,
    pub(crate) n: usize,
    pub(crate) h: usize,
    pub(crate) d: usize,
    pub(crate) a: usize,
    pub(crate) k: usize,
    pub(crate) lg_w: usize,
    pub(crate) m: usize,
}

impl ParameterSet {
    /// Looks up a parameter set by its exact FIPS 205 name.
    pub fn find(name: &str) -> Option<&'static ParameterSet> {
        PARAMETER_SETS.iter().find(|p| p.name == name)
    }

    pub(crate) fn h_prime(&self) -> usize {
        self.h / self.d
    }

    pub(crate) fn wots(&self) -> WotsParams {
        WotsParams::new(self.n, self.lg_w)
    }

    /// Total serialized signature length `L` for this parameter set.
    pub(crate) fn signature_len(&self) -> usize {
        let wots_len = self.wots().len;
        self.n + self.k * (1 + self.a) * self.n + (self.h + self.d * wots_len) * self.n
    }
}

/// Lengths derived once from `n` and `lg_w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WotsParams {
    pub(crate) w: usize,
    pub(crate) len1: usize,
    pub(crate) len2: usize,
    pub(crate) len: usize,
}

impl WotsParams {
    fn new(n: usize, lg_w: usize) -> Self {
        let w = 1usize << lg_w;
        let len1 = 8 * n / lg_w;
        let len2 = (len1 * (w - 1)).ilog2() as usize / lg_w + 1;
        Self {
            w,
            len1,
            len2,
            len: len1 + len2,
        }
    }
}

macro_rules! param_set {
    ($name:literal, $family:expr, $n:literal, $h:literal, $d:literal, $a:literal, $k:literal, $m:literal) => {
        ParameterSet {
            name: $name,
            hash_family: $family,
            n: $n,
            h: $h,
            d: $d,
            a: $a,
            k: $k,
            lg_w: 4,
            m: $m,
        }
    };
}

const PARAMETER_SETS: [ParameterSet; 12] = [
    param_set!("SLH-DSA-SHA2-128s", HashFamily::Sha2, 16, 63, 7, 12, 14, 30),
    param_set!("SLH-DSA-SHA2-128f", HashFamily::Sha2, 16, 66, 22, 6, 33, 34),
    param_set!("SLH-DSA-SHA2-192s", HashFamily::Sha2, 24, 63, 7, 14, 17, 39),
    param_set!("SLH-DSA-SHA2-192f", HashFamily::Sha2, 24, 66, 22, 8, 33, 42),
    param_set!("SLH-DSA-SHA2-256s", HashFamily::Sha2, 32, 64, 8, 14, 22, 47),
    param_set!("SLH-DSA-SHA2-256f", HashFamily::Sha2, 32, 68, 17, 9, 35, 49),
    param_set!("SLH-DSA-SHAKE-128s", HashFamily::Shake, 16, 63, 7, 12, 14, 30),
    param_set!("SLH-DSA-SHAKE-128f", HashFamily::Shake, 16, 66, 22, 6, 33, 34),
    param_set!("SLH-DSA-SHAKE-192s", HashFamily::Shake, 24, 63, 7, 14, 17, 39),
    param_set!("SLH-DSA-SHAKE-192f", HashFamily::Shake, 24, 66, 22, 8, 33, 42),
    param_set!("SLH-DSA-SHAKE-256s", HashFamily::Shake, 32, 64, 8, 14, 22, 47),
    param_set!("SLH-DSA-SHAKE-256f", HashFamily::Shake, 32, 68, 17, 9, 35, 49),
];
