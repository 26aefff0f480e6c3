//! The 32-byte structured address (`ADRS`) that domain-separates every hash
//! invocation in the engine. Unlike the upstream crate's per-role typed
//! structs, this is a single runtime-mutated buffer — the parameter set is
//! no longer known at compile time, so there is nothing for a typed view to
//! be generic over.

/// Type tags occupying bytes `[16..20)` of an [`Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub(crate) enum AddressType {
    WotsHash = 0,
    WotsPk = 1,
    Tree = 2,
    ForsTree = 3,
    ForsRoots = 4,
    WotsPrf = 5,
    ForsPrf = 6,
}

/// A 32-byte domain-separation address, mutated in place by the setters
/// below and always cloned before a callee mutates it further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Address([u8; 32]);

impl Address {
    pub(crate) fn new() -> Self {
        Self([0u8; 32])
    }

    pub(crate) fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub(crate) fn set_layer(&mut self, layer: u32) {
        self.0[0..4].copy_from_slice(&layer.to_be_bytes());
    }

    /// Sets the 12-byte tree address field from a 64-bit tree index.
    pub(crate) fn set_tree(&mut self, tree: u64) {
        self.0[4..8].copy_from_slice(&[0u8; 4]);
        self.0[8..16].copy_from_slice(&tree.to_be_bytes());
    }

    /// Sets the type tag and zeros the type-specific fields, per FIPS 205.
    pub(crate) fn set_type_and_clear(&mut self, ty: AddressType) {
        self.0[16..20].copy_from_slice(&(ty as u32).to_be_bytes());
        self.0[20..32].copy_from_slice(&[0u8; 12]);
    }

    pub(crate) fn set_key_pair(&mut self, i: u32) {
        self.0[20..24].copy_from_slice(&i.to_be_bytes());
    }

    pub(crate) fn set_chain(&mut self, i: u32) {
        self.0[24..28].copy_from_slice(&i.to_be_bytes());
    }

    pub(crate) fn set_tree_height(&mut self, i: u32) {
        self.set_chain(i);
    }

    pub(crate) fn set_hash(&mut self, i: u32) {
        self.0[28..32].copy_from_slice(&i.to_be_bytes());
    }

    pub(crate) fn set_tree_index(&mut self, i: u32) {
        self.set_hash(i);
    }

    pub(crate) fn get_key_pair(&self) -> u32 {
        u32::from_be_bytes(self.0[20..24].try_into().unwrap())
    }

    pub(crate) fn get_tree_index(&self) -> u32 {
        u32::from_be_bytes(self.0[28..32].try_into().unwrap())
    }

    /// The 22-byte SHA-2 compressed form: `byte[3] ∥ bytes[8..16) ∥ byte[19] ∥ bytes[20..32)`.
    pub(crate) fn compressed(&self) -> [u8; 22] {
        let mut out = [0u8; 22];
        out[0] = self.0[3];
        out[1..9].copy_from_slice(&self.0[8..16]);
        out[9] = self.0[19];
        out[10..22].copy_from_slice(&self.0[20..32]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_type_and_clear_zeroes_tail() {
        let mut adrs = Address::new();
        adrs.set_key_pair(7);
        adrs.set_type_and_clear(AddressType::WotsPk);
        assert_eq!(adrs.as_bytes()[16..20], 1u32.to_be_bytes());
        assert_eq!(adrs.as_bytes()[20..32], [0u8; 12]);
    }

    #[test]
    fn compressed_form_picks_the_right_bytes() {
        let mut adrs = Address::new();
        adrs.set_layer(0x0102_0304);
        adrs.set_tree(0x0506_0708_090a_0b0c);
        adrs.set_type_and_clear(AddressType::Tree);
        adrs.set_tree_height(9);
        adrs.set_tree_index(11);
        let c = adrs.compressed();
        assert_eq!(c.len(), 22);
        assert_eq!(c[0], adrs.as_bytes()[3]);
        assert_eq!(&c[1..9], &adrs.as_bytes()[8..16]);
        assert_eq!(c[9], adrs.as_bytes()[19]);
        assert_eq!(&c[10..22], &adrs.as_bytes()[20..32]);
    }

    #[test]
    fn chain_and_tree_index_aliases_agree() {
        let mut a = Address::new();
        a.set_chain(3);
        let mut b = Address::new();
        b.set_tree_height(3);
        assert_eq!(a, b);

        let mut c = Address::new();
        c.set_hash(5);
        assert_eq!(c.get_tree_index(), 5);
        c.set_tree_index(9);
        assert_eq!(c.get_tree_index(), 9);
    }

    #[test]
    fn clone_does_not_alias() {
        let mut a = Address::new();
        a.set_key_pair(1);
        let mut b = a;
        b.set_key_pair(2);
        assert_eq!(a.get_key_pair(), 1);
        assert_eq!(b.get_key_pair(), 2);
    }
}
