pub(crate) mod fingerprint;
pub(crate) mod layout;
pub(crate) mod theme;
pub(crate) mod tree;
