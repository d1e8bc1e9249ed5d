pub(crate) mod envelope;
pub(crate) mod kind;
