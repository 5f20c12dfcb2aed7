pub(crate) mod kind;
pub(crate) mod registry;
pub(crate) mod snapshot;
