pub(crate) mod aggregate;
pub(crate) mod builder;
pub(crate) mod opts;
