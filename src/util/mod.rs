pub(crate) mod fmt;
