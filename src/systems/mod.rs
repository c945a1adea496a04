pub(crate) mod lookup;
