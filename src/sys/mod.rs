mod trace;

pub(crate) use trace::trace;
#[cfg(any(feature = "trace", test))]
pub(crate) use trace::write_all;
