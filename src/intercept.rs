use crate::sys;

/// The line the `trace` feature prints for each suppressed call.
pub(crate) const SUPPRESSED: &[u8] = b"nosync: suppressed sync()\n";

/// Replacement for libc's `void sync(void)`.
///
/// Flushes nothing and returns immediately. When this library is preloaded,
/// the dynamic linker binds every `sync` reference in the process here
/// instead of to libc. `fsync` and `syncfs` are not defined in this crate and
/// keep their libc bindings.
#[unsafe(no_mangle)]
pub extern "C" fn sync() {
    sys::trace(SUPPRESSED);
}
