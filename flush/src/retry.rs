use syscalls::Errno;

/// Runs a raw system call until it finishes without being interrupted.
///
/// Every error other than `EINTR` is returned to the caller as is.
pub fn retry_on_eintr<F>(mut call: F) -> Result<usize, Errno>
where
    F: FnMut() -> Result<usize, Errno>,
{
    loop {
        match call() {
            Err(Errno::EINTR) => continue,
            r => return r,
        }
    }
}
