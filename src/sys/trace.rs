/// Writes `msg` to stderr. Compiled out without the `trace` feature.
#[cfg(feature = "trace")]
pub fn trace(msg: &[u8]) {
    const STDERR: i32 = 2;

    write_all(STDERR, msg);
}

#[cfg(not(feature = "trace"))]
#[inline(always)]
pub fn trace(_msg: &[u8]) {}

/// Writes `msg` to `fd` with raw `write(2)` calls.
///
/// This runs inside whatever process preloaded us, possibly between `fork`
/// and `exec` or with the stdio locks held, so it must not allocate or lock.
/// Short writes are continued and any other failure drops the rest of the
/// message. Returns the number of bytes written.
#[cfg(any(feature = "trace", test))]
pub fn write_all(fd: i32, msg: &[u8]) -> usize {
    use syscalls::{syscall, Errno, Sysno};

    let mut rest = msg;
    while !rest.is_empty() {
        match unsafe { syscall!(Sysno::write, fd, rest.as_ptr(), rest.len()) } {
            Ok(0) => break,
            Ok(n) => rest = &rest[n.min(rest.len())..],
            Err(Errno::EINTR) => continue,
            Err(_) => break,
        }
    }
    msg.len() - rest.len()
}
