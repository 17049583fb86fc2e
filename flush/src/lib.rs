//! Durability helpers that talk to the kernel directly.
//!
//! Preloading `libnosync.so` turns libc's `sync()` into a no-op, which leaves
//! the caller in charge of flushing whatever it actually needs on disk. The
//! functions here issue the Linux system calls through the `syscalls` crate
//! instead of libc, so no symbol interposition (ours or anyone else's) can
//! change what they do.
//!
//! - [`fsync`]: flushes one file, data and metadata.
//! - [`fdatasync`]: flushes one file's data, and only the metadata needed to
//!   read it back.
//! - [`syncfs`]: flushes the whole filesystem that contains a file.
//! - [`sync_all`]: flushes every mounted filesystem, i.e. the real `sync(2)`.
//!
//! Interrupted calls are restarted. Any other failure is returned as the
//! kernel's [`Errno`].
//!
//! This crate does not define `sync` itself, so linking it leaves libc's
//! `sync()` in place.

#![cfg(target_os = "linux")]

use std::os::fd::{AsFd, AsRawFd};

use syscalls::{syscall, Errno, Sysno};

mod retry;

use crate::retry::retry_on_eintr;

/// Flushes the data and metadata of the file behind `fd` to its backing
/// device, blocking until the device reports the transfer complete.
///
/// # Errors
///
/// `EBADF` for a closed descriptor, `EINVAL` for one that does not support
/// synchronization (a pipe or socket), `EIO` if write-back failed.
pub fn fsync<Fd: AsFd>(fd: Fd) -> Result<(), Errno> {
    let fd = fd.as_fd().as_raw_fd();
    retry_on_eintr(|| unsafe { syscall!(Sysno::fsync, fd) }).map(drop)
}

/// Like [`fsync`], but skips metadata that is not needed to read the data
/// back (e.g. timestamps).
pub fn fdatasync<Fd: AsFd>(fd: Fd) -> Result<(), Errno> {
    let fd = fd.as_fd().as_raw_fd();
    retry_on_eintr(|| unsafe { syscall!(Sysno::fdatasync, fd) }).map(drop)
}

/// Flushes the filesystem that contains the file behind `fd`.
///
/// Unlike [`sync_all`] this only touches one mount, so a hanging network
/// or 9p mount elsewhere does not stall it.
pub fn syncfs<Fd: AsFd>(fd: Fd) -> Result<(), Errno> {
    let fd = fd.as_fd().as_raw_fd();
    retry_on_eintr(|| unsafe { syscall!(Sysno::syncfs, fd) }).map(drop)
}

/// Flushes every mounted filesystem.
///
/// This is the system call that the preloaded `sync()` suppresses, made
/// directly so it still works inside a preloaded process. It may block for
/// as long as the slowest mount takes.
pub fn sync_all() {
    // sync(2) has no failure modes.
    unsafe { syscall!(Sysno::sync) }.ok();
}
