/*!
An `LD_PRELOAD` shim that replaces the process-wide
[`sync(2)`](https://man7.org/linux/man-pages/man2/sync.2.html) with a no-op.

Some tools (`sgdisk` among them) call `sync()` after writing a partition
table. `sync()` walks every mounted filesystem, and on WSL2 that includes 9p
mounts such as `/mnt/c` which can hang indefinitely. Preloading this library
makes every `sync()` in the target process return immediately:

```text
LD_PRELOAD=/usr/lib/libnosync.so sgdisk ...
```

Only `sync()` is overridden. `fsync()`, `fdatasync()` and `syncfs()` keep
resolving to libc, so per-file and per-filesystem flushes still reach the
kernel. Durability after the override is the caller's job; the
`nosync-flush` crate offers helpers that make the system calls directly.

Do not link this crate into a Rust program: the exported `sync` would
replace libc's for the whole process without any preload.

# Crate features

* **trace** -
  Writes a line to stderr every time a `sync()` call is suppressed.
*/

#![cfg(target_os = "linux")]

mod intercept;
mod sys;
