// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw syscall gateway.
//!
//! Everything here issues syscalls through the `syscalls` crate's inline
//! interface, never through std or the host libc: these functions run
//! inside the interception hook, where the host process may itself be
//! suspended mid-syscall and its runtime cannot be trusted. There is no
//! error propagation either — a failed syscall at this point has no caller
//! with a recovery path, so failures print a diagnostic and terminate.
//!
//! The interception engine also uses this layer directly, e.g. to allocate
//! its bookkeeping memory without touching the standard allocator.

use core::ffi::CStr;

use syscalls::{syscall, Errno, Sysno};

use crate::formatting::FixedWriter;

const STDERR: usize = 2;

/// Unrecoverable raw-syscall failure. Everything in this module resolves
/// one by calling [`FatalError::abort`]; embedders building on the
/// re-exported raw layer can construct their own and apply their own
/// reporting before giving up.
#[derive(Clone, Copy, Debug)]
pub struct FatalError {
    pub op: &'static str,
    pub errno: Errno,
}

impl FatalError {
    /// Render a one-line diagnostic to stderr by raw write and terminate
    /// the process. Deliberately avoids the abort machinery of the host
    /// runtime, which may be patched.
    pub fn abort(self) -> ! {
        let mut buf = [0u8; 128];
        let mut out = FixedWriter::new(&mut buf);
        out.push_str("limpet: ");
        out.push_str(self.op);
        out.push_str(": errno ");
        out.push_signed(self.errno.into_raw() as i64);
        out.push_byte(b'\n');
        unsafe {
            let _ = syscall!(Sysno::write, STDERR, out.as_bytes().as_ptr(), out.len());
            let _ = syscall!(Sysno::exit_group, 1);
        }
        // exit_group does not return.
        loop {}
    }
}

fn check(op: &'static str, result: Result<usize, Errno>) -> usize {
    match result {
        Ok(value) => value,
        Err(errno) => FatalError { op, errno }.abort(),
    }
}

/// Anonymous read-write private mapping.
pub fn mmap_anon(size: usize) -> *mut u8 {
    let prot = (libc::PROT_READ | libc::PROT_WRITE) as usize;
    let flags = (libc::MAP_PRIVATE | libc::MAP_ANONYMOUS) as usize;
    let addr = check("mmap", unsafe {
        syscall!(Sysno::mmap, 0usize, size, prot, flags, -1isize as usize, 0usize)
    });
    addr as *mut u8
}

#[cfg(target_os = "linux")]
pub fn mremap(addr: *mut u8, old_size: usize, new_size: usize) -> *mut u8 {
    let new_addr = check("mremap", unsafe {
        syscall!(
            Sysno::mremap,
            addr as usize,
            old_size,
            new_size,
            libc::MREMAP_MAYMOVE as usize
        )
    });
    new_addr as *mut u8
}

// Without a move-capable remap syscall: allocate, copy, release.
#[cfg(not(target_os = "linux"))]
pub fn mremap(addr: *mut u8, old_size: usize, new_size: usize) -> *mut u8 {
    let new_addr = mmap_anon(new_size);
    unsafe {
        core::ptr::copy_nonoverlapping(addr, new_addr, usize::min(old_size, new_size));
    }
    munmap(addr, old_size);
    new_addr
}

pub fn munmap(addr: *mut u8, len: usize) {
    check("munmap", unsafe {
        syscall!(Sysno::munmap, addr as usize, len)
    });
}

pub fn lseek(fd: i32, offset: i64, whence: i32) -> i64 {
    check("lseek", unsafe {
        syscall!(Sysno::lseek, fd as usize, offset as usize, whence as usize)
    }) as i64
}

/// Read exactly `buf.len()` bytes; a short read is as fatal as an error.
pub fn read_exact(fd: i32, buf: &mut [u8]) {
    let n = check("read", unsafe {
        syscall!(Sysno::read, fd as usize, buf.as_mut_ptr(), buf.len())
    });
    if n != buf.len() {
        FatalError {
            op: "read (short)",
            errno: Errno::EIO,
        }
        .abort();
    }
}

/// One raw write. An error is fatal; a short write is reported back to the
/// caller, not retried.
pub fn write(fd: i32, buf: &[u8]) -> usize {
    check("write", unsafe {
        syscall!(Sysno::write, fd as usize, buf.as_ptr(), buf.len())
    })
}

pub fn open(path: &CStr, flags: i32, mode: u32) -> i32 {
    check("open", unsafe {
        syscall!(
            Sysno::openat,
            libc::AT_FDCWD as isize as usize,
            path.as_ptr(),
            flags as usize,
            mode as usize
        )
    }) as i32
}

pub fn close(fd: i32) {
    check("close", unsafe { syscall!(Sysno::close, fd as usize) });
}

pub fn getpid() -> u32 {
    check("getpid", unsafe { syscall!(Sysno::getpid) }) as u32
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn anon_mapping_is_usable() {
        let size = 4096;
        let addr = mmap_anon(size);
        assert!(!addr.is_null());
        unsafe {
            addr.write_bytes(0xab, size);
            assert_eq!(*addr.add(size - 1), 0xab);
        }
        let grown = mremap(addr, size, size * 4);
        unsafe {
            assert_eq!(*grown, 0xab);
            grown.add(size * 4 - 1).write(0xcd);
        }
        munmap(grown, size * 4);
    }

    #[test]
    fn file_round_trip() {
        let path = std::ffi::CString::new(format!(
            "{}/limpet-raw-{}",
            std::env::temp_dir().display(),
            getpid()
        ))
        .unwrap();

        let fd = open(
            &path,
            libc::O_CREAT | libc::O_RDWR | libc::O_TRUNC,
            0o600,
        );
        assert!(fd >= 0);

        let payload = b"one raw line\n";
        assert_eq!(write(fd, payload), payload.len());

        assert_eq!(lseek(fd, 0, libc::SEEK_SET), 0);
        let mut readback = [0u8; 13];
        read_exact(fd, &mut readback);
        assert_eq!(&readback, payload);

        assert_eq!(lseek(fd, 0, libc::SEEK_END), payload.len() as i64);

        close(fd);
        std::fs::remove_file(path.to_str().unwrap()).unwrap();
    }

    #[test]
    fn pid_matches_std() {
        assert_eq!(getpid(), std::process::id());
    }
}
