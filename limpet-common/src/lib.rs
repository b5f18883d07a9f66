// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_std]

use libc::c_long;

pub mod syscalls;

/// One intercepted syscall, as captured at the hook point: the raw
/// argument words, the offset of the patched instruction inside the
/// traced object, and the result if it is already known.
#[derive(Clone, Copy, Debug)]
pub struct SyscallEvent {
    pub syscall_nr: i64,
    pub args: [u64; 6],
    pub offset: u64,
    pub result: ReturnState,
}

/// A syscall may be logged before it has executed, e.g. so a `read` line
/// does not echo whatever happened to be in the destination buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnState {
    Known(i64),
    Pending,
}

/// Print format of a single argument word.
///
/// Every kind consumes exactly one argument; `Buf` additionally reads the
/// *following* argument word as the buffer length (the length still gets
/// its own entry in the list, usually `Dec`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    /// Signed decimal.
    Dec,
    /// Octal with a leading zero, for mode_t arguments.
    OctMode,
    /// `0x` + lowercase hex.
    Hex,
    /// NUL-terminated string, quoted and escaped.
    CStr,
    /// Byte buffer, quoted and escaped, length taken from the next word.
    Buf,
    /// open(2) flag mask, symbolic.
    OpenFlags,
    /// fcntl(2) command, symbolic.
    FcntlCmd,
    /// clone(2) flag mask, symbolic.
    CloneFlags,
    /// File descriptor, signed decimal.
    Fd,
    /// Directory descriptor; AT_FDCWD renders symbolically.
    AtFd,
    /// `0x` + 16 hex digits, or `(null)`.
    Ptr,
}

/// Per-syscall deviation from plain left-to-right directive rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quirk {
    /// The trailing mode argument is only real when O_CREAT is present in
    /// the flags word immediately before it.
    ModeIfCreat,
    /// The buffer is written by the kernel, so its printable length is the
    /// known result (0 while the result is still pending).
    BufFromResult,
}

/// Catalog entry: how to render one syscall.
#[derive(Debug)]
pub struct SyscallDesc {
    pub nr: i64,
    pub name: &'static str,
    pub args: &'static [ArgKind],
    pub quirk: Option<Quirk>,
}

impl SyscallDesc {
    pub const fn new(nr: c_long, name: &'static str, args: &'static [ArgKind]) -> Self {
        Self {
            nr: nr as i64,
            name,
            args,
            quirk: None,
        }
    }

    pub const fn with_quirk(
        nr: c_long,
        name: &'static str,
        args: &'static [ArgKind],
        quirk: Quirk,
    ) -> Self {
        Self {
            nr: nr as i64,
            name,
            args,
            quirk: Some(quirk),
        }
    }
}
