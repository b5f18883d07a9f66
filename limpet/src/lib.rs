// SPDX-License-Identifier: MIT OR Apache-2.0

//! Human-readable syscall tracing for an in-process interception engine.
//!
//! The interception hook hands over a syscall number, six raw argument
//! words, the offset of the patched instruction and (maybe) a result; this
//! crate renders one line of text and appends it to the process-wide log
//! sink. Everything on that path stays off the heap and off the host
//! libc — the hook may be running in the middle of someone else's syscall,
//! with the host runtime in no state to be reentered.

pub mod config;
pub mod events;
pub mod format_helpers;
pub mod formatting;
pub mod raw;
pub mod sink;

#[cfg(test)]
mod tests;

pub use events::{log_syscall, write_syscall_line};
pub use limpet_common::{ArgKind, Quirk, ReturnState, SyscallDesc, SyscallEvent};
pub use sink::LogSink;

// The interception engine allocates its bookkeeping through the same raw
// layer: the standard allocator is off-limits mid-hook.
pub use raw::{
    close, getpid, lseek, mmap_anon, mremap, munmap, open, read_exact, write, FatalError,
};
