// SPDX-License-Identifier: MIT OR Apache-2.0

//! One intercepted syscall in, one log line out.

use limpet_common::{
    syscalls::syscall_desc_from_nr, ArgKind, Quirk, ReturnState, SyscallDesc, SyscallEvent,
};

use crate::{
    format_helpers::{push_dirfd, push_fcntl_cmd, push_flags, push_open_flags, CLONE_FLAGS},
    formatting::{ByteBound, FixedWriter, LINE_CAPACITY},
    sink::LogSink,
};

/// Render the full log line for `event`:
///
/// ```text
/// <label> 0x<offset> -- <name>(<args>) = <result-or-?>\n
/// ```
///
/// `label` identifies the patched object the syscall was intercepted in;
/// `offset` is the instruction offset inside it. Rendering never fails:
/// unknown numbers, null pointers and over-long buffers all degrade to
/// safe text.
pub fn write_syscall_line(out: &mut FixedWriter, label: &str, event: &SyscallEvent) {
    out.push_str(label);
    out.push_byte(b' ');
    out.push_hex(event.offset);
    out.push_str(" -- ");

    let nr = event.syscall_nr;
    if nr == libc::SYS_exit as i64 || nr == libc::SYS_exit_group as i64 {
        // Logged on the way in; the low word of arg0 is the exit code.
        let name = if nr == libc::SYS_exit as i64 {
            "exit"
        } else {
            "exit_group"
        };
        out.push_str(name);
        out.push_byte(b'(');
        out.push_signed(event.args[0] as i32 as i64);
    } else if nr == libc::SYS_fork as i64 || nr == libc::SYS_vfork as i64 {
        let name = if nr == libc::SYS_fork as i64 {
            "fork"
        } else {
            "vfork"
        };
        out.push_str(name);
        out.push_byte(b'(');
    } else if let Some(desc) = syscall_desc_from_nr(nr) {
        out.push_str(desc.name);
        out.push_byte(b'(');
        write_catalog_args(out, desc, event);
    } else {
        write_fallback(out, event);
    }

    out.push_str(") = ");
    match event.result {
        ReturnState::Known(value) => out.push_signed(value),
        ReturnState::Pending => out.push_byte(b'?'),
    }
    out.push_byte(b'\n');
}

fn write_catalog_args(out: &mut FixedWriter, desc: &SyscallDesc, event: &SyscallEvent) {
    let mut args = desc.args;

    // Dynamic arity: the trailing mode argument of open/openat only exists
    // when O_CREAT is in the flags word right before it.
    if desc.quirk == Some(Quirk::ModeIfCreat) && args.len() >= 2 {
        let flags = event.args[args.len() - 2];
        if flags & libc::O_CREAT as u64 == 0 {
            args = &args[..args.len() - 1];
        }
    }

    for (i, kind) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let arg = event.args[i];
        match kind {
            ArgKind::Dec => out.push_signed(arg as i64),
            ArgKind::OctMode => {
                out.push_byte(b'0');
                if arg != 0 {
                    out.push_unsigned(arg, 8, 1);
                }
            }
            ArgKind::Hex => out.push_hex(arg),
            ArgKind::CStr => {
                let budget = out.remaining();
                unsafe {
                    out.push_escaped(arg as *const u8, budget, ByteBound::NulTerminated);
                }
            }
            ArgKind::Buf => {
                let len = buf_len(desc, event, i);
                let budget = out.remaining();
                unsafe {
                    out.push_escaped(arg as *const u8, budget, ByteBound::Sized(len));
                }
            }
            ArgKind::OpenFlags => push_open_flags(out, arg),
            ArgKind::FcntlCmd => push_fcntl_cmd(out, arg as i32),
            ArgKind::CloneFlags => push_flags(out, arg, CLONE_FLAGS),
            ArgKind::Fd => out.push_signed(arg as i32 as i64),
            ArgKind::AtFd => push_dirfd(out, arg as i32),
            ArgKind::Ptr => out.push_ptr(arg),
        }
    }
}

/// How many bytes of a `Buf` argument may be echoed. For kernel-written
/// buffers that is the known result; until the result exists there is
/// nothing trustworthy in the buffer, so nothing is shown.
fn buf_len(desc: &SyscallDesc, event: &SyscallEvent, i: usize) -> usize {
    match desc.quirk {
        Some(Quirk::BufFromResult) => match event.result {
            ReturnState::Known(value) if value >= 0 => value as usize,
            _ => 0,
        },
        // The directive after every plain Buf is its length word.
        _ => event.args[i + 1] as usize,
    }
}

fn write_fallback(out: &mut FixedWriter, event: &SyscallEvent) {
    out.push_str("syscall(");
    out.push_signed(event.syscall_nr);
    for arg in event.args {
        out.push_str(", ");
        out.push_hex(arg);
    }
}

/// Format `event` and append it to `sink`. The line lives entirely on the
/// stack; a disabled sink costs one branch.
pub fn log_syscall(sink: &mut LogSink, label: &str, event: &SyscallEvent) {
    if !sink.is_active() {
        return;
    }
    let mut buf = [0u8; LINE_CAPACITY];
    let mut out = FixedWriter::new(&mut buf);
    write_syscall_line(&mut out, label, event);
    sink.emit(out.as_bytes());
}
