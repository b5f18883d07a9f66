// SPDX-License-Identifier: MIT OR Apache-2.0

//! Symbolic rendering of flag masks and command codes.

use crate::formatting::FixedWriter;

// These fcntl command codes are part of the stable Linux ABI but are not
// exported by the `libc` crate for the x86_64-gnu target, so define them here.
const F_SETSIG: libc::c_int = 10;
const F_GETSIG: libc::c_int = 11;
const F_SETOWN_EX: libc::c_int = 15;
const F_GETOWN_EX: libc::c_int = 16;

/// One renderable bit pattern. Tables are scanned in declaration order, so
/// compound patterns (O_RDWR, O_SYNC, O_TMPFILE) must precede the patterns
/// their bits overlap with.
pub struct FlagSpec {
    pub bits: u64,
    pub name: &'static str,
}

const fn flag(bits: libc::c_int, name: &'static str) -> FlagSpec {
    FlagSpec {
        bits: bits as u64,
        name,
    }
}

pub static OPEN_FLAGS: &[FlagSpec] = &[
    flag(libc::O_APPEND, "O_APPEND"),
    flag(libc::O_ASYNC, "O_ASYNC"),
    flag(libc::O_CLOEXEC, "O_CLOEXEC"),
    flag(libc::O_CREAT, "O_CREAT"),
    flag(libc::O_DIRECT, "O_DIRECT"),
    flag(libc::O_TMPFILE, "O_TMPFILE"),
    flag(libc::O_DIRECTORY, "O_DIRECTORY"),
    flag(libc::O_SYNC, "O_SYNC"),
    flag(libc::O_DSYNC, "O_DSYNC"),
    flag(libc::O_EXCL, "O_EXCL"),
    flag(libc::O_NOATIME, "O_NOATIME"),
    flag(libc::O_NOCTTY, "O_NOCTTY"),
    flag(libc::O_NOFOLLOW, "O_NOFOLLOW"),
    flag(libc::O_NONBLOCK, "O_NONBLOCK"),
    flag(libc::O_PATH, "O_PATH"),
    flag(libc::O_TRUNC, "O_TRUNC"),
];

pub static CLONE_FLAGS: &[FlagSpec] = &[
    flag(libc::CLONE_CHILD_CLEARTID, "CLONE_CHILD_CLEARTID"),
    flag(libc::CLONE_CHILD_SETTID, "CLONE_CHILD_SETTID"),
    flag(libc::CLONE_FILES, "CLONE_FILES"),
    flag(libc::CLONE_FS, "CLONE_FS"),
    flag(libc::CLONE_IO, "CLONE_IO"),
    flag(libc::CLONE_NEWCGROUP, "CLONE_NEWCGROUP"),
    flag(libc::CLONE_NEWIPC, "CLONE_NEWIPC"),
    flag(libc::CLONE_NEWNET, "CLONE_NEWNET"),
    flag(libc::CLONE_NEWNS, "CLONE_NEWNS"),
    flag(libc::CLONE_NEWPID, "CLONE_NEWPID"),
    flag(libc::CLONE_NEWUSER, "CLONE_NEWUSER"),
    flag(libc::CLONE_NEWUTS, "CLONE_NEWUTS"),
    flag(libc::CLONE_PARENT, "CLONE_PARENT"),
    flag(libc::CLONE_PARENT_SETTID, "CLONE_PARENT_SETTID"),
    flag(libc::CLONE_PIDFD, "CLONE_PIDFD"),
    flag(libc::CLONE_PTRACE, "CLONE_PTRACE"),
    flag(libc::CLONE_SETTLS, "CLONE_SETTLS"),
    flag(libc::CLONE_SIGHAND, "CLONE_SIGHAND"),
    flag(libc::CLONE_SYSVSEM, "CLONE_SYSVSEM"),
    flag(libc::CLONE_THREAD, "CLONE_THREAD"),
    flag(libc::CLONE_UNTRACED, "CLONE_UNTRACED"),
    flag(libc::CLONE_VFORK, "CLONE_VFORK"),
    flag(libc::CLONE_VM, "CLONE_VM"),
];

/// Render `flags` against `table`: names joined by `" | "` in declaration
/// order, leftover bits as one hex term, `0` when nothing matched at all.
pub fn push_flags(out: &mut FixedWriter, flags: u64, table: &[FlagSpec]) {
    push_flag_terms(out, flags, table, false);
}

fn push_flag_terms(out: &mut FixedWriter, mut flags: u64, table: &[FlagSpec], mut any: bool) {
    for spec in table {
        if spec.bits != 0 && flags & spec.bits == spec.bits {
            if any {
                out.push_str(" | ");
            }
            out.push_str(spec.name);
            flags &= !spec.bits;
            any = true;
        }
    }
    if flags != 0 {
        if any {
            out.push_str(" | ");
        }
        out.push_hex(flags);
        any = true;
    }
    if !any {
        out.push_byte(b'0');
    }
}

/// open(2) flags. The access mode lives in the low two bits and is not a
/// set of independent flags, so it is resolved first (O_RDWR as a union
/// before O_WRONLY) and the rest of the mask is handed to the table scan.
pub fn push_open_flags(out: &mut FixedWriter, flags: u64) {
    let accmode = flags & libc::O_ACCMODE as u64;
    if accmode & libc::O_RDWR as u64 == libc::O_RDWR as u64 {
        out.push_str("O_RDWR");
    } else if accmode & libc::O_WRONLY as u64 == libc::O_WRONLY as u64 {
        out.push_str("O_WRONLY");
    } else {
        out.push_str("O_RDONLY");
    }

    let rest = flags & !(libc::O_ACCMODE as u64);
    if rest != 0 {
        push_flag_terms(out, rest, OPEN_FLAGS, true);
    }
}

pub fn push_fcntl_cmd(out: &mut FixedWriter, cmd: i32) {
    let name = match cmd {
        libc::F_DUPFD => "F_DUPFD",
        libc::F_DUPFD_CLOEXEC => "F_DUPFD_CLOEXEC",
        libc::F_GETFD => "F_GETFD",
        libc::F_SETFD => "F_SETFD",
        libc::F_GETFL => "F_GETFL",
        libc::F_SETFL => "F_SETFL",
        libc::F_GETLK => "F_GETLK",
        libc::F_SETLK => "F_SETLK",
        libc::F_SETLKW => "F_SETLKW",
        libc::F_GETOWN => "F_GETOWN",
        libc::F_SETOWN => "F_SETOWN",
        F_GETOWN_EX => "F_GETOWN_EX",
        F_SETOWN_EX => "F_SETOWN_EX",
        F_GETSIG => "F_GETSIG",
        F_SETSIG => "F_SETSIG",
        libc::F_GETLEASE => "F_GETLEASE",
        libc::F_SETLEASE => "F_SETLEASE",
        libc::F_NOTIFY => "F_NOTIFY",
        libc::F_GETPIPE_SZ => "F_GETPIPE_SZ",
        libc::F_SETPIPE_SZ => "F_SETPIPE_SZ",
        libc::F_ADD_SEALS => "F_ADD_SEALS",
        libc::F_GET_SEALS => "F_GET_SEALS",
        libc::F_OFD_GETLK => "F_OFD_GETLK",
        libc::F_OFD_SETLK => "F_OFD_SETLK",
        libc::F_OFD_SETLKW => "F_OFD_SETLKW",
        _ => {
            out.push_signed(cmd as i64);
            return;
        }
    };
    out.push_str(name);
}

/// Directory descriptors: the AT_FDCWD sentinel reads a lot better by name.
pub fn push_dirfd(out: &mut FixedWriter, fd: i32) {
    if fd == libc::AT_FDCWD {
        out.push_str("AT_FDCWD");
    } else {
        out.push_signed(fd as i64);
    }
}
