// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    ArgKind::{self, *},
    Quirk, SyscallDesc,
};

const fn plain(nr: libc::c_long, name: &'static str, args: &'static [ArgKind]) -> SyscallDesc {
    SyscallDesc::new(nr, name, args)
}

const fn quirky(
    nr: libc::c_long,
    name: &'static str,
    args: &'static [ArgKind],
    quirk: Quirk,
) -> SyscallDesc {
    SyscallDesc::with_quirk(nr, name, args, quirk)
}

/// Every syscall the line formatter knows how to render. exit, exit_group,
/// fork and vfork are deliberately absent: the dispatcher renders those
/// without consulting the catalog. Anything else not listed here falls back
/// to the generic `syscall(nr, ...)` form.
pub const SYSCALLS: &[SyscallDesc] = &[
    // basic I/O
    quirky(libc::SYS_read, "read", &[Fd, Buf, Dec], Quirk::BufFromResult),
    plain(libc::SYS_write, "write", &[Fd, Buf, Dec]),
    quirky(
        libc::SYS_open,
        "open",
        &[CStr, OpenFlags, OctMode],
        Quirk::ModeIfCreat,
    ),
    plain(libc::SYS_close, "close", &[Fd]),
    plain(libc::SYS_lseek, "lseek", &[Fd, Dec, Dec]),
    quirky(
        libc::SYS_pread64,
        "pread64",
        &[Fd, Buf, Dec, Dec],
        Quirk::BufFromResult,
    ),
    plain(libc::SYS_pwrite64, "pwrite64", &[Fd, Buf, Dec, Dec]),
    plain(libc::SYS_readv, "readv", &[Fd, Ptr, Dec]),
    plain(libc::SYS_writev, "writev", &[Fd, Ptr, Dec]),
    plain(libc::SYS_preadv, "preadv", &[Fd, Ptr, Dec, Dec]),
    plain(libc::SYS_pwritev, "pwritev", &[Fd, Ptr, Dec, Dec]),
    plain(libc::SYS_preadv2, "preadv2", &[Fd, Ptr, Dec, Dec, Hex]),
    plain(libc::SYS_pwritev2, "pwritev2", &[Fd, Ptr, Dec, Dec, Hex]),
    plain(libc::SYS_dup, "dup", &[Fd]),
    plain(libc::SYS_dup2, "dup2", &[Fd, Fd]),
    plain(libc::SYS_dup3, "dup3", &[Fd, Fd, Hex]),
    plain(libc::SYS_pipe, "pipe", &[Ptr]),
    plain(libc::SYS_pipe2, "pipe2", &[Ptr, Hex]),
    plain(libc::SYS_fcntl, "fcntl", &[Fd, FcntlCmd, Hex]),
    plain(libc::SYS_ioctl, "ioctl", &[Fd, Hex, Hex]),
    plain(libc::SYS_flock, "flock", &[Fd, Dec]),
    plain(libc::SYS_fsync, "fsync", &[Fd]),
    plain(libc::SYS_fdatasync, "fdatasync", &[Fd]),
    plain(libc::SYS_syncfs, "syncfs", &[Fd]),
    plain(libc::SYS_sync, "sync", &[]),
    plain(libc::SYS_sendfile, "sendfile", &[Fd, Fd, Ptr, Dec]),
    plain(libc::SYS_splice, "splice", &[Fd, Ptr, Fd, Ptr, Dec, Hex]),
    plain(libc::SYS_tee, "tee", &[Fd, Fd, Dec, Hex]),
    plain(libc::SYS_vmsplice, "vmsplice", &[Fd, Ptr, Dec, Hex]),
    plain(
        libc::SYS_sync_file_range,
        "sync_file_range",
        &[Fd, Dec, Dec, Hex],
    ),
    plain(libc::SYS_readahead, "readahead", &[Fd, Dec, Dec]),
    plain(libc::SYS_fadvise64, "fadvise64", &[Fd, Dec, Dec, Dec]),
    plain(libc::SYS_fallocate, "fallocate", &[Fd, Hex, Dec, Dec]),
    plain(libc::SYS_truncate, "truncate", &[CStr, Dec]),
    plain(libc::SYS_ftruncate, "ftruncate", &[Fd, Dec]),
    // filesystem
    plain(libc::SYS_stat, "stat", &[CStr, Ptr]),
    plain(libc::SYS_fstat, "fstat", &[Fd, Ptr]),
    plain(libc::SYS_lstat, "lstat", &[CStr, Ptr]),
    plain(libc::SYS_newfstatat, "newfstatat", &[AtFd, CStr, Ptr, Hex]),
    plain(libc::SYS_statx, "statx", &[AtFd, CStr, Hex, Hex, Ptr]),
    plain(libc::SYS_access, "access", &[CStr, OctMode]),
    plain(libc::SYS_faccessat, "faccessat", &[AtFd, CStr, OctMode, Hex]),
    quirky(
        libc::SYS_openat,
        "openat",
        &[AtFd, CStr, OpenFlags, OctMode],
        Quirk::ModeIfCreat,
    ),
    plain(libc::SYS_creat, "creat", &[CStr, OctMode]),
    plain(libc::SYS_mkdir, "mkdir", &[CStr, OctMode]),
    plain(libc::SYS_mkdirat, "mkdirat", &[AtFd, CStr, OctMode]),
    plain(libc::SYS_rmdir, "rmdir", &[CStr]),
    plain(libc::SYS_rename, "rename", &[CStr, CStr]),
    plain(libc::SYS_renameat, "renameat", &[AtFd, CStr, AtFd, CStr]),
    plain(
        libc::SYS_renameat2,
        "renameat2",
        &[AtFd, CStr, AtFd, CStr, Hex],
    ),
    plain(libc::SYS_link, "link", &[CStr, CStr]),
    plain(libc::SYS_linkat, "linkat", &[AtFd, CStr, AtFd, CStr, Hex]),
    plain(libc::SYS_unlink, "unlink", &[CStr]),
    plain(libc::SYS_unlinkat, "unlinkat", &[AtFd, CStr, Hex]),
    plain(libc::SYS_symlink, "symlink", &[CStr, CStr]),
    plain(libc::SYS_symlinkat, "symlinkat", &[CStr, AtFd, CStr]),
    quirky(
        libc::SYS_readlink,
        "readlink",
        &[CStr, Buf, Dec],
        Quirk::BufFromResult,
    ),
    quirky(
        libc::SYS_readlinkat,
        "readlinkat",
        &[AtFd, CStr, Buf, Dec],
        Quirk::BufFromResult,
    ),
    plain(libc::SYS_chmod, "chmod", &[CStr, OctMode]),
    plain(libc::SYS_fchmod, "fchmod", &[Fd, OctMode]),
    plain(libc::SYS_fchmodat, "fchmodat", &[AtFd, CStr, OctMode]),
    plain(libc::SYS_chown, "chown", &[CStr, Dec, Dec]),
    plain(libc::SYS_fchown, "fchown", &[Fd, Dec, Dec]),
    plain(libc::SYS_lchown, "lchown", &[CStr, Dec, Dec]),
    plain(libc::SYS_fchownat, "fchownat", &[AtFd, CStr, Dec, Dec, Hex]),
    plain(libc::SYS_umask, "umask", &[OctMode]),
    plain(libc::SYS_mknod, "mknod", &[CStr, OctMode, Hex]),
    plain(libc::SYS_mknodat, "mknodat", &[AtFd, CStr, OctMode, Hex]),
    plain(libc::SYS_getdents, "getdents", &[Fd, Ptr, Dec]),
    plain(libc::SYS_getdents64, "getdents64", &[Fd, Ptr, Dec]),
    plain(libc::SYS_getcwd, "getcwd", &[Ptr, Dec]),
    plain(libc::SYS_chdir, "chdir", &[CStr]),
    plain(libc::SYS_fchdir, "fchdir", &[Fd]),
    plain(libc::SYS_chroot, "chroot", &[CStr]),
    plain(libc::SYS_pivot_root, "pivot_root", &[CStr, CStr]),
    plain(libc::SYS_statfs, "statfs", &[CStr, Ptr]),
    plain(libc::SYS_fstatfs, "fstatfs", &[Fd, Ptr]),
    plain(libc::SYS_utime, "utime", &[CStr, Ptr]),
    plain(libc::SYS_utimes, "utimes", &[CStr, Ptr]),
    plain(libc::SYS_futimesat, "futimesat", &[AtFd, CStr, Ptr]),
    plain(libc::SYS_utimensat, "utimensat", &[AtFd, CStr, Ptr, Hex]),
    plain(libc::SYS_mount, "mount", &[CStr, CStr, CStr, Hex, Ptr]),
    plain(libc::SYS_umount2, "umount2", &[CStr, Hex]),
    plain(libc::SYS_acct, "acct", &[CStr]),
    plain(libc::SYS_memfd_create, "memfd_create", &[CStr, Hex]),
    // memory
    plain(libc::SYS_mmap, "mmap", &[Ptr, Dec, Hex, Hex, Fd, Hex]),
    plain(libc::SYS_mremap, "mremap", &[Ptr, Dec, Dec, Hex]),
    plain(libc::SYS_munmap, "munmap", &[Ptr, Dec]),
    plain(libc::SYS_mprotect, "mprotect", &[Ptr, Dec, Hex]),
    plain(libc::SYS_brk, "brk", &[Ptr]),
    plain(libc::SYS_msync, "msync", &[Ptr, Dec, Hex]),
    plain(libc::SYS_mincore, "mincore", &[Ptr, Dec, Ptr]),
    plain(libc::SYS_madvise, "madvise", &[Ptr, Dec, Dec]),
    plain(libc::SYS_shmget, "shmget", &[Dec, Dec, Hex]),
    plain(libc::SYS_shmat, "shmat", &[Dec, Ptr, Hex]),
    plain(libc::SYS_shmctl, "shmctl", &[Dec, Dec, Ptr]),
    // signals and polling
    plain(libc::SYS_rt_sigaction, "rt_sigaction", &[Dec, Ptr, Ptr, Dec]),
    plain(
        libc::SYS_rt_sigprocmask,
        "rt_sigprocmask",
        &[Dec, Ptr, Ptr, Dec],
    ),
    plain(libc::SYS_rt_sigreturn, "rt_sigreturn", &[]),
    plain(libc::SYS_pause, "pause", &[]),
    plain(libc::SYS_poll, "poll", &[Ptr, Dec, Dec]),
    plain(libc::SYS_ppoll, "ppoll", &[Ptr, Dec, Ptr, Ptr, Dec]),
    plain(libc::SYS_select, "select", &[Dec, Ptr, Ptr, Ptr, Ptr]),
    plain(
        libc::SYS_pselect6,
        "pselect6",
        &[Dec, Ptr, Ptr, Ptr, Ptr, Ptr],
    ),
    plain(libc::SYS_epoll_create, "epoll_create", &[Dec]),
    plain(libc::SYS_epoll_create1, "epoll_create1", &[Hex]),
    plain(libc::SYS_epoll_ctl, "epoll_ctl", &[Fd, Dec, Fd, Ptr]),
    plain(libc::SYS_epoll_wait, "epoll_wait", &[Fd, Ptr, Dec, Dec]),
    plain(
        libc::SYS_epoll_pwait,
        "epoll_pwait",
        &[Fd, Ptr, Dec, Dec, Ptr, Dec],
    ),
    plain(libc::SYS_signalfd, "signalfd", &[Fd, Ptr, Hex]),
    plain(libc::SYS_signalfd4, "signalfd4", &[Fd, Ptr, Dec, Hex]),
    plain(libc::SYS_eventfd, "eventfd", &[Dec]),
    plain(libc::SYS_eventfd2, "eventfd2", &[Dec, Hex]),
    plain(libc::SYS_timerfd_create, "timerfd_create", &[Dec, Hex]),
    plain(
        libc::SYS_timerfd_settime,
        "timerfd_settime",
        &[Fd, Hex, Ptr, Ptr],
    ),
    plain(libc::SYS_timerfd_gettime, "timerfd_gettime", &[Fd, Ptr]),
    plain(libc::SYS_inotify_init1, "inotify_init1", &[Hex]),
    // networking
    plain(libc::SYS_socket, "socket", &[Dec, Dec, Dec]),
    plain(libc::SYS_socketpair, "socketpair", &[Dec, Dec, Dec, Ptr]),
    plain(libc::SYS_connect, "connect", &[Fd, Ptr, Dec]),
    plain(libc::SYS_accept, "accept", &[Fd, Ptr, Ptr]),
    plain(libc::SYS_accept4, "accept4", &[Fd, Ptr, Ptr, Hex]),
    plain(libc::SYS_bind, "bind", &[Fd, Ptr, Dec]),
    plain(libc::SYS_listen, "listen", &[Fd, Dec]),
    plain(libc::SYS_sendto, "sendto", &[Fd, Buf, Dec, Hex, Ptr, Dec]),
    quirky(
        libc::SYS_recvfrom,
        "recvfrom",
        &[Fd, Buf, Dec, Hex, Ptr, Ptr],
        Quirk::BufFromResult,
    ),
    plain(libc::SYS_sendmsg, "sendmsg", &[Fd, Ptr, Hex]),
    plain(libc::SYS_recvmsg, "recvmsg", &[Fd, Ptr, Hex]),
    plain(libc::SYS_shutdown, "shutdown", &[Fd, Dec]),
    plain(libc::SYS_getsockname, "getsockname", &[Fd, Ptr, Ptr]),
    plain(libc::SYS_getpeername, "getpeername", &[Fd, Ptr, Ptr]),
    plain(
        libc::SYS_setsockopt,
        "setsockopt",
        &[Fd, Dec, Dec, Ptr, Dec],
    ),
    plain(
        libc::SYS_getsockopt,
        "getsockopt",
        &[Fd, Dec, Dec, Ptr, Ptr],
    ),
    // process management
    plain(
        libc::SYS_clone,
        "clone",
        &[CloneFlags, Ptr, Ptr, Ptr, Dec],
    ),
    plain(libc::SYS_execve, "execve", &[CStr, Ptr, Ptr]),
    plain(
        libc::SYS_execveat,
        "execveat",
        &[AtFd, CStr, Ptr, Ptr, Hex],
    ),
    plain(libc::SYS_wait4, "wait4", &[Dec, Ptr, Hex, Ptr]),
    plain(libc::SYS_kill, "kill", &[Dec, Dec]),
    plain(libc::SYS_tkill, "tkill", &[Dec, Dec]),
    plain(libc::SYS_tgkill, "tgkill", &[Dec, Dec, Dec]),
    plain(libc::SYS_getpid, "getpid", &[]),
    plain(libc::SYS_getppid, "getppid", &[]),
    plain(libc::SYS_gettid, "gettid", &[]),
    plain(libc::SYS_getuid, "getuid", &[]),
    plain(libc::SYS_geteuid, "geteuid", &[]),
    plain(libc::SYS_getgid, "getgid", &[]),
    plain(libc::SYS_getegid, "getegid", &[]),
    plain(libc::SYS_setuid, "setuid", &[Dec]),
    plain(libc::SYS_setgid, "setgid", &[Dec]),
    plain(libc::SYS_setreuid, "setreuid", &[Dec, Dec]),
    plain(libc::SYS_setregid, "setregid", &[Dec, Dec]),
    plain(libc::SYS_setresuid, "setresuid", &[Dec, Dec, Dec]),
    plain(libc::SYS_getresuid, "getresuid", &[Ptr, Ptr, Ptr]),
    plain(libc::SYS_setresgid, "setresgid", &[Dec, Dec, Dec]),
    plain(libc::SYS_getresgid, "getresgid", &[Ptr, Ptr, Ptr]),
    plain(libc::SYS_setfsuid, "setfsuid", &[Dec]),
    plain(libc::SYS_setfsgid, "setfsgid", &[Dec]),
    plain(libc::SYS_getgroups, "getgroups", &[Dec, Ptr]),
    plain(libc::SYS_setgroups, "setgroups", &[Dec, Ptr]),
    plain(libc::SYS_setpgid, "setpgid", &[Dec, Dec]),
    plain(libc::SYS_getpgid, "getpgid", &[Dec]),
    plain(libc::SYS_getpgrp, "getpgrp", &[]),
    plain(libc::SYS_getsid, "getsid", &[Dec]),
    plain(libc::SYS_setsid, "setsid", &[]),
    plain(libc::SYS_prctl, "prctl", &[Dec, Hex, Hex, Hex, Hex]),
    plain(libc::SYS_arch_prctl, "arch_prctl", &[Hex, Ptr]),
    plain(libc::SYS_prlimit64, "prlimit64", &[Dec, Dec, Ptr, Ptr]),
    plain(libc::SYS_getrlimit, "getrlimit", &[Dec, Ptr]),
    plain(libc::SYS_getrusage, "getrusage", &[Dec, Ptr]),
    plain(
        libc::SYS_set_tid_address,
        "set_tid_address",
        &[Ptr],
    ),
    plain(libc::SYS_restart_syscall, "restart_syscall", &[]),
    // scheduling, time, misc
    plain(libc::SYS_sched_yield, "sched_yield", &[]),
    plain(libc::SYS_nanosleep, "nanosleep", &[Ptr, Ptr]),
    plain(
        libc::SYS_clock_nanosleep,
        "clock_nanosleep",
        &[Dec, Hex, Ptr, Ptr],
    ),
    plain(libc::SYS_clock_gettime, "clock_gettime", &[Dec, Ptr]),
    plain(libc::SYS_clock_getres, "clock_getres", &[Dec, Ptr]),
    plain(libc::SYS_gettimeofday, "gettimeofday", &[Ptr, Ptr]),
    plain(libc::SYS_time, "time", &[Ptr]),
    plain(libc::SYS_times, "times", &[Ptr]),
    plain(libc::SYS_getitimer, "getitimer", &[Dec, Ptr]),
    plain(libc::SYS_setitimer, "setitimer", &[Dec, Ptr, Ptr]),
    plain(libc::SYS_alarm, "alarm", &[Dec]),
    plain(libc::SYS_futex, "futex", &[Ptr, Dec, Dec, Ptr, Ptr, Dec]),
    plain(libc::SYS_uname, "uname", &[Ptr]),
    plain(libc::SYS_sysinfo, "sysinfo", &[Ptr]),
    plain(libc::SYS_syslog, "syslog", &[Dec, Ptr, Dec]),
    quirky(
        libc::SYS_getrandom,
        "getrandom",
        &[Buf, Dec, Hex],
        Quirk::BufFromResult,
    ),
];

// Syscall numbers stop well short of this on x86_64; the index table wastes
// a few hundred bytes to buy constant-time dispatch.
const NR_LIMIT: usize = 360;

const NO_ENTRY: u16 = u16::MAX;

static BY_NR: [u16; NR_LIMIT] = build_index();

const fn build_index() -> [u16; NR_LIMIT] {
    let mut index = [NO_ENTRY; NR_LIMIT];
    let mut i = 0;
    while i < SYSCALLS.len() {
        let nr = SYSCALLS[i].nr;
        assert!(nr >= 0 && (nr as usize) < NR_LIMIT);
        index[nr as usize] = i as u16;
        i += 1;
    }
    index
}

pub fn syscall_desc_from_nr(nr: i64) -> Option<&'static SyscallDesc> {
    if nr < 0 || nr as usize >= NR_LIMIT {
        return None;
    }
    match BY_NR[nr as usize] {
        NO_ENTRY => None,
        i => Some(&SYSCALLS[i as usize]),
    }
}

pub fn syscall_name_from_nr(nr: i64) -> Option<&'static str> {
    syscall_desc_from_nr(nr).map(|desc| desc.name)
}
