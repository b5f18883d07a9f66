// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drives the real formatter and sink from outside any interception
//! engine, replaying a fixed script of syscall records. The integration
//! tests run this binary and assert on the log files it leaves behind.

use anyhow::ensure;
use clap::Parser;
use limpet::{log_syscall, LogSink, ReturnState, SyscallEvent};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path template for the log sink; a trailing '-' appends the pid.
    #[arg(long)]
    log: String,

    /// Keep existing log content instead of truncating on open.
    #[arg(long)]
    append: bool,

    /// Label prepended to every line, normally the patched object's path.
    #[arg(long, default_value = "/bin/probe")]
    label: String,
}

const OFFSET: u64 = 0x1337;

fn event(nr: libc::c_long, args: [u64; 6], result: ReturnState) -> SyscallEvent {
    SyscallEvent {
        syscall_nr: nr as i64,
        args,
        offset: OFFSET,
        result,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut sink = LogSink::new();
    sink.setup(Some(&args.log), args.append);
    ensure!(sink.is_active(), "could not open log sink at {}", args.log);

    let path: &[u8] = b"/tmp/limpet-input\0";
    let other_path: &[u8] = b"/etc/os-release\0";
    let payload: &[u8] = b"input_data\n";

    let script = [
        event(libc::SYS_read, [9, 0, 44, 0, 0, 0], ReturnState::Pending),
        event(
            libc::SYS_read,
            [7, payload.as_ptr() as u64, 17, 0, 0, 0],
            ReturnState::Known(10),
        ),
        event(
            libc::SYS_write,
            [7, payload.as_ptr() as u64, 11, 0, 0, 0],
            ReturnState::Known(11),
        ),
        event(
            libc::SYS_open,
            [
                path.as_ptr() as u64,
                (libc::O_CREAT | libc::O_RDWR | libc::O_SYNC) as u64,
                0o321,
                0,
                0,
                0,
            ],
            ReturnState::Known(22),
        ),
        event(
            libc::SYS_open,
            [path.as_ptr() as u64, libc::O_RDONLY as u64, 0o321, 0, 0, 0],
            ReturnState::Known(22),
        ),
        event(libc::SYS_close, [9, 0, 0, 0, 0, 0], ReturnState::Known(0)),
        event(
            libc::SYS_lseek,
            [2, (-1i64) as u64, libc::SEEK_END as u64, 0, 0, 0],
            ReturnState::Known(-22),
        ),
        event(
            libc::SYS_mmap,
            [
                0,
                0x8000,
                libc::PROT_EXEC as u64,
                libc::MAP_SHARED as u64,
                99,
                0x1000,
            ],
            ReturnState::Known(-22),
        ),
        event(
            libc::SYS_openat,
            [
                libc::AT_FDCWD as i64 as u64,
                other_path.as_ptr() as u64,
                libc::O_RDONLY as u64,
                0,
                0,
                0,
            ],
            ReturnState::Known(3),
        ),
        event(libc::SYS_fork, [0; 6], ReturnState::Known(1234)),
        event(999, [1, 2, 3, 4, 5, 6], ReturnState::Pending),
        event(
            libc::SYS_clone,
            [(libc::CLONE_VM | libc::CLONE_FS) as u64, 0, 0, 0, 0, 0],
            ReturnState::Known(4321),
        ),
        event(libc::SYS_exit_group, [0; 6], ReturnState::Pending),
    ];

    for event in &script {
        log_syscall(&mut sink, &args.label, event);
    }

    sink.close();

    Ok(())
}
