// SPDX-License-Identifier: MIT OR Apache-2.0

use limpet_common::{ReturnState, SyscallEvent};

use crate::syscall_test;

syscall_test!(
    close_plain_fd,
    {
        SyscallEvent {
            syscall_nr: libc::SYS_close as i64,
            args: [2, 0, 0, 0, 0, 0],
            offset: 0x1000,
            result: ReturnState::Known(0),
        }
    },
    "/bin/probe 0x1000 -- close(2) = 0\n"
);

syscall_test!(
    read_with_null_buffer,
    {
        SyscallEvent {
            syscall_nr: libc::SYS_read as i64,
            args: [9, 0, 44, 0, 0, 0],
            offset: 0xbeef,
            result: ReturnState::Pending,
        }
    },
    "/bin/probe 0xbeef -- read(9, (null), 44) = ?\n"
);

syscall_test!(
    read_echoes_only_the_result_length,
    {
        let data: &'static [u8] = b"input_data_plus_junk";
        SyscallEvent {
            syscall_nr: libc::SYS_read as i64,
            args: [7, data.as_ptr() as u64, 17, 0, 0, 0],
            offset: 0xbeef,
            result: ReturnState::Known(10),
        }
    },
    "/bin/probe 0xbeef -- read(7, \"input_data\", 17) = 10\n"
);

syscall_test!(
    read_with_pending_result_echoes_nothing,
    {
        let data: &'static [u8] = b"must_not_appear";
        SyscallEvent {
            syscall_nr: libc::SYS_read as i64,
            args: [7, data.as_ptr() as u64, 15, 0, 0, 0],
            offset: 0xbeef,
            result: ReturnState::Pending,
        }
    },
    "/bin/probe 0xbeef -- read(7, \"\", 15) = ?\n"
);

syscall_test!(
    read_with_failed_result_echoes_nothing,
    {
        let data: &'static [u8] = b"must_not_appear";
        SyscallEvent {
            syscall_nr: libc::SYS_read as i64,
            args: [7, data.as_ptr() as u64, 15, 0, 0, 0],
            offset: 0xbeef,
            result: ReturnState::Known(-9),
        }
    },
    "/bin/probe 0xbeef -- read(7, \"\", 15) = -9\n"
);

syscall_test!(
    write_echoes_the_count_argument,
    {
        let data: &'static [u8] = b"input_data\n";
        SyscallEvent {
            syscall_nr: libc::SYS_write as i64,
            args: [7, data.as_ptr() as u64, 11, 0, 0, 0],
            offset: 0x7,
            result: ReturnState::Known(11),
        }
    },
    "/bin/probe 0x7 -- write(7, \"input_data\\n\", 11) = 11\n"
);

syscall_test!(
    open_with_creat_keeps_the_mode,
    {
        let path: &'static [u8] = b"/tmp/limpet-input\0";
        let flags = (libc::O_CREAT | libc::O_RDWR | libc::O_SYNC) as u64;
        SyscallEvent {
            syscall_nr: libc::SYS_open as i64,
            args: [path.as_ptr() as u64, flags, 0o321, 0, 0, 0],
            offset: 0x2000,
            result: ReturnState::Known(22),
        }
    },
    "/bin/probe 0x2000 -- open(\"/tmp/limpet-input\", O_RDWR | O_CREAT | O_SYNC, 0321) = 22\n"
);

syscall_test!(
    open_without_creat_drops_the_mode,
    {
        let path: &'static [u8] = b"/tmp/limpet-input\0";
        SyscallEvent {
            syscall_nr: libc::SYS_open as i64,
            args: [path.as_ptr() as u64, libc::O_RDONLY as u64, 0o321, 0, 0, 0],
            offset: 0x2000,
            result: ReturnState::Known(22),
        }
    },
    "/bin/probe 0x2000 -- open(\"/tmp/limpet-input\", O_RDONLY) = 22\n"
);

syscall_test!(
    open_with_null_path,
    {
        SyscallEvent {
            syscall_nr: libc::SYS_open as i64,
            args: [0, libc::O_RDONLY as u64, 0, 0, 0, 0],
            offset: 0x2000,
            result: ReturnState::Known(-14),
        }
    },
    "/bin/probe 0x2000 -- open((null), O_RDONLY) = -14\n"
);

syscall_test!(
    openat_renders_the_cwd_sentinel,
    {
        let path: &'static [u8] = b"/etc/os-release\0";
        SyscallEvent {
            syscall_nr: libc::SYS_openat as i64,
            args: [
                libc::AT_FDCWD as i64 as u64,
                path.as_ptr() as u64,
                libc::O_RDONLY as u64,
                0,
                0,
                0,
            ],
            offset: 0x2040,
            result: ReturnState::Known(3),
        }
    },
    "/bin/probe 0x2040 -- openat(AT_FDCWD, \"/etc/os-release\", O_RDONLY) = 3\n"
);

syscall_test!(
    openat_with_creat_keeps_four_arguments,
    {
        let path: &'static [u8] = b"scratch.txt\0";
        let flags = (libc::O_CREAT | libc::O_WRONLY) as u64;
        SyscallEvent {
            syscall_nr: libc::SYS_openat as i64,
            args: [
                libc::AT_FDCWD as i64 as u64,
                path.as_ptr() as u64,
                flags,
                0o644,
                0,
                0,
            ],
            offset: 0x2040,
            result: ReturnState::Known(4),
        }
    },
    "/bin/probe 0x2040 -- openat(AT_FDCWD, \"scratch.txt\", O_WRONLY | O_CREAT, 0644) = 4\n"
);

syscall_test!(
    lseek_negative_offset,
    {
        SyscallEvent {
            syscall_nr: libc::SYS_lseek as i64,
            args: [2, (-1i64) as u64, libc::SEEK_END as u64, 0, 0, 0],
            offset: 0x3000,
            result: ReturnState::Known(-22),
        }
    },
    "/bin/probe 0x3000 -- lseek(2, -1, 2) = -22\n"
);

syscall_test!(
    pread_with_huge_offset,
    {
        let data: &'static [u8] = b"later";
        SyscallEvent {
            syscall_nr: libc::SYS_pread64 as i64,
            args: [7, data.as_ptr() as u64, 17, 4294967312, 0, 0],
            offset: 0x3000,
            result: ReturnState::Pending,
        }
    },
    "/bin/probe 0x3000 -- pread64(7, \"\", 17, 4294967312) = ?\n"
);

syscall_test!(
    fcntl_symbolic_command,
    {
        SyscallEvent {
            syscall_nr: libc::SYS_fcntl as i64,
            args: [7, libc::F_GETFL as u64, 0, 0, 0, 0],
            offset: 0x3100,
            result: ReturnState::Known(2),
        }
    },
    "/bin/probe 0x3100 -- fcntl(7, F_GETFL, 0x0) = 2\n"
);

syscall_test!(
    dup3_flags_stay_hex,
    {
        SyscallEvent {
            syscall_nr: libc::SYS_dup3 as i64,
            args: [3, 5, libc::O_CLOEXEC as u64, 0, 0, 0],
            offset: 0x3200,
            result: ReturnState::Known(5),
        }
    },
    "/bin/probe 0x3200 -- dup3(3, 5, 0x80000) = 5\n"
);
