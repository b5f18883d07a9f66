// SPDX-License-Identifier: MIT OR Apache-2.0

mod basic_io;

#[macro_export]
macro_rules! syscall_test {
    ($name:ident, $init:block, $expected:expr) => {
        #[test]
        fn $name() {
            let event = $init;

            let mut buf = [0u8; $crate::formatting::LINE_CAPACITY];
            let mut out = $crate::formatting::FixedWriter::new(&mut buf);
            $crate::events::write_syscall_line(&mut out, "/bin/probe", &event);

            assert_eq!(core::str::from_utf8(out.as_bytes()).unwrap(), $expected);
        }
    };
}

syscall_test!(
    unknown_number_uses_generic_fallback,
    {
        use limpet_common::{ReturnState, SyscallEvent};

        SyscallEvent {
            syscall_nr: 999,
            args: [1, 2, 3, 4, 5, 6],
            offset: 0x42,
            result: ReturnState::Pending,
        }
    },
    "/bin/probe 0x42 -- syscall(999, 0x1, 0x2, 0x3, 0x4, 0x5, 0x6) = ?\n"
);

syscall_test!(
    negative_number_uses_generic_fallback,
    {
        use limpet_common::{ReturnState, SyscallEvent};

        SyscallEvent {
            syscall_nr: -3,
            args: [0; 6],
            offset: 0x42,
            result: ReturnState::Known(-38),
        }
    },
    "/bin/probe 0x42 -- syscall(-3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0) = -38\n"
);

#[test]
fn logged_lines_land_in_the_sink_file() {
    use indoc::indoc;
    use limpet_common::{ReturnState, SyscallEvent};

    use crate::{events::log_syscall, sink::LogSink};

    let path = format!(
        "{}/limpet-events-{}",
        std::env::temp_dir().display(),
        std::process::id()
    );

    let mut sink = LogSink::new();
    sink.setup(Some(&path), false);

    for nr in [libc::SYS_close, libc::SYS_sched_yield] {
        let event = SyscallEvent {
            syscall_nr: nr as i64,
            args: [3, 0, 0, 0, 0, 0],
            offset: 0x10,
            result: ReturnState::Known(0),
        };
        log_syscall(&mut sink, "/bin/probe", &event);
    }
    sink.close();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        indoc! {"
            /bin/probe 0x10 -- close(3) = 0
            /bin/probe 0x10 -- sched_yield() = 0
        "}
    );
    std::fs::remove_file(&path).unwrap();
}
