// SPDX-License-Identifier: MIT OR Apache-2.0

//! The log sink: one append-mode file descriptor the rendered lines go to.

use crate::{formatting::FixedWriter, raw};

/// A template path ending in this byte gets the pid appended, giving each
/// traced process its own log file.
pub const PID_SUFFIX_MARKER: u8 = b'-';

const PATH_CAPACITY: usize = 4096;

/// Destination for rendered syscall lines: one live descriptor, or none.
///
/// The sink is owned by the interception engine and carries no internal
/// locking; logging is best-effort diagnostics. Concurrent `emit` calls
/// through aliased handles may interleave at the byte level, and racing
/// `setup`/`close` against `emit` is undefined. All file operations go
/// through the raw gateway, so a disabled sink is the only non-fatal
/// failure mode.
pub struct LogSink {
    fd: Option<i32>,
}

impl LogSink {
    pub const fn new() -> Self {
        Self { fd: None }
    }

    pub fn is_active(&self) -> bool {
        self.fd.is_some()
    }

    /// Open the sink. Any previously open descriptor is closed first, so
    /// repeated setup is safe. `None` (or a template too long for a path
    /// buffer) leaves the sink disabled and logging a no-op. A template
    /// ending in [`PID_SUFFIX_MARKER`] gets the pid appended. The file is
    /// created read-write in append mode and truncated unless `append`
    /// asks for existing content to be kept.
    pub fn setup(&mut self, template: Option<&str>, append: bool) {
        self.close();

        let Some(template) = template else {
            return;
        };

        let mut path_buf = [0u8; PATH_CAPACITY];
        let mut path = FixedWriter::new(&mut path_buf);
        path.push_str(template);
        if template.as_bytes().last() == Some(&PID_SUFFIX_MARKER) {
            path.push_unsigned(raw::getpid() as u64, 10, 1);
        }

        let Some(path) = path.as_cstr() else {
            return;
        };

        let mut flags = libc::O_CREAT | libc::O_RDWR | libc::O_APPEND;
        if !append {
            flags |= libc::O_TRUNC;
        }

        self.fd = Some(raw::open(path, flags, 0o700));
    }

    /// Close the descriptor if one is open. Safe to call when already
    /// disabled, and always called by `setup` before reopening.
    pub fn close(&mut self) {
        if let Some(fd) = self.fd.take() {
            raw::close(fd);
        }
    }

    /// Append one rendered line: a single raw write of the exact span.
    /// Best-effort by design — there is no short-write retry, and a
    /// disabled sink makes this a no-op.
    pub fn emit(&mut self, bytes: &[u8]) {
        if let Some(fd) = self.fd {
            raw::write(fd, bytes);
        }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LogSink {
    fn drop(&mut self) {
        self.close();
    }
}
