// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sink configuration from the environment.
//!
//! Runs at engine startup, before any interception is live, so unlike the
//! rest of the crate it is free to use std and to log.

use log::warn;

use crate::sink::LogSink;

/// Path template for the log sink; unset or empty leaves logging disabled.
pub const LOG_PATH_ENV: &str = "LIMPET_LOG";

/// Set to `1`/`true` to keep existing log content instead of truncating.
pub const LOG_APPEND_ENV: &str = "LIMPET_LOG_APPEND";

#[derive(Clone, Debug, Default)]
pub struct SinkConfig {
    pub path: Option<String>,
    pub append: bool,
}

impl SinkConfig {
    pub fn from_env() -> Self {
        let path = std::env::var(LOG_PATH_ENV)
            .ok()
            .filter(|path| !path.is_empty());
        let append = bool_from_env(LOG_APPEND_ENV);

        Self { path, append }
    }

    pub fn apply(&self, sink: &mut LogSink) {
        sink.setup(self.path.as_deref(), self.append);
    }
}

fn bool_from_env(name: &str) -> bool {
    match std::env::var(name) {
        Ok(value) => {
            if value == "1" || value.eq_ignore_ascii_case("true") {
                true
            } else if value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false") {
                false
            } else {
                warn!("{name}: unrecognized value {value:?}, assuming false");
                false
            }
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Env vars are process-wide; use distinct names per assertion instead
    // of racing the real ones across test threads.
    #[test]
    fn bool_parsing() {
        std::env::set_var("LIMPET_TEST_BOOL_ON", "1");
        std::env::set_var("LIMPET_TEST_BOOL_TRUE", "True");
        std::env::set_var("LIMPET_TEST_BOOL_OFF", "0");
        std::env::set_var("LIMPET_TEST_BOOL_JUNK", "maybe");

        assert!(bool_from_env("LIMPET_TEST_BOOL_ON"));
        assert!(bool_from_env("LIMPET_TEST_BOOL_TRUE"));
        assert!(!bool_from_env("LIMPET_TEST_BOOL_OFF"));
        assert!(!bool_from_env("LIMPET_TEST_BOOL_JUNK"));
        assert!(!bool_from_env("LIMPET_TEST_BOOL_UNSET"));
    }
}
