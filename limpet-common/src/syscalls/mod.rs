// SPDX-License-Identifier: MIT OR Apache-2.0

#[cfg(x86_64)]
mod x86_64;
#[cfg(x86_64)]
pub use x86_64::*;

#[cfg(not(x86_64))]
compile_error!("Unsupported architecture. Currently only x86_64 is supported.");
