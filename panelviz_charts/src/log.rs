// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export `tracing` macros; without it they expand to
//! nothing. Call them by path (`log::warn!`), since a bare `warn` names the lint attribute.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! noop_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! noop_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {noop_debug as debug, noop_warn as warn};
