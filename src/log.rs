//! Logging for the loaders, the path cache and the layers.
//!
//! With the `tracing` feature the macros below are `tracing`'s own, so events
//! carry structured fields (`way = id`, `layer = name`) and are filtered with
//! `RUST_LOG=tarmac=debug`. Without it every call expands to nothing.
//!
//! Levels in use:
//! - `warn`: a feature was skipped or drawn with a fallback
//! - `debug`: one event per load, cache rebuild and frame
//! - `trace`: per layer and per tag read

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace, warn};
