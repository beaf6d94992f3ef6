//! Logging facade for sampler internals
//!
//! With the `tracing` feature the macros are re-exported from the `tracing`
//! crate. Without it they expand to nothing, so call sites never need their
//! own `cfg` gates.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop {
    // Suffixed names keep the definitions clear of the built-in `warn` attribute.
    macro_rules! trace_ {
        ($($arg:tt)*) => {};
    }

    macro_rules! debug_ {
        ($($arg:tt)*) => {};
    }

    macro_rules! warn_ {
        ($($arg:tt)*) => {};
    }

    pub(crate) use debug_ as debug;
    pub(crate) use trace_ as trace;
    pub(crate) use warn_ as warn;
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop::{debug, trace, warn};
