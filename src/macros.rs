//! Internal logging shim.
//!
//! `trace_event!` forwards to `tracing` when the `tracing` feature is on and
//! expands to nothing otherwise, so call sites never need their own `cfg`.

/// Emits a `tracing` event at the given level when the `tracing` feature is enabled.
///
/// ```ignore
/// trace_event!(debug, strategy = "copied", "merge fell back to a fresh buffer");
/// ```
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {};
}

pub(crate) use trace_event;
