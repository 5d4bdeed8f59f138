//! Internal logging helpers.

/// Emits a `tracing` event when the `tracing` feature is enabled and
/// compiles to nothing otherwise.
///
/// ```ignore
/// trace_event!(DEBUG, from = from, to = to, "back edge");
/// ```
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::event!(::tracing::Level::$level, $($arg)+);
    }};
}

pub(crate) use trace_event;
