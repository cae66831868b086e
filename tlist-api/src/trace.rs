
// Inspection events go through `tracing` when the feature is on and vanish otherwise.

#[cfg(feature = "tracing")]
mod macros {
    macro_rules! trace_inspect {
        ($($arg:tt)*) => { tracing::trace!($($arg)*) };
    }
    pub(crate) use trace_inspect;
}

#[cfg(not(feature = "tracing"))]
mod macros {
    macro_rules! trace_inspect {
        ($($arg:tt)*) => { () };
    }
    pub(crate) use trace_inspect;
}

pub(crate) use macros::trace_inspect;
