//! Logging facade.
//!
//! Log output is the only diagnostic channel on the device. Hardware builds
//! log through `defmt` (RTT), the desktop simulator and host tests through
//! `tracing`. With neither backend enabled the macros compile to nothing but
//! still type-check their arguments.
//!
//! | Feature   | Backend   | Runtime filter |
//! |-----------|-----------|----------------|
//! | `defmt`   | `defmt`   | `DEFMT_LOG` (build time) |
//! | `tracing` | `tracing` | subscriber (`RUST_LOG` in the simulator) |
//!
//! `defmt` wins when both are enabled.
//!
//! Format strings must only use `{}` placeholders and arguments must be
//! printable by both backends (`&str`, integers, `bool`).
//!
//! ```
//! let track = "a.wav";
//! platform::info!("Playing file: {}", track);
//! platform::warn!("No playable audio files found");
//! ```

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "tracing")]
    pub use tracing;
}

// ── defmt ───────────────────────────────────────────────────────────────────

/// Log at error level.
#[cfg(feature = "defmt")]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { ::defmt::error!($($arg)*) };
}

/// Log at warn level.
#[cfg(feature = "defmt")]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { ::defmt::warn!($($arg)*) };
}

/// Log at info level.
#[cfg(feature = "defmt")]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { ::defmt::info!($($arg)*) };
}

/// Log at debug level.
#[cfg(feature = "defmt")]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { ::defmt::debug!($($arg)*) };
}

// ── tracing ─────────────────────────────────────────────────────────────────

/// Log at error level.
#[cfg(all(feature = "tracing", not(feature = "defmt")))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::log::__private::tracing::error!($($arg)*) };
}

/// Log at warn level.
#[cfg(all(feature = "tracing", not(feature = "defmt")))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log::__private::tracing::warn!($($arg)*) };
}

/// Log at info level.
#[cfg(all(feature = "tracing", not(feature = "defmt")))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::log::__private::tracing::info!($($arg)*) };
}

/// Log at debug level.
#[cfg(all(feature = "tracing", not(feature = "defmt")))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log::__private::tracing::debug!($($arg)*) };
}

// ── no backend ──────────────────────────────────────────────────────────────

/// Log at error level.
#[cfg(not(any(feature = "tracing", feature = "defmt")))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log at warn level.
#[cfg(not(any(feature = "tracing", feature = "defmt")))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log at info level.
#[cfg(not(any(feature = "tracing", feature = "defmt")))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log at debug level.
#[cfg(not(any(feature = "tracing", feature = "defmt")))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}
