//! Debug logging for theme derivation.
//!
//! Derivation is silent by default. Setting `PAGETHEME_DEBUG=1` (or calling
//! [`enable_debug`]) traces each derivation step, each contrast search and
//! each configuration decode to stderr, which is usually enough to explain
//! why a token came out the way it did.
//!
//! ```rust,ignore
//! use pagetheme_core::{debug_contrast, debug_derive};
//!
//! debug_derive!("primary override {}", primary);
//! debug_contrast!("l={} ratio={:.2}", lightness, ratio);
//! ```

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable that turns debug logging on.
pub const DEBUG_ENV_VAR: &str = "PAGETHEME_DEBUG";

/// Global flag for debug logging.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Global flag to track if init() has been called.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize debug logging from the environment.
///
/// Called automatically on first use of any debug macro.
///
/// | Variable | Effect |
/// |----------|--------|
/// | `PAGETHEME_DEBUG=1` | Enable all debug logging |
/// | `PAGETHEME_DEBUG=true` | Enable all debug logging |
/// | Unset/other | Debug logging disabled |
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let enabled = env::var(DEBUG_ENV_VAR).is_ok_and(|v| flag_enabled(&v));
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);

    if enabled {
        eprintln!("[PAGETHEME] Debug logging enabled");
    }
}

fn flag_enabled(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Check if debug logging is enabled, initializing from the environment
/// on first call.
#[must_use]
pub fn is_debug_enabled() -> bool {
    if !INITIALIZED.load(Ordering::SeqCst) {
        init();
    }
    DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Enable debug logging programmatically.
pub fn enable_debug() {
    INITIALIZED.store(true, Ordering::SeqCst);
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable debug logging programmatically.
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Reset the debug state so that `init()` re-reads the environment.
#[doc(hidden)]
pub fn reset_for_test() {
    INITIALIZED.store(false, Ordering::SeqCst);
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Log a general debug message if debug logging is enabled.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            eprintln!("[PAGETHEME] {}", format!($($arg)*));
        }
    };
}

/// Log a token derivation step.
#[macro_export]
macro_rules! debug_derive {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            eprintln!("[PAGETHEME:DERIVE] {}", format!($($arg)*));
        }
    };
}

/// Log contrast search progress.
#[macro_export]
macro_rules! debug_contrast {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            eprintln!("[PAGETHEME:CONTRAST] {}", format!($($arg)*));
        }
    };
}

/// Log preset lookups.
#[macro_export]
macro_rules! debug_preset {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            eprintln!("[PAGETHEME:PRESET] {}", format!($($arg)*));
        }
    };
}

/// Log configuration decoding.
#[macro_export]
macro_rules! debug_config {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            eprintln!("[PAGETHEME:CONFIG] {}", format!($($arg)*));
        }
    };
}
