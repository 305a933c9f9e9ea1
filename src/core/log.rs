//! Console logging macros
//!
//! On wasm32 these forward to the browser console through web-sys.
//! Native builds (tests, tooling) compile the call away, since JS imports
//! cannot be invoked outside a wasm host.
//!
//! Usage:
//! ```rust
//! use backdrop_engine::console_log;
//!
//! let n = 500;
//! console_log!("seeded {} particles", n);
//! ```

/// Log an informational line to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            // Keep arguments type-checked and "used" without calling into JS
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

/// Log a warning to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_are_noops_natively() {
        let count = 3;
        console_log!("particles: {}", count);
        console_warn!("missing canvas '{}'", "blockCanvas");
    }
}
