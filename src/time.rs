//! Platform-agnostic time utilities
//!
//! `now_seconds` is monotonic seconds since the first call (native) or
//! page load (browser). `Clock` measures elapsed time from its own start.

#[cfg(target_arch = "wasm32")]
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_seconds() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Animation clock, the frame driver's source of `elapsed`
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    start: f64,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            start: now_seconds(),
        }
    }

    /// Seconds since start, never negative
    pub fn elapsed(&self) -> f64 {
        (now_seconds() - self.start).max(0.0)
    }
}
