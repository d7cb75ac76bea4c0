// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Allocation-peak tracing and process RSS sampling.
//!
//! Peak tracing rides on `peak_alloc`: the binary (or test) registers
//! [`peak_alloc::PeakAlloc`] as the global allocator and [`TraceScope`] bounds
//! the measurement window by resetting the tracked high-water mark on entry.
//! Sampling is passive, so the window closes correctly on every exit path,
//! including error propagation out of the lookup phase.

use peak_alloc::PeakAlloc;

static TRACKER: PeakAlloc = PeakAlloc;

/// Bounded allocation-peak measurement window.
pub struct TraceScope(());

impl TraceScope {
    /// Open a window: resets the tracked peak to the current usage.
    #[must_use]
    pub fn begin() -> Self {
        TRACKER.reset_peak_usage();
        Self(())
    }

    /// Allocation high-water mark (bytes) since the window opened.
    ///
    /// Reads zero when `PeakAlloc` is not installed as the global allocator;
    /// the figure is then simply absent from the report's perspective.
    #[must_use]
    pub fn peak_bytes(&self) -> usize {
        TRACKER.peak_usage()
    }
}

/// Kernel family governing the `ru_maxrss` unit convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    /// Reports `ru_maxrss` in kibibytes.
    Linux,
    /// Reports `ru_maxrss` in bytes.
    Darwin,
    /// Unrecognized; assumed to follow the kibibyte convention.
    Other,
}

/// The OS family of the running process.
#[must_use]
pub fn host_os_family() -> OsFamily {
    if cfg!(target_os = "macos") {
        OsFamily::Darwin
    } else if cfg!(target_os = "linux") {
        OsFamily::Linux
    } else {
        OsFamily::Other
    }
}

/// Normalize a raw `ru_maxrss` sample to megabytes.
///
/// Linux kernels report kibibytes, Darwin reports bytes; the two differ by a
/// factor of exactly 1024. Unknown families default to the kibibyte
/// convention rather than failing, since this only affects a reported
/// statistic.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rss_mb_from_raw(raw: u64, family: OsFamily) -> f64 {
    match family {
        OsFamily::Darwin => raw as f64 / (1024.0 * 1024.0),
        OsFamily::Linux | OsFamily::Other => raw as f64 / 1024.0,
    }
}

/// Sample the process peak resident set size in the platform's raw unit.
#[cfg(unix)]
#[must_use]
pub fn sample_max_rss_raw() -> Option<u64> {
    let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) };
    if rc != 0 {
        return None;
    }
    u64::try_from(usage.ru_maxrss).ok()
}

#[cfg(not(unix))]
#[must_use]
pub fn sample_max_rss_raw() -> Option<u64> {
    None
}

/// Peak RSS of the process in megabytes, if the platform exposes it.
#[must_use]
pub fn sample_rss_mb() -> Option<f64> {
    sample_max_rss_raw().map(|raw| rss_mb_from_raw(raw, host_os_family()))
}
