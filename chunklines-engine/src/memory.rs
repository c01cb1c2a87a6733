//! Memory usage instrumentation
//!
//! Kept separate from the strategies: nothing in the executors calls into
//! this module. A binary opts in by installing [`TrackingAllocator`] as its
//! global allocator and calling [`MemoryUsage::capture`] after a run.
//!
//! ```ignore
//! #[global_allocator]
//! static GLOBAL: chunklines_engine::TrackingAllocator = chunklines_engine::TrackingAllocator;
//! ```

use std::alloc::{GlobalAlloc, Layout, System};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

static LIVE_BYTES: AtomicUsize = AtomicUsize::new(0);
static PEAK_BYTES: AtomicUsize = AtomicUsize::new(0);
static INSTALLED: AtomicBool = AtomicBool::new(false);

const MIB: f64 = 1024.0 * 1024.0;

/// Global allocator that counts live heap bytes and their high-water mark
///
/// Delegates every request to the system allocator.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackingAllocator;

impl TrackingAllocator {
    fn record_alloc(size: usize) {
        let live = LIVE_BYTES.fetch_add(size, Ordering::Relaxed) + size;
        PEAK_BYTES.fetch_max(live, Ordering::Relaxed);
        if !INSTALLED.load(Ordering::Relaxed) {
            INSTALLED.store(true, Ordering::Relaxed);
        }
    }

    fn record_dealloc(size: usize) {
        LIVE_BYTES.fetch_sub(size, Ordering::Relaxed);
    }
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            Self::record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            Self::record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            Self::record_dealloc(layout.size());
            Self::record_alloc(new_size);
        }
        new_ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        Self::record_dealloc(layout.size());
    }
}

/// Start a new peak window at the current live heap size
pub fn reset_peak() {
    PEAK_BYTES.store(LIVE_BYTES.load(Ordering::Relaxed), Ordering::Relaxed);
}

/// Whether [`TrackingAllocator`] is serving this process's allocations
pub fn is_tracking() -> bool {
    INSTALLED.load(Ordering::Relaxed)
}

/// Snapshot of process memory usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    /// Live heap bytes (0 without the tracking allocator)
    pub heap_used: usize,
    /// Peak live heap bytes since the last [`reset_peak`]
    pub heap_peak: usize,
    /// Resident set size in bytes, where the platform exposes it
    pub rss: Option<u64>,
    /// Peak resident set size in bytes, where the platform exposes it
    pub rss_peak: Option<u64>,
}

impl MemoryUsage {
    /// Take a snapshot now
    pub fn capture() -> Self {
        let (rss, rss_peak) = read_resident_set();
        Self {
            heap_used: LIVE_BYTES.load(Ordering::Relaxed),
            heap_peak: PEAK_BYTES.load(Ordering::Relaxed),
            rss,
            rss_peak,
        }
    }

    /// Named metrics in bytes, in display order
    pub fn metrics(&self) -> Vec<(&'static str, u64)> {
        let mut metrics = Vec::with_capacity(4);
        if let Some(rss) = self.rss {
            metrics.push(("rss", rss));
        }
        if let Some(rss_peak) = self.rss_peak {
            metrics.push(("rssPeak", rss_peak));
        }
        metrics.push(("heapUsed", self.heap_used as u64));
        metrics.push(("heapPeak", self.heap_peak as u64));
        metrics
    }
}

impl fmt::Display for MemoryUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metrics = self.metrics();
        for (i, (name, bytes)) in metrics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[MemoryUsage ({name})]: {}", format_mib(*bytes))?;
        }
        Ok(())
    }
}

/// Render a byte count in MiB
pub fn format_mib(bytes: u64) -> String {
    format!("{:.2}MB", bytes as f64 / MIB)
}

#[cfg(target_os = "linux")]
fn read_resident_set() -> (Option<u64>, Option<u64>) {
    match std::fs::read_to_string("/proc/self/status") {
        Ok(status) => parse_proc_status(&status),
        Err(e) => {
            log::debug!("cannot read /proc/self/status: {e}");
            (None, None)
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn read_resident_set() -> (Option<u64>, Option<u64>) {
    (None, None)
}

/// Extract `VmRSS` and `VmHWM` (in bytes) from a `/proc/<pid>/status` dump
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_proc_status(status: &str) -> (Option<u64>, Option<u64>) {
    let field = |key: &str| {
        status
            .lines()
            .find_map(|line| line.strip_prefix(key))
            .and_then(|rest| rest.trim().trim_end_matches("kB").trim().parse::<u64>().ok())
            .map(|kib| kib * 1024)
    };
    (field("VmRSS:"), field("VmHWM:"))
}
