//! Per-phase timing and process memory measurement.

use std::time::Instant;

use sysinfo::{get_current_pid, Pid, System};

/// Timing and memory captured for one benchmark phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseMeasurement {
    /// Wall-clock time the phase took, in microseconds.
    pub elapsed_us: u64,
    /// Resident set size of this process right after the phase, in KB.
    /// Zero when the platform refuses to report it.
    pub process_rss_kb: u64,
}

/// Samples this process's resident set size through the OS process table.
///
/// Reuses one [`System`] across samples so repeated refreshes stay cheap.
pub struct MemorySampler {
    sys: System,
    pid: Option<Pid>,
}

impl MemorySampler {
    pub fn new() -> Self {
        Self {
            sys: System::new(),
            pid: get_current_pid().ok(),
        }
    }

    /// Current RSS in kilobytes, or 0 when unavailable.
    pub fn rss_kb(&mut self) -> u64 {
        let Some(pid) = self.pid else {
            return 0;
        };
        if !self.sys.refresh_process(pid) {
            return 0;
        }
        self.sys
            .process(pid)
            .map(|process| process.memory() / 1024)
            .unwrap_or(0)
    }
}

impl Default for MemorySampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `phase`, returning its output plus elapsed time and post-phase RSS.
///
/// The memory sample is taken after the closure so allocations made by the
/// phase are visible in the reading.
pub fn measure_phase<T>(
    sampler: &mut MemorySampler,
    phase: impl FnOnce() -> T,
) -> (T, PhaseMeasurement) {
    let start = Instant::now();
    let output = phase();
    let elapsed_us = start.elapsed().as_micros() as u64;

    let measurement = PhaseMeasurement {
        elapsed_us,
        process_rss_kb: sampler.rss_kb(),
    };
    (output, measurement)
}
