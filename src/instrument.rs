//! Timing and memory instrumentation.
//!
//! The strategies read time and memory through two small collaborator
//! traits so that tests can drive the clock and so that platforms without
//! a memory facility still run. Neither read can fail: an unavailable
//! memory probe reports zero.

use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Best-effort resident memory probe.
pub trait MemoryProbe {
    /// Resident set size in bytes, or 0 when it cannot be measured.
    fn resident_bytes(&self) -> u64;
}

/// [`Clock`] backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// [`MemoryProbe`] reading the current process's resident set size.
///
/// Backed by `memory-stats` (physical memory on Linux, macOS and Windows).
/// Every sample is 0 where the platform query fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessMemory;

impl MemoryProbe for ProcessMemory {
    fn resident_bytes(&self) -> u64 {
        match memory_stats::memory_stats() {
            Some(stats) => stats.physical_mem as u64,
            None => {
                log::trace!("memory probe unavailable on this platform");
                0
            }
        }
    }
}

/// [`MemoryProbe`] that always reports 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMemory;

impl MemoryProbe for NoMemory {
    fn resident_bytes(&self) -> u64 {
        0
    }
}

/// The clock and memory probe used by one or more strategy invocations.
pub struct Instruments {
    clock: Box<dyn Clock>,
    memory: Box<dyn MemoryProbe>,
}

impl Instruments {
    /// Uses the given collaborators.
    pub fn new(clock: impl Clock + 'static, memory: impl MemoryProbe + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            memory: Box::new(memory),
        }
    }

    /// System clock and process RSS.
    pub fn system() -> Self {
        Self::new(SystemClock, ProcessMemory)
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn resident_bytes(&self) -> u64 {
        self.memory.resident_bytes()
    }
}

impl Default for Instruments {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for Instruments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instruments").finish_non_exhaustive()
    }
}

/// Measures one strategy invocation from creation to [`finish`](Meter::finish).
pub(crate) struct Meter<'a> {
    instruments: &'a Instruments,
    started: Instant,
    memory_before: u64,
}

impl<'a> Meter<'a> {
    pub(crate) fn start(instruments: &'a Instruments) -> Self {
        let memory_before = instruments.resident_bytes();
        Self {
            instruments,
            started: instruments.now(),
            memory_before,
        }
    }

    /// Time since the meter started.
    pub(crate) fn elapsed(&self) -> Duration {
        self.instruments.now().saturating_duration_since(self.started)
    }

    /// Returns elapsed time and the signed resident memory delta in bytes.
    ///
    /// If either sample is 0 the probe is considered unavailable and the
    /// delta is 0.
    pub(crate) fn finish(self) -> (Duration, i64) {
        let elapsed = self.elapsed();
        let memory_after = self.instruments.resident_bytes();
        let delta = if self.memory_before == 0 || memory_after == 0 {
            0
        } else {
            memory_after as i64 - self.memory_before as i64
        };
        (elapsed, delta)
    }
}
