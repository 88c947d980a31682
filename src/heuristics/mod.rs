//! Collection heuristics: when to start a cycle and what to evacuate.

use std::time::Instant;

use log::info;

use crate::collection_set::CollectionSet;
use crate::config::HeuristicsOptions;
use crate::heap::Heap;
use crate::moving_average::DecayingMovingAverage;
use crate::region::HeapRegion;

pub mod adaptive;

/// Candidate entry handed to collection set selection.
///
/// The garbage byte count is captured up front so sorting does not keep
/// re-deriving it from the region.
pub struct RegionData<'a> {
    pub region: &'a HeapRegion,
    pub garbage: usize,
}

impl<'a> RegionData<'a> {
    pub fn new(region: &'a HeapRegion) -> Self {
        Self {
            garbage: region.garbage(),
            region,
        }
    }
}

/// Operations every heuristic variant offers to the GC controller.
///
/// For one generation the controller drives these in a fixed order:
/// `record_cycle_start`, any number of `should_start_gc` probes, one
/// `choose_collection_set_from_regiondata` during the cycle, then exactly one
/// of the `record_success_*` outcomes followed by `record_cycle_end`.
pub trait Heuristics {
    fn record_cycle_start(&mut self, heap: &Heap);
    fn record_cycle_end(&mut self);

    fn should_start_gc(&mut self, heap: &Heap) -> bool;

    fn choose_collection_set_from_regiondata(
        &mut self,
        cset: &mut CollectionSet,
        data: &mut [RegionData<'_>],
        actual_free: usize,
        heap: &Heap,
    );

    fn record_success_concurrent(&mut self, abbreviated: bool, heap: &Heap);
    fn record_success_degenerated(&mut self);
    fn record_success_full(&mut self);
}

/// State shared by all heuristic variants: cycle timing, the learned cycle
/// time history, and the penalty counter that degenerated and full
/// collections feed.
pub struct HeuristicsBase {
    epoch: Instant,
    pub(crate) cycle_start: f64,
    pub(crate) last_cycle_end: f64,

    pub(crate) gc_times_learned: usize,
    pub(crate) gc_time_penalties: isize,
    pub(crate) degenerated_cycles_in_a_row: u32,
    pub(crate) successful_cycles_in_a_row: u32,

    pub(crate) gc_cycle_time_history: DecayingMovingAverage,
    guaranteed_interval_sec: f64,
}

impl HeuristicsBase {
    /// Penalty recovery per successful concurrent cycle.
    pub const CONCURRENT_ADJUST: isize = -1;
    /// Penalty for a cycle that degenerated into stop-the-world.
    pub const DEGENERATE_PENALTY: isize = 10;
    /// Penalty for a full stop-the-world collection.
    pub const FULL_PENALTY: isize = 20;

    pub fn new(options: &HeuristicsOptions) -> Self {
        Self {
            epoch: Instant::now(),
            cycle_start: 0.0,
            last_cycle_end: 0.0,
            gc_times_learned: 0,
            gc_time_penalties: 0,
            degenerated_cycles_in_a_row: 0,
            successful_cycles_in_a_row: 0,
            gc_cycle_time_history: DecayingMovingAverage::new(
                options.moving_average_samples,
                options.decay_factor,
            ),
            guaranteed_interval_sec: options.guaranteed_gc_interval_ms as f64 / 1000.0,
        }
    }

    /// Monotonic seconds since this heuristic was created.
    pub(crate) fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    pub fn record_cycle_start(&mut self) {
        self.cycle_start = self.now();
    }

    pub fn record_cycle_end(&mut self) {
        self.last_cycle_end = self.now();
    }

    pub fn elapsed_cycle_time(&self) -> f64 {
        self.now() - self.cycle_start
    }

    pub fn gc_times_learned(&self) -> usize {
        self.gc_times_learned
    }

    pub fn degenerated_cycles_in_a_row(&self) -> u32 {
        self.degenerated_cycles_in_a_row
    }

    pub fn successful_cycles_in_a_row(&self) -> u32 {
        self.successful_cycles_in_a_row
    }

    pub fn gc_time_penalties(&self) -> isize {
        self.gc_time_penalties
    }

    pub fn cycle_time_history(&self) -> &DecayingMovingAverage {
        &self.gc_cycle_time_history
    }

    /// Abbreviated cycles finish before evacuation and say little about how
    /// long a real cycle takes, so they neither feed the time history nor
    /// count as learning.
    pub fn record_success_concurrent(&mut self, abbreviated: bool) {
        self.degenerated_cycles_in_a_row = 0;
        self.successful_cycles_in_a_row += 1;
        if !abbreviated {
            let elapsed = self.elapsed_cycle_time();
            self.gc_cycle_time_history.add(elapsed);
            self.gc_times_learned += 1;
        }
        self.adjust_penalty(Self::CONCURRENT_ADJUST);
    }

    pub fn record_success_degenerated(&mut self) {
        self.degenerated_cycles_in_a_row += 1;
        self.successful_cycles_in_a_row = 0;
        self.adjust_penalty(Self::DEGENERATE_PENALTY);
    }

    pub fn record_success_full(&mut self) {
        self.degenerated_cycles_in_a_row = 0;
        self.successful_cycles_in_a_row = 0;
        self.adjust_penalty(Self::FULL_PENALTY);
    }

    /// Penalties are a percentage of capacity subtracted from the allocation
    /// headroom, so they stay within `[0, 100]`.
    pub fn adjust_penalty(&mut self, step: isize) {
        self.gc_time_penalties = (self.gc_time_penalties + step).clamp(0, 100);
    }

    /// Fallback trigger shared by all variants: collect when the guaranteed
    /// interval since the last cycle has passed, to keep metadata from
    /// accumulating on an otherwise idle heap.
    pub fn should_start_gc(&self) -> bool {
        let last_time_ms = (self.now() - self.last_cycle_end) * 1000.0;
        let periodic_gc = last_time_ms > self.guaranteed_interval_sec * 1000.0;
        if periodic_gc {
            info!(
                "Trigger: Time since last GC ({:.0} ms) is larger than guaranteed interval ({:.0} ms)",
                last_time_ms,
                self.guaranteed_interval_sec * 1000.0
            );
        }
        periodic_gc
    }
}
