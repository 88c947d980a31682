//! Tunables for the heap model and the trigger/selection heuristics.
//!
//! Flag ingestion belongs to the embedding collector; this crate only takes
//! plain options structs. The defaults mirror a production concurrent
//! region-based collector tuned for server workloads.

/// Shape of the heap the heuristics operate on.
#[derive(Clone, Copy, Debug)]
pub struct HeapOptions {
    /// Two generations (young and old) when true, a single global
    /// generation otherwise.
    pub generational: bool,
    pub max_capacity: usize,
    /// Young generation capacity; ignored in single generation mode.
    pub young_capacity: usize,
    pub region_size_bytes: usize,
    /// Region age at which live objects are promoted to the old generation.
    pub initial_tenuring_threshold: u32,
}

impl Default for HeapOptions {
    fn default() -> Self {
        Self::for_heap_size(512 * 1024 * 1024)
    }
}

impl HeapOptions {
    pub const MIN_REGION_SIZE: usize = 256 * 1024;
    pub const MAX_REGION_SIZE: usize = 32 * 1024 * 1024;
    pub const TARGET_NUM_REGIONS: usize = 2048;

    /// Derives a region size for `max_capacity` aiming at
    /// [`Self::TARGET_NUM_REGIONS`] regions, clamped to the supported region
    /// size range and rounded down to a power of two.
    pub fn for_heap_size(max_capacity: usize) -> Self {
        let mut region_size = max_capacity / Self::TARGET_NUM_REGIONS;
        region_size = region_size.clamp(Self::MIN_REGION_SIZE, Self::MAX_REGION_SIZE);
        if !region_size.is_power_of_two() {
            region_size = region_size.next_power_of_two() / 2;
        }
        Self {
            generational: false,
            max_capacity,
            young_capacity: max_capacity / 4,
            region_size_bytes: region_size,
            initial_tenuring_threshold: 7,
        }
    }

    pub fn generational(mut self, young_capacity: usize) -> Self {
        self.generational = true;
        self.young_capacity = young_capacity;
        self
    }

    pub fn num_regions(&self) -> usize {
        self.max_capacity / self.region_size_bytes
    }
}

/// Tunables consumed by the adaptive heuristics.
///
/// Percentages apply to the owning generation's soft capacity for the trigger
/// thresholds and to the region size for the selection thresholds.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicsOptions {
    /// Initial margin of error, in standard deviations, applied to the cycle
    /// time and allocation rate estimates.
    pub initial_confidence: f64,
    /// Initial z-score above which an allocation rate sample counts as a
    /// spike.
    pub initial_spike_threshold: f64,
    /// History weight kept by the decaying averages on every new sample.
    pub decay_factor: f64,
    /// Upper bound on how often the allocation rate is sampled.
    pub sample_frequency_hz: u32,
    /// Allocation rate window length expressed in seconds of sampling.
    pub sample_size_seconds: f64,
    /// Window length of the end-of-cycle availability average.
    pub moving_average_samples: usize,

    /// Region garbage percentage below which a region is not worth
    /// evacuating once the minimum garbage floor is met.
    pub garbage_threshold_pct: usize,
    /// Region garbage percentage below which a region is never evacuated.
    pub ignore_garbage_threshold_pct: usize,

    /// Free percentage under which a cycle starts unconditionally.
    pub min_free_threshold_pct: usize,
    /// More conservative free percentage used while still learning the
    /// workload.
    pub init_free_threshold_pct: usize,
    /// Number of successful cycles treated as the learning phase.
    pub learning_steps: usize,

    /// Percentage of capacity withheld from the allocation headroom to
    /// absorb allocation spikes.
    pub alloc_spike_factor_pct: usize,

    /// Percentage of capacity reserved for evacuation in single generation
    /// mode.
    pub evac_reserve_pct: usize,
    /// Expected evacuation overhead; divides the reserve into a live-byte
    /// budget.
    pub evac_waste: f64,
    /// Same for old generation evacuation, which copies more conservatively.
    pub old_evac_waste: f64,

    /// A cycle starts regardless of pressure when this much time passed
    /// since the last one, in milliseconds.
    pub guaranteed_gc_interval_ms: u64,
}

impl Default for HeuristicsOptions {
    fn default() -> Self {
        Self {
            initial_confidence: 1.8,
            initial_spike_threshold: 1.8,
            decay_factor: 0.5,
            sample_frequency_hz: 10,
            sample_size_seconds: 10.0,
            moving_average_samples: 10,
            garbage_threshold_pct: 25,
            ignore_garbage_threshold_pct: 5,
            min_free_threshold_pct: 10,
            init_free_threshold_pct: 70,
            learning_steps: 5,
            alloc_spike_factor_pct: 5,
            evac_reserve_pct: 5,
            evac_waste: 1.2,
            old_evac_waste: 1.4,
            guaranteed_gc_interval_ms: 5 * 60 * 1000,
        }
    }
}

impl HeuristicsOptions {
    /// Number of allocation rate samples covered by the configured sampling
    /// window.
    pub fn rate_window_samples(&self) -> usize {
        ((self.sample_size_seconds * self.sample_frequency_hz as f64) as usize).max(1)
    }

    pub fn sample_interval_sec(&self) -> f64 {
        1.0 / self.sample_frequency_hz as f64
    }
}
