//! Adaptive trigger and collection set selection.
//!
//! The trigger learns the allocation rate and the concurrent cycle time
//! online and starts a cycle when the learned cycle time no longer fits in
//! the allocation headroom. Two confidence parameters, both expressed in
//! standard deviations, steer how conservative the decisions are: the margin
//! of error widens the cycle time and rate estimates, the spike threshold
//! gates the z-score test for bursty allocation. Cycle outcomes feed back
//! into both so the heuristic tightens after degenerated or full collections
//! and relaxes while the workload is stable.

use std::time::Instant;

use log::{debug, info};

use crate::collection_set::CollectionSet;
use crate::config::HeuristicsOptions;
use crate::heap::{GenerationKind, Heap};
use crate::heuristics::{Heuristics, HeuristicsBase, RegionData};
use crate::moving_average::DecayingMovingAverage;

/// Byte quantities in the trigger and selection log lines read best in
/// mebibytes.
fn mib(bytes: usize) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Allocation rate estimator fed from the per-generation allocation counter.
///
/// Sampling is rate limited to the configured frequency; oversampling would
/// flood the window with near-duplicate observations and starve the decay.
/// The raw rates and the running window average form two separate series:
/// the mean is taken from the raw series, the confidence width from the
/// averaged one, which is much more stable.
pub struct AllocationRate {
    epoch: Instant,
    last_sample_time: f64,
    last_sample_value: usize,
    interval_sec: f64,
    rate: DecayingMovingAverage,
    rate_avg: DecayingMovingAverage,
}

impl AllocationRate {
    pub fn new(options: &HeuristicsOptions) -> Self {
        let window = options.rate_window_samples();
        let epoch = Instant::now();
        Self {
            epoch,
            last_sample_time: 0.0,
            last_sample_value: 0,
            interval_sec: options.sample_interval_sec(),
            rate: DecayingMovingAverage::new(window, options.decay_factor),
            rate_avg: DecayingMovingAverage::new(window, options.decay_factor),
        }
    }

    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Feeds one reading of the cumulative allocation counter and returns
    /// the instantaneous rate, or 0.0 when the sample was dropped.
    pub fn sample(&mut self, allocated: usize) -> f64 {
        let now = self.now();
        self.sample_at(now, allocated)
    }

    fn sample_at(&mut self, now: f64, allocated: usize) -> f64 {
        let mut rate = 0.0;
        if now - self.last_sample_time > self.interval_sec {
            // A counter reading below the previous one means the counter was
            // reset between samples; the delta is meaningless then, but the
            // timestamps still move forward.
            if allocated >= self.last_sample_value {
                rate = self.instantaneous_rate(now, allocated);
                self.rate.add(rate);
                self.rate_avg.add(self.rate.avg());
            }

            self.last_sample_time = now;
            self.last_sample_value = allocated;
        }
        rate
    }

    fn instantaneous_rate(&self, time: f64, allocated: usize) -> f64 {
        let allocation_delta = allocated.saturating_sub(self.last_sample_value);
        let time_delta_sec = time - self.last_sample_time;
        if time_delta_sec > 0.0 {
            allocation_delta as f64 / time_delta_sec
        } else {
            0.0
        }
    }

    /// One-sided upper confidence bound on the allocation rate.
    pub fn upper_bound(&self, sds: f64) -> f64 {
        self.rate.davg() + sds * self.rate_avg.dsd()
    }

    /// Whether `rate` sits more than `threshold` standard deviations above
    /// the windowed average.
    pub fn is_spiking(&self, rate: f64, threshold: f64) -> bool {
        if rate <= 0.0 {
            return false;
        }
        let sd = self.rate.sd();
        if sd > 0.0 {
            // The sample may already sit in the window; in practice that
            // barely moves the z-score.
            let z_score = (rate - self.rate.avg()) / sd;
            if z_score > threshold {
                return true;
            }
        }
        false
    }

    /// The collector resets the allocation counter when a cycle starts, so
    /// the sampler has to restart from zero as well.
    pub fn allocation_counter_reset(&mut self) {
        self.last_sample_time = self.now();
        self.last_sample_value = 0;
    }
}

/// Which test fired the last cycle, so the post-cycle feedback knows which
/// parameter to adjust.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Trigger {
    Rate,
    Spike,
    Other,
}

fn saturate(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Adaptive heuristic for one generation.
pub struct AdaptiveHeuristics {
    pub(crate) base: HeuristicsBase,
    generation: GenerationKind,
    options: HeuristicsOptions,

    margin_of_error_sd: f64,
    spike_threshold_sd: f64,
    last_trigger: Trigger,
    available: DecayingMovingAverage,
    allocation_rate: AllocationRate,
}

impl AdaptiveHeuristics {
    /// Margin widening applied after a full collection, in standard
    /// deviations.
    pub const FULL_PENALTY_SD: f64 = 0.2;
    /// Margin widening applied after a degenerated collection.
    pub const DEGENERATE_PENALTY_SD: f64 = 0.1;

    /// Band of end-of-cycle availability z-scores treated as expected; only
    /// cycles ending outside it adjust the trigger parameters.
    pub const LOWEST_EXPECTED_AVAILABLE_AT_END: f64 = -0.5;
    pub const HIGHEST_EXPECTED_AVAILABLE_AT_END: f64 = 0.5;

    /// Bounds on both confidence parameters. 0.319 standard deviations is
    /// roughly a two-tailed 25% interval, 3.291 roughly 99.9%.
    pub const MINIMUM_CONFIDENCE: f64 = 0.319;
    pub const MAXIMUM_CONFIDENCE: f64 = 3.291;

    pub fn new(generation: GenerationKind, options: HeuristicsOptions) -> Self {
        Self {
            base: HeuristicsBase::new(&options),
            generation,
            margin_of_error_sd: options.initial_confidence,
            spike_threshold_sd: options.initial_spike_threshold,
            last_trigger: Trigger::Other,
            available: DecayingMovingAverage::new(
                options.moving_average_samples,
                options.decay_factor,
            ),
            allocation_rate: AllocationRate::new(&options),
            options,
        }
    }

    pub fn generation_kind(&self) -> GenerationKind {
        self.generation
    }

    pub fn margin_of_error(&self) -> f64 {
        self.margin_of_error_sd
    }

    pub fn spike_threshold(&self) -> f64 {
        self.spike_threshold_sd
    }

    pub fn last_trigger(&self) -> Trigger {
        self.last_trigger
    }

    fn min_free_threshold(&self, heap: &Heap) -> usize {
        heap.generation(self.generation).soft_max_capacity() / 100
            * self.options.min_free_threshold_pct
    }

    fn avg_cycle_time(&self) -> f64 {
        self.base.gc_cycle_time_history.davg()
            + self.margin_of_error_sd * self.base.gc_cycle_time_history.dsd()
    }

    pub fn record_cycle_start(&mut self, heap: &Heap) {
        self.base.record_cycle_start();
        heap.generation(self.generation)
            .reset_bytes_allocated_since_gc_start();
        self.allocation_rate.allocation_counter_reset();
    }

    pub fn record_cycle_end(&mut self) {
        self.base.record_cycle_end();
    }

    pub fn should_start_gc(&mut self, heap: &Heap) -> bool {
        let generation = heap.generation(self.generation);
        let capacity = generation.soft_max_capacity();
        let mut available = generation.soft_available();
        let allocated = generation.bytes_allocated_since_gc_start();

        debug!(
            "should_start_gc ({})? available: {}, soft_max_capacity: {}, allocated: {}",
            generation.name(),
            available,
            capacity,
            allocated
        );

        // The collector reserve eats into what the mutator may use; judge
        // depletion by the mutator view when it is the smaller one.
        let usable = heap.free_set().available();
        if usable < available {
            debug!(
                "Usable ({:.1}M) is less than available ({:.1}M)",
                mib(usable),
                mib(available)
            );
            available = usable;
        }

        // Track the allocation rate even if this probe ends up triggering
        // for another reason.
        let rate = self.allocation_rate.sample(allocated);
        self.last_trigger = Trigger::Other;

        // The old generation is kept as small as possible and collected on
        // its own schedule; depletion triggers do not apply to it.
        if !generation.is_old() {
            let min_threshold = self.min_free_threshold(heap);
            if available < min_threshold {
                info!(
                    "Trigger ({}): Free ({:.1}M) is below minimum threshold ({:.1}M)",
                    generation.name(),
                    mib(available),
                    mib(min_threshold)
                );
                return true;
            }

            let max_learn = self.options.learning_steps;
            if self.base.gc_times_learned() < max_learn {
                let init_threshold = capacity / 100 * self.options.init_free_threshold_pct;
                if available < init_threshold {
                    info!(
                        "Trigger ({}): Learning {} of {}. Free ({:.1}M) is below initial threshold ({:.1}M)",
                        generation.name(),
                        self.base.gc_times_learned() + 1,
                        max_learn,
                        mib(available),
                        mib(init_threshold)
                    );
                    return true;
                }
            }

            // Headroom the mutator can still burn through before the cycle
            // has to be done: free memory minus the spike buffer and the
            // penalties accumulated from degenerated and full collections.
            let mut allocation_headroom = available;
            let spike_headroom = capacity / 100 * self.options.alloc_spike_factor_pct;
            let penalties = capacity / 100 * self.base.gc_time_penalties() as usize;

            allocation_headroom -= allocation_headroom.min(penalties);
            allocation_headroom -= allocation_headroom.min(spike_headroom);

            let avg_cycle_time = self.avg_cycle_time();
            let avg_alloc_rate = self.allocation_rate.upper_bound(self.margin_of_error_sd);
            debug!(
                "{}: average GC time: {:.2} ms, allocation rate: {:.0} B/s",
                generation.name(),
                avg_cycle_time * 1000.0,
                avg_alloc_rate
            );

            if avg_cycle_time > allocation_headroom as f64 / avg_alloc_rate {
                info!(
                    "Trigger ({}): Average GC time ({:.2} ms) is above the time for average \
                     allocation rate ({:.1}M/s) to deplete free headroom ({:.1}M) (margin of error = {:.2})",
                    generation.name(),
                    avg_cycle_time * 1000.0,
                    mib(avg_alloc_rate as usize),
                    mib(allocation_headroom),
                    self.margin_of_error_sd
                );
                info!(
                    "Free headroom: {:.1}M (free) - {:.1}M (spike) - {:.1}M (penalties) = {:.1}M",
                    mib(available),
                    mib(spike_headroom),
                    mib(penalties),
                    mib(allocation_headroom)
                );
                self.last_trigger = Trigger::Rate;
                return true;
            }

            let is_spiking = self.allocation_rate.is_spiking(rate, self.spike_threshold_sd);
            if is_spiking && avg_cycle_time > allocation_headroom as f64 / rate {
                info!(
                    "Trigger ({}): Average GC time ({:.2} ms) is above the time for instantaneous \
                     allocation rate ({:.1}M/s) to deplete free headroom ({:.1}M) (spike threshold = {:.2})",
                    generation.name(),
                    avg_cycle_time * 1000.0,
                    mib(rate as usize),
                    mib(allocation_headroom),
                    self.spike_threshold_sd
                );
                self.last_trigger = Trigger::Spike;
                return true;
            }

            // Promotions and mixed evacuations take markedly longer than
            // plain young cycles, so once there is old work queued up, start
            // the young cycle that unblocks it right away.
            if heap.is_generational() && generation.is_young() {
                let promo_potential = heap.get_promotion_potential();
                if promo_potential > 0 {
                    // An absurd potential means unsigned underflow upstream.
                    debug_assert!(promo_potential < heap.capacity());
                    info!(
                        "Trigger ({}): expedite promotion of {:.1}M",
                        generation.name(),
                        mib(promo_potential)
                    );
                    return true;
                }
                let promo_in_place_potential = heap.get_promotion_in_place_potential();
                if promo_in_place_potential > 0 {
                    debug_assert!(promo_in_place_potential < heap.capacity());
                    info!(
                        "Trigger ({}): expedite promotion in place of {:.1}M",
                        generation.name(),
                        mib(promo_in_place_potential)
                    );
                    return true;
                }
                let mixed_candidates = heap
                    .old_heuristics()
                    .unprocessed_old_collection_candidates();
                if mixed_candidates > 0 {
                    info!(
                        "Trigger ({}): expedite mixed evacuation of {} regions",
                        generation.name(),
                        mixed_candidates
                    );
                    return true;
                }
            }
        }

        self.base.should_start_gc()
    }

    /// Picks the regions to evacuate out of `data`, best garbage first.
    ///
    /// Two limits shape the choice. The collection set must not out-grow the
    /// evacuation budget, or evacuation itself runs out of memory and forces
    /// a full collection. And it must reclaim at least `min_garbage` bytes
    /// when free memory is short, or the free threshold is breached again
    /// right after the cycle and the collector runs back-to-back on a
    /// fragmented heap. The garbage threshold is soft until the floor is
    /// met; the ignore threshold is a hard cutoff below which evacuating a
    /// region can never pay off.
    pub fn choose_collection_set_from_regiondata(
        &mut self,
        cset: &mut CollectionSet,
        data: &mut [RegionData<'_>],
        actual_free: usize,
        heap: &Heap,
    ) {
        let region_size = heap.options().region_size_bytes;
        let garbage_threshold = region_size * self.options.garbage_threshold_pct / 100;
        let ignore_threshold = region_size * self.options.ignore_garbage_threshold_pct / 100;
        let tenuring_threshold = heap.options().initial_tenuring_threshold;

        let is_generational = heap.is_generational();
        let is_global = self.generation == GenerationKind::Global;
        let capacity = heap.young_generation().max_capacity();

        // Memory reclaimed from young so far, counting whole-region
        // promotions: their live data leaves young too, so from the young
        // side it may as well be garbage.
        let mut cur_young_garbage = 0;

        data.sort_unstable_by(|a, b| b.garbage.cmp(&a.garbage));

        if is_generational {
            for entry in data.iter() {
                let r = entry.region;
                if cset.is_preselected(r.index()) {
                    debug_assert!(
                        r.age() >= tenuring_threshold,
                        "preselected regions must have tenure age"
                    );
                    // The whole region is promoted; its promotion reserve is
                    // accounted for already and it draws on neither
                    // evacuation budget.
                    cur_young_garbage += r.garbage();
                    cset.add_region(r);
                }
            }
            if is_global {
                let max_young_cset =
                    (heap.get_young_evac_reserve() as f64 / self.options.evac_waste) as usize;
                let mut young_cur_cset = 0;
                let max_old_cset =
                    (heap.get_old_evac_reserve() as f64 / self.options.old_evac_waste) as usize;
                let mut old_cur_cset = 0;
                let free_target =
                    capacity * self.options.min_free_threshold_pct / 100 + max_young_cset;
                let min_garbage = free_target.saturating_sub(actual_free);

                info!(
                    "Adaptive CSet Selection for GLOBAL. Max Young Evacuation: {:.1}M, \
                     Max Old Evacuation: {:.1}M, Actual Free: {:.1}M.",
                    mib(max_young_cset),
                    mib(max_old_cset),
                    mib(actual_free)
                );

                for entry in data.iter() {
                    let r = entry.region;
                    if cset.is_preselected(r.index()) {
                        continue;
                    }
                    let mut add_region = false;
                    if r.is_old() {
                        let new_cset = old_cur_cset + r.get_live_data_bytes();
                        if new_cset <= max_old_cset && r.garbage() > garbage_threshold {
                            add_region = true;
                            old_cur_cset = new_cset;
                        }
                    } else if r.age() < tenuring_threshold {
                        let new_cset = young_cur_cset + r.get_live_data_bytes();
                        let region_garbage = r.garbage();
                        let new_garbage = cur_young_garbage + region_garbage;
                        let add_regardless =
                            region_garbage > ignore_threshold && new_garbage < min_garbage;
                        if new_cset <= max_young_cset
                            && (add_regardless || region_garbage > garbage_threshold)
                        {
                            add_region = true;
                            young_cur_cset = new_cset;
                            cur_young_garbage = new_garbage;
                        }
                    }
                    // Aged regions that were not preselected stay out: old
                    // gen has no room for their to-be-promoted live objects.

                    if add_region {
                        cset.add_region(r);
                    }
                }
            } else {
                // Young collection, or a mixed evacuation whose old
                // candidates the caller already appended.
                let max_cset =
                    (heap.get_young_evac_reserve() as f64 / self.options.evac_waste) as usize;
                let mut cur_cset = 0;
                let free_target = capacity * self.options.min_free_threshold_pct / 100 + max_cset;
                let min_garbage = free_target.saturating_sub(actual_free);

                info!(
                    "Adaptive CSet Selection for YOUNG. Max Evacuation: {:.1}M, Actual Free: {:.1}M.",
                    mib(max_cset),
                    mib(actual_free)
                );

                for entry in data.iter() {
                    let r = entry.region;
                    if cset.is_preselected(r.index()) {
                        continue;
                    }
                    if r.age() < tenuring_threshold {
                        let new_cset = cur_cset + r.get_live_data_bytes();
                        let region_garbage = r.garbage();
                        let new_garbage = cur_young_garbage + region_garbage;
                        let add_regardless =
                            region_garbage > ignore_threshold && new_garbage < min_garbage;
                        debug_assert!(
                            r.is_young(),
                            "only young candidates expected in the data array"
                        );
                        if new_cset <= max_cset
                            && (add_regardless || region_garbage > garbage_threshold)
                        {
                            cur_cset = new_cset;
                            cur_young_garbage = new_garbage;
                            cset.add_region(r);
                        }
                    }
                }
            }
        } else {
            let capacity = heap.max_capacity();
            let max_cset = ((capacity as f64 / 100.0 * self.options.evac_reserve_pct as f64)
                / self.options.evac_waste) as usize;
            let free_target = capacity * self.options.min_free_threshold_pct / 100 + max_cset;
            let min_garbage = free_target.saturating_sub(actual_free);

            info!(
                "Adaptive CSet Selection. Target Free: {:.1}M, Actual Free: {:.1}M, \
                 Max Evacuation: {:.1}M, Min Garbage: {:.1}M",
                mib(free_target),
                mib(actual_free),
                mib(max_cset),
                mib(min_garbage)
            );

            let mut cur_cset = 0;
            let mut cur_garbage = 0;

            for entry in data.iter() {
                let r = entry.region;

                let new_cset = cur_cset + r.get_live_data_bytes();
                let new_garbage = cur_garbage + r.garbage();

                // Candidates are sorted best first; once the budget is hit
                // every remaining region is worse.
                if new_cset > max_cset {
                    break;
                }

                if new_garbage < min_garbage || r.garbage() > garbage_threshold {
                    cset.add_region(r);
                    cur_cset = new_cset;
                    cur_garbage = new_garbage;
                }
            }
        }

        info!(
            "Chosen CSet evacuates young: {:.1}M (of which at least: {:.1}M are to be promoted), \
             old: {:.1}M",
            mib(cset.get_young_bytes_reserved_for_evacuation()),
            mib(cset.get_young_bytes_to_be_promoted()),
            mib(cset.get_old_bytes_reserved_for_evacuation())
        );
    }

    /// Conservative estimate of how much the mutator may still allocate
    /// before one of the triggers fires, assuming the current cycle gives
    /// back `young_regions_to_be_reclaimed` regions. Meaningful for the
    /// young generation only.
    pub fn bytes_of_allocation_runway_before_gc_trigger(
        &mut self,
        young_regions_to_be_reclaimed: usize,
        heap: &Heap,
    ) -> usize {
        debug_assert!(self.generation == GenerationKind::Young);

        let generation = heap.generation(self.generation);
        let capacity = generation.soft_max_capacity();
        let usage = generation.used();
        let available = capacity.saturating_sub(usage);
        let allocated = generation.bytes_allocated_since_gc_start();

        let available_young_collected =
            heap.collection_set().get_young_available_bytes_collected();
        let anticipated_available = (available
            + young_regions_to_be_reclaimed * heap.options().region_size_bytes)
            .saturating_sub(available_young_collected);

        let spike_headroom = capacity * self.options.alloc_spike_factor_pct / 100;
        let penalties = capacity * self.base.gc_time_penalties() as usize / 100;

        let rate = self.allocation_rate.sample(allocated);

        // The triggers fire when available memory no longer covers
        // avg_cycle_time times the (average or instantaneous) allocation
        // rate plus the spike buffer and penalties, so the runway under each
        // trigger is whatever anticipated availability exceeds that demand
        // by, floored at zero.
        let avg_cycle_time = self.avg_cycle_time();
        let avg_alloc_rate = self.allocation_rate.upper_bound(self.margin_of_error_sd);

        let demand_avg = avg_cycle_time * avg_alloc_rate + (penalties + spike_headroom) as f64;
        let evac_slack_avg = if (anticipated_available as f64) > demand_avg {
            (anticipated_available as f64 - demand_avg) as usize
        } else {
            0
        };

        let is_spiking = self.allocation_rate.is_spiking(rate, self.spike_threshold_sd);
        let evac_slack_spiking = if is_spiking {
            let demand_spiking = avg_cycle_time * rate + (penalties + spike_headroom) as f64;
            if (anticipated_available as f64) > demand_spiking {
                (anticipated_available as f64 - demand_spiking) as usize
            } else {
                0
            }
        } else {
            evac_slack_avg
        };

        let threshold = self.min_free_threshold(heap);
        let evac_min_threshold = anticipated_available.saturating_sub(threshold);
        evac_slack_spiking.min(evac_slack_avg).min(evac_min_threshold)
    }

    pub fn record_success_concurrent(&mut self, abbreviated: bool, heap: &Heap) {
        self.base.record_success_concurrent(abbreviated);

        let generation = heap.generation(self.generation);
        let available = generation.available().min(heap.free_set().available());

        let mut z_score = 0.0;
        let available_sd = self.available.sd();
        if available_sd > 0.0 {
            let available_avg = self.available.avg();
            z_score = (available as f64 - available_avg) / available_sd;
            debug!(
                "{} Available: {:.1}M, z-score={:.3}. Average available: {:.1}M +/- {:.1}M.",
                generation.name(),
                mib(available),
                z_score,
                mib(available_avg as usize),
                mib(available_sd as usize)
            );
        }

        self.available.add(available as f64);

        // A cycle ending with unusually little free memory means the trigger
        // that started it ran late; one ending with an unusually large
        // amount means it ran early. The z-score is not statistically tied
        // to the trigger parameters, but a worse score warrants a larger
        // adjustment, and a stable application converges to no adjustments
        // at all.
        if z_score < Self::LOWEST_EXPECTED_AVAILABLE_AT_END
            || z_score > Self::HIGHEST_EXPECTED_AVAILABLE_AT_END
        {
            // Flipped sign: a below-average outcome must make the trigger
            // fire earlier. Divided by 100 so per-success adjustments stay
            // an order of magnitude below the degenerated and full
            // penalties.
            self.adjust_last_trigger_parameters(z_score / -100.0);
        }
    }

    pub fn record_success_degenerated(&mut self) {
        self.base.record_success_degenerated();
        // Either trigger should have fired earlier to avoid this, so
        // tighten both.
        self.adjust_margin_of_error(Self::DEGENERATE_PENALTY_SD);
        self.adjust_spike_threshold(Self::DEGENERATE_PENALTY_SD);
    }

    pub fn record_success_full(&mut self) {
        self.base.record_success_full();
        self.adjust_margin_of_error(Self::FULL_PENALTY_SD);
        self.adjust_spike_threshold(Self::FULL_PENALTY_SD);
    }

    fn adjust_last_trigger_parameters(&mut self, amount: f64) {
        match self.last_trigger {
            Trigger::Rate => self.adjust_margin_of_error(amount),
            Trigger::Spike => self.adjust_spike_threshold(amount),
            Trigger::Other => {}
        }
    }

    fn adjust_margin_of_error(&mut self, amount: f64) {
        self.margin_of_error_sd = saturate(
            self.margin_of_error_sd + amount,
            Self::MINIMUM_CONFIDENCE,
            Self::MAXIMUM_CONFIDENCE,
        );
        debug!("Margin of error now {:.2}", self.margin_of_error_sd);
    }

    /// Note the flipped sign: a positive adjustment lowers the threshold,
    /// making spike detection more sensitive.
    fn adjust_spike_threshold(&mut self, amount: f64) {
        self.spike_threshold_sd = saturate(
            self.spike_threshold_sd - amount,
            Self::MINIMUM_CONFIDENCE,
            Self::MAXIMUM_CONFIDENCE,
        );
        debug!("Spike threshold now: {:.2}", self.spike_threshold_sd);
    }
}

impl Heuristics for AdaptiveHeuristics {
    fn record_cycle_start(&mut self, heap: &Heap) {
        AdaptiveHeuristics::record_cycle_start(self, heap);
    }

    fn record_cycle_end(&mut self) {
        AdaptiveHeuristics::record_cycle_end(self);
    }

    fn should_start_gc(&mut self, heap: &Heap) -> bool {
        AdaptiveHeuristics::should_start_gc(self, heap)
    }

    fn choose_collection_set_from_regiondata(
        &mut self,
        cset: &mut CollectionSet,
        data: &mut [RegionData<'_>],
        actual_free: usize,
        heap: &Heap,
    ) {
        AdaptiveHeuristics::choose_collection_set_from_regiondata(
            self, cset, data, actual_free, heap,
        );
    }

    fn record_success_concurrent(&mut self, abbreviated: bool, heap: &Heap) {
        AdaptiveHeuristics::record_success_concurrent(self, abbreviated, heap);
    }

    fn record_success_degenerated(&mut self) {
        AdaptiveHeuristics::record_success_degenerated(self);
    }

    fn record_success_full(&mut self) {
        AdaptiveHeuristics::record_success_full(self);
    }
}
