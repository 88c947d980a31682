use atomic::{Atomic, Ordering};
use parking_lot::{Mutex, MutexGuard};

use crate::collection_set::CollectionSet;
use crate::config::HeapOptions;
use crate::free_set::FreeSet;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GenerationKind {
    Young,
    Old,
    /// The whole heap. The only generation in single generation mode, and
    /// the generation driving collections that evacuate both sides in
    /// generational mode.
    Global,
}

/// Capacity and allocation accounting for one generation.
///
/// `bytes_allocated_since_gc_start` is bumped by mutator threads with relaxed
/// ordering and read by the controller; a stale read only delays a rate
/// sample. The soft capacity can be adjusted between cycles by the embedding
/// collector.
pub struct Generation {
    kind: GenerationKind,
    max_capacity: usize,
    soft_max_capacity: Atomic<usize>,
    used: Atomic<usize>,
    bytes_allocated_since_gc_start: Atomic<usize>,
}

impl Generation {
    pub fn new(kind: GenerationKind, max_capacity: usize) -> Self {
        Self {
            kind,
            max_capacity,
            soft_max_capacity: Atomic::new(max_capacity),
            used: Atomic::new(0),
            bytes_allocated_since_gc_start: Atomic::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            GenerationKind::Young => "Young",
            GenerationKind::Old => "Old",
            GenerationKind::Global => "Global",
        }
    }

    #[inline]
    pub fn is_young(&self) -> bool {
        self.kind == GenerationKind::Young
    }

    #[inline]
    pub fn is_old(&self) -> bool {
        self.kind == GenerationKind::Old
    }

    #[inline]
    pub fn is_global(&self) -> bool {
        self.kind == GenerationKind::Global
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn soft_max_capacity(&self) -> usize {
        self.soft_max_capacity.load(Ordering::Relaxed)
    }

    pub fn set_soft_max_capacity(&self, capacity: usize) {
        debug_assert!(capacity <= self.max_capacity);
        self.soft_max_capacity.store(capacity, Ordering::Relaxed);
    }

    pub fn used(&self) -> usize {
        self.used.load(Ordering::Relaxed)
    }

    pub fn set_used(&self, used: usize) {
        self.used.store(used, Ordering::Relaxed);
    }

    pub fn increase_used(&self, bytes: usize) {
        self.used.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn available(&self) -> usize {
        self.max_capacity.saturating_sub(self.used())
    }

    pub fn soft_available(&self) -> usize {
        self.soft_max_capacity().saturating_sub(self.used())
    }

    pub fn bytes_allocated_since_gc_start(&self) -> usize {
        self.bytes_allocated_since_gc_start.load(Ordering::Relaxed)
    }

    /// Mutator-side fast path, relaxed on purpose.
    pub fn increase_allocated(&self, bytes: usize) {
        self.bytes_allocated_since_gc_start
            .fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn reset_bytes_allocated_since_gc_start(&self) {
        self.bytes_allocated_since_gc_start
            .store(0, Ordering::Relaxed);
    }
}

/// Signal surface of the old generation heuristic.
///
/// Candidate selection for mixed evacuations happens elsewhere; the young
/// trigger only needs to know whether candidates are still queued so it can
/// expedite the cycles that will process them.
pub struct OldHeuristicsSignals {
    unprocessed_candidates: Atomic<usize>,
}

impl OldHeuristicsSignals {
    fn new() -> Self {
        Self {
            unprocessed_candidates: Atomic::new(0),
        }
    }

    pub fn unprocessed_old_collection_candidates(&self) -> usize {
        self.unprocessed_candidates.load(Ordering::Relaxed)
    }

    pub fn set_unprocessed_old_collection_candidates(&self, count: usize) {
        self.unprocessed_candidates.store(count, Ordering::Relaxed);
    }
}

/// Heap facade the heuristics consult.
///
/// Owns the generation accounting, the free set, the collection set and the
/// cross-generation signals (evacuation reserves, promotion potentials, mixed
/// evacuation candidates). Heuristics receive `&Heap` per call and look their
/// generation up by kind; neither the young nor the old heuristic owns the
/// other.
pub struct Heap {
    options: HeapOptions,
    young: Generation,
    old: Generation,
    global: Generation,
    free_set: FreeSet,
    collection_set: Mutex<CollectionSet>,
    old_heuristics: OldHeuristicsSignals,

    young_evac_reserve: Atomic<usize>,
    old_evac_reserve: Atomic<usize>,
    promotion_potential: Atomic<usize>,
    promotion_in_place_potential: Atomic<usize>,
}

impl Heap {
    pub fn new(options: HeapOptions) -> Self {
        let young_capacity = if options.generational {
            options.young_capacity
        } else {
            0
        };
        Self {
            young: Generation::new(GenerationKind::Young, young_capacity),
            old: Generation::new(GenerationKind::Old, options.max_capacity - young_capacity),
            global: Generation::new(GenerationKind::Global, options.max_capacity),
            free_set: FreeSet::new(options.max_capacity),
            collection_set: Mutex::new(CollectionSet::new(
                options.num_regions(),
                options.initial_tenuring_threshold,
            )),
            old_heuristics: OldHeuristicsSignals::new(),
            young_evac_reserve: Atomic::new(0),
            old_evac_reserve: Atomic::new(0),
            promotion_potential: Atomic::new(0),
            promotion_in_place_potential: Atomic::new(0),
            options,
        }
    }

    pub fn options(&self) -> &HeapOptions {
        &self.options
    }

    pub fn is_generational(&self) -> bool {
        self.options.generational
    }

    pub fn max_capacity(&self) -> usize {
        self.options.max_capacity
    }

    pub fn capacity(&self) -> usize {
        self.options.max_capacity
    }

    pub fn young_generation(&self) -> &Generation {
        &self.young
    }

    pub fn old_generation(&self) -> &Generation {
        &self.old
    }

    pub fn global_generation(&self) -> &Generation {
        &self.global
    }

    pub fn generation(&self, kind: GenerationKind) -> &Generation {
        match kind {
            GenerationKind::Young => &self.young,
            GenerationKind::Old => &self.old,
            GenerationKind::Global => &self.global,
        }
    }

    pub fn free_set(&self) -> &FreeSet {
        &self.free_set
    }

    /// Exclusively held by the controller while a heuristic fills it and by
    /// the evacuator afterwards.
    pub fn collection_set(&self) -> MutexGuard<'_, CollectionSet> {
        self.collection_set.lock()
    }

    pub fn old_heuristics(&self) -> &OldHeuristicsSignals {
        &self.old_heuristics
    }

    pub fn get_young_evac_reserve(&self) -> usize {
        self.young_evac_reserve.load(Ordering::Relaxed)
    }

    pub fn set_young_evac_reserve(&self, bytes: usize) {
        self.young_evac_reserve.store(bytes, Ordering::Relaxed);
    }

    pub fn get_old_evac_reserve(&self) -> usize {
        self.old_evac_reserve.load(Ordering::Relaxed)
    }

    pub fn set_old_evac_reserve(&self, bytes: usize) {
        self.old_evac_reserve.store(bytes, Ordering::Relaxed);
    }

    /// Bytes of live data in tenure-aged young regions that the next cycle
    /// could promote, established by the census after marking.
    pub fn get_promotion_potential(&self) -> usize {
        self.promotion_potential.load(Ordering::Relaxed)
    }

    pub fn set_promotion_potential(&self, bytes: usize) {
        self.promotion_potential.store(bytes, Ordering::Relaxed);
    }

    pub fn get_promotion_in_place_potential(&self) -> usize {
        self.promotion_in_place_potential.load(Ordering::Relaxed)
    }

    pub fn set_promotion_in_place_potential(&self, bytes: usize) {
        self.promotion_in_place_potential
            .store(bytes, Ordering::Relaxed);
    }
}
