use crate::{
    AdaptiveHeuristics, CollectionSet, GenerationKind, Heap, HeapOptions, Heuristics,
    HeuristicsOptions, RegionData,
};
use crate::region::{HeapRegion, RegionAffiliation};

const MIB: usize = 1024 * 1024;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn young_region(index: usize, garbage: usize, live: usize, age: u32) -> HeapRegion {
    let mut r = HeapRegion::new(index, MIB);
    r.set_affiliation(RegionAffiliation::Young);
    r.set_age(age);
    r.set_used(garbage + live);
    r.set_live_data_bytes(live);
    r
}

#[test]
fn young_generation_cycle_lifecycle() {
    init_logging();

    let mut options = HeapOptions::for_heap_size(1024 * MIB).generational(256 * MIB);
    options.region_size_bytes = MIB;
    let heap = Heap::new(options);
    heap.set_young_evac_reserve(24 * MIB);

    let mut h = AdaptiveHeuristics::new(GenerationKind::Young, HeuristicsOptions::default());

    // Young gen nearly full and nothing learned yet: the learning phase
    // floor starts the first cycle.
    heap.young_generation().set_used(200 * MIB);
    heap.free_set().set_used(200 * MIB);
    assert!(h.should_start_gc(&heap));

    heap.young_generation().increase_allocated(8 * MIB);
    h.record_cycle_start(&heap);
    assert_eq!(heap.young_generation().bytes_allocated_since_gc_start(), 0);

    let regions: Vec<_> = (0..8)
        .map(|i| young_region(i, 700 * 1024, 200 * 1024, if i == 7 { 8 } else { 1 }))
        .collect();
    let mut data: Vec<_> = regions.iter().map(RegionData::new).collect();

    {
        let mut cset = heap.collection_set();
        cset.preselect_region(7);
        let actual_free = heap.free_set().available();
        h.choose_collection_set_from_regiondata(&mut cset, &mut data, actual_free, &heap);

        // All seven plain regions clear the garbage threshold, the tenured
        // one rides along through preselection.
        assert_eq!(cset.count(), 8);
        assert_eq!(cset.get_young_bytes_to_be_promoted(), 200 * 1024);
        assert!(cset.get_young_bytes_reserved_for_evacuation() >= 8 * 200 * 1024);
    }

    h.record_success_concurrent(false, &heap);
    h.record_cycle_end();
    assert_eq!(h.base.gc_times_learned(), 1);

    // With the cycle recorded the runway query has everything it needs.
    let runway = h.bytes_of_allocation_runway_before_gc_trigger(8, &heap);
    assert!(runway > 0);

    let mut cset = heap.collection_set();
    cset.clear();
    assert_eq!(cset.count(), 0);
}

#[test]
fn heuristics_as_trait_object() {
    init_logging();

    let mut options = HeapOptions::for_heap_size(256 * MIB);
    options.region_size_bytes = MIB;
    let heap = Heap::new(options);

    // A zero guaranteed interval degenerates the fallback trigger into
    // "always", which is what an idle-heap probe should then report.
    let mut heuristics_options = HeuristicsOptions::default();
    heuristics_options.guaranteed_gc_interval_ms = 0;
    let mut h: Box<dyn Heuristics> = Box::new(AdaptiveHeuristics::new(
        GenerationKind::Global,
        heuristics_options,
    ));

    assert!(h.should_start_gc(&heap));

    h.record_cycle_start(&heap);
    let regions: Vec<_> = (0..4)
        .map(|i| young_region(i, 800 * 1024, 100 * 1024, 0))
        .collect();
    let mut data: Vec<_> = regions.iter().map(RegionData::new).collect();

    let mut cset = CollectionSet::new(256, 7);
    h.choose_collection_set_from_regiondata(
        &mut cset,
        &mut data,
        heap.free_set().available(),
        &heap,
    );
    assert_eq!(cset.count(), 4);

    h.record_success_concurrent(false, &heap);
    h.record_cycle_end();
}

#[test]
fn repeated_degenerated_cycles_keep_tightening_until_saturated() {
    init_logging();

    let heap = Heap::new(HeapOptions::for_heap_size(256 * MIB));
    let mut h = AdaptiveHeuristics::new(GenerationKind::Global, HeuristicsOptions::default());

    let mut last_margin = h.margin_of_error();
    for _ in 0..40 {
        h.record_success_degenerated();
        assert!(h.margin_of_error() >= last_margin);
        last_margin = h.margin_of_error();
    }
    assert_eq!(h.margin_of_error(), AdaptiveHeuristics::MAXIMUM_CONFIDENCE);
    assert_eq!(h.spike_threshold(), AdaptiveHeuristics::MINIMUM_CONFIDENCE);

    // Successful concurrent cycles recover the time penalty but leave the
    // confidence parameters to the z-score feedback.
    let penalties_before = h.base.gc_time_penalties();
    h.record_success_concurrent(true, &heap);
    assert_eq!(h.base.gc_time_penalties(), penalties_before - 1);
    assert_eq!(h.margin_of_error(), AdaptiveHeuristics::MAXIMUM_CONFIDENCE);
}
