use atomic::{Atomic, Ordering};

/// Which generation a region currently serves.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum RegionAffiliation {
    Free,
    Young,
    Old,
}

/// Fixed-size slice of the heap, the unit of evacuation and reclamation.
///
/// The heuristics borrow regions and never free them; allocation bookkeeping
/// (top pointers, TLAB accounting, state transitions under the heap lock)
/// lives with the owning heap. What selection consumes is the telemetry kept
/// here: used bytes, live bytes established by marking, and the region age.
///
/// `live_data` is written by marking workers and therefore atomic. The rest
/// is only mutated under exclusive access between cycles; during collection
/// set selection the whole descriptor is read-only.
pub struct HeapRegion {
    index: usize,
    size: usize,
    affiliation: RegionAffiliation,
    age: u32,
    used: usize,
    live_data: Atomic<usize>,
}

impl HeapRegion {
    pub fn new(index: usize, size: usize) -> Self {
        Self {
            index,
            size,
            affiliation: RegionAffiliation::Free,
            age: 0,
            used: 0,
            live_data: Atomic::new(0),
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn affiliation(&self) -> RegionAffiliation {
        self.affiliation
    }

    pub fn set_affiliation(&mut self, affiliation: RegionAffiliation) {
        self.affiliation = affiliation;
    }

    #[inline]
    pub fn is_young(&self) -> bool {
        self.affiliation == RegionAffiliation::Young
    }

    #[inline]
    pub fn is_old(&self) -> bool {
        self.affiliation == RegionAffiliation::Old
    }

    /// Number of cycles the region survived without being collected.
    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn increment_age(&mut self) {
        self.age += 1;
    }

    #[inline]
    pub fn used(&self) -> usize {
        self.used
    }

    pub fn set_used(&mut self, used: usize) {
        debug_assert!(used <= self.size);
        self.used = used;
    }

    #[inline]
    pub fn free(&self) -> usize {
        self.size - self.used
    }

    #[inline]
    pub fn get_live_data_bytes(&self) -> usize {
        self.live_data.load(Ordering::Relaxed)
    }

    pub fn set_live_data_bytes(&self, bytes: usize) {
        self.live_data.store(bytes, Ordering::Relaxed);
    }

    pub fn increase_live_data(&self, bytes: usize) {
        self.live_data.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Bytes reclaimable by evacuating this region. Live data established by
    /// marking can lag behind `used`, never exceed it.
    #[inline]
    pub fn garbage(&self) -> usize {
        self.used.saturating_sub(self.get_live_data_bytes())
    }
}
