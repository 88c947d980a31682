use atomic::{Atomic, Ordering};

/// Mutator view of free heap memory.
///
/// The collector reserve eats into the raw free byte count, so the trigger
/// heuristics must look at this set rather than at generation accounting
/// alone when judging how much room the mutator really has.
pub struct FreeSet {
    capacity: Atomic<usize>,
    used: Atomic<usize>,
}

impl FreeSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: Atomic::new(capacity),
            used: Atomic::new(0),
        }
    }

    /// Bytes the mutator may still allocate.
    pub fn available(&self) -> usize {
        self.capacity
            .load(Ordering::Relaxed)
            .saturating_sub(self.used.load(Ordering::Relaxed))
    }

    pub fn capacity(&self) -> usize {
        self.capacity.load(Ordering::Relaxed)
    }

    pub fn used(&self) -> usize {
        self.used.load(Ordering::Relaxed)
    }

    /// Rebuilt by the heap after reclamation and reserve sizing.
    pub fn set_capacity(&self, capacity: usize) {
        self.capacity.store(capacity, Ordering::Relaxed);
    }

    pub fn set_used(&self, used: usize) {
        self.used.store(used, Ordering::Relaxed);
    }

    pub fn increase_used(&self, bytes: usize) {
        self.used.fetch_add(bytes, Ordering::Relaxed);
    }
}
