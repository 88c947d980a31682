//! Adaptive heuristics for a region-based concurrent garbage collector.
//!
//! A concurrent collector has to answer two questions continuously: when to
//! start the next cycle, and which regions to evacuate in it. Starting too
//! late degenerates into a stop-the-world pause, starting too early burns
//! CPU for nothing, and a badly sized collection set either overflows the
//! evacuation reserve or leaves the heap fragmented enough to collect again
//! immediately.
//!
//! This crate implements the policy side of those decisions:
//!
//! - [`moving_average::DecayingMovingAverage`] keeps windowed and
//!   exponentially decayed statistics over scalar series.
//! - [`heuristics::adaptive::AllocationRate`] samples the per-generation
//!   allocation counter into rate estimates with spike detection.
//! - [`heuristics::adaptive::AdaptiveHeuristics`] combines free memory, the
//!   learned cycle time and the rate estimates into the start decision,
//!   selects the collection set, and adapts its confidence parameters from
//!   cycle outcomes.
//!
//! The mechanical side of collection (marking, evacuation, reference
//! updates, region allocation) stays with the embedding collector; the types
//! in [`heap`], [`region`], [`free_set`] and [`collection_set`] model the
//! telemetry surface the heuristics consume.

pub mod collection_set;
pub mod config;
pub mod free_set;
pub mod heap;
pub mod heuristics;
pub mod moving_average;
pub mod region;

pub use collection_set::CollectionSet;
pub use config::{HeapOptions, HeuristicsOptions};
pub use free_set::FreeSet;
pub use heap::{Generation, GenerationKind, Heap};
pub use heuristics::adaptive::AdaptiveHeuristics;
pub use heuristics::{Heuristics, HeuristicsBase, RegionData};
pub use moving_average::DecayingMovingAverage;
pub use region::{HeapRegion, RegionAffiliation};

#[cfg(test)]
mod tests;
