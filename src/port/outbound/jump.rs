//! Jump graph port.

use crate::domain::{JumpGraph, JumpMap, RegionId};

/// Supplies the intra-region stargate graph of a region.
pub trait JumpGraphProvider: Send + Sync {
    /// Adjacency of a region, `None` when the region has no recorded jumps.
    fn adjacency_for(&self, region_id: RegionId) -> Option<JumpGraph>;
}

impl JumpGraphProvider for JumpMap {
    fn adjacency_for(&self, region_id: RegionId) -> Option<JumpGraph> {
        self.graph(region_id).cloned()
    }
}
