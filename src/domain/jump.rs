//! Solar-system jump adjacency and range-bounded reachability.
//!
//! A [`JumpGraph`] holds the stargate connections of a single region. Only
//! jumps that start and end in the same region are recorded, so a graph
//! never leads out of its region. [`JumpMap`] groups the graphs of every
//! region and is built once from the static jump table.
//!
//! # Examples
//!
//! ```
//! use evetrade::domain::id::{RegionId, SolarSystemId};
//! use evetrade::domain::jump::{JumpMap, SystemJump};
//!
//! let region = RegionId::new(1);
//! let (a, b, c) = (SolarSystemId::new(1), SolarSystemId::new(2), SolarSystemId::new(3));
//!
//! let map = JumpMap::from_jumps([
//!     SystemJump::new(region, a, b, region),
//!     SystemJump::new(region, b, c, region),
//! ]);
//!
//! let graph = map.graph(region).unwrap();
//! assert_eq!(graph.distance(a, c, 5), Some(2));
//! assert!(graph.is_within(a, c, 2));
//! assert!(!graph.is_within(a, c, 1));
//! ```

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::id::{RegionId, SolarSystemId};

/// One row of the static stargate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemJump {
    /// Region the jump starts in.
    pub from_region: RegionId,
    /// System the jump starts in.
    pub from_system: SolarSystemId,
    /// System the jump ends in.
    pub to_system: SolarSystemId,
    /// Region the jump ends in.
    pub to_region: RegionId,
}

impl SystemJump {
    /// Create a jump record.
    #[must_use]
    pub const fn new(
        from_region: RegionId,
        from_system: SolarSystemId,
        to_system: SolarSystemId,
        to_region: RegionId,
    ) -> Self {
        Self {
            from_region,
            from_system,
            to_system,
            to_region,
        }
    }

    /// True when both ends lie in the same region.
    #[must_use]
    pub fn is_intra_region(&self) -> bool {
        self.from_region == self.to_region
    }
}

/// Stargate adjacency of one region.
///
/// Stored as a multimap from system to its neighbours. Duplicate edges are
/// dropped, so feeding both directions of a gate is harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpGraph {
    adjacency: HashMap<SolarSystemId, Vec<SolarSystemId>>,
}

impl JumpGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a one-way jump.
    pub fn connect(&mut self, from: SolarSystemId, to: SolarSystemId) {
        let neighbours = self.adjacency.entry(from).or_default();
        if !neighbours.contains(&to) {
            neighbours.push(to);
        }
    }

    /// Record a gate usable in both directions.
    pub fn connect_both(&mut self, a: SolarSystemId, b: SolarSystemId) {
        self.connect(a, b);
        self.connect(b, a);
    }

    /// Neighbours of a system, empty for unknown systems.
    #[must_use]
    pub fn neighbours(&self, system: SolarSystemId) -> &[SolarSystemId] {
        self.adjacency.get(&system).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of systems with at least one outgoing jump.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no jumps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Shortest jump count from `origin` to `target`, if it is at most
    /// `max_jumps`.
    ///
    /// Breadth-first search carrying the depth of every queued system. The
    /// target matches when it is dequeued, so `origin == target` is distance
    /// zero even for systems absent from the graph. Systems are not expanded
    /// past `max_jumps`.
    #[must_use]
    pub fn distance(
        &self,
        origin: SolarSystemId,
        target: SolarSystemId,
        max_jumps: u32,
    ) -> Option<u32> {
        let mut visited = HashSet::from([origin]);
        let mut queue = VecDeque::from([(origin, 0u32)]);

        while let Some((current, depth)) = queue.pop_front() {
            if current == target {
                return Some(depth);
            }
            if depth == max_jumps {
                continue;
            }

            for &next in self.neighbours(current) {
                if visited.insert(next) {
                    queue.push_back((next, depth + 1));
                }
            }
        }

        None
    }

    /// True if `target` is at most `max_jumps` jumps from `origin`.
    #[must_use]
    pub fn is_within(&self, origin: SolarSystemId, target: SolarSystemId, max_jumps: u32) -> bool {
        self.distance(origin, target, max_jumps).is_some()
    }

    /// Jump counts from `origin` to every system within `max_jumps`.
    ///
    /// Single-source variant of [`JumpGraph::distance`] for callers that
    /// test many targets against the same origin.
    #[must_use]
    pub fn distances_from(
        &self,
        origin: SolarSystemId,
        max_jumps: u32,
    ) -> HashMap<SolarSystemId, u32> {
        let mut distances = HashMap::from([(origin, 0u32)]);
        let mut queue = VecDeque::from([(origin, 0u32)]);

        while let Some((current, depth)) = queue.pop_front() {
            if depth == max_jumps {
                continue;
            }
            for &next in self.neighbours(current) {
                if !distances.contains_key(&next) {
                    distances.insert(next, depth + 1);
                    queue.push_back((next, depth + 1));
                }
            }
        }

        distances
    }
}

/// Jump graphs of every region, built from the static jump table.
#[derive(Debug, Clone, Default)]
pub struct JumpMap {
    regions: HashMap<RegionId, JumpGraph>,
}

impl JumpMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build region graphs from jump records, dropping inter-region jumps.
    pub fn from_jumps(jumps: impl IntoIterator<Item = SystemJump>) -> Self {
        let mut map = Self::new();
        for jump in jumps {
            map.insert(jump);
        }
        map
    }

    /// Add one jump record as a two-way gate. Inter-region jumps are ignored.
    pub fn insert(&mut self, jump: SystemJump) {
        if !jump.is_intra_region() {
            return;
        }
        self.regions
            .entry(jump.from_region)
            .or_default()
            .connect_both(jump.from_system, jump.to_system);
    }

    /// Graph of a region, if any intra-region jumps were recorded for it.
    #[must_use]
    pub fn graph(&self, region: RegionId) -> Option<&JumpGraph> {
        self.regions.get(&region)
    }

    /// Number of regions with a graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if no region has a graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sys(id: u32) -> SolarSystemId {
        SolarSystemId::new(id)
    }

    /// 1 - 2 - 3 - 4
    fn chain() -> JumpGraph {
        let mut graph = JumpGraph::new();
        graph.connect_both(sys(1), sys(2));
        graph.connect_both(sys(2), sys(3));
        graph.connect_both(sys(3), sys(4));
        graph
    }

    #[test]
    fn same_system_is_zero_jumps() {
        let graph = chain();
        assert_eq!(graph.distance(sys(2), sys(2), 0), Some(0));
        // Systems without gates still reach themselves.
        assert_eq!(JumpGraph::new().distance(sys(9), sys(9), 0), Some(0));
    }

    #[test]
    fn chain_distances_respect_range() {
        let graph = chain();
        assert!(!graph.is_within(sys(1), sys(4), 2));
        assert!(graph.is_within(sys(1), sys(4), 3));
        assert!(graph.is_within(sys(2), sys(4), 2));
        assert!(!graph.is_within(sys(2), sys(4), 1));
    }

    #[test]
    fn shortest_path_wins_over_long_branch() {
        // 1 - 2 - 3 - 4 - 5 and a shortcut 1 - 5
        let mut graph = chain();
        graph.connect_both(sys(4), sys(5));
        graph.connect_both(sys(1), sys(5));

        assert_eq!(graph.distance(sys(1), sys(5), 10), Some(1));
        assert_eq!(graph.distance(sys(1), sys(4), 10), Some(2));
    }

    #[test]
    fn branching_levels_are_counted_per_depth() {
        // Star: 1 connects to 2, 3, 4; each leaf connects to one more system.
        let mut graph = JumpGraph::new();
        for (leaf, tail) in [(2, 12), (3, 13), (4, 14)] {
            graph.connect_both(sys(1), sys(leaf));
            graph.connect_both(sys(leaf), sys(tail));
        }

        for tail in [12, 13, 14] {
            assert_eq!(graph.distance(sys(1), sys(tail), 2), Some(2));
            assert_eq!(graph.distance(sys(1), sys(tail), 1), None);
        }
    }

    #[test]
    fn unreachable_target() {
        let mut graph = chain();
        graph.connect_both(sys(10), sys(11));
        assert_eq!(graph.distance(sys(1), sys(11), 100), None);
    }

    #[test]
    fn distances_from_matches_pairwise_search() {
        let mut graph = chain();
        graph.connect_both(sys(2), sys(7));
        graph.connect_both(sys(7), sys(4));

        let all = graph.distances_from(sys(1), 3);
        for target in [1, 2, 3, 4, 7] {
            assert_eq!(all.get(&sys(target)).copied(), graph.distance(sys(1), sys(target), 3));
        }
    }

    #[test]
    fn jump_map_keeps_only_intra_region_jumps() {
        let (r1, r2) = (RegionId::new(1), RegionId::new(2));
        let map = JumpMap::from_jumps([
            SystemJump::new(r1, sys(1), sys(2), r1),
            SystemJump::new(r1, sys(2), sys(1), r1),
            SystemJump::new(r1, sys(2), sys(20), r2),
            SystemJump::new(r2, sys(20), sys(2), r1),
        ]);

        assert_eq!(map.len(), 1);
        let graph = map.graph(r1).unwrap();
        assert_eq!(graph.neighbours(sys(2)), &[sys(1)]);
        assert!(map.graph(r2).is_none());
    }
}
