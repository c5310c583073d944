//! Shortest-route search.
//!
//! # Procedure
//!
//! This is a greedy frontier walk, not textbook Dijkstra: there is no
//! distance table and no settled set.  Each round loads the frontier
//! city's outgoing roads into a fresh [`EdgeQueue`] and takes candidates
//! in weight order:
//!
//! - a candidate reaching the destination ends the search;
//! - the zero-weight placeholder means the round ran dry — no path;
//! - a candidate whose target was already reached is discarded;
//! - otherwise the candidate is recorded and its target becomes the next
//!   frontier.
//!
//! The recorded edges double as the visited set (membership = "appears as
//! a target") and as the raw material for route reconstruction, which
//! re-scans them backward instead of keeping parent pointers.  Where two
//! recorded edges reach the same city, the backward scan prefers the
//! lighter one and restarts the trace from its position.
//!
//! Each query owns its queue and visited list; nothing is shared or
//! reused across queries.

use rn_core::CityId;

use crate::network::RoadNetwork;
use crate::{EdgeQueue, RoadEdge};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a route query: total distance plus the city codes along
/// the route in **end-to-start** order (display callers reverse them).
///
/// "No path" is the zero route: distance 0 and no codes.  A real road of
/// distance 0 cannot exist (0 marks an empty matrix cell), so the sentinel
/// is unambiguous within this representation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Sum of the traced road distances; 0 when no path was found.
    pub distance: u32,
    /// City codes from destination back to start; empty when no path.
    pub codes: Vec<String>,
}

impl Route {
    /// The no-path sentinel.
    pub fn none() -> Self {
        Route { distance: 0, codes: Vec::new() }
    }

    /// `true` if the query reached its destination.
    pub fn found(&self) -> bool {
        !self.codes.is_empty()
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Walk the network from `from` toward `to`.
///
/// Both ids must come from a real city lookup; the search indexes the
/// matrix with them directly.
pub fn shortest_route(network: &RoadNetwork, from: CityId, to: CityId) -> Route {
    let mut visited: Vec<RoadEdge> = Vec::new();
    let mut frontier = from;
    let mut found = false;

    'search: loop {
        // Fresh queue each round: only the current frontier's row competes.
        let mut candidates = EdgeQueue::new();
        for i in 0..network.city_count() {
            let target = CityId::from_index(i);
            let weight = network.road_weight(frontier, target);
            if weight != 0 {
                candidates.enqueue(RoadEdge { from: frontier, to: target, weight });
            }
        }

        loop {
            let edge = candidates.dequeue();
            if edge.to == to {
                visited.push(edge);
                found = true;
                break 'search;
            }
            if edge.weight == 0 {
                // Placeholder — this round has no usable candidate left.
                break 'search;
            }
            if visited.iter().any(|seen| seen.to == edge.to) {
                continue; // target already reached; take the next candidate
            }
            frontier = edge.to;
            visited.push(edge);
            break;
        }
    }

    if !found {
        return Route::none();
    }
    reconstruct(network, &visited, from)
}

// ── Reconstruction ────────────────────────────────────────────────────────────

/// Trace the visited list backward from the final edge, summing weights
/// and collecting codes end-to-start.
///
/// For the edge currently being traced, the predecessor is chosen among
/// earlier visited edges whose target equals the traced edge's source:
/// scanning from most recent to oldest, the first match is taken and then
/// replaced only on a strictly smaller weight, and the trace restarts from
/// the chosen edge's position.  `visited` must be non-empty with its last
/// edge reaching the destination.
pub(crate) fn reconstruct(network: &RoadNetwork, visited: &[RoadEdge], start: CityId) -> Route {
    let last = visited.len() - 1;
    let mut distance = visited[last].weight;
    let mut codes = vec![network.city(visited[last].to).code.clone()];
    let mut trace = last;

    let mut i = last;
    while i > 0 {
        i -= 1;
        if visited[i].to == visited[trace].from {
            let mut lowest = visited[i].weight;
            // Any strictly lighter edge into the same city wins the trace point.
            let mut j = i;
            while j > 0 {
                j -= 1;
                if visited[j].to == visited[trace].from && visited[j].weight < lowest {
                    lowest = visited[j].weight;
                    i = j;
                }
            }
            distance += lowest;
            codes.push(network.city(visited[trace].from).code.clone());
            trace = i;
        }
    }

    codes.push(network.city(start).code.clone());
    Route { distance, codes }
}
