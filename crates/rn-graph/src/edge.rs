//! Transient road-edge value used during a route search.

use rn_core::CityId;

/// One directed road considered by the route search: source city, target
/// city, and the stored distance.
///
/// Edges are created on the fly from the weight matrix while a query runs
/// and are never stored in the network itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadEdge {
    pub from:   CityId,
    pub to:     CityId,
    pub weight: u32,
}

impl RoadEdge {
    /// Zero-weight edge between no cities.  Occupies slot 0 of the
    /// [`EdgeQueue`](crate::EdgeQueue) and doubles as its exhaustion
    /// marker: a dequeued weight of 0 means no real candidate remained.
    pub const PLACEHOLDER: RoadEdge = RoadEdge {
        from:   CityId::INVALID,
        to:     CityId::INVALID,
        weight: 0,
    };
}
