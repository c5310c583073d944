//! Road network representation.
//!
//! # Data layout
//!
//! The graph stores its cities in a fixed ordered `Vec<City>` and its roads
//! in a dense **N×N weight matrix**, flattened row-major:
//!
//! ```text
//! weights[from.index() * N + to.index()]
//! ```
//!
//! A cell of 0 means "no road"; consequently a genuine zero-distance road
//! cannot be represented, and writing 0 into a cell *is* the removal
//! operation.  The matrix is sized once at construction and never resized.
//!
//! Dense storage is deliberate: the datasets this tool serves are a few
//! dozen cities, where an N×N block of `u32` is smaller than any adjacency
//! list and the route search's row scan is a contiguous read.

use rn_core::{City, CityId};

use crate::router::{self, Route};
use crate::{GraphError, GraphResult};

/// Directed, weighted road graph over a fixed city list.
#[derive(Debug)]
pub struct RoadNetwork {
    /// Cities in file order; the city numbered `k` is at position `k - 1`.
    cities: Vec<City>,
    /// Flat row-major N×N distance matrix; 0 = no road.
    weights: Vec<u32>,
}

impl RoadNetwork {
    /// Construct a network from parsed city records and a road list.
    ///
    /// `road_text` is one continuous whitespace-separated stream of integer
    /// triples `from to distance` (city numbers are 1-based).  Any
    /// non-integer token, or a trailing incomplete triple, aborts
    /// construction with [`GraphError::Parse`].
    ///
    /// City numbers are expected to be dense and in file order (record `k`
    /// carries number `k`); ids in the road list that fall outside the city
    /// list are a caller contract violation, not a recoverable error.
    pub fn build(cities: Vec<City>, road_text: &str) -> GraphResult<Self> {
        debug_assert!(
            cities.iter().enumerate().all(|(i, c)| c.id.index() == i),
            "city numbers must be dense and in file order"
        );
        let n = cities.len();
        let mut network = RoadNetwork { cities, weights: vec![0; n * n] };

        let mut tokens = road_text.split_whitespace();
        while let Some(first) = tokens.next() {
            let from = parse_city_number(first)?;
            let to = parse_city_number(next_in_triple(&mut tokens)?)?;
            let distance = parse_distance(next_in_triple(&mut tokens)?)?;
            network.set_road(from, to, distance);
        }
        Ok(network)
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    /// Number of cities (the matrix dimension).
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of roads currently present (nonzero matrix cells).
    pub fn road_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0).count()
    }

    // ── City access ───────────────────────────────────────────────────────

    /// Cities in storage order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The city with the given number.  Out-of-range ids are a contract
    /// violation and panic on the index.
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }

    /// Case-sensitive lookup by city code.  An unknown code is an ordinary
    /// absence, not an error.
    pub fn find_city(&self, code: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.code == code)
    }

    // ── Road access & mutation ────────────────────────────────────────────

    /// Flat matrix offset of the cell `from → to`.
    #[inline]
    fn cell(&self, from: CityId, to: CityId) -> usize {
        from.index() * self.cities.len() + to.index()
    }

    /// Stored distance of the road `from → to`; 0 means no road.
    #[inline]
    pub fn road_weight(&self, from: CityId, to: CityId) -> u32 {
        self.weights[self.cell(from, to)]
    }

    /// Create or remove a road.
    ///
    /// Returns `true` only when a **new** road was created (the cell was
    /// empty and `weight` is nonzero).  On an occupied cell the stored
    /// distance is kept — unless `weight` is 0, which clears the cell: a
    /// distance of 0 is the removal request, and it always returns `false`.
    pub fn set_road(&mut self, from: CityId, to: CityId, weight: u32) -> bool {
        let at = self.cell(from, to);
        let cell = &mut self.weights[at];
        if *cell == 0 {
            *cell = weight;
            weight != 0
        } else {
            if weight == 0 {
                *cell = 0;
            }
            false
        }
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Shortest route `from → to`.  See [`router`] for the search
    /// procedure; the returned codes run end-to-start, and a no-path result
    /// is the zero-distance empty route.
    pub fn shortest_route(&self, from: CityId, to: CityId) -> Route {
        router::shortest_route(self, from, to)
    }
}

// ── Road-stream tokens ────────────────────────────────────────────────────────

fn next_in_triple<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> GraphResult<&'a str> {
    tokens
        .next()
        .ok_or_else(|| GraphError::Parse("road list ends mid-triple".into()))
}

fn parse_city_number(token: &str) -> GraphResult<CityId> {
    token
        .parse::<u32>()
        .map(CityId)
        .map_err(|_| GraphError::Parse(format!("bad city number {token:?} in road list")))
}

fn parse_distance(token: &str) -> GraphResult<u32> {
    token
        .parse::<u32>()
        .map_err(|_| GraphError::Parse(format!("bad distance {token:?} in road list")))
}
