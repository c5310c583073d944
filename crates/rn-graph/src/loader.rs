//! Flat-file network loader.
//!
//! # File formats
//!
//! Two plain-text files describe a network:
//!
//! - **city file** — one [`City`] record per line (see
//!   [`City::parse`](rn_core::City::parse)); blank or whitespace-only
//!   lines are skipped.
//! - **road file** — whitespace/newline-separated integer triples
//!   `from to distance`, consumed as one continuous token stream.
//!
//! ```text
//! 1  AN  ANDOVER      91000  500        1 2 30
//! 2  BK  BAKERSVILLE  75000  2000       2 3 20
//! 3  CH  CHESTER      42000  900        1 3 90
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use rn_core::City;

use crate::network::RoadNetwork;
use crate::GraphResult;

/// Load a network from a city file and a road file.
pub fn load_network(city_path: &Path, road_path: &Path) -> GraphResult<RoadNetwork> {
    load_network_readers(File::open(city_path)?, File::open(road_path)?)
}

/// Like [`load_network`] but accepts any `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s) or for embedded datasets.
pub fn load_network_readers<C: Read, R: Read>(cities: C, roads: R) -> GraphResult<RoadNetwork> {
    let mut records = Vec::new();
    for line in BufReader::new(cities).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(City::parse(&line)?);
    }

    let mut road_text = String::new();
    BufReader::new(roads).read_to_string(&mut road_text)?;

    RoadNetwork::build(records, &road_text)
}
