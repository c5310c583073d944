//! `rn-graph` — directed road-network graph and shortest-route search.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`network`] | `RoadNetwork` (dense weight matrix over a city list)  |
//! | [`edge`]    | `RoadEdge` transient search value                     |
//! | [`queue`]   | `EdgeQueue` binary min-heap                           |
//! | [`router`]  | `Route`, the frontier-walk search and reconstruction  |
//! | [`loader`]  | city/road flat-file loading                           |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod edge;
pub mod error;
pub mod loader;
pub mod network;
pub mod queue;
pub mod router;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use edge::RoadEdge;
pub use error::{GraphError, GraphResult};
pub use loader::{load_network, load_network_readers};
pub use network::RoadNetwork;
pub use queue::EdgeQueue;
pub use router::Route;
