//! `rn-core` — foundational value types for the rn road-network tools.
//!
//! This crate is a dependency of every other `rn-*` crate.  It has no
//! `rn-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                         |
//! |-----------|----------------------------------|
//! | [`ids`]   | `CityId`                         |
//! | [`city`]  | `City` record and its parser     |
//! | [`error`] | `CoreError`, `CoreResult<T>`     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod city;
pub mod error;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use city::City;
pub use error::{CoreError, CoreResult};
pub use ids::CityId;
