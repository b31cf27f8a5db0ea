//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types (validated, ready to serialize for the chart)
//! - `wire.rs` — Raw serde structs matching subgraph responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — State containers (symbol catalog snapshots)
//! - `client.rs` — Sub-client with the slice's subgraph queries

pub mod history;
pub mod pair;
pub mod symbol;
pub mod transaction;
