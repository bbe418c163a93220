//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts on reference positions
//! - `castling.rs` - Castling generation, itineraries and rights
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests over random games
//! - `serialization.rs` - JSON round-trips (feature `serde`)

mod castling;
#[cfg(feature = "serde")]
mod serialization;
