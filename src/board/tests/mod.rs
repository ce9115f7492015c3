//! Board module tests, split by category:
//! - `perft.rs` - move generation node-count oracles
//! - `make_unmake.rs` - reversible move application
//! - `edge_cases.rs` - castling, en passant, promotion corners
//! - `search.rs` - terminal scores and search behavior
//! - `proptest.rs` - property-based tests

mod make_unmake;
mod search;
