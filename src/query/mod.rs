//! Query helpers built on top of the suffix index
//!
//! - [`scan`] - Brute-force reference scan
//! - [`compare`] - Timing and agreement checks between scan and index
//! - [`rank`] - Completion suggestion ranking

pub mod compare;
pub mod rank;
pub mod scan;

pub use compare::{Comparison, sample_patterns, verify_patterns};
pub use rank::{DEFAULT_SUGGESTION_LIMIT, Suggestion, closest_distance, suggest};
pub use scan::brute_force;
