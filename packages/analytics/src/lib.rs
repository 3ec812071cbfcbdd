#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregations over the fixture arrays.
//!
//! Everything here is a pure reduction recomputed on demand: the header
//! statistics shown above the map, the per-zone hotspot summary used by the
//! detail panel, and the analytics dashboard payload.

pub mod dashboard;
pub mod stats;

pub use dashboard::build_dashboard;
pub use stats::{header_stats, hotspot_summary, risk_level_counts};
