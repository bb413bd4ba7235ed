//! Derived display values for lake-level monitoring.
//!
//! This crate holds the computations between the raw records in the store
//! and what the presentation layer shows: comparison deltas against the
//! fixed offsets and pool thresholds, access-point OPEN/CAUTION/CLOSED
//! classification, feet-and-inches formatting, ordered-collection
//! reordering for the admin flows, and rolling-year history extraction.
//!
//! Everything here is a pure function of fully-materialized input: no
//! I/O, no caches, no shared state. Fetching readings and persisting
//! reorder assignments belong to `lakestats-sources` and `lakestats-db`.

pub mod access;
pub mod conditions;
pub mod format;
pub mod historical;
pub mod ordering;
