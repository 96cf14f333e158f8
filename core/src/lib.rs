//! # Front Door takeover analysis
//!
//! The decision procedure and the pieces it is built from:
//!
//! * [`heuristic`]: pure checks on the CNAME target.
//! * [`probe`]: the two HTTP probes, written against the `HttpTransport` port.
//! * [`analyzer`]: runs the gates in order and produces one result per target.
//! * [`report`]: table and JSON rendering of a result set.

pub mod analyzer;
pub mod heuristic;
pub mod probe;
pub mod report;

pub use analyzer::DomainAnalyzer;
