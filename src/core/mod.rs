//! Core business logic
//!
//! - [`ingest`] - Line parsing, validation and per-company deduplication
//! - [`writer`] - Sorting and serialization of each company's records
//! - [`pipeline`] - Orchestration of one run from input file to output sink
//! - [`summary`] - Run counters and reporting

pub mod ingest;
pub mod pipeline;
pub mod summary;
pub mod writer;
