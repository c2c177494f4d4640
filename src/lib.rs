// Enrollment - per-company enrollment file splitter
// Copyright (c) 2025 Enrollment Contributors
// Licensed under the MIT License

//! # Enrollment
//!
//! Reads a comma-separated enrollment file (`userId,First Last,version,company`),
//! keeps the highest version of each user within each company, and writes one
//! sorted `{company}.csv` file per company. Lines that fail validation are
//! skipped and reported, in line order, after the files are written.
//!
//! ## Architecture
//!
//! - [`domain`] - Records, line errors and the error type
//! - [`core`] - Ingestion, deduplication, partition writing and the run pipeline
//! - [`adapters`] - Input reading and output sinks
//! - [`cli`] - Command-line interface
//! - [`config`] - Optional TOML configuration
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use enrollment::core::ingest::ingest;
//! use enrollment::core::writer::partition;
//!
//! let outcome = ingest([
//!     "1,John Doe,1,Acme",
//!     "1,John Doe,2,Acme",
//!     "2,Jane Roe,1,Acme",
//!     "bad,line",
//! ]);
//!
//! assert_eq!(outcome.errors.len(), 1);
//!
//! let outputs = partition(outcome.partition);
//! assert_eq!(outputs[0].file_name, "Acme.csv");
//! assert_eq!(outputs[0].contents, "1,John Doe,2,Acme\n2,Jane Roe,1,Acme");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
