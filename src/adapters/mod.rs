//! External integrations
//!
//! - [`filesystem`] - Input extension check, line reading, company file sinks
//! - [`traits`] - The [`OutputSink`](traits::OutputSink) seam used by the pipeline

pub mod filesystem;
pub mod traits;
