//! Library side of the tabnorm command-line tool.
//!
//! The binary is a thin shell around [`pipeline`]; everything else here is
//! kept in the library so integration tests can drive a full run.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
