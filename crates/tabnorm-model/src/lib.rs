pub mod column;
pub mod error;
pub mod options;
pub mod stats;

pub use column::{Column, ColumnType, TypeTable};
pub use error::{ModelError, Result};
pub use options::{
    DEFAULT_FALLBACK_ENCODING, DEFAULT_PROGRESS_INTERVAL, DEFAULT_SAMPLE_SIZE, NormalizeOptions,
    ShortRowPolicy,
};
pub use stats::RunStats;
