//! Value and identifier transformations for tabnorm.
//!
//! This crate holds the pure parts of the normalization pipeline:
//!
//! - **sanitize**: column label to lowercase identifier
//! - **normalization**: date, boolean, and control-character value handling
//! - **inference**: per-column type decision from a sample window
//! - **plan**: column selection against an allow-list
//! - **row**: projection and conversion of one row at a time

pub mod inference;
pub mod normalization;
pub mod plan;
pub mod row;
pub mod sanitize;

pub use inference::{BOOLEAN_THRESHOLD, DATE_THRESHOLD, infer_types};
pub use normalization::{
    classify_boolean, classify_date, convert_boolean, convert_date, is_blank,
    strip_control_chars,
};
pub use plan::{ColumnPlan, plan_columns};
pub use row::{RowNormalizer, normalize_value};
pub use sanitize::{sanitize, sanitize_header};
