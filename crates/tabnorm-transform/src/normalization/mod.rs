//! Value-level normalization.
//!
//! - **datetime**: date shape detection and `YYYY-MM-DD` conversion
//! - **boolean**: boolean token detection and `true`/`false` conversion
//! - **text**: control-character stripping and blank detection

pub mod boolean;
pub mod datetime;
pub mod text;

pub use boolean::{classify_boolean, convert_boolean};
pub use datetime::{classify_date, convert_date};
pub use text::{is_blank, strip_control_chars};
