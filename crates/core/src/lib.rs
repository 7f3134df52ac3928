//! # Anketa Core
//!
//! Foundation types for the Anketa form toolkit. This crate provides the
//! identifier types shared by every field crate.
//!
//! ## Key Components
//!
//! - **`FieldKey`**: normalized, validated identifier for field types and
//!   schema types ("number", "text", ...)
//! - **`KeyParseError`**: the reasons a raw identifier is rejected
//!
//! ## Usage
//!
//! ```
//! use anketa_core::FieldKey;
//!
//! let key: FieldKey = "Number Field".parse().unwrap();
//! assert_eq!(key.as_str(), "number_field");
//! ```

mod key;

pub use key::{FieldKey, KeyParseError};

/// Common prelude for Anketa crates
pub mod prelude {
    pub use crate::key::{FieldKey, KeyParseError};
}
