//! Carton - The shared toolbox for Maquette.
//!
//! Like the carton an artist carries between studio and gallery, this crate
//! holds the small utilities every other Maquette crate reaches for:
//!
//! - **Hashing**: re-exports of `rustc-hash` maps and sets
//! - **Naming**: word splitting and case conversion for labels and ids
//! - **Time**: timestamps for schema metadata and generated ids
//!
//! # Example
//!
//! ```
//! use maquette_carton::naming::to_title_words;
//!
//! assert_eq!(to_title_words("firstName"), "First Name");
//! assert_eq!(to_title_words("created_at"), "Created At");
//! ```

pub mod naming;
pub mod time;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

pub use naming::{split_words, to_pascal_case, to_title_words};
pub use time::{now_iso, timestamp_millis};
