//! Generic part substitutions keyed by (value, footprint).

mod table;

pub use table::SubstitutionTable;
