// src/extractors/mod.rs
pub mod entities;
pub mod lists;
pub mod report;
pub mod section;
pub mod table;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use report::{parse, ReportDocument};
#[allow(unused_imports)]
pub use table::BiomarkerRow;
