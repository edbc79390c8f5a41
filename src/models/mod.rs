pub mod entry;
pub mod garden;
pub mod report;
pub mod stats;
