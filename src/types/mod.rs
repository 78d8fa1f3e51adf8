pub mod report;
pub mod rule;
pub mod version;
