pub mod orchestrator;
pub mod patcher;
pub mod reader;
pub mod summary;
