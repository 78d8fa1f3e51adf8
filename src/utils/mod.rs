pub mod ci;
pub mod fs;
pub mod logger;
pub mod version;
