pub mod context;
pub mod interrupt;
pub mod paths;
pub mod types;
