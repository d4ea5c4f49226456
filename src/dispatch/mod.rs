pub mod dispatcher;
pub mod invocation;
pub mod usage;
