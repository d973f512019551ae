//! Configuration sources, added to the builder in precedence order.

pub mod config_file;
pub mod environment;
