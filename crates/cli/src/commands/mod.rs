//! One module per mode of operation

pub mod exec;
pub mod export;
pub mod get;
