//! Utility modules for logging and testing

pub mod logging;
pub mod test;
