//! Command implementations for crypto-toolkit

pub mod decrypt;
pub mod scan;

pub use decrypt::run_decrypt;
pub use scan::run_scan;
