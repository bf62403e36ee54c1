//! Configuration module

pub mod settings;

pub use settings::{OutputSettings, ScannerSettings, Settings};
