pub mod config;

pub use config::{BlipConfig, OutlineConfig, SenseConfig};
