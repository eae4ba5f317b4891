pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod rendering;
pub mod sense;

// Curated re-exports
pub use app::game::GamePlugin;
pub use crate::core::components::{Blip, BlipKind, Character, CustomDepth, SkeletalMesh};
pub use crate::core::config::SenseConfig;
pub use debug::SenseDebug;
pub use sense::{
    stop_continuous_stimulus, tick_sense, trigger_stimulus, SenseCommandsExt, SensePlugin,
    SenseRequest, SenseSystem, Stimulus,
};
