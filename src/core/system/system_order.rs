//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. Dispatch (queued stimulus requests applied to the registries)
//! 2. Maintain (timers decayed, expired / invalidated entries evicted)
//! Rendering consumers (outline tint, debug trail) are ordered `.after(SenseSet::Maintain)`.
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum SenseSet {
    Dispatch,
    Maintain,
}
