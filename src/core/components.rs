// This file is part of Stimulus Sense.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

/// Marker component identifying a character that can be outlined by a stimulus.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Character;

/// Marker for skeletal mesh entities. The primary body mesh is the first direct child
/// of a [`Character`] carrying this marker; a `SkeletalMesh` child of that body mesh is
/// an outer layer (clothing / accessory) and takes precedence for outline rendering.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SkeletalMesh;

/// Custom depth render state written by the outline registry.
/// `stencil` is consumed by the outline material (100..=110 = freshness, 0 = off).
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CustomDepth {
    pub enabled: bool,
    pub stencil: i32,
}

/// Marker for blip entities spawned by the stimulus dispatcher.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Blip;

/// Configured kind name a blip was spawned as (visual systems key off this).
#[derive(Component, Debug, Clone, PartialEq, Eq, Deref)]
pub struct BlipKind(pub String);
