// This file is part of Stimulus Sense.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stand-in for the outline post-process material: maps [`CustomDepth`] stencil values
//! (100..=110 freshness) onto the emissive channel of the mesh's `StandardMaterial`.

use bevy::prelude::*;

use crate::core::components::CustomDepth;
use crate::core::system::system_order::SenseSet;
use crate::sense::outlines::{STENCIL_VALUE_BASE, STENCIL_VALUE_RANGE};

const OUTLINE_COLOR: LinearRgba = LinearRgba::rgb(1.0, 0.45, 0.1);
const MIN_GLOW: f32 = 0.25;
const MAX_GLOW: f32 = 4.0;

/// Emissive colour for a custom depth state. Disabled or out-of-band stencils emit nothing.
pub fn outline_emissive(depth: &CustomDepth) -> LinearRgba {
    let band = STENCIL_VALUE_BASE..=STENCIL_VALUE_BASE + STENCIL_VALUE_RANGE;
    if !depth.enabled || !band.contains(&depth.stencil) {
        return LinearRgba::BLACK;
    }
    let freshness = (depth.stencil - STENCIL_VALUE_BASE) as f32 / STENCIL_VALUE_RANGE as f32;
    OUTLINE_COLOR * (MIN_GLOW + (MAX_GLOW - MIN_GLOW) * freshness)
}

pub struct OutlineTintPlugin;

impl Plugin for OutlineTintPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_outline_tint.after(SenseSet::Maintain));
    }
}

fn apply_outline_tint(
    q: Query<(&CustomDepth, &MeshMaterial3d<StandardMaterial>), Changed<CustomDepth>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (depth, handle) in q.iter() {
        if let Some(mat) = materials.get_mut(&handle.0) {
            mat.emissive = outline_emissive(depth);
        }
    }
}
