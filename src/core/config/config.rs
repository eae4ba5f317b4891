use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BlipConfig {
    pub enabled: bool,
    /// Kind of entity spawned as a blip. `None` (or empty) disables spawning.
    pub kind: Option<String>,
    /// Seconds a blip stays alive before it is despawned.
    pub lifetime: f32,
}
impl Default for BlipConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            kind: Some("smell".into()),
            lifetime: 2.0,
        }
    }
}
impl BlipConfig {
    /// Kind to spawn, if blips are configured with a usable one.
    pub fn spawnable_kind(&self) -> Option<&str> {
        self.kind.as_deref().filter(|k| !k.trim().is_empty())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutlineConfig {
    pub enabled: bool,
    /// Seconds a non-continuous outline stays visible; also the stencil normalisation span.
    pub lifetime: f32,
}
impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lifetime: 10.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SenseConfig {
    pub blips: BlipConfig,
    pub outlines: OutlineConfig,
}

impl SenseConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
    /// Deep-merge every readable RON file in order (later files override earlier keys).
    /// Returns the config, the paths actually used and per-file errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        // lookup finishes before any insert touches the map
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        if let Some(ev) = existing {
                            merge_value(ev, v);
                            continue;
                        }
                        bm.insert(k, v);
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        match merged {
            Some(val) => match val.into_rust::<SenseConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (SenseConfig::default(), used, errors)
                }
            },
            None => (SenseConfig::default(), used, errors),
        }
    }
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.blips.enabled {
            if self.blips.spawnable_kind().is_none() {
                w.push("blips.enabled is true but blips.kind is unset; no blips will spawn".into());
            }
            if self.blips.lifetime <= 0.0 {
                w.push(format!(
                    "blips.lifetime {} <= 0; blips are despawned on the next tick",
                    self.blips.lifetime
                ));
            }
        }
        if self.outlines.enabled && self.outlines.lifetime <= 0.0 {
            w.push(format!(
                "outlines.lifetime {} <= 0; outlines vanish on the next tick and stencil freshness is meaningless",
                self.outlines.lifetime
            ));
        }
        if self.blips.lifetime > 600.0 {
            w.push(format!(
                "blips.lifetime {} very long; blip entities will accumulate",
                self.blips.lifetime
            ));
        }
        if !self.blips.enabled && !self.outlines.enabled {
            w.push("both blips and outlines disabled; stimuli have no visible effect".into());
        }
        w
    }
}
