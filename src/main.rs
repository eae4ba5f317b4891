use std::path::PathBuf;

use anyhow::{bail, Result};
use bevy::prelude::*;
use clap::Parser;

use stimulus_sense::interaction::session::auto_close::SessionOptions;
use stimulus_sense::interaction::session::config_hot_reload::ConfigReloadSettings;
use stimulus_sense::{GamePlugin, SenseConfig, SenseDebug};

#[derive(Parser, Debug)]
#[command(name = "stimulus_sense", about = "Stimulus blip / outline demo")]
struct Args {
    /// RON config layers, merged in order (later files win).
    #[arg(long = "config", value_name = "PATH")]
    config: Vec<PathBuf>,
    /// Exit after this many seconds (0 = never).
    #[arg(long, default_value_t = 0.0)]
    auto_close: f32,
    /// Start with the blip trail visualization enabled.
    #[arg(long)]
    draw_trail: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let explicit = !args.config.is_empty();
    let paths = if explicit {
        args.config.clone()
    } else {
        ConfigReloadSettings::default().paths
    };

    // Load layered configuration (missing files are reported, defaults fill the gaps)
    let (cfg, used, errors) = SenseConfig::load_layered(paths.iter());
    if explicit && used.is_empty() {
        bail!("none of the config files could be loaded: {}", errors.join("; "));
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Stimulus Sense".into(),
                resolution: (1280.0, 720.0).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(cfg.clone())
        .insert_resource(ConfigReloadSettings {
            paths,
            ..default()
        })
        .insert_resource(SessionOptions {
            auto_close: args.auto_close,
        })
        .insert_resource(SenseDebug {
            draw_trail: args.draw_trail,
            ..default()
        })
        .add_plugins(GamePlugin)
        .add_systems(Startup, move || {
            // LogPlugin is live from here on
            for p in &used {
                info!("config layer loaded: {p}");
            }
            for e in &errors {
                warn!("config: {e}");
            }
            for w in cfg.validate() {
                warn!("config validation: {w}");
            }
        })
        .run();
    Ok(())
}
