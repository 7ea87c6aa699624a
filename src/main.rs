//! Survivor main entry point.
//!
//! A small 2D prototype written in Rust using:
//! - **raylib** for windowing, graphics, and keyboard input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! A knight sprite walks over a dark green field under WASD control. Its run
//! animation plays only while it moves, at a fixed number of steps per second
//! regardless of the display frame rate.
//!
//! # Main Loop
//!
//! 1. Parse the command line and load `config.ini` (defaults if absent)
//! 2. Open the raylib window, load textures, spawn the player
//! 3. Run the frame schedule until the window is asked to close:
//!    - sample input, move and turn the player
//!    - clear and draw the world (ground, monsters, player)
//!    - count the frame and step the run animation on cadence
//! 4. Release every texture, then close the window
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use survivor::events::switchfullscreen::{SwitchFullScreenEvent, switch_fullscreen_observer};
use survivor::game;
use survivor::resources::gameconfig::GameConfig;
use survivor::resources::input::InputState;
use survivor::resources::playerinput::PlayerInput;
use survivor::systems::animation::animation_cadence;
use survivor::systems::input::{sample_player_input, update_input_state};
use survivor::systems::playercontroller::player_input_controller;
use survivor::systems::render::render_system;

/// Survivor, a 2D sprite-walker prototype
#[derive(Parser)]
#[command(version, about = "Walk a knight around with WASD. F11 toggles fullscreen.")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    /// A path given here must exist.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in fullscreen mode, overriding the configuration.
    #[arg(long)]
    fullscreen: bool,

    /// Write the default configuration and exit.
    /// Optionally provide a path (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    write_default_config: Option<Option<PathBuf>>,
}

fn load_config(cli: &Cli) -> Result<GameConfig, String> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };

    if cli.config.is_some() || config.config_path.exists() {
        config.load_from_file()?;
    } else {
        info!(
            "No config file at {:?}, using defaults",
            config.config_path
        );
    }

    if cli.fullscreen {
        config.fullscreen = true;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the game. Every resource acquired here is released before returning,
/// on the error paths too: textures explicitly, then the window when the
/// raylib handle drops.
fn run(cli: Cli) -> Result<(), String> {
    // Early-exit: write the default config and quit (no window needed)
    if let Some(maybe_path) = cli.write_default_config {
        let path = maybe_path.unwrap_or_else(|| PathBuf::from("./config.ini"));
        GameConfig::with_path(&path).save_to_file()?;
        println!("Default config written to {}", path.display());
        return Ok(());
    }

    let config = load_config(&cli).map_err(|e| format!("Invalid configuration: {}", e))?;

    // --------------- Raylib window ---------------
    let (w, h) = config.window_size();
    let mut builder = raylib::init();
    builder.size(w as i32, h as i32).title(&config.title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    if !rl.is_window_ready() {
        return Err("Failed to create the window".to_string());
    }
    if config.borderless {
        rl.toggle_borderless_windowed();
    }
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(config.frame_counter());
    world.insert_resource(InputState::default());
    world.insert_resource(PlayerInput::default());
    let start_fullscreen = config.fullscreen;
    world.insert_resource(config);

    if let Err(e) = game::setup(&mut world, &mut rl, &thread) {
        // Textures uploaded before the failure go while the window is open.
        game::release_textures(&mut world);
        return Err(format!("Startup failed: {}", e));
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_fullscreen_observer));
    // Ensure the observer is registered before any system may trigger it.
    world.flush();

    if start_fullscreen {
        world.trigger(SwitchFullScreenEvent {});
    }

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            sample_player_input,
            player_input_controller,
            // bounds, stats and monster updates slot in here
            render_system,
            animation_cadence,
        )
            .chain(),
    );

    if let Err(e) = update.initialize(&mut world) {
        game::release_textures(&mut world);
        return Err(format!("Failed to initialize schedule: {}", e));
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        update.run(&mut world);
        world.clear_trackers();
    }

    // Textures must go while the GL context is still alive.
    let released = game::release_textures(&mut world);
    info!("Released {} texture(s)", released);
    // Dropping the handle closes the window.
    drop(world);
    info!("Window closed, bye");
    Ok(())
}
