//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Every value
//! has a default, so a missing file (or a missing key) still yields a
//! playable setup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! title = gosurvivor
//! target_fps = 60
//! vsync = true
//! borderless = true
//! fullscreen = false
//!
//! [render]
//! sprite_scale = 3
//!
//! [animation]
//! frame_speed = 10
//! ; frames_per_step = 6
//!
//! [player]
//! name = Dude
//! sheet = assets/Heroes/Knight/Run/Run-Sheet.png
//! frame_size = 64
//! row_offset = 90
//! max_frame = 5
//! movement_speed = 3
//! flip = false
//!
//! [map]
//! ; ground_tile = assets/Environment/Green Woods/Assets/Tiles.png
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::animation::DEFAULT_MAX_FRAME;
use crate::components::stats::DEFAULT_MOVEMENT_SPEED;
use crate::resources::framecounter::FrameCounter;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TITLE: &str = "gosurvivor";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_BORDERLESS: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_SPRITE_SCALE: f32 = 3.0;
const DEFAULT_FRAME_SPEED: u32 = 10;
const DEFAULT_PLAYER_NAME: &str = "Dude";
const DEFAULT_PLAYER_SHEET: &str = "assets/Heroes/Knight/Run/Run-Sheet.png";
const DEFAULT_FRAME_SIZE: u32 = 64;
const DEFAULT_ROW_OFFSET: u32 = 90;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, render scale, animation cadence and the assets
/// the player and map are built from.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    pub title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Drop the window decorations.
    pub borderless: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Uniform scale applied to every sprite when drawn.
    pub sprite_scale: f32,
    /// Animation steps per second.
    pub frame_speed: u32,
    /// Rendered frames per animation step. Overrides `frame_speed` when set.
    pub frames_per_step: Option<u32>,
    pub player_name: String,
    /// Path to the player's run sprite sheet.
    pub player_sheet: String,
    /// Side of one square sheet cell in pixels.
    pub player_frame_size: u32,
    /// Vertical pixel offset of the animation row inside the sheet.
    pub player_row_offset: u32,
    /// Index of the last column of the animation row.
    pub player_max_frame: u32,
    pub player_movement_speed: u32,
    /// Mirror the sheet horizontally once, at load time.
    pub player_flip: bool,
    /// Optional static ground tile drawn under everything else.
    pub ground_tile: Option<String>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn section_key_error(section: &str, key: &str, e: impl std::fmt::Display) -> String {
    format!("Invalid value for [{}] {}: {}", section, key, e)
}

fn read_u32(ini: &Ini, section: &str, key: &str, target: &mut u32) -> Result<(), String> {
    if let Some(value) = ini
        .getuint(section, key)
        .map_err(|e| section_key_error(section, key, e))?
    {
        *target = u32::try_from(value).map_err(|e| section_key_error(section, key, e))?;
    }
    Ok(())
}

fn read_bool(ini: &Ini, section: &str, key: &str, target: &mut bool) -> Result<(), String> {
    if let Some(value) = ini
        .getbool(section, key)
        .map_err(|e| section_key_error(section, key, e))?
    {
        *target = value;
    }
    Ok(())
}

fn read_string(ini: &Ini, section: &str, key: &str) -> Option<String> {
    ini.get(section, key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl GameConfig {
    /// Create a new configuration with the default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            borderless: DEFAULT_BORDERLESS,
            fullscreen: DEFAULT_FULLSCREEN,
            sprite_scale: DEFAULT_SPRITE_SCALE,
            frame_speed: DEFAULT_FRAME_SPEED,
            frames_per_step: None,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            player_sheet: DEFAULT_PLAYER_SHEET.to_string(),
            player_frame_size: DEFAULT_FRAME_SIZE,
            player_row_offset: DEFAULT_ROW_OFFSET,
            player_max_frame: DEFAULT_MAX_FRAME,
            player_movement_speed: DEFAULT_MOVEMENT_SPEED,
            player_flip: false,
            ground_tile: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Missing values retain their current values. Returns an error if the
    /// file cannot be read or a present value cannot be parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| format!("Failed to load config file {:?}: {}", self.config_path, e))?;
        self.apply_ini(&ini)?;

        info!(
            "Loaded config: {}x{} window, fps={}, scale={}, frame_speed={}, sheet={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.sprite_scale,
            self.frame_speed,
            self.player_sheet
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&ini)
    }

    fn apply_ini(&mut self, ini: &Ini) -> Result<(), String> {
        // [window] section
        read_u32(ini, "window", "width", &mut self.window_width)?;
        read_u32(ini, "window", "height", &mut self.window_height)?;
        if let Some(title) = read_string(ini, "window", "title") {
            self.title = title;
        }
        read_u32(ini, "window", "target_fps", &mut self.target_fps)?;
        read_bool(ini, "window", "vsync", &mut self.vsync)?;
        read_bool(ini, "window", "borderless", &mut self.borderless)?;
        read_bool(ini, "window", "fullscreen", &mut self.fullscreen)?;

        // [render] section
        if let Some(scale) = ini
            .getfloat("render", "sprite_scale")
            .map_err(|e| section_key_error("render", "sprite_scale", e))?
        {
            self.sprite_scale = scale as f32;
        }

        // [animation] section
        read_u32(ini, "animation", "frame_speed", &mut self.frame_speed)?;
        if ini.get("animation", "frames_per_step").is_some() {
            let mut frames = 0;
            read_u32(ini, "animation", "frames_per_step", &mut frames)?;
            self.frames_per_step = Some(frames);
        }

        // [player] section
        if let Some(name) = read_string(ini, "player", "name") {
            self.player_name = name;
        }
        if let Some(sheet) = read_string(ini, "player", "sheet") {
            self.player_sheet = sheet;
        }
        read_u32(ini, "player", "frame_size", &mut self.player_frame_size)?;
        read_u32(ini, "player", "row_offset", &mut self.player_row_offset)?;
        read_u32(ini, "player", "max_frame", &mut self.player_max_frame)?;
        read_u32(ini, "player", "movement_speed", &mut self.player_movement_speed)?;
        read_bool(ini, "player", "flip", &mut self.player_flip)?;

        // [map] section
        if let Some(tile) = read_string(ini, "map", "ground_tile") {
            self.ground_tile = Some(tile);
        }

        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();

        ini.set("window", "width", Some(self.window_width.to_string()));
        ini.set("window", "height", Some(self.window_height.to_string()));
        ini.set("window", "title", Some(self.title.clone()));
        ini.set("window", "target_fps", Some(self.target_fps.to_string()));
        ini.set("window", "vsync", Some(self.vsync.to_string()));
        ini.set("window", "borderless", Some(self.borderless.to_string()));
        ini.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        ini.set("render", "sprite_scale", Some(self.sprite_scale.to_string()));

        ini.set("animation", "frame_speed", Some(self.frame_speed.to_string()));
        if let Some(frames) = self.frames_per_step {
            ini.set("animation", "frames_per_step", Some(frames.to_string()));
        }

        ini.set("player", "name", Some(self.player_name.clone()));
        ini.set("player", "sheet", Some(self.player_sheet.clone()));
        ini.set("player", "frame_size", Some(self.player_frame_size.to_string()));
        ini.set("player", "row_offset", Some(self.player_row_offset.to_string()));
        ini.set("player", "max_frame", Some(self.player_max_frame.to_string()));
        ini.set(
            "player",
            "movement_speed",
            Some(self.player_movement_speed.to_string()),
        );
        ini.set("player", "flip", Some(self.player_flip.to_string()));

        if let Some(tile) = &self.ground_tile {
            ini.set("map", "ground_tile", Some(tile.clone()));
        }

        ini
    }

    /// Render the configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Reject values that would make the window or sprite math meaningless.
    pub fn validate(&self) -> Result<(), String> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(format!(
                "Window size must be positive, got {}x{}",
                self.window_width, self.window_height
            ));
        }
        if self.target_fps == 0 {
            return Err("target_fps must be positive".to_string());
        }
        if self.frame_speed == 0 {
            return Err("frame_speed must be positive".to_string());
        }
        if self.frames_per_step == Some(0) {
            return Err("frames_per_step must be positive when set".to_string());
        }
        if !self.sprite_scale.is_finite() || self.sprite_scale <= 0.0 {
            return Err(format!(
                "sprite_scale must be a positive number, got {}",
                self.sprite_scale
            ));
        }
        if i32::try_from(self.player_movement_speed).is_err() {
            return Err(format!(
                "player movement_speed must be at most {}, got {}",
                i32::MAX,
                self.player_movement_speed
            ));
        }
        if self.player_frame_size == 0 {
            return Err("player frame_size must be positive".to_string());
        }
        if self.player_sheet.is_empty() {
            return Err("player sheet path is empty".to_string());
        }
        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Build the animation cadence counter for these settings.
    pub fn frame_counter(&self) -> FrameCounter {
        match self.frames_per_step {
            Some(frames) => FrameCounter::new(frames),
            None => FrameCounter::from_rates(self.target_fps, self.frame_speed),
        }
    }
}
