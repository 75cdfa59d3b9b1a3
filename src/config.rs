/// Gameplay tuning and the few runtime settings read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const WINDOW_TITLE: &str = "Shooting Game";

pub const FRAMES_PER_SECOND: u64 = 60;

/// Target duration of one tick (≈60 FPS).
pub const FRAME: Duration = Duration::from_millis(1000 / FRAMES_PER_SECOND);

// ── Gameplay tuning ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tuning {
    /// Logical field size in pixels.
    pub width: i32,
    pub height: i32,
    /// Both actors share the same box size.
    pub actor_width: i32,
    pub actor_height: i32,
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub player_speed: i32,
    pub bullet_speed: i32,
    /// The AI recomputes its movement every `ai_move_interval / 8` ticks.
    pub ai_move_interval: u32,
    pub fire_cooldown_ms: u64,
    /// Percent chance per AI update of firing a shot.
    pub ai_fire_chance: u32,
    pub ai_distance_divisor: i32,
    pub ai_min_step: i32,
    /// Gap between the player's bottom edge and the bottom of the field.
    pub player_spawn_margin: i32,
    pub ai_spawn_y: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            width: 800,
            height: 400,
            actor_width: 50,
            actor_height: 50,
            bullet_width: 10,
            bullet_height: 5,
            player_speed: 5,
            bullet_speed: 10,
            ai_move_interval: 30,
            fire_cooldown_ms: 300,
            ai_fire_chance: 10,
            ai_distance_divisor: 20,
            ai_min_step: 4,
            player_spawn_margin: 10,
            ai_spawn_y: 10,
        }
    }
}

impl Tuning {
    /// Ticks between two AI movement updates (never zero).
    pub fn ai_update_every(&self) -> u32 {
        (self.ai_move_interval / 8).max(1)
    }

    /// Largest x an actor may occupy without crossing the right edge.
    pub fn max_actor_x(&self) -> i32 {
        (self.width - self.actor_width).max(0)
    }

    pub fn max_ai_step(&self) -> i32 {
        self.player_speed * 2
    }
}

// ── Runtime settings ──────────────────────────────────────────────────────────

pub const LOG_FILE_VAR: &str = "SHOOTING_DUEL_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Where tracing output goes. `None` disables logging: the terminal
    /// itself is the game screen.
    pub log_file: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        let log_file = env::var(LOG_FILE_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        RuntimeConfig { log_file }
    }
}
