/// All game entity types — pure data, no game rules.

use crate::config::Tuning;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Projectile {
    pub rect: Rect,
    /// Pixels per tick; negative moves up (player), positive moves down (AI).
    pub vy: i32,
}

// ── Scores & AI ───────────────────────────────────────────────────────────────

/// Hit counters. Only ever incremented while the process runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scores {
    /// Times the player was hit.
    pub failures: u32,
    /// Times the AI was hit.
    pub ai_hits: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AiState {
    /// Ticks since the AI last recomputed its movement.
    pub move_timer: u32,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Continuous key state sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Rect,
    pub ai: Rect,
    /// Upward shots, in creation order.
    pub player_bullets: Vec<Projectile>,
    /// Downward shots, in creation order.
    pub ai_bullets: Vec<Projectile>,
    pub scores: Scores,
    pub ai_state: AiState,
    /// Monotonic timestamp (ms since start) of the last accepted player shot.
    pub last_shot_ms: u64,
    pub frame: u64,
    pub tuning: Tuning,
}
