/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (plus, where needed, the current time or an RNG handle) and
/// returns a brand-new `GameState`.  Side effects are limited to the
/// injected RNG and log output.

use rand::Rng;
use tracing::{debug, info};

use crate::config::Tuning;
use crate::entities::{AiState, FrameInput, GameState, Projectile, Rect, Scores};

// ── Constructors ─────────────────────────────────────────────────────────────

fn player_spawn(t: &Tuning) -> Rect {
    Rect::new(
        t.width / 2 - t.actor_width / 2,
        t.height - t.actor_height - t.player_spawn_margin,
        t.actor_width,
        t.actor_height,
    )
}

fn ai_spawn(t: &Tuning) -> Rect {
    Rect::new(
        t.width / 2 - t.actor_width / 2,
        t.ai_spawn_y,
        t.actor_width,
        t.actor_height,
    )
}

/// Build the initial game state: both actors centred, nothing in flight.
pub fn init_state(tuning: Tuning) -> GameState {
    GameState {
        player: player_spawn(&tuning),
        ai: ai_spawn(&tuning),
        player_bullets: Vec::new(),
        ai_bullets: Vec::new(),
        scores: Scores::default(),
        ai_state: AiState::default(),
        last_shot_ms: 0,
        frame: 0,
        tuning,
    }
}

/// Put both actors back on their spawn points and clear every projectile.
/// Scores, the fire cooldown and the frame counter are left untouched.
pub fn reset_game(state: &GameState) -> GameState {
    debug!(frame = state.frame, "reset");
    GameState {
        player: player_spawn(&state.tuning),
        ai: ai_spawn(&state.tuning),
        player_bullets: Vec::new(),
        ai_bullets: Vec::new(),
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Apply held arrow keys.  Left and right are applied in that order, so
/// holding both cancels out away from the walls.
pub fn move_player(state: &GameState, input: &FrameInput) -> GameState {
    let t = &state.tuning;
    let mut x = state.player.x;
    if input.left {
        x -= t.player_speed;
    }
    if input.right {
        x += t.player_speed;
    }
    GameState {
        player: Rect {
            x: x.clamp(0, t.max_actor_x()),
            ..state.player
        },
        ..state.clone()
    }
}

/// Fire from the player's centre if the cooldown has elapsed.
/// `now_ms` is a monotonic timestamp in milliseconds.
pub fn player_fire(state: &GameState, now_ms: u64) -> GameState {
    let t = &state.tuning;
    if now_ms.saturating_sub(state.last_shot_ms) < t.fire_cooldown_ms {
        return state.clone();
    }
    let bullet = Projectile {
        rect: Rect::new(
            state.player.center_x() - t.bullet_width / 2,
            state.player.top() - t.bullet_height,
            t.bullet_width,
            t.bullet_height,
        ),
        vy: -t.bullet_speed,
    };
    let mut player_bullets = state.player_bullets.clone();
    player_bullets.push(bullet);
    GameState {
        player_bullets,
        last_shot_ms: now_ms,
        ..state.clone()
    }
}

// ── AI ───────────────────────────────────────────────────────────────────────

/// Horizontal step the AI takes toward a target `distance` pixels away.
pub fn ai_step_size(tuning: &Tuning, distance: i32) -> i32 {
    (distance / tuning.ai_distance_divisor)
        .min(tuning.max_ai_step())
        .max(tuning.ai_min_step)
}

/// Advance the AI gate; on an update tick, close in on the player and
/// roll for a downward shot.
pub fn ai_update(state: &GameState, rng: &mut impl Rng) -> GameState {
    let t = &state.tuning;
    let mut ai_state = state.ai_state;
    ai_state.move_timer += 1;
    if ai_state.move_timer < t.ai_update_every() {
        return GameState {
            ai_state,
            ..state.clone()
        };
    }
    ai_state.move_timer = 0;

    let player_cx = state.player.center_x();
    let ai_cx = state.ai.center_x();
    let distance = (player_cx - ai_cx).abs();
    let step = ai_step_size(t, distance);

    let mut ai = state.ai;
    // Already lined up within a bullet's width: hold position.
    if distance > t.bullet_width {
        if player_cx < ai_cx && ai.left() > 0 {
            ai.x -= step;
        } else if player_cx > ai_cx && ai.right() < t.width {
            ai.x += step;
        }
        ai.x = ai.x.clamp(0, t.max_actor_x());
    }

    let mut ai_bullets = state.ai_bullets.clone();
    if rng.gen_range(0..100) < t.ai_fire_chance {
        ai_bullets.push(Projectile {
            rect: Rect::new(
                ai.center_x() - t.bullet_width / 2,
                ai.bottom(),
                t.bullet_width,
                t.bullet_height,
            ),
            vy: t.bullet_speed,
        });
    }

    GameState {
        ai,
        ai_state,
        ai_bullets,
        ..state.clone()
    }
}

// ── Physics ──────────────────────────────────────────────────────────────────

/// Move every bullet by its velocity and keep the ones still on screen.
/// Upward shots leave once their bottom edge is above 0, downward shots
/// once their top edge is below `height`.
fn advance(bullets: &[Projectile], height: i32) -> Vec<Projectile> {
    bullets
        .iter()
        .map(|b| Projectile {
            rect: Rect {
                y: b.rect.y + b.vy,
                ..b.rect
            },
            ..*b
        })
        .filter(|b| {
            if b.vy < 0 {
                b.rect.bottom() >= 0
            } else {
                b.rect.top() <= height
            }
        })
        .collect()
}

pub fn move_projectiles(state: &GameState) -> GameState {
    let height = state.tuning.height;
    GameState {
        player_bullets: advance(&state.player_bullets, height),
        ai_bullets: advance(&state.ai_bullets, height),
        ..state.clone()
    }
}

// ── Collisions ───────────────────────────────────────────────────────────────

/// Remove the first bullet overlapping `target`, if any.
/// Returns the survivors and whether a hit was found.
fn take_first_hit(bullets: &[Projectile], target: &Rect) -> (Vec<Projectile>, bool) {
    match bullets.iter().position(|b| b.rect.overlaps(target)) {
        Some(hit) => {
            let survivors = bullets
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != hit)
                .map(|(_, b)| *b)
                .collect();
            (survivors, true)
        }
        None => (bullets.to_vec(), false),
    }
}

/// Credit at most one hit per side per tick; first bullet in creation
/// order wins.
pub fn check_collisions(state: &GameState) -> GameState {
    let mut scores = state.scores;

    let (ai_bullets, player_hit) = take_first_hit(&state.ai_bullets, &state.player);
    if player_hit {
        scores.failures += 1;
        info!(frame = state.frame, failures = scores.failures, "player hit");
    }

    let (player_bullets, ai_hit) = take_first_hit(&state.player_bullets, &state.ai);
    if ai_hit {
        scores.ai_hits += 1;
        info!(frame = state.frame, ai_hits = scores.ai_hits, "ai hit");
    }

    GameState {
        player_bullets,
        ai_bullets,
        scores,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — time and RNG are injected) ────────────────

/// Advance the simulation by one frame.  Stage order: fire, move, AI,
/// projectile physics, collisions.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(
    state: &GameState,
    input: &FrameInput,
    now_ms: u64,
    rng: &mut impl Rng,
) -> GameState {
    let fired = if input.fire {
        player_fire(state, now_ms)
    } else {
        state.clone()
    };
    let moved = move_player(&fired, input);
    let thought = ai_update(&moved, rng);
    let advanced = move_projectiles(&thought);
    let resolved = check_collisions(&advanced);
    GameState {
        frame: state.frame + 1,
        ..resolved
    }
}
