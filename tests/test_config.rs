use shooting_duel::config::*;

#[test]
fn default_tuning_matches_field_layout() {
    let t = Tuning::default();
    assert_eq!((t.width, t.height), (800, 400));
    assert_eq!((t.actor_width, t.actor_height), (50, 50));
    assert_eq!((t.bullet_width, t.bullet_height), (10, 5));
    assert_eq!(t.fire_cooldown_ms, 300);
    assert_eq!(t.ai_fire_chance, 10);
}

#[test]
fn derived_limits() {
    let t = Tuning::default();
    assert_eq!(t.ai_update_every(), 3); // 30 / 8
    assert_eq!(t.max_actor_x(), 750);
    assert_eq!(t.max_ai_step(), 10);
}

#[test]
fn ai_update_gate_never_zero() {
    let t = Tuning {
        ai_move_interval: 5,
        ..Tuning::default()
    };
    assert_eq!(t.ai_update_every(), 1);
}

#[test]
fn frame_targets_sixty_fps() {
    assert_eq!(FRAMES_PER_SECOND, 60);
    assert_eq!(FRAME.as_millis(), 16);
    assert_eq!(WINDOW_TITLE, "Shooting Game");
}

#[test]
fn runtime_config_defaults_to_no_log_file() {
    assert_eq!(RuntimeConfig::default().log_file, None);
}
