use shooting_duel::compute::init_state;
use shooting_duel::config::Tuning;
use shooting_duel::entities::*;

#[test]
fn rect_edges_and_centre() {
    let r = Rect::new(375, 340, 50, 50);
    assert_eq!(r.left(), 375);
    assert_eq!(r.right(), 425);
    assert_eq!(r.top(), 340);
    assert_eq!(r.bottom(), 390);
    assert_eq!(r.center_x(), 400);
}

#[test]
fn rect_overlap_is_symmetric() {
    let a = Rect::new(0, 0, 50, 50);
    let b = Rect::new(45, 45, 10, 5);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn rect_contained_overlaps() {
    let outer = Rect::new(0, 0, 100, 100);
    let inner = Rect::new(10, 10, 5, 5);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn rect_shared_edge_is_not_overlap() {
    let a = Rect::new(0, 0, 50, 50);
    assert!(!a.overlaps(&Rect::new(50, 0, 10, 10)));
    assert!(!a.overlaps(&Rect::new(0, 50, 10, 10)));
    assert!(!a.overlaps(&Rect::new(-10, 0, 10, 10)));
    assert!(!a.overlaps(&Rect::new(0, -5, 10, 5)));
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(Tuning::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99;
    cloned.scores.failures = 999;
    cloned.ai_bullets.push(Projectile {
        rect: Rect::new(5, 5, 10, 5),
        vy: 10,
    });

    assert_eq!(original.player.x, 375);
    assert_eq!(original.scores.failures, 0);
    assert!(original.ai_bullets.is_empty());
}

#[test]
fn defaults_are_zeroed() {
    assert_eq!(Scores::default(), Scores { failures: 0, ai_hits: 0 });
    assert_eq!(AiState::default().move_timer, 0);
    let input = FrameInput::default();
    assert!(!input.left && !input.right && !input.fire);
}
