use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use shooting_duel::entities::FrameInput;
use shooting_duel::input::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
}

// ── classify ──────────────────────────────────────────────────────────────────

#[test]
fn escape_and_q_quit() {
    assert_eq!(
        classify(&press(KeyCode::Esc)),
        Some(Command::Quit(QuitReason::Escape))
    );
    assert_eq!(
        classify(&press(KeyCode::Char('q'))),
        Some(Command::Quit(QuitReason::Escape))
    );
}

#[test]
fn ctrl_c_interrupts() {
    let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(classify(&ev), Some(Command::Quit(QuitReason::Interrupted)));
    // Plain 'c' is not a command
    assert_eq!(classify(&press(KeyCode::Char('c'))), None);
}

#[test]
fn r_resets() {
    assert_eq!(classify(&press(KeyCode::Char('r'))), Some(Command::Reset));
}

#[test]
fn movement_keys_are_not_commands() {
    assert_eq!(classify(&press(KeyCode::Left)), None);
    assert_eq!(classify(&press(KeyCode::Char(' '))), None);
}

#[test]
fn only_presses_trigger_commands() {
    assert_eq!(classify(&with_kind(KeyCode::Esc, KeyEventKind::Release)), None);
    assert_eq!(classify(&with_kind(KeyCode::Esc, KeyEventKind::Repeat)), None);
}

// ── KeyTracker ────────────────────────────────────────────────────────────────

#[test]
fn pressed_key_is_held_within_window() {
    let mut keys = KeyTracker::new(false);
    keys.record(&press(KeyCode::Left), 10);
    assert!(keys.is_held(KeyCode::Left, 10));
    assert!(keys.is_held(KeyCode::Left, 10 + HOLD_WINDOW));
    assert!(!keys.is_held(KeyCode::Left, 11 + HOLD_WINDOW));
}

#[test]
fn unseen_key_is_not_held() {
    let keys = KeyTracker::new(false);
    assert!(!keys.is_held(KeyCode::Right, 0));
}

#[test]
fn repeat_refreshes_hold() {
    let mut keys = KeyTracker::new(false);
    keys.record(&press(KeyCode::Char(' ')), 0);
    keys.record(&with_kind(KeyCode::Char(' '), KeyEventKind::Repeat), 6);
    assert!(keys.is_held(KeyCode::Char(' '), 6 + HOLD_WINDOW));
}

#[test]
fn release_drops_key_immediately() {
    let mut keys = KeyTracker::new(false);
    keys.record(&press(KeyCode::Right), 3);
    keys.record(&with_kind(KeyCode::Right, KeyEventKind::Release), 4);
    assert!(!keys.is_held(KeyCode::Right, 4));
}

#[test]
fn frame_input_maps_keys() {
    let mut keys = KeyTracker::new(false);
    keys.record(&press(KeyCode::Char('a')), 1);
    keys.record(&press(KeyCode::Char(' ')), 1);
    assert_eq!(
        keys.frame_input(2),
        FrameInput {
            left: true,
            right: false,
            fire: true
        }
    );

    keys.record(&press(KeyCode::Right), 2);
    assert!(keys.frame_input(2).right);
    assert_eq!(keys.frame_input(100), FrameInput::default());
}

#[test]
fn release_reporting_holds_key_until_release() {
    let mut keys = KeyTracker::new(true);
    keys.record(&press(KeyCode::Left), 0);
    // OS auto-repeat delay can be half a second; no repeat arrives meanwhile
    let held = (0..30).filter(|&f| keys.frame_input(f).left).count();
    assert_eq!(held, 30);

    keys.record(&with_kind(KeyCode::Left, KeyEventKind::Release), 30);
    assert!(!keys.frame_input(30).left);
}

#[test]
fn release_reporting_keeps_fire_held_between_repeats() {
    let mut keys = KeyTracker::new(true);
    keys.record(&press(KeyCode::Char(' ')), 0);
    assert!(keys.frame_input(HOLD_WINDOW * 5).fire);
}
