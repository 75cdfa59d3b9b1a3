/// Keyboard handling for terminals.
///
/// Terminals report key *events*, not key *state*.  `KeyTracker` rebuilds
/// the per-frame key state the game polls from that event stream.
///
/// How long a key stays down depends on what the terminal reports:
/// * With release reporting, a key is down from its `Press` until its
///   `Release`, however long the OS waits before auto-repeating.
/// * Without it, a key is down while its last press is younger than
///   `HOLD_WINDOW` frames; auto-repeat keeps refreshing it.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::FrameInput;

/// Without release reporting, a key counts as down for this many frames
/// (≈133 ms at 60 FPS) after its last press or repeat.
pub const HOLD_WINDOW: u64 = 8;

/// Why the loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuitReason {
    /// Esc or `q`.
    Escape,
    /// Ctrl-C: closing the terminal session.
    Interrupted,
}

/// Discrete, one-shot actions triggered by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit(QuitReason),
    Reset,
}

/// Map a key event to a one-shot command.  Only presses count.
pub fn classify(event: &KeyEvent) -> Option<Command> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit(QuitReason::Interrupted))
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(Command::Quit(QuitReason::Escape))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Maps each down key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    /// The terminal sends `Release` events, so keys never time out.
    release_reported: bool,
}

impl KeyTracker {
    pub fn new(release_reported: bool) -> Self {
        KeyTracker {
            key_frame: HashMap::new(),
            release_reported,
        }
    }

    /// Feed one key event observed during `frame`.
    pub fn record(&mut self, event: &KeyEvent, frame: u64) {
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_frame.insert(event.code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&event.code);
            }
        }
    }

    /// Whether `key` is down during `frame`.
    pub fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| {
                self.release_reported || frame.saturating_sub(last) <= HOLD_WINDOW
            })
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|k| self.is_held(*k, frame))
    }

    /// Continuous key state for `frame`.
    pub fn frame_input(&self, frame: u64) -> FrameInput {
        FrameInput {
            left: self.any_held(
                &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
                frame,
            ),
            right: self.any_held(
                &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
                frame,
            ),
            fire: self.is_held(KeyCode::Char(' '), frame),
        }
    }
}
