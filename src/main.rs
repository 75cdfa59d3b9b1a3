use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::panic;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use shooting_duel::compute::{init_state, reset_game, tick};
use shooting_duel::config::{RuntimeConfig, Tuning, DEFAULT_LOG_FILTER, FRAME, WINDOW_TITLE};
use shooting_duel::display::{self, Viewport};
use shooting_duel::error::{catch_panic, GameError, Result};
use shooting_duel::input::{classify, Command, KeyTracker, QuitReason};

// ── Logging ───────────────────────────────────────────────────────────────────

/// Logs go to a file or nowhere: stdout is the game screen.
fn init_tracing(config: &RuntimeConfig) {
    let Some(path) = &config.log_file else {
        return;
    };
    let file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("cannot open log file {}: {err}", path.display());
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .init();
}

/// A panic must not leave the shell in raw mode: put the terminal back
/// before the default hook prints the message.
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal(&mut stdout(), true);
        let backtrace = std::backtrace::Backtrace::capture();
        error!(%info, ?backtrace, "panic");
        default_hook(info);
    }));
}

// ── Terminal lifecycle ────────────────────────────────────────────────────────

/// Returns whether key-release reporting was enabled.
fn setup_terminal<W: Write>(out: &mut W) -> Result<bool> {
    terminal::enable_raw_mode().map_err(GameError::Startup)?;
    out.execute(terminal::EnterAlternateScreen)
        .map_err(GameError::Startup)?;
    out.execute(cursor::Hide).map_err(GameError::Startup)?;
    out.execute(terminal::SetTitle(WINDOW_TITLE))
        .map_err(GameError::Startup)?;

    // Writing the push sequence succeeds on any terminal, so ask first.
    let supported = matches!(terminal::supports_keyboard_enhancement(), Ok(true));
    let enhanced = supported
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    if !enhanced {
        warn!("no key-release events, falling back to key-repeat timing");
    }
    Ok(enhanced)
}

fn restore_terminal<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    let _ = display::leave_screen(out, keyboard_enhanced);
    let _ = terminal::disable_raw_mode();
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit key; any I/O failure ends the run with an error.
fn game_loop<W: Write>(out: &mut W, release_reported: bool) -> Result<QuitReason> {
    let mut rng = thread_rng();
    let mut keys = KeyTracker::new(release_reported);
    let mut state = init_state(Tuning::default());
    let clock = Instant::now();

    loop {
        let frame_start = Instant::now();
        let frame = state.frame;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while event::poll(Duration::ZERO).map_err(GameError::Frame)? {
            if let Event::Key(key) = event::read().map_err(GameError::Frame)? {
                keys.record(&key, frame);
                match classify(&key) {
                    Some(Command::Quit(reason)) => return Ok(reason),
                    Some(Command::Reset) => state = reset_game(&state),
                    None => {}
                }
            }
        }

        let input = keys.frame_input(frame);
        let now_ms = clock.elapsed().as_millis() as u64;
        state = tick(&state, &input, now_ms, &mut rng);

        let viewport = Viewport::current().map_err(GameError::Frame)?;
        display::render(out, &state, viewport).map_err(GameError::Frame)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let config = RuntimeConfig::from_env();
    init_tracing(&config);
    install_panic_hook();

    let mut out = BufWriter::new(stdout());

    let keyboard_enhanced = match setup_terminal(&mut out) {
        Ok(enhanced) => enhanced,
        Err(err) => {
            restore_terminal(&mut out, false);
            error!(%err, "startup failed");
            eprintln!("{err}");
            return;
        }
    };
    info!(keyboard_enhanced, "game started");

    let result = catch_panic(|| game_loop(&mut out, keyboard_enhanced));

    // Always restore the terminal
    restore_terminal(&mut out, keyboard_enhanced);

    match result {
        Ok(reason) => info!(?reason, "quit"),
        // The hook has already printed the panic.
        Err(err @ GameError::Panicked(_)) => error!(%err, "game aborted"),
        Err(err) => {
            error!(%err, "game aborted");
            eprintln!("An error occurred: {err}");
        }
    }
}
