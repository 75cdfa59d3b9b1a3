/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only projects the
/// logical pixel field onto the terminal grid and translates state into
/// terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    event::PopKeyboardEnhancementFlags,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::config::Tuning;
use crate::entities::{GameState, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::White;
const C_PLAYER: Color = Color::Blue;
const C_AI: Color = Color::Red;
const C_HUD: Color = Color::Black;

/// Left edge of the failure counter, in logical pixels.
const HUD_LEFT_X: i32 = 10;
/// Distance of the AI-hit counter from the right edge, in logical pixels.
const HUD_RIGHT_INSET: i32 = 150;

// ── Projection ────────────────────────────────────────────────────────────────

/// Terminal grid the logical field is drawn onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

/// A rectangle in terminal cells: `[col, col + width) × [row, row + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn current() -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Viewport { cols, rows })
    }

    fn col_of(&self, x: i32, t: &Tuning) -> i64 {
        x as i64 * self.cols as i64 / t.width as i64
    }

    fn row_of(&self, y: i32, t: &Tuning) -> i64 {
        y as i64 * self.rows as i64 / t.height as i64
    }

    /// Map a pixel rect to the cells it covers.  Anything visible covers at
    /// least one cell; rects entirely off the field yield `None`.
    pub fn project(&self, rect: &Rect, t: &Tuning) -> Option<CellRect> {
        if self.cols == 0 || self.rows == 0 {
            return None;
        }
        if rect.right() <= 0
            || rect.left() >= t.width
            || rect.bottom() <= 0
            || rect.top() >= t.height
        {
            return None;
        }
        let c0 = self.col_of(rect.left(), t).clamp(0, self.cols as i64 - 1);
        let r0 = self.row_of(rect.top(), t).clamp(0, self.rows as i64 - 1);
        let c1 = self.col_of(rect.right(), t).clamp(c0 + 1, self.cols as i64);
        let r1 = self.row_of(rect.bottom(), t).clamp(r0 + 1, self.rows as i64);
        Some(CellRect {
            col: c0 as u16,
            row: r0 as u16,
            width: (c1 - c0) as u16,
            height: (r1 - r0) as u16,
        })
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame and present it.
pub fn render<W: Write>(out: &mut W, state: &GameState, viewport: Viewport) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_rect(out, viewport, &state.tuning, &state.player, C_PLAYER)?;
    draw_rect(out, viewport, &state.tuning, &state.ai, C_AI)?;
    for bullet in &state.player_bullets {
        draw_rect(out, viewport, &state.tuning, &bullet.rect, C_PLAYER)?;
    }
    for bullet in &state.ai_bullets {
        draw_rect(out, viewport, &state.tuning, &bullet.rect, C_AI)?;
    }

    draw_hud(out, state, viewport)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Undo the screen setup: key-release reporting, hidden cursor and the
/// alternate screen.  Raw mode is the caller's to disable.
pub fn leave_screen<W: Write>(
    out: &mut W,
    keyboard_enhanced: bool,
) -> std::io::Result<()> {
    if keyboard_enhanced {
        out.queue(PopKeyboardEnhancementFlags)?;
    }
    out.queue(style::ResetColor)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    out.flush()
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_rect<W: Write>(
    out: &mut W,
    viewport: Viewport,
    t: &Tuning,
    rect: &Rect,
    color: Color,
) -> std::io::Result<()> {
    let Some(cells) = viewport.project(rect, t) else {
        return Ok(());
    };
    let fill = " ".repeat(cells.width as usize);
    out.queue(style::SetBackgroundColor(color))?;
    for row in cells.row..cells.row + cells.height {
        out.queue(cursor::MoveTo(cells.col, row))?;
        out.queue(Print(&fill))?;
    }
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

pub fn failures_label(state: &GameState) -> String {
    format!("Failures: {}", state.scores.failures)
}

pub fn ai_hits_label(state: &GameState) -> String {
    format!("AI Hits: {}", state.scores.ai_hits)
}

fn draw_hud<W: Write>(out: &mut W, state: &GameState, viewport: Viewport) -> std::io::Result<()> {
    let t = &state.tuning;
    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    out.queue(style::SetForegroundColor(C_HUD))?;

    let left = viewport.col_of(HUD_LEFT_X, t).max(0) as u16;
    out.queue(cursor::MoveTo(left, 0))?;
    out.queue(Print(failures_label(state)))?;

    // Right counter: anchored like the left one, but never pushed off-screen.
    let label = ai_hits_label(state);
    let anchor = viewport.col_of(t.width - HUD_RIGHT_INSET, t).max(0) as u16;
    let right = anchor.min(viewport.cols.saturating_sub(label.chars().count() as u16));
    out.queue(cursor::MoveTo(right, 0))?;
    out.queue(Print(label))?;
    Ok(())
}
