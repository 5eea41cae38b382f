/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and a read-only snapshot of the
/// tick.  No game logic is performed; this module only translates the
/// snapshot into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use term_invaders::entities::Snapshot;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_LEVEL: Color = Color::Green;
const C_PLAYER: Color = Color::White;
const C_ALIEN: Color = Color::Green;
const C_LASER: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Terminal row of playfield row 0 (rows 0–1 hold the HUD and top border).
const BOARD_TOP: u16 = 2;
/// Terminal column of playfield column 0 (column 0 holds the left wall).
const BOARD_LEFT: u16 = 1;

/// Laser glyph per remaining power, matching the original's three tiers.
fn laser_glyph(power: u32) -> &'static str {
    match power {
        3 => ":",
        2 => "$",
        _ => "-",
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snap: &Snapshot) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, snap)?;
    draw_border(out, snap)?;

    for alien in snap.aliens {
        if on_board(snap, alien.x, alien.y) {
            out.queue(cursor::MoveTo(
                BOARD_LEFT + alien.x as u16,
                BOARD_TOP + alien.y as u16,
            ))?;
            out.queue(style::SetForegroundColor(C_ALIEN))?;
            out.queue(Print("@"))?;
        }
    }

    // The laser can coast above row 0; it is simply not drawn up there.
    if let Some(laser) = snap.laser {
        if on_board(snap, laser.x, laser.y) {
            out.queue(cursor::MoveTo(
                BOARD_LEFT + laser.x as u16,
                BOARD_TOP + laser.y as u16,
            ))?;
            out.queue(style::SetForegroundColor(C_LASER))?;
            out.queue(Print(laser_glyph(laser.power)))?;
        }
    }

    // The ship may have drifted off-board; draw only what is visible.
    if snap.player_x >= 0 && snap.player_x < snap.width as i32 {
        out.queue(cursor::MoveTo(
            BOARD_LEFT + snap.player_x as u16,
            BOARD_TOP + snap.height - 1,
        ))?;
        out.queue(style::SetForegroundColor(C_PLAYER))?;
        out.queue(Print("#"))?;
    }

    draw_controls_hint(out, snap)?;

    if snap.game_over {
        draw_game_over(out, snap)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, BOARD_TOP + snap.height + 2))?;
    out.flush()?;
    Ok(())
}

fn on_board(snap: &Snapshot, x: i32, y: i32) -> bool {
    x >= 0 && x < snap.width as i32 && y >= 0 && y < snap.height as i32
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &Snapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(BOARD_LEFT, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", snap.score)))?;

    let level_str = format!("Level:{:>2}", snap.level);
    let lx = (BOARD_LEFT + snap.width / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    let lives_str = format!("Lives:{}", "♥".repeat(snap.lives as usize));
    let rx = (BOARD_LEFT + snap.width)
        .saturating_sub(lives_str.chars().count() as u16);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, snap: &Snapshot) -> std::io::Result<()> {
    let w = snap.width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, BOARD_TOP - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, BOARD_TOP + snap.height))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in 0..snap.height {
        out.queue(cursor::MoveTo(0, BOARD_TOP + row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(BOARD_LEFT + snap.width, BOARD_TOP + row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Controls hint (below the board) ───────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, snap: &Snapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, BOARD_TOP + snap.height + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, snap: &Snapshot) -> std::io::Result<()> {
    let lines = [
        "╔════════════════════╗".to_string(),
        "║     GAME  OVER     ║".to_string(),
        "╚════════════════════╝".to_string(),
        format!("Final Score: {:>6}", snap.score),
        "Q - Quit".to_string(),
    ];

    let cx = BOARD_LEFT + snap.width / 2;
    let start_row = (BOARD_TOP + snap.height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, msg) in lines.iter().enumerate() {
        let color = match i {
            0..=2 => Color::Red,
            3 => Color::Yellow,
            _ => Color::White,
        };
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(msg.as_str()))?;
    }

    Ok(())
}
