mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use term_invaders::compute::{advance, fire_laser, init_state, progress, resolve, snapshot};
use term_invaders::entities::{Action, GameStatus};

/// Board dimensions, matching the classic 25×20 tray.
const BOARD_WIDTH: u16 = 25;
const BOARD_HEIGHT: u16 = 20;

// ── Key decoding ──────────────────────────────────────────────────────────────

/// Map a physical key to an abstract action.  Anything unrecognized decodes
/// to `None` and is a no-op for the simulation.
fn decode(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::MoveRight),
        KeyCode::Char(' ') => Some(Action::Fire),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drive the core simulation: one decoded action per tick, then
/// resolve → progress → render → advance, paced by the session's current
/// tick interval (the progress controller tightens and relaxes it).
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut state = init_state(BOARD_WIDTH, BOARD_HEIGHT, &mut rng);

    loop {
        let frame_start = Instant::now();

        // Drain pending key events; the last decodable one wins this tick.
        let mut action = None;
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            if kind == KeyEventKind::Release {
                continue;
            }
            if let Some(a) = decode(code, modifiers) {
                action = Some(a);
            }
        }
        if action == Some(Action::Quit) {
            return Ok(());
        }

        state = resolve(&state);
        state = progress(&state, &mut rng);
        display::render(out, &snapshot(&state))?;

        if state.status == GameStatus::GameOver {
            break;
        }

        let (next, fired) = advance(&state, action);
        state = if fired { fire_laser(&next) } else { next };

        let elapsed = frame_start.elapsed();
        if elapsed < state.tick_interval {
            thread::sleep(state.tick_interval - elapsed);
        }
    }

    // Game over — hold the final frame until the player quits.
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) => {
                if kind != KeyEventKind::Release
                    && decode(code, modifiers) == Some(Action::Quit)
                {
                    return Ok(());
                }
            }
            Ok(_) => {}
            Err(_) => return Ok(()), // input thread gone → exit
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
