/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use std::time::Duration;

use rand::Rng;

use crate::entities::{Action, Alien, GameState, GameStatus, Heading, Laser, Player, Snapshot};

// ── Session tuning ───────────────────────────────────────────────────────────

pub const STARTING_LIVES: u32 = 4;
pub const STARTING_LEVEL: u32 = 1;
pub const FIREPOWER_CAP: u32 = 4;

/// Aliens per formation row.
const ROW_WIDTH: usize = 10;
/// How many wave members receive the legacy shooter flag.
const SHOOTER_COUNT: usize = 5;

/// Base frame duration, adjusted per level-up and per breach. The speed-up
/// and slow-down are asymmetric on purpose: clearing a wave buys back less
/// time than a breach costs.
pub const BASE_TICK: Duration = Duration::from_millis(100);
const TICK_SPEEDUP: Duration = Duration::from_millis(10);
const TICK_SLOWDOWN: Duration = Duration::from_millis(20);
/// Never let the frame interval hit zero (the original never shipped enough
/// levels for this to matter; see DESIGN.md).
const TICK_FLOOR: Duration = Duration::from_millis(10);

/// Score awarded per kill at a given remaining laser power. Power 3 pays
/// nothing — faithful to the original's two-tier reward table.
fn score_for(power: u32) -> u32 {
    match power {
        2 => 10,
        1 => 5,
        _ => 0,
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial session state for the given board dimensions.
pub fn init_state(width: u16, height: u16, rng: &mut impl Rng) -> GameState {
    GameState {
        player: Player {
            x: (width / 2) as i32,
            firepower: 1,
        },
        aliens: spawn_wave(STARTING_LEVEL, rng),
        laser: None,
        score: 0,
        lives: STARTING_LIVES,
        level: STARTING_LEVEL,
        status: GameStatus::Playing,
        width,
        height,
        tick_interval: BASE_TICK,
    }
}

// ── Formation generator ──────────────────────────────────────────────────────

/// Build a fresh wave for `level`: `level² + 15` aliens laid out left to
/// right in rows of ten, row 0 topmost, all marching right.  Five distinct
/// members (or all, for hypothetical waves smaller than five) get the legacy
/// `can_fire` flag drawn uniformly from {2, 3}.
pub fn spawn_wave(level: u32, rng: &mut impl Rng) -> Vec<Alien> {
    let count = (level * level + 15) as usize;

    let mut aliens: Vec<Alien> = (0..count)
        .map(|i| Alien {
            x: (i % ROW_WIDTH) as i32,
            y: (i / ROW_WIDTH) as i32,
            heading: Heading::Right,
            can_fire: 0,
        })
        .collect();

    let shooters = SHOOTER_COUNT.min(aliens.len());
    for i in rand::seq::index::sample(rng, aliens.len(), shooters) {
        aliens[i].can_fire = rng.gen_range(2..=3);
    }

    aliens
}

// ── Movement engine ──────────────────────────────────────────────────────────

/// Advance every mobile entity by one tick and apply the player's action.
///
/// Returns the new state plus a fire-intent flag: the engine only signals
/// that the player pulled the trigger — instantiating the laser is the
/// caller's job (see [`fire_laser`]).
pub fn advance(state: &GameState, action: Option<Action>) -> (GameState, bool) {
    // Boundary-bounce march: step sideways until the wall, then turn around
    // and descend one row.  All aliens share the same timing.
    let aliens: Vec<Alien> = state
        .aliens
        .iter()
        .map(|a| match a.heading {
            Heading::Right if a.x < state.width as i32 - 1 => Alien { x: a.x + 1, ..a.clone() },
            Heading::Right => Alien {
                y: a.y + 1,
                heading: Heading::Left,
                ..a.clone()
            },
            Heading::Left if a.x > 0 => Alien { x: a.x - 1, ..a.clone() },
            Heading::Left => Alien {
                y: a.y + 1,
                heading: Heading::Right,
                ..a.clone()
            },
        })
        .collect();

    // No clamp on the player — the original allows silent off-board drift.
    let player_x = match action {
        Some(Action::MoveLeft) => state.player.x - 1,
        Some(Action::MoveRight) => state.player.x + 1,
        _ => state.player.x,
    };
    let fired = action == Some(Action::Fire);

    // An airborne laser climbs one row per tick.  There is no top bound: it
    // coasts off-screen until the resolver spends its power or a new shot
    // replaces it.
    let laser = state
        .laser
        .as_ref()
        .map(|l| Laser { y: l.y - 1, ..l.clone() });

    (
        GameState {
            player: Player {
                x: player_x,
                ..state.player.clone()
            },
            aliens,
            laser,
            ..state.clone()
        },
        fired,
    )
}

/// Load the projectile slot from the player's current position and firepower.
/// Firing while a laser is already airborne simply replaces it.
pub fn fire_laser(state: &GameState) -> GameState {
    GameState {
        laser: Some(Laser {
            x: state.player.x,
            y: state.height as i32 - 2,
            power: state.player.firepower,
        }),
        ..state.clone()
    }
}

// ── Collision & scoring resolver ─────────────────────────────────────────────

/// Resolve the laser against the formation: remove the first alien (in
/// formation order) sharing the laser's cell, award score by the laser's
/// current power, spend one power, and retire the laser once spent.
///
/// At most one kill per tick, even with stacked aliens.  The hit index is
/// collected during the scan and removed after it, so the scan order is
/// never disturbed mid-pass.  Without an airborne laser this is a no-op.
pub fn resolve(state: &GameState) -> GameState {
    let Some(laser) = &state.laser else {
        return state.clone();
    };

    let mut aliens = state.aliens.clone();
    let mut score = state.score;
    let mut power = laser.power;

    let hit = aliens
        .iter()
        .position(|a| a.x == laser.x && a.y == laser.y);
    if let Some(i) = hit {
        let _ = aliens.remove(i);
        score += score_for(power);
        power = power.saturating_sub(1);
    }

    let laser = if power == 0 {
        None
    } else {
        Some(Laser { power, ..laser.clone() })
    };

    GameState {
        aliens,
        laser,
        score,
        ..state.clone()
    }
}

// ── Round/progress controller ────────────────────────────────────────────────

/// Evaluate end-of-wave and breach conditions, regenerating the formation as
/// needed, and flip to `GameOver` once the last life is gone.
///
/// Order matters: wave-clear first (level up, speed up, firepower up), then
/// breach (one life lost per tick no matter how many aliens reached the
/// bottom row, speed down, firepower reset, same-level wave).
pub fn progress(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut level = state.level;
    let mut lives = state.lives;
    let mut firepower = state.player.firepower;
    let mut aliens = state.aliens.clone();
    let mut tick_interval = state.tick_interval;

    if aliens.is_empty() {
        level += 1;
        tick_interval = tick_interval.saturating_sub(TICK_SPEEDUP).max(TICK_FLOOR);
        aliens = spawn_wave(level, rng);
        if firepower < FIREPOWER_CAP {
            firepower += 1;
        }
    }

    let bottom = state.height as i32 - 1;
    if aliens.iter().any(|a| a.y == bottom) {
        lives = lives.saturating_sub(1);
        tick_interval += TICK_SLOWDOWN;
        firepower = 1;
        aliens = spawn_wave(level, rng);
    }

    let status = if lives == 0 {
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    };

    GameState {
        player: Player {
            firepower,
            ..state.player.clone()
        },
        aliens,
        lives,
        level,
        status,
        tick_interval,
        ..state.clone()
    }
}

// ── Snapshot/query interface ─────────────────────────────────────────────────

/// Borrow a read-only view of the current tick for the presentation layer.
pub fn snapshot(state: &GameState) -> Snapshot<'_> {
    Snapshot {
        score: state.score,
        lives: state.lives,
        level: state.level,
        width: state.width,
        height: state.height,
        aliens: &state.aliens,
        player_x: state.player.x,
        laser: state.laser.as_ref(),
        game_over: state.status == GameStatus::GameOver,
    }
}
