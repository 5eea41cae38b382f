/// All game entity types — pure data, no logic.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Heading {
    /// Marching toward the right edge.
    Right,
    /// Marching toward the left edge.
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Fire,
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Formation members ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
    /// Legacy shooter capability, randomly 2 or 3 on five members per wave.
    /// Never consulted by movement or collision — kept for wave parity with
    /// the original formation generator.
    pub can_fire: u8,
}

// ── Player & projectile ───────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    /// Horizontal position. Unclamped: the original lets the ship drift off
    /// the board silently, and we reproduce that.
    pub x: i32,
    /// Weapon strength in [1, 4]; +1 per cleared wave, reset to 1 on breach.
    pub firepower: u32,
}

/// The single projectile slot. `None` in `GameState` is the inactive
/// sentinel; firing overwrites the slot unconditionally.
#[derive(Clone, Debug)]
pub struct Laser {
    pub x: i32,
    pub y: i32,
    /// Remaining hit credits. Spent one per kill; reaching 0 clears the slot.
    pub power: u32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// The live formation for the active wave.
    pub aliens: Vec<Alien>,
    /// At most one laser is airborne at a time.
    pub laser: Option<Laser>,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub status: GameStatus,
    pub width: u16,
    pub height: u16,
    /// Current frame duration, owned by the session so the progress
    /// controller can tighten it per level-up and relax it per breach.
    /// The driver sleeps this long after every tick.
    pub tick_interval: Duration,
}

// ── Read-only view for presentation ───────────────────────────────────────────

/// Borrowed view of one tick, handed to the rendering collaborator.
/// Carries everything a presentation layer needs and nothing it can mutate.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub width: u16,
    pub height: u16,
    pub aliens: &'a [Alien],
    pub player_x: i32,
    pub laser: Option<&'a Laser>,
    pub game_over: bool,
}
