//! Fixed-tick invaders simulation.
//!
//! The library holds the pure core: entity data in [`entities`], per-tick
//! update functions in [`compute`].  Rendering and key decoding live in the
//! binary; the core only consumes decoded actions and hands back read-only
//! snapshots.

pub mod compute;
pub mod entities;
