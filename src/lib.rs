//! Hacker Terminal
//!
//! A terminal hacking simulation game: scan the network, connect to hosts,
//! crack passwords, read what you shouldn't, and climb the ranks from
//! Script Kiddie to Digital Ghost.
//!
//! # Game Mechanics
//!
//! - **Missions**: A linear mission script drives progression; side missions
//!   reward the curious
//! - **Interconnected commands**: scanning unlocks hosts, connecting unlocks
//!   logins, logins unlock filesystems
//! - **XP and titles**: every action feeds the level counter
//!
//! # Architecture
//!
//! - `data` - The static world: hosts, filesystems, mission scripts, titles
//! - `game` - Game state, pure transition functions, the command interpreter
//! - `persistence` - Flat JSON save files
//! - `tui` - Terminal user interface with ratatui

pub mod data;
pub mod game;
pub mod persistence;
pub mod tui;

pub use game::interpreter::{interpret, CommandReport, Effect};
pub use game::GameState;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Errors at the persistence boundary. Domain-level refusals (bad password,
/// unknown host, ...) are not errors; they live in [`game::transitions::Denied`].
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Save file corrupted: {0}")]
    CorruptedSave(#[from] serde_json::Error),

    #[error("Save file unreadable: {0}")]
    SaveIo(#[from] std::io::Error),
}
