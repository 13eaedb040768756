//! Save/Load functionality
//!
//! The save is one flat JSON record: profile fields at the top level plus
//! the full game state. A save that cannot be read or parsed is treated as
//! absent, never as fatal; the game falls back to a fresh start.

use crate::data::Profile;
use crate::game::GameState;
use crate::GameError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Environment variable overriding the save file location
pub const SAVE_PATH_ENV: &str = "HACKER_TERMINAL_SAVE";

const DEFAULT_SAVE_FILE: &str = "hacker_terminal_save.json";

/// The persisted record. JSON-compatible throughout: strings, numbers,
/// booleans, sequences and string-keyed maps only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub user_name: Option<String>,
    pub user_xp: u32,
    pub user_level: u32,
    pub user_title: String,
    pub game_state: GameState,
    pub saved_at: DateTime<Utc>,
}

impl SaveData {
    /// Snapshot the running game
    pub fn capture(profile: &Profile, state: &GameState) -> Self {
        Self {
            user_name: state.user_name.clone(),
            user_xp: profile.xp,
            user_level: profile.level,
            user_title: profile.title.clone(),
            game_state: state.clone(),
            saved_at: Utc::now(),
        }
    }

    /// Rebuild the running game from a snapshot
    pub fn restore(self) -> (Profile, GameState) {
        let profile = Profile {
            xp: self.user_xp,
            level: self.user_level,
            title: self.user_title,
        };
        let mut state = self.game_state;
        // The top-level name mirrors the one inside the state; prefer it
        // so hand-edited saves behave predictably.
        if self.user_name.is_some() {
            state.user_name = self.user_name;
        }
        (profile, state)
    }
}

/// Serialize a snapshot to a writer
pub fn save_to<W: Write>(writer: W, save: &SaveData) -> Result<(), GameError> {
    serde_json::to_writer_pretty(writer, save)?;
    Ok(())
}

/// Deserialize a snapshot from a reader
pub fn load_from<R: Read>(reader: R) -> Result<SaveData, GameError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Where the save lives: `$HACKER_TERMINAL_SAVE` if set, otherwise
/// `hacker_terminal_save.json` in the working directory.
pub fn default_save_path() -> PathBuf {
    std::env::var_os(SAVE_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_FILE))
}

/// Write the snapshot to disk
pub fn save_to_path(path: &Path, save: &SaveData) -> Result<(), GameError> {
    let file = std::fs::File::create(path)?;
    save_to(file, save)
}

/// Load the game from disk. Missing, unreadable or corrupted saves all
/// fall back to a fresh profile and initial state.
pub fn load_or_initial(path: &Path) -> (Profile, GameState) {
    match std::fs::File::open(path) {
        Ok(file) => match load_from(file) {
            Ok(save) => save.restore(),
            Err(_) => (Profile::new(), GameState::new()),
        },
        Err(_) => (Profile::new(), GameState::new()),
    }
}

/// Delete the persisted save, if any. Used by the `reset` command.
pub fn clear_save(path: &Path) {
    let _ = std::fs::remove_file(path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_roundtrip() {
        let mut profile = Profile::new();
        profile.award_xp(45);
        let mut state = GameState::new();
        state.user_name = Some("ghost".to_string());
        state.tools.push("nmap".to_string());
        state.mission_step = 2;

        let mut buffer = Vec::new();
        save_to(&mut buffer, &SaveData::capture(&profile, &state)).expect("save failed");

        let (loaded_profile, loaded_state) =
            load_from(&buffer[..]).expect("load failed").restore();
        assert_eq!(loaded_profile, profile);
        assert_eq!(loaded_state, state);
    }

    #[test]
    fn corrupted_save_is_not_fatal() {
        let garbage = b"{ definitely not json";
        assert!(load_from(&garbage[..]).is_err());
    }
}
