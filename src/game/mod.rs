//! Core game logic and state management

pub mod interpreter;
pub mod missions;
pub mod transitions;

use crate::data;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A host's filesystem as the player sees it. Seeded from the world model;
/// only `current_dir` ever changes at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostFs {
    pub files: Vec<String>,
    pub folders: Vec<String>,
    pub current_dir: String,
}

impl HostFs {
    fn from_seed(seed: &data::FilesystemSeed) -> Self {
        Self {
            files: seed.files.iter().map(|f| f.to_string()).collect(),
            folders: seed.folders.iter().map(|f| f.to_string()).collect(),
            current_dir: "/".to_string(),
        }
    }
}

/// The whole mutable game world. Replaced wholesale by every successful
/// command; transition functions never mutate in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Hosts revealed by scanning, in discovery order
    pub discovered_ips: Vec<String>,

    /// The host the player is connected to, if any
    pub connected_ip: Option<String>,

    /// Valid only while `connected_ip` is set; cleared on every new connection
    pub logged_in: bool,

    /// Per-host filesystem, keyed by address
    pub directories: HashMap<String, HostFs>,

    /// Installed tools, in install order, no duplicates
    pub tools: Vec<String>,

    /// Index into the primary mission script; never decreases
    pub mission_step: usize,

    /// Side mission id -> steps cleared so far, in order
    pub side_mission_progress: HashMap<u32, usize>,

    /// Display name chosen via `whoami <name>`
    pub user_name: Option<String>,
}

impl GameState {
    /// The fixed initial state: nothing discovered, nothing installed,
    /// filesystems seeded from the world model.
    pub fn new() -> Self {
        let directories = data::FILESYSTEMS
            .iter()
            .map(|seed| (seed.address.to_string(), HostFs::from_seed(seed)))
            .collect();

        Self {
            discovered_ips: Vec::new(),
            connected_ip: None,
            logged_in: false,
            directories,
            tools: Vec::new(),
            mission_step: 0,
            side_mission_progress: HashMap::new(),
            user_name: None,
        }
    }

    /// Name shown in `whoami` output
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("Anonymous")
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t == name)
    }

    /// True once every primary mission step has been cleared
    pub fn mission_complete(&self) -> bool {
        self.mission_step >= data::MISSION_STEPS.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
