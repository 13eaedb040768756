//! Integration tests for the flat JSON save format.
//!
//! The contract: a well-formed save restores the exact profile and state;
//! anything else — missing file, garbage bytes — loads as a fresh game.

use hacker_terminal::data::Profile;
use hacker_terminal::game::GameState;
use hacker_terminal::persistence::{self, SaveData};
use std::path::PathBuf;

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hacker_terminal_{}_{}", std::process::id(), name))
}

fn played_game() -> (Profile, GameState) {
    let mut profile = Profile::new();
    profile.award_xp(65);
    let mut state = GameState::new();
    state.user_name = Some("trinity".to_string());
    state.tools.push("nmap".to_string());
    state.discovered_ips = vec!["192.168.0.42".to_string()];
    state.mission_step = 3;
    state.side_mission_progress.insert(1, 1);
    (profile, state)
}

#[test]
fn file_roundtrip_restores_profile_and_state() {
    let path = scratch_file("roundtrip.json");
    let (profile, state) = played_game();

    persistence::save_to_path(&path, &SaveData::capture(&profile, &state)).expect("save failed");
    let (loaded_profile, loaded_state) = persistence::load_or_initial(&path);
    persistence::clear_save(&path);

    assert_eq!(loaded_profile, profile);
    assert_eq!(loaded_state, state);
}

#[test]
fn missing_save_loads_a_fresh_game() {
    let path = scratch_file("never_written.json");
    let (profile, state) = persistence::load_or_initial(&path);
    assert_eq!(profile, Profile::new());
    assert_eq!(state, GameState::new());
}

#[test]
fn corrupted_save_loads_a_fresh_game() {
    let path = scratch_file("corrupted.json");
    std::fs::write(&path, b"{ \"user_xp\": \"not a number\"").expect("write failed");

    let (profile, state) = persistence::load_or_initial(&path);
    persistence::clear_save(&path);

    assert_eq!(profile, Profile::new());
    assert_eq!(state, GameState::new());
}

#[test]
fn save_is_flat_json_the_shell_can_inspect() {
    let (profile, state) = played_game();
    let mut buffer = Vec::new();
    persistence::save_to(&mut buffer, &SaveData::capture(&profile, &state)).expect("save failed");

    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("not JSON");
    assert_eq!(value["user_name"], "trinity");
    assert_eq!(value["user_xp"], 65);
    assert_eq!(value["user_level"], 1);
    assert_eq!(value["user_title"], "Script Kiddie");
    assert_eq!(value["game_state"]["mission_step"], 3);
    assert_eq!(value["game_state"]["tools"][0], "nmap");
}
