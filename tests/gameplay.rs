//! Integration tests for the command interpreter and game-state engine.
//!
//! Exercises: raw command → interpret → (lines, effects, new state),
//! including mission progression, side missions, XP and access gating.
//!
//! All tests are pure logic — no terminal, no save files. The rng is
//! seeded so flavor output is deterministic.

use hacker_terminal::data::Profile;
use hacker_terminal::game::GameState;
use hacker_terminal::{interpret, CommandReport, Effect};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Helpers ────────────────────────────────────────────────────────────

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

/// Run a command sequence from a fresh game, returning the final profile,
/// state and the last command's report.
fn run(commands: &[&str]) -> (Profile, GameState, CommandReport) {
    let mut profile = Profile::new();
    let mut state = GameState::new();
    let mut rng = seeded_rng();
    let mut last = CommandReport {
        lines: Vec::new(),
        effects: Vec::new(),
        state: state.clone(),
    };
    for cmd in commands {
        last = interpret(cmd, &mut profile, state, &mut rng);
        state = last.state.clone();
    }
    (profile, state, last)
}

fn has_line(report: &CommandReport, needle: &str) -> bool {
    report.lines.iter().any(|l| l.contains(needle))
}

// ── Scanning and discovery ─────────────────────────────────────────────

#[test]
fn scan_requires_nmap() {
    let (_, state, report) = run(&["network_scan"]);
    assert!(has_line(&report, "nmap is not installed"));
    assert!(state.discovered_ips.is_empty());
}

#[test]
fn fresh_scan_discovers_three_hosts() {
    let (_, state, report) = run(&["install_tool nmap", "network_scan"]);
    assert_eq!(
        state.discovered_ips,
        vec!["192.168.0.42", "10.0.0.2", "192.168.1.5"]
    );
    assert!(has_line(&report, "Discovered 3 hosts"));
    assert!(!has_line(&report, "172.16.0.13"));
}

#[test]
fn first_scan_clears_reconnaissance() {
    let (_, state, report) = run(&["install_tool nmap", "network_scan"]);
    assert_eq!(state.mission_step, 1);
    assert!(has_line(&report, "✔ Step complete: Reconnaissance"));

    // Repeating the cleared step does not advance further
    let (_, state, report) = run(&["install_tool nmap", "network_scan", "network_scan"]);
    assert_eq!(state.mission_step, 1);
    assert!(!has_line(&report, "Step complete"));
}

// ── Connection and login ───────────────────────────────────────────────

#[test]
fn connect_before_scan_is_refused() {
    let (_, state, report) = run(&["connect 10.0.0.2"]);
    assert!(has_line(&report, "IP 10.0.0.2 not found. Run network_scan first!"));
    assert_eq!(state.connected_ip, None);
}

#[test]
fn secure_host_demands_its_exact_password() {
    let setup = ["install_tool nmap", "network_scan", "connect 10.0.0.2"];

    let (_, state, report) = run(&[&setup[..], &["login"][..]].concat());
    assert!(has_line(&report, "Password required. Use: login <password>"));
    assert!(!state.logged_in);

    let (_, state, report) = run(&[&setup[..], &["login hunter2"][..]].concat());
    assert!(has_line(&report, "Incorrect password for this host."));
    assert!(!state.logged_in);

    let (_, state, report) = run(&[&setup[..], &["login letmein"][..]].concat());
    assert!(has_line(&report, "Password accepted. 🔐 Access Granted to 10.0.0.2"));
    assert!(state.logged_in);
}

#[test]
fn open_host_logs_in_without_password() {
    let (_, state, report) = run(&[
        "install_tool nmap",
        "network_scan",
        "connect 192.168.0.42",
        "login",
    ]);
    assert!(state.logged_in);
    assert!(has_line(&report, "Username: hacker007"));
    assert!(has_line(&report, "🔐 Access Granted to 192.168.0.42"));
}

#[test]
fn reconnecting_resets_login() {
    let (_, state, _) = run(&[
        "install_tool nmap",
        "network_scan",
        "connect 192.168.0.42",
        "login",
        "connect 10.0.0.2",
    ]);
    assert_eq!(state.connected_ip.as_deref(), Some("10.0.0.2"));
    assert!(!state.logged_in);
}

// ── Filesystem access gating ───────────────────────────────────────────

#[test]
fn listing_and_reading_require_login() {
    let setup = ["install_tool nmap", "network_scan", "connect 192.168.0.42"];

    let (_, _, report) = run(&[&setup[..], &["ls"][..]].concat());
    assert!(has_line(&report, "Access denied. Please 'login' first."));

    let (_, _, report) = run(&[&setup[..], &["cat mission.txt"][..]].concat());
    assert!(has_line(&report, "Access denied. Connect and login first."));

    let (_, _, report) = run(&[&setup[..], &["cd secret_folder"][..]].concat());
    assert!(has_line(&report, "Access denied. Connect and login first."));
}

#[test]
fn ls_shows_files_and_folders_once_logged_in() {
    let (_, _, report) = run(&[
        "install_tool nmap",
        "network_scan",
        "connect 192.168.0.42",
        "login",
        "ls",
    ]);
    assert!(has_line(&report, "mission.txt"));
    assert!(has_line(&report, "passwords.txt"));
    assert!(has_line(&report, "secret_folder/"));
}

#[test]
fn cat_unknown_file_is_refused() {
    let (_, _, report) = run(&[
        "install_tool nmap",
        "network_scan",
        "connect 192.168.0.42",
        "login",
        "cat nothere.txt",
    ]);
    assert!(has_line(&report, "File not found: nothere.txt"));
}

#[test]
fn cd_tracks_per_host_directory() {
    let (_, state, report) = run(&[
        "install_tool nmap",
        "network_scan",
        "connect 192.168.0.42",
        "login",
        "cd secret_folder",
    ]);
    assert!(has_line(&report, "You entered the secret_folder directory."));
    assert_eq!(
        state.directories["192.168.0.42"].current_dir,
        "secret_folder"
    );
    assert_eq!(state.directories["10.0.0.2"].current_dir, "/");
}

#[test]
fn conf_files_render_numbered_lines() {
    let (_, _, report) = run(&[
        "install_tool nmap",
        "network_scan",
        "connect 10.0.0.2",
        "login letmein",
        "cat firewall.conf",
    ]);
    assert!(has_line(&report, "1: # Firewall rules"));
    assert!(has_line(&report, "2: ALLOW 22"));
}

// ── Tools ──────────────────────────────────────────────────────────────

#[test]
fn duplicate_install_is_an_error_not_a_noop() {
    let (_, state, report) = run(&["install_tool nmap", "install_tool nmap"]);
    assert!(has_line(&report, "nmap is already installed."));
    assert_eq!(state.tools, vec!["nmap"]);
}

#[test]
fn install_nmap_alias_installs_the_tool() {
    let (profile, state, report) = run(&["install_nmap"]);
    assert!(state.has_tool("nmap"));
    assert!(has_line(&report, "Installed: nmap v7.92"));
    assert_eq!(profile.xp, 10);
}

// ── Primary mission script ─────────────────────────────────────────────

#[test]
fn full_campaign_completes_every_step() {
    let (_, state, _) = run(&[
        "install_tool nmap",
        "network_scan",          // Reconnaissance
        "connect 192.168.0.42",
        "login",
        "cat passwords.txt",     // Credential Harvesting
        "connect 10.0.0.2",
        "login letmein",         // Infiltration
        "cat firewall.conf",     // Firewall Bypass
        "connect 192.168.1.5",
        "login",
        "cat malware.exe",       // Payload Deployment
        "network_scan",          // reveals the hidden server
        "connect 172.16.0.13",
        "login",
        "cat easter_egg.txt",    // Ghost Protocol
    ]);
    assert!(state.mission_complete());
    assert_eq!(state.discovered_ips.len(), 4);
}

#[test]
fn out_of_order_actions_never_advance_the_script() {
    // cat firewall.conf is step 4's trigger; at step 0 it must not fire
    let (_, state, _) = run(&[
        "install_tool nmap",
        "network_scan",
        "connect 10.0.0.2",
        "login letmein",
        "cat firewall.conf",
    ]);
    // login letmein cleared nothing (still at Credential Harvesting),
    // so firewall.conf cleared nothing either
    assert_eq!(state.mission_step, 1);
}

#[test]
fn mission_status_reports_the_current_objective() {
    let (_, _, report) = run(&["mission_status"]);
    assert!(has_line(&report, "Mission: Reconnaissance"));
    assert!(has_line(&report, "Step 1 of 6"));
}

// ── Side missions ──────────────────────────────────────────────────────

#[test]
fn side_mission_advances_in_order_and_completes_once() {
    // Step 2 first: no progress
    let (_, state, report) = run(&["binod"]);
    assert!(state.side_mission_progress.get(&1).is_none());
    assert!(!has_line(&report, "Side Mission"));

    // In order: progress, then exactly one completion with one XP award
    let (profile, state, report) = run(&["cat hack_logs", "binod"]);
    assert_eq!(state.side_mission_progress[&1], 2);
    assert!(has_line(&report, "✔ Side Mission Complete: Find Binod (+40 XP)"));
    assert_eq!(profile.xp, 40);

    let (profile, _, report) = run(&["cat hack_logs", "binod", "binod"]);
    assert!(!has_line(&report, "Side Mission Complete"));
    assert_eq!(profile.xp, 40);
}

#[test]
fn side_mission_listing_shows_progress() {
    let (_, _, report) = run(&["cat hack_logs", "side_missions"]);
    assert!(has_line(&report, "Side Mission 1: Find Binod"));
    assert!(has_line(&report, "Progress: Step 2 of 2"));
    assert!(has_line(&report, "Reward: 40 XP"));
}

// ── Profile, XP and identity ───────────────────────────────────────────

#[test]
fn whoami_sets_and_reports_the_hacker_name() {
    let (_, state, report) = run(&["whoami neo"]);
    assert_eq!(state.user_name.as_deref(), Some("neo"));
    assert!(has_line(&report, "Username set to: neo"));

    let (_, _, report) = run(&["whoami neo", "whoami"]);
    assert!(has_line(&report, "you are: neo | Level 1 - Script Kiddie [XP: 0/100]"));
}

#[test]
fn crossing_one_hundred_xp_levels_up() {
    // decrypt_file pays 30 XP; the fourth one crosses 100
    let (profile, _, report) = run(&[
        "decrypt_file",
        "decrypt_file",
        "decrypt_file",
        "decrypt_file",
    ]);
    assert_eq!(profile.level, 2);
    assert_eq!(profile.xp, 20);
    assert!(has_line(&report, "🎉 Level Up! You are now level 2 - Script Kiddie"));
}

// ── Flavor, effects and fallbacks ──────────────────────────────────────

#[test]
fn clear_is_an_effect_not_a_sentinel_line() {
    let (_, _, report) = run(&["clear"]);
    assert!(report.lines.is_empty());
    assert_eq!(report.effects, vec![Effect::ClearLog]);
}

#[test]
fn glitch_commands_carry_the_effect_out_of_band() {
    let (_, _, report) = run(&["rickroll"]);
    assert_eq!(report.effects, vec![Effect::Glitch]);
    assert!(report.lines.iter().all(|l| l != "GLITCH"));
}

#[test]
fn short_cryptic_input_gets_a_cinematic_response() {
    let (_, _, report) = run(&["xz"]);
    assert!(report.lines[1].starts_with("[SYSTEM]"));
    assert_eq!(report.effects.len(), 1);
    assert!(matches!(
        report.effects[0],
        Effect::Glitch | Effect::DangerFlash
    ));

    // Deterministic under the same seed
    let (_, _, again) = run(&["xz"]);
    assert_eq!(report.lines, again.lines);
    assert_eq!(report.effects, again.effects);
}

#[test]
fn long_unknown_input_is_told_off_plainly() {
    let (_, _, report) = run(&["frobnicate everything"]);
    assert_eq!(report.lines[0], "> frobnicate everything");
    assert_eq!(report.lines[1], "Unknown command: frobnicate everything");
    assert!(report.effects.is_empty());
}

#[test]
fn reset_restores_the_initial_world() {
    let (profile, state, report) = run(&[
        "install_tool nmap",
        "network_scan",
        "whoami neo",
        "reset",
    ]);
    assert_eq!(state, GameState::new());
    assert_eq!(profile, Profile::new());
    assert!(report.effects.contains(&Effect::ResetSave));
    assert!(has_line(&report, "All progress reset"));
}

#[test]
fn every_input_yields_a_report() {
    // Nothing the player types may crash the session
    for weird in ["", "   ", "💣", "cat", "cd", "login x y z", "CONNECT 1.2.3.4"] {
        let (_, _, report) = run(&[weird]);
        // A valid (possibly unchanged) state and some well-formed report
        assert!(report.lines.len() < 40);
    }
}
