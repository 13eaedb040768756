//! The command interpreter
//!
//! Single entry point for the presentation shell: [`interpret`] takes a raw
//! input line, the player's [`Profile`] and the current [`GameState`], and
//! returns output lines, presentation effects and the next state. Every
//! input produces a report; nothing the player types can end the session.

use super::missions::{self, SideMissionEvent};
use super::transitions;
use super::GameState;
use crate::data::{self, Profile, MISSION_STEPS, SIDE_MISSIONS, XP_PER_LEVEL};
use rand::Rng;

/// Presentation side effects, carried alongside the text rather than as
/// sentinel strings inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Wipe the visible log
    ClearLog,
    /// Play the glitch animation
    Glitch,
    /// Flash the danger border
    DangerFlash,
    /// Delete the persisted save
    ResetSave,
}

/// Everything one command produced
#[derive(Debug, Clone, PartialEq)]
pub struct CommandReport {
    /// Lines for the terminal log, in display order
    pub lines: Vec<String>,
    pub effects: Vec<Effect>,
    pub state: GameState,
}

impl CommandReport {
    fn from_state(state: GameState) -> Self {
        Self {
            lines: Vec::new(),
            effects: Vec::new(),
            state,
        }
    }
}

/// Cinematic responses to short cryptic input, with their screen effect
const CINEMATIC_INTRUSIONS: [(&str, Effect); 7] = [
    ("[SYSTEM] Unauthorized access detected...", Effect::DangerFlash),
    ("[SYSTEM] Signal lost. Attempting to reconnect...", Effect::Glitch),
    ("[SYSTEM] Intrusion countermeasures deployed.", Effect::DangerFlash),
    ("[SYSTEM] Tracing signal...", Effect::Glitch),
    ("[SYSTEM] You are not alone. Someone is watching...", Effect::Glitch),
    ("[SYSTEM] Command intercepted by sysadmin.", Effect::DangerFlash),
    ("[SYSTEM] Unknown protocol. System instability detected.", Effect::Glitch),
];

/// Interpret one command.
///
/// The rng drives flavor selection only (cinematic intrusion lines); pass a
/// seeded rng for deterministic output. XP flows through `profile`, never
/// through globals.
pub fn interpret(
    raw: &str,
    profile: &mut Profile,
    state: GameState,
    rng: &mut impl Rng,
) -> CommandReport {
    let cmd = raw.trim().to_string();
    if cmd.is_empty() {
        return CommandReport::from_state(state);
    }

    let mut report = dispatch(&cmd, profile, state, rng);

    // Side missions watch every raw command, whichever branch handled it
    let (state, events) = missions::check_side_missions(&report.state, &cmd);
    report.state = state;
    for event in &events {
        report.lines.push(event.line());
        if let SideMissionEvent::Completed { reward_xp, .. } = event {
            report.lines.extend(profile.award_xp(*reward_xp));
        }
    }

    report
}

fn dispatch(cmd: &str, profile: &mut Profile, state: GameState, rng: &mut impl Rng) -> CommandReport {
    let mut parts = cmd.split_whitespace();
    let base = parts.next().unwrap_or("");
    let args: Vec<&str> = parts.collect();

    // --- Interconnected, stateful commands (case-sensitive) ---
    if cmd == "network_scan" {
        return network_scan(profile, state);
    }
    if base == "connect" {
        return connect(&args, profile, state);
    }
    if base == "login" {
        return login(&args, profile, state);
    }
    if base == "ls" {
        return list_files(state);
    }
    if base == "cat" {
        return cat(&args, state);
    }
    if base == "cd" {
        return cd(&args, state);
    }
    if base == "install_tool" {
        return install_tool(&args, profile, state);
    }
    if cmd == "side_missions" || cmd == "bonus_missions" {
        return side_mission_status(state);
    }

    // whoami doubles as a name-setter when given an argument
    if base.eq_ignore_ascii_case("whoami") {
        return whoami(&args, profile, state);
    }

    canned(cmd, profile, state, rng)
}

fn network_scan(profile: &mut Profile, state: GameState) -> CommandReport {
    let mut report = CommandReport::from_state(state);
    report.lines.push("> network_scan".to_string());

    if !report.state.has_tool("nmap") {
        report
            .lines
            .push("nmap is not installed. Use 'install_tool nmap' first.".to_string());
        return report;
    }

    report.state = transitions::scan_network(&report.state);
    report.lines.extend([
        "Scanning [.]".to_string(),
        "Scanning [..]".to_string(),
        "Scanning [...]".to_string(),
    ]);
    for ip in &report.state.discovered_ips {
        let label = data::host_profile(ip)
            .map(|h| h.security.scan_label())
            .unwrap_or("??? suspicious");
        report.lines.push(format!("{} - {}", ip, label));
    }
    report.lines.push(format!(
        "Discovered {} hosts. Use connect <ip> to interact.",
        report.state.discovered_ips.len()
    ));

    report.state = advance_mission(&mut report.lines, &report.state, "network_scan", None);
    report.lines.extend(profile.award_xp(20));
    report
}

fn connect(args: &[&str], profile: &mut Profile, state: GameState) -> CommandReport {
    let mut report = CommandReport::from_state(state);
    let Some(&ip) = args.first() else {
        report.lines.push("> connect".to_string());
        report.lines.push("Usage: connect <ip>".to_string());
        return report;
    };

    report.lines.push(format!("> connect {}", ip));
    match transitions::connect(&report.state, ip) {
        Err(denied) => report.lines.push(denied.to_string()),
        Ok(connected) => {
            report.state = connected;
            report.lines.push(format!("Connecting to {}...", ip));
            report
                .lines
                .push("Connection established. Use 'login' to proceed.".to_string());
            report.state = advance_mission(&mut report.lines, &report.state, "connect", Some(ip));
            report.lines.extend(profile.award_xp(10));
        }
    }
    report
}

fn login(args: &[&str], profile: &mut Profile, state: GameState) -> CommandReport {
    let password = if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    };

    let mut report = CommandReport::from_state(state);
    report.lines.push("> login".to_string());

    let already_in = report.state.logged_in;
    match transitions::login(&report.state, password.as_deref()) {
        Err(denied) => report.lines.push(denied.to_string()),
        Ok(logged_in) => {
            let ip = logged_in.connected_ip.clone().unwrap_or_default();
            report.state = logged_in;
            if already_in {
                report.lines.push(format!("Already logged in to {}.", ip));
                return report;
            }
            if password.is_some() {
                report
                    .lines
                    .push(format!("Password accepted. 🔐 Access Granted to {}", ip));
            } else {
                report.lines.push("Username: hacker007".to_string());
                report.lines.push("Password: ********".to_string());
                report.lines.push(format!("🔐 Access Granted to {}", ip));
            }
            report.state =
                advance_mission(&mut report.lines, &report.state, "login", password.as_deref());
            report.lines.extend(profile.award_xp(15));
        }
    }
    report
}

fn list_files(state: GameState) -> CommandReport {
    let mut report = CommandReport::from_state(state);
    report.lines.push("> ls".to_string());

    match transitions::list_files(&report.state) {
        Err(denied) => report.lines.push(denied.to_string()),
        Ok(entries) => {
            let folders: Vec<String> = report
                .state
                .connected_ip
                .as_ref()
                .and_then(|ip| report.state.directories.get(ip))
                .map(|fs| fs.folders.clone())
                .unwrap_or_default();
            for entry in entries {
                report.lines.push(ls_row(&entry, &folders));
            }
        }
    }
    report
}

/// One `ls -l` styled row. Pure set dressing; the permissions are fiction.
fn ls_row(name: &str, folders: &[String]) -> String {
    if name.ends_with(".txt") {
        format!("-rw-r--r-- 1 root root  1.2K mission {}", name)
    } else if name.ends_with(".exe") {
        format!("-rwxr-xr-x 1 root root  2.1M bin {}", name)
    } else if name.ends_with(".conf") {
        format!("-rw------- 1 root root  512 config {}", name)
    } else if name.ends_with("_folder") || folders.iter().any(|f| f == name) {
        format!("drwxr-xr-x 2 root root 4.0K dir {}/", name)
    } else {
        format!("-rw-r--r-- 1 root root  512 misc {}", name)
    }
}

fn cat(args: &[&str], state: GameState) -> CommandReport {
    let filename = args.join(" ");
    let mut report = CommandReport::from_state(state);

    // Off-world easter eggs, readable from anywhere
    if filename == "weird_lunch_orders.txt" {
        report.lines = WEIRD_LUNCH_ORDERS.iter().map(|l| l.to_string()).collect();
        return report;
    }
    if filename == "/dev/random" {
        report.lines.extend([
            "> cat /dev/random".to_string(),
            "010101010101010101010101010101... (endless chaos)".to_string(),
            "Terminal: Enough randomness for today!".to_string(),
        ]);
        return report;
    }

    report.lines.push(format!("> cat {}", filename));
    match transitions::cat_file(&report.state, &filename) {
        Err(denied) => report.lines.push(denied.to_string()),
        Ok(content) => {
            if filename.ends_with(".conf") {
                for (i, line) in content.lines().enumerate() {
                    report.lines.push(format!("{}: {}", i + 1, line));
                }
            } else {
                report.lines.extend(content.lines().map(String::from));
            }
            report.state =
                advance_mission(&mut report.lines, &report.state, "cat", Some(filename.as_str()));
        }
    }
    report
}

fn cd(args: &[&str], state: GameState) -> CommandReport {
    let dirname = args.join(" ");
    let mut report = CommandReport::from_state(state);
    report.lines.push(format!("> cd {}", dirname));

    match transitions::change_directory(&report.state, &dirname) {
        Err(denied) => report.lines.push(denied.to_string()),
        Ok(changed) => {
            report.state = changed;
            report
                .lines
                .push(format!("You entered the {} directory.", dirname));
            report.state =
                advance_mission(&mut report.lines, &report.state, "cd", Some(dirname.as_str()));
        }
    }
    report
}

fn install_tool(args: &[&str], profile: &mut Profile, state: GameState) -> CommandReport {
    let mut report = CommandReport::from_state(state);
    let Some(&tool) = args.first() else {
        report.lines.push("> install_tool".to_string());
        report.lines.push("Usage: install_tool <toolname>".to_string());
        return report;
    };

    report.lines.push(format!("> install_tool {}", tool));
    match transitions::install_tool(&report.state, tool) {
        Err(denied) => report.lines.push(denied.to_string()),
        Ok(installed) => {
            report.state = installed;
            report.lines.push(format!("{} installed successfully!", tool));
            report.state =
                advance_mission(&mut report.lines, &report.state, "install_tool", Some(tool));
            report.lines.extend(profile.award_xp(5));
        }
    }
    report
}

fn side_mission_status(state: GameState) -> CommandReport {
    let mut report = CommandReport::from_state(state);
    report.lines.push("> side_missions".to_string());

    for (idx, mission) in SIDE_MISSIONS.iter().enumerate() {
        let progress = report
            .state
            .side_mission_progress
            .get(&mission.id)
            .copied()
            .unwrap_or(0);
        let total = mission.steps.len();
        let status = if progress >= total {
            "Completed!".to_string()
        } else {
            format!("Step {} of {}", progress + 1, total)
        };
        report.lines.extend([
            format!("Side Mission {}: {}", idx + 1, mission.title),
            format!("Objective: {}", mission.description),
            format!("Progress: {}", status),
            format!("Reward: {} XP", mission.reward_xp),
            "---".to_string(),
        ]);
    }
    report.lines.push(
        "Type the required commands to complete side missions. Progress is tracked automatically!"
            .to_string(),
    );
    report
}

fn whoami(args: &[&str], profile: &Profile, state: GameState) -> CommandReport {
    let mut report = CommandReport::from_state(state);

    if !args.is_empty() {
        let name = args.join(" ");
        report.lines.push(format!("> whoami {}", name));
        report.lines.push(format!(
            "Username set to: {} (now type 'whoami' to see your profile)",
            name
        ));
        report.state.user_name = Some(name);
    } else {
        report.lines.extend([
            "> whoami".to_string(),
            format!(
                "you are: {} | Level {} - {} [XP: {}/{}]",
                report.state.display_name(),
                profile.level,
                profile.title,
                profile.xp,
                XP_PER_LEVEL
            ),
            "💡 Hint: Type 'whoami <yourname>' to set your hacker name.".to_string(),
        ]);
    }
    report
}

/// Fixed responses matched case-insensitively on the whole command
fn canned(cmd: &str, profile: &mut Profile, state: GameState, rng: &mut impl Rng) -> CommandReport {
    let mut report = CommandReport::from_state(state);
    let lower = cmd.to_lowercase();

    match lower.as_str() {
        "ping 127.0.0.1" => {
            report.lines.extend([
                "> ping 127.0.0.1".to_string(),
                "Reply from 127.0.0.1: You're talking to yourself again.".to_string(),
            ]);
        }
        "decrypt_file" => {
            report.lines.extend([
                "> decrypt_file".to_string(),
                "🛡️ Decrypting file...".to_string(),
                "[██░░░░░░░░] 20%".to_string(),
                "[████░░░░░░] 40%".to_string(),
                "[██████░░░░] 60%".to_string(),
                "[████████░░] 80%".to_string(),
                "[██████████] 100%".to_string(),
                "✅ File Decrypted: weird_lunch_orders.txt".to_string(),
            ]);
            report.lines.extend(profile.award_xp(30));
        }
        "nmap" => {
            report.lines.extend(NMAP_REPORT.iter().map(|l| l.to_string()));
        }
        "install_nmap" => {
            report.lines.push("> install_nmap".to_string());
            match transitions::install_tool(&report.state, "nmap") {
                Err(denied) => report.lines.push(denied.to_string()),
                Ok(installed) => {
                    report.state = installed;
                    report.lines.extend([
                        "[░░░░░░░░░░] 0%".to_string(),
                        "[██░░░░░░░░] 20%".to_string(),
                        "[██████░░░░] 60%".to_string(),
                        "[██████████] 100%".to_string(),
                        "Installed: nmap v7.92".to_string(),
                    ]);
                    report.lines.extend(profile.award_xp(10));
                }
            }
        }
        "mission_status" => {
            report.lines.push("> mission_status".to_string());
            match MISSION_STEPS.get(report.state.mission_step) {
                Some(step) => report.lines.extend([
                    format!("Mission: {}", step.title),
                    format!("Objective: {}", step.description),
                    format!(
                        "Step {} of {}",
                        report.state.mission_step + 1,
                        MISSION_STEPS.len()
                    ),
                ]),
                None => report
                    .lines
                    .push("All missions complete! 🏆 You are a Digital Ghost!".to_string()),
            }
        }
        "banner" => {
            report.lines.extend([
                "> banner".to_string(),
                "====================".to_string(),
                "   HACKER SIM OS".to_string(),
                "====================".to_string(),
            ]);
        }
        "rickroll" => {
            report.lines.extend([
                "> rickroll".to_string(),
                "🎵 Never gonna give you up...".to_string(),
                "🎵 Never gonna let you down...".to_string(),
                "🎵 Never gonna run around and desert you...".to_string(),
            ]);
            report.effects.push(Effect::Glitch);
        }
        "sudo rm -rf /" => {
            report.lines.extend([
                "> sudo rm -rf /".to_string(),
                "💥 Self-destruct sequence initiated...".to_string(),
                "💣 Just kidding. Access denied. You're not that dangerous.".to_string(),
            ]);
            report.effects.push(Effect::Glitch);
        }
        "echo \"hello\"" => {
            report
                .lines
                .extend(["> echo \"hello\"".to_string(), "hello".to_string()]);
        }
        "tip" => {
            report.lines.extend([
                "> tip".to_string(),
                "💡 TIP: Use `ping` to test connectivity. It's like yelling into the void and hoping it yells back.".to_string(),
            ]);
        }
        "init matrix" => {
            report.lines.extend([
                "> init matrix".to_string(),
                "🌌 Welcome to The Matrix".to_string(),
                "Wake up, Neo...".to_string(),
                "⚠️ Simulation stabilized.".to_string(),
                "[SYSTEM] Unauthorized access detected...".to_string(),
                "[SYSTEM] Intrusion countermeasures deployed.".to_string(),
                "[SYSTEM] Tracing signal...".to_string(),
                "[SYSTEM] You are not alone. Someone is watching...".to_string(),
            ]);
            report.effects.push(Effect::Glitch);
        }
        "clear" => {
            report.effects.push(Effect::ClearLog);
        }
        "help" => {
            report.lines.extend(HELP_LINES.iter().map(|l| l.to_string()));
        }
        "binod" => {
            report.lines.extend([
                "> binod".to_string(),
                "BINOD spotted! 🔥".to_string(),
                "(You just made the terminal 10x cooler.)".to_string(),
            ]);
            report.effects.push(Effect::Glitch);
        }
        "bhai kya kar raha hai tu" => {
            report.lines.extend([
                "> bhai kya kar raha hai tu".to_string(),
                "Bhai: Coding kar raha hoon, tu tension na le! 💻".to_string(),
            ]);
        }
        "pawri ho rahi hai" => {
            report.lines.extend([
                "> pawri ho rahi hai".to_string(),
                "Yeh humari terminal hai...".to_string(),
                "Yeh hum hain...".to_string(),
                "Aur yeh pawri ho rahi hai! 🎉".to_string(),
            ]);
        }
        "so beautiful so elegant" => {
            report.lines.extend([
                "> so beautiful so elegant".to_string(),
                "Just looking like a wow! 😍".to_string(),
            ]);
        }
        "kya karu mai mar jau" => {
            report.lines.extend([
                "> kya karu mai mar jau?".to_string(),
                "Terminal: Chill bro, code likh! 😅".to_string(),
            ]);
        }
        "sudo make me a sandwich" => {
            report.lines.extend([
                "> sudo make me a sandwich".to_string(),
                "Okay. 🥪 (root privileges granted)".to_string(),
                "Just kidding, make it yourself! 😜".to_string(),
            ]);
        }
        "xyzzy" => {
            report.lines.extend([
                "> xyzzy".to_string(),
                "Nothing happens. (But you feel a little more mysterious.)".to_string(),
            ]);
        }
        "boss key" => {
            report.lines.extend([
                "> boss key".to_string(),
                "[BOSS MODE ACTIVATED]".to_string(),
                "Quick! Pretend you are working on something important...".to_string(),
            ]);
        }
        "reset" => {
            report.lines.extend([
                "> reset".to_string(),
                "All progress reset. Type 'help' to start over!".to_string(),
            ]);
            report.state = GameState::new();
            *profile = Profile::new();
            report.effects.push(Effect::ResetSave);
        }
        _ => fallback(cmd, &mut report, rng),
    }
    report
}

/// Unknown input. Short cryptic strings get a cinematic intrusion response;
/// anything else is told off plainly.
fn fallback(cmd: &str, report: &mut CommandReport, rng: &mut impl Rng) {
    let short_and_cryptic = cmd.len() <= 2 && cmd.chars().all(|c| c.is_ascii_alphanumeric());

    report.lines.push(format!("> {}", cmd));
    if short_and_cryptic {
        let (line, effect) = CINEMATIC_INTRUSIONS[rng.gen_range(0..CINEMATIC_INTRUSIONS.len())];
        report.lines.push(line.to_string());
        report.effects.push(effect);
    } else {
        report.lines.push(format!("Unknown command: {}", cmd));
    }
}

/// Re-derive primary mission progress from the just-executed parsed action,
/// appending the completion banner when a step clears.
fn advance_mission(
    lines: &mut Vec<String>,
    state: &GameState,
    command: &str,
    arg: Option<&str>,
) -> GameState {
    let (state, advance) = missions::check_mission(state, command, arg);
    if let Some(advance) = advance {
        lines.extend(advance.banner());
    }
    state
}

const WEIRD_LUNCH_ORDERS: [&str; 11] = [
    "> cat weird_lunch_orders.txt",
    "Parsing weird_lunch_orders.txt...",
    "1. Rajesh: 2 butter naan, paneer tikka, extra hari chutney (no onions, boss is watching)",
    "2. Priya: Dosa with Nutella (don't judge)",
    "3. Amit: Chole bhature, but bhature only, chole on the side, 1.5x spicy",
    "4. Suresh: Maggi with ketchup, and a chai in a steel glass",
    "5. Ritu: Salad (but actually eats samosa from Sharma ji's dabba)",
    "6. IT Guy: \"Bhai, kuch bhi chalega, bas thanda mil jaye!\"",
    "7. Boss: Quinoa salad, but steals a bite of everyone's gulab jamun",
    "",
    "# When lunch is life, but jugaad is real. 🇮🇳🥗🥪🍛",
];

const NMAP_REPORT: [&str; 13] = [
    "> nmap",
    "Starting Nmap 7.92 ( https://nmap.org ) at 2025-06-29",
    "Nmap scan report for 192.168.0.42 (open)",
    "22/tcp   open  ssh",
    "80/tcp   open  http",
    "443/tcp  closed https",
    "Nmap scan report for 10.0.0.2 (secure)",
    "22/tcp   open  ssh",
    "443/tcp  open  https",
    "Nmap scan report for 192.168.1.5 (suspicious)",
    "6667/tcp open  irc",
    "31337/tcp open  elite",
    "Nmap done: 3 IP addresses scanned in 0.42 seconds",
];

const HELP_LINES: [&str; 19] = [
    "> help",
    "Core commands:",
    "network_scan        - Scan the network for devices",
    "connect <ip>        - Connect to a discovered IP",
    "login               - Login to the connected host",
    "ls                  - List files on the host (after login)",
    "cat <file>          - View file contents (after login)",
    "cd <dir>            - Enter a directory (after login)",
    "whoami              - Show your hacker profile",
    "mission_status      - Show the current mission objective",
    "side_missions       - Show bonus objectives",
    "banner              - Display the system banner",
    "clear               - Clear the terminal",
    "install_tool <tool> - Install a tool (e.g., nmap)",
    "reset               - Reset all progress and start over",
    "",
    "Fun/Meme commands:",
    "decrypt_file, rickroll, sudo rm -rf /, echo \"hello\"",
    "binod, bhai kya kar raha hai tu, pawri ho rahi hai, so beautiful so elegant, kya karu mai mar jau, xyzzy, cat /dev/random, boss key",
];
